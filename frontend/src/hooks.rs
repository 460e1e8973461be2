use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{Element, Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::config::REVEAL_ROOT_MARGIN;
use crate::dom::{self, VisibilityObserver, WindowListener};
use crate::state::menu::{MenuController, MenuEvent};
use crate::state::nav;
use crate::state::reveal::Reveal;

/// Tracks whether the page has scrolled past most of the hero behind `hero`.
#[hook]
pub fn use_nav_scrolled(hero: NodeRef) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |hero: &NodeRef| {
                let hero = hero.clone();
                let mut last = None;
                let mut update = move || {
                    let height = hero
                        .cast::<HtmlElement>()
                        .map(|el| f64::from(el.offset_height()));
                    let scroll_y = match dom::scroll_y() {
                        Ok(y) => y,
                        Err(e) => {
                            warn!("Could not read scroll position: {}", e);
                            return;
                        }
                    };
                    // Hero not laid out yet; the next event will catch up.
                    let Some(next) = nav::is_scrolled(scroll_y, height) else {
                        return;
                    };
                    if last != Some(next) {
                        debug!("Nav scrolled = {} at {}px", next, scroll_y);
                        last = Some(next);
                    }
                    scrolled.set(next);
                };

                // Initial check
                update();

                let listener = WindowListener::attach("scroll", update)
                    .map_err(|e| warn!("Nav scroll tracking disabled: {}", e))
                    .ok();

                move || drop(listener)
            },
            hero,
        );
    }

    *scrolled
}

#[derive(Clone, PartialEq)]
pub struct MobileMenuHandle {
    pub is_open: bool,
    pub dispatch: Callback<MenuEvent>,
}

/// Mobile overlay state. The body scroll lock is taken and released inside
/// `dispatch`, before the re-render that shows or hides the overlay.
#[hook]
pub fn use_mobile_menu() -> MobileMenuHandle {
    let controller = use_mut_ref(|| {
        let body = dom::body()
            .map_err(|e| warn!("Scroll lock unavailable: {}", e))
            .ok();
        MenuController::new(body)
    });
    let is_open = {
        let controller = controller.clone();
        use_state_eq(move || controller.borrow().state().is_open())
    };

    let dispatch = {
        let controller = controller.clone();
        let is_open = is_open.clone();
        Callback::from(move |event: MenuEvent| {
            let open = controller.borrow_mut().dispatch(event);
            is_open.set(open);
        })
    };

    {
        let dispatch = dispatch.clone();
        use_event_with_window("resize", move |_: Event| match dom::viewport_width() {
            Ok(width) => dispatch.emit(MenuEvent::Resize { width }),
            Err(e) => warn!("Could not read viewport width: {}", e),
        });
    }

    use_effect_with_deps(
        move |_| move || controller.borrow_mut().teardown(),
        (),
    );

    MobileMenuHandle {
        is_open: *is_open,
        dispatch,
    }
}

/// Flips to `Revealed` the first time the element behind `node` scrolls into
/// view and stays there.
#[hook]
pub fn use_reveal(node: NodeRef) -> Reveal {
    let reveal = use_state_eq(Reveal::default);

    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut state = Reveal::Pending;
                let fallback = reveal.clone();
                let observer = node.cast::<Element>().and_then(|el| {
                    VisibilityObserver::observe(&el, REVEAL_ROOT_MARGIN, move |visible, observer| {
                        let next = state.observe(visible);
                        if next != state {
                            state = next;
                            reveal.set(next);
                            observer.disconnect();
                        }
                    })
                    .map_err(|e| {
                        warn!("Reveal observer failed, showing block: {}", e);
                        fallback.set(Reveal::Revealed);
                    })
                    .ok()
                });
                move || drop(observer)
            },
            node,
        );
    }

    *reveal
}

/// Reveals once, right after the first paint. Used by the hero.
#[hook]
pub fn use_mount_reveal() -> Reveal {
    let reveal = use_state_eq(Reveal::default);

    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                // One tick so the hidden frame paints and the transition runs.
                let timeout = Timeout::new(16, move || {
                    info!("Hero revealed");
                    reveal.set(Reveal::Revealed);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    *reveal
}

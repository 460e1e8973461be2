use log::{debug, info};

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::state::scroll_lock::{OverflowStyle, ScrollLock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    /// Hamburger pressed.
    Open,
    /// Backdrop, close icon or a link inside the overlay.
    Close,
    /// Viewport resized to this width.
    Resize { width: f64 },
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self == MobileMenu::Open
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Open => MobileMenu::Open,
            MenuEvent::Close => MobileMenu::Closed,
            // Overlay is mobile-only; growing past the breakpoint dismisses it.
            MenuEvent::Resize { width } if width > MOBILE_BREAKPOINT_PX => MobileMenu::Closed,
            MenuEvent::Resize { .. } => self,
        }
    }
}

/// Owns the menu state together with the scroll lock so that the lock is
/// taken and released in the same call that flips the state.
pub struct MenuController<T: OverflowStyle + Clone> {
    state: MobileMenu,
    target: Option<T>,
    lock: Option<ScrollLock<T>>,
}

impl<T: OverflowStyle + Clone> MenuController<T> {
    pub fn new(target: Option<T>) -> Self {
        Self {
            state: MobileMenu::default(),
            target,
            lock: None,
        }
    }

    pub fn state(&self) -> MobileMenu {
        self.state
    }

    /// Applies `event` and returns whether the menu is open afterwards.
    pub fn dispatch(&mut self, event: MenuEvent) -> bool {
        let next = self.state.apply(event);
        if next != self.state {
            info!("Mobile menu {:?} -> {:?}", self.state, next);
            self.lock = match next {
                MobileMenu::Open => self.target.clone().map(ScrollLock::acquire),
                MobileMenu::Closed => None,
            };
            self.state = next;
        }
        self.state.is_open()
    }

    /// Drops the lock without touching the state; used when the page unmounts.
    pub fn teardown(&mut self) {
        if self.lock.take().is_some() {
            debug!("Mobile menu torn down while open");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl OverflowStyle for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn starts_closed() {
        let controller = MenuController::new(Some(FakeBody::default()));
        assert_eq!(controller.state(), MobileMenu::Closed);
    }

    #[test]
    fn open_and_close_toggle_scroll() {
        let body = FakeBody::default();
        let mut controller = MenuController::new(Some(body.clone()));

        assert_eq!(body.overflow(), "");
        assert!(controller.dispatch(MenuEvent::Open));
        assert_eq!(body.overflow(), "hidden");

        assert!(!controller.dispatch(MenuEvent::Close));
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn repeated_open_keeps_single_lock() {
        let body = FakeBody::default();
        let mut controller = MenuController::new(Some(body.clone()));

        controller.dispatch(MenuEvent::Open);
        controller.dispatch(MenuEvent::Open);
        assert_eq!(body.overflow(), "hidden");

        controller.dispatch(MenuEvent::Close);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn resize_past_breakpoint_closes() {
        let body = FakeBody::default();
        let mut controller = MenuController::new(Some(body.clone()));

        controller.dispatch(MenuEvent::Open);
        assert!(controller.dispatch(MenuEvent::Resize { width: 400.0 }));
        assert!(controller.dispatch(MenuEvent::Resize { width: MOBILE_BREAKPOINT_PX }));
        assert_eq!(body.overflow(), "hidden");

        assert!(!controller.dispatch(MenuEvent::Resize { width: 1024.0 }));
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn teardown_releases_lock() {
        let body = FakeBody::default();
        let mut controller = MenuController::new(Some(body.clone()));

        controller.dispatch(MenuEvent::Open);
        controller.teardown();
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn missing_body_still_tracks_state() {
        let mut controller: MenuController<FakeBody> = MenuController::new(None);
        assert!(controller.dispatch(MenuEvent::Open));
        assert!(!controller.dispatch(MenuEvent::Close));
    }
}

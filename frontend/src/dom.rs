use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::error::DomError;
use crate::state::scroll_lock::OverflowStyle;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_width() -> Result<f64, DomError> {
    let width = window()?.inner_width()?;
    width
        .as_f64()
        .ok_or_else(|| DomError::Js("innerWidth is not a number".to_string()))
}

impl OverflowStyle for HtmlElement {
    fn overflow(&self) -> String {
        self.style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(e) = result {
            warn!("Failed to set body overflow: {}", DomError::from(e));
        }
    }
}

/// A window event listener that detaches itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn attach(event: &'static str, handler: impl FnMut() + 'static) -> Result<Self, DomError> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        debug!("Attached {} listener", event);
        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to detach {} listener: {}", self.event, DomError::from(e));
        } else {
            debug!("Detached {} listener", self.event);
        }
    }
}

/// Reports visibility of one element until dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// `on_change` gets whether the element intersects the viewport and the
    /// observer itself, so it can disconnect early.
    pub fn observe(
        target: &Element,
        root_margin: &str,
        mut on_change: impl FnMut(bool, &IntersectionObserver) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            on_change(visible, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

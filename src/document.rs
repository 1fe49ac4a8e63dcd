//! Page-wide side effects behind a small controller trait.
//!
//! Components never touch `document.body` or `window` scrolling directly.
//! They go through the [`DocumentController`] found in context, and the
//! effects that must be undone are held as guards that undo them on drop.

use std::fmt;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Event, ScrollBehavior, ScrollToOptions};

use crate::motion::Size;

const SCROLL_LOCK_CLASS: &str = "scroll-locked";

pub trait DocumentController {
    fn set_scroll_locked(&self, locked: bool);

    /// Absolute document offset of the element with `id`, if it exists.
    fn section_offset_top(&self, id: &str) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);

    /// Navigate the current document, e.g. to a `mailto:` URI.
    fn open_url(&self, url: &str);
}

/// The real browser window.
#[derive(Default)]
pub struct BrowserDocument;

impl BrowserDocument {
    fn toggle_body_class(locked: bool) -> Result<(), JsValue> {
        let body = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or_else(|| JsValue::from_str("document body unavailable"))?;
        let classes = body.class_list();
        if locked {
            classes.add_1(SCROLL_LOCK_CLASS)
        } else {
            classes.remove_1(SCROLL_LOCK_CLASS)
        }
    }
}

impl DocumentController for BrowserDocument {
    fn set_scroll_locked(&self, locked: bool) {
        if let Err(e) = Self::toggle_body_class(locked) {
            warn!("could not toggle scroll lock: {:?}", e);
        }
    }

    fn section_offset_top(&self, id: &str) -> Option<f64> {
        let window = window()?;
        let element = window.document()?.get_element_by_id(id)?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn open_url(&self, url: &str) {
        let result = window()
            .ok_or_else(|| JsValue::from_str("window unavailable"))
            .and_then(|w| w.location().set_href(url));
        if let Err(e) = result {
            warn!("could not open {}: {:?}", url, e);
        }
    }
}

/// Current inner size of the browser window, or zero outside a browser.
pub fn viewport_size() -> Size {
    let Some(window) = window() else {
        return Size::default();
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(width, height)
}

/// Shared handle to the controller, provided as Yew context at the root.
#[derive(Clone)]
pub struct DocumentHandle(pub Rc<dyn DocumentController>);

impl DocumentHandle {
    pub fn new(controller: impl DocumentController + 'static) -> Self {
        Self(Rc::new(controller))
    }
}

impl Default for DocumentHandle {
    fn default() -> Self {
        Self::new(BrowserDocument)
    }
}

impl PartialEq for DocumentHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DocumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DocumentHandle")
    }
}

impl std::ops::Deref for DocumentHandle {
    type Target = dyn DocumentController;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Page scrolling stays suppressed for as long as this guard lives.
pub struct ScrollLock {
    controller: Rc<dyn DocumentController>,
}

impl ScrollLock {
    pub fn acquire(handle: &DocumentHandle) -> Self {
        handle.0.set_scroll_locked(true);
        Self {
            controller: handle.0.clone(),
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.controller.set_scroll_locked(false);
    }
}

/// Window event listener that is removed when the guard drops.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(e) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DocumentController;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// Records every call instead of touching a browser.
    #[derive(Default)]
    pub struct RecordingDocument {
        pub locked: Cell<bool>,
        pub lock_changes: Cell<u32>,
        pub sections: HashMap<String, f64>,
        pub scrolls: RefCell<Vec<f64>>,
        pub opened: RefCell<Vec<String>>,
    }

    impl RecordingDocument {
        pub fn with_section(mut self, id: &str, top: f64) -> Self {
            self.sections.insert(id.to_string(), top);
            self
        }
    }

    impl DocumentController for RecordingDocument {
        fn set_scroll_locked(&self, locked: bool) {
            self.locked.set(locked);
            self.lock_changes.set(self.lock_changes.get() + 1);
        }

        fn section_offset_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }

        fn open_url(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingDocument;
    use super::*;

    #[test]
    fn scroll_lock_is_released_on_drop() {
        let doc = Rc::new(RecordingDocument::default());
        let handle = DocumentHandle(doc.clone());

        let lock = ScrollLock::acquire(&handle);
        assert!(doc.locked.get());

        drop(lock);
        assert!(!doc.locked.get());
        assert_eq!(doc.lock_changes.get(), 2);
    }

    #[test]
    fn handles_compare_by_identity() {
        let doc = Rc::new(RecordingDocument::default());
        let a = DocumentHandle(doc.clone());
        let b = DocumentHandle(doc);
        let other = DocumentHandle::new(RecordingDocument::default());
        assert_eq!(a, b);
        assert_ne!(a, other);
    }
}

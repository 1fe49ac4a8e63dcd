//! One-shot entrance animations triggered by scrolling an element into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Latches the first time an element is sufficiently visible.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    revealed: bool,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only for the observation that flips the latch.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !intersecting || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching a single element until it reveals.
///
/// Dropping the observer disconnects it and cancels a reveal that is still
/// waiting out its stagger delay.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl RevealObserver {
    /// Returns `None` when the node is not mounted; nothing is observed then.
    pub fn attach<F>(node: &NodeRef, threshold: f64, delay_ms: u32, on_reveal: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let element = node.cast::<Element>()?;
        let tracker = Rc::new(RefCell::new(RevealTracker::new(threshold)));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let on_reveal = Rc::new(on_reveal);

        let callback = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let first = tracker
                        .borrow_mut()
                        .observe(entry.is_intersecting(), entry.intersection_ratio());
                    if !first {
                        continue;
                    }
                    observer.unobserve(&entry.target());
                    if delay_ms == 0 {
                        (*on_reveal)();
                    } else {
                        let on_reveal = on_reveal.clone();
                        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || (*on_reveal)()));
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(&element);

        Some(Self {
            observer,
            _callback: callback,
            pending,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.pending.borrow_mut().take();
    }
}

/// Reports whether the element behind `node` has scrolled into view.
/// Once `true` it stays `true` for the lifetime of the component.
#[hook]
pub fn use_reveal(node: NodeRef, delay_ms: u32) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, delay_ms)| {
                let observer = if *revealed {
                    None
                } else {
                    let setter = revealed.setter();
                    RevealObserver::attach(node, config::REVEAL_THRESHOLD, *delay_ms, move || {
                        setter.set(true)
                    })
                };
                move || drop(observer)
            },
            (node, delay_ms),
        );
    }
    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_threshold_is_met() {
        let mut tracker = RevealTracker::new(0.1);
        assert!(!tracker.observe(false, 0.0));
        assert!(!tracker.observe(true, 0.05));
        assert!(!tracker.is_revealed());
    }

    #[test]
    fn reveals_exactly_once() {
        let mut tracker = RevealTracker::new(0.1);
        assert!(tracker.observe(true, 0.1));
        assert!(tracker.is_revealed());

        // Scrolling away and back never re-triggers.
        assert!(!tracker.observe(false, 0.0));
        assert!(!tracker.observe(true, 1.0));
        assert!(tracker.is_revealed());
    }

    #[test]
    fn ratio_without_intersection_does_not_count() {
        let mut tracker = RevealTracker::new(0.1);
        assert!(!tracker.observe(false, 0.5));
        assert!(!tracker.is_revealed());
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::reveal::{Intersection, RevealState};

/// Class the stylesheet keys entrance animations on.
pub const REVEALED_CLASS: &str = "is-revealed";

fn mark_revealed(el: &Element) {
    if let Err(e) = el.class_list().add_1(REVEALED_CLASS) {
        log::warn!("could not mark #{} revealed: {:?}", el.id(), e);
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches one section until it first scrolls into view.
///
/// Attaching to an absent element yields an inert observer. The underlying observer is
/// disconnected on `detach` or drop, whichever comes first.
pub struct RevealObserver {
    state: Rc<RefCell<RevealState>>,
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl RevealObserver {
    pub fn attach(element: Option<Element>, threshold: f64) -> Result<Self, JsValue> {
        let state = Rc::new(RefCell::new(RevealState::new(threshold)));
        let Some(element) = element else {
            log::debug!("reveal observer: target absent, nothing to observe");
            return Ok(Self { state, observer: None, _callback: None });
        };

        let callback: ObserverCallback = {
            let state = state.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let report = Intersection::new(entry.is_intersecting(), entry.intersection_ratio());
                    if state.borrow_mut().observe(report) {
                        let target = entry.target();
                        mark_revealed(&target);
                        // one-shot: nothing left to watch for
                        observer.unobserve(&target);
                        log::debug!("section #{} revealed", target.id());
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(&element);

        Ok(Self { state, observer: Some(observer), _callback: Some(callback) })
    }

    pub fn revealed(&self) -> bool {
        self.state.borrow().revealed()
    }

    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Stop observing. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Reveals a section after a fixed delay instead of on intersection (the hero, which is
/// already on screen at load).
pub struct RevealTimer {
    window: Window,
    state: Rc<RefCell<RevealState>>,
    handle: Option<i32>,
    _callback: Option<Closure<dyn FnMut()>>,
}

impl RevealTimer {
    pub fn arm(window: &Window, element: Option<Element>, delay_ms: i32) -> Result<Self, JsValue> {
        let state = Rc::new(RefCell::new(RevealState::new(0.0)));
        let Some(element) = element else {
            log::debug!("reveal timer: target absent, not arming");
            return Ok(Self { window: window.clone(), state, handle: None, _callback: None });
        };

        let callback = {
            let state = state.clone();
            Closure::wrap(Box::new(move || {
                if state.borrow_mut().force() {
                    mark_revealed(&element);
                }
            }) as Box<dyn FnMut()>)
        };
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms,
        )?;

        Ok(Self { window: window.clone(), state, handle: Some(handle), _callback: Some(callback) })
    }

    pub fn revealed(&self) -> bool {
        self.state.borrow().revealed()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::geometry::{Band, Viewport};
use crate::nav::AnchorScroller;
use crate::scroll::SectionLayout;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| "no window".into())
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| "no document".into())
}

/// Current inner size of the window; 0 on an axis the browser won't report.
pub fn viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// An event listener removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, f: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Section bands read from live bounding rectangles.
pub struct DomLayout<'a>(pub &'a Document);

impl SectionLayout for DomLayout<'_> {
    fn band(&self, id: &str) -> Option<Band> {
        let rect = self.0.get_element_by_id(id)?.get_bounding_client_rect();
        Some(Band::new(rect.top(), rect.bottom()))
    }
}

/// Smooth in-page scrolling to an anchor.
pub struct DomScroller<'a>(pub &'a Document);

impl AnchorScroller for DomScroller<'_> {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(el) = self.0.get_element_by_id(id) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_wasm::config::{ParticleConfig, ScrollConfig};
use folio_wasm::contact::{ContactError, ContactMessage, Field, SubmissionHandler};
use folio_wasm::wasm::contact::ContactBinding;
use folio_wasm::wasm::nav::NavBinding;
use folio_wasm::wasm::particles::ParticleBackdrop;
use folio_wasm::wasm::reveal::{RevealObserver, RevealTimer, REVEALED_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

fn body() -> HtmlElement {
    window().document().unwrap().body().unwrap()
}

fn append(tag: &str) -> web_sys::Element {
    let el = window().document().unwrap().create_element(tag).unwrap();
    body().append_child(&el).unwrap();
    el
}

fn prepend(tag: &str) -> web_sys::Element {
    let el = window().document().unwrap().create_element(tag).unwrap();
    body().prepend_with_node_1(&el).unwrap();
    el
}

/// Counts uncaught errors reported to `window.onerror` while alive.
struct ErrorCount {
    count: Rc<Cell<u32>>,
    _hook: Closure<dyn FnMut()>,
}

impl ErrorCount {
    fn install() -> Self {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let hook = Closure::wrap(Box::new(move || seen.set(seen.get() + 1)) as Box<dyn FnMut()>);
        window().set_onerror(Some(hook.as_ref().unchecked_ref()));
        Self { count, _hook: hook }
    }

    fn get(&self) -> u32 {
        self.count.get()
    }
}

impl Drop for ErrorCount {
    fn drop(&mut self) {
        window().set_onerror(None);
    }
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn observer_without_target_is_inert() {
    let mut obs = RevealObserver::attach(None, 0.1).unwrap();
    assert!(!obs.is_attached());
    assert!(!obs.revealed());
    obs.detach();
    obs.detach();
}

#[wasm_bindgen_test]
fn dropping_before_first_callback_is_clean() {
    let el = append("section");
    let obs = RevealObserver::attach(Some(el.clone()), 0.1).unwrap();
    assert!(obs.is_attached());
    drop(obs);
    el.remove();
}

#[wasm_bindgen_test(async)]
async fn visible_section_reveals_once() {
    let el = prepend("section");
    el.unchecked_ref::<HtmlElement>()
        .style()
        .set_property("height", "200px")
        .unwrap();
    window().scroll_to_with_x_and_y(0.0, 0.0);

    let obs = RevealObserver::attach(Some(el.clone()), 0.1).unwrap();
    sleep(100).await;

    assert!(obs.revealed());
    assert!(el.class_list().contains(REVEALED_CLASS));
    drop(obs);
    el.remove();
}

#[wasm_bindgen_test(async)]
async fn hero_timer_reveals_and_cancel_prevents_it() {
    let fired = append("section");
    let timer = RevealTimer::arm(&window(), Some(fired.clone()), 10).unwrap();

    let cancelled = append("section");
    let mut early = RevealTimer::arm(&window(), Some(cancelled.clone()), 10).unwrap();
    early.cancel();

    sleep(60).await;
    assert!(timer.revealed());
    assert!(fired.class_list().contains(REVEALED_CLASS));
    assert!(!early.revealed());
    assert!(!cancelled.class_list().contains(REVEALED_CLASS));

    fired.remove();
    cancelled.remove();
}

#[wasm_bindgen_test]
fn nav_binding_starts_on_home() {
    let document = window().document().unwrap();
    let nav = NavBinding::attach(&window(), &document, ScrollConfig::default()).unwrap();
    assert_eq!(nav.active_id(), "home");
    assert!(!nav.scrolled());
    assert!(!nav.menu_open());
}

#[wasm_bindgen_test(async)]
async fn backdrop_ticks_and_stops() {
    let canvas: HtmlCanvasElement = append("canvas").dyn_into().unwrap();
    let cfg = ParticleConfig { count: 12, interval_ms: 10, ..ParticleConfig::default() };

    let mut backdrop = ParticleBackdrop::start(&window(), canvas.clone(), &cfg).unwrap();
    assert_eq!(backdrop.len(), 12);
    assert!(backdrop.is_running());
    let before = backdrop.positions();
    sleep(50).await;

    assert!(backdrop.ticks() > 0);
    assert_ne!(backdrop.positions(), before);

    backdrop.stop();
    assert!(!backdrop.is_running());
    assert_eq!(backdrop.len(), 0);
    let stopped_at = backdrop.ticks();
    sleep(50).await;
    assert_eq!(backdrop.ticks(), stopped_at);
    canvas.remove();
}

#[wasm_bindgen_test(async)]
async fn dropped_backdrop_stops_ticking() {
    let canvas: HtmlCanvasElement = append("canvas").dyn_into().unwrap();
    let cfg = ParticleConfig { count: 4, interval_ms: 10, ..ParticleConfig::default() };
    let errors = ErrorCount::install();

    let backdrop = ParticleBackdrop::start(&window(), canvas.clone(), &cfg).unwrap();
    drop(backdrop);
    sleep(50).await;
    window().dispatch_event(&Event::new("resize").unwrap()).unwrap();

    assert_eq!(errors.get(), 0);
    canvas.remove();
}

struct Shared(Rc<RefCell<Vec<ContactMessage>>>);

impl SubmissionHandler for Shared {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), ContactError> {
        self.0.borrow_mut().push(message.clone());
        Ok(())
    }
}

fn contact_form() -> HtmlFormElement {
    let document = window().document().unwrap();
    let form: HtmlFormElement = append("form").dyn_into().unwrap();
    for name in ["name", "email", "subject"] {
        let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
        input.set_name(name);
        form.append_child(&input).unwrap();
    }
    let area = document.create_element("textarea").unwrap();
    area.set_attribute("name", "message").unwrap();
    form.append_child(&area).unwrap();
    fill(&form);
    form
}

fn fill(form: &HtmlFormElement) {
    for name in ["name", "email", "subject"] {
        let input: HtmlInputElement = form
            .query_selector(&format!("[name=\"{name}\"]"))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_value(&format!("{name}-value"));
    }
    let area: HtmlTextAreaElement = form.query_selector("textarea").unwrap().unwrap().dyn_into().unwrap();
    area.set_value("hello");
}

fn submit(form: &HtmlFormElement) {
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn contact_submit_clears_inputs() {
    let form = contact_form();
    let received = Rc::new(RefCell::new(Vec::new()));
    let binding = ContactBinding::attach(form.clone(), Box::new(Shared(received.clone()))).unwrap();

    submit(&form);

    assert_eq!(received.borrow().len(), 1);
    assert_eq!(received.borrow()[0].subject, "subject-value");
    assert_eq!(received.borrow()[0].message, "hello");
    assert_eq!(binding.value(Field::Name), "");
    let area: HtmlTextAreaElement = form.query_selector("textarea").unwrap().unwrap().dyn_into().unwrap();
    assert_eq!(area.value(), "");
    assert_eq!(form.get_attribute("data-status").as_deref(), Some("sent"));

    drop(binding);
    form.remove();
}

#[wasm_bindgen_test]
fn dropped_contact_binding_ignores_submit() {
    let form = contact_form();
    let received = Rc::new(RefCell::new(Vec::new()));
    let errors = ErrorCount::install();

    let binding = ContactBinding::attach(form.clone(), Box::new(Shared(received.clone()))).unwrap();
    drop(binding);
    form.dispatch_event(&Event::new("input").unwrap()).unwrap();
    submit(&form);

    assert!(received.borrow().is_empty());
    assert_eq!(form.get_attribute("data-status"), None);
    assert_eq!(errors.get(), 0);
    form.remove();
}

#[wasm_bindgen_test]
fn dropped_nav_binding_ignores_scroll() {
    let document = window().document().unwrap();
    let errors = ErrorCount::install();

    let nav = NavBinding::attach(&window(), &document, ScrollConfig::default()).unwrap();
    drop(nav);
    window().dispatch_event(&Event::new("scroll").unwrap()).unwrap();

    assert_eq!(errors.get(), 0);
}

#[wasm_bindgen_test]
fn remount_keeps_one_submit_listener() {
    let form = contact_form();
    form.set_id(folio_wasm::wasm::CONTACT_FORM_ID);
    let received = Rc::new(RefCell::new(Vec::new()));
    let errors = ErrorCount::install();

    folio_wasm::wasm::mount_with(Box::new(Shared(received.clone()))).unwrap();
    folio_wasm::wasm::mount_with(Box::new(Shared(received.clone()))).unwrap();
    submit(&form);
    assert_eq!(received.borrow().len(), 1);

    folio_wasm::wasm::unmount();
    fill(&form);
    submit(&form);
    assert_eq!(received.borrow().len(), 1);
    assert_eq!(errors.get(), 0);
    form.remove();
}

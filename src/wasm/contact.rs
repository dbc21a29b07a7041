use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::dom::Listener;
use crate::contact::{ContactForm, Field, SubmissionHandler};

/// `data-status` values set on the form after a submit attempt.
pub const STATUS_SENT: &str = "sent";
pub const STATUS_ERROR: &str = "error";

/// Mirrors the contact form's controls into a `ContactForm` and routes submits to a handler.
pub struct ContactBinding {
    form: Rc<RefCell<ContactForm>>,
    _listeners: Vec<Listener>,
}

impl ContactBinding {
    pub fn attach(element: HtmlFormElement, handler: Box<dyn SubmissionHandler>) -> Result<Self, JsValue> {
        let form = Rc::new(RefCell::new(ContactForm::new()));

        let input = {
            let form = form.clone();
            Listener::new(&element, "input", move |event| {
                if let Some((field, value)) = control_value(&event) {
                    form.borrow_mut().set(field, value);
                }
            })?
        };

        let submit = {
            let form = form.clone();
            let el = element.clone();
            let mut handler = handler;
            Listener::new(&element, "submit", move |event| {
                event.prevent_default();
                let result = {
                    let mut form = form.borrow_mut();
                    sync_from_dom(&el, &mut form);
                    form.submit(handler.as_mut())
                };
                match result {
                    Ok(_) => {
                        write_back(&el, &form.borrow());
                        let _ = el.set_attribute("data-status", STATUS_SENT);
                    }
                    Err(e) => {
                        log::warn!("contact form not sent: {e}");
                        let _ = el.set_attribute("data-status", STATUS_ERROR);
                    }
                }
            })?
        };

        Ok(Self { form, _listeners: vec![input, submit] })
    }

    pub fn value(&self, field: Field) -> String {
        self.form.borrow().get(field).to_owned()
    }
}

fn control_value(event: &Event) -> Option<(Field, String)> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Field::from_name(&input.name()).map(|f| (f, input.value()));
    }
    let area = target.dyn_ref::<HtmlTextAreaElement>()?;
    Field::from_name(&area.name()).map(|f| (f, area.value()))
}

fn control(el: &HtmlFormElement, field: Field) -> Option<web_sys::Element> {
    el.query_selector(&format!("[name=\"{field}\"]")).ok().flatten()
}

/// Catch values that changed without an `input` event (autofill in some browsers).
fn sync_from_dom(el: &HtmlFormElement, form: &mut ContactForm) {
    for field in Field::ALL {
        let Some(ctl) = control(el, field) else { continue };
        if let Some(input) = ctl.dyn_ref::<HtmlInputElement>() {
            form.set(field, input.value());
        } else if let Some(area) = ctl.dyn_ref::<HtmlTextAreaElement>() {
            form.set(field, area.value());
        }
    }
}

fn write_back(el: &HtmlFormElement, form: &ContactForm) {
    for field in Field::ALL {
        let Some(ctl) = control(el, field) else { continue };
        let value = form.get(field);
        if let Some(input) = ctl.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = ctl.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }
}

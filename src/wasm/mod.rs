use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlFormElement};

use crate::config::EngineConfig;
use crate::contact::{LogHandler, SubmissionHandler};
use crate::sections::{HOME, SECTIONS};

pub mod contact;
pub mod dom;
pub mod nav;
pub mod particles;
pub mod reveal;

pub const CANVAS_ID: &str = "particles";
pub const CONTACT_FORM_ID: &str = "contact-form";

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = dom::document()?
        .body()
        .and_then(|b| b.get_attribute("data-log-level"))
        .and_then(|l| l.parse().ok())
        .unwrap_or(log::Level::Info);
    console_log::init_with_level(level).ok();

    mount()
}

/// Mount (or remount) every binding on the current document.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_with(Box::new(LogHandler))
}

/// `mount` with a caller-supplied contact submission handler.
pub fn mount_with(handler: Box<dyn SubmissionHandler>) -> Result<(), JsValue> {
    // Release the previous page before acquiring anything new.
    unmount();
    let page = Page::mount(handler)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Release every observer, listener and timer held by the page.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::info!("page unmounted");
    }
}

/// Everything the page acquired on mount. Dropping it releases all of it.
pub struct Page {
    _reveals: Vec<reveal::RevealObserver>,
    _hero: reveal::RevealTimer,
    _nav: nav::NavBinding,
    _backdrop: Option<particles::ParticleBackdrop>,
    _contact: Option<contact::ContactBinding>,
}

impl Page {
    pub fn mount(handler: Box<dyn SubmissionHandler>) -> Result<Self, JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;
        let body = document.body().ok_or("no body")?;
        let cfg = EngineConfig::from_attributes(|key| body.get_attribute(&format!("data-{key}")));

        let hero = reveal::RevealTimer::arm(
            &window,
            document.get_element_by_id(HOME),
            cfg.reveal.hero_delay_ms,
        )?;

        let reveals = SECTIONS
            .iter()
            .filter(|s| s.id != HOME)
            .filter_map(|s| {
                // a failed observer costs one animation, not the rest of the page
                reveal::RevealObserver::attach(document.get_element_by_id(s.id), cfg.reveal.threshold)
                    .map_err(|e| log::warn!("reveal observer for #{} not attached: {e:?}", s.id))
                    .ok()
            })
            .collect::<Vec<_>>();

        let nav = nav::NavBinding::attach(&window, &document, cfg.scroll.clone())?;

        let backdrop = match document.get_element_by_id(CANVAS_ID) {
            Some(el) => {
                let canvas = el.dyn_into::<HtmlCanvasElement>()?;
                Some(particles::ParticleBackdrop::start(&window, canvas, &cfg.particles)?)
            }
            None => {
                log::debug!("no #{CANVAS_ID} canvas, particle backdrop disabled");
                None
            }
        };

        let contact = match document.get_element_by_id(CONTACT_FORM_ID) {
            Some(el) => {
                let form = el.dyn_into::<HtmlFormElement>()?;
                Some(contact::ContactBinding::attach(form, handler)?)
            }
            None => None,
        };

        log::info!(
            "page mounted: {} observed sections, backdrop={}, contact form={}",
            reveals.iter().filter(|r| r.is_attached()).count(),
            backdrop.is_some(),
            contact.is_some()
        );

        Ok(Self { _reveals: reveals, _hero: hero, _nav: nav, _backdrop: backdrop, _contact: contact })
    }
}

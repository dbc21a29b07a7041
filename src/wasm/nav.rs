use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::dom::{DomLayout, DomScroller, Listener};
use crate::config::ScrollConfig;
use crate::nav::{Navigation, CHROME_SCROLLED, CHROME_TOP};

pub const NAV_ID: &str = "nav";
pub const ACTIVE_CLASS: &str = "is-active";
pub const MENU_OPEN_CLASS: &str = "menu-open";
const GOTO_ATTR: &str = "data-goto";

/// Wires the navigation state to the document: the window scroll listener, clicks on every
/// `[data-goto]` element and the mobile menu toggle.
pub struct NavBinding {
    nav: Rc<RefCell<Navigation>>,
    _listeners: Vec<Listener>,
}

impl NavBinding {
    pub fn attach(window: &Window, document: &Document, config: ScrollConfig) -> Result<Self, JsValue> {
        let nav = Rc::new(RefCell::new(Navigation::new(config)));
        let mut listeners = Vec::new();

        {
            let nav = nav.clone();
            let win = window.clone();
            let doc = document.clone();
            listeners.push(Listener::new(window, "scroll", move |_| {
                let offset = win.scroll_y().unwrap_or(0.0);
                let update = nav.borrow_mut().on_scroll(offset, &DomLayout(&doc));
                if update.any() {
                    paint(&doc, &nav.borrow());
                }
            })?);
        }

        for el in goto_targets(document)? {
            let Some(id) = el.get_attribute(GOTO_ATTR) else { continue };
            let nav = nav.clone();
            let doc = document.clone();
            listeners.push(Listener::new(&el, "click", move |event| {
                event.prevent_default();
                nav.borrow_mut().goto(&id, &DomScroller(&doc));
                paint(&doc, &nav.borrow());
            })?);
        }

        if let Some(toggle) = document.query_selector("[data-menu-toggle]")? {
            let nav = nav.clone();
            let doc = document.clone();
            listeners.push(Listener::new(&toggle, "click", move |_| {
                nav.borrow_mut().toggle_menu();
                paint(&doc, &nav.borrow());
            })?);
        }

        paint(document, &nav.borrow());
        Ok(Self { nav, _listeners: listeners })
    }

    pub fn active_id(&self) -> &'static str {
        self.nav.borrow().tracker().active_id()
    }

    pub fn scrolled(&self) -> bool {
        self.nav.borrow().tracker().scrolled()
    }

    pub fn menu_open(&self) -> bool {
        self.nav.borrow().menu_open()
    }
}

fn goto_targets(document: &Document) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(&format!("[{GOTO_ATTR}]"))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// Push nav state into classes. Failures only cost styling, so they are logged.
fn paint(document: &Document, nav: &Navigation) {
    let result = (|| -> Result<(), JsValue> {
        if let Some(root) = document.get_element_by_id(NAV_ID) {
            let classes = root.class_list();
            let chrome = nav.chrome_class();
            classes.toggle_with_force(CHROME_SCROLLED, chrome == CHROME_SCROLLED)?;
            classes.toggle_with_force(CHROME_TOP, chrome == CHROME_TOP)?;
            classes.toggle_with_force(MENU_OPEN_CLASS, nav.menu_open())?;
        }
        for el in goto_targets(document)? {
            let active = el.get_attribute(GOTO_ATTR).is_some_and(|id| nav.is_active(&id));
            el.class_list().toggle_with_force(ACTIVE_CLASS, active)?;
        }
        Ok(())
    })();
    if let Err(e) = result {
        log::warn!("nav repaint failed: {e:?}");
    }
}

//! Navigation bar state: active-section highlight, chrome style, mobile menu, `goto`.

use crate::config::ScrollConfig;
use crate::scroll::{ScrollTracker, ScrollUpdate, SectionLayout};
use crate::sections::SECTIONS;

pub const CHROME_TOP: &str = "nav-top";
pub const CHROME_SCROLLED: &str = "nav-scrolled";

/// Scrolls an anchor into view.
pub trait AnchorScroller {
    /// Returns `false` when no element carries `id`.
    fn scroll_into_view(&self, id: &str) -> bool;
}

pub struct Navigation {
    tracker: ScrollTracker,
    menu_open: bool,
}

impl Navigation {
    pub fn new(config: ScrollConfig) -> Self {
        Self { tracker: ScrollTracker::new(SECTIONS, config), menu_open: false }
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn on_scroll<L: SectionLayout + ?Sized>(&mut self, offset: f64, layout: &L) -> ScrollUpdate {
        self.tracker.on_scroll(offset, layout)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.tracker.active_id() == id
    }

    pub fn chrome_class(&self) -> &'static str {
        if self.tracker.scrolled() { CHROME_SCROLLED } else { CHROME_TOP }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Smooth-scroll to `id` and close the mobile menu.
    ///
    /// The menu closes even when the anchor is missing. The active highlight is left to the
    /// scroll events the movement produces.
    pub fn goto<S: AnchorScroller + ?Sized>(&mut self, id: &str, scroller: &S) -> bool {
        self.menu_open = false;
        let found = scroller.scroll_into_view(id);
        if !found {
            log::debug!("goto: no anchor #{id}");
        }
        found
    }
}

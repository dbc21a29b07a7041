//! Active-section tracking driven by scroll events.

use crate::config::ScrollConfig;
use crate::geometry::Band;
use crate::sections::{Section, HOME};

/// Looks up the current viewport-relative band of a section anchor.
pub trait SectionLayout {
    /// `None` when no element with this id is rendered.
    fn band(&self, id: &str) -> Option<Band>;
}

impl<F> SectionLayout for F
where
    F: Fn(&str) -> Option<Band>,
{
    fn band(&self, id: &str) -> Option<Band> {
        self(id)
    }
}

/// What changed during one scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub active_changed: bool,
    pub scrolled_changed: bool,
}

impl ScrollUpdate {
    pub fn any(&self) -> bool {
        self.active_changed || self.scrolled_changed
    }
}

pub struct ScrollTracker {
    sections: &'static [Section],
    config: ScrollConfig,
    active: &'static str,
    scrolled: bool,
}

impl ScrollTracker {
    pub fn new(sections: &'static [Section], config: ScrollConfig) -> Self {
        Self { sections, config, active: HOME, scrolled: false }
    }

    pub fn active_id(&self) -> &'static str {
        self.active
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute both flags for vertical offset `offset`.
    ///
    /// The first section in list order whose band straddles the activation line wins.
    /// With no match the previous active id is kept.
    pub fn on_scroll<L: SectionLayout + ?Sized>(&mut self, offset: f64, layout: &L) -> ScrollUpdate {
        let mut update = ScrollUpdate::default();

        let scrolled = offset > self.config.scrolled_threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            update.scrolled_changed = true;
        }

        let line = self.config.activation_line;
        let hit = self
            .sections
            .iter()
            .find(|s| layout.band(s.id).is_some_and(|b| b.straddles(line)));

        if let Some(section) = hit {
            if section.id != self.active {
                log::debug!("active section {} -> {}", self.active, section.id);
                self.active = section.id;
                update.active_changed = true;
            }
        }

        update
    }
}

//! One-shot "has this section been seen" state.

/// A single intersection report for an observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl Intersection {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }
}

/// Monotonic reveal flag owned by one section.
#[derive(Clone, Debug)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, revealed: false }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection report. Returns `true` only for the report that flips the flag;
    /// once revealed, every later report (including leaving the viewport) is ignored.
    pub fn observe(&mut self, entry: Intersection) -> bool {
        if self.revealed {
            return false;
        }
        if entry.is_intersecting && entry.ratio >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Unconditional reveal, used by timer-driven sections. Same one-shot contract as `observe`.
    pub fn force(&mut self) -> bool {
        let flipped = !self.revealed;
        self.revealed = true;
        flipped
    }
}

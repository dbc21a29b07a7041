//! Viewport-relative geometry shared by the scroll tracker and the particle field.

/// Size of the visible area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Vertical span of an element's bounding box, measured from the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

impl Band {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the horizontal line `y` passes through this band (edges inclusive).
    #[inline]
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Euclidean wrap of `pos` into `[0, extent)`.
///
/// A non-positive (or NaN) extent has no valid interior, so the axis collapses to 0.
#[inline]
pub fn wrap(pos: f64, extent: f64) -> f64 {
    if !(extent > 0.0) {
        return 0.0;
    }
    let w = pos.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w < extent { w } else { 0.0 }
}

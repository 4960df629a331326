//! Debounced viewport size tracking.

use crate::constants::{RESIZE_MIN_HEIGHT_DELTA, RESIZE_MIN_WIDTH_DELTA};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Sizes are clamped to at least one pixel.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

/// Remembers the last committed ("stable") size and filters out small
/// changes such as a mobile browser toolbar showing or hiding.
#[derive(Clone, Copy, Debug)]
pub struct ViewportTracker {
    stable: ViewportSize,
}

impl ViewportTracker {
    pub fn new(initial: ViewportSize) -> Self {
        Self { stable: initial }
    }

    pub fn stable(&self) -> ViewportSize {
        self.stable
    }

    /// Whether `next` differs enough from the stable size to be handled.
    /// Both thresholds are exclusive: a change is minor when the width delta
    /// is below 60 and the height delta is below 80.
    pub fn is_significant(&self, next: ViewportSize) -> bool {
        let dw = (next.width - self.stable.width).abs();
        let dh = (next.height - self.stable.height).abs();
        !(dw < RESIZE_MIN_WIDTH_DELTA && dh < RESIZE_MIN_HEIGHT_DELTA)
    }

    pub fn commit(&mut self, size: ViewportSize) {
        self.stable = size;
    }
}

//! Index-based carousel state machine shared by every slider on the page.
//!
//! The DOM side feeds it requests with a millisecond timestamp and applies the
//! returned index; the transition lock is a deadline, not a timer.

use crate::breakpoint::Breakpoint;
use crate::constants::{SLIDER_TRANSITION_MS, SWIPE_MIN_DISTANCE_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SliderAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl SliderAxis {
    pub fn translate_fn(self) -> &'static str {
        match self {
            SliderAxis::Vertical => "translateY",
            SliderAxis::Horizontal => "translateX",
        }
    }
}

/// Selectors and timing for one slider instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub container_selector: &'static str,
    pub track_selector: &'static str,
    pub slide_selector: &'static str,
    pub dots_selector: &'static str,
    pub dot_class: &'static str,
    pub autoplay_ms_mobile: i32,
    pub autoplay_ms_desktop: i32,
    pub axis: SliderAxis,
}

impl SliderConfig {
    pub fn autoplay_ms(&self, bp: Breakpoint) -> i32 {
        if bp.is_mobile() {
            self.autoplay_ms_mobile
        } else {
            self.autoplay_ms_desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderRequest {
    Next,
    Previous,
    Jump(usize),
}

#[derive(Clone, Debug)]
pub struct SliderState {
    index: usize,
    total: usize,
    locked_until_ms: Option<f64>,
}

impl SliderState {
    /// `None` for an empty slider.
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self {
            index: 0,
            total,
            locked_until_ms: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_transitioning(&self, now_ms: f64) -> bool {
        matches!(self.locked_until_ms, Some(until) if now_ms < until)
    }

    /// Apply a navigation request. Rejected (returns `None`) while a previous
    /// transition is still running; otherwise returns the new index and
    /// locks further navigation for the transition duration.
    pub fn request(&mut self, req: SliderRequest, now_ms: f64) -> Option<usize> {
        if self.is_transitioning(now_ms) {
            return None;
        }
        let target = match req {
            SliderRequest::Next => self.index + 1,
            SliderRequest::Previous => self.index + self.total - 1,
            SliderRequest::Jump(i) => i,
        };
        self.index = target % self.total;
        self.locked_until_ms = Some(now_ms + SLIDER_TRANSITION_MS);
        Some(self.index)
    }
}

/// CSS transform placing slide `index` in view.
pub fn track_transform(axis: SliderAxis, index: usize) -> String {
    format!("{}(-{}%)", axis.translate_fn(), index * 100)
}

#[inline]
pub fn wheel_request(delta_y: f64) -> SliderRequest {
    if delta_y > 0.0 {
        SliderRequest::Next
    } else {
        SliderRequest::Previous
    }
}

/// Classify a touch gesture from its start and end points `(x, y)`.
/// Movement along the slider axis must exceed both the minimum distance and
/// the cross-axis movement; moving the finger up (or left) means next.
pub fn classify_swipe(axis: SliderAxis, start: (f64, f64), end: (f64, f64)) -> Option<SliderRequest> {
    let dx = start.0 - end.0;
    let dy = start.1 - end.1;
    let (along, across) = match axis {
        SliderAxis::Vertical => (dy, dx),
        SliderAxis::Horizontal => (dx, dy),
    };
    if along.abs() > across.abs() && along.abs() > SWIPE_MIN_DISTANCE_PX {
        Some(if along > 0.0 {
            SliderRequest::Next
        } else {
            SliderRequest::Previous
        })
    } else {
        None
    }
}

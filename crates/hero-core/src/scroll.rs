//! Scroll progress to model transform mapping.

use crate::breakpoint::{Breakpoint, ScrollPath};
use crate::constants::{SCROLL_ROTATION_BASE, SCROLL_SEGMENTS};
use crate::easing::Ease;
use crate::tween::{Axes, Property, TweenId, TweenSpec, Tweener};
use glam::Vec3;

/// Raw document scroll measurements in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Normalized scroll position in [0, 1].
    pub fn progress(&self) -> f32 {
        let max_scroll = (self.scroll_height - self.client_height).max(1.0);
        (self.scroll_top / max_scroll).clamp(0.0, 1.0) as f32
    }
}

/// Horizontal offset for a given progress on the breakpoint's path.
pub fn horizontal_target(path: ScrollPath, progress: f32, range: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    match path {
        ScrollPath::Sine => (p * std::f32::consts::TAU).sin() * range * 0.5,
        ScrollPath::Zigzag => zigzag(p, range),
    }
}

// Knots visited at each segment boundary: 0, -R, +R, -R, +R, -R, back to 0.
fn zigzag(p: f32, range: f32) -> f32 {
    const KNOTS: [f32; SCROLL_SEGMENTS + 1] = [0.0, -1.0, 1.0, -1.0, 1.0, -1.0, 0.0];
    let section = 1.0 / SCROLL_SEGMENTS as f32;
    let i = ((p / section) as usize).min(SCROLL_SEGMENTS - 1);
    let local = (p - i as f32 * section) / section;
    let a = KNOTS[i] * range;
    let b = KNOTS[i + 1] * range;
    a + (b - a) * local
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTargets {
    pub progress: f32,
    pub position: Vec3,
    pub rotation_x: f32,
}

pub fn scroll_targets(bp: Breakpoint, progress: f32) -> ScrollTargets {
    let profile = bp.profile();
    let scroll = &profile.scroll;
    let x = horizontal_target(scroll.path, progress, profile.animation.movement_range);
    ScrollTargets {
        progress,
        position: Vec3::new(
            x,
            -progress * scroll.vertical_multiplier,
            -progress * scroll.depth_multiplier,
        ),
        rotation_x: SCROLL_ROTATION_BASE + progress * scroll.rotation_multiplier,
    }
}

/// Gate allowing at most one scroll-driven transform tween in flight.
#[derive(Debug, Default)]
pub struct ScrollMapper {
    in_flight: Option<TweenId>,
}

impl ScrollMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Schedule tweens toward the targets for `metrics`, unless a previous
    /// scroll tween is still running (the event is dropped, not queued).
    pub fn on_scroll(
        &mut self,
        bp: Breakpoint,
        metrics: ScrollMetrics,
        tweener: &mut Tweener,
    ) -> Option<ScrollTargets> {
        if self.in_flight.is_some() {
            return None;
        }
        let targets = scroll_targets(bp, metrics.progress());
        let duration = bp.profile().scroll.tween_duration;
        let id = tweener.start(
            TweenSpec::new(Property::ModelPosition, Axes::all(targets.position), duration)
                .ease(Ease::Power1Out),
        );
        tweener.start(
            TweenSpec::new(
                Property::ModelRotation,
                Axes::x(targets.rotation_x),
                duration,
            )
            .ease(Ease::Power1Out),
        );
        self.in_flight = Some(id);
        Some(targets)
    }

    /// Clears the in-flight flag when the gating position tween has finished.
    pub fn on_tween_finished(&mut self, id: TweenId) {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }
    }
}

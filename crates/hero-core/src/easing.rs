//! Easing curves used by the tweener.

/// Ease-out curves in the "power" family: `PowerNOut` is `1 - (1 - t)^(N + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Default for tweens that don't name a curve.
    #[default]
    Power1Out,
    Power2Out,
}

impl Ease {
    /// Input is clamped to [0, 1]; output is 0 at t = 0 and exactly 1 at t = 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let omt = 1.0 - t;
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - omt * omt,
            Ease::Power2Out => 1.0 - omt * omt * omt,
        }
    }
}

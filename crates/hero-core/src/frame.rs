//! Render pump pacing.

/// Frame-rate ceiling for the render pump.
///
/// The host callback fires at display rate; work only runs once at least
/// `1000 / target_fps` ms have passed since the last executed frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLimiter {
    last_ms: f64,
}

impl FrameLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn interval_ms(target_fps: f64) -> f64 {
        1000.0 / target_fps.max(1.0)
    }

    /// Returns true (and records `now_ms`) when a frame should execute.
    pub fn ready(&mut self, now_ms: f64, target_fps: f64) -> bool {
        if now_ms - self.last_ms >= Self::interval_ms(target_fps) {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

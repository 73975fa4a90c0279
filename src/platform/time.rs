//! Frame clock
//!
//! Turns monotonically increasing timestamps (ms) into frame deltas. The
//! first frame after a (re)start has delta 0 so an uninitialised baseline
//! can never teleport anything.

/// Delta provider for the frame loop
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the baseline; the next tick yields 0
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Record a timestamp and return the non-negative delta (ms)
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) if now.is_finite() => (now - last).max(0.0) as f32,
            _ => 0.0,
        };
        if now.is_finite() {
            // Ignore timestamps that go backwards
            self.last = Some(self.last.map_or(now, |last| last.max(now)));
        }
        dt
    }
}

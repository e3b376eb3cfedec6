//! Frame clock.
//!
//! `draw_web()` fires at roughly 60fps with a variable delta. `FrameClock`
//! turns successive `performance.now()` readings into elapsed milliseconds for
//! the UI timers (particles, flash, toasts). The engine itself has no notion of
//! time.

/// Largest delta handed out for one frame. A backgrounded tab resumes with a
/// huge gap; clamping keeps timers from all expiring in one frame.
pub const MAX_FRAME_MS: f64 = 500.0;

#[derive(Debug, Default)]
pub struct FrameClock {
    /// Timestamp of the last update (ms), None before the first frame.
    last_timestamp: Option<f64>,
    /// Total clamped milliseconds handed out.
    pub elapsed_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a wall-clock timestamp. Returns the clamped delta since the
    /// previous call; the first frame yields 0.
    pub fn update(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        self.elapsed_ms += delta;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.update(1234.0), 0.0);
        assert_eq!(clock.elapsed_ms, 0.0);
    }

    #[test]
    fn steady_frames_accumulate() {
        let mut clock = FrameClock::new();
        clock.update(0.0);
        assert_eq!(clock.update(16.0), 16.0);
        assert_eq!(clock.update(32.0), 16.0);
        assert_eq!(clock.elapsed_ms, 32.0);
    }

    #[test]
    fn large_gap_is_clamped() {
        let mut clock = FrameClock::new();
        clock.update(0.0);
        // Tab backgrounded for 10 seconds
        assert_eq!(clock.update(10_000.0), MAX_FRAME_MS);
    }

    #[test]
    fn clock_going_backwards_yields_zero() {
        let mut clock = FrameClock::new();
        clock.update(100.0);
        assert_eq!(clock.update(50.0), 0.0);
        assert_eq!(clock.update(60.0), 10.0);
    }
}

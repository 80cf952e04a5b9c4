//! Frame timing
//!
//! Converts host timestamps (milliseconds, e.g. from `requestAnimationFrame`)
//! into per-tick elapsed seconds.

/// Tracks the previous frame's timestamp
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first call yields 0, as do
    /// timestamps that go backwards.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt as f32
    }

    /// Forget the previous timestamp (after the loop was suspended)
    pub fn restart(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12_345.0), 0.0);
    }

    #[test]
    fn test_measures_seconds() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        assert!((clock.tick(1016.0) - 0.016).abs() < 1e-6);
        assert!((clock.tick(1516.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(2000.0);
        assert_eq!(clock.tick(1500.0), 0.0);
        clock.restart();
        assert_eq!(clock.tick(9000.0), 0.0);
    }
}

//! Simulation clock.
//!
//! The only time source in the core. Attack cooldowns compare against
//! timestamps on this clock; spawn and invulnerability timers accumulate
//! the same deltas. Nothing reads wall-clock time, so a session replays
//! identically for the same seed and tick sequence.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    now_ms: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds of simulated time since the session started.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Advances by `delta_ms`; negative deltas are ignored.
    pub fn advance(&mut self, delta_ms: f64) {
        if delta_ms > 0.0 {
            self.now_ms += delta_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_accumulates() {
        let mut clock = SimClock::new();
        clock.advance(16.0);
        clock.advance(34.0);
        assert!((clock.now_ms() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut clock = SimClock::new();
        clock.advance(100.0);
        clock.advance(-50.0);
        clock.advance(f64::NAN);
        assert!((clock.now_ms() - 100.0).abs() < f64::EPSILON);
    }
}

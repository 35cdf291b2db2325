/// Minimum interval between two attacks of one attacker.
///
/// Stores the clock time of the last successful attack rather than a
/// countdown, so pacing does not depend on how the caller slices ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackCooldown {
    interval_ms: f64,
    last_attack_ms: Option<f64>,
}

impl AttackCooldown {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_attack_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn set_interval(&mut self, interval_ms: f64) {
        self.interval_ms = interval_ms;
    }

    pub fn ready(&self, now_ms: f64) -> bool {
        match self.last_attack_ms {
            Some(last) => now_ms - last >= self.interval_ms,
            None => true,
        }
    }

    pub fn mark(&mut self, now_ms: f64) {
        self.last_attack_ms = Some(now_ms);
    }

    /// Milliseconds until the next attack is allowed.
    pub fn remaining(&self, now_ms: f64) -> f64 {
        match self.last_attack_ms {
            Some(last) => (self.interval_ms - (now_ms - last)).max(0.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cooldown_is_ready() {
        assert!(AttackCooldown::new(1500.0).ready(0.0));
    }

    #[test]
    fn test_interval_enforced_inclusive() {
        let mut cd = AttackCooldown::new(1500.0);
        cd.mark(100.0);
        assert!(!cd.ready(1599.0));
        assert!(cd.ready(1600.0));
        assert_eq!(cd.remaining(1100.0), 500.0);
        assert_eq!(cd.remaining(5000.0), 0.0);
    }

    #[test]
    fn test_set_interval_applies_to_pending_cooldown() {
        let mut cd = AttackCooldown::new(500.0);
        cd.mark(0.0);
        cd.set_interval(250.0);
        assert!(cd.ready(250.0));
    }
}

//! Fixed-interval step gating
//!
//! The host calls `poll` on every refresh with the current time in
//! milliseconds. At most one step is granted per call; when a step is
//! granted the reference time keeps the leftover remainder so the cadence
//! does not drift. There is no catch-up after a stall.

use crate::consts::FPS;

#[derive(Debug, Clone)]
pub struct FixedStepClock {
    interval_ms: f64,
    last_ms: f64,
}

impl FixedStepClock {
    pub fn new(steps_per_second: u32, now_ms: f64) -> Self {
        Self {
            interval_ms: 1000.0 / f64::from(steps_per_second.max(1)),
            last_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Restart timing from `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }

    /// Returns true when a simulation step should run now
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.last_ms;
        if elapsed > self.interval_ms {
            self.last_ms = now_ms - elapsed % self.interval_ms;
            true
        } else {
            false
        }
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(FPS, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        let clock = FixedStepClock::default();
        assert!((clock.interval_ms() - 16.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_no_step_before_interval() {
        let mut clock = FixedStepClock::new(60, 0.0);
        assert!(!clock.poll(10.0));
        assert!(!clock.poll(16.0));
        assert!(clock.poll(17.0));
    }

    #[test]
    fn test_exact_interval_does_not_step() {
        let mut clock = FixedStepClock::new(10, 0.0);
        assert!(!clock.poll(100.0));
        assert!(clock.poll(100.5));
    }

    #[test]
    fn test_keeps_remainder() {
        let mut clock = FixedStepClock::new(10, 0.0);
        // 130ms elapsed: one step, reference moves to 100
        assert!(clock.poll(130.0));
        assert!(!clock.poll(199.0));
        assert!(clock.poll(201.0));
    }

    #[test]
    fn test_no_catch_up_after_stall() {
        let mut clock = FixedStepClock::new(10, 0.0);
        // Ten intervals late: still only one step for this call
        assert!(clock.poll(1050.0));
        assert!(!clock.poll(1050.0));
        assert!(!clock.poll(1099.0));
        assert!(clock.poll(1101.0));
    }

    #[test]
    fn test_reset() {
        let mut clock = FixedStepClock::new(10, 0.0);
        clock.reset(5000.0);
        assert!(!clock.poll(5050.0));
        assert!(clock.poll(5101.0));
    }
}

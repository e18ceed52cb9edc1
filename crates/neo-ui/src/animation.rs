//! Animation driver contract.
//!
//! Controls never schedule frames themselves. They hand a start value, an end
//! value and a length to an [`AnimationDriver`], which calls back with each
//! intermediate value and reports whether the animation finished.

use std::time::Duration;

/// Default length of control animations.
pub const DEFAULT_LENGTH: Duration = Duration::from_millis(250);

/// Drives a scalar from `from` to `to` over `length`.
pub trait AnimationDriver {
    /// Calls `on_value` for each intermediate value, ending with `to`.
    ///
    /// Returns `true` when the animation ran to completion, `false` if the
    /// driver cancelled it.
    fn animate(
        &mut self,
        name: &str,
        from: f32,
        to: f32,
        length: Duration,
        on_value: &mut dyn FnMut(f32),
    ) -> bool;
}

/// Synchronous linear driver that emits one value per `rate` tick.
///
/// Useful for tests and offline rendering; an interactive host plugs in a
/// driver tied to its frame clock instead.
#[derive(Debug, Clone)]
pub struct StepDriver {
    rate: Duration,
}

impl StepDriver {
    pub fn new(rate: Duration) -> Self {
        Self { rate }
    }

    /// Number of callbacks an animation of `length` produces.
    pub fn steps(&self, length: Duration) -> u32 {
        if self.rate.is_zero() {
            return 1;
        }
        let steps = length.as_secs_f64() / self.rate.as_secs_f64();
        (steps.ceil() as u32).max(1)
    }
}

impl Default for StepDriver {
    /// Ticks every 8 ms.
    fn default() -> Self {
        Self::new(Duration::from_millis(8))
    }
}

impl AnimationDriver for StepDriver {
    fn animate(
        &mut self,
        name: &str,
        from: f32,
        to: f32,
        length: Duration,
        on_value: &mut dyn FnMut(f32),
    ) -> bool {
        let steps = self.steps(length);
        log::debug!("animation `{name}`: {from} -> {to} in {steps} steps");

        for i in 1..steps {
            let t = i as f32 / steps as f32;
            on_value(from + (to - from) * t);
        }
        on_value(to);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_round_up() {
        let driver = StepDriver::default();
        assert_eq!(driver.steps(Duration::from_millis(250)), 32);
        assert_eq!(driver.steps(Duration::from_millis(8)), 1);
        assert_eq!(driver.steps(Duration::from_millis(1)), 1);
    }

    #[test]
    fn linear_values_end_exactly_at_target() {
        let mut driver = StepDriver::new(Duration::from_millis(10));
        let mut seen = Vec::new();
        let done = driver.animate("t", 0.0, 1.0, Duration::from_millis(40), &mut |v| seen.push(v));

        assert!(done);
        assert_eq!(seen, vec![0.25, 0.5, 0.75, 1.0]);
    }
}

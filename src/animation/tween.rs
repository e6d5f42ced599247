use std::time::Duration;

use super::{Animatable, Transition};

/// A timed, eased transition of a value from `start` to `target`.
///
/// Sampling is a pure function of the elapsed time since the tween began;
/// the tween holds no clock of its own.
#[derive(Clone, Debug)]
pub struct Tween<T: Animatable> {
    start: T,
    target: T,
    transition: Transition,
}

impl<T: Animatable> Tween<T> {
    pub fn new(start: T, target: T, transition: Transition) -> Self {
        Self {
            start,
            target,
            transition,
        }
    }

    /// Value after `elapsed`, clamped to `target` once the duration has passed
    pub fn sample(&self, elapsed: Duration) -> T {
        if self.is_finished(elapsed) {
            return self.target.clone();
        }
        let t = (elapsed_ms(elapsed) / self.transition.duration_ms as f64) as f32;
        let eased = self.transition.timing.evaluate(t);
        T::lerp(&self.start, &self.target, eased)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.transition.duration_ms <= 0.0
            || elapsed_ms(elapsed) >= self.transition.duration_ms as f64
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}

fn elapsed_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

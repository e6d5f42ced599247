//! Timing functions (easing curves) for tweens.
//!
//! A timing function maps normalized time `t` in `[0, 1]` onto an
//! interpolation factor. All curves here are explicit functions of time;
//! there is no simulated state.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::Ease`] - Gentle acceleration, `cubic-bezier(0.42, 0, 1, 1)`
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! ## Example
//!
//! ```
//! use likeburst::animation::TimingFunction;
//!
//! let burst = TimingFunction::CubicBezier(0.21, 0.61, 0.35, 1.0);
//! assert!(burst.evaluate(0.5) > 0.5);
//! ```

use std::sync::Arc;

/// Timing function that controls the tween curve
#[derive(Clone)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Standard inertial ease, equivalent to `cubic-bezier(0.42, 0, 1, 1)`
    Ease,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t, clamped to `[0, 1]`
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::Ease => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::Ease => write!(f, "Ease"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic bezier curve evaluation, assuming x1 and x2 lie in [0, 1].
/// Newton-Raphson on x(s) = t, with bisection when the slope flattens.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut current_t = t;
    let mut solved = false;
    for _ in 0..8 {
        let error = cubic_bezier_x(current_t, x1, x2) - t;
        if error.abs() < 1e-6 {
            solved = true;
            break;
        }
        let slope = cubic_bezier_slope(current_t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        current_t = (current_t - error / slope).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        current_t = t;
        for _ in 0..32 {
            let x = cubic_bezier_x(current_t, x1, x2);
            if (x - t).abs() < 1e-6 {
                break;
            }
            if x < t {
                lo = current_t;
            } else {
                hi = current_t;
            }
            current_t = (lo + hi) * 0.5;
        }
    }

    cubic_bezier_y(current_t, y1, y2)
}

fn cubic_bezier_x(t: f32, x1: f32, x2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

fn cubic_bezier_y(t: f32, y1: f32, y2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

fn cubic_bezier_slope(t: f32, x1: f32, x2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        let result = TimingFunction::EaseIn.evaluate(0.5);
        assert!(result < 0.5); // Should be slower at start
    }

    #[test]
    fn test_ease_out() {
        let result = TimingFunction::EaseOut.evaluate(0.5);
        assert!(result > 0.5); // Should be faster at start
    }

    #[test]
    fn test_bezier_endpoints_exact() {
        let burst = TimingFunction::CubicBezier(0.21, 0.61, 0.35, 1.0);
        assert_eq!(burst.evaluate(0.0), 0.0);
        assert_eq!(burst.evaluate(1.0), 1.0);
        assert_eq!(TimingFunction::Ease.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_bezier_is_monotonic() {
        for timing in [
            TimingFunction::CubicBezier(0.21, 0.61, 0.35, 1.0),
            TimingFunction::Ease,
        ] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = timing.evaluate(i as f32 / 100.0);
                assert!(v + 1e-4 >= prev, "{:?} not monotonic at {}", timing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_starts_slow() {
        assert!(TimingFunction::Ease.evaluate(0.25) < 0.25);
    }

    #[test]
    fn test_evaluate_clamps_input() {
        assert_eq!(TimingFunction::Linear.evaluate(-1.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(2.0), 1.0);
    }
}

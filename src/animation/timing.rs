//! Timing functions (easing curves) for fixed-duration animations.
//!
//! A timing function maps normalized time `t` in `[0, 1]` to an
//! interpolation factor. Springs do not go through here: they are integrated
//! in real time by [`SpringDriver`](super::SpringDriver).
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! ## Example
//!
//! ```
//! use landing_motion::animation::TimingFunction;
//!
//! let ease = TimingFunction::REVEAL;
//! assert!(ease.evaluate(0.5) > 0.5);
//! ```

use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    #[default]
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// The fast-out curve used by section reveals and staggered lists.
    pub const REVEAL: Self = TimingFunction::CubicBezier(0.17, 0.55, 0.55, 1.0);

    /// Evaluate the timing function at time t (0.0 to 1.0)
    /// Returns the interpolation factor (can exceed [0, 1] for overshoot)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
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

/// Cubic bezier curve evaluation.
/// Assumes x1, x2 are in [0, 1] so x(t) is monotonic.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson on x(t) = x, falling back to bisection on flat slopes
    let mut current_t = x;
    for _ in 0..8 {
        let error = cubic_bezier_component(current_t, x1, x2) - x;
        if error.abs() < 1e-6 {
            return cubic_bezier_component(current_t, y1, y2);
        }
        let slope = cubic_bezier_slope(current_t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        current_t = (current_t - error / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    current_t = x;
    for _ in 0..32 {
        let value = cubic_bezier_component(current_t, x1, x2);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = current_t;
        } else {
            hi = current_t;
        }
        current_t = (lo + hi) * 0.5;
    }
    cubic_bezier_component(current_t, y1, y2)
}

/// One axis of a bezier curve anchored at 0 and 1.
fn cubic_bezier_component(t: f32, p1: f32, p2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
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
    fn test_default_is_ease_out() {
        let ease = TimingFunction::default();
        assert_eq!(format!("{:?}", ease), "EaseOut");
        assert_eq!(ease.evaluate(0.3), TimingFunction::EaseOut.evaluate(0.3));
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(TimingFunction::Linear.evaluate(-1.0), 0.0);
        assert_eq!(TimingFunction::EaseInOut.evaluate(3.0), 1.0);
    }

    #[test]
    fn test_reveal_curve_endpoints() {
        let ease = TimingFunction::REVEAL;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_reveal_curve_is_monotonic_and_front_loaded() {
        let ease = TimingFunction::REVEAL;
        let mut prev = 0.0;
        for i in 1..=100 {
            let value = ease.evaluate(i as f32 / 100.0);
            assert!(value >= prev - 1e-5, "curve went backwards at step {}", i);
            prev = value;
        }
        assert!(ease.evaluate(0.25) > 0.4);
    }

    #[test]
    fn test_linear_bezier_matches_linear() {
        let bezier = TimingFunction::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((bezier.evaluate(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_custom() {
        let step = TimingFunction::custom(|t| if t < 0.5 { 0.0 } else { 1.0 });
        assert_eq!(step.evaluate(0.25), 0.0);
        assert_eq!(step.evaluate(0.75), 1.0);
        assert_eq!(format!("{:?}", step), "Custom");
    }
}

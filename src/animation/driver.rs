//! Interpolators that move a single numeric value toward a target.
//!
//! A driver is a pure strategy: `step(state, target, dt) -> state`. The
//! ticker owns its [`AnimationState`] and calls the driver once per frame
//! until the returned state reports `settled`.

use super::spring::{integrate, SpringConfig, MAX_FRAME_DT};
use super::{Animatable, TimingFunction};

/// Distance and speed under which a spring counts as at rest.
pub const SETTLE_THRESHOLD: f64 = 0.01;

/// Mutable animation state for one value. Never shared between tickers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Current position
    pub current: f64,
    /// Current rate of change, in units per second
    pub velocity: f64,
    /// Value the animation started from
    pub origin: f64,
    /// Seconds of animation time consumed so far
    pub elapsed: f32,
    /// Whether the value has converged on the target
    pub settled: bool,
}

impl AnimationState {
    /// State at rest at zero.
    pub const fn new() -> Self {
        Self::at(0.0)
    }

    /// State at rest at `value`, not yet settled on any target.
    pub const fn at(value: f64) -> Self {
        Self {
            current: value,
            velocity: 0.0,
            origin: value,
            elapsed: 0.0,
            settled: false,
        }
    }

    /// Snap onto `target` and stop.
    pub fn settle_at(self, target: f64) -> Self {
        Self {
            current: target,
            velocity: 0.0,
            settled: true,
            ..self
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Strategy that advances an [`AnimationState`] by one frame.
pub trait AnimationDriver {
    /// Advance `state` toward `target` by `dt` seconds.
    ///
    /// A settled state is returned unchanged.
    fn step(&self, state: AnimationState, target: f64, dt: f32) -> AnimationState;
}

impl<D: AnimationDriver + ?Sized> AnimationDriver for Box<D> {
    fn step(&self, state: AnimationState, target: f64, dt: f32) -> AnimationState {
        (**self).step(state, target, dt)
    }
}

impl<D: AnimationDriver + ?Sized> AnimationDriver for &D {
    fn step(&self, state: AnimationState, target: f64, dt: f32) -> AnimationState {
        (**self).step(state, target, dt)
    }
}

/// Damped spring pulling the value toward its target.
///
/// Converges in real time, independent of any duration; may overshoot when
/// underdamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringDriver {
    pub config: SpringConfig,
}

impl SpringDriver {
    pub fn new(config: SpringConfig) -> Self {
        Self { config }
    }
}

impl AnimationDriver for SpringDriver {
    fn step(&self, state: AnimationState, target: f64, dt: f32) -> AnimationState {
        if state.settled {
            return state;
        }
        if !self.config.is_valid() {
            log::warn!("invalid spring {:?}, jumping to target", self.config);
            return state.settle_at(target);
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let (current, velocity) = integrate(state.current, state.velocity, target, dt, &self.config);
        let next = AnimationState {
            current,
            velocity,
            elapsed: state.elapsed + dt,
            ..state
        };

        if (target - current).abs() < SETTLE_THRESHOLD && velocity.abs() < SETTLE_THRESHOLD {
            next.settle_at(target)
        } else {
            next
        }
    }
}

/// Fixed-duration eased interpolation from the state's origin to the target.
#[derive(Clone, Debug)]
pub struct TweenDriver {
    /// Duration in seconds
    pub duration: f32,
    pub timing: TimingFunction,
}

impl TweenDriver {
    pub fn new(duration: f32, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }

    fn progress(&self, elapsed: f32) -> f32 {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).min(1.0)
    }
}

impl AnimationDriver for TweenDriver {
    fn step(&self, state: AnimationState, target: f64, dt: f32) -> AnimationState {
        if state.settled {
            return state;
        }

        let dt = dt.max(0.0);
        let elapsed = state.elapsed + dt;
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return AnimationState { elapsed, ..state }.settle_at(target);
        }

        let current = f64::lerp(&state.origin, &target, self.timing.evaluate(t));
        let velocity = if dt > 0.0 {
            (current - state.current) / f64::from(dt)
        } else {
            state.velocity
        };

        AnimationState {
            current,
            velocity,
            elapsed,
            ..state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_to_rest(driver: &dyn AnimationDriver, target: f64) -> (AnimationState, usize) {
        let mut state = AnimationState::new();
        for frame in 0..10_000 {
            state = driver.step(state, target, FRAME);
            if state.settled {
                return (state, frame + 1);
            }
        }
        panic!("driver never settled on {}", target);
    }

    #[test]
    fn test_spring_settles_and_snaps() {
        let (state, frames) = run_to_rest(&SpringDriver::default(), 200.0);
        assert_eq!(state.current, 200.0);
        assert_eq!(state.velocity, 0.0);
        // ~6s of animation for the overdamped counter spring
        assert!(frames > 60 && frames < 900, "took {} frames", frames);
    }

    #[test]
    fn test_spring_settles_on_large_targets() {
        for target in [5_000.0, 1_000_000.0, 16_777_217.0, f64::from(u32::MAX)] {
            let (state, _) = run_to_rest(&SpringDriver::default(), target);
            assert_eq!(state.current, target);
        }
    }

    #[test]
    fn test_spring_zero_target_settles_immediately() {
        let state = SpringDriver::default().step(AnimationState::new(), 0.0, FRAME);
        assert!(state.settled);
        assert_eq!(state.current, 0.0);
    }

    #[test]
    fn test_settled_state_is_unchanged() {
        let settled = AnimationState::new().settle_at(50.0);
        let driver = SpringDriver::new(SpringConfig::BOUNCY);
        assert_eq!(driver.step(settled, 80.0, FRAME), settled);
    }

    #[test]
    fn test_bouncy_spring_overshoots_then_settles() {
        let driver = SpringDriver::new(SpringConfig::BOUNCY);
        let mut state = AnimationState::new();
        let mut max: f64 = 0.0;
        while !state.settled {
            state = driver.step(state, 100.0, FRAME);
            max = max.max(state.current);
        }
        assert!(max > 100.0);
        assert_eq!(state.current, 100.0);
    }

    #[test]
    fn test_invalid_spring_jumps_to_target() {
        let driver = SpringDriver::new(SpringConfig {
            mass: -1.0,
            ..SpringConfig::TICKER
        });
        let state = driver.step(AnimationState::new(), 42.0, FRAME);
        assert!(state.settled);
        assert_eq!(state.current, 42.0);
    }

    #[test]
    fn test_tween_finishes_on_duration() {
        let driver = TweenDriver::new(0.5, TimingFunction::Linear);
        let mut state = AnimationState::new();

        state = driver.step(state, 100.0, 0.25);
        assert!(!state.settled);
        assert!((state.current - 50.0).abs() < 1e-3);

        state = driver.step(state, 100.0, 0.25);
        assert!(state.settled);
        assert_eq!(state.current, 100.0);
    }

    #[test]
    fn test_tween_with_zero_duration_jumps() {
        let driver = TweenDriver::new(0.0, TimingFunction::EaseOut);
        let state = driver.step(AnimationState::new(), 7.0, FRAME);
        assert!(state.settled);
        assert_eq!(state.current, 7.0);
    }

    #[test]
    fn test_boxed_driver_is_swappable() {
        let drivers: Vec<Box<dyn AnimationDriver>> = vec![
            Box::new(SpringDriver::default()),
            Box::new(TweenDriver::new(1.0, TimingFunction::EaseInOut)),
        ];
        for driver in &drivers {
            let (state, _) = run_to_rest(driver, 98.0);
            assert_eq!(state.current, 98.0);
        }
    }
}

mod animatable;
pub mod driver;
mod spring;
mod timing;

use std::time::Duration;

pub use animatable::Animatable;
pub use driver::{AnimationDriver, AnimationState, SpringDriver, TweenDriver, SETTLE_THRESHOLD};
pub use spring::{SpringConfig, MAX_FRAME_DT, MAX_SUBSTEP};
pub use timing::TimingFunction;

/// Configuration for a fixed-duration animation that starts after a delay
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation
    pub duration: Duration,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Delay before animation starts
    pub delay: Duration,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self {
            duration,
            timing,
            delay: Duration::ZERO,
        }
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Eased progress `elapsed` after the transition was triggered.
    ///
    /// Zero during the delay, one once the duration has run out.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.timing.evaluate(t)
    }

    /// Whether the transition has completed `elapsed` after being triggered.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }

    /// A tween driver running this transition's curve (the delay is not part
    /// of the driver and has to be honoured by the caller).
    pub fn driver(&self) -> TweenDriver {
        TweenDriver::new(self.duration.as_secs_f32(), self.timing.clone())
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Duration::from_millis(800), TimingFunction::REVEAL)
    }
}

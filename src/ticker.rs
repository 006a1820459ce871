//! Animated number counter.
//!
//! A [`NumberTicker`] owns everything one on-screen counter needs: the parsed
//! target, a [`VisibilityGate`], its own [`AnimationState`] and the driver
//! that steps it. The host feeds it visibility signals and frame times and
//! gets back the text to display.
//!
//! ```
//! use std::time::Duration;
//! use landing_motion::ticker::{NumberTicker, TickerSpec};
//!
//! let mut ticker = NumberTicker::new(TickerSpec::new("98%").delay_secs(0.2));
//! assert_eq!(ticker.text(), "0%");
//!
//! ticker.signal_visible(true, Duration::ZERO);
//! assert!(!ticker.advance(Duration::from_millis(100)).is_changed());
//! ```

use std::time::Duration;

use crate::animation::{AnimationDriver, AnimationState, SpringConfig, SpringDriver};
use crate::value::{ParseError, ParsedTarget};
use crate::visibility::{Rect, RootMargin, VisibilityGate};

/// Input for one counter: the string to count up to and its stagger delay.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSpec {
    /// Display string with one run of digits, e.g. `"200+"`
    pub display_value: String,
    /// Wait between becoming visible and starting to count
    pub start_delay: Duration,
}

impl TickerSpec {
    pub fn new(display_value: impl Into<String>) -> Self {
        Self {
            display_value: display_value.into(),
            start_delay: Duration::ZERO,
        }
    }

    /// Set the delay before counting starts
    pub fn delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Set the delay in seconds. Negative or non-finite values mean no delay.
    pub fn delay_secs(self, secs: f32) -> Self {
        let delay = Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO);
        self.delay(delay)
    }
}

/// Result of advancing a ticker, indicating whether the text changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Text did not change (not running, or the rounded value is the same)
    NoChange,
    /// Text changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }

    pub fn changed(self) -> Option<T> {
        match self {
            AdvanceResult::Changed(value) => Some(value),
            AdvanceResult::NoChange => None,
        }
    }
}

/// Where a ticker is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerPhase {
    /// Mounted, not yet seen
    Idle,
    /// Armed, waiting for the start delay to run out
    Waiting { start_at: Duration },
    /// Counting; `last_frame` is the time of the previous step
    Running { last_frame: Duration },
    /// Reached the target, no more frames needed
    Settled,
    /// The display string had no number; shown as-is forever
    Static,
    /// Torn down; every further call is ignored
    Disposed,
}

/// One animated counter.
pub struct NumberTicker<D = SpringDriver> {
    spec: TickerSpec,
    target: Option<ParsedTarget>,
    gate: VisibilityGate,
    driver: D,
    state: AnimationState,
    phase: TickerPhase,
    text: String,
}

impl NumberTicker<SpringDriver> {
    /// Create a counter using the overdamped counter spring.
    pub fn new(spec: TickerSpec) -> Self {
        Self::with_driver(spec, SpringDriver::new(SpringConfig::TICKER))
    }
}

impl<D: AnimationDriver> NumberTicker<D> {
    /// Create a counter stepped by `driver`.
    ///
    /// A display string without digits produces a static ticker that shows the
    /// literal string and never animates.
    pub fn with_driver(spec: TickerSpec, driver: D) -> Self {
        let (target, phase, text) = match ParsedTarget::parse(&spec.display_value) {
            Ok(target) => {
                let text = target.display(0.0);
                (Some(target), TickerPhase::Idle, text)
            }
            Err(err) => {
                log::warn!("ticker falls back to static text: {}", err);
                (None, TickerPhase::Static, spec.display_value.clone())
            }
        };

        Self {
            spec,
            target,
            gate: VisibilityGate::default(),
            driver,
            state: AnimationState::new(),
            phase,
            text,
        }
    }

    /// Replace the visibility margin (default: 100 units inside the viewport).
    pub fn with_margin(mut self, margin: RootMargin) -> Self {
        self.gate = VisibilityGate::new(margin);
        self
    }

    pub fn spec(&self) -> &TickerSpec {
        &self.spec
    }

    /// Parsed target, or the reason there is none.
    pub fn target(&self) -> Result<&ParsedTarget, ParseError> {
        self.target
            .as_ref()
            .ok_or_else(|| ParseError::NoDigits(self.spec.display_value.clone()))
    }

    /// Current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn phase(&self) -> TickerPhase {
        self.phase
    }

    pub fn is_armed(&self) -> bool {
        self.gate.is_armed()
    }

    pub fn is_settled(&self) -> bool {
        self.phase == TickerPhase::Settled
    }

    /// Still mounted.
    pub fn is_live(&self) -> bool {
        self.phase != TickerPhase::Disposed
    }

    /// No more frames will change this ticker.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.phase,
            TickerPhase::Settled | TickerPhase::Static | TickerPhase::Disposed
        )
    }

    /// Whether the host should keep delivering frames.
    pub fn wants_frame(&self) -> bool {
        matches!(
            self.phase,
            TickerPhase::Waiting { .. } | TickerPhase::Running { .. }
        )
    }

    /// When counting will start, while waiting out the delay.
    pub fn start_at(&self) -> Option<Duration> {
        match self.phase {
            TickerPhase::Waiting { start_at } => Some(start_at),
            _ => None,
        }
    }

    /// Feed element and viewport bounds. Returns true if this call armed the
    /// ticker.
    pub fn observe(&mut self, element: &Rect, viewport: &Rect, now: Duration) -> bool {
        if !self.is_live() || self.gate.is_armed() {
            return false;
        }
        let armed = self.gate.on_visible(element, viewport);
        self.on_armed(armed, now)
    }

    /// Feed a precomputed visibility flag. Returns true if this call armed the
    /// ticker.
    pub fn signal_visible(&mut self, visible: bool, now: Duration) -> bool {
        if !self.is_live() || self.gate.is_armed() {
            return false;
        }
        let armed = self.gate.signal(visible);
        self.on_armed(armed, now)
    }

    fn on_armed(&mut self, armed: bool, now: Duration) -> bool {
        if !armed {
            return false;
        }
        if self.phase == TickerPhase::Idle {
            let start_at = now + self.spec.start_delay;
            log::debug!(
                "ticker {:?} armed at {:?}, starts at {:?}",
                self.spec.display_value,
                now,
                start_at
            );
            self.phase = TickerPhase::Waiting { start_at };
        }
        true
    }

    /// Run one frame at `now`. Steps the driver once if the ticker is running,
    /// and reports the new text if the rounded value changed.
    pub fn advance(&mut self, now: Duration) -> AdvanceResult<String> {
        let last_frame = match self.phase {
            TickerPhase::Waiting { start_at } if now >= start_at => {
                log::debug!("ticker {:?} started", self.spec.display_value);
                start_at
            }
            TickerPhase::Running { last_frame } => last_frame,
            _ => return AdvanceResult::NoChange,
        };
        let Some(target) = self.target.as_ref() else {
            return AdvanceResult::NoChange;
        };

        let dt = now.saturating_sub(last_frame).as_secs_f32();
        self.state = self.driver.step(self.state, target.target(), dt);
        log::trace!(
            "ticker {:?} stepped {:.4}s -> {:.3}",
            self.spec.display_value,
            dt,
            self.state.current
        );

        self.phase = if self.state.settled {
            log::debug!(
                "ticker {:?} settled after {:.3}s",
                self.spec.display_value,
                self.state.elapsed
            );
            TickerPhase::Settled
        } else {
            TickerPhase::Running { last_frame: now }
        };

        let text = target.display(self.state.current);
        if text != self.text {
            self.text = text.clone();
            AdvanceResult::Changed(text)
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Tear the ticker down. A pending start is dropped and nothing is
    /// emitted afterwards.
    pub fn dispose(&mut self) {
        if self.phase != TickerPhase::Disposed {
            log::debug!("ticker {:?} disposed", self.spec.display_value);
            self.phase = TickerPhase::Disposed;
        }
    }
}

impl<D> std::fmt::Debug for NumberTicker<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberTicker")
            .field("spec", &self.spec)
            .field("phase", &self.phase)
            .field("text", &self.text)
            .finish()
    }
}

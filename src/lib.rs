//! Motion primitives for a single-page landing site.
//!
//! The centrepiece is the animated stats counter: [`ticker::NumberTicker`]
//! parses a display string such as `"200+"`, waits until it scrolls into view
//! (plus an optional stagger delay), then counts up from zero on a damped
//! spring and hands back formatted text every frame. A [`stage::Stage`] hosts
//! many counters at once and [`runner::Runner`] drives a stage headlessly.
//!
//! The [`motion`] module covers the rest of the page's effects: one-shot
//! reveals, staggered lists, the endless project carousel and the
//! scroll-pinned stack of process cards.

pub mod animation;
pub mod jobs;
pub mod motion;
pub mod page;
pub mod runner;
pub mod stage;
pub mod ticker;
pub mod value;
pub mod visibility;

pub mod prelude {
    pub use crate::animation::{
        AnimationDriver, AnimationState, SpringConfig, SpringDriver, TimingFunction, Transition,
        TweenDriver,
    };
    pub use crate::jobs::TickerId;
    pub use crate::motion::{Marquee, Reveal, RevealFrame, StackingCards, StaggerList};
    pub use crate::runner::{RunSummary, Runner, RunnerConfig, RunnerError};
    pub use crate::stage::{ChangeFlags, FrameReport, Stage, StageConfig, TextUpdate};
    pub use crate::ticker::{AdvanceResult, NumberTicker, TickerPhase, TickerSpec};
    pub use crate::value::{format_value, ParseError, ParsedTarget};
    pub use crate::visibility::{Rect, RootMargin, VisibilityGate};
}

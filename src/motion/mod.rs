//! Scroll and time driven effects for the rest of the page.
//!
//! These are pure samplers: the host asks for the frame at a given time or
//! scroll offset and applies it to whatever it renders.

mod marquee;
mod reveal;
mod stack;

pub use marquee::Marquee;
pub use reveal::{stagger, Reveal, RevealFrame, StaggerList};
pub use stack::StackingCards;

use std::time::Duration;

use crate::animation::{Animatable, TimingFunction, Transition};
use crate::visibility::{Rect, RootMargin, VisibilityGate};

/// Opacity and vertical offset of a revealing element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    /// Downward offset in page units
    pub offset_y: f32,
}

impl RevealFrame {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Fully transparent and pushed down by `distance`.
    pub fn hidden(distance: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_y: distance,
        }
    }
}

impl Animatable for RevealFrame {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            opacity: f32::lerp(&from.opacity, &to.opacity, t),
            offset_y: f32::lerp(&from.offset_y, &to.offset_y, t),
        }
    }
}

/// Fade-and-rise played once when an element first scrolls into view.
#[derive(Debug, Clone)]
pub struct Reveal {
    transition: Transition,
    distance: f32,
    gate: VisibilityGate,
    armed_at: Option<Duration>,
}

impl Reveal {
    pub fn new(transition: Transition, distance: f32) -> Self {
        Self {
            transition,
            distance,
            gate: VisibilityGate::new(RootMargin::all(0.0)),
            armed_at: None,
        }
    }

    /// Section heading reveal: 0.8s, rising 50 units.
    pub fn section() -> Self {
        Self::new(
            Transition::new(Duration::from_millis(800), TimingFunction::REVEAL),
            50.0,
        )
    }

    pub fn with_margin(mut self, margin: RootMargin) -> Self {
        self.gate = VisibilityGate::new(margin);
        self
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn is_triggered(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Feed element and viewport bounds. Returns true if this triggered it.
    pub fn observe(&mut self, element: &Rect, viewport: &Rect, now: Duration) -> bool {
        if self.armed_at.is_some() || !self.gate.on_visible(element, viewport) {
            return false;
        }
        self.armed_at = Some(now);
        true
    }

    /// Trigger directly, as if the element had just come into view.
    pub fn trigger(&mut self, now: Duration) -> bool {
        if self.armed_at.is_some() {
            return false;
        }
        self.gate.signal(true);
        self.armed_at = Some(now);
        true
    }

    /// Frame to render at `now`. Hidden until triggered and during the delay.
    pub fn sample(&self, now: Duration) -> RevealFrame {
        let hidden = RevealFrame::hidden(self.distance);
        let Some(armed_at) = self.armed_at else {
            return hidden;
        };
        let t = self.transition.progress(now.saturating_sub(armed_at));
        RevealFrame::lerp(&hidden, &RevealFrame::VISIBLE, t)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.armed_at
            .is_some_and(|armed_at| self.transition.is_finished(now.saturating_sub(armed_at)))
    }
}

/// Delay for the `index`th item of a staggered group.
pub fn stagger(index: usize, step: Duration) -> Duration {
    step.saturating_mul(index.min(u32::MAX as usize) as u32)
}

/// A list whose items reveal one after another once the list scrolls into
/// view.
#[derive(Debug, Clone)]
pub struct StaggerList {
    items: Vec<Reveal>,
    gate: VisibilityGate,
}

impl StaggerList {
    /// Item reveal: 0.6s, rising 30 units, 0.1s apart.
    pub fn new(count: usize) -> Self {
        Self::with_timing(
            count,
            Transition::new(Duration::from_millis(600), TimingFunction::REVEAL),
            30.0,
            Duration::from_millis(100),
        )
    }

    pub fn with_timing(count: usize, transition: Transition, distance: f32, step: Duration) -> Self {
        let items = (0..count)
            .map(|i| {
                let delay = transition.delay + stagger(i, step);
                Reveal::new(transition.clone().delay(delay), distance)
            })
            .collect();
        Self {
            items,
            gate: VisibilityGate::new(RootMargin::all(0.0)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Feed the list's bounds. Returns true if this triggered the items.
    pub fn observe(&mut self, list: &Rect, viewport: &Rect, now: Duration) -> bool {
        if self.gate.is_armed() || !self.gate.on_visible(list, viewport) {
            return false;
        }
        for item in &mut self.items {
            item.trigger(now);
        }
        true
    }

    /// Frames for every item at `now`.
    pub fn sample(&self, now: Duration) -> Vec<RevealFrame> {
        self.items.iter().map(|item| item.sample(now)).collect()
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.items.iter().all(|item| item.is_finished(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn test_hidden_until_triggered() {
        let reveal = Reveal::section();
        assert_eq!(reveal.sample(Duration::from_secs(10)), RevealFrame::hidden(50.0));
        assert!(!reveal.is_finished(Duration::from_secs(10)));
    }

    #[test]
    fn test_plays_once() {
        let mut reveal = Reveal::section();
        let element = Rect::new(0.0, 300.0, 400.0, 100.0);
        assert!(reveal.observe(&element, &viewport(), Duration::from_secs(1)));
        assert!(!reveal.observe(&element, &viewport(), Duration::from_secs(2)));

        let start = reveal.sample(Duration::from_secs(1));
        assert_eq!(start, RevealFrame::hidden(50.0));

        let mid = reveal.sample(Duration::from_millis(1400));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < 25.0);

        assert_eq!(reveal.sample(Duration::from_millis(1800)), RevealFrame::VISIBLE);
        assert!(reveal.is_finished(Duration::from_millis(1800)));
    }

    #[test]
    fn test_offscreen_element_does_not_trigger() {
        let mut reveal = Reveal::section();
        let below = Rect::new(0.0, 1200.0, 400.0, 100.0);
        assert!(!reveal.observe(&below, &viewport(), Duration::ZERO));
        assert!(!reveal.is_triggered());
    }

    #[test]
    fn test_stagger_delays() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger(0, step), Duration::ZERO);
        assert_eq!(stagger(3, step), Duration::from_millis(300));
    }

    #[test]
    fn test_stagger_list_items_follow_each_other() {
        let mut list = StaggerList::new(3);
        assert_eq!(list.len(), 3);
        assert!(list.observe(&Rect::new(0.0, 100.0, 1000.0, 400.0), &viewport(), Duration::ZERO));

        let frames = list.sample(Duration::from_millis(150));
        assert!(frames[0].opacity > frames[1].opacity);
        assert_eq!(frames[2], RevealFrame::hidden(30.0));

        assert!(!list.is_finished(Duration::from_millis(750)));
        assert!(list.is_finished(Duration::from_millis(800)));
        assert!(list
            .sample(Duration::from_millis(800))
            .iter()
            .all(|f| *f == RevealFrame::VISIBLE));
    }
}

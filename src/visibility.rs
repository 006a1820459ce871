//! One-shot "scrolled into view" detection.
//!
//! The host reports element and viewport bounds (or a plain visible/hidden
//! flag); the gate arms the first time the element intersects the viewport
//! grown or shrunk by a [`RootMargin`], and never disarms.

/// Axis-aligned rectangle in page units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Grow each side outward by the margin (negative values shrink).
    /// Sizes never go below zero.
    pub fn expand(&self, margin: &RootMargin) -> Self {
        Self {
            x: self.x - margin.left,
            y: self.y - margin.top,
            width: (self.width + margin.left + margin.right).max(0.0),
            height: (self.height + margin.top + margin.bottom).max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Overlap test where touching edges count, so zero-sized elements
    /// inside the rectangle are reported as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

/// Adjustment applied to the viewport before testing intersection.
///
/// Positive values trigger early (before the element scrolls in), negative
/// values require the element to be that far inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RootMargin {
    /// The counters' margin: 100 units inside every viewport edge.
    pub const TICKER: Self = Self::all(-100.0);

    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn vertical(value: f32) -> Self {
        Self {
            top: value,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::TICKER
    }
}

/// Arms exactly once, on the first signal that the element is in view.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGate {
    margin: RootMargin,
    armed: bool,
}

impl VisibilityGate {
    pub fn new(margin: RootMargin) -> Self {
        Self {
            margin,
            armed: false,
        }
    }

    pub fn margin(&self) -> RootMargin {
        self.margin
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether `element` counts as entered for `viewport`, ignoring the
    /// gate's history.
    pub fn is_in_view(&self, element: &Rect, viewport: &Rect) -> bool {
        let root = viewport.expand(&self.margin);
        !root.is_empty() && root.intersects(element)
    }

    /// Feed one geometry update. Returns whether the gate is armed afterwards.
    pub fn on_visible(&mut self, element: &Rect, viewport: &Rect) -> bool {
        if !self.armed && self.is_in_view(element, viewport) {
            self.armed = true;
        }
        self.armed
    }

    /// Feed a precomputed visibility flag. Returns whether the gate is armed
    /// afterwards.
    pub fn signal(&mut self, visible: bool) -> bool {
        self.armed |= visible;
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn test_expand_and_shrink() {
        let shrunk = viewport().expand(&RootMargin::all(-100.0));
        assert_eq!(shrunk, Rect::new(100.0, 100.0, 1080.0, 600.0));

        let grown = viewport().expand(&RootMargin::vertical(50.0));
        assert_eq!(grown, Rect::new(0.0, -50.0, 1280.0, 900.0));
    }

    #[test]
    fn test_negative_margin_delays_trigger() {
        let gate = VisibilityGate::new(RootMargin::TICKER);
        // Peeking 60 units above the bottom edge: inside the viewport but not
        // inside the margin.
        let element = Rect::new(200.0, 740.0, 300.0, 120.0);
        assert!(viewport().intersects(&element));
        assert!(!gate.is_in_view(&element, &viewport()));

        assert!(gate.is_in_view(&element.offset(0.0, -60.0), &viewport()));
    }

    #[test]
    fn test_positive_margin_triggers_early() {
        let gate = VisibilityGate::new(RootMargin::vertical(100.0));
        let below_fold = Rect::new(0.0, 850.0, 100.0, 100.0);
        assert!(gate.is_in_view(&below_fold, &viewport()));
    }

    #[test]
    fn test_arms_once_and_stays_armed() {
        let mut gate = VisibilityGate::default();
        let element = Rect::new(100.0, 2000.0, 300.0, 100.0);

        assert!(!gate.on_visible(&element, &viewport()));
        assert!(gate.on_visible(&element.offset(0.0, -1500.0), &viewport()));
        // Scrolled away again
        assert!(gate.on_visible(&element, &viewport()));
        assert!(gate.signal(false));
        assert!(gate.is_armed());
    }

    #[test]
    fn test_degenerate_viewport_never_arms() {
        let mut gate = VisibilityGate::default();
        let tiny = Rect::new(0.0, 0.0, 150.0, 150.0);
        assert!(!gate.on_visible(&Rect::new(50.0, 50.0, 10.0, 10.0), &tiny));
    }

    #[test]
    fn test_zero_sized_element_inside_counts() {
        let gate = VisibilityGate::new(RootMargin::all(0.0));
        assert!(gate.is_in_view(&Rect::new(10.0, 10.0, 0.0, 0.0), &viewport()));
    }
}

/// Scroll-scrubbed stack of cards.
///
/// The section pins to the top of the viewport for `cards` viewport heights
/// of scrolling. Over that distance every card after the first slides up from
/// below (100% of its height) until it covers the one before it (0%), one
/// after another in equal slices of the scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackingCards {
    cards: usize,
}

impl StackingCards {
    pub fn new(cards: usize) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// Scroll distance the section stays pinned for.
    pub fn pin_distance(&self, viewport_height: f32) -> f32 {
        self.cards as f32 * viewport_height.max(0.0)
    }

    /// Scroll offsets at which the pin starts and ends, for a section whose
    /// top sits at `section_top` in page coordinates.
    pub fn pin_range(&self, section_top: f32, viewport_height: f32) -> (f32, f32) {
        (section_top, section_top + self.pin_distance(viewport_height))
    }

    pub fn is_pinned(&self, scroll_y: f32, section_top: f32, viewport_height: f32) -> bool {
        let (start, end) = self.pin_range(section_top, viewport_height);
        scroll_y >= start && scroll_y <= end
    }

    /// Scrub progress in `[0, 1]` for the current scroll offset.
    pub fn progress(&self, scroll_y: f32, section_top: f32, viewport_height: f32) -> f32 {
        let distance = self.pin_distance(viewport_height);
        if distance <= 0.0 {
            return if scroll_y >= section_top { 1.0 } else { 0.0 };
        }
        ((scroll_y - section_top) / distance).clamp(0.0, 1.0)
    }

    /// Vertical offset of card `index` as a percentage of its height.
    pub fn card_offset(&self, index: usize, progress: f32) -> f32 {
        if index == 0 || index >= self.cards {
            return 0.0;
        }
        let segments = (self.cards - 1) as f32;
        let local = (progress.clamp(0.0, 1.0) * segments - (index - 1) as f32).clamp(0.0, 1.0);
        100.0 * (1.0 - local)
    }

    /// Offsets for every card at `progress`.
    pub fn offsets(&self, progress: f32) -> Vec<f32> {
        (0..self.cards)
            .map(|i| self.card_offset(i, progress))
            .collect()
    }

    /// Offsets for every card at a scroll position.
    pub fn offsets_at(&self, scroll_y: f32, section_top: f32, viewport_height: f32) -> Vec<f32> {
        self.offsets(self.progress(scroll_y, section_top, viewport_height))
    }
}

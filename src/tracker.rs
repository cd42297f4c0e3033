//! Ordered slide list with a wrap-around cursor.

use crate::slide::Slide;

/// Tracks which slide of an ordered list is active.
///
/// The cursor is only meaningful while the list is non-empty; every transition
/// on an empty tracker is a no-op.
#[derive(Debug, Clone, Default)]
pub struct SlideTracker {
    slides: Vec<Slide>,
    idx: usize,
}

impl SlideTracker {
    /// Start at the first slide of `slides`.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, idx: 0 }
    }

    /// Number of slides held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the active slide, `None` when there are no slides.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.idx)
    }

    /// Borrow the active slide.
    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.idx)
    }

    /// Move to the following slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        if let Some(len) = self.non_zero_len() {
            self.idx = (self.idx + 1) % len;
        }
    }

    /// Move to the preceding slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if let Some(len) = self.non_zero_len() {
            self.idx = (self.idx + len - 1) % len;
        }
    }

    /// Swap in a new slide list, keeping the cursor when it is still in range.
    pub fn replace(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        if self.idx >= self.slides.len() {
            self.idx = 0;
        }
    }

    /// Borrow the slide list (read-only).
    #[must_use]
    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }

    fn non_zero_len(&self) -> Option<usize> {
        match self.slides.len() {
            0 => None,
            len => Some(len),
        }
    }
}

//! Render loop state.
//!
//! The [`Transcript`] holds every formatted block of the session and the
//! [`Viewport`] tracks which slice of its lines is on screen. Both are owned
//! by [`crate::App`] and only touched from the render loop.

use crate::{FormattedBlock, Scroll, StyledLine};

/// Lines moved per mouse wheel notch.
const WHEEL_LINES: usize = 3;

/// Append-only log of formatted blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    blocks: Vec<FormattedBlock>,
    line_count: usize,
}

impl Transcript {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: FormattedBlock) {
        self.line_count += block.lines().len();
        self.blocks.push(block);
    }

    /// Drop all content.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.line_count = 0;
    }

    /// Blocks in arrival order.
    pub fn blocks(&self) -> &[FormattedBlock] {
        &self.blocks
    }

    /// Whether nothing has been appended since the last clear.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total display lines across all blocks.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// All display lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &StyledLine> {
        self.blocks.iter().flat_map(FormattedBlock::lines)
    }

    /// Whole transcript as plain text.
    pub fn to_plain_text(&self) -> String {
        self.blocks.iter().map(FormattedBlock::to_plain_text).collect()
    }
}

/// Visible window onto the transcript.
///
/// While `follow` is set the viewport sticks to the last line as content
/// arrives. Scrolling away from the bottom clears it; reaching the bottom
/// again restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    follow: bool,
}

impl Viewport {
    /// Viewport of the given size showing the first line.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height, offset: 0, follow: true }
    }

    /// Width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Index of the first visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the viewport is tracking the tail.
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Apply new dimensions.
    pub fn resize(&mut self, width: u16, height: u16, total: usize) {
        self.width = width;
        self.height = height;
        self.content_changed(total);
    }

    /// Re-anchor after the transcript changed length.
    pub fn content_changed(&mut self, total: usize) {
        let max = self.max_offset(total);
        self.offset = if self.follow { max } else { self.offset.min(max) };
    }

    /// Back to the top, tracking the tail.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.follow = true;
    }

    /// Move the window.
    pub fn scroll(&mut self, scroll: Scroll, total: usize) {
        let page = usize::from(self.height).max(1);
        let half = (page / 2).max(1);
        let max = self.max_offset(total);

        self.offset = match scroll {
            Scroll::LineUp => self.offset.saturating_sub(1),
            Scroll::LineDown => self.offset.saturating_add(1),
            Scroll::HalfPageUp => self.offset.saturating_sub(half),
            Scroll::HalfPageDown => self.offset.saturating_add(half),
            Scroll::PageUp => self.offset.saturating_sub(page),
            Scroll::PageDown => self.offset.saturating_add(page),
            Scroll::WheelUp => self.offset.saturating_sub(WHEEL_LINES),
            Scroll::WheelDown => self.offset.saturating_add(WHEEL_LINES),
            Scroll::Top => 0,
            Scroll::Bottom => max,
        }
        .min(max);
        self.follow = self.offset >= max;
    }

    /// Range of transcript line indices on screen.
    pub fn visible_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(total);
        let end = start.saturating_add(usize::from(self.height)).min(total);
        start..end
    }

    /// Scroll position in `0.0..=1.0`. `1.0` when everything fits.
    pub fn scroll_percent(&self, total: usize) -> f64 {
        let height = usize::from(self.height);
        if height >= total {
            return 1.0;
        }
        let max = total - height;
        (self.offset.min(max) as f64 / max as f64).clamp(0.0, 1.0)
    }

    fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(usize::from(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;

    #[test]
    fn transcript_counts_lines() {
        let mut transcript = Transcript::new();
        transcript.push(format("", "a b", 1));
        transcript.push(format("", "c", 80));
        assert_eq!(transcript.line_count(), 3);

        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.line_count(), 0);
    }

    #[test]
    fn follows_tail_while_at_bottom() {
        let mut viewport = Viewport::new(80, 5);
        viewport.content_changed(12);
        assert_eq!(viewport.offset(), 7);
        assert_eq!(viewport.visible_range(12), 7..12);
    }

    #[test]
    fn scrolling_up_detaches_from_tail() {
        let mut viewport = Viewport::new(80, 5);
        viewport.content_changed(12);
        viewport.scroll(Scroll::LineUp, 12);
        assert!(!viewport.is_following());

        viewport.content_changed(20);
        assert_eq!(viewport.offset(), 6);

        viewport.scroll(Scroll::Bottom, 20);
        assert!(viewport.is_following());
        assert_eq!(viewport.offset(), 15);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut viewport = Viewport::new(80, 4);
        viewport.scroll(Scroll::PageDown, 6);
        assert_eq!(viewport.offset(), 2);
        viewport.scroll(Scroll::PageUp, 6);
        viewport.scroll(Scroll::WheelUp, 6);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn scroll_percent_bounds() {
        let mut viewport = Viewport::new(80, 10);
        assert!((viewport.scroll_percent(3) - 1.0).abs() < f64::EPSILON);

        viewport.scroll(Scroll::Top, 30);
        assert!(viewport.scroll_percent(30).abs() < f64::EPSILON);

        viewport.scroll(Scroll::HalfPageDown, 30);
        assert!((viewport.scroll_percent(30) - 0.25).abs() < f64::EPSILON);
    }
}

//! Transcript viewport state: scrolling and layout dimensions.

/// Scroll mode for the transcript pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Auto-scroll to show the latest entry.
    FollowLatest,
    /// User scrolled manually; offset is a line index from the top.
    Anchored { offset: usize },
}

/// Scroll state plus cached layout numbers.
///
/// `line_count` is refreshed each frame from the rendered cells so offset
/// math stays accurate as the transcript or terminal width changes.
#[derive(Debug, Clone)]
pub struct TranscriptView {
    pub mode: ScrollMode,
    /// Total rendered line count from the last frame.
    pub line_count: usize,
    /// Lines available to the transcript pane.
    pub viewport_height: usize,
}

impl Default for TranscriptView {
    fn default() -> Self {
        Self {
            mode: ScrollMode::FollowLatest,
            line_count: 0,
            viewport_height: 20,
        }
    }
}

impl TranscriptView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_following(&self) -> bool {
        matches!(self.mode, ScrollMode::FollowLatest)
    }

    /// Current scroll offset for rendering, clamped to the content range.
    pub fn offset(&self) -> usize {
        let max_offset = self.line_count.saturating_sub(self.viewport_height);
        match self.mode {
            ScrollMode::FollowLatest => max_offset,
            ScrollMode::Anchored { offset } => offset.min(max_offset),
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let offset = self.offset().saturating_sub(lines);
        self.mode = ScrollMode::Anchored { offset };
    }

    /// Scrolls down, re-entering follow mode at the bottom.
    pub fn scroll_down(&mut self, lines: usize) {
        if self.is_following() {
            return;
        }
        let max_offset = self.line_count.saturating_sub(self.viewport_height);
        let offset = (self.offset() + lines).min(max_offset);
        self.mode = if offset >= max_offset {
            ScrollMode::FollowLatest
        } else {
            ScrollMode::Anchored { offset }
        };
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.mode = ScrollMode::Anchored { offset: 0 };
    }

    /// Snaps back to the latest entry (the scroll-to-latest view effect).
    pub fn scroll_to_bottom(&mut self) {
        self.mode = ScrollMode::FollowLatest;
    }

    /// Resets after the transcript is cleared.
    pub fn reset(&mut self) {
        self.mode = ScrollMode::FollowLatest;
        self.line_count = 0;
    }

    /// Refreshes layout numbers for this frame.
    pub fn update_layout(&mut self, line_count: usize, viewport_height: usize) {
        self.line_count = line_count;
        self.viewport_height = viewport_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(lines: usize, viewport: usize) -> TranscriptView {
        let mut v = TranscriptView::new();
        v.update_layout(lines, viewport);
        v
    }

    #[test]
    fn follow_mode_shows_bottom() {
        let v = view(100, 20);
        assert!(v.is_following());
        assert_eq!(v.offset(), 80);
    }

    #[test]
    fn scroll_up_anchors() {
        let mut v = view(100, 20);
        v.scroll_up(5);
        assert_eq!(v.mode, ScrollMode::Anchored { offset: 75 });
    }

    #[test]
    fn scroll_up_clamps_at_zero() {
        let mut v = view(100, 20);
        v.mode = ScrollMode::Anchored { offset: 3 };
        v.scroll_up(10);
        assert_eq!(v.mode, ScrollMode::Anchored { offset: 0 });
    }

    #[test]
    fn scroll_down_reaches_follow_mode() {
        let mut v = view(100, 20);
        v.mode = ScrollMode::Anchored { offset: 75 };
        v.scroll_down(10);
        assert!(v.is_following());
    }

    #[test]
    fn scroll_down_partial_stays_anchored() {
        let mut v = view(100, 20);
        v.mode = ScrollMode::Anchored { offset: 50 };
        v.scroll_down(10);
        assert_eq!(v.mode, ScrollMode::Anchored { offset: 60 });
    }

    #[test]
    fn scroll_down_is_noop_when_following() {
        let mut v = view(100, 20);
        v.scroll_down(10);
        assert!(v.is_following());
    }

    #[test]
    fn anchored_offset_clamps_when_content_shrinks() {
        let mut v = view(100, 20);
        v.mode = ScrollMode::Anchored { offset: 70 };
        v.update_layout(30, 20);
        assert_eq!(v.offset(), 10);
    }

    #[test]
    fn paging_moves_a_viewport_at_a_time() {
        let mut v = view(100, 20);
        v.page_up();
        assert_eq!(v.mode, ScrollMode::Anchored { offset: 60 });
        v.page_down();
        assert!(v.is_following());
    }

    #[test]
    fn reset_returns_to_follow() {
        let mut v = view(100, 20);
        v.mode = ScrollMode::Anchored { offset: 40 };
        v.reset();
        assert!(v.is_following());
        assert_eq!(v.line_count, 0);
    }

    #[test]
    fn short_content_has_zero_offset() {
        let v = view(5, 20);
        assert_eq!(v.offset(), 0);
    }
}

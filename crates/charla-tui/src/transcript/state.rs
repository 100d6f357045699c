//! Transcript scroll state.
//!
//! Scrolling is tracked as a distance from the bottom of the wrapped
//! transcript, so "follow the newest message" is simply distance zero.

/// Lines scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Scroll state for the transcript pane.
#[derive(Debug, Default)]
pub struct TranscriptState {
    /// Lines scrolled up from the bottom. Zero means following the newest
    /// message.
    scroll_back: usize,
    /// Viewport height from the last render, for page scrolling.
    viewport_height: usize,
}

impl TranscriptState {
    /// Create a new state, following the bottom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance from the bottom in wrapped lines.
    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    /// Check whether the view is pinned to the newest message.
    pub fn is_following(&self) -> bool {
        self.scroll_back == 0
    }

    /// The message sequence changed: snap back to the bottom so the most
    /// recent message is visible.
    pub fn notify_appended(&mut self) {
        self.scroll_back = 0;
    }

    /// Scroll up (into history). Disables follow until scrolled back down.
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_back = self.scroll_back.saturating_add(amount);
    }

    /// Scroll down (towards the newest message).
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(amount);
    }

    /// Scroll up by one page.
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    /// Scroll down by one page.
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    /// Jump back to the newest message and re-enable follow.
    pub fn jump_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    /// Clamp the scroll distance against the actual content size and record
    /// the viewport height. Called by the widget at render time.
    pub(crate) fn sync_viewport(&mut self, total_lines: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        let max_back = total_lines.saturating_sub(viewport_height);
        self.scroll_back = self.scroll_back.min(max_back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_follows_bottom() {
        let state = TranscriptState::new();
        assert!(state.is_following());
        assert_eq!(state.scroll_back(), 0);
    }

    #[test]
    fn test_scroll_up_disables_follow() {
        let mut state = TranscriptState::new();
        state.scroll_up(SCROLL_SPEED);
        assert!(!state.is_following());
        assert_eq!(state.scroll_back(), 3);
    }

    #[test]
    fn test_scroll_down_saturates_at_bottom() {
        let mut state = TranscriptState::new();
        state.scroll_up(2);
        state.scroll_down(5);
        assert!(state.is_following());
    }

    #[test]
    fn test_append_snaps_to_bottom() {
        let mut state = TranscriptState::new();
        state.scroll_up(10);
        state.notify_appended();
        assert!(state.is_following());
    }

    #[test]
    fn test_sync_viewport_clamps() {
        let mut state = TranscriptState::new();
        state.scroll_up(100);
        state.sync_viewport(30, 10);
        assert_eq!(state.scroll_back(), 20);
    }

    #[test]
    fn test_page_scrolling_uses_viewport_height() {
        let mut state = TranscriptState::new();
        state.sync_viewport(100, 10);
        state.page_up();
        assert_eq!(state.scroll_back(), 10);
        state.page_down();
        assert!(state.is_following());
    }

    #[test]
    fn test_sync_viewport_with_short_content() {
        let mut state = TranscriptState::new();
        state.scroll_up(5);
        // Content fits entirely in the viewport: nothing to scroll.
        state.sync_viewport(4, 10);
        assert!(state.is_following());
    }
}

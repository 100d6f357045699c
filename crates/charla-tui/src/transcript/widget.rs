//! Transcript widget rendering the message sequence.
//!
//! Each message is a labeled block: a header line with the role icon and
//! name, then the wrapped content. Assistant blocks sit on the surface
//! background, user blocks on the base background. While a reply is
//! pending, a waiting block with an animated spinner is appended.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use charla_core::{Message, Role};

use crate::theme::{IconSet, Theme};

use super::state::TranscriptState;

/// Indentation for message content under the header line.
const CONTENT_INDENT: &str = "   ";

/// Transcript pane widget.
pub struct TranscriptWidget<'a> {
    messages: &'a [Message],
    awaiting_reply: bool,
    spinner_tick: usize,
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> TranscriptWidget<'a> {
    /// Create a new transcript widget.
    pub fn new(messages: &'a [Message], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            messages,
            awaiting_reply: false,
            spinner_tick: 0,
            theme,
            icons,
        }
    }

    /// Show the waiting block at the end of the transcript.
    #[must_use]
    pub fn awaiting_reply(mut self, awaiting: bool) -> Self {
        self.awaiting_reply = awaiting;
        self
    }

    /// Set the tick counter driving the spinner animation.
    #[must_use]
    pub fn spinner_tick(mut self, tick: usize) -> Self {
        self.spinner_tick = tick;
        self
    }

    fn role_icon(&self, role: Role) -> &'static str {
        match role {
            Role::Assistant => self.icons.assistant(),
            Role::User => self.icons.user(),
        }
    }

    fn role_label(role: Role) -> &'static str {
        match role {
            Role::Assistant => "Asistente",
            Role::User => "T\u{fa}",
        }
    }

    fn role_color(&self, role: Role) -> ratatui::style::Color {
        match role {
            Role::Assistant => self.theme.assistant,
            Role::User => self.theme.user,
        }
    }

    /// Background for a message block. Assistant rows sit on the surface
    /// color, mirroring the alternating row backgrounds of the design.
    fn block_bg(&self, role: Role) -> ratatui::style::Color {
        match role {
            Role::Assistant => self.theme.surface,
            Role::User => self.theme.base,
        }
    }

    /// Build all wrapped display lines for the transcript.
    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let wrap_width = width.saturating_sub(CONTENT_INDENT.len()).max(1);
        let mut lines = Vec::new();

        for message in self.messages {
            let bg = self.block_bg(message.role);
            let block_style = Style::default().bg(bg);

            // Header: icon + role label + timestamp
            let header = Line::from(vec![
                Span::styled(
                    format!("{} ", self.role_icon(message.role)),
                    Style::default().fg(self.role_color(message.role)),
                ),
                Span::styled(
                    Self::role_label(message.role),
                    Style::default().fg(self.theme.subtext),
                ),
                Span::styled(
                    format!("  {}", message.time_str()),
                    Style::default().fg(self.theme.muted),
                ),
            ])
            .style(block_style);
            lines.push(header);

            // Content, wrapped. Explicit newlines are preserved.
            for raw_line in message.content.lines() {
                if raw_line.is_empty() {
                    lines.push(Line::from(CONTENT_INDENT.to_string()).style(block_style));
                    continue;
                }
                for wrapped in textwrap::wrap(raw_line, wrap_width) {
                    lines.push(
                        Line::from(vec![
                            Span::raw(CONTENT_INDENT),
                            Span::styled(
                                wrapped.into_owned(),
                                Style::default().fg(self.theme.text),
                            ),
                        ])
                        .style(block_style),
                    );
                }
            }

            // Separator between blocks
            lines.push(Line::default());
        }

        if self.awaiting_reply {
            let block_style = Style::default().bg(self.theme.surface);
            lines.push(
                Line::from(vec![
                    Span::styled(
                        format!("{} ", self.icons.assistant()),
                        Style::default().fg(self.theme.assistant),
                    ),
                    Span::styled(
                        Self::role_label(Role::Assistant),
                        Style::default().fg(self.theme.subtext),
                    ),
                    Span::styled(
                        format!("  {}", self.icons.spinner_frame(self.spinner_tick)),
                        Style::default().fg(self.theme.muted),
                    ),
                ])
                .style(block_style),
            );
            lines.push(Line::default());
        }

        lines
    }
}

impl StatefulWidget for TranscriptWidget<'_> {
    type State = TranscriptState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = self.build_lines(area.width as usize);
        let total = lines.len();
        let height = area.height as usize;

        state.sync_viewport(total, height);

        // Window anchored at the bottom, offset by the scroll-back distance.
        let start = total.saturating_sub(height + state.scroll_back());
        let visible: Vec<Line<'static>> = lines.into_iter().skip(start).take(height).collect();

        Paragraph::new(visible)
            .style(Style::default().bg(self.theme.base))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal};
    use charla_core::Conversation;

    fn render_transcript(
        conv: &Conversation,
        awaiting: bool,
        width: u16,
        height: u16,
        state: &mut TranscriptState,
    ) -> String {
        let theme = Theme::default();
        let icons = IconSet::new(crate::theme::IconMode::Ascii);
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        let widget = TranscriptWidget::new(conv.messages(), &theme, &icons)
            .awaiting_reply(awaiting);
        widget.render(area, &mut buffer, state);
        buffer_to_string(&buffer)
    }

    #[test]
    fn test_renders_seed_greeting() {
        let conv = Conversation::new();
        let mut state = TranscriptState::new();
        let content = render_transcript(&conv, false, 60, 12, &mut state);
        assert!(content.contains("[AI] Asistente"));
        assert!(content.contains("Hola!"));
    }

    #[test]
    fn test_renders_user_block() {
        let mut conv = Conversation::new();
        conv.submit("hola asistente").unwrap();
        let mut state = TranscriptState::new();
        let content = render_transcript(&conv, false, 60, 12, &mut state);
        assert!(content.contains("[yo] T\u{fa}"));
        assert!(content.contains("hola asistente"));
    }

    #[test]
    fn test_waiting_block_shows_spinner() {
        let mut conv = Conversation::new();
        conv.submit("hola").unwrap();
        let mut state = TranscriptState::new();
        let content = render_transcript(&conv, true, 60, 12, &mut state);
        // ASCII spinner frame 0 is "|"
        assert!(content.contains("[AI] Asistente  |"));
    }

    #[test]
    fn test_follow_keeps_newest_visible() {
        let mut conv = Conversation::new();
        for i in 0..20 {
            conv.submit(&format!("mensaje {i}")).unwrap();
            conv.deliver_reply(charla_core::Message::assistant(format!("respuesta {i}")));
        }
        let mut state = TranscriptState::new();
        let content = render_transcript(&conv, false, 60, 10, &mut state);
        assert!(content.contains("respuesta 19"));
        assert!(!content.contains("mensaje 0\n"));
    }

    #[test]
    fn test_scrolled_back_shows_history() {
        let mut conv = Conversation::new();
        for i in 0..20 {
            conv.submit(&format!("mensaje {i}")).unwrap();
            conv.deliver_reply(charla_core::Message::assistant(format!("respuesta {i}")));
        }
        let mut state = TranscriptState::new();
        // First render records the content size, then scroll far up.
        let _ = render_transcript(&conv, false, 60, 10, &mut state);
        state.scroll_up(1000);
        let content = render_transcript(&conv, false, 60, 10, &mut state);
        assert!(content.contains("Hola!"));
        assert!(!content.contains("respuesta 19"));
    }

    #[test]
    fn test_long_content_wraps() {
        let mut conv = Conversation::new();
        conv.submit(&"palabra ".repeat(30)).unwrap();
        let mut state = TranscriptState::new();
        let content = render_transcript(&conv, false, 30, 24, &mut state);
        let longest = content.lines().map(str::len).max().unwrap_or(0);
        assert!(longest <= 30);
        assert!(content.matches("palabra").count() > 1);
    }

    #[test]
    fn test_minimum_size_does_not_panic() {
        let conv = Conversation::new();
        let mut state = TranscriptState::new();
        let _ = render_transcript(&conv, false, 1, 1, &mut state);
        let _ = render_transcript(&conv, false, 0, 0, &mut state);
    }

    #[test]
    fn test_renders_in_terminal() {
        let conv = Conversation::new();
        let theme = Theme::default();
        let icons = IconSet::default();
        let mut state = TranscriptState::new();
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| {
                let widget = TranscriptWidget::new(conv.messages(), &theme, &icons);
                frame.render_stateful_widget(widget, frame.area(), &mut state);
            })
            .unwrap();
    }
}

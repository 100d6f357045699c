//! Input bar widget.
//!
//! Bordered single-line text entry at the bottom of the screen. While a
//! reply is pending the bar shows a waiting line instead and ignores input.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{BorderSet, IconSet, Theme};

use super::text_input::TextInputState;

/// Placeholder shown when the input is empty.
pub const PLACEHOLDER: &str = "Escribe un mensaje...";

/// Disclaimer caption rendered under the input bar.
pub const CAPTION: &str = "El modelo puede producir informaci\u{f3}n incorrecta.";

/// Total height of the input bar including its border.
pub const INPUT_BAR_HEIGHT: u16 = 3;

/// Input bar for message entry.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    awaiting_reply: bool,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(
        input: &'a TextInputState,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            input,
            theme,
            icons,
            borders,
            awaiting_reply: false,
        }
    }

    /// Set whether a reply is pending (disables the input display).
    #[must_use]
    pub fn awaiting_reply(mut self, awaiting: bool) -> Self {
        self.awaiting_reply = awaiting;
        self
    }

    /// Build the content line: prompt, text around a block cursor, and a
    /// tail window when the text is wider than the bar.
    fn build_input_line(&self, inner_width: usize) -> Line<'static> {
        let prompt = "> ";

        if self.input.is_empty() {
            return Line::from(vec![
                Span::styled(prompt, Style::default().fg(self.theme.primary)),
                Span::styled("\u{2588}", Style::default().fg(self.theme.text)),
                Span::styled(
                    format!(" {PLACEHOLDER}"),
                    Style::default().fg(self.theme.muted),
                ),
            ]);
        }

        let chars: Vec<char> = self.input.content().chars().collect();
        let cursor = self.input.cursor().min(chars.len());

        let before: String = chars[..cursor].iter().collect();
        let at: String = chars
            .get(cursor)
            .map_or("\u{2588}".to_string(), |c| c.to_string());
        let after: String = if cursor < chars.len() {
            chars[cursor + 1..].iter().collect()
        } else {
            String::new()
        };

        // Keep the cursor visible: drop leading text if it would overflow.
        let budget = inner_width.saturating_sub(prompt.len() + 2);
        let mut visible_before = before;
        while visible_before.width() > budget && !visible_before.is_empty() {
            visible_before.remove(0);
        }

        let cursor_style = if cursor < chars.len() {
            // Block cursor over an existing character: invert it.
            Style::default().fg(self.theme.base).bg(self.theme.text)
        } else {
            Style::default().fg(self.theme.text)
        };

        Line::from(vec![
            Span::styled(prompt, Style::default().fg(self.theme.primary)),
            Span::styled(visible_before, Style::default().fg(self.theme.text)),
            Span::styled(at, cursor_style),
            Span::styled(after, Style::default().fg(self.theme.text)),
        ])
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.awaiting_reply {
            Style::default().fg(self.theme.border)
        } else {
            Style::default().fg(self.theme.border_focused)
        };
        let border_set = if self.awaiting_reply {
            self.borders.normal()
        } else {
            self.borders.focused()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(border_style)
            .style(Style::default().bg(self.theme.surface));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 1 || inner.height < 1 {
            return;
        }

        let line = if self.awaiting_reply {
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.icons.assistant()),
                    Style::default().fg(self.theme.muted),
                ),
                Span::styled(
                    "Esperando respuesta...",
                    Style::default().fg(self.theme.muted),
                ),
            ])
        } else {
            self.build_input_line(inner.width as usize)
        };

        Paragraph::new(line).render(inner, buf);

        // Send hint at the right edge, lit once there is something to send.
        if !self.awaiting_reply {
            let icon = self.icons.send();
            let icon_width = icon.width() as u16;
            if inner.width > icon_width + 2 {
                let style = if self.input.is_empty() {
                    Style::default().fg(self.theme.muted)
                } else {
                    Style::default().fg(self.theme.primary)
                };
                buf.set_string(inner.right() - icon_width, inner.y, icon, style);
            }
        }
    }
}

/// Caption widget rendered under the input bar.
pub struct Caption<'a> {
    theme: &'a Theme,
}

impl<'a> Caption<'a> {
    /// Create the caption widget.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Caption<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(
            CAPTION,
            Style::default().fg(self.theme.muted),
        )))
        .centered()
        .style(Style::default().bg(self.theme.base))
        .render(area, buf);
    }
}

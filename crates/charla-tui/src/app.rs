//! Application state for the chat screen.
//!
//! `App` owns the conversation, the input state, and the transcript scroll
//! state. There is no global state: everything is scoped to the instance
//! and dropped on exit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    buffer::Buffer,
};

use charla_core::{CannedReplier, ChatConfig, Conversation, Message};

use crate::event::Action;
use crate::theme::{BorderSet, IconSet, Theme};
use crate::transcript::{TranscriptState, TranscriptWidget, SCROLL_SPEED};
use crate::widgets::{Caption, InputBar, TextInputState, INPUT_BAR_HEIGHT};

/// Outcome of routing a key to the input handling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was consumed.
    Handled,
    /// The key submitted a message; a reply task must be started.
    Submitted,
    /// Not an input key; map it to an [`Action`].
    Ignored,
}

/// Application state.
pub struct App {
    /// The conversation state machine.
    pub conversation: Conversation,
    /// Pending input text.
    pub input: TextInputState,
    /// Transcript scroll state.
    pub transcript: TranscriptState,
    /// Color palette.
    pub theme: Theme,
    /// Icon set.
    pub icons: IconSet,
    /// Border set.
    pub borders: BorderSet,
    /// Reply source for submitted messages.
    pub replier: CannedReplier,
    /// Tick counter driving the waiting spinner.
    spinner_tick: usize,
    /// Set when the app should exit.
    pub should_quit: bool,
}

impl App {
    /// Create an app from configuration.
    pub fn new(config: &ChatConfig) -> Self {
        let icon_mode = config.icons.into();
        let conversation = match &config.greeting {
            Some(greeting) => Conversation::with_greeting(greeting.clone()),
            None => Conversation::new(),
        };
        Self {
            conversation,
            input: TextInputState::new(),
            transcript: TranscriptState::new(),
            theme: config.theme.into(),
            icons: IconSet::new(icon_mode),
            borders: BorderSet::new(icon_mode),
            replier: CannedReplier::with_delay(config.reply_delay()),
            spinner_tick: 0,
            should_quit: false,
        }
    }

    /// Advance the spinner animation. Called on every tick event.
    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    /// Check whether a reply is pending.
    pub fn is_awaiting_reply(&self) -> bool {
        self.conversation.is_awaiting_reply()
    }

    /// Submit the current input.
    ///
    /// Returns true if the conversation accepted it (non-empty, idle). On
    /// acceptance the input is cleared (and recorded in history) and the
    /// transcript snaps to the bottom. Otherwise nothing changes.
    pub fn submit_input(&mut self) -> bool {
        if self.conversation.submit(self.input.content()).is_none() {
            return false;
        }
        self.input.submit();
        self.transcript.notify_appended();
        true
    }

    /// Deliver the assistant reply for the pending submission.
    pub fn deliver_reply(&mut self, reply: Message) {
        self.conversation.deliver_reply(reply);
        self.transcript.notify_appended();
    }

    /// Route a key to the input layer.
    ///
    /// Editing keys are swallowed while a reply is pending (the input is
    /// disabled); navigation keys fall through to [`Action`] mapping.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Ignored;
        }

        let awaiting = self.is_awaiting_reply();
        match key.code {
            KeyCode::Enter => {
                if self.submit_input() {
                    KeyOutcome::Submitted
                } else {
                    KeyOutcome::Handled
                }
            }
            KeyCode::Char(c) => {
                if !awaiting {
                    self.input.insert(c);
                }
                KeyOutcome::Handled
            }
            KeyCode::Backspace => {
                if !awaiting {
                    self.input.backspace();
                }
                KeyOutcome::Handled
            }
            KeyCode::Delete => {
                if !awaiting {
                    self.input.delete();
                }
                KeyOutcome::Handled
            }
            KeyCode::Left => {
                self.input.move_left();
                KeyOutcome::Handled
            }
            KeyCode::Right => {
                self.input.move_right();
                KeyOutcome::Handled
            }
            KeyCode::Home => {
                self.input.move_home();
                KeyOutcome::Handled
            }
            KeyCode::End => {
                self.input.move_end();
                KeyOutcome::Handled
            }
            // History recall when the input is empty; otherwise let the
            // action layer scroll the transcript.
            KeyCode::Up if self.input.is_empty() && !awaiting => {
                self.input.history_prev();
                KeyOutcome::Handled
            }
            KeyCode::Down if self.input.is_empty() && !awaiting => {
                self.input.history_next();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Apply a non-input action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Up => self.transcript.scroll_up(1),
            Action::Down => self.transcript.scroll_down(1),
            Action::WheelUp => self.transcript.scroll_up(SCROLL_SPEED),
            Action::WheelDown => self.transcript.scroll_down(SCROLL_SPEED),
            Action::PageUp => self.transcript.page_up(),
            Action::PageDown => self.transcript.page_down(),
            Action::JumpToBottom => self.transcript.jump_to_bottom(),
            Action::None => {}
        }
    }

    /// Render the chat screen into a buffer.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        use ratatui::widgets::{StatefulWidget, Widget};

        let [transcript_area, input_area, caption_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(INPUT_BAR_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        let transcript = TranscriptWidget::new(self.conversation.messages(), &self.theme, &self.icons)
            .awaiting_reply(self.is_awaiting_reply())
            .spinner_tick(self.spinner_tick);
        transcript.render(transcript_area, buf, &mut self.transcript);

        InputBar::new(&self.input, &self.theme, &self.icons, &self.borders)
            .awaiting_reply(self.is_awaiting_reply())
            .render(input_area, buf);

        Caption::new(&self.theme).render(caption_area, buf);
    }

    /// Create an app with default config for tests.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(&ChatConfig::default())
    }
}

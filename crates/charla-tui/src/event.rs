//! Event handling for the charla TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for UI updates (spinner animation).
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else {
                    // No event, send tick
                    if tx_clone.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Non-input action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    WheelUp,
    WheelDown,
    PageUp,
    PageDown,
    JumpToBottom,
    None,
}

/// Convert a key event to an action.
///
/// Only keys the input layer declined end up here.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // Ctrl+End jumps back to the newest message
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::End {
        return Action::JumpToBottom;
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Up => Action::Up,
        KeyCode::Down => Action::Down,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(key), Action::Quit);
    }

    #[test]
    fn test_esc_quits() {
        assert_eq!(key_to_action(KeyEvent::from(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_arrows_scroll() {
        assert_eq!(key_to_action(KeyEvent::from(KeyCode::Up)), Action::Up);
        assert_eq!(key_to_action(KeyEvent::from(KeyCode::Down)), Action::Down);
        assert_eq!(
            key_to_action(KeyEvent::from(KeyCode::PageUp)),
            Action::PageUp
        );
    }

    #[test]
    fn test_ctrl_end_jumps_to_bottom() {
        let key = KeyEvent::new(KeyCode::End, KeyModifiers::CONTROL);
        assert_eq!(key_to_action(key), Action::JumpToBottom);
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(key_to_action(KeyEvent::from(KeyCode::F(5))), Action::None);
    }
}

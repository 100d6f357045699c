//! charla-tui: Terminal UI for the charla chat application
//!
//! This crate provides the TUI layer for charla, including:
//! - The chat screen (transcript + input bar)
//! - Theme (colors, icons, borders) with ASCII fallback
//! - The event loop driving the simulated reply task

mod app;
mod event;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod transcript;
pub mod widgets;

pub use app::{App, KeyOutcome};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use charla_core;

use charla_core::{ChatConfig, Message, Replier};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tokio::task::JoinHandle;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(config: &ChatConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Create event handler (4 Hz tick rate = 250ms, drives the spinner)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    // At most one reply task is outstanding: submission is rejected while a
    // reply is pending.
    let mut reply_handle: Option<JoinHandle<Message>> = None;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            app.render(area, buf);
        })?;

        // Check for a completed reply (non-blocking)
        if reply_handle.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = reply_handle.take() {
                if let Ok(reply) = handle.await {
                    app.deliver_reply(reply);
                }
            }
        }

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => match app.handle_key(key) {
                    KeyOutcome::Submitted => {
                        reply_handle = Some(spawn_reply_task(app));
                    }
                    KeyOutcome::Handled => {}
                    KeyOutcome::Ignored => {
                        app.handle_action(key_to_action(key));
                    }
                },
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.handle_action(Action::WheelUp),
                        MouseEventKind::ScrollDown => app.handle_action(Action::WheelDown),
                        _ => {}
                    }
                }
                Event::Tick => {
                    app.tick();
                }
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            if let Some(handle) = reply_handle.take() {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Start the simulated reply task for the just-submitted message.
fn spawn_reply_task(app: &App) -> JoinHandle<Message> {
    let replier = app.replier.clone();
    let history = app.conversation.messages().to_vec();
    tokio::spawn(async move { replier.reply(&history).await })
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

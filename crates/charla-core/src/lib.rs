//! charla-core: Headless conversation engine for the charla chat TUI
//!
//! This crate provides the non-terminal half of charla, including:
//! - Message and role types
//! - The conversation state machine (idle / awaiting-reply)
//! - The simulated replier (fixed delay, fixed reply)
//! - Configuration load/save

pub mod config;
pub mod conversation;
pub mod message;
pub mod reply;

// Re-export commonly used types
pub use config::{ChatConfig, ConfigError, IconPreference, ThemeName, CHARLA_DIR, CONFIG_FILE};
pub use conversation::{Conversation, Phase, DEFAULT_GREETING};
pub use message::{Message, Role};
pub use reply::{CannedReplier, Replier, CANNED_REPLY, DEFAULT_REPLY_DELAY};

/// Returns the engine version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

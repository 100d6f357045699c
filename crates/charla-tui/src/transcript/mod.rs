//! Transcript module for displaying the conversation.
//!
//! This module provides:
//! - [`TranscriptState`] - Scroll state with follow-to-bottom behavior
//! - [`TranscriptWidget`] - Widget rendering message blocks and the
//!   waiting indicator

mod state;
mod widget;

pub use state::{TranscriptState, SCROLL_SPEED};
pub use widget::TranscriptWidget;

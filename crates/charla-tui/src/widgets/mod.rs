//! Shared widgets for the chat screen.

mod input_bar;
mod text_input;

pub use input_bar::{Caption, InputBar, CAPTION, INPUT_BAR_HEIGHT, PLACEHOLDER};
pub use text_input::TextInputState;

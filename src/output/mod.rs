//! Terminal output formatting
//!
//! Feedback rendering and the messages shown to the player.

pub mod display;
pub mod formatters;

pub use formatters::{feedback_to_emoji, hint_symbol, symbol_for_code};

//! Game loop for Gordle
//!
//! Validation of guesses and the session driving a single game.

pub mod config;
mod session;
mod validator;

pub use config::GameConfig;
pub use session::{Outcome, Session};
pub use validator::{GuessError, validate_guess};

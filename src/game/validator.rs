//! Guess validation
//!
//! A guess is structurally valid when it has as many characters as the
//! solution. Its content is never judged.

use crate::core::Word;
use std::fmt;

/// Error type for rejected guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// The guess does not have the same number of characters as the solution
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Expected {expected} characters, got {actual}")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Check that `guess` can be scored against `solution`
///
/// # Errors
///
/// Returns `GuessError::InvalidLength` if the character counts differ.
///
/// # Examples
/// ```
/// use gordle::core::Word;
/// use gordle::game::{GuessError, validate_guess};
///
/// let solution = Word::new("HELLO");
/// assert!(validate_guess(&Word::new("xyzzy"), &solution).is_ok());
/// assert_eq!(
///     validate_guess(&Word::new("hi"), &solution),
///     Err(GuessError::InvalidLength { expected: 5, actual: 2 })
/// );
/// ```
pub fn validate_guess(guess: &Word, solution: &Word) -> Result<(), GuessError> {
    if guess.len() != solution.len() {
        return Err(GuessError::InvalidLength {
            expected: solution.len(),
            actual: guess.len(),
        });
    }

    Ok(())
}

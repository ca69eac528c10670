//! Formatting utilities for terminal output

use crate::core::{Feedback, Hint};
use std::fmt;

/// Symbol for a character in the correct position
pub const CORRECT_SYMBOL: &str = "💚";
/// Symbol for a character present elsewhere in the solution
pub const WRONG_POSITION_SYMBOL: &str = "🟡";
/// Symbol for a character absent from the solution
pub const ABSENT_SYMBOL: &str = "⬜️";
/// Symbol for a hint code that could not be decoded
pub const BROKEN_SYMBOL: &str = "💔";

/// Symbol displayed for a hint
#[must_use]
pub const fn hint_symbol(hint: Hint) -> &'static str {
    match hint {
        Hint::CorrectPosition => CORRECT_SYMBOL,
        Hint::WrongPosition => WRONG_POSITION_SYMBOL,
        Hint::AbsentCharacter => ABSENT_SYMBOL,
    }
}

/// Symbol displayed for a raw hint code, broken heart when it is unknown
#[must_use]
pub fn symbol_for_code(code: u8) -> &'static str {
    Hint::try_from(code).map_or(BROKEN_SYMBOL, hint_symbol)
}

/// Format feedback as an emoji string, one symbol per character
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.hints().iter().map(|&h| hint_symbol(h)).collect()
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&feedback_to_emoji(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn feedback_all_correct() {
        let feedback = Feedback::from_hints(vec![Hint::CorrectPosition; 3]);
        assert_eq!(feedback_to_emoji(&feedback), "💚💚💚");
    }

    #[test]
    fn feedback_various_hints() {
        let feedback = Feedback::from_hints(vec![
            Hint::WrongPosition,
            Hint::CorrectPosition,
            Hint::AbsentCharacter,
        ]);
        assert_eq!(feedback.to_string(), "🟡💚⬜️");
    }

    #[test]
    fn invalid_hint_code_is_broken() {
        assert_eq!(symbol_for_code(42), "💔");
        assert_eq!(symbol_for_code(u8::MAX), BROKEN_SYMBOL);
    }

    #[test]
    fn known_codes_match_hints() {
        let rendered: String = [1, 2, 0].into_iter().map(symbol_for_code).collect();
        assert_eq!(rendered, "🟡💚⬜️");
    }

    #[test]
    fn computed_feedback_display() {
        let feedback = Feedback::compute(&Word::new("HOLLE"), &Word::new("HELLO"));
        assert_eq!(feedback.to_string(), "💚🟡💚💚🟡");
    }

    #[test]
    fn empty_feedback_renders_empty() {
        assert_eq!(Feedback::default().to_string(), "");
    }
}

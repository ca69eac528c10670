//! Word representation
//!
//! A Word stores its characters as Unicode scalar values so that guesses in
//! any script are measured and compared per character, never per byte.

use std::fmt;

/// An uppercase word, stored character by character
///
/// Words are normalized to uppercase at construction, so comparisons between
/// a guess and the solution are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Word {
    chars: Vec<char>,
}

impl Word {
    /// Create a new Word from any text, normalizing it to uppercase
    ///
    /// No validation happens here: the length rules live in the guess
    /// validator, which compares against the solution.
    ///
    /// # Examples
    /// ```
    /// use gordle::core::Word;
    ///
    /// let word = Word::new("AppLe");
    /// assert_eq!(word.to_string(), "APPLE");
    /// assert_eq!(word.len(), 5);
    ///
    /// // Multi-byte scripts count characters, not bytes
    /// assert_eq!(Word::new("こんにちは").len(), 5);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().map(uppercase_char).collect(),
        }
    }

    /// Get the characters of the word
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Uppercase one character without changing the word's length
///
/// Characters whose uppercase form spans several characters (`ß` → `SS`)
/// are kept as they are.
fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_mixed_case_normalized() {
        assert_eq!(Word::new("AppLe").chars(), &['A', 'P', 'P', 'L', 'E']);
    }

    #[test]
    fn word_already_uppercase() {
        assert_eq!(Word::new("APPLE"), Word::new("apple"));
    }

    #[test]
    fn word_empty() {
        let word = Word::new("");
        assert!(word.is_empty());
        assert_eq!(word.len(), 0);
        assert_eq!(word, Word::default());
    }

    #[test]
    fn word_length_counts_characters() {
        assert_eq!(Word::new("HELLO").len(), 5);
        assert_eq!(Word::new("مرحبا").len(), 5);
        assert_eq!(Word::new("こんにちは").len(), 5);
        assert_eq!(Word::new("привет").len(), 6);
    }

    #[test]
    fn word_uppercases_other_scripts() {
        assert_eq!(Word::new("χαιρε").to_string(), "ΧΑΙΡΕ");
        assert_eq!(Word::new("привет").to_string(), "ПРИВЕТ");
    }

    #[test]
    fn word_uppercasing_keeps_length() {
        let word = Word::new("straße");
        assert_eq!(word.len(), 6);
        assert_eq!(word.to_string(), "STRAßE");

        // Ligatures expand under full case mapping
        assert_eq!(Word::new("ﬁne").len(), 3);
    }

    #[test]
    fn word_display() {
        let word = Word::from("crane");
        assert_eq!(format!("{word}"), "CRANE");
    }
}

//! Guess feedback calculation
//!
//! Feedback holds one [`Hint`] per character of the guess:
//! - `CorrectPosition`: the character is at this position in the solution
//! - `WrongPosition`: the character is elsewhere in the solution
//! - `AbsentCharacter`: the character is not (or no longer) available
//!
//! Duplicate letters are matched left to right: each solution character can
//! back at most one hint, and the leftmost unmatched guess character claims
//! it first.

use super::Word;

/// Verdict for a single character of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hint {
    /// Character not in the solution, or all its occurrences already matched
    #[default]
    AbsentCharacter,
    /// Character in the solution, but at another position
    WrongPosition,
    /// Character at exactly this position in the solution
    CorrectPosition,
}

impl Hint {
    /// Stable numeric code of the hint (absent = 0, wrong = 1, correct = 2)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::AbsentCharacter => 0,
            Self::WrongPosition => 1,
            Self::CorrectPosition => 2,
        }
    }
}

/// Error returned when decoding a numeric code that is not a known hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownHint(pub u8);

impl std::fmt::Display for UnknownHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown hint code {}", self.0)
    }
}

impl std::error::Error for UnknownHint {}

impl TryFrom<u8> for Hint {
    type Error = UnknownHint;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::AbsentCharacter),
            1 => Ok(Self::WrongPosition),
            2 => Ok(Self::CorrectPosition),
            other => Err(UnknownHint(other)),
        }
    }
}

/// Feedback for a whole guess, one hint per guess character
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Feedback(Vec<Hint>);

impl Feedback {
    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume those solution
    ///    positions
    /// 2. Second pass: for every unmarked guess character, scan the solution
    ///    left to right and claim the first unconsumed equal character
    ///
    /// If the lengths differ, an error is logged and every position is
    /// reported absent. Callers are expected to validate the guess first.
    ///
    /// # Examples
    /// ```
    /// use gordle::core::{Feedback, Hint, Word};
    ///
    /// let feedback = Feedback::compute(&Word::new("LLLLL"), &Word::new("HELLO"));
    /// assert_eq!(
    ///     feedback.hints(),
    ///     &[
    ///         Hint::AbsentCharacter,
    ///         Hint::AbsentCharacter,
    ///         Hint::CorrectPosition,
    ///         Hint::CorrectPosition,
    ///         Hint::AbsentCharacter,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, solution: &Word) -> Self {
        let guess = guess.chars();
        let solution = solution.chars();
        let mut result = vec![Hint::AbsentCharacter; guess.len()];

        if guess.len() != solution.len() {
            log::error!(
                "Internal error! Guess and solution have different lengths: {} vs {}",
                guess.len(),
                solution.len()
            );
            return Self(result);
        }

        let mut used = vec![false; solution.len()];

        // First pass: exact matches
        for (i, (g, s)) in guess.iter().zip(solution).enumerate() {
            if g == s {
                result[i] = Hint::CorrectPosition;
                used[i] = true;
            }
        }

        // Second pass: leftmost unconsumed match elsewhere
        for (i, character) in guess.iter().enumerate() {
            if result[i] != Hint::AbsentCharacter {
                continue;
            }

            let claimed = solution
                .iter()
                .zip(used.iter_mut())
                .find(|(target, taken)| !**taken && *target == character);

            if let Some((_, taken)) = claimed {
                *taken = true;
                result[i] = Hint::WrongPosition;
            }
        }

        Self(result)
    }

    /// Build feedback from already computed hints
    #[must_use]
    pub const fn from_hints(hints: Vec<Hint>) -> Self {
        Self(hints)
    }

    /// The hints, in guess order
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count positions carrying the given hint
    #[must_use]
    pub fn count(&self, hint: Hint) -> usize {
        self.0.iter().filter(|&&h| h == hint).count()
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&h| h == Hint::CorrectPosition)
    }
}

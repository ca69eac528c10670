//! Game session
//!
//! Drives one game: ask for a guess until a valid one is given, score it,
//! and stop on an exact match or when the attempts run out.

use super::config::GameConfig;
use super::validator::validate_guess;
use crate::core::{Feedback, Word};
use crate::output::display;
use crate::wordlists::{CorpusError, pick_word};
use rand::Rng;
use std::io::{self, BufRead};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The solution was found on the given attempt
    Won { attempts: u32 },
    /// Every attempt was used without finding the solution
    Lost,
    /// Input ended while waiting for a guess, the game was stopped
    Abandoned,
}

/// One game of Gordle, reading guesses from `R`
pub struct Session<R> {
    reader: R,
    solution: Word,
    max_attempts: u32,
    max_eof_reads: u32,
}

impl<R: BufRead> Session<R> {
    /// Create a session whose solution is picked from `corpus` with `rng`
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if the corpus has no words. No input is
    /// read in that case.
    pub fn new<G: Rng + ?Sized>(
        reader: R,
        corpus: &[String],
        config: &GameConfig,
        rng: &mut G,
    ) -> Result<Self, CorpusError> {
        let solution = Word::new(pick_word(corpus, rng)?);
        log::debug!("Picked a {}-character solution", solution.len());

        let mut session = Self::with_solution(reader, solution, config.max_attempts);
        session.max_eof_reads = config.max_eof_reads;
        Ok(session)
    }

    /// Create a session around a known solution
    ///
    /// # Examples
    /// ```
    /// use gordle::core::Word;
    /// use gordle::game::{Outcome, Session};
    /// use std::io::Cursor;
    ///
    /// let input = Cursor::new("world\nhello\n");
    /// let mut session = Session::with_solution(input, Word::new("hello"), 6);
    /// assert_eq!(session.play(), Outcome::Won { attempts: 2 });
    /// ```
    #[must_use]
    pub fn with_solution(reader: R, solution: Word, max_attempts: u32) -> Self {
        Self {
            reader,
            solution,
            max_attempts,
            max_eof_reads: GameConfig::default().max_eof_reads,
        }
    }

    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run the game to completion
    pub fn play(&mut self) -> Outcome {
        display::print_welcome(self.max_attempts);

        for attempt in 1..=self.max_attempts {
            let Some(guess) = self.ask() else {
                log::warn!("Abandoning game on attempt {attempt}: input unavailable");
                display::print_abandoned(&self.solution);
                return Outcome::Abandoned;
            };

            let feedback = Feedback::compute(&guess, &self.solution);
            display::print_feedback(&feedback);

            if guess == self.solution {
                display::print_win(attempt, &self.solution);
                return Outcome::Won { attempts: attempt };
            }

            log::debug!("Attempt {attempt}/{} missed", self.max_attempts);
        }

        display::print_loss(&self.solution);
        Outcome::Lost
    }

    /// Read input until a valid guess is made
    ///
    /// Read errors are reported and retried. Returns `None` once the input
    /// has ended too many times in a row.
    fn ask(&mut self) -> Option<Word> {
        display::print_prompt(self.solution.len());

        let mut eof_reads = 0;
        loop {
            match self.read_guess() {
                Ok(guess) => {
                    eof_reads = 0;
                    match validate_guess(&guess, &self.solution) {
                        Ok(()) => return Some(guess),
                        Err(err) => display::print_invalid_guess(&err),
                    }
                }
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    eof_reads += 1;
                    log::warn!("No input while waiting for a guess ({eof_reads} in a row)");
                    display::print_read_failure(&err.to_string());

                    if eof_reads >= self.max_eof_reads.max(1) {
                        return None;
                    }
                }
                Err(err) => {
                    log::warn!("Failed to read guess: {err}");
                    display::print_read_failure(&err.to_string());
                }
            }
        }
    }

    /// Read one line and turn it into an uppercase guess
    fn read_guess(&mut self) -> io::Result<Word> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input",
            ));
        }

        Ok(Word::new(line.trim_end_matches(['\r', '\n'])))
    }
}

//! Word lists for Gordle
//!
//! Loads the corpus the solution is drawn from and picks the solution.

pub mod corpus;

pub use corpus::{CorpusError, parse_corpus, pick_word, read_corpus};

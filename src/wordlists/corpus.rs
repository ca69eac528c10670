//! Corpus loading and solution picking
//!
//! A corpus is a whitespace (space or newline) separated list of words.

use rand::Rng;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for corpus loading and word picking
#[derive(Debug)]
pub enum CorpusError {
    /// The corpus source could not be read
    Unreadable { path: PathBuf, source: io::Error },
    /// The corpus contains no words
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "unable to open {} for reading: {source}", path.display())
            }
            Self::Empty => write!(f, "corpus is empty"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Split in-memory corpus text into words
///
/// # Examples
/// ```
/// use gordle::wordlists::parse_corpus;
///
/// let words = parse_corpus("hello salut\nhola\n");
/// assert_eq!(words, ["hello", "salut", "hola"]);
/// ```
#[must_use]
pub fn parse_corpus(data: &str) -> Vec<String> {
    data.split_whitespace().map(str::to_string).collect()
}

/// Read the corpus file located at `path`
///
/// # Errors
///
/// Returns `CorpusError::Unreadable` if the file cannot be read, and
/// `CorpusError::Empty` if it contains no words.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| CorpusError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_corpus(&data);
    if words.is_empty() {
        return Err(CorpusError::Empty);
    }

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Pick one word of the corpus, uniformly by index
///
/// The random source is supplied by the caller so tests can seed it.
///
/// # Errors
///
/// Returns `CorpusError::Empty` if the corpus has no words.
///
/// # Examples
/// ```
/// use gordle::wordlists::pick_word;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let corpus = vec!["HELLO".to_string(), "SALUT".to_string()];
/// let mut rng = StdRng::seed_from_u64(7);
/// let word = pick_word(&corpus, &mut rng).unwrap();
/// assert!(corpus.iter().any(|w| w == word));
/// ```
pub fn pick_word<'a, R: Rng + ?Sized>(
    corpus: &'a [String],
    rng: &mut R,
) -> Result<&'a str, CorpusError> {
    if corpus.is_empty() {
        return Err(CorpusError::Empty);
    }

    let index = rng.random_range(0..corpus.len());
    Ok(&corpus[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("corpus").join(name)
    }

    #[test]
    fn read_english_corpus() {
        let words = read_corpus(fixture("english.txt")).unwrap();
        let raw = fs::read_to_string(fixture("english.txt")).unwrap();

        assert_eq!(words.len(), raw.split_whitespace().count());
        assert!(!words.is_empty());
    }

    #[test]
    fn read_empty_corpus() {
        assert!(matches!(
            read_corpus(fixture("empty.txt")),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn read_missing_corpus() {
        let err = read_corpus(fixture("does-not-exist.txt")).unwrap_err();

        assert!(matches!(err, CorpusError::Unreadable { .. }));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("does-not-exist.txt"));
    }

    #[test]
    fn parse_corpus_mixed_separators() {
        let words = parse_corpus("  HELLO\tSALUT\n\nПРИВЕТ ΧΑΙΡΕ \r\n");
        assert_eq!(words, ["HELLO", "SALUT", "ПРИВЕТ", "ΧΑΙΡΕ"]);
    }

    #[test]
    fn parse_corpus_blank() {
        assert!(parse_corpus(" \n\t ").is_empty());
    }

    #[test]
    fn pick_word_empty_corpus() {
        let corpus: Vec<String> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            pick_word(&corpus, &mut rng),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn pick_word_single_word() {
        let corpus = vec!["HELLO".to_string()];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_word(&corpus, &mut rng).unwrap(), "HELLO");
    }

    #[test]
    fn pick_word_is_deterministic_for_seed() {
        let corpus = parse_corpus("ALPHA BRAVO CHARLIE DELTA ECHO");
        let first = pick_word(&corpus, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = pick_word(&corpus, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pick_word_reaches_every_index() {
        let corpus = parse_corpus("ALPHA BRAVO CHARLIE");
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let word = pick_word(&corpus, &mut rng).unwrap();
            let index = corpus.iter().position(|w| w == word).unwrap();
            seen[index] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}

//! Secret word supply.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

const BUILTIN_WORDS: &str = include_str!("../data/words.txt");

/// Anything that can hand out secret words.
///
/// Implementations return non-empty, purely alphabetic words; the engine
/// normalizes case itself.
pub trait WordSource {
    /// Picks the next secret word.
    fn get_word(&mut self) -> String;
}

/// Problems building a word corpus.
///
/// These are configuration failures: a process with a bad corpus should not
/// start serving games.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DictionaryError {
    /// No usable words remained after filtering.
    #[display("Dictionary corpus is empty")]
    EmptyCorpus,

    /// An entry contained something other than letters.
    #[display("Dictionary entry {:?} on line {} must contain letters only", word, line)]
    InvalidWord {
        /// The offending entry.
        word: String,
        /// 1-based line number in the corpus.
        line: usize,
    },

    /// The corpus file could not be read.
    #[display("Failed to read dictionary {}: {}", path, message)]
    Unreadable {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        message: String,
    },

    /// A word source produced something unusable as a secret word.
    #[display("Word source produced unusable word {:?}", _0)]
    Rejected(String),
}

impl std::error::Error for DictionaryError {}

/// Uniform random selection over a fixed, de-duplicated corpus.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    rng: StdRng,
}

impl Dictionary {
    /// Builds a dictionary from raw entries.
    ///
    /// Entries are trimmed and uppercased. Blank entries and `#` comments are
    /// skipped; anything else that is not purely ASCII alphabetic fails the
    /// whole corpus.
    #[instrument(skip(entries, rng))]
    pub fn new<I, S>(entries: I, rng: StdRng) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let entry = entry.as_ref().trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if !entry.chars().all(|c| c.is_ascii_alphabetic()) {
                warn!(line = index + 1, word = entry, "Invalid dictionary entry");
                return Err(DictionaryError::InvalidWord {
                    word: entry.to_string(),
                    line: index + 1,
                });
            }
            words.push(entry.to_ascii_uppercase());
        }

        words.sort();
        words.dedup();

        if words.is_empty() {
            warn!("Dictionary corpus is empty");
            return Err(DictionaryError::EmptyCorpus);
        }

        debug!(count = words.len(), "Dictionary loaded");
        Ok(Self { words, rng })
    }

    /// Builds a dictionary whose choices repeat for a given seed.
    ///
    /// Without a seed the generator is seeded from entropy.
    pub fn seeded<I, S>(entries: I, seed: Option<u64>) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(entries, rng_from(seed))
    }

    /// Loads a newline-separated word list.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>, seed: Option<u64>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DictionaryError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let dictionary = Self::seeded(content.lines(), seed)?;
        info!(count = dictionary.len(), "Loaded dictionary from file");
        Ok(dictionary)
    }

    /// The bundled winter-themed corpus.
    pub fn builtin(seed: Option<u64>) -> Result<Self, DictionaryError> {
        Self::seeded(BUILTIN_WORDS.lines(), seed)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed dictionary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The normalized corpus in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSource for Dictionary {
    fn get_word(&mut self) -> String {
        // Construction guarantees at least one word.
        self.words.choose(&mut self.rng).cloned().unwrap_or_default()
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

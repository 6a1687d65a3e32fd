//! Core domain types for snowman.

use serde::Serialize;
use tracing::instrument;

/// Misses allowed before the snowman melts.
pub const MAX_INCORRECT_GUESSES: u8 = 5;

/// Symbol shown for a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// The word the player is trying to guess.
///
/// Always non-empty and made of ASCII uppercase letters only, so byte
/// offsets and character positions coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct SecretWord(String);

impl SecretWord {
    /// Normalizes `word` to uppercase and checks it is purely alphabetic.
    ///
    /// Returns the rejected input on failure.
    #[instrument(skip(word), fields(length = word.trim().len()))]
    pub fn new(word: &str) -> Result<Self, String> {
        let word = word.trim();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(word.to_string());
        }
        Ok(Self(word.to_ascii_uppercase()))
    }

    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the letter occurs anywhere in the word.
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// Iterates the letters in order.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

/// The display string: guessed letters in place, placeholders elsewhere.
///
/// Values are never edited in place. Every reveal builds a new `Revealed`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct Revealed(String);

impl Revealed {
    /// All placeholders, one per letter of `secret`.
    pub fn hidden(secret: &SecretWord) -> Self {
        Self(PLACEHOLDER.to_string().repeat(secret.len()))
    }

    /// The fully uncovered word.
    pub fn solved(secret: &SecretWord) -> Self {
        Self(secret.as_str().to_string())
    }

    /// Wraps a raw display string without checking it against a secret.
    ///
    /// Used when restoring persisted state; callers validate afterwards.
    pub(crate) fn from_raw(raw: String) -> Self {
        Self(raw)
    }

    /// Uncovers every position of `secret` that holds `letter`.
    pub fn reveal(&self, secret: &SecretWord, letter: char) -> Self {
        let revealed = self
            .0
            .chars()
            .zip(secret.chars())
            .map(|(shown, actual)| if actual == letter { actual } else { shown })
            .collect();
        Self(revealed)
    }

    /// Returns true once nothing is hidden.
    pub fn is_solved(&self, secret: &SecretWord) -> bool {
        self.0 == secret.as_str()
    }

    /// Returns the display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in positions.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true for an empty display string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

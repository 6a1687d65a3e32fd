//! First-class guess actions.
//!
//! Raw input is parsed into a [`Guess`] before it reaches a session, so
//! evaluation only ever sees normalized, alphabetic guesses.

use tracing::{debug, instrument};

/// A player's guess: one letter or an attempt at the whole word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    /// A single uppercase letter.
    Letter(char),
    /// Two or more uppercase letters, compared against the whole secret word.
    Word(String),
}

impl Guess {
    /// Parses and normalizes raw player input.
    ///
    /// Surrounding whitespace is ignored and letters are uppercased.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GuessError::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            debug!(input = trimmed, "Rejected non-alphabetic guess");
            return Err(GuessError::NonAlphabetic(trimmed.to_string()));
        }

        let upper = trimmed.to_ascii_uppercase();
        let mut chars = upper.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(Guess::Letter(letter)),
            _ => Ok(Guess::Word(upper)),
        }
    }

    /// Returns the guess as it should be echoed back to the player.
    pub fn text(&self) -> String {
        match self {
            Guess::Letter(letter) => letter.to_string(),
            Guess::Word(word) => word.clone(),
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Letter(letter) => write!(f, "letter {}", letter),
            Guess::Word(word) => write!(f, "word {}", word),
        }
    }
}

/// Reasons a guess is refused before evaluation.
///
/// None of these mutate the session. Wrong guesses are not errors; they are
/// reported through [`crate::GuessResult`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The input was empty or only whitespace.
    #[display("Guess is empty")]
    Empty,

    /// The input contained something other than letters.
    #[display("Guess {:?} must contain letters only", _0)]
    NonAlphabetic(String),

    /// The session already ended in a win or a loss.
    #[display("Game is already over")]
    GameOver,

    /// There is no game in progress to guess against.
    #[display("No game in progress")]
    NoActiveGame,

    /// A postcondition failed after evaluation.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl GuessError {
    /// Returns true for problems with the player's input itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GuessError::Empty | GuessError::NonAlphabetic(_))
    }
}

impl std::error::Error for GuessError {}

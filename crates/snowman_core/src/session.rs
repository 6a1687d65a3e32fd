//! Per-conversation game state and guess evaluation.

use crate::action::{Guess, GuessError};
use crate::contracts::{Contract, GuessContract};
use crate::invariants::{InvariantSet, SnowmanInvariants};
use crate::types::{MAX_INCORRECT_GUESSES, Revealed, SecretWord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Guesses are accepted.
    Active,
    /// Every letter is uncovered.
    Won,
    /// The snowman melted.
    Lost,
}

impl SessionStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Active)
    }
}

/// Classification of a single evaluated guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GuessResult {
    /// The guess completed the word.
    Win,
    /// The guess was the final allowed miss.
    Lose,
    /// The guess was right and the game continues.
    CorrectGuess,
    /// The guess was wrong and the game continues.
    IncorrectGuess,
}

/// What a guess did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct GuessOutcome {
    result: GuessResult,
    revealed: String,
    incorrect_guesses: u8,
}

impl GuessOutcome {
    /// The classification of the guess.
    pub fn result(&self) -> GuessResult {
        self.result
    }

    /// The display string after the guess.
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// Misses so far, including this guess.
    pub fn incorrect_guesses(&self) -> u8 {
        self.incorrect_guesses
    }
}

/// Persisted session state that fails validation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The stored fields contradict each other or the game rules.
    #[display("Corrupt session: {}", _0)]
    Corrupt(String),
}

impl std::error::Error for SessionError {}

/// Raw persisted fields, as handed back by whatever stores the session.
#[derive(Debug, Deserialize)]
struct SessionRecord {
    secret_word: String,
    revealed: String,
    incorrect_guesses: u8,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        GameSession::restore(&record.secret_word, &record.revealed, record.incorrect_guesses)
    }
}

/// A single game: secret word, progress and misses.
///
/// Serializes to its three persisted fields. Deserializing validates them,
/// so a session arriving from outside the process is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    pub(crate) secret_word: SecretWord,
    pub(crate) revealed: Revealed,
    pub(crate) incorrect_guesses: u8,
}

impl GameSession {
    /// Starts a fresh game around `secret_word`.
    #[instrument(skip(secret_word), fields(length = secret_word.len()))]
    pub fn new(secret_word: SecretWord) -> Self {
        debug!(secret_word = %secret_word, "New session");
        Self {
            revealed: Revealed::hidden(&secret_word),
            secret_word,
            incorrect_guesses: 0,
        }
    }

    /// Rebuilds a session from persisted fields, checking every invariant.
    #[instrument(skip(secret_word))]
    pub fn restore(
        secret_word: &str,
        revealed: &str,
        incorrect_guesses: u8,
    ) -> Result<Self, SessionError> {
        let secret_word = SecretWord::new(secret_word).map_err(|word| {
            SessionError::Corrupt(format!("secret word {:?} must contain letters only", word))
        })?;

        let session = Self {
            secret_word,
            revealed: Revealed::from_raw(revealed.to_string()),
            incorrect_guesses,
        };

        SnowmanInvariants::check_all(&session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(descriptions = %descriptions, "Rejected persisted session");
            SessionError::Corrupt(descriptions)
        })?;

        Ok(session)
    }

    /// The word being guessed.
    pub fn secret_word(&self) -> &SecretWord {
        &self.secret_word
    }

    /// Current display string.
    pub fn revealed(&self) -> &Revealed {
        &self.revealed
    }

    /// Misses so far.
    pub fn incorrect_guesses(&self) -> u8 {
        self.incorrect_guesses
    }

    /// Misses left before the game is lost.
    pub fn remaining_guesses(&self) -> u8 {
        MAX_INCORRECT_GUESSES.saturating_sub(self.incorrect_guesses)
    }

    /// Derives the session status. A solved word wins even at the miss limit.
    pub fn status(&self) -> SessionStatus {
        if self.revealed.is_solved(&self.secret_word) {
            SessionStatus::Won
        } else if self.incorrect_guesses >= MAX_INCORRECT_GUESSES {
            SessionStatus::Lost
        } else {
            SessionStatus::Active
        }
    }

    /// Applies a guess and reports what happened.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (session must be active)
    /// - Postconditions checked in debug builds only
    ///
    /// On error the session is left exactly as it was.
    #[instrument(skip(self), fields(revealed = %self.revealed, incorrect_guesses = self.incorrect_guesses))]
    pub fn apply_guess(&mut self, guess: &Guess) -> Result<GuessOutcome, GuessError> {
        GuessContract::pre(self, guess)?;

        let (next, correct) = self.evaluate(guess);

        #[cfg(debug_assertions)]
        GuessContract::post(self, &next)?;

        *self = next;

        let result = match self.status() {
            SessionStatus::Won => GuessResult::Win,
            SessionStatus::Lost if !correct => GuessResult::Lose,
            _ if correct => GuessResult::CorrectGuess,
            _ => GuessResult::IncorrectGuess,
        };

        info!(
            guess = %guess,
            result = %result,
            revealed = %self.revealed,
            incorrect_guesses = self.incorrect_guesses,
            "Guess evaluated"
        );

        Ok(GuessOutcome::new(
            result,
            self.revealed.as_str().to_string(),
            self.incorrect_guesses,
        ))
    }

    /// Computes the successor state without touching `self`.
    fn evaluate(&self, guess: &Guess) -> (Self, bool) {
        let mut next = self.clone();
        let correct = match guess {
            Guess::Letter(letter) if self.secret_word.contains(*letter) => {
                next.revealed = self.revealed.reveal(&self.secret_word, *letter);
                true
            }
            Guess::Word(word) if word.as_str() == self.secret_word.as_str() => {
                next.revealed = Revealed::solved(&self.secret_word);
                true
            }
            _ => {
                next.incorrect_guesses = self.incorrect_guesses.saturating_add(1);
                false
            }
        };
        (next, correct)
    }
}

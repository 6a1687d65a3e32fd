//! Contract-based validation for guesses.
//!
//! Contracts formalize the Hoare-style reasoning around a guess:
//! {P(session, guess)} apply_guess {Q(before, after)}

use crate::action::{Guess, GuessError};
use crate::invariants::{InvariantSet, SnowmanInvariants};
use crate::session::{GameSession, SessionStatus};
use crate::types::PLACEHOLDER;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

/// Precondition: the session must still accept guesses.
pub struct SessionIsActive;

impl SessionIsActive {
    /// Fails with [`GuessError::GameOver`] for won or lost sessions.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), GuessError> {
        if session.status() == SessionStatus::Active {
            Ok(())
        } else {
            Err(GuessError::GameOver)
        }
    }
}

/// Precondition: a word guess must be made of letters.
///
/// [`Guess::parse`] already guarantees this; guesses built by hand are
/// checked here too.
pub struct GuessIsAlphabetic;

impl GuessIsAlphabetic {
    /// Fails with [`GuessError::NonAlphabetic`] for anything but uppercase letters.
    #[instrument]
    pub fn check(guess: &Guess) -> Result<(), GuessError> {
        let valid = match guess {
            Guess::Letter(letter) => letter.is_ascii_uppercase(),
            Guess::Word(word) => !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase()),
        };
        if valid {
            Ok(())
        } else {
            Err(GuessError::NonAlphabetic(guess.text()))
        }
    }
}

/// Postcondition: nothing once shown is hidden again, and the miss counter
/// moves by at most one.
pub struct ProgressIsMonotonic;

impl ProgressIsMonotonic {
    /// Compares two consecutive states of the same game.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameSession, after: &GameSession) -> bool {
        let same_word = before.secret_word() == after.secret_word();
        let kept_letters = before
            .revealed()
            .as_str()
            .chars()
            .zip(after.revealed().as_str().chars())
            .all(|(was, now)| was == PLACEHOLDER || was == now);
        let misses = after.incorrect_guesses().checked_sub(before.incorrect_guesses());
        let counter_ok = matches!(misses, Some(0) | Some(1));

        let valid = same_word && kept_letters && counter_ok;
        if !valid {
            warn!(same_word, kept_letters, counter_ok, "Progress monotonicity violated");
        }
        valid
    }
}

/// Contract for guess actions.
///
/// Preconditions:
/// - Session is active
/// - Guess is alphabetic
///
/// Postconditions:
/// - All session invariants hold
/// - Progress is monotonic
pub struct GuessContract;

impl Contract<GameSession, Guess> for GuessContract {
    fn pre(session: &GameSession, guess: &Guess) -> Result<(), GuessError> {
        SessionIsActive::check(session)?;
        GuessIsAlphabetic::check(guess)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), GuessError> {
        SnowmanInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !ProgressIsMonotonic::holds(before, after) {
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: progress went backwards".to_string(),
            ));
        }

        Ok(())
    }
}

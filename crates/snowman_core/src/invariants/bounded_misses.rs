//! Bounded misses invariant: the miss counter stops at the limit.

use super::Invariant;
use crate::types::MAX_INCORRECT_GUESSES;
use crate::GameSession;

/// Invariant: a session never records more misses than the game allows.
pub struct BoundedMissesInvariant;

impl Invariant<GameSession> for BoundedMissesInvariant {
    fn holds(session: &GameSession) -> bool {
        session.incorrect_guesses() <= MAX_INCORRECT_GUESSES
    }

    fn description() -> &'static str {
        "Incorrect guesses never exceed the maximum"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SecretWord;

    #[test]
    fn test_limit_itself_holds() {
        let mut session = GameSession::new(SecretWord::new("sled").unwrap());
        session.incorrect_guesses = MAX_INCORRECT_GUESSES;
        assert!(BoundedMissesInvariant::holds(&session));
    }

    #[test]
    fn test_past_limit_violates() {
        let mut session = GameSession::new(SecretWord::new("sled").unwrap());
        session.incorrect_guesses = MAX_INCORRECT_GUESSES + 1;
        assert!(!BoundedMissesInvariant::holds(&session));
    }
}

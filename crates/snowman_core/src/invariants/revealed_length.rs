//! Revealed length invariant: one display position per secret letter.

use super::Invariant;
use crate::GameSession;

/// Invariant: the display string is exactly as long as the secret word.
pub struct RevealedLengthInvariant;

impl Invariant<GameSession> for RevealedLengthInvariant {
    fn holds(session: &GameSession) -> bool {
        session.revealed().len() == session.secret_word().len()
    }

    fn description() -> &'static str {
        "Revealed string has the same length as the secret word"
    }
}

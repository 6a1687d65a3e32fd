//! Revealed consistency invariant: only true letters or placeholders are shown.

use super::Invariant;
use crate::types::PLACEHOLDER;
use crate::GameSession;

/// Invariant: every display position is either the placeholder or the secret
/// letter at that same position.
///
/// Positions beyond the shorter of the two strings are left to
/// [`super::RevealedLengthInvariant`].
pub struct RevealedConsistentInvariant;

impl Invariant<GameSession> for RevealedConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .revealed()
            .as_str()
            .chars()
            .zip(session.secret_word().chars())
            .all(|(shown, actual)| shown == PLACEHOLDER || shown == actual)
    }

    fn description() -> &'static str {
        "Revealed positions hold the secret letter or the placeholder"
    }
}

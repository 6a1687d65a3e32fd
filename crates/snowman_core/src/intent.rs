//! Conversational events in, outcome descriptors out.

use crate::session::{GameSession, GuessOutcome, GuessResult};
use serde::{Deserialize, Serialize};

/// An already-recognized user intent.
///
/// Serialized with an `intent` tag, e.g. `{"intent": "guess", "letter_or_word": "e"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(tag = "intent", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    /// The conversation opened.
    Welcome,
    /// Begin a game.
    Start,
    /// Guess a letter or the whole word.
    Guess {
        /// Raw slot value from the conversational platform.
        letter_or_word: String,
    },
    /// Explain the rules.
    Instructions,
    /// Abandon whatever is in progress and begin again.
    PlayAgain,
    /// The utterance matched nothing.
    Fallback,
}

impl Intent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// State reported to the renderer after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnState {
    /// A fresh game is ready.
    NewGame,
    /// The guess was right; play continues.
    Correct,
    /// The guess was wrong; play continues.
    Incorrect,
    /// The word is solved.
    Win,
    /// The snowman melted.
    Lose,
}

impl From<GuessResult> for TurnState {
    fn from(result: GuessResult) -> Self {
        match result {
            GuessResult::Win => TurnState::Win,
            GuessResult::Lose => TurnState::Lose,
            GuessResult::CorrectGuess => TurnState::Correct,
            GuessResult::IncorrectGuess => TurnState::Incorrect,
        }
    }
}

/// Everything a visual renderer needs to draw the current game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Descriptor {
    /// What just happened.
    pub state: TurnState,
    /// Display string with placeholders.
    pub revealed: String,
    /// Misses so far.
    pub incorrect_guesses: u8,
}

/// What the engine did with an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Greeted the player; nothing changed.
    Welcome,
    /// Started a game. `replay` is true when it replaced an earlier one.
    NewGame {
        /// Whether the player asked to play again.
        replay: bool,
    },
    /// Evaluated a guess.
    Guessed {
        /// The normalized guess text.
        guess: String,
        /// The evaluation result.
        outcome: GuessOutcome,
    },
    /// Explained the rules; nothing changed.
    Instructions,
    /// Could not map the utterance; nothing changed.
    Fallback,
}

/// Result of handling one intent: the reply plus the session to persist.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Turn {
    reply: Reply,
    session: Option<GameSession>,
}

impl Turn {
    /// What happened.
    pub fn reply(&self) -> &Reply {
        &self.reply
    }

    /// The session after the turn, if a game exists.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Consumes the turn, handing back the session to persist.
    pub fn into_session(self) -> Option<GameSession> {
        self.session
    }

    /// The outbound descriptor, for turns that start a game or evaluate a guess.
    pub fn descriptor(&self) -> Option<Descriptor> {
        match (&self.reply, &self.session) {
            (Reply::NewGame { .. }, Some(session)) => Some(Descriptor::new(
                TurnState::NewGame,
                session.revealed().as_str().to_string(),
                session.incorrect_guesses(),
            )),
            (Reply::Guessed { outcome, .. }, _) => Some(Descriptor::new(
                outcome.result().into(),
                outcome.revealed().to_string(),
                outcome.incorrect_guesses(),
            )),
            _ => None,
        }
    }
}

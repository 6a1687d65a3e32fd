//! Game session engine.

use crate::action::{Guess, GuessError};
use crate::dictionary::{DictionaryError, WordSource};
use crate::intent::{Intent, Reply, Turn};
use crate::session::{GameSession, GuessOutcome};
use crate::types::SecretWord;
use tracing::{debug, info, instrument, warn};

/// Errors surfaced by [`Engine::handle`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum EngineError {
    /// The guess was refused.
    #[display("{}", _0)]
    Guess(GuessError),
    /// The word source failed to produce a usable word.
    #[display("{}", _0)]
    Dictionary(DictionaryError),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Guess(err) => Some(err),
            EngineError::Dictionary(err) => Some(err),
        }
    }
}

/// Drives snowman games against an injected word source.
///
/// The engine holds no session state of its own; every operation takes the
/// caller's session explicitly.
#[derive(Debug, Clone)]
pub struct Engine<W> {
    words: W,
}

impl<W: WordSource> Engine<W> {
    /// Creates an engine drawing secret words from `words`.
    pub fn new(words: W) -> Self {
        Self { words }
    }

    /// The injected word source.
    pub fn words(&self) -> &W {
        &self.words
    }

    /// Starts a fresh game with a new secret word.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> Result<GameSession, DictionaryError> {
        let word = self.words.get_word();
        let secret = SecretWord::new(&word).map_err(|rejected| {
            warn!(word = %rejected, "Word source produced unusable word");
            DictionaryError::Rejected(rejected)
        })?;

        info!(length = secret.len(), "Game started");
        Ok(GameSession::new(secret))
    }

    /// Parses raw input and applies it to `session`.
    ///
    /// Invalid input is rejected before evaluation and leaves `session` as is.
    #[instrument(skip(self, session))]
    pub fn apply_guess(
        &self,
        session: &mut GameSession,
        input: &str,
    ) -> Result<GuessOutcome, GuessError> {
        let guess = Guess::parse(input)?;
        session.apply_guess(&guess)
    }

    /// Maps one intent onto the session and reports the result.
    ///
    /// `session` is whatever the conversation persisted from the previous
    /// turn. Intents that do not touch the game hand it back unchanged.
    #[instrument(skip(self, session), fields(intent = intent.name(), has_session = session.is_some()))]
    pub fn handle(
        &mut self,
        intent: &Intent,
        session: Option<GameSession>,
    ) -> Result<Turn, EngineError> {
        debug!("Handling intent");
        let turn = match intent {
            Intent::Welcome => Turn::new(Reply::Welcome, session),
            Intent::Instructions => Turn::new(Reply::Instructions, session),
            Intent::Fallback => Turn::new(Reply::Fallback, session),
            Intent::Start => Turn::new(Reply::NewGame { replay: false }, Some(self.start_game()?)),
            Intent::PlayAgain => Turn::new(Reply::NewGame { replay: true }, Some(self.start_game()?)),
            Intent::Guess { letter_or_word } => {
                let mut session = session.ok_or(GuessError::NoActiveGame)?;
                let guess = Guess::parse(letter_or_word)?;
                let outcome = session.apply_guess(&guess)?;
                Turn::new(
                    Reply::Guessed {
                        guess: guess.text(),
                        outcome,
                    },
                    Some(session),
                )
            }
        };
        Ok(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuessResult, TurnState};

    /// Always hands out the same word.
    struct FixedWord(&'static str);

    impl WordSource for FixedWord {
        fn get_word(&mut self) -> String {
            self.0.to_string()
        }
    }

    fn guess(letter_or_word: &str) -> Intent {
        Intent::Guess {
            letter_or_word: letter_or_word.to_string(),
        }
    }

    #[test]
    fn test_start_game_uppercases_word() {
        let mut engine = Engine::new(FixedWord("penguin"));
        let session = engine.start_game().unwrap();
        assert_eq!(session.secret_word().as_str(), "PENGUIN");
        assert_eq!(session.revealed().as_str(), "_______");
        assert_eq!(session.incorrect_guesses(), 0);
    }

    #[test]
    fn test_unusable_word_is_rejected() {
        let mut engine = Engine::new(FixedWord("snow man"));
        assert!(matches!(engine.start_game(), Err(DictionaryError::Rejected(_))));
    }

    #[test]
    fn test_invalid_input_leaves_session() {
        let mut engine = Engine::new(FixedWord("cat"));
        let mut session = engine.start_game().unwrap();
        let before = session.clone();

        assert_eq!(engine.apply_guess(&mut session, " "), Err(GuessError::Empty));
        assert!(engine.apply_guess(&mut session, "c4").is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_start_reports_new_game() {
        let mut engine = Engine::new(FixedWord("cat"));
        let turn = engine.handle(&Intent::Start, None).unwrap();
        let descriptor = turn.descriptor().unwrap();
        assert_eq!(descriptor.state, TurnState::NewGame);
        assert_eq!(descriptor.revealed, "___");
        assert_eq!(turn.reply(), &Reply::NewGame { replay: false });
    }

    #[test]
    fn test_guess_without_game() {
        let mut engine = Engine::new(FixedWord("cat"));
        let err = engine.handle(&guess("c"), None).unwrap_err();
        assert_eq!(err, EngineError::Guess(GuessError::NoActiveGame));
    }

    #[test]
    fn test_guess_turn_descriptor() {
        let mut engine = Engine::new(FixedWord("cat"));
        let session = engine.handle(&Intent::Start, None).unwrap().into_session();

        let turn = engine.handle(&guess("a"), session).unwrap();
        let descriptor = turn.descriptor().unwrap();
        assert_eq!(descriptor.state, TurnState::Correct);
        assert_eq!(descriptor.revealed, "_A_");

        match turn.reply() {
            Reply::Guessed { guess, outcome } => {
                assert_eq!(guess, "A");
                assert_eq!(outcome.result(), GuessResult::CorrectGuess);
            }
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_play_again_replaces_finished_game() {
        let mut engine = Engine::new(FixedWord("cat"));
        let session = engine.handle(&Intent::Start, None).unwrap().into_session();
        let session = engine.handle(&guess("cat"), session).unwrap().into_session();
        assert!(session.as_ref().unwrap().status().is_terminal());

        let turn = engine.handle(&Intent::PlayAgain, session).unwrap();
        let fresh = turn.session().unwrap();
        assert_eq!(fresh.revealed().as_str(), "___");
        assert_eq!(turn.reply(), &Reply::NewGame { replay: true });
    }

    #[test]
    fn test_passive_intents_keep_session() {
        let mut engine = Engine::new(FixedWord("cat"));
        let session = engine.handle(&Intent::Start, None).unwrap().into_session();
        let session = engine.handle(&guess("z"), session).unwrap().into_session();

        for intent in [Intent::Welcome, Intent::Instructions, Intent::Fallback] {
            let turn = engine.handle(&intent, session.clone()).unwrap();
            assert_eq!(turn.session(), session.as_ref());
            assert_eq!(turn.descriptor(), None);
        }
    }
}

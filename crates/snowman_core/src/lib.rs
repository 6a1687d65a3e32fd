//! Pure snowman game logic.
//!
//! The secret word is hidden behind a row of placeholders. Each guess is a
//! single letter or the whole word; five misses melt the snowman.
//!
//! # Architecture
//!
//! - **Dictionary**: [`WordSource`] supplies secret words; [`Dictionary`] picks
//!   them at random from a fixed corpus
//! - **Session**: [`GameSession`] holds the per-conversation state and applies
//!   guesses under [`contracts`]
//! - **Engine**: [`Engine`] maps conversational [`Intent`]s onto session
//!   transitions and reports a [`Turn`]
//!
//! # Example
//!
//! ```
//! use snowman_core::{Dictionary, Engine, GuessResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = Engine::new(Dictionary::seeded(["penguin"], Some(7))?);
//! let mut session = engine.start_game()?;
//! assert_eq!(session.revealed().as_str(), "_______");
//!
//! let outcome = engine.apply_guess(&mut session, "n")?;
//! assert_eq!(outcome.result(), GuessResult::CorrectGuess);
//! assert_eq!(outcome.revealed(), "__N___N");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod dictionary;
mod engine;
mod intent;
pub mod invariants;
mod session;
mod types;

pub use action::{Guess, GuessError};
pub use dictionary::{Dictionary, DictionaryError, WordSource};
pub use engine::{Engine, EngineError};
pub use intent::{Descriptor, Intent, Reply, Turn, TurnState};
pub use session::{GameSession, GuessOutcome, GuessResult, SessionError, SessionStatus};
pub use types::{MAX_INCORRECT_GUESSES, PLACEHOLDER, Revealed, SecretWord};

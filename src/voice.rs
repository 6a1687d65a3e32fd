//! Spoken replies for each engine turn.
//!
//! The engine never produces natural language. `Voice` picks phrasing for a
//! [`Turn`], varying it at random so repeated turns do not sound canned.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use snowman_core::{GuessError, GuessResult, MAX_INCORRECT_GUESSES, Reply, Turn};
use tracing::instrument;

const RULES: &str = "Each wrong guess melts a bit of the snowman, and after 5 \
                     it's gone and the game is over. If you think you know the \
                     word, just say the whole thing.";

const PLAY_AGAIN: &str = "Want to play again, or are you done for now?";

const WELCOME_BACK: &[&str] = &[
    "Welcome back to Snowman!",
    "Good to see you again at Snowman!",
    "You're back! Ready for more Snowman?",
    "Snowman missed you.",
];

const START: &[&str] = &[
    "Guess a letter, or the whole word if you already know it.",
    "Pick a letter to start, or go for the whole word.",
    "Say a letter, or the word itself if you're feeling lucky.",
];

const RIGHT: &[&str] = &[
    "Nice one!",
    "Good guess!",
    "Keep it up!",
    "Spot on!",
    "You're on a roll!",
];

const WRONG: &[&str] = &[
    "Not in this word. Try another!",
    "Nope, give it another go.",
    "Not that one. Keep going!",
    "Missed, but you've got this.",
];

const WIN: &[&str] = &[
    "You did it!",
    "Brilliant work!",
    "Congratulations!",
    "That's the one. Well played!",
];

/// Chooses spoken phrasing for turns and rejections.
#[derive(Debug, Clone)]
pub struct Voice {
    rng: StdRng,
}

impl Voice {
    /// Creates a voice; a seed makes phrasing repeatable.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Lines to say for a completed turn.
    #[instrument(skip(self, turn))]
    pub fn speak(&mut self, turn: &Turn, returning_user: bool) -> Vec<String> {
        match turn.reply() {
            Reply::Welcome if returning_user => vec![format!(
                "{} Would you like to start a game?",
                self.pick(WELCOME_BACK)
            )],
            Reply::Welcome => {
                vec!["Welcome to Snowman! Would you like to start a game?".to_string()]
            }
            Reply::NewGame { replay: true } => vec!["Okay, here's a new word!".to_string()],
            Reply::NewGame { replay: false } if returning_user => {
                vec![self.pick(START).to_string()]
            }
            Reply::NewGame { replay: false } => vec![format!(
                "Figure out the word by guessing letters you think are in it. {}",
                RULES
            )],
            Reply::Guessed { guess, outcome } => {
                let secret = turn
                    .session()
                    .map(|session| session.secret_word().to_string())
                    .unwrap_or_default();
                let verdict = match outcome.result() {
                    GuessResult::Win => format!(
                        "{} is right. That spells {}! {} {}",
                        guess,
                        secret,
                        self.pick(WIN),
                        PLAY_AGAIN
                    ),
                    GuessResult::Lose => format!(
                        "Sorry, the snowman melted. The word was {}. {}",
                        secret, PLAY_AGAIN
                    ),
                    GuessResult::CorrectGuess => format!("{} is right. {}", guess, self.pick(RIGHT)),
                    GuessResult::IncorrectGuess => format!("{} is wrong. {}", guess, self.pick(WRONG)),
                };
                let mut lines = vec![format!("Let's see if {} is there...", guess), verdict];
                if outcome.result() == GuessResult::IncorrectGuess {
                    let left = MAX_INCORRECT_GUESSES.saturating_sub(outcome.incorrect_guesses());
                    lines.push(format!("{} wrong guesses left.", left));
                }
                lines
            }
            Reply::Instructions => vec![format!(
                "Guess a letter that's in the word, or guess the word itself. \
                 Solve it before the snowman melts! {}",
                RULES
            )],
            Reply::Fallback => vec!["Sorry, I didn't catch that. Try guessing a letter!".to_string()],
        }
    }

    /// Lines to say when a guess was refused.
    #[instrument(skip(self))]
    pub fn reprompt(&mut self, error: &GuessError) -> Vec<String> {
        let line = match error {
            GuessError::Empty => "I didn't hear a guess. Try a letter!".to_string(),
            GuessError::NonAlphabetic(input) => {
                format!("{} isn't a letter or a word. Try a letter!", input)
            }
            GuessError::GameOver => format!("That game is over. {}", PLAY_AGAIN),
            GuessError::NoActiveGame => {
                "There's no game going yet. Say start to begin!".to_string()
            }
            GuessError::InvariantViolation(_) => {
                "Something went wrong with that guess. Try another letter!".to_string()
            }
        };
        vec![line]
    }

    fn pick(&mut self, phrases: &[&'static str]) -> &'static str {
        phrases.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

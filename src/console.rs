//! Interactive console game.
//!
//! Each input line is a guess, except for a few commands that map onto the
//! remaining intents.

use crate::voice::Voice;
use snowman_core::{Engine, EngineError, GameSession, Intent, WordSource};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, instrument};

/// Maps one line of console input to an intent. `None` means quit.
#[instrument]
pub fn parse_line(line: &str) -> Option<Intent> {
    let trimmed = line.trim();
    let intent = match trimmed.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return None,
        "new" | "again" | "play again" | "yes" | "start" => Intent::PlayAgain,
        "help" | "?" => Intent::Instructions,
        _ => Intent::Guess {
            letter_or_word: trimmed.to_string(),
        },
    };
    Some(intent)
}

/// Plays games over `input` and `output` until quit or end of input.
#[instrument(skip_all)]
pub fn run<W, R, O>(
    engine: &mut Engine<W>,
    voice: &mut Voice,
    input: R,
    mut output: O,
) -> io::Result<()>
where
    W: WordSource,
    R: BufRead,
    O: Write,
{
    let mut session = play_turn(engine, voice, &Intent::Start, None, &mut output)?;

    for line in input.lines() {
        let Some(intent) = parse_line(&line?) else {
            break;
        };
        session = play_turn(engine, voice, &intent, session, &mut output)?;
    }

    writeln!(output, "Thanks for playing!")?;
    Ok(())
}

/// Handles one intent, prints the reply and returns the session to keep.
fn play_turn<W, O>(
    engine: &mut Engine<W>,
    voice: &mut Voice,
    intent: &Intent,
    session: Option<GameSession>,
    output: &mut O,
) -> io::Result<Option<GameSession>>
where
    W: WordSource,
    O: Write,
{
    debug!(intent = intent.name(), "Console intent");

    let session = match engine.handle(intent, session.clone()) {
        Ok(turn) => {
            for line in voice.speak(&turn, true) {
                writeln!(output, "{}", line)?;
            }
            turn.into_session()
        }
        Err(EngineError::Guess(err)) => {
            for line in voice.reprompt(&err) {
                writeln!(output, "{}", line)?;
            }
            session
        }
        Err(EngineError::Dictionary(err)) => {
            error!(error = %err, "Word source failed");
            return Err(io::Error::other(err.to_string()));
        }
    };

    if let Some(game) = &session {
        writeln!(
            output,
            "  {}   ({} misses left)",
            spaced(game.revealed().as_str()),
            game.remaining_guesses()
        )?;
    }
    output.flush()?;

    Ok(session)
}

/// Puts a space between letters so placeholders are countable.
fn spaced(revealed: &str) -> String {
    revealed
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWord(&'static str);

    impl WordSource for FixedWord {
        fn get_word(&mut self) -> String {
            self.0.to_string()
        }
    }

    fn transcript(script: &str) -> String {
        let mut engine = Engine::new(FixedWord("cat"));
        let mut voice = Voice::new(Some(1));
        let mut output = Vec::new();
        run(&mut engine, &mut voice, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("QUIT"), None);
        assert_eq!(parse_line(" help "), Some(Intent::Instructions));
        assert_eq!(parse_line("new"), Some(Intent::PlayAgain));
        assert_eq!(parse_line("Play Again"), Some(Intent::PlayAgain));
        assert_eq!(parse_line("yes"), Some(Intent::PlayAgain));
        assert_eq!(parse_line("start"), Some(Intent::PlayAgain));
        assert_eq!(
            parse_line("e"),
            Some(Intent::Guess {
                letter_or_word: "e".to_string()
            })
        );
    }

    #[test]
    fn test_game_is_shown_from_the_start() {
        let output = transcript("");
        assert!(output.contains("_ _ _"));
        assert!(output.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn test_winning_game() {
        let output = transcript("c\na\nt\nquit\n");
        assert!(output.contains("C _ _"));
        assert!(output.contains("That spells CAT!"));
    }

    #[test]
    fn test_yes_after_win_starts_new_word() {
        let output = transcript("cat\nyes\nc\n");
        assert!(output.contains("Okay, here's a new word!"));
        assert!(!output.contains("That game is over."));
        assert!(output.contains("C _ _"));
    }

    #[test]
    fn test_invalid_guess_reprompts() {
        let output = transcript("7\n");
        assert!(output.contains("isn't a letter"));
    }

    #[test]
    fn test_quit_stops_early() {
        let output = transcript("quit\nc\n");
        assert!(!output.contains("C _ _"));
    }
}

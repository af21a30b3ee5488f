//! Simple interactive CLI mode
//!
//! Text-based Numberle game without TUI

use crate::equations::EquationSource;
use crate::game::{GameSession, GuessError};
use crate::output::formatters::{colored_guess, colored_keyboard};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Tally of games played in one console session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStats {
    pub games: usize,
    pub won: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// equation corpus cannot provide a secret.
pub fn run_simple<S, R>(source: &S, rng: &mut R, reveal: bool) -> Result<ConsoleStats>
where
    S: EquationSource + ?Sized,
    R: Rng + ?Sized,
{
    let stdin = io::stdin();
    play_console(source, rng, reveal, stdin.lock(), io::stdout())
}

/// Play console games until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if no secret can be drawn.
pub fn play_console<S, R, I, O>(
    source: &S,
    rng: &mut R,
    reveal: bool,
    mut input: I,
    mut output: O,
) -> Result<ConsoleStats>
where
    S: EquationSource + ?Sized,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut stats = ConsoleStats::default();

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                    Welcome to Numberle!                      ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Guess the hidden 7-character equation, e.g. 12+3=15.")?;
    writeln!(output, "Every guess must be a true equation using 0-9 + - * / and one '='.")?;
    writeln!(output, "Commands: 'quit' to exit\n")?;

    loop {
        let mut session = GameSession::new_game(source, rng)?;
        stats.games += 1;

        if reveal {
            writeln!(output, "Target equation: {}", session.target_equation())?;
        }

        while !session.is_over() {
            let prompt = format!(
                "Enter your guess (Remaining attempts: {})",
                session.remaining_attempts()
            );
            let Some(line) = get_user_input(&mut input, &mut output, &prompt)? else {
                return Ok(stats);
            };

            if matches!(line.trim().to_lowercase().as_str(), "quit" | "q" | "exit") {
                writeln!(output, "\n👋 Thank you for playing Numberle!\n")?;
                return Ok(stats);
            }

            match session.submit_guess(&line) {
                Ok(submission) => {
                    if let Some(guess) = session.history().last() {
                        writeln!(
                            output,
                            "\n  {}  {}",
                            colored_guess(&guess.equation, &submission.result),
                            submission.result.to_emoji()
                        )?;
                    }
                    writeln!(output, "\n{}\n", colored_keyboard(&session.keyboard()))?;

                    if submission.won {
                        stats.won += 1;
                        writeln!(
                            output,
                            "{}",
                            format!(
                                "🎉 Congratulations! You've guessed the equation correctly: {}",
                                session.target_equation()
                            )
                            .green()
                            .bold()
                        )?;
                    } else if session.is_over() {
                        writeln!(
                            output,
                            "{}",
                            format!(
                                "❌ Game Over! The correct equation was: {}",
                                session.target_equation()
                            )
                            .red()
                            .bold()
                        )?;
                    } else {
                        writeln!(output, "Valid equation but not the exact match. Try again.")?;
                    }
                }
                Err(e @ (GuessError::Format(_) | GuessError::Evaluation(_))) => {
                    writeln!(output, "{}", format!("❌ {e}").yellow())?;
                }
                Err(GuessError::GameOver) => break,
            }
        }

        let again = get_user_input(&mut input, &mut output, "Do you want to play again? (yes/no)")?;
        match again.map(|answer| answer.trim().to_lowercase()).as_deref() {
            Some("yes" | "y") => {
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            _ => {
                writeln!(output, "\n👋 Thank you for playing Numberle!\n")?;
                return Ok(stats);
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
///
/// Only the line terminator is stripped so guesses are judged as typed.
fn get_user_input<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Equation;
    use crate::game::MAX_ATTEMPTS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(script: &str) -> (ConsoleStats, String) {
        colored::control::set_override(false);
        let corpus = vec![Equation::new("12+3=15").unwrap()];
        let mut rng = StdRng::seed_from_u64(0);
        let mut output = Vec::new();
        let stats = play_console(&corpus, &mut rng, false, script.as_bytes(), &mut output).unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game_then_quit() {
        let (stats, output) = play("1+1=2\n1+2+3=7\n1+2+3=6\n12+3=15\nno\n");

        assert_eq!(stats, ConsoleStats { games: 1, won: 1 });
        assert!(output.contains("invalid input format"));
        assert!(output.contains("invalid equation"));
        assert!(output.contains("Try again"));
        assert!(output.contains("Congratulations"));
        assert!(output.contains("Remaining attempts: 6"));
        assert!(output.contains("Remaining attempts: 5"));
        assert!(!output.contains("Remaining attempts: 4"));
    }

    #[test]
    fn losing_game_reveals_secret() {
        let mut script = "1+2+3=6\n".repeat(MAX_ATTEMPTS);
        script.push_str("no\n");
        let (stats, output) = play(&script);

        assert_eq!(stats, ConsoleStats { games: 1, won: 0 });
        assert!(output.contains("Game Over! The correct equation was: 12+3=15"));
    }

    #[test]
    fn play_again_starts_new_game() {
        let (stats, output) = play("12+3=15\nyes\n12+3=15\nno\n");
        assert_eq!(stats, ConsoleStats { games: 2, won: 2 });
        assert!(output.contains("New game started"));
    }

    #[test]
    fn quit_and_end_of_input_stop_cleanly() {
        let (stats, output) = play("quit\n");
        assert_eq!(stats, ConsoleStats { games: 1, won: 0 });
        assert!(output.contains("Thank you for playing"));

        let (stats, _) = play("1+2+3=6\n");
        assert_eq!(stats.games, 1);
    }

    #[test]
    fn guesses_are_not_trimmed() {
        let (stats, output) = play(" 12+3=15\r\n12+3=15 \n12+3=15\r\n no \n");

        assert_eq!(stats, ConsoleStats { games: 1, won: 1 });
        assert!(output.contains("Remaining attempts: 6"));
        assert!(!output.contains("Remaining attempts: 5"));
        assert_eq!(output.matches("invalid input format").count(), 2);
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let corpus: Vec<Equation> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        let result = play_console(&corpus, &mut rng, false, &b""[..], Vec::new());
        assert!(result.is_err());
    }
}

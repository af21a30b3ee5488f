//! Formatting utilities for terminal output

use crate::core::{Equation, GuessResult, KEYBOARD_ROWS, KeyboardState, Verdict};
use colored::{ColoredString, Colorize};

/// Render one character as a colored tile
#[must_use]
pub fn verdict_tile(ch: char, verdict: Option<Verdict>) -> ColoredString {
    let tile = format!(" {ch} ");
    match verdict {
        Some(Verdict::Correct) => tile.black().on_green().bold(),
        Some(Verdict::Present) => tile.black().on_yellow().bold(),
        Some(Verdict::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Equation, result: &GuessResult) -> String {
    guess
        .chars()
        .zip(result.verdicts())
        .map(|(ch, &verdict)| verdict_tile(ch, Some(verdict)).to_string())
        .collect()
}

/// Render the virtual keyboard, one line per row
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|key| verdict_tile(key, keyboard.get(key)).to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

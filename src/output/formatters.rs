//! Formatting utilities for terminal output

use crate::core::{GuessRow, KEY_ROWS, KeyboardStatus, LetterState};
use colored::{ColoredString, Colorize};

/// Format a scored row as emoji tiles
#[must_use]
pub fn row_to_emoji(row: &GuessRow) -> String {
    row.iter()
        .map(|letter| match letter.state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            LetterState::Absent | LetterState::Initial => '⬜',
        })
        .collect()
}

/// Format a scored row as colored letter tiles
#[must_use]
pub fn colored_tiles(row: &GuessRow) -> String {
    row.iter()
        .map(|letter| paint(&format!(" {} ", letter.ch), letter.state).to_string())
        .collect::<Vec<_>>()
        .join("")
}

/// Format the keyboard hint map as three colored key rows
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardStatus) -> Vec<String> {
    KEY_ROWS
        .iter()
        .map(|keys| {
            keys.chars()
                .map(|ch| paint(&format!(" {ch} "), keyboard.state_of(ch)).to_string())
                .collect::<Vec<_>>()
                .join("")
        })
        .collect()
}

fn paint(text: &str, state: LetterState) -> ColoredString {
    match state {
        LetterState::Correct => text.black().on_green(),
        LetterState::Present => text.black().on_yellow(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Initial => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, LengthLimits, Word, evaluate_guess};

    fn row(guess: &str, secret: &str) -> GuessRow {
        let alphabet = Alphabet::default();
        let limits = LengthLimits::default();
        evaluate_guess(
            &Word::new(guess, limits, &alphabet).unwrap(),
            &Word::new(secret, limits, &alphabet).unwrap(),
        )
    }

    #[test]
    fn emoji_all_green_on_win() {
        assert_eq!(row_to_emoji(&row("CRANE", "CRANE")), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed_states() {
        // CRANE vs TRACE: present, correct, correct, absent, correct
        assert_eq!(row_to_emoji(&row("CRANE", "TRACE")), "🟨🟩🟩⬜🟩");
    }

    #[test]
    fn keyboard_lines_cover_three_rows() {
        let keyboard = KeyboardStatus::new(&Alphabet::default());
        assert_eq!(keyboard_lines(&keyboard).len(), 3);
    }
}

//! Core domain types for the word-guessing game
//!
//! Pure, dependency-light types: validated words and alphabets, the guess
//! scoring algorithm, and the keyboard hint aggregation. Everything here is
//! synchronous and free of I/O.

mod evaluate;
mod keyboard;
mod letter;
mod word;

pub use evaluate::evaluate_guess;
pub use keyboard::{KEY_ROWS, KeyboardStatus};
pub use letter::{EvaluatedLetter, GuessRow, LetterState};
pub use word::{
    Alphabet, LengthLimits, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError,
};

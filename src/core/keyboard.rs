//! Keyboard hint aggregation
//!
//! Folds evaluated guess rows into the best-known state per letter. States
//! only ever upgrade under the `LetterState` order, so a key shown green
//! stays green even if a later guess reuses that letter ambiguously.

use super::letter::{GuessRow, LetterState};
use super::word::Alphabet;
use rustc_hash::FxHashMap;

/// On-screen keyboard rows (ASCII QWERTY layout; extended letters are hinted
/// through the status map but not given dedicated keys)
pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Aggregated per-letter hint state across all guesses in a session
///
/// Covers every letter of the configured alphabet, each starting at
/// `Initial`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardStatus {
    states: FxHashMap<char, LetterState>,
}

impl KeyboardStatus {
    /// All-`Initial` map over the alphabet's letters
    #[must_use]
    pub fn new(alphabet: &Alphabet) -> Self {
        let states = alphabet
            .letters()
            .iter()
            .map(|&ch| (ch, LetterState::Initial))
            .collect();
        Self { states }
    }

    /// Fold one evaluated row into the map
    ///
    /// Each letter's stored state is replaced only when the row's state for
    /// it is strictly greater, which makes the map monotonic: merging rows
    /// in any order yields the same result, and no hint is ever downgraded.
    pub fn merge(&mut self, row: &GuessRow) {
        for letter in row {
            if let Some(state) = self.states.get_mut(&letter.ch)
                && letter.state > *state
            {
                *state = letter.state;
            }
        }
    }

    /// Best-known state for a letter, `Initial` for letters outside the
    /// alphabet
    #[must_use]
    pub fn state_of(&self, ch: char) -> LetterState {
        self.states.get(&ch).copied().unwrap_or(LetterState::Initial)
    }

    /// Reset every letter back to `Initial`
    pub fn reset(&mut self) {
        for state in self.states.values_mut() {
            *state = LetterState::Initial;
        }
    }
}

//! Letter scoring vocabulary
//!
//! A submitted guess is scored into a row of evaluated letters. Each letter
//! carries one of four states, ordered so that aggregation across guesses is
//! a simple `max`: `Initial < Absent < Present < Correct`.

use std::fmt;

/// Best-known knowledge about a letter
///
/// The derived `Ord` drives the keyboard hint aggregation: a letter's stored
/// state is only ever upgraded, never downgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Not seen in any guess yet
    Initial,
    /// Guessed, not in the secret word
    Absent,
    /// In the secret word, wrong position
    Present,
    /// In the secret word, correct position
    Correct,
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initial => "initial",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        write!(f, "{name}")
    }
}

/// One scored position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatedLetter {
    /// Uppercase guessed character at this position
    pub ch: char,
    /// Scoring outcome for this position
    pub state: LetterState,
}

/// The scored result of one submitted guess
///
/// Same length as the secret word; produced only by
/// [`evaluate_guess`](crate::core::evaluate_guess).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow(Vec<EvaluatedLetter>);

impl GuessRow {
    #[must_use]
    pub(crate) fn new(letters: Vec<EvaluatedLetter>) -> Self {
        Self(letters)
    }

    /// Scored letters in position order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[EvaluatedLetter] {
        &self.0
    }

    /// Number of positions (equals the secret word's length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position scored `Correct` (a winning guess)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|l| l.state == LetterState::Correct)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvaluatedLetter> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a GuessRow {
    type Item = &'a EvaluatedLetter;
    type IntoIter = std::slice::Iter<'a, EvaluatedLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for GuessRow {
    type Output = EvaluatedLetter;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_state_total_order() {
        assert!(LetterState::Initial < LetterState::Absent);
        assert!(LetterState::Absent < LetterState::Present);
        assert!(LetterState::Present < LetterState::Correct);
    }

    #[test]
    fn letter_state_max_picks_stronger_hint() {
        assert_eq!(
            LetterState::Correct.max(LetterState::Present),
            LetterState::Correct
        );
        assert_eq!(
            LetterState::Initial.max(LetterState::Absent),
            LetterState::Absent
        );
    }

    #[test]
    fn row_all_correct() {
        let row = GuessRow::new(vec![
            EvaluatedLetter {
                ch: 'C',
                state: LetterState::Correct,
            },
            EvaluatedLetter {
                ch: 'A',
                state: LetterState::Correct,
            },
            EvaluatedLetter {
                ch: 'T',
                state: LetterState::Correct,
            },
        ]);
        assert!(row.is_all_correct());
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn row_not_all_correct() {
        let row = GuessRow::new(vec![
            EvaluatedLetter {
                ch: 'C',
                state: LetterState::Correct,
            },
            EvaluatedLetter {
                ch: 'A',
                state: LetterState::Present,
            },
        ]);
        assert!(!row.is_all_correct());
    }

    #[test]
    fn row_indexing_and_iteration() {
        let row = GuessRow::new(vec![
            EvaluatedLetter {
                ch: 'D',
                state: LetterState::Absent,
            },
            EvaluatedLetter {
                ch: 'O',
                state: LetterState::Present,
            },
        ]);
        assert_eq!(row[1].ch, 'O');
        let states: Vec<LetterState> = row.iter().map(|l| l.state).collect();
        assert_eq!(states, vec![LetterState::Absent, LetterState::Present]);
    }
}

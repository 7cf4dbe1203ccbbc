//! Guess scoring
//!
//! Scores a guess against the secret word with the exact two-pass multiset
//! rules: exact matches first, then displaced matches from whatever letter
//! budget remains. Both passes run left to right; with duplicate letters the
//! earlier position claims the credit, so a single-pass shortcut would score
//! repeated letters differently.

use super::letter::{EvaluatedLetter, GuessRow, LetterState};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Score `guess` against `secret`, letter by letter
///
/// Precondition: `guess.len() == secret.len()`. Length mismatches are
/// rejected upstream by the state machine; the algorithm is undefined for
/// them and this is only guarded in debug builds.
///
/// # Algorithm
/// 1. Count each secret letter into a multiset.
/// 2. Start every position as `Absent` with the guessed character.
/// 3. Pass 1, left to right: exact position matches become `Correct` and
///    consume one count.
/// 4. Pass 2, left to right: positions not yet `Correct` become `Present`
///    while their letter still has a positive count, consuming one each.
///
/// Neither input is mutated; both are already uppercase by construction.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate_guess, Alphabet, LengthLimits, LetterState, Word};
///
/// let alphabet = Alphabet::default();
/// let limits = LengthLimits::default();
/// let guess = Word::new("crane", limits, &alphabet).unwrap();
/// let secret = Word::new("trace", limits, &alphabet).unwrap();
///
/// let row = evaluate_guess(&guess, &secret);
/// assert_eq!(row[2].state, LetterState::Correct); // A
/// assert_eq!(row[0].state, LetterState::Present); // C
/// ```
#[must_use]
pub fn evaluate_guess(guess: &Word, secret: &Word) -> GuessRow {
    debug_assert_eq!(
        guess.len(),
        secret.len(),
        "guess and secret must be the same length"
    );

    let mut remaining: FxHashMap<char, u8> = FxHashMap::default();
    for &ch in secret.chars() {
        *remaining.entry(ch).or_insert(0) += 1;
    }

    let mut result: Vec<EvaluatedLetter> = guess
        .chars()
        .iter()
        .map(|&ch| EvaluatedLetter {
            ch,
            state: LetterState::Absent,
        })
        .collect();

    // Pass 1: exact matches claim their letter first
    for (i, &ch) in guess.chars().iter().enumerate() {
        if ch == secret.chars()[i] {
            result[i].state = LetterState::Correct;
            if let Some(count) = remaining.get_mut(&ch) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Pass 2: displaced matches draw from the leftover counts
    for (i, &ch) in guess.chars().iter().enumerate() {
        if result[i].state == LetterState::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&ch)
            && *count > 0
        {
            result[i].state = LetterState::Present;
            *count -= 1;
        }
    }

    GuessRow::new(result)
}

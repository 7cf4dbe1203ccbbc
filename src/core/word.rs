//! Validated word and alphabet types
//!
//! A `Word` is an immutable uppercase string over a configurable alphabet,
//! with a char length between the configured minimum and maximum (3–10 by
//! default). Letters may be outside ASCII, so positions are tracked as chars.

use rustc_hash::FxHashSet;
use std::fmt;

/// Smallest allowed word length
pub const MIN_WORD_LENGTH: usize = 3;

/// Largest allowed word length
pub const MAX_WORD_LENGTH: usize = 10;

/// Extended Latin letters accepted in addition to ASCII A–Z
const EXTENDED_LETTERS: [char; 7] = ['Ă', 'Â', 'Đ', 'Ê', 'Ô', 'Ơ', 'Ư'];

/// The set of letters words and guesses may use
///
/// Ordered, so the keyboard status map can be initialized deterministically.
/// The default covers ASCII A–Z plus a fixed extended Latin set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    members: FxHashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from uppercase letters, keeping first-seen order
    #[must_use]
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        let mut ordered = Vec::new();
        let mut members = FxHashSet::default();
        for ch in letters {
            if members.insert(ch) {
                ordered.push(ch);
            }
        }
        Self {
            letters: ordered,
            members,
        }
    }

    /// Whether an (already uppercase) character belongs to the alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.members.contains(&ch)
    }

    /// Letters in definition order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Uppercase a single input character if its uppercase form is a single
    /// alphabet letter
    ///
    /// Returns `None` for characters outside the alphabet or whose uppercase
    /// expansion is more than one char.
    #[must_use]
    pub fn normalize(&self, ch: char) -> Option<char> {
        let mut upper = ch.to_uppercase();
        let first = upper.next()?;
        if upper.next().is_some() {
            return None;
        }
        self.contains(first).then_some(first)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(('A'..='Z').chain(EXTENDED_LETTERS))
    }
}

/// Word length constraints for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthLimits {
    fn default() -> Self {
        Self {
            min: MIN_WORD_LENGTH,
            max: MAX_WORD_LENGTH,
        }
    }
}

impl LengthLimits {
    #[inline]
    #[must_use]
    pub fn accepts(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Char length outside the configured limits
    InvalidLength { len: usize, min: usize, max: usize },
    /// A character is not in the allowed alphabet
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len, min, max } => {
                write!(f, "word must be {min}-{max} letters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "character '{ch}' is not in the allowed alphabet")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// A validated, uppercase candidate or guess word
///
/// Immutable once constructed. Equality is exact (construction already
/// uppercases, so case-folded equality collapses to exact equality).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Validate and construct a word
    ///
    /// Uppercases the input, then checks char length against `limits` and
    /// every character against `alphabet`.
    ///
    /// # Errors
    /// Returns `WordError` when the length is out of range or a character is
    /// outside the alphabet.
    pub fn new(
        text: impl AsRef<str>,
        limits: LengthLimits,
        alphabet: &Alphabet,
    ) -> Result<Self, WordError> {
        let text = text.as_ref().to_uppercase();
        let chars: Vec<char> = text.chars().collect();

        if !limits.accepts(chars.len()) {
            return Err(WordError::InvalidLength {
                len: chars.len(),
                min: limits.min,
                max: limits.max,
            });
        }

        if let Some(&bad) = chars.iter().find(|c| !alphabet.contains(**c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text, chars })
    }

    /// Construct from characters that already passed validation
    ///
    /// Used by the state machine for the guess buffer, whose characters are
    /// admitted one at a time through [`Alphabet::normalize`].
    #[must_use]
    pub(crate) fn from_validated(chars: Vec<char>) -> Self {
        Self {
            text: chars.iter().collect(),
            chars,
        }
    }

    /// The word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word's characters in position order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Char length of the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

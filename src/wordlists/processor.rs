//! Word-list ingestion pipeline
//!
//! Turns free-form word-list text into a clean candidate pool: tokenize,
//! uppercase, deduplicate, validate against length and alphabet constraints,
//! and classify the outcome so callers can tell the user exactly what
//! happened.

use crate::core::{Alphabet, LengthLimits, Word, WordError};
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt;

/// Which constraint rejected the tokens of an all-invalid list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionCause {
    /// Every failure was a length violation
    Length,
    /// Every failure was a character violation
    Characters,
    /// Both kinds of violation occurred
    Both,
}

impl fmt::Display for RejectionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "word length"),
            Self::Characters => write!(f, "disallowed characters"),
            Self::Both => write!(f, "word length and disallowed characters"),
        }
    }
}

/// Validation failure that leaves no playable pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The input contained no tokens at all
    Empty,
    /// Tokens were found but every one failed validation
    AllInvalid(RejectionCause),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word list is empty"),
            Self::AllInvalid(cause) => {
                write!(f, "all words in the list are invalid ({cause})")
            }
        }
    }
}

impl std::error::Error for WordListError {}

/// Informational classification of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadNotice {
    /// Every token validated
    Complete { count: usize },
    /// Some tokens were filtered out
    Partial {
        kept: usize,
        dropped: usize,
        cause: RejectionCause,
    },
}

impl fmt::Display for LoadNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete { count } => write!(f, "loaded {count} words"),
            Self::Partial {
                kept,
                dropped,
                cause,
            } => write!(
                f,
                "filtered {dropped} words out due to {cause}; using {kept} valid words"
            ),
        }
    }
}

/// A validated, deduplicated candidate pool and its load classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedList {
    pub words: Vec<Word>,
    pub notice: LoadNotice,
}

/// Split raw text into unique, uppercase tokens
///
/// Tokens are separated by any run of whitespace, commas, or semicolons.
/// Deduplication keeps the first occurrence; uppercasing happens before the
/// comparison, so equality is case-insensitive with respect to the input.
#[must_use]
pub fn parse_tokens(raw: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    raw.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .map(|token| token.trim().to_uppercase())
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Validate raw word-list text into a candidate pool
///
/// # Errors
/// - [`WordListError::Empty`] when the input holds no tokens;
/// - [`WordListError::AllInvalid`] when tokens exist but none pass the
///   length/alphabet constraints, naming which constraint failed.
///
/// A partial survival is not an error: the surviving words are returned with
/// a [`LoadNotice::Partial`] describing the filtering.
pub fn process_word_list(
    raw: &str,
    limits: LengthLimits,
    alphabet: &Alphabet,
) -> Result<ProcessedList, WordListError> {
    let tokens = parse_tokens(raw);
    if tokens.is_empty() {
        return Err(WordListError::Empty);
    }

    let mut words = Vec::with_capacity(tokens.len());
    let mut bad_length = false;
    let mut bad_chars = false;

    for token in &tokens {
        match Word::new(token, limits, alphabet) {
            Ok(word) => words.push(word),
            Err(WordError::InvalidLength { .. }) => bad_length = true,
            Err(WordError::InvalidCharacter(_)) => bad_chars = true,
        }
    }

    let cause = match (bad_length, bad_chars) {
        (true, true) => Some(RejectionCause::Both),
        (true, false) => Some(RejectionCause::Length),
        (false, true) => Some(RejectionCause::Characters),
        (false, false) => None,
    };

    if words.is_empty() {
        let cause = cause.unwrap_or(RejectionCause::Both);
        debug!("word list rejected: no token survived ({cause})");
        return Err(WordListError::AllInvalid(cause));
    }

    let notice = match cause {
        Some(cause) => LoadNotice::Partial {
            kept: words.len(),
            dropped: tokens.len() - words.len(),
            cause,
        },
        None => LoadNotice::Complete { count: words.len() },
    };
    debug!("word list accepted: {notice}");

    Ok(ProcessedList { words, notice })
}

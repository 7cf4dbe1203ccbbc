//! Post-game word enrichment
//!
//! After a round ends, front-ends may look up the secret word to show its
//! phonetic spelling and a definition. The lookup is strictly best-effort:
//! it runs on a background thread, the result arrives over a channel the UI
//! polls, and failure or slowness never touches the game state. Dropping the
//! receiver abandons the lookup.

use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Display-only information about a word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordEntry {
    pub phonetic: Option<String>,
    pub definition: Option<String>,
}

/// Why a lookup produced nothing to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The word is not in the dictionary
    NotFound(String),
    /// The dictionary source itself failed
    Source(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(word) => write!(f, "no definition found for \"{word}\""),
            Self::Source(msg) => write!(f, "dictionary lookup failed: {msg}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// A source of word definitions
///
/// Implementations must be cheap to call repeatedly; the engine never calls
/// this, only front-ends after WON/LOST.
pub trait Dictionary: Send + Sync {
    /// Look up a word (case-insensitive)
    ///
    /// # Errors
    /// `NotFound` for unknown words, `Source` when the backing store fails.
    fn lookup(&self, word: &str) -> Result<WordEntry, LookupError>;
}

/// Dictionary backed by a tab-separated file
///
/// Each line is `WORD<TAB>phonetic<TAB>definition`; the phonetic field may
/// be empty. Lines starting with `#` and blank lines are skipped.
pub struct TsvDictionary {
    entries: FxHashMap<String, WordEntry>,
}

impl TsvDictionary {
    /// Load a dictionary file into memory
    ///
    /// # Errors
    /// Returns an I/O error when the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }

    /// Parse dictionary entries from TSV text
    #[must_use]
    pub fn from_text(content: &str) -> Self {
        let mut entries = FxHashMap::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.splitn(3, '\t');
            let Some(word) = fields.next() else { continue };
            let phonetic = fields
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from);
            let definition = fields
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from);
            entries.insert(
                word.trim().to_uppercase(),
                WordEntry {
                    phonetic,
                    definition,
                },
            );
        }
        debug!("dictionary loaded with {} entries", entries.len());
        Self { entries }
    }

    /// Number of loaded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for TsvDictionary {
    fn lookup(&self, word: &str) -> Result<WordEntry, LookupError> {
        self.entries
            .get(&word.to_uppercase())
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_uppercase()))
    }
}

/// Fire-and-forget lookup on a background thread
///
/// The caller polls the returned receiver with `try_recv`; dropping it
/// cancels interest in the result. The worker never blocks or signals the
/// game engine.
pub fn lookup_in_background<D>(dictionary: std::sync::Arc<D>, word: String) -> Receiver<Result<WordEntry, LookupError>>
where
    D: Dictionary + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = dictionary.lookup(&word);
        if let Err(err) = &result {
            debug!("background lookup for {word}: {err}");
        }
        // The receiver may already be gone; that is the cancellation path.
        let _ = tx.send(result);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    const SAMPLE: &str = "\
# word\tphonetic\tdefinition
CRANE\t/kreɪn/\tA large, long-necked wading bird.
house\t\tA building for human habitation.
CAT\t/kæt/\t
";

    #[test]
    fn parses_tsv_entries() {
        let dict = TsvDictionary::from_text(SAMPLE);
        assert_eq!(dict.len(), 3);

        let entry = dict.lookup("crane").unwrap();
        assert_eq!(entry.phonetic.as_deref(), Some("/kreɪn/"));
        assert_eq!(
            entry.definition.as_deref(),
            Some("A large, long-necked wading bird.")
        );
    }

    #[test]
    fn lookup_is_case_insensitive_and_fields_optional() {
        let dict = TsvDictionary::from_text(SAMPLE);

        let house = dict.lookup("HOUSE").unwrap();
        assert_eq!(house.phonetic, None);
        assert!(house.definition.is_some());

        let cat = dict.lookup("Cat").unwrap();
        assert!(cat.phonetic.is_some());
        assert_eq!(cat.definition, None);
    }

    #[test]
    fn unknown_word_is_not_found() {
        let dict = TsvDictionary::from_text(SAMPLE);
        assert_eq!(
            dict.lookup("slate"),
            Err(LookupError::NotFound("SLATE".to_string()))
        );
    }

    #[test]
    fn background_lookup_delivers_over_the_channel() {
        let dict = Arc::new(TsvDictionary::from_text(SAMPLE));
        let rx = lookup_in_background(dict, "crane".to_string());

        let result = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker should respond");
        assert!(result.is_ok());
    }

    #[test]
    fn dropping_the_receiver_cancels_safely() {
        let dict = Arc::new(TsvDictionary::from_text(SAMPLE));
        let rx = lookup_in_background(dict, "crane".to_string());
        drop(rx); // worker's send fails silently; nothing panics
    }
}

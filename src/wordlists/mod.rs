//! Word list ingestion and the embedded default list

mod embedded;
mod processor;

pub use embedded::{DEFAULT_WORDS, default_list_text};
pub use processor::{
    LoadNotice, ProcessedList, RejectionCause, WordListError, parse_tokens, process_word_list,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, LengthLimits};

    #[test]
    fn default_list_processes_cleanly() {
        let list = process_word_list(
            &default_list_text(),
            LengthLimits::default(),
            &Alphabet::default(),
        )
        .unwrap();

        // One duplicate in the raw list collapses during parsing; every
        // surviving token validates.
        assert!(matches!(list.notice, LoadNotice::Complete { .. }));
        assert_eq!(list.words.len(), DEFAULT_WORDS.len() - 1);
    }

    #[test]
    fn default_list_spans_supported_lengths() {
        let list = process_word_list(
            &default_list_text(),
            LengthLimits::default(),
            &Alphabet::default(),
        )
        .unwrap();

        let lengths: std::collections::BTreeSet<usize> =
            list.words.iter().map(crate::core::Word::len).collect();
        assert!(lengths.contains(&3));
        assert!(lengths.contains(&5));
        assert!(lengths.contains(&10));
    }
}

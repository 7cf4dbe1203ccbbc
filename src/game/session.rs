//! Game session state machine
//!
//! Owns the full session lifecycle: SETTINGS → PLAYING → WON/LOST, with a
//! transient reveal lock between a submitted guess and its row becoming
//! visible. All operations run synchronously; invalid input is rejected with
//! an explicit reason and never mutates state.

use super::clamp_max_guesses;
use crate::core::{
    Alphabet, GuessRow, KeyboardStatus, Word, evaluate_guess,
};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Collecting a word list and guess limit; no secret selected
    Settings,
    /// A round is in progress
    Playing,
    /// The secret was guessed within the limit
    Won,
    /// The guess limit was exhausted
    Lost,
}

/// Why an operation was refused
///
/// Rejections never mutate session state; front-ends surface them as
/// transient notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The operation requires an active round
    NotPlaying,
    /// The operation requires a finished round (won or lost)
    NotFinished,
    /// A submitted row is still revealing; retry after `finish_reveal`
    RevealPending,
    /// The guess buffer does not fill the row
    WrongLength { expected: usize },
    /// No candidate words to pick a secret from
    EmptyPool,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPlaying => write!(f, "no round is in progress"),
            Self::NotFinished => write!(f, "the round is still in progress"),
            Self::RevealPending => write!(f, "a guess is still being revealed"),
            Self::WrongLength { expected } => {
                write!(f, "word must be {expected} letters long")
            }
            Self::EmptyPool => write!(f, "no valid words to play with"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Result of releasing the reveal lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    /// The row that just became visible
    pub row: GuessRow,
    /// Session status after applying the row
    pub status: GameStatus,
}

/// One player's session: pool, secret, guesses, hints, and lifecycle state
///
/// The session owns its random source; seeding it makes secret selection
/// deterministic for tests and replays.
pub struct GameSession {
    status: GameStatus,
    alphabet: Alphabet,
    pool: Vec<Word>,
    max_guesses: usize,
    rng: StdRng,
    secret: Option<Word>,
    guesses: Vec<GuessRow>,
    buffer: Vec<char>,
    keyboard: KeyboardStatus,
    pending: Option<GuessRow>,
}

impl GameSession {
    /// New session in SETTINGS with an empty pool
    ///
    /// `seed` fixes the secret-selection rng; `None` seeds from the OS.
    #[must_use]
    pub fn new(alphabet: Alphabet, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let keyboard = KeyboardStatus::new(&alphabet);
        Self {
            status: GameStatus::Settings,
            alphabet,
            pool: Vec::new(),
            max_guesses: super::DEFAULT_MAX_GUESSES,
            rng,
            secret: None,
            guesses: Vec::new(),
            buffer: Vec::new(),
            keyboard,
            pending: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret word, present from PLAYING entry until the next reset
    #[inline]
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    /// Length of the current secret word, 0 while in SETTINGS
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.as_ref().map_or(0, Word::len)
    }

    #[inline]
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Rows revealed so far, in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessRow] {
        &self.guesses
    }

    /// Characters typed into the current guess so far
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// Whether a submitted row is waiting for `finish_reveal`
    #[inline]
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.pending.is_some()
    }

    /// How long front-ends should animate the reveal: 100ms per tile plus a
    /// 100ms tail
    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis((self.word_length() as u64) * 100 + 100)
    }

    /// Start a round with a new pool and guess limit
    ///
    /// Allowed from any state. Picks a secret uniformly at random, resets
    /// guesses, buffer, and keyboard hints, and enters PLAYING. The guess
    /// limit is clamped to the supported range.
    ///
    /// # Errors
    /// - `RevealPending` while a reveal is outstanding (deferred policy);
    /// - `EmptyPool` when `pool` is empty, leaving the session in SETTINGS.
    pub fn start_game(&mut self, pool: Vec<Word>, max_guesses: usize) -> Result<(), Rejection> {
        if self.pending.is_some() {
            return Err(Rejection::RevealPending);
        }
        if pool.is_empty() {
            self.status = GameStatus::Settings;
            return Err(Rejection::EmptyPool);
        }
        self.pool = pool;
        self.max_guesses = clamp_max_guesses(max_guesses);
        self.begin_round();
        Ok(())
    }

    /// Append a character to the guess buffer
    ///
    /// Only effective during PLAYING with no reveal pending, when the buffer
    /// is not yet full and the character's uppercase form is in the
    /// alphabet. Ignored otherwise, matching on-screen keyboard behavior.
    pub fn append_char(&mut self, ch: char) {
        if self.status != GameStatus::Playing || self.pending.is_some() {
            return;
        }
        if self.buffer.len() >= self.word_length() {
            return;
        }
        if let Some(upper) = self.alphabet.normalize(ch) {
            self.buffer.push(upper);
        }
    }

    /// Remove the last buffered character; no-op when empty or not playing
    pub fn backspace(&mut self) {
        if self.status != GameStatus::Playing || self.pending.is_some() {
            return;
        }
        self.buffer.pop();
    }

    /// Submit the buffered guess for scoring
    ///
    /// On success the evaluated row is held back behind the reveal lock;
    /// call [`finish_reveal`](Self::finish_reveal) to apply it. Submissions
    /// are strictly serialized: at most one row is ever in flight.
    ///
    /// # Errors
    /// - `NotPlaying` outside an active round;
    /// - `RevealPending` while the previous row is still revealing;
    /// - `WrongLength` when the buffer does not fill the row (no state
    ///   change).
    pub fn submit_guess(&mut self) -> Result<(), Rejection> {
        if self.status != GameStatus::Playing {
            return Err(Rejection::NotPlaying);
        }
        if self.pending.is_some() {
            return Err(Rejection::RevealPending);
        }
        let expected = self.word_length();
        if self.buffer.len() != expected {
            return Err(Rejection::WrongLength { expected });
        }

        let guess = Word::from_validated(self.buffer.clone());
        let secret = self
            .secret
            .as_ref()
            .ok_or(Rejection::NotPlaying)?;
        let row = evaluate_guess(&guess, secret);
        debug!("guess {} submitted, reveal pending", guess.text());
        self.pending = Some(row);
        Ok(())
    }

    /// Release the reveal lock and apply the pending row
    ///
    /// Appends the row, merges it into the keyboard hints, clears the
    /// buffer, and decides the transition: all-correct → WON, guess limit
    /// reached → LOST, otherwise stay PLAYING. Returns `None` when no reveal
    /// is pending, so the release happens exactly once per submission.
    pub fn finish_reveal(&mut self) -> Option<RevealOutcome> {
        let row = self.pending.take()?;
        self.guesses.push(row.clone());
        self.keyboard.merge(&row);
        self.buffer.clear();

        if row.is_all_correct() {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= self.max_guesses {
            self.status = GameStatus::Lost;
        }
        debug!(
            "reveal applied: guess {}/{}, status {:?}",
            self.guesses.len(),
            self.max_guesses,
            self.status
        );

        Some(RevealOutcome {
            row,
            status: self.status,
        })
    }

    /// Start another round with the same pool and settings
    ///
    /// # Errors
    /// - `NotFinished` unless the session is WON or LOST;
    /// - `RevealPending` while a reveal is outstanding;
    /// - `EmptyPool` when the pool is empty (session returns to SETTINGS).
    pub fn play_again(&mut self) -> Result<(), Rejection> {
        if self.pending.is_some() {
            return Err(Rejection::RevealPending);
        }
        if !matches!(self.status, GameStatus::Won | GameStatus::Lost) {
            return Err(Rejection::NotFinished);
        }
        if self.pool.is_empty() {
            self.status = GameStatus::Settings;
            return Err(Rejection::EmptyPool);
        }
        self.begin_round();
        Ok(())
    }

    /// Return to SETTINGS, abandoning any round
    ///
    /// Idempotent from SETTINGS.
    ///
    /// # Errors
    /// `RevealPending` while a reveal is outstanding (deferred policy).
    pub fn change_settings(&mut self) -> Result<(), Rejection> {
        if self.pending.is_some() {
            return Err(Rejection::RevealPending);
        }
        self.status = GameStatus::Settings;
        self.secret = None;
        self.guesses.clear();
        self.buffer.clear();
        self.keyboard.reset();
        Ok(())
    }

    fn begin_round(&mut self) {
        let index = self.rng.random_range(0..self.pool.len());
        let secret = self.pool[index].clone();
        debug!(
            "round started: {} letters, {} guesses allowed",
            secret.len(),
            self.max_guesses
        );
        self.secret = Some(secret);
        self.guesses.clear();
        self.buffer.clear();
        self.keyboard.reset();
        self.pending = None;
        self.status = GameStatus::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LengthLimits, LetterState};

    fn pool(words: &[&str]) -> Vec<Word> {
        let alphabet = Alphabet::default();
        words
            .iter()
            .map(|w| Word::new(w, LengthLimits::default(), &alphabet).unwrap())
            .collect()
    }

    fn session() -> GameSession {
        GameSession::new(Alphabet::default(), Some(42))
    }

    fn type_word(game: &mut GameSession, word: &str) {
        for ch in word.chars() {
            game.append_char(ch);
        }
    }

    /// Submit and immediately reveal, as the line-based front-end does
    fn play_guess(game: &mut GameSession, word: &str) -> RevealOutcome {
        type_word(game, word);
        game.submit_guess().unwrap();
        game.finish_reveal().unwrap()
    }

    #[test]
    fn new_session_starts_in_settings() {
        let game = session();
        assert_eq!(game.status(), GameStatus::Settings);
        assert_eq!(game.word_length(), 0);
        assert!(game.secret().is_none());
    }

    #[test]
    fn start_game_rejects_empty_pool() {
        let mut game = session();
        assert_eq!(game.start_game(vec![], 6), Err(Rejection::EmptyPool));
        assert_eq!(game.status(), GameStatus::Settings);
    }

    #[test]
    fn start_game_enters_playing_with_reset_state() {
        let mut game = session();
        game.start_game(pool(&["CRANE", "SLATE"]), 6).unwrap();

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.word_length(), 5);
        assert!(game.guesses().is_empty());
        assert!(game.buffer().is_empty());
        assert_eq!(game.keyboard().state_of('A'), LetterState::Initial);
    }

    #[test]
    fn seeded_sessions_pick_the_same_secrets() {
        let words = pool(&["CRANE", "SLATE", "TRACE", "HOUSE", "MOUSE"]);
        let mut a = GameSession::new(Alphabet::default(), Some(7));
        let mut b = GameSession::new(Alphabet::default(), Some(7));
        a.start_game(words.clone(), 6).unwrap();
        b.start_game(words, 6).unwrap();
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn secret_length_can_vary_per_round() {
        let mut game = session();
        game.start_game(pool(&["CAT"]), 6).unwrap();
        assert_eq!(game.word_length(), 3);
        game.change_settings().unwrap();
        game.start_game(pool(&["TECHNOLOGY"]), 6).unwrap();
        assert_eq!(game.word_length(), 10);
    }

    #[test]
    fn append_respects_buffer_capacity_and_alphabet() {
        let mut game = session();
        game.start_game(pool(&["CAT"]), 6).unwrap();

        game.append_char('d');
        game.append_char('4'); // not in alphabet, dropped
        game.append_char('O');
        game.append_char('g');
        game.append_char('s'); // buffer already full
        assert_eq!(game.buffer(), &['D', 'O', 'G']);
    }

    #[test]
    fn append_is_ignored_outside_playing() {
        let mut game = session();
        game.append_char('a');
        assert!(game.buffer().is_empty());
    }

    #[test]
    fn backspace_pops_and_tolerates_empty_buffer() {
        let mut game = session();
        game.start_game(pool(&["CAT"]), 6).unwrap();
        game.backspace(); // empty, no-op
        game.append_char('d');
        game.append_char('o');
        game.backspace();
        assert_eq!(game.buffer(), &['D']);
    }

    #[test]
    fn submit_rejects_short_buffer_without_mutation() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        type_word(&mut game, "CRA");

        assert_eq!(
            game.submit_guess(),
            Err(Rejection::WrongLength { expected: 5 })
        );
        assert_eq!(game.buffer(), &['C', 'R', 'A']);
        assert!(game.guesses().is_empty());
        assert!(!game.is_revealing());
    }

    #[test]
    fn submit_outside_playing_is_rejected() {
        let mut game = session();
        assert_eq!(game.submit_guess(), Err(Rejection::NotPlaying));
    }

    #[test]
    fn winning_guess_transitions_to_won() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();

        let outcome = play_guess(&mut game, "CRANE");
        assert!(outcome.row.is_all_correct());
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn no_input_is_accepted_after_winning() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        play_guess(&mut game, "CRANE");

        game.append_char('a');
        assert!(game.buffer().is_empty());
        assert_eq!(game.submit_guess(), Err(Rejection::NotPlaying));
    }

    #[test]
    fn sixth_losing_guess_transitions_to_lost_exactly_then() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();

        for i in 1..=6 {
            let outcome = play_guess(&mut game, "SLATE");
            if i < 6 {
                assert_eq!(outcome.status, GameStatus::Playing, "guess {i}");
            } else {
                assert_eq!(outcome.status, GameStatus::Lost);
            }
        }
        assert_eq!(game.guesses().len(), 6);
        assert_eq!(game.submit_guess(), Err(Rejection::NotPlaying));
    }

    #[test]
    fn winning_on_the_last_guess_beats_exhaustion() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 3).unwrap();
        play_guess(&mut game, "SLATE");
        play_guess(&mut game, "TRACE");
        let outcome = play_guess(&mut game, "CRANE");
        assert_eq!(outcome.status, GameStatus::Won);
    }

    #[test]
    fn reveal_lock_blocks_guess_input() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        type_word(&mut game, "SLATE");
        game.submit_guess().unwrap();
        assert!(game.is_revealing());

        game.append_char('x');
        game.backspace();
        assert_eq!(game.buffer(), &['S', 'L', 'A', 'T', 'E']);
        assert_eq!(game.submit_guess(), Err(Rejection::RevealPending));
    }

    #[test]
    fn reveal_lock_defers_restart_and_settings() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        type_word(&mut game, "SLATE");
        game.submit_guess().unwrap();

        assert_eq!(game.play_again(), Err(Rejection::RevealPending));
        assert_eq!(game.change_settings(), Err(Rejection::RevealPending));
        assert_eq!(
            game.start_game(pool(&["MOUSE"]), 6),
            Err(Rejection::RevealPending)
        );

        // After the lock clears, the deferred action goes through.
        game.finish_reveal().unwrap();
        game.change_settings().unwrap();
        assert_eq!(game.status(), GameStatus::Settings);
    }

    #[test]
    fn finish_reveal_releases_exactly_once() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        type_word(&mut game, "SLATE");
        game.submit_guess().unwrap();

        assert!(game.finish_reveal().is_some());
        assert!(game.finish_reveal().is_none());
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn finish_reveal_merges_keyboard_and_clears_buffer() {
        let mut game = session();
        game.start_game(pool(&["TRACE"]), 6).unwrap();
        play_guess(&mut game, "CRANE");

        assert!(game.buffer().is_empty());
        assert_eq!(game.keyboard().state_of('A'), LetterState::Correct);
        assert_eq!(game.keyboard().state_of('C'), LetterState::Present);
        assert_eq!(game.keyboard().state_of('N'), LetterState::Absent);
    }

    #[test]
    fn play_again_restarts_after_a_finished_round() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        play_guess(&mut game, "CRANE");

        game.play_again().unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.guesses().is_empty());
        assert_eq!(game.keyboard().state_of('C'), LetterState::Initial);
    }

    #[test]
    fn play_again_requires_a_finished_round() {
        let mut game = session();
        assert_eq!(game.play_again(), Err(Rejection::NotFinished));
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        assert_eq!(game.play_again(), Err(Rejection::NotFinished));
    }

    #[test]
    fn change_settings_is_idempotent_from_settings() {
        let mut game = session();
        game.change_settings().unwrap();
        assert_eq!(game.status(), GameStatus::Settings);
        game.change_settings().unwrap();
        assert_eq!(game.status(), GameStatus::Settings);
    }

    #[test]
    fn change_settings_abandons_a_round() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        type_word(&mut game, "SLA");
        game.change_settings().unwrap();

        assert_eq!(game.status(), GameStatus::Settings);
        assert!(game.secret().is_none());
        assert!(game.buffer().is_empty());
    }

    #[test]
    fn guess_limit_is_clamped() {
        let mut game = session();
        game.start_game(pool(&["CRANE"]), 99).unwrap();
        assert_eq!(game.max_guesses(), super::super::MAX_MAX_GUESSES);
    }

    #[test]
    fn reveal_duration_scales_with_word_length() {
        let mut game = session();
        game.start_game(pool(&["CAT"]), 6).unwrap();
        assert_eq!(game.reveal_duration(), Duration::from_millis(400));

        game.change_settings().unwrap();
        game.start_game(pool(&["CRANE"]), 6).unwrap();
        assert_eq!(game.reveal_duration(), Duration::from_millis(600));
    }
}

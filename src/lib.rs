//! Word-Guessing Game Engine
//!
//! A playable Wordle-style game with customizable word lists, variable word
//! lengths (3–10 letters), and an extended Latin alphabet. The engine scores
//! guesses with exact duplicate-letter semantics, aggregates monotonic
//! keyboard hints, and drives the session state machine from setup through
//! win or loss.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Alphabet, LengthLimits};
//! use wordle_game::game::GameSession;
//! use wordle_game::wordlists::process_word_list;
//!
//! let alphabet = Alphabet::default();
//! let list = process_word_list("crane slate trace", LengthLimits::default(), &alphabet)
//!     .expect("valid list");
//!
//! let mut game = GameSession::new(alphabet, Some(42));
//! game.start_game(list.words, 6).expect("non-empty pool");
//!
//! for ch in "crane".chars() {
//!     game.append_char(ch);
//! }
//! game.submit_guess().expect("full buffer");
//! let outcome = game.finish_reveal().expect("one pending reveal");
//! assert_eq!(outcome.row.len(), 5);
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word list ingestion and defaults
pub mod wordlists;

// Post-game word enrichment
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

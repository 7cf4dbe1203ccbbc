//! Session state machine and settings limits

mod session;

pub use session::{GameSession, GameStatus, Rejection, RevealOutcome};

/// Default number of allowed guesses
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Smallest configurable guess limit
pub const MIN_MAX_GUESSES: usize = 3;

/// Largest configurable guess limit
pub const MAX_MAX_GUESSES: usize = 10;

/// Clamp a requested guess limit into the supported range
#[must_use]
pub fn clamp_max_guesses(requested: usize) -> usize {
    requested.clamp(MIN_MAX_GUESSES, MAX_MAX_GUESSES)
}

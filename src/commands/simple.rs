//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a word, see the scored tiles and
//! the keyboard hints. Reads from any `BufRead` so tests can script a whole
//! game through a cursor.

use crate::core::Word;
use crate::dictionary::{Dictionary, TsvDictionary};
use crate::game::{GameSession, GameStatus, Rejection};
use crate::output::{colored_tiles, keyboard_lines, row_to_emoji};
use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;
use std::sync::Arc;

/// Configuration for a simple-mode run
pub struct SimpleConfig {
    pub pool: Vec<Word>,
    pub max_guesses: usize,
    pub seed: Option<u64>,
    pub dictionary: Option<Arc<TsvDictionary>>,
}

/// Run the line-based game loop until the player quits
///
/// Reveals are applied immediately: there is no animation to stagger in
/// line mode, so every submission is followed by `finish_reveal` in the
/// same iteration.
///
/// # Errors
/// Returns an error when reading player input fails.
pub fn run_simple<R: BufRead>(
    config: SimpleConfig,
    alphabet: crate::core::Alphabet,
    mut reader: R,
) -> Result<()> {
    // Kept for the 'new' command: start_game consumes a pool each round.
    let pool = config.pool.clone();
    let mut game = GameSession::new(alphabet, config.seed);
    if let Err(rejection) = game.start_game(config.pool, config.max_guesses) {
        println!("{}", format!("Cannot start: {rejection}").red());
        return Ok(());
    }

    print_round_banner(&game);

    loop {
        let attempt = game.guesses().len() + 1;
        println!(
            "\nGuess {attempt}/{} ({} letters) — or 'new', 'quit':",
            game.max_guesses(),
            game.word_length()
        );

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            return Ok(()); // EOF
        }
        let input = input.trim();

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("Thanks for playing!");
                return Ok(());
            }
            "new" | "n" => {
                restart(&mut game, pool.clone(), config.max_guesses);
                continue;
            }
            _ => {}
        }

        for ch in input.chars() {
            game.append_char(ch);
        }

        if let Err(rejection) = game.submit_guess() {
            match rejection {
                Rejection::WrongLength { .. } => {
                    println!("{}", rejection.to_string().yellow());
                    clear_buffer(&mut game);
                }
                other => println!("{}", other.to_string().yellow()),
            }
            continue;
        }

        // No reveal animation in line mode.
        let Some(outcome) = game.finish_reveal() else {
            continue;
        };

        println!("\n  {}", colored_tiles(&outcome.row));
        for line in keyboard_lines(game.keyboard()) {
            println!("  {line}");
        }

        match outcome.status {
            GameStatus::Won => {
                let secret = secret_text(&game);
                println!(
                    "\n{}",
                    format!(
                        "You guessed {secret} in {} {}!",
                        game.guesses().len(),
                        if game.guesses().len() == 1 {
                            "guess"
                        } else {
                            "guesses"
                        }
                    )
                    .bright_green()
                    .bold()
                );
                print_share_grid(&game);
                print_word_info(config.dictionary.as_deref(), &secret);
                if !prompt_play_again(&mut game, &mut reader)? {
                    return Ok(());
                }
            }
            GameStatus::Lost => {
                let secret = secret_text(&game);
                println!(
                    "\n{}",
                    format!("Out of guesses! The word was {secret}.").bright_red()
                );
                print_word_info(config.dictionary.as_deref(), &secret);
                if !prompt_play_again(&mut game, &mut reader)? {
                    return Ok(());
                }
            }
            GameStatus::Playing | GameStatus::Settings => {}
        }
    }
}

fn secret_text(game: &GameSession) -> String {
    game.secret().map(|w| w.text().to_string()).unwrap_or_default()
}

/// Abandon the current round and deal a fresh one from the same pool
fn restart(game: &mut GameSession, pool: Vec<Word>, max_guesses: usize) {
    let result = game
        .change_settings()
        .and_then(|()| game.start_game(pool, max_guesses));
    match result {
        Ok(()) => print_round_banner(game),
        Err(rejection) => println!("{}", rejection.to_string().yellow()),
    }
}

fn clear_buffer(game: &mut GameSession) {
    while !game.buffer().is_empty() {
        game.backspace();
    }
}

fn print_round_banner(game: &GameSession) {
    println!(
        "\n{}",
        format!(
            "New round: {} letters, {} guesses.",
            game.word_length(),
            game.max_guesses()
        )
        .bright_cyan()
    );
}

fn print_share_grid(game: &GameSession) {
    println!("\n  Your game:");
    for row in game.guesses() {
        println!("  {}", row_to_emoji(row));
    }
}

fn print_word_info(dictionary: Option<&TsvDictionary>, secret: &str) {
    let Some(dictionary) = dictionary else {
        return;
    };
    match dictionary.lookup(secret) {
        Ok(entry) => {
            if let Some(phonetic) = entry.phonetic {
                println!("  Phonetic: {phonetic}");
            }
            if let Some(definition) = entry.definition {
                println!("  Meaning: {definition}");
            }
        }
        // Best-effort only; a miss is a display message, nothing more.
        Err(err) => println!("  {err}"),
    }
}

fn prompt_play_again<R: BufRead>(game: &mut GameSession, reader: &mut R) -> Result<bool> {
    println!("\nPlay again? (yes/no)");
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(false);
    }
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => match game.play_again() {
            Ok(()) => {
                print_round_banner(game);
                Ok(true)
            }
            Err(rejection) => {
                println!("{}", rejection.to_string().red());
                Ok(false)
            }
        },
        _ => {
            println!("Thanks for playing!");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, LengthLimits};
    use std::io::Cursor;

    fn pool(words: &[&str]) -> Vec<Word> {
        let alphabet = Alphabet::default();
        words
            .iter()
            .map(|w| Word::new(w, LengthLimits::default(), &alphabet).unwrap())
            .collect()
    }

    fn run(words: &[&str], script: &str) {
        let config = SimpleConfig {
            pool: pool(words),
            max_guesses: 6,
            seed: Some(1),
            dictionary: None,
        };
        run_simple(config, Alphabet::default(), Cursor::new(script)).unwrap();
    }

    #[test]
    fn immediate_quit() {
        run(&["CRANE"], "quit\n");
    }

    #[test]
    fn win_then_decline_rematch() {
        run(&["CRANE"], "crane\nno\n");
    }

    #[test]
    fn win_then_play_again_then_quit() {
        run(&["CRANE"], "crane\nyes\nquit\n");
    }

    #[test]
    fn wrong_length_guess_is_reprompted() {
        run(&["CRANE"], "cat\ncrane\nno\n");
    }

    #[test]
    fn losing_game_ends_cleanly() {
        // Six misses against a one-word pool.
        run(
            &["CRANE"],
            "slate\nslate\nslate\nslate\nslate\nslate\nno\n",
        );
    }

    #[test]
    fn new_command_restarts_mid_round() {
        run(&["CRANE"], "slate\nnew\ncrane\nno\n");
    }

    #[test]
    fn eof_mid_game_exits_gracefully() {
        run(&["CRANE"], "slate\n");
    }

    #[test]
    fn dictionary_info_is_printed_after_win() {
        let dict = TsvDictionary::from_text("CRANE\t/kreɪn/\tA wading bird.");
        let config = SimpleConfig {
            pool: pool(&["CRANE"]),
            max_guesses: 6,
            seed: Some(1),
            dictionary: Some(Arc::new(dict)),
        };
        run_simple(config, Alphabet::default(), Cursor::new("crane\nno\n")).unwrap();
    }
}

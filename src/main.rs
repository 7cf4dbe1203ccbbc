//! Word-Guessing Game - CLI
//!
//! Playable Wordle-style game with customizable word lists, variable word
//! lengths, and TUI or line-based modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use wordle_game::{
    commands::{SimpleConfig, run_simple},
    core::{Alphabet, LengthLimits, Word},
    dictionary::TsvDictionary,
    game::{DEFAULT_MAX_GUESSES, GameSession, clamp_max_guesses},
    interactive::{App, run_tui},
    wordlists::{LoadNotice, default_list_text, process_word_list},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game with customizable word lists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'default' (embedded list) or a path to a text file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Allowed guesses per round (clamped to 3-10)
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for secret-word selection (deterministic rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Optional TSV dictionary (WORD<TAB>phonetic<TAB>definition) for
    /// post-game word information
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based CLI mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let alphabet = Alphabet::default();
    let pool = load_pool(&cli.wordlist, &alphabet)?;
    let max_guesses = clamp_max_guesses(cli.max_guesses);

    let dictionary = match &cli.dictionary {
        Some(path) => Some(Arc::new(TsvDictionary::load(path).with_context(|| {
            format!("failed to load dictionary from {}", path.display())
        })?)),
        None => None,
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut game = GameSession::new(alphabet, cli.seed);
            game.start_game(pool, max_guesses)
                .map_err(|rejection| anyhow::anyhow!("{rejection}"))?;
            run_tui(App::new(game, dictionary))
        }
        Commands::Simple => {
            let config = SimpleConfig {
                pool,
                max_guesses,
                seed: cli.seed,
                dictionary,
            };
            run_simple(config, alphabet, std::io::stdin().lock())
        }
    }
}

/// Load and validate the word list named by the -w flag
fn load_pool(wordlist: &str, alphabet: &Alphabet) -> Result<Vec<Word>> {
    let (raw, is_default) = if wordlist == "default" {
        (default_list_text(), true)
    } else {
        let content = fs::read_to_string(wordlist)
            .with_context(|| format!("failed to read word list from {wordlist}"))?;
        (content, false)
    };

    let list = match process_word_list(&raw, LengthLimits::default(), alphabet) {
        Ok(list) => list,
        Err(err) => bail!("invalid word list: {err}"),
    };

    match &list.notice {
        LoadNotice::Complete { count } if is_default => {
            eprintln!("Loaded {count} default words.");
        }
        LoadNotice::Complete { count } => {
            eprintln!("Using {count} custom words.");
        }
        notice @ LoadNotice::Partial { .. } => {
            eprintln!("{notice}");
        }
    }

    Ok(list.words)
}

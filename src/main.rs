//! Goban-Rules: a Go rules engine with a text front-end.
//!
//! ## Usage
//!
//! - `goban-rules` - Play a random demo game
//! - `goban-rules console` - Read commands from stdin
//! - `goban-rules score <file>` - Score a saved game

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use goban_rules::config::GameConfig;
use goban_rules::console::Console;
use goban_rules::constants::{DEFAULT_BOARD_SIZE, DEFAULT_KOMI};
use goban_rules::persist::SavedGame;
use goban_rules::playout::random_game;
use goban_rules::session::GameSession;

/// Goban-Rules: a rules engine for the game of Go
#[derive(Parser)]
#[command(name = "goban-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively by typing commands on stdin
    Console {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Komi added to Player 2's score
        #[arg(long, default_value_t = DEFAULT_KOMI)]
        komi: f32,
    },
    /// Play a random game and print the final board and score
    Demo {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Random seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score the current position of a saved game
    Score {
        /// Saved game file
        file: PathBuf,
        /// Override the komi stored in the file
        #[arg(long)]
        komi: Option<f32>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Console { size, komi }) => {
            let config = GameConfig {
                board_size: size,
                komi,
            };
            config.validate().context("invalid game settings")?;
            let mut console = Console::new(config);
            console
                .run(io::stdin().lock(), &mut io::stdout())
                .context("console I/O failed")?;
        }
        Some(Commands::Demo { size, seed }) => run_demo(size, seed)?,
        None => run_demo(DEFAULT_BOARD_SIZE, None)?,
        Some(Commands::Score { file, komi }) => {
            let saved = SavedGame::load(&file)
                .with_context(|| format!("cannot load {}", file.display()))?;
            let mut session = GameSession::from_saved(saved);
            if let Some(komi) = komi {
                session.set_komi(komi);
            }
            let score = session.score();
            println!("{}", session.current().board());
            println!("Area: {} to {}", score.player1, score.player2);
            println!("{}", session.game_over_text());
        }
    }
    Ok(())
}

fn run_demo(size: usize, seed: Option<u64>) -> Result<()> {
    let config = GameConfig::with_board_size(size);
    config.validate().context("invalid game settings")?;

    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!("demo game on {size}x{size}, seed {seed}");
    let mut rng = fastrand::Rng::with_seed(seed);
    let session = random_game(config, &mut rng);

    println!("Goban-Rules: random game on a {size}x{size} board (seed {seed})\n");
    println!("{}", session.current().board());
    println!("Turns played: {}", session.history().len());
    let score = session.score();
    println!("Area: {} to {}", score.player1, score.player2);
    println!("{}", session.game_over_text());
    Ok(())
}

//! Terminal front-end.
//!
//! Reads one command per line from stdin: `w`/`a`/`s`/`d` or
//! `up`/`left`/`down`/`right` to move, `r` to restart, `q` to quit.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tile_merge::actuator::TextActuator;
use tile_merge::core::{Direction, GameConfig};
use tile_merge::session::TileBoard;

#[derive(Parser, Debug)]
#[command(about = "Play a sliding-tile merge puzzle in the terminal")]
struct Cli {
    /// JSON file with a game configuration; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board edge length.
    #[arg(long)]
    size: Option<usize>,

    /// Tile value that wins the game.
    #[arg(long)]
    target: Option<u32>,

    /// RNG seed.
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Move(Direction),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => Command::Move(Direction::Up),
        "d" | "right" => Command::Move(Direction::Right),
        "s" | "down" => Command::Move(Direction::Down),
        "a" | "left" => Command::Move(Direction::Left),
        "r" | "restart" => Command::Restart,
        "q" | "quit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(size) = cli.size {
        config.size = size;
    }
    if let Some(target) = cli.target {
        config.winning_value = target;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut board = TileBoard::new(config, TextActuator::new(io::stdout()))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Move(direction)) => {
                board.move_tiles(direction);
            }
            Some(Command::Restart) => board.restart(),
            Some(Command::Quit) => break,
            None => eprintln!("commands: w a s d, r (restart), q (quit)"),
        }
        board.tick();

        if board.manager().is_terminated() {
            eprintln!("press r to play again or q to quit");
        }
    }

    Ok(())
}

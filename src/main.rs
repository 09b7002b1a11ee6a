use std::error::Error;
use std::time::Duration;

use clap::Parser;
use grid_snake::config::{DEFAULT_COLUMNS, DEFAULT_ROWS, Grid, TICK_INTERVAL_MS};
use grid_snake::game::GameState;
use grid_snake::runtime;
use grid_snake::score::{FileStore, HighScoreStore};

#[derive(Debug, Parser)]
#[command(version, about = "Classic Snake on a discrete grid")]
struct Cli {
    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u16,

    /// Simulation tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = TICK_INTERVAL_MS)]
    tick_ms: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let grid = Grid::new(cli.rows, cli.columns)?;

    // Load before entering raw mode so a broken score file can warn on a
    // usable stderr; the game then starts from zero.
    let store = FileStore::at_default_path();
    let high_score = match store.load() {
        Ok(high_score) => high_score,
        Err(error) => {
            eprintln!("warning: could not read high score file: {error}");
            0
        }
    };

    let mut game = GameState::new(grid, high_score, Box::new(store));
    runtime::run(&mut game, Duration::from_millis(cli.tick_ms))?;

    println!("Final score: {}   High score: {}", game.score, game.high_score());
    Ok(())
}

//! Rubik's Cube
//!
//! Manipulates a virtual 3x3x3 Rubik's Cube: select a layer or cross slice,
//! turn it a quarter turn in either direction and watch the move animate in
//! an interactive 3D view. The `print` command applies moves without a window
//! and prints where every cubie ended up.

mod visualization;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use rubik::config::PuzzleConfig;
use rubik::controller::RubikController;
use rubik::error::PuzzleError;
use rubik::notation::Move;
use rubik::PuzzleOps;

/// Turns the sections of a virtual Rubik's Cube.
#[derive(Parser)]
#[command(name = "rubik")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Degrees a turning section advances per frame.
    #[arg(long, default_value_t = 1.0, global = true)]
    degrees_per_tick: f32,
    /// Edge length of one cubie.
    #[arg(long, default_value_t = 1.0, global = true)]
    edge_length: f32,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive 3D viewer.
    Play,
    /// Apply quarter turns such as `L0+ V2-` and print the resulting grid.
    Print {
        /// Moves: L, H or V, then the index, then + or -.
        moves: Vec<Move>,
    },
}

impl Cli {
    fn config(&self) -> PuzzleConfig {
        PuzzleConfig {
            degrees_per_tick: self.degrees_per_tick,
            edge_length: self.edge_length,
            ..PuzzleConfig::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if cfg!(debug_assertions) {
            "rubik=debug"
        } else {
            "rubik=warn"
        },
    ))
    .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Some(Command::Print { moves }) => run_print(cli.config(), moves),
        Some(Command::Play) | None => run_play(cli.config()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Opens the viewer on a solved cube.
fn run_play(config: PuzzleConfig) -> Result<(), PuzzleError> {
    let puzzle = RubikController::new(config)?;
    println!("{}", visualization::CONTROLS);
    visualization::display(Box::new(puzzle), config.edge_length);
    Ok(())
}

/// Applies `moves` to a solved cube and prints the grid.
fn run_print(config: PuzzleConfig, moves: &[Move]) -> Result<(), PuzzleError> {
    let output = apply_and_format(RubikController::new(config)?, moves)?;
    print!("{output}");
    Ok(())
}

fn apply_and_format(mut puzzle: RubikController, moves: &[Move]) -> Result<String, PuzzleError> {
    for &mv in moves {
        PuzzleOps::apply_move(&mut puzzle, mv)?;
    }
    Ok(PuzzleOps::format_grid(&puzzle))
}

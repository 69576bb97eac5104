use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ricochet_solver::{load_puzzle, solve, MoveCap, Report, SolveConfig};

#[derive(Parser, Debug)]
#[command(name = "ricochet_solver", version)]
#[command(about = "Find the shortest move sequences for a Ricochet Robots puzzle")]
struct Cli {
    /// Puzzle description file
    puzzle_file: PathBuf,

    /// Only consider solutions with at most this many moves
    #[arg(long, alias = "max_moves", value_parser = clap::value_parser!(u32).range(1..))]
    max_moves: Option<u32>,

    /// List every solution tied at the minimum move count
    #[arg(long, alias = "all_solutions", default_value_t = false)]
    all_solutions: bool,
}

impl Cli {
    fn solve_config(&self) -> SolveConfig {
        SolveConfig {
            max_moves: self
                .max_moves
                .map_or(MoveCap::Derived, |moves| MoveCap::Explicit(moves as usize)),
            all_solutions: self.all_solutions,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.solve_config();

    let started = Instant::now();
    let puzzle = load_puzzle(&cli.puzzle_file)
        .with_context(|| format!("failed to load {}", cli.puzzle_file.display()))?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "read arguments and loaded board"
    );

    print!("{puzzle}");

    let started = Instant::now();
    let outcome = solve(&puzzle, &config);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        all_solutions = config.all_solutions,
        "solve finished"
    );

    print!("{}", Report::new(&puzzle, &outcome, config.all_solutions));
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

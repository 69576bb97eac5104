//! Parallel solver for Ricochet Robots puzzles: robots slide until blocked,
//! and the goal is the shortest move sequence that leaves every goal cell
//! occupied by a robot it accepts.

pub mod error;
pub mod geometry;
pub mod loader;
pub mod path;
pub mod puzzle;
pub mod registry;
pub mod render;
pub mod report;
pub mod search;
pub mod solver;

pub use error::{LoadError, PuzzleError};
pub use geometry::{Direction, Position, WallKind};
pub use loader::{load_puzzle, parse_puzzle};
pub use path::{Move, Path};
pub use puzzle::{Goal, GoalTarget, Puzzle, Robot};
pub use report::{rank, Ranking, Report};
pub use solver::{solve, solve_with_stats, MoveCap, SolveConfig, SolveOutcome, SolveStats};

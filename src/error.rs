use thiserror::Error;

use crate::geometry::{Position, WallKind};

pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// Construction-time constraint violations. Any of these aborts loading of the
/// puzzle that raised it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PuzzleError {
    #[error("board dimensions must be at least 1x1 (got {rows}x{cols})")]
    InvalidDimensions { rows: i64, cols: i64 },

    #[error("position {position} lies outside the {rows}x{cols} board")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("cell {position} is already occupied by robot {occupant}")]
    CellOccupied { position: Position, occupant: char },

    #[error("robot identifier {0:?} is not an uppercase letter")]
    InvalidRobotId(char),

    #[error("robot {0} has already been placed")]
    DuplicateRobot(char),

    #[error("{kind} wall at ({row}, {col}) is not a valid half-unit coordinate on this board")]
    MalformedWall { kind: WallKind, row: f64, col: f64 },

    #[error("{kind} wall at ({row}, {col}) already exists")]
    DuplicateWall { kind: WallKind, row: f64, col: f64 },

    #[error("goal label {0:?} must be an uppercase letter or \"any\"")]
    InvalidGoalLabel(String),

    #[error("goal refers to robot {0}, which is not on the board")]
    UnknownRobot(char),

    #[error("cell {0} already holds a goal")]
    DuplicateGoal(Position),
}

/// Failures while reading a puzzle description.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("could not parse {token:?} as {expected}")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },

    #[error("unknown token in the input file: {0:?}")]
    UnknownToken(String),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

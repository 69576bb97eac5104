//! Reads the whitespace-delimited puzzle format:
//!
//! ```text
//! <rows> <cols>
//! robot <ID> <row> <col>
//! vertical_wall <row> <col.5>
//! horizontal_wall <row.5> <col>
//! goal <ID|any> <row> <col>
//! ```

use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::error::{LoadError, PuzzleError};
use crate::geometry::{Position, WallKind};
use crate::puzzle::{GoalTarget, Puzzle};

pub fn load_puzzle(path: impl AsRef<Path>) -> Result<Puzzle, LoadError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_puzzle(&input)
}

pub fn parse_puzzle(input: &str) -> Result<Puzzle, LoadError> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
    };

    let rows: i64 = tokens.number("board rows")?;
    let cols: i64 = tokens.number("board columns")?;
    if rows < 1 || cols < 1 {
        return Err(PuzzleError::InvalidDimensions { rows, cols }.into());
    }
    let mut puzzle = Puzzle::new(rows as usize, cols as usize)?;

    while let Some(token) = tokens.inner.next() {
        match token {
            "robot" => {
                let id = tokens.robot_id()?;
                let position = tokens.position()?;
                puzzle.place_robot(position, id)?;
            }
            "vertical_wall" => {
                let row: i16 = tokens.number("wall row")?;
                let col: f64 = tokens.number("wall column")?;
                puzzle.add_wall(WallKind::Vertical, f64::from(row), col)?;
            }
            "horizontal_wall" => {
                let row: f64 = tokens.number("wall row")?;
                let col: i16 = tokens.number("wall column")?;
                puzzle.add_wall(WallKind::Horizontal, row, f64::from(col))?;
            }
            "goal" => {
                let target = GoalTarget::parse(tokens.next("goal robot")?)?;
                let position = tokens.position()?;
                puzzle.add_goal(target, position)?;
            }
            other => return Err(LoadError::UnknownToken(other.to_string())),
        }
    }

    debug!(
        rows,
        cols,
        robots = puzzle.num_robots(),
        goals = puzzle.num_goals(),
        "puzzle loaded"
    );
    Ok(puzzle)
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, expected: &'static str) -> Result<&'a str, LoadError> {
        self.inner.next().ok_or(LoadError::UnexpectedEof { expected })
    }

    fn number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, LoadError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| LoadError::InvalidNumber {
            token: token.to_string(),
            expected,
        })
    }

    fn position(&mut self) -> Result<Position, LoadError> {
        let row = self.number("row")?;
        let col = self.number("column")?;
        Ok(Position::new(row, col))
    }

    fn robot_id(&mut self) -> Result<char, LoadError> {
        let token = self.next("robot identifier")?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(id), None) => Ok(id),
            (Some(id), Some(_)) => Err(PuzzleError::InvalidRobotId(id).into()),
            (None, _) => Err(LoadError::UnexpectedEof {
                expected: "robot identifier",
            }),
        }
    }
}

//! Board geometry: 1-indexed cell coordinates, the four slide directions and
//! the wall grids addressed by half-unit offsets.
//!
//! A vertical wall between columns `c` and `c + 1` of row `r` is written
//! `(r, c + 0.5)`; a horizontal wall between rows `r` and `r + 1` of column `c`
//! is written `(r + 0.5, c)`. Internally both are stored by the floor of the
//! half-unit coordinate, which is why the vertical grid has one extra column
//! and the horizontal grid one extra row.

use std::fmt;

use crate::error::{PuzzleError, PuzzleResult};

/// Tolerance accepted when checking that a wall coordinate sits on a half unit.
const HALF_UNIT_EPSILON: f64 = 0.005;

// Row/column deltas, indexed by `Direction as usize`.
const DIR_OFFSETS: [(i16, i16); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const DIR_WORDS: [&str; 4] = ["north", "west", "south", "east"];

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    /// Reserved marker for an uninitialised coordinate.
    pub const INVALID: Position = Position::new(0, 0);

    #[inline(always)]
    pub const fn new(row: i16, col: i16) -> Self {
        Position { row, col }
    }

    #[inline(always)]
    pub const fn step(self, direction: Direction) -> Self {
        let (drow, dcol) = DIR_OFFSETS[direction as usize];
        Position::new(self.row + drow, self.col + dcol)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    West = 1,
    South = 2,
    East = 3,
}

impl Direction {
    /// Exploration order used by every explorer. Result enumeration order
    /// depends on it.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    pub const fn word(self) -> &'static str {
        DIR_WORDS[self as usize]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WallKind {
    /// Separates two horizontally adjacent cells; column is a half unit.
    Vertical,
    /// Separates two vertically adjacent cells; row is a half unit.
    Horizontal,
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallKind::Vertical => f.write_str("vertical"),
            WallKind::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Fixed-size wall model. The four boundary walls are present from
/// construction and can never be added again.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    vertical_walls: Vec<bool>,
    horizontal_walls: Vec<bool>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> PuzzleResult<Self> {
        if rows == 0 || cols == 0 || rows > i16::MAX as usize || cols > i16::MAX as usize {
            return Err(PuzzleError::InvalidDimensions {
                rows: rows as i64,
                cols: cols as i64,
            });
        }

        let mut grid = Grid {
            rows,
            cols,
            vertical_walls: vec![false; rows * (cols + 1)],
            horizontal_walls: vec![false; (rows + 1) * cols],
        };

        for row in 1..=rows {
            grid.vertical_walls[(row - 1) * (cols + 1)] = true;
            grid.vertical_walls[(row - 1) * (cols + 1) + cols] = true;
        }
        for col in 1..=cols {
            grid.horizontal_walls[col - 1] = true;
            grid.horizontal_walls[rows * cols + col - 1] = true;
        }

        Ok(grid)
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 1 && pos.row as usize <= self.rows && pos.col >= 1 && pos.col as usize <= self.cols
    }

    /// Row-major index of a cell. Callers must pass a position on the board.
    #[inline(always)]
    pub fn cell_index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{pos} is off the board");
        (pos.row as usize - 1) * self.cols + (pos.col as usize - 1)
    }

    /// Adds an interior wall. `row`/`col` use the half-unit convention
    /// described in the module docs.
    pub fn add_wall(&mut self, kind: WallKind, row: f64, col: f64) -> PuzzleResult<()> {
        let malformed = || PuzzleError::MalformedWall { kind, row, col };

        let slot = match kind {
            WallKind::Vertical => {
                let r = whole_index(row).filter(|&r| (1..=self.rows).contains(&r));
                let c = half_index(col).filter(|&c| c <= self.cols);
                match (r, c) {
                    (Some(r), Some(c)) => &mut self.vertical_walls[(r - 1) * (self.cols + 1) + c],
                    _ => return Err(malformed()),
                }
            }
            WallKind::Horizontal => {
                let r = half_index(row).filter(|&r| r <= self.rows);
                let c = whole_index(col).filter(|&c| (1..=self.cols).contains(&c));
                match (r, c) {
                    (Some(r), Some(c)) => &mut self.horizontal_walls[r * self.cols + (c - 1)],
                    _ => return Err(malformed()),
                }
            }
        };

        if *slot {
            return Err(PuzzleError::DuplicateWall { kind, row, col });
        }
        *slot = true;
        Ok(())
    }

    /// Vertical wall of `row` at boundary `boundary`, where boundary `c` sits
    /// between columns `c` and `c + 1` (0 and `cols` are the board edges).
    #[inline(always)]
    pub fn vertical_wall(&self, row: usize, boundary: usize) -> bool {
        self.vertical_walls[(row - 1) * (self.cols + 1) + boundary]
    }

    /// Horizontal wall of `col` at boundary `boundary`, where boundary `r`
    /// sits between rows `r` and `r + 1`.
    #[inline(always)]
    pub fn horizontal_wall(&self, boundary: usize, col: usize) -> bool {
        self.horizontal_walls[boundary * self.cols + (col - 1)]
    }

    /// Whether a wall stands on the `direction` side of `pos`.
    #[inline(always)]
    pub fn blocks(&self, pos: Position, direction: Direction) -> bool {
        let row = pos.row as usize;
        let col = pos.col as usize;
        match direction {
            Direction::North => self.horizontal_wall(row - 1, col),
            Direction::South => self.horizontal_wall(row, col),
            Direction::West => self.vertical_wall(row, col - 1),
            Direction::East => self.vertical_wall(row, col),
        }
    }
}

/// Floor of a half-unit coordinate (`2.5 -> 2`), or `None` if `value` is not
/// within tolerance of a half unit.
fn half_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let floor = value.floor();
    if ((value - floor) - 0.5).abs() < HALF_UNIT_EPSILON {
        Some(floor as usize)
    } else {
        None
    }
}

fn whole_index(value: f64) -> Option<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Some(value as usize)
    } else {
        None
    }
}

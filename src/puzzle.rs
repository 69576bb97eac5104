use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::error::{PuzzleError, PuzzleResult};
use crate::geometry::{Direction, Grid, Position, WallKind};
use crate::path::Path;

/// One robot per uppercase letter.
pub const MAX_ROBOTS: usize = 26;

const EMPTY: u8 = 0;
const ANY_MARKER: char = '?';

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Robot {
    pub id: char,
    pub position: Position,
}

/// Which robot a goal requires.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GoalTarget {
    Robot(char),
    Any,
}

impl GoalTarget {
    /// Parses a goal label as written in puzzle files: an uppercase letter, or
    /// the literal `any`.
    pub fn parse(label: &str) -> PuzzleResult<Self> {
        if label == "any" {
            return Ok(GoalTarget::Any);
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(id), None) if id.is_ascii_uppercase() => Ok(GoalTarget::Robot(id)),
            _ => Err(PuzzleError::InvalidGoalLabel(label.to_string())),
        }
    }

    #[inline(always)]
    pub fn accepts(self, occupant: char) -> bool {
        match self {
            GoalTarget::Any => true,
            GoalTarget::Robot(id) => id == occupant,
        }
    }

    /// Uppercase robot letter, or `?` for the wildcard.
    pub fn marker(self) -> char {
        match self {
            GoalTarget::Any => ANY_MARKER,
            GoalTarget::Robot(id) => id,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Goal {
    pub target: GoalTarget,
    pub position: Position,
}

/// A mutable puzzle instance: walls, robot occupancy and goals.
///
/// Cloning produces a fully independent copy; search workers each own one.
#[derive(Clone, Debug)]
pub struct Puzzle {
    grid: Grid,
    // Robot letter per cell, EMPTY when vacant.
    cells: Vec<u8>,
    robots: ArrayVec<Robot, MAX_ROBOTS>,
    goals: SmallVec<[Goal; 4]>,
}

impl Puzzle {
    pub fn new(rows: usize, cols: usize) -> PuzzleResult<Self> {
        let grid = Grid::new(rows, cols)?;
        Ok(Puzzle {
            cells: vec![EMPTY; rows * cols],
            grid,
            robots: ArrayVec::new(),
            goals: SmallVec::new(),
        })
    }

    #[inline(always)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// # Panics
    ///
    /// Panics if `index` is not a robot index of this puzzle.
    #[inline(always)]
    pub fn robot(&self, index: usize) -> Robot {
        self.robots[index]
    }

    pub fn num_robots(&self) -> usize {
        self.robots.len()
    }

    pub fn robot_index(&self, id: char) -> Option<usize> {
        self.robots.iter().position(|r| r.id == id)
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn num_goals(&self) -> usize {
        self.goals.len()
    }

    pub fn occupant(&self, pos: Position) -> Option<char> {
        if !self.grid.contains(pos) {
            return None;
        }
        match self.cells[self.grid.cell_index(pos)] {
            EMPTY => None,
            id => Some(id as char),
        }
    }

    pub fn goal_at(&self, pos: Position) -> Option<GoalTarget> {
        self.goals.iter().find(|g| g.position == pos).map(|g| g.target)
    }

    fn check_on_board(&self, position: Position) -> PuzzleResult<()> {
        if self.grid.contains(position) {
            Ok(())
        } else {
            Err(PuzzleError::OutOfBounds {
                position,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn place_robot(&mut self, position: Position, id: char) -> PuzzleResult<()> {
        self.check_on_board(position)?;
        if let Some(occupant) = self.occupant(position) {
            return Err(PuzzleError::CellOccupied { position, occupant });
        }
        if !id.is_ascii_uppercase() {
            return Err(PuzzleError::InvalidRobotId(id));
        }
        if self.robot_index(id).is_some() {
            return Err(PuzzleError::DuplicateRobot(id));
        }

        // Identifiers are unique uppercase letters, so this never exceeds MAX_ROBOTS.
        self.robots.push(Robot { id, position });
        let idx = self.grid.cell_index(position);
        self.cells[idx] = id as u8;
        Ok(())
    }

    pub fn add_wall(&mut self, kind: WallKind, row: f64, col: f64) -> PuzzleResult<()> {
        self.grid.add_wall(kind, row, col)
    }

    pub fn add_goal(&mut self, target: GoalTarget, position: Position) -> PuzzleResult<()> {
        self.check_on_board(position)?;
        if let GoalTarget::Robot(id) = target {
            if self.robot_index(id).is_none() {
                return Err(PuzzleError::UnknownRobot(id));
            }
        }
        if self.goal_at(position).is_some() {
            return Err(PuzzleError::DuplicateGoal(position));
        }
        self.goals.push(Goal { target, position });
        Ok(())
    }

    /// Slides robot `robot` in `direction` until a wall, the board edge or
    /// another robot stops it. Returns whether the robot changed cells.
    ///
    /// # Panics
    ///
    /// Panics if `robot` is not a robot index of this puzzle.
    #[inline]
    pub fn slide(&mut self, robot: usize, direction: Direction) -> bool {
        let start = self.robots[robot].position;
        let mut current = start;

        loop {
            if self.grid.blocks(current, direction) {
                break;
            }
            let next = current.step(direction);
            if !self.grid.contains(next) || self.cells[self.grid.cell_index(next)] != EMPTY {
                break;
            }
            current = next;
        }

        if current == start {
            return false;
        }
        self.relocate(robot, current);
        true
    }

    /// Puts `robot` back on `position`, undoing a previous slide. The target
    /// cell must be empty.
    ///
    /// # Panics
    ///
    /// Panics if `robot` is not a robot index of this puzzle.
    #[inline]
    pub fn restore_robot(&mut self, robot: usize, position: Position) {
        debug_assert!(
            self.robots[robot].position == position || self.occupant(position).is_none(),
            "restoring onto occupied cell {position}"
        );
        self.relocate(robot, position);
    }

    #[inline(always)]
    fn relocate(&mut self, robot: usize, to: Position) {
        let Robot { id, position: from } = self.robots[robot];
        let from_idx = self.grid.cell_index(from);
        let to_idx = self.grid.cell_index(to);
        self.cells[from_idx] = EMPTY;
        self.cells[to_idx] = id as u8;
        self.robots[robot].position = to;
    }

    /// True when every goal cell is occupied by a robot it accepts.
    #[inline]
    pub fn goals_satisfied(&self) -> bool {
        self.goals.iter().all(|goal| {
            match self.cells[self.grid.cell_index(goal.position)] {
                EMPTY => false,
                occupant => goal.target.accepts(occupant as char),
            }
        })
    }

    /// Replays `path` move by move. Returns `false` as soon as a move leaves
    /// its robot in place; the puzzle keeps the moves applied so far.
    pub fn apply(&mut self, path: &Path) -> bool {
        path.moves()
            .iter()
            .all(|mv| self.slide(mv.robot as usize, mv.direction))
    }
}

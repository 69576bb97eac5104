//! Ranking of registry contents and the textual solution report.

use std::fmt;

use crate::path::Path;
use crate::puzzle::Puzzle;
use crate::solver::SolveOutcome;

/// The minimal-length group of a solve run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ranking {
    move_count: usize,
    minimal: Vec<Path>,
    total_found: usize,
}

impl Ranking {
    /// The zero-move answer for a puzzle that starts solved.
    pub fn already_solved() -> Self {
        Ranking {
            move_count: 0,
            minimal: vec![Path::new()],
            total_found: 1,
        }
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Number of distinct solutions tied at the minimum length.
    pub fn count(&self) -> usize {
        self.minimal.len()
    }

    pub fn solutions(&self) -> &[Path] {
        &self.minimal
    }

    pub fn first(&self) -> &Path {
        &self.minimal[0]
    }

    /// Every distinct path the search recorded, including longer ones found
    /// before the bound tightened.
    pub fn total_found(&self) -> usize {
        self.total_found
    }
}

/// Sorts `paths` by length (stable, so ties keep their incoming order) and
/// keeps the group tied at the minimum. `None` when `paths` is empty.
pub fn rank(mut paths: Vec<Path>) -> Option<Ranking> {
    paths.sort_by_key(Path::len);

    let move_count = paths.first()?.len();
    let tied = paths.iter().take_while(|p| p.len() == move_count).count();
    let total_found = paths.len();
    paths.truncate(tied);

    Some(Ranking {
        move_count,
        minimal: paths,
        total_found,
    })
}

/// Formats a solve outcome the way the command line prints it.
///
/// With `all_solutions` every tied minimal path is listed under a count line.
/// Otherwise the first minimal path is replayed on a copy of `puzzle`, showing
/// the board after each move.
pub struct Report<'a> {
    puzzle: &'a Puzzle,
    outcome: &'a SolveOutcome,
    all_solutions: bool,
}

impl<'a> Report<'a> {
    pub fn new(puzzle: &'a Puzzle, outcome: &'a SolveOutcome, all_solutions: bool) -> Self {
        Report {
            puzzle,
            outcome,
            all_solutions,
        }
    }

    fn write_moves(&self, f: &mut fmt::Formatter<'_>, path: &Path) -> fmt::Result {
        for mv in path.moves() {
            let id = self.puzzle.robot(mv.robot as usize).id;
            writeln!(f, "robot {} moves {}", id, mv.direction)?;
        }
        writeln!(f, "All goals are satisfied after {} moves", path.len())
    }

    fn write_replay(&self, f: &mut fmt::Formatter<'_>, path: &Path) -> fmt::Result {
        let mut board = self.puzzle.clone();
        for mv in path.moves() {
            board.slide(mv.robot as usize, mv.direction);
            let id = board.robot(mv.robot as usize).id;
            writeln!(f, "robot {} moves {}", id, mv.direction)?;
            write!(f, "{board}")?;
        }
        writeln!(f, "All goals are satisfied after {} moves", path.len())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            SolveOutcome::NoSolutions { cap: Some(cap) } => {
                writeln!(f, "no solutions with {cap} or fewer moves")
            }
            SolveOutcome::NoSolutions { cap: None } => writeln!(f, "no solutions"),
            SolveOutcome::Solved(ranking) if self.all_solutions => {
                writeln!(
                    f,
                    "{} different {} move solutions:",
                    ranking.count(),
                    ranking.move_count()
                )?;
                writeln!(f)?;
                for path in ranking.solutions() {
                    self.write_moves(f, path)?;
                    writeln!(f)?;
                }
                Ok(())
            }
            SolveOutcome::Solved(ranking) => self.write_replay(f, ranking.first()),
        }
    }
}

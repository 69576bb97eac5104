//! Top-level solve: resolves the move cap, fans the search out over workers and
//! ranks whatever they recorded.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::puzzle::Puzzle;
use crate::registry::{SharedBound, SolutionRegistry};
use crate::report::{rank, Ranking};
use crate::search::{Explorer, ExplorerKind, WorkerStats};

/// Cap on the derived move limit when reporting a single solution.
pub const SINGLE_SOLUTION_CEILING: usize = 11;
/// Cap on the derived move limit when enumerating every minimal solution.
pub const ALL_SOLUTIONS_CEILING: usize = 12;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MoveCap {
    /// Caller-supplied limit; also reported back in "no solutions" messages.
    Explicit(usize),
    /// `rows + cols`, clamped to the mode's ceiling.
    #[default]
    Derived,
}

impl MoveCap {
    pub fn resolve(self, rows: usize, cols: usize, all_solutions: bool) -> usize {
        match self {
            MoveCap::Explicit(moves) => moves,
            MoveCap::Derived => {
                let ceiling = if all_solutions {
                    ALL_SOLUTIONS_CEILING
                } else {
                    SINGLE_SOLUTION_CEILING
                };
                (rows + cols).min(ceiling)
            }
        }
    }

    pub fn explicit(self) -> Option<usize> {
        match self {
            MoveCap::Explicit(moves) => Some(moves),
            MoveCap::Derived => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SolveConfig {
    pub max_moves: MoveCap,
    pub all_solutions: bool,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolveOutcome {
    Solved(Ranking),
    /// Nothing found within the cap. `cap` is set only when it was explicit.
    NoSolutions { cap: Option<usize> },
}

impl SolveOutcome {
    pub fn ranking(&self) -> Option<&Ranking> {
        match self {
            SolveOutcome::Solved(ranking) => Some(ranking),
            SolveOutcome::NoSolutions { .. } => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SolveStats {
    /// Move limit the search actually ran with.
    pub cap: usize,
    pub workers: usize,
    pub nodes: u64,
    pub recorded: u64,
}

pub fn solve(puzzle: &Puzzle, config: &SolveConfig) -> SolveOutcome {
    solve_with_stats(puzzle, config).0
}

/// Like [`solve`], also returning search counters.
pub fn solve_with_stats(puzzle: &Puzzle, config: &SolveConfig) -> (SolveOutcome, SolveStats) {
    let cap = config
        .max_moves
        .resolve(puzzle.rows(), puzzle.cols(), config.all_solutions);
    let mut stats = SolveStats {
        cap,
        ..SolveStats::default()
    };
    let no_solutions = SolveOutcome::NoSolutions {
        cap: config.max_moves.explicit(),
    };

    if puzzle.num_robots() == 0 || puzzle.num_goals() == 0 {
        info!(
            robots = puzzle.num_robots(),
            goals = puzzle.num_goals(),
            "nothing to solve"
        );
        return (no_solutions, stats);
    }
    if puzzle.goals_satisfied() {
        info!("goals already satisfied before any move");
        return (SolveOutcome::Solved(Ranking::already_solved()), stats);
    }
    if cap == 0 {
        return (no_solutions, stats);
    }

    let started = Instant::now();
    let registry = SolutionRegistry::new();
    let bound = SharedBound::new(cap);

    let workers: Vec<(usize, ExplorerKind)> = (0..puzzle.num_robots())
        .flat_map(|anchor| {
            [
                (anchor, ExplorerKind::AnchorOnly),
                (anchor, ExplorerKind::AnyRobot),
            ]
        })
        .collect();
    stats.workers = workers.len();
    info!(cap, workers = stats.workers, "starting search");

    let totals = workers
        .into_par_iter()
        .map(|(anchor, kind)| {
            let explorer = Explorer::new(puzzle.clone(), anchor, &registry, &bound);
            let worker = explorer.run(kind);
            debug!(
                anchor,
                ?kind,
                nodes = worker.nodes,
                recorded = worker.recorded,
                "worker finished"
            );
            worker
        })
        .reduce(WorkerStats::default, WorkerStats::merge);

    stats.nodes = totals.nodes;
    stats.recorded = totals.recorded;

    let outcome = match rank(registry.into_paths()) {
        Some(ranking) => {
            info!(
                moves = ranking.move_count(),
                tied = ranking.count(),
                found = ranking.total_found(),
                nodes = stats.nodes,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "search finished"
            );
            SolveOutcome::Solved(ranking)
        }
        None => {
            info!(
                nodes = stats.nodes,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "search exhausted without a solution"
            );
            no_solutions
        }
    };

    (outcome, stats)
}

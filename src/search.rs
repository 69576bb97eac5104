//! Depth-bounded exhaustive search over slide sequences.
//!
//! Two explorers cooperate around an *anchor* robot. The anchor-only explorer
//! slides nothing but the anchor and is the only place goals are checked. The
//! any-robot explorer slides every robot to build setups, handing over to the
//! anchor-only explorer after each setup move by another robot.
//!
//! `depth` is always the length the path will have once the move made at that
//! level is pushed, so a path recorded at `depth` has exactly `depth` moves.

use tracing::{debug, trace};

use crate::geometry::Direction;
use crate::path::{Move, Path};
use crate::puzzle::Puzzle;
use crate::registry::{SharedBound, SolutionRegistry};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ExplorerKind {
    AnchorOnly,
    AnyRobot,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct WorkerStats {
    /// Slides that moved a robot and were pushed on the path.
    pub nodes: u64,
    /// Paths this worker inserted into the registry (duplicates excluded).
    pub recorded: u64,
}

impl WorkerStats {
    pub fn merge(self, other: WorkerStats) -> WorkerStats {
        WorkerStats {
            nodes: self.nodes + other.nodes,
            recorded: self.recorded + other.recorded,
        }
    }
}

/// One search worker. Owns its puzzle copy and restores it after every trial
/// slide; only the registry and bound are shared.
pub struct Explorer<'a> {
    puzzle: Puzzle,
    anchor: usize,
    path: Path,
    registry: &'a SolutionRegistry,
    bound: &'a SharedBound,
    stats: WorkerStats,
}

impl<'a> Explorer<'a> {
    /// # Panics
    ///
    /// Panics if `anchor` is not a robot index of `puzzle`.
    pub fn new(
        puzzle: Puzzle,
        anchor: usize,
        registry: &'a SolutionRegistry,
        bound: &'a SharedBound,
    ) -> Self {
        assert!(
            anchor < puzzle.num_robots(),
            "anchor {anchor} out of range for {} robots",
            puzzle.num_robots()
        );
        Explorer {
            puzzle,
            anchor,
            path: Path::new(),
            registry,
            bound,
            stats: WorkerStats::default(),
        }
    }

    pub fn run(mut self, kind: ExplorerKind) -> WorkerStats {
        match kind {
            ExplorerKind::AnchorOnly => self.anchor_only(1),
            ExplorerKind::AnyRobot => self.any_robot(1),
        }
        debug_assert!(self.path.is_empty());
        self.stats
    }

    fn anchor_only(&mut self, depth: usize) {
        if depth > self.bound.get() {
            return;
        }

        let anchor = self.anchor;
        let origin = self.puzzle.robot(anchor).position;

        for direction in Direction::SEARCH_ORDER {
            if self.path.is_reversal(anchor, direction) || !self.puzzle.slide(anchor, direction) {
                continue;
            }
            self.stats.nodes += 1;
            self.path.push(Move::new(anchor, direction));

            if self.puzzle.goals_satisfied() {
                self.record(depth);
            } else {
                self.anchor_only(depth + 1);
            }

            self.path.pop();
            self.puzzle.restore_robot(anchor, origin);
        }
    }

    fn any_robot(&mut self, depth: usize) {
        // Leave room for at least one anchor move after this one.
        if depth >= self.bound.get() {
            return;
        }

        for robot in 0..self.puzzle.num_robots() {
            let origin = self.puzzle.robot(robot).position;

            for direction in Direction::SEARCH_ORDER {
                if self.path.is_reversal(robot, direction) || !self.puzzle.slide(robot, direction) {
                    continue;
                }
                self.stats.nodes += 1;
                self.path.push(Move::new(robot, direction));

                if robot != self.anchor {
                    self.anchor_only(depth + 1);
                }
                self.any_robot(depth + 1);

                self.path.pop();
                self.puzzle.restore_robot(robot, origin);
            }
        }
    }

    fn record(&mut self, depth: usize) {
        debug_assert_eq!(depth, self.path.len());

        if self.registry.record(&self.path) {
            self.stats.recorded += 1;
            trace!(anchor = self.anchor, key = %self.path.key(), "recorded solution");
        }
        if self.bound.shrink_to(depth) {
            debug!(anchor = self.anchor, moves = depth, "move bound lowered");
        }
    }
}

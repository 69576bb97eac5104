#![allow(dead_code)]

use ricochet_solver::{parse_puzzle, Direction, Puzzle};

pub fn puzzle(text: &str) -> Puzzle {
    parse_puzzle(text).unwrap()
}

/// Robot A must reach the wall-bounded cell east of it.
pub const ONE_MOVE: &str = "
3 3
robot A 2 2
goal A 2 3
";

/// Wildcard goal at (2,2) that A (sliding east) and B (sliding south) can
/// each reach in one move.
pub const WILDCARD_TIE: &str = "
3 3
robot A 2 1
robot B 1 2
vertical_wall 2 2.5
horizontal_wall 2.5 2
goal any 2 2
";

/// A needs two moves; east-then-south and south-then-east tie.
pub const CORNER: &str = "
3 3
robot A 1 1
goal A 3 3
";

/// B must first park at (1,4) so A stops on (1,3).
pub const BLOCKER: &str = "
3 4
robot A 1 1
robot B 3 4
goal A 1 3
";

pub const ALREADY_SOLVED: &str = "
2 2
robot A 1 1
goal A 1 1
";

/// Five by five with interior walls, three robots and two goals.
pub const WALLED: &str = "
5 5
robot A 1 1
robot B 5 5
robot C 3 3
vertical_wall 2 2.5
vertical_wall 4 3.5
horizontal_wall 1.5 4
horizontal_wall 3.5 2
goal A 4 2
goal any 2 5
";

/// Shortest length and number of distinct move sequences of that length,
/// found by trying every sequence of sliding moves up to `limit`.
pub fn brute_force(puzzle: &Puzzle, limit: usize) -> Option<(usize, usize)> {
    if puzzle.goals_satisfied() {
        return Some((0, 1));
    }
    (1..=limit).find_map(|depth| {
        let mut board = puzzle.clone();
        let count = count_solutions(&mut board, depth);
        (count > 0).then_some((depth, count))
    })
}

fn count_solutions(board: &mut Puzzle, remaining: usize) -> usize {
    if remaining == 0 {
        return usize::from(board.goals_satisfied());
    }
    let mut total = 0;
    for robot in 0..board.num_robots() {
        let origin = board.robot(robot).position;
        for direction in Direction::SEARCH_ORDER {
            if board.slide(robot, direction) {
                total += count_solutions(board, remaining - 1);
                board.restore_robot(robot, origin);
            }
        }
    }
    total
}

mod common;

use ricochet_solver::{solve, MoveCap, Report, SolveConfig, SolveOutcome};

use common::*;

#[test]
fn all_solutions_lists_every_tie() {
    let board = puzzle(WILDCARD_TIE);
    let config = SolveConfig {
        max_moves: MoveCap::Derived,
        all_solutions: true,
    };
    let outcome = solve(&board, &config);

    let expected = "\
2 different 1 move solutions:

robot A moves east
All goals are satisfied after 1 moves

robot B moves south
All goals are satisfied after 1 moves

";
    assert_eq!(Report::new(&board, &outcome, true).to_string(), expected);
}

#[test]
fn single_solution_replays_the_board() {
    let board = puzzle(ONE_MOVE);
    let outcome = solve(&board, &SolveConfig::default());
    let text = Report::new(&board, &outcome, false).to_string();

    let mut after = board.clone();
    after.slide(0, ricochet_solver::Direction::East);
    let expected = format!("robot A moves east\n{after}All goals are satisfied after 1 moves\n");
    assert_eq!(text, expected);
}

#[test]
fn zero_move_report() {
    let board = puzzle(ALREADY_SOLVED);
    let outcome = solve(&board, &SolveConfig::default());
    assert_eq!(
        Report::new(&board, &outcome, false).to_string(),
        "All goals are satisfied after 0 moves\n"
    );
    assert_eq!(
        Report::new(&board, &outcome, true).to_string(),
        "1 different 0 move solutions:\n\nAll goals are satisfied after 0 moves\n\n"
    );
}

#[test]
fn no_solution_messages() {
    let board = puzzle(CORNER);
    let explicit = SolveOutcome::NoSolutions { cap: Some(1) };
    let derived = SolveOutcome::NoSolutions { cap: None };
    assert_eq!(
        Report::new(&board, &explicit, true).to_string(),
        "no solutions with 1 or fewer moves\n"
    );
    assert_eq!(Report::new(&board, &derived, false).to_string(), "no solutions\n");
}

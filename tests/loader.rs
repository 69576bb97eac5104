use std::io::Write;

use ricochet_solver::{
    load_puzzle, parse_puzzle, GoalTarget, LoadError, Position, PuzzleError,
};

#[test]
fn parses_every_token_kind() {
    let puzzle = parse_puzzle(
        "4 5
         robot A 1 1
         robot Z 4 5
         vertical_wall 2 3.5
         horizontal_wall 1.5 2
         goal Z 2 2
         goal any 3 3",
    )
    .unwrap();

    assert_eq!((puzzle.rows(), puzzle.cols()), (4, 5));
    assert_eq!(puzzle.robots().len(), 2);
    assert_eq!(puzzle.robot(1).id, 'Z');
    assert_eq!(puzzle.robot(1).position, Position::new(4, 5));
    assert!(puzzle.grid().vertical_wall(2, 3));
    assert!(puzzle.grid().horizontal_wall(1, 2));
    assert_eq!(puzzle.goal_at(Position::new(2, 2)), Some(GoalTarget::Robot('Z')));
    assert_eq!(puzzle.goal_at(Position::new(3, 3)), Some(GoalTarget::Any));
}

#[test]
fn unknown_token_is_fatal() {
    let err = parse_puzzle("2 2 robot A 1 1 teleporter 1 2").unwrap_err();
    assert!(matches!(err, LoadError::UnknownToken(ref t) if t == "teleporter"));
}

#[test]
fn truncated_and_malformed_numbers() {
    assert!(matches!(
        parse_puzzle("3").unwrap_err(),
        LoadError::UnexpectedEof { .. }
    ));
    assert!(matches!(
        parse_puzzle("3 3 robot A 1").unwrap_err(),
        LoadError::UnexpectedEof { .. }
    ));
    assert!(matches!(
        parse_puzzle("3 x").unwrap_err(),
        LoadError::InvalidNumber { .. }
    ));
    assert!(matches!(
        parse_puzzle("0 3").unwrap_err(),
        LoadError::Puzzle(PuzzleError::InvalidDimensions { rows: 0, cols: 3 })
    ));
}

#[test]
fn robot_constraints() {
    assert!(matches!(
        parse_puzzle("3 3 robot a 1 1").unwrap_err(),
        LoadError::Puzzle(PuzzleError::InvalidRobotId('a'))
    ));
    assert!(matches!(
        parse_puzzle("3 3 robot A 1 1 robot A 2 2").unwrap_err(),
        LoadError::Puzzle(PuzzleError::DuplicateRobot('A'))
    ));
    assert!(matches!(
        parse_puzzle("3 3 robot A 1 1 robot B 1 1").unwrap_err(),
        LoadError::Puzzle(PuzzleError::CellOccupied { occupant: 'A', .. })
    ));
    assert!(matches!(
        parse_puzzle("3 3 robot A 4 1").unwrap_err(),
        LoadError::Puzzle(PuzzleError::OutOfBounds { .. })
    ));
}

#[test]
fn wall_constraints() {
    assert!(matches!(
        parse_puzzle("3 3 vertical_wall 1 2").unwrap_err(),
        LoadError::Puzzle(PuzzleError::MalformedWall { .. })
    ));
    assert!(matches!(
        parse_puzzle("3 3 horizontal_wall 4.5 1").unwrap_err(),
        LoadError::Puzzle(PuzzleError::MalformedWall { .. })
    ));
    assert!(matches!(
        parse_puzzle("3 3 vertical_wall 1 1.5 vertical_wall 1 1.5").unwrap_err(),
        LoadError::Puzzle(PuzzleError::DuplicateWall { .. })
    ));
    assert!(matches!(
        parse_puzzle("3 3 horizontal_wall 3.5 2").unwrap_err(),
        LoadError::Puzzle(PuzzleError::DuplicateWall { .. })
    ));
}

#[test]
fn goal_constraints() {
    assert!(matches!(
        parse_puzzle("3 3 robot A 1 1 goal B 2 2").unwrap_err(),
        LoadError::Puzzle(PuzzleError::UnknownRobot('B'))
    ));
    assert!(matches!(
        parse_puzzle("3 3 robot A 1 1 goal A 2 2 goal any 2 2").unwrap_err(),
        LoadError::Puzzle(PuzzleError::DuplicateGoal(_))
    ));
    assert!(matches!(
        parse_puzzle("3 3 robot A 1 1 goal anything 2 2").unwrap_err(),
        LoadError::Puzzle(PuzzleError::InvalidGoalLabel(_))
    ));
}

#[test]
fn loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2 2\nrobot A 1 1\ngoal A 2 2").unwrap();

    let puzzle = load_puzzle(file.path()).unwrap();
    assert_eq!(puzzle.num_robots(), 1);
    assert_eq!(puzzle.num_goals(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_puzzle(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

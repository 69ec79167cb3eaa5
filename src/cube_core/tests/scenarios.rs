use cube_core::{CubeSession, Face, InvalidMoveError, SessionConfig, SolveOutcome, Step};

fn session() -> CubeSession {
    CubeSession::new(SessionConfig::default())
}

#[test]
fn front_turn_then_solve() {
    let _ = pretty_env_logger::try_init();

    let mut session = session();
    let initial = session.facelet_string();
    assert_eq!(
        initial,
        "wwwwwwwwwrrrrrrrrrgggggggggyyyyyyyyyooooooooobbbbbbbbb"
    );

    session.turn(Face::F);
    assert_ne!(session.facelet_string(), initial);

    session.solve();
    assert_eq!(session.facelet_string(), initial);
    assert!(session.history().is_empty());
}

#[test_log::test]
fn solve_replays_in_reverse() {
    let mut session = session();
    let initial = session.facelet_string();

    session.turn(Face::R);
    session.turn(Face::U);
    session.turn(Face::F);
    assert_eq!(session.solve(), SolveOutcome::Solved { undone: 3 });

    assert_eq!(session.facelet_string(), initial);
    assert_eq!(
        session.steps().lines(),
        [
            "Rotate R",
            "Rotate U",
            "Rotate F",
            "Solving Cube...",
            "Undo F",
            "Undo U",
            "Undo R",
            "Cube Solved!",
        ]
    );
}

#[test_log::test]
fn no_op_solve() {
    let mut session = session();
    let initial = session.state().clone();

    assert_eq!(session.solve(), SolveOutcome::NothingToSolve);
    assert_eq!(*session.state(), initial);
    assert_eq!(session.steps().as_slice(), [Step::NothingToSolve]);

    // A second solve after a real one has nothing left either.
    session.turn(Face::D);
    session.solve();
    assert_eq!(session.solve(), SolveOutcome::NothingToSolve);
    assert_eq!(session.steps().last(), Some(Step::NothingToSolve));
}

#[test_log::test]
fn invalid_move_changes_nothing() {
    let mut session = session();
    session.turn_sequence("R U").unwrap();

    let state = session.state().clone();
    let history = session.history().clone();
    let steps = session.steps().clone();

    for identifier in ["X", "u", "", "RU", " F"] {
        assert_eq!(
            session.turn_named(identifier),
            Err(InvalidMoveError::new(identifier))
        );
        assert_eq!(*session.state(), state);
        assert_eq!(*session.history(), history);
        assert_eq!(*session.steps(), steps);
    }

    assert_eq!(
        session.turn_sequence("F R X"),
        Err(InvalidMoveError::new("X"))
    );
    assert_eq!(*session.state(), state);
    assert_eq!(*session.history(), history);
    assert_eq!(*session.steps(), steps);
}

#[test_log::test]
fn solve_only_undoes_moves_since_the_last_solve() {
    let mut session = session();
    session.turn_sequence("LLB").unwrap();
    session.solve();

    session.turn_sequence("DR").unwrap();
    assert_eq!(session.history().as_slice(), [Face::D, Face::R]);
    assert_eq!(session.solve(), SolveOutcome::Solved { undone: 2 });
    assert!(session.state().is_solved());
}

#[test]
fn error_message_names_the_identifier() {
    let err = session().turn_named("X").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Invalid move: "X" is not one of U, D, F, B, L, R"#
    );
}

#[test_log::test]
fn turn_named_reports_the_face_turned() {
    let mut session = session();
    assert_eq!(session.turn_named("R"), Ok(Face::R));
    assert_eq!(session.turn_named("F"), Ok(Face::F));
    assert_eq!(session.history().as_slice(), [Face::R, Face::F]);
    assert_eq!(session.steps().lines(), ["Rotate R", "Rotate F"]);
}

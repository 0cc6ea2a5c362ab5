use std::io::Cursor;

use crate::constants::*;
use crate::game::Position;
use crate::prompt::{run_session, SessionOptions};
use crate::solver::{KnightTour, Method};

fn run(input: &str) -> (crate::solver::SearchReport, String) {
    let mut output = Vec::new();
    let report = run_session(Cursor::new(input), &mut output, &SessionOptions::default())
        .expect("session should run");
    return (report, String::from_utf8(output).unwrap());
}

#[test]
fn test_5x5_depth_first_tour() {
    let (report, output) = run("5\n2\n10\n");
    assert!(output.contains(SOLUTION_FOUND));
    assert_eq!(true, report.solved);

    let path = report.board.path();
    assert_eq!(25, path.len());
    assert_eq!(Position::new(0, 0), path[0]);
    for (step, pair) in path.windows(2).enumerate() {
        assert!(pair[0].is_knight_move(pair[1]), "step {} to {} is not a knight move", step, step + 1);
    }
    let mut steps: Vec<i32> = report.board.rows().flatten().copied().collect();
    steps.sort_unstable();
    assert_eq!((0..25).collect::<Vec<i32>>(), steps);
}

#[test]
fn test_3x3_has_no_tour() {
    for method in Method::ALL {
        let (report, output) = run(&format!("3 {} 1", method.selector()));
        assert!(output.contains(NO_SOLUTION), "{}", method);
        assert_eq!(false, report.solved);
        match method {
            // claimed squares stay claimed
            Method::BreadthFirst => assert!(report.board.visited() > 1),
            _ => assert_eq!(1, report.board.visited(), "{} should unwind", method),
        }
    }
}

#[test]
fn test_invalid_method() {
    let (report, output) = run("6 5 10");
    assert!(output.contains(NO_SOLUTION));
    assert!(output.ends_with("Nodes expanded: 0\n"));
    assert_eq!(1, report.board.visited());
    assert_eq!(Some(0), report.board.get(DEFAULT_START));
}

#[test]
fn test_plain_depth_first_up_to_5() {
    for size in 1..=5 {
        let mut tour = KnightTour::new(size, 10).unwrap();
        let solved = tour.run(Method::DepthFirst, DEFAULT_START).unwrap();
        assert_eq!(size == 1 || size == 5, solved, "{}x{}", size, size);
        assert_eq!(solved, tour.board().is_complete_tour());
    }
}

#[test]
fn test_fresh_sessions_agree() {
    for method in Method::ALL {
        let mut first = KnightTour::new(5, 10).unwrap();
        let mut second = KnightTour::new(5, 10).unwrap();
        assert_eq!(
            first.run(method, DEFAULT_START).unwrap(),
            second.run(method, DEFAULT_START).unwrap()
        );
        assert_eq!(first.board(), second.board());
        assert_eq!(first.nodes_expanded(), second.nodes_expanded(), "{}", method);
    }
}

use std::io::Cursor;

use super::*;

fn session(input: &str, options: &SessionOptions) -> (Result<SearchReport, KnightError>, String) {
    let mut output = Vec::new();
    let result = run_session(Cursor::new(input), &mut output, options);
    return (result, String::from_utf8(output).expect("output should be utf-8"));
}

fn prompts() -> String {
    [SIZE_PROMPT, METHOD_PROMPT, TIME_PROMPT].concat()
}

#[test]
fn test_tokens_span_lines() {
    let mut reader = TokenReader::new(Cursor::new("  5 2\n\n   10  \n"));
    assert_eq!(5, reader.next_value::<usize>("board size").unwrap());
    assert_eq!(2, reader.next_value::<i64>("search method").unwrap());
    assert_eq!(10, reader.next_value::<i64>("time limit").unwrap());
    assert_eq!(None, reader.next_token().unwrap());
}

#[test]
fn test_breadth_first_session_output() {
    let (result, output) = session("3\n1\n1\n", &SessionOptions::default());
    let report = result.unwrap();
    assert_eq!(false, report.solved);
    assert_eq!(
        prompts() + "No solution exists or Timeout.\n 0  3  2 \n 3 -1  1 \n 2  1  4 \nNodes expanded: 8\n",
        output
    );
}

#[test]
fn test_depth_first_session_output() {
    let (result, output) = session("5 2 10", &SessionOptions::default());
    let report = result.unwrap();
    assert_eq!(true, report.solved);
    assert_eq!(true, report.board.is_complete_tour());
    let expected = format!(
        "{}A solution found.\n{}Nodes expanded: {}\n",
        prompts(),
        report.board,
        report.nodes_expanded
    );
    assert_eq!(expected, output);
}

#[test]
fn test_unknown_method_session_output() {
    let (result, output) = session("5\n5\n10\n", &SessionOptions::default());
    let report = result.unwrap();
    assert_eq!(None, report.method);
    assert_eq!(0, report.nodes_expanded);
    let mut board = String::from(" 0 -1 -1 -1 -1 \n");
    for _ in 1..5 {
        board.push_str("-1 -1 -1 -1 -1 \n");
    }
    assert_eq!(
        format!("{}No solution exists or Timeout.\n{}Nodes expanded: 0\n", prompts(), board),
        output
    );
}

#[test]
fn test_malformed_input_is_fatal() {
    let (result, output) = session("five\n2\n10\n", &SessionOptions::default());
    match result {
        Err(KnightError::Parse { field, token, .. }) => {
            assert_eq!("board size", field);
            assert_eq!("five", token);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
    assert_eq!(SIZE_PROMPT, output);

    let (result, _) = session("5\n2\n1.5\n", &SessionOptions::default());
    assert!(matches!(result, Err(KnightError::Parse { field: "time limit", .. })));
}

#[test]
fn test_missing_input_is_fatal() {
    let (result, _) = session("5\n2\n", &SessionOptions::default());
    assert!(matches!(result, Err(KnightError::UnexpectedEof { field: "time limit" })));
}

#[test]
fn test_zero_size_is_fatal() {
    let (result, output) = session("0\n2\n10\n", &SessionOptions::default());
    assert!(matches!(result, Err(KnightError::InvalidBoardSize(0))));
    assert_eq!(prompts(), output);
}

#[test]
fn test_huge_size_is_fatal() {
    let (result, output) = session("8589934592 2 1", &SessionOptions::default());
    assert!(matches!(result, Err(KnightError::InvalidBoardSize(8589934592))));
    assert_eq!(prompts(), output);
}

#[test]
fn test_given_values_skip_prompts() {
    let options = SessionOptions {
        size: Some(3),
        method: Some(1),
        time_limit: Some(1),
        ..SessionOptions::default()
    };
    let (result, output) = session("", &options);
    assert_eq!(8, result.unwrap().nodes_expanded);
    assert_eq!(true, output.starts_with(NO_SOLUTION));
}

#[test]
fn test_partial_options_prompt_for_the_rest() {
    let options = SessionOptions {
        size: Some(3),
        ..SessionOptions::default()
    };
    let (result, output) = session("1 1", &options);
    assert_eq!(false, result.unwrap().solved);
    assert_eq!(true, output.starts_with(&[METHOD_PROMPT, TIME_PROMPT].concat()));
}

#[test]
fn test_json_report_follows_the_board() {
    let options = SessionOptions {
        json: true,
        ..SessionOptions::default()
    };
    let (result, output) = session("3 1 1", &options);
    let report = result.unwrap();
    let (_, json) = output
        .split_once("Nodes expanded: 8\n")
        .expect("the plain output should come first");
    let parsed: SearchReport = serde_json::from_str(json).expect("report should parse");
    assert_eq!(report, parsed);
    assert_eq!(Some(crate::solver::Method::BreadthFirst), parsed.method);
}

#[test]
fn test_start_square_option() {
    let options = SessionOptions {
        start: Position::new(2, 2),
        ..SessionOptions::default()
    };
    let (result, _) = session("5 3 10", &options);
    let report = result.unwrap();
    assert_eq!(true, report.solved);
    assert_eq!(Some(0), report.board.get(Position::new(2, 2)));
    assert_eq!(true, report.board.is_complete_tour());
}

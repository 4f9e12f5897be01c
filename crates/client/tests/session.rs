use std::io::Cursor;

use arena_client::Session;
use arena_runtime::{ProtocolError, RuntimeError, TraceWriter};

const HEADER: &str = "0 0\n3\n";

/// Three heroes at home, nothing else in sight.
const QUIET_TURN: &str = "3 0\n3 0\n3\n\
    1 1 1131 1131 0 0 -1 -1 -1 -1 -1\n\
    2 1 1414 849 0 0 -1 -1 -1 -1 -1\n\
    3 1 849 1414 0 0 -1 -1 -1 -1 -1\n";

#[test]
fn answers_one_line_per_hero_each_turn() {
    let input = format!("{HEADER}{QUIET_TURN}{QUIET_TURN}");
    let mut output = Vec::new();

    let turns = Session::new(Cursor::new(input), &mut output)
        .play()
        .expect("session");
    assert_eq!(turns, 2);

    let text = String::from_utf8(output).expect("utf8");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "MOVE 2200 2200 REX Accio");
    assert_eq!(lines[1], "MOVE 14262 7281 TEX Accio");
    assert_eq!(lines[2], "MOVE 2203 5320 TAU Accio");
    assert_eq!(lines[0..3], lines[3..6]);
}

#[test]
fn emergency_push_reaches_the_output() {
    let turn = "3 50\n3 0\n2\n\
        1 1 1500 500 0 0 -1 -1 -1 -1 -1\n\
        20 0 700 0 0 0 10 0 0 0 1\n";
    let input = format!("0 0\n1\n{turn}");
    let mut output = Vec::new();

    Session::new(Cursor::new(input), &mut output)
        .play()
        .expect("session");

    let text = String::from_utf8(output).expect("utf8");
    assert_eq!(text, "SPELL WIND 17630 9000 REX Leviossa\n");
}

#[test]
fn truncated_turn_ends_the_session_with_an_error() {
    let input = format!("{HEADER}3 0\n3 0\n3\n1 1 1131 1131 0 0 -1 -1 -1 -1 -1\n");
    let err = Session::new(Cursor::new(input), Vec::new())
        .play()
        .expect_err("missing heroes");
    assert!(matches!(
        err,
        RuntimeError::Protocol(ProtocolError::UnexpectedEof { .. })
    ));
}

#[test]
fn unknown_entity_type_is_rejected() {
    let input = format!("{HEADER}3 0\n3 0\n1\n9 5 0 0 0 0 0 0 0 0 0\n");
    let err = Session::new(Cursor::new(input), Vec::new())
        .play()
        .expect_err("bad entity type");
    assert!(matches!(err, RuntimeError::Snapshot(_)));
}

#[test]
fn trace_file_gets_one_line_per_turn() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("trace.jsonl");
    let input = format!("{HEADER}{QUIET_TURN}{QUIET_TURN}{QUIET_TURN}");

    let turns = Session::new(Cursor::new(input), Vec::new())
        .with_trace(TraceWriter::create(&path).expect("trace file"))
        .play()
        .expect("session");
    assert_eq!(turns, 3);

    let text = std::fs::read_to_string(&path).expect("read trace");
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|line| line.contains("\"return_to_guard\"")));
}

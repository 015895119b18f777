//! Integration tests for the interactive menu loop

use std::io::Cursor;

use tetris_stack::core::StackGame;
use tetris_stack::term::ConsoleRenderer;
use tetris_stack::{Flow, Session};

/// Run a full session over `input` and return the plain-text transcript.
fn transcript(seed: u32, input: &str) -> (String, StackGame) {
    let mut game = StackGame::new(seed);
    let out = {
        let mut session = Session::new(
            &mut game,
            Cursor::new(input.to_string()),
            ConsoleRenderer::new(Vec::new(), false),
        );
        session.run().unwrap();
        session.into_renderer().into_inner()
    };
    (String::from_utf8(out).unwrap(), game)
}

fn queue_lines(out: &str) -> Vec<&str> {
    out.lines().filter(|l| l.starts_with("Piece queue")).collect()
}

#[test]
fn test_startup_fills_and_shows_queue() {
    let (out, game) = transcript(1, "0\n");

    assert!(out.starts_with("\n--- Initializing upcoming piece queue ---\n"));
    assert_eq!(out.matches("inserted at the back of the queue.").count(), 5);
    assert!(out.contains("Queue initialized with 5 pieces."));
    assert!(out.contains("Capacity: 5 | Front: 0 | Back: 4"));
    assert!(out.contains("Choose an option: "));
    assert!(out.trim_end().ends_with("Leaving the Tetris Stack simulator..."));
    assert!(game.queue().is_full());
}

#[test]
fn test_insert_into_full_queue_is_rejected() {
    let (out, game) = transcript(1, "2\n0\n");

    assert!(out.contains("ERROR: The piece queue is full. Cannot insert more."));
    let ids: Vec<u64> = game.queue().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    // The rejected piece still used id 6.
    assert_eq!(game.generator().peek_next_id(), 7);
}

#[test]
fn test_play_then_insert_rotates_queue() {
    let (out, game) = transcript(42, "1\n2\n0\n");

    assert!(out.contains("(ID 1) played (removed from the front)."));
    assert!(out.contains("(ID 6) inserted at the back of the queue."));
    assert!(out.contains("Capacity: 5 | Front: 1 | Back: 0"));

    let last = *queue_lines(&out).last().unwrap();
    let order: Vec<&str> = last.matches("ID ").collect();
    assert_eq!(order.len(), 5);
    for (needle, next) in [("ID 2 ]", "ID 3 ]"), ("ID 5 ]", "ID 6 ]")] {
        assert!(last.find(needle).unwrap() < last.find(next).unwrap());
    }

    let ids: Vec<u64> = game.queue().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 4, 5, 6]);
}

#[test]
fn test_drain_then_play_on_empty() {
    let (out, game) = transcript(7, "1\n1\n1\n1\n1\n1\n0\n");

    assert_eq!(out.matches("played (removed from the front).").count(), 5);
    assert!(out.contains("Piece queue is empty."));
    assert!(out.contains("ERROR: The piece queue is empty! No pieces to play."));
    assert!(game.queue().is_empty());
}

#[test]
fn test_invalid_input_reprompts() {
    let (out, game) = transcript(3, "abc\n9\n\n-1\n0\n");

    // The blank line is skipped without a new prompt.
    assert_eq!(out.matches("Invalid option! Try again.").count(), 3);
    assert_eq!(out.matches("--- Actions ---").count(), 4);
    assert!(game.queue().is_full());
}

#[test]
fn test_non_utf8_input_reprompts() {
    let mut game = StackGame::new(3);
    let out = {
        let mut session = Session::new(
            &mut game,
            Cursor::new(vec![0xff, 0xfe, b'\n', b'0', b'\n']),
            ConsoleRenderer::new(Vec::new(), false),
        );
        session.run().unwrap();
        session.into_renderer().into_inner()
    };
    let out = String::from_utf8(out).unwrap();

    assert_eq!(out.matches("Invalid option! Try again.").count(), 1);
    let invalid_at = out.find("Invalid option!").unwrap();
    let farewell_at = out.find("Leaving the Tetris Stack simulator...").unwrap();
    assert!(invalid_at < farewell_at);
    assert!(game.queue().is_full());
}

#[test]
fn test_trailing_text_after_option_is_read_next() {
    let (out, game) = transcript(5, "1abc\n1 2\n0\n");

    // "1abc": play, then "abc" is invalid. "1 2": play, then insert.
    assert_eq!(out.matches("played (removed from the front).").count(), 2);
    assert_eq!(out.matches("Invalid option! Try again.").count(), 1);
    assert!(out.contains("(ID 6) inserted at the back of the queue."));

    let ids: Vec<u64> = game.queue().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 4, 5, 6]);
}

#[test]
fn test_eof_exits_cleanly() {
    let (out, _) = transcript(3, "1\n");
    assert!(out.trim_end().ends_with("Leaving the Tetris Stack simulator..."));
}

#[test]
fn test_step_reports_flow() {
    let mut game = StackGame::new(11);
    let mut session = Session::new(
        &mut game,
        Cursor::new("2\nxx\n0\n"),
        ConsoleRenderer::new(Vec::new(), false),
    );
    session.initialize().unwrap();
    assert_eq!(session.step().unwrap(), Flow::Continue);
    assert_eq!(session.step().unwrap(), Flow::Continue);
    assert_eq!(session.step().unwrap(), Flow::Exit);
}

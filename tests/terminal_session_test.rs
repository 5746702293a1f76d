//! Tests for the terminal session driving the engine.

use std::io::Cursor;
use tictac::{AppConfig, Session};
use tictac_core::{Cell, Marker, Phase, Seat};

fn run(input: &str) -> Session<Cursor<String>, Vec<u8>> {
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), AppConfig::default());
    session.run().expect("session should not fail on in-memory I/O");
    session
}

fn run_to_text(input: &str) -> String {
    String::from_utf8(run(input).into_output()).expect("output is UTF-8")
}

#[test]
fn test_top_row_win_is_announced_and_highlighted() {
    let text = run_to_text("A\nB\n1\n4\n2\n5\n3\n");

    assert!(text.contains("Player 1 name [Player 1]: "));
    assert!(text.contains("Turn: X (A)"));
    assert!(text.contains("Turn: O (B)"));
    assert!(text.contains("[X]|[X]|[X]"));
    assert!(text.contains("A (X) wins!"));
}

#[test]
fn test_tie_is_announced() {
    let text = run_to_text("A\nB\n1\n2\n3\n5\n4\n6\n8\n7\n9\n");
    assert!(text.contains("It's a draw!"));
    assert!(!text.contains("wins!"));
}

#[test]
fn test_blank_names_use_defaults() {
    let session = run("\n   \n");
    let engine = session.engine().expect("game started");
    assert_eq!(engine.player(Seat::First).name(), "Player 1");
    assert_eq!(engine.player(Seat::Second).name(), "Player 2");
}

#[test]
fn test_names_are_trimmed() {
    let session = run("  Ada  \nBob\n");
    let engine = session.engine().expect("game started");
    assert_eq!(engine.player(Seat::First).name(), "Ada");
    assert_eq!(engine.player(Seat::Second).name(), "Bob");
}

#[test]
fn test_preset_names_skip_prompt() {
    let mut session = Session::new(
        Cursor::new("5\n".to_string()),
        Vec::new(),
        AppConfig::default(),
    )
    .with_names(Some("Ada".to_string()), Some("Bob".to_string()));
    session.run().unwrap();

    let engine = session.engine().unwrap();
    assert_eq!(engine.player(Seat::First).name(), "Ada");
    assert_eq!(engine.board_cells()[4], Cell::Marked(Marker::PRIMARY));

    let text = String::from_utf8(session.into_output()).unwrap();
    assert!(!text.contains("name ["));
}

#[test]
fn test_rejected_move_is_silent() {
    let text = run_to_text("A\nB\n5\n5\n");
    // The board is drawn once at start and once after the accepted move.
    assert_eq!(text.matches("---+---+---").count(), 4);
    assert!(!text.contains("Unrecognized"));
}

#[test]
fn test_occupied_cell_keeps_turn() {
    let session = run("A\nB\ncenter\n5\n");
    let engine = session.engine().unwrap();
    assert_eq!(engine.current_player().name(), "B");
}

#[test]
fn test_moves_after_win_are_ignored() {
    let session = run("A\nB\n1\n4\n2\n5\n3\n9\n");
    let engine = session.engine().unwrap();
    assert_eq!(engine.phase(), Phase::Won);
    assert_eq!(engine.board_cells()[8], Cell::Empty);
}

#[test]
fn test_restart_keeps_players() {
    let session = run("A\nB\n1\n4\n2\n5\n3\nr\n");
    let engine = session.engine().unwrap();
    assert_eq!(engine.phase(), Phase::InProgress);
    assert_eq!(engine.player(Seat::First).name(), "A");
    assert_eq!(engine.board_cells(), [Cell::Empty; 9]);
}

#[test]
fn test_new_game_prompts_for_names() {
    let session = run("A\nB\n1\nn\nC\nD\n");
    let engine = session.engine().unwrap();
    assert_eq!(engine.player(Seat::First).name(), "C");
    assert_eq!(engine.player(Seat::Second).name(), "D");
    assert_eq!(engine.board_cells(), [Cell::Empty; 9]);
}

#[test]
fn test_unknown_input_reported() {
    let text = run_to_text("A\nB\nplease\n");
    assert!(text.contains("Unrecognized input: please."));
}

#[test]
fn test_quit_stops_reading() {
    let session = run("A\nB\nq\n5\n");
    let engine = session.engine().unwrap();
    assert_eq!(engine.board_cells(), [Cell::Empty; 9]);
}

#[test]
fn test_eof_during_setup_starts_nothing() {
    let session = run("A\n");
    assert!(session.engine().is_none());
}

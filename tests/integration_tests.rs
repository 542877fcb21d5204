//! Integration tests for the driver path: parse a menu line, apply the
//! action, render the result - everything the binary does minus stdio.

use tetris_stack::core::{GameSession, GameSnapshot};
use tetris_stack::input::parse_menu_choice;
use tetris_stack::term;
use tetris_stack::types::{GameAction, MenuChoice, QUEUE_CAPACITY};

/// Drive a session the way `main` does, from a script of input lines.
fn drive(session: &mut GameSession, lines: &[&str]) -> Vec<String> {
    let mut reports = Vec::new();
    for line in lines {
        match parse_menu_choice(line) {
            Some(MenuChoice::Quit) => break,
            Some(MenuChoice::Action(action)) => {
                let report = match session.apply(action) {
                    Ok(outcome) => term::report_outcome(&outcome),
                    Err(error) => term::report_error(&error),
                };
                reports.push(report);
            }
            None => reports.push(">> Invalid option. Try again.".to_string()),
        }
    }
    reports
}

#[test]
fn test_scripted_session() {
    let mut session = GameSession::new(5);
    let reports = drive(&mut session, &["1", "2", "4", "bogus", "3", "0", "1"]);

    assert_eq!(reports.len(), 5, "quit stops the script");
    assert!(reports[0].starts_with(">> Played piece ["));
    assert!(reports[1].starts_with(">> Reserved piece ["));
    assert!(reports[2].starts_with(">> Swapped:"));
    assert_eq!(reports[3], ">> Invalid option. Try again.");
    assert!(reports[4].starts_with(">> Used reserved piece ["));

    // Play/reserve kept the queue topped up; swap and use drained the stack
    assert_eq!(session.state().queue().len(), QUEUE_CAPACITY);
    assert!(session.state().stack().is_empty());
}

#[test]
fn test_malformed_input_leaves_state_unchanged() {
    let mut session = GameSession::new(5);
    let before = session.state().snapshot();

    let reports = drive(&mut session, &["x", "99", "", "  "]);
    assert!(reports.iter().all(|r| r.contains("Invalid option")));
    assert_eq!(session.state().snapshot(), before);
}

#[test]
fn test_error_report_for_impossible_exchange() {
    let mut session = GameSession::new(5);
    let reports = drive(&mut session, &["6"]);
    assert_eq!(
        reports[0],
        ">> ERROR: requires 3 pieces in the stack and at least 3 in the queue"
    );
}

#[test]
fn test_undo_via_menu_digit() {
    let mut session = GameSession::new(5);
    let before = session.state().snapshot();

    let reports = drive(&mut session, &["1", "5"]);
    assert_eq!(reports[1], ">> Last move undone");
    assert_eq!(session.state().snapshot(), before);
}

#[test]
fn test_state_block_renders_both_rows() {
    let session = GameSession::new(5);
    let mut snapshot = GameSnapshot::default();
    session.state().snapshot_into(&mut snapshot);

    let block = term::format_state(&snapshot);
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[0], "=== Current state ===");
    assert!(lines[1].starts_with("Piece queue: ["));
    assert_eq!(lines[2], "Reserve stack (top -> base): [empty]");
}

#[test]
fn test_menu_lists_every_action_and_quit() {
    let menu = term::menu_text();
    for digit in 0..=6 {
        assert!(
            menu.contains(&format!("{digit} - ")),
            "menu is missing option {digit}"
        );
    }
    // Every listed digit round-trips through the parser
    assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Quit));
    assert_eq!(
        parse_menu_choice("6"),
        Some(MenuChoice::Action(GameAction::BulkExchange))
    );
}

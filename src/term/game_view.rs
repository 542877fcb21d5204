//! GameView: maps core state into text for the menu driver.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionError, ActionOutcome, GameSnapshot};
use crate::types::Piece;

/// Render one piece as `[K id]`
fn format_piece(piece: &Piece) -> String {
    format!("[{} {}]", piece.kind.as_char(), piece.id)
}

fn format_row<'a>(pieces: impl Iterator<Item = &'a Piece>) -> String {
    let items: Vec<String> = pieces.map(format_piece).collect();
    if items.is_empty() {
        "[empty]".to_string()
    } else {
        items.join(" ")
    }
}

/// Queue contents, front to rear
pub fn format_queue(snap: &GameSnapshot) -> String {
    format!("Piece queue: {}", format_row(snap.queue_pieces()))
}

/// Stack contents, top to base
pub fn format_stack(snap: &GameSnapshot) -> String {
    format!(
        "Reserve stack (top -> base): {}",
        format_row(snap.stack_pieces())
    )
}

/// The full state block shown before each prompt
pub fn format_state(snap: &GameSnapshot) -> String {
    format!(
        "=== Current state ===\n{}\n{}",
        format_queue(snap),
        format_stack(snap)
    )
}

/// The action menu
pub fn menu_text() -> &'static str {
    "Options:\n\
     1 - Play the piece at the front of the queue\n\
     2 - Send the front piece to the reserve stack\n\
     3 - Use a piece from the reserve stack\n\
     4 - Swap the queue front with the stack top\n\
     5 - Undo the last move\n\
     6 - Exchange 3 queue pieces with the 3 stacked pieces\n\
     0 - Quit"
}

/// One-line report for a successful action
pub fn report_outcome(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Played { piece, replacement } => {
            let mut line = format!(">> Played piece {}", format_piece(piece));
            if let Some(new_piece) = replacement {
                line.push_str(&format!(
                    "\n>> New piece {} entered the queue",
                    format_piece(new_piece)
                ));
            }
            line
        }
        ActionOutcome::Reserved { piece, replacement } => {
            let mut line = format!(">> Reserved piece {}", format_piece(piece));
            if let Some(new_piece) = replacement {
                line.push_str(&format!(
                    "\n>> New piece {} entered the queue",
                    format_piece(new_piece)
                ));
            }
            line
        }
        ActionOutcome::ReserveUsed { piece } => {
            format!(">> Used reserved piece {}", format_piece(piece))
        }
        ActionOutcome::Swapped {
            queue_front,
            stack_top,
        } => format!(
            ">> Swapped: queue front is now {}, stack top is now {}",
            format_piece(queue_front),
            format_piece(stack_top)
        ),
        ActionOutcome::Exchanged => ">> 3-for-3 exchange done".to_string(),
        ActionOutcome::Undone => ">> Last move undone".to_string(),
    }
}

/// One-line report for a failed action
pub fn report_error(error: &ActionError) -> String {
    format!(">> ERROR: {error}")
}

//! Menu-driven piece manager (default binary).
//!
//! Thin driver over the core: renders the current state, reads a menu
//! choice from stdin, dispatches it to the session, and reports the
//! outcome. All game rules live in the library.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tetris_stack::core::{GameSession, GameSnapshot};
use tetris_stack::input::parse_menu_choice;
use tetris_stack::term;
use tetris_stack::types::MenuChoice;

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    run(seed)
}

fn run(seed: u32) -> Result<()> {
    let mut session = GameSession::new(seed);
    let mut snapshot = GameSnapshot::default();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        session.state().snapshot_into(&mut snapshot);
        writeln!(stdout, "\n{}", term::format_state(&snapshot))?;
        writeln!(stdout, "\n{}", term::menu_text())?;
        write!(stdout, "Option: ")?;
        stdout.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // EOF on stdin ends the session
            None => break,
        };

        match parse_menu_choice(&line) {
            Some(MenuChoice::Quit) => break,
            Some(MenuChoice::Action(action)) => match session.apply(action) {
                Ok(outcome) => writeln!(stdout, "\n{}", term::report_outcome(&outcome))?,
                Err(error) => writeln!(stdout, "\n{}", term::report_error(&error))?,
            },
            None => writeln!(stdout, "\n>> Invalid option. Try again.")?,
        }
    }

    writeln!(stdout, "\nLeaving the game...")?;
    Ok(())
}

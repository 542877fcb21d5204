//! Input module - maps raw menu text to game actions
//!
//! Pure functions, no I/O: the driver reads the line, this module decides
//! what it means. Anything that is not one of the menu digits parses to
//! `None`, which the driver reports as an invalid option and re-prompts.

use crate::types::{GameAction, MenuChoice};

/// Parse one line of menu input.
///
/// Accepts the digits `0`-`6` with surrounding whitespace; everything
/// else (including multi-digit numbers and trailing junk) is rejected.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "0" => Some(MenuChoice::Quit),
        "1" => Some(MenuChoice::Action(GameAction::Play)),
        "2" => Some(MenuChoice::Action(GameAction::Reserve)),
        "3" => Some(MenuChoice::Action(GameAction::UseReserve)),
        "4" => Some(MenuChoice::Action(GameAction::SwapFrontTop)),
        "5" => Some(MenuChoice::Action(GameAction::Undo)),
        "6" => Some(MenuChoice::Action(GameAction::BulkExchange)),
        _ => None,
    }
}

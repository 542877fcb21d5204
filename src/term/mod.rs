//! Terminal module - text rendering for the menu driver

pub mod game_view;

pub use game_view::{format_queue, format_stack, format_state, menu_text, report_error, report_outcome};

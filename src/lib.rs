//! Turn-based Tetris piece manager.
//!
//! A circular next-piece queue (capacity 5) feeds a reserve stack
//! (capacity 3). Gameplay actions - play, reserve, use-reserve, swap,
//! 3-for-3 bulk exchange - are guarded transitions over the aggregate
//! state, with single-level undo via a full-state snapshot. The menu
//! driver in `main.rs` is a thin loop over [`core::GameSession`] and the
//! pure [`term`] rendering layer.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O, and is fully deterministic for
//! a given seed.
//!
//! - [`queue`]: bounded circular FIFO of upcoming pieces
//! - [`stack`]: bounded LIFO reserve
//! - [`rng`]: deterministic piece generation with threaded id counter
//! - [`game_state`]: the aggregate state and its action transitions
//! - [`session`]: single-level undo via full-state snapshot
//! - [`snapshot`]: flat read-only views for rendering

pub mod game_state;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

// Re-export commonly used types
pub use game_state::{ActionError, ActionOutcome, GameState};
pub use queue::NextQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
pub use stack::ReserveStack;

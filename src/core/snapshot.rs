//! Flat read-only view of the game state, consumed by renderers.
//!
//! The queue is normalized front-to-rear and the stack top-to-base, so
//! observers never see the circular buffer's physical layout. This view is
//! for display only; the undo mechanism clones [`GameState`] itself.
//!
//! [`GameState`]: crate::core::GameState

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Queue contents, front first; `None` past `queue_len`
    pub queue: [Option<Piece>; QUEUE_CAPACITY],
    pub queue_len: usize,
    /// Stack contents, top first; `None` past `stack_len`
    pub stack: [Option<Piece>; STACK_CAPACITY],
    pub stack_len: usize,
    pub next_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.queue = [None; QUEUE_CAPACITY];
        self.queue_len = 0;
        self.stack = [None; STACK_CAPACITY];
        self.stack_len = 0;
        self.next_id = 0;
    }

    /// Queue pieces front to rear
    pub fn queue_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.queue.iter().take(self.queue_len).flatten()
    }

    /// Stack pieces top to base
    pub fn stack_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.stack.iter().take(self.stack_len).flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            queue: [None; QUEUE_CAPACITY],
            queue_len: 0,
            stack: [None; STACK_CAPACITY],
            stack_len: 0,
            next_id: 0,
        }
    }
}

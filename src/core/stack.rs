//! Stack module - bounded linear LIFO of reserved pieces
//!
//! Fixed-capacity inline storage, top-indexed. A full stack rejects the
//! push and hands the piece back; popping an empty stack returns `None`.

use crate::types::{Piece, STACK_CAPACITY};

/// Bounded stack of up to [`STACK_CAPACITY`] pieces.
///
/// Slot 0 is the base; slot `len - 1` is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    slots: [Option<Piece>; STACK_CAPACITY],
    len: usize,
}

impl ReserveStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            slots: [None; STACK_CAPACITY],
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == STACK_CAPACITY
    }

    /// Number of pieces currently reserved
    pub fn len(&self) -> usize {
        self.len
    }

    /// Push onto the top.
    ///
    /// Returns the piece back as `Err` when the stack is full.
    pub fn push(&mut self, piece: Piece) -> Result<(), Piece> {
        if self.is_full() {
            return Err(piece);
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Pop the top piece, or `None` when empty.
    pub fn pop(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    /// Peek at the top piece without removing it
    pub fn top(&self) -> Option<&Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.len - 1].as_ref()
    }

    /// Mutable access to the top slot, for in-place exchanges.
    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.len - 1].as_mut()
    }

    /// Iterate pieces top to base
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len)
            .rev()
            .filter_map(move |i| self.slots[i].as_ref())
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}

//! Queue module - bounded circular FIFO of upcoming pieces
//!
//! Fixed-capacity storage with wrap-around indexing. Slots are inline
//! (`Copy` pieces, no heap), so cloning the queue is a full value copy.
//!
//! Unlike a pre-check-then-mutate API, `enqueue` and `dequeue` report
//! full/empty themselves: a rejected enqueue hands the piece back and an
//! empty dequeue returns `None`, so no caller can read a stale slot.

use crate::types::{Piece, QUEUE_CAPACITY};

/// Bounded circular queue of up to [`QUEUE_CAPACITY`] pieces.
///
/// `count` pieces are live, contiguous in logical order starting at
/// `front`. Physical order wraps modulo the capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    count: usize,
}

impl NextQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == QUEUE_CAPACITY
    }

    /// Number of pieces currently queued
    pub fn len(&self) -> usize {
        self.count
    }

    /// Insert at the logical rear.
    ///
    /// Returns the piece back as `Err` when the queue is full.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), Piece> {
        if self.is_full() {
            return Err(piece);
        }
        let rear = (self.front + self.count) % QUEUE_CAPACITY;
        self.slots[rear] = Some(piece);
        self.count += 1;
        Ok(())
    }

    /// Remove from the logical front, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.front].take();
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.count -= 1;
        piece
    }

    /// Peek at the front piece without removing it
    pub fn front(&self) -> Option<&Piece> {
        self.slots[self.front].as_ref()
    }

    /// Mutable access to the front slot, for in-place exchanges.
    ///
    /// Indices and count are untouched by writes through this reference.
    pub fn front_mut(&mut self) -> Option<&mut Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_mut()
    }

    /// Iterate pieces front to rear
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.count).filter_map(move |i| self.slots[(self.front + i) % QUEUE_CAPACITY].as_ref())
    }
}

impl Default for NextQueue {
    fn default() -> Self {
        Self::new()
    }
}

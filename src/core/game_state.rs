//! Game state module - manages the complete game state
//!
//! Ties together the core components: next-piece queue, reserve stack, and
//! piece generator. Each gameplay action is a guarded transition: it
//! validates its preconditions, mutates the state, and reports the pieces
//! involved so the driver can display them. A failed action leaves the
//! state untouched.

use thiserror::Error;

use crate::core::snapshot::GameSnapshot;
use crate::core::{NextQueue, PieceGenerator, ReserveStack};
use crate::types::{Piece, EXCHANGE_SIZE, QUEUE_CAPACITY};

/// Recoverable, user-visible action failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("queue is empty")]
    QueueEmpty,
    #[error("queue is full")]
    QueueFull,
    #[error("reserve stack is empty")]
    StackEmpty,
    #[error("reserve stack is full")]
    StackFull,
    #[error("requires 3 pieces in the stack and at least 3 in the queue")]
    InsufficientForBulkExchange,
}

/// What a successful action did, with the pieces involved for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Front piece played and discarded
    Played {
        piece: Piece,
        replacement: Option<Piece>,
    },
    /// Front piece moved onto the reserve stack
    Reserved {
        piece: Piece,
        replacement: Option<Piece>,
    },
    /// Top reserve piece consumed
    ReserveUsed { piece: Piece },
    /// Queue front and stack top exchanged in place (post-swap values)
    Swapped {
        queue_front: Piece,
        stack_top: Piece,
    },
    /// 3-for-3 bulk exchange between stack and queue
    Exchanged,
    /// State restored from the undo snapshot
    Undone,
}

/// Complete game state: queue, stack, and the id counter feeding the
/// generator.
///
/// All storage is inline `Copy` data, so `clone` performs the full deep
/// value copy that the undo snapshot requires.
#[derive(Debug, Clone)]
pub struct GameState {
    queue: NextQueue,
    stack: ReserveStack,
    /// Sole source of piece ids; advances by one per generated piece.
    next_id: u32,
    generator: PieceGenerator,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The queue is pre-filled to capacity with freshly generated pieces
    /// (ids 0..5), the stack starts empty, and the counter reflects the
    /// five generations.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let mut next_id = 0;
        let mut queue = NextQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            let piece = generator.generate(&mut next_id);
            // Fresh queue, bounded loop: always room
            let _ = queue.enqueue(piece);
        }

        Self {
            queue,
            stack: ReserveStack::new(),
            next_id,
            generator,
        }
    }

    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Top the queue back up after a removal.
    ///
    /// Returns the generated piece, or `None` if the queue was somehow
    /// already full (structurally impossible right after a removal; the
    /// guard stays so a bug cannot drop a piece on the floor).
    fn replenish(&mut self) -> Option<Piece> {
        if self.queue.is_full() {
            return None;
        }
        let piece = self.generator.generate(&mut self.next_id);
        self.queue.enqueue(piece).ok().map(|_| piece)
    }

    /// Play the piece at the front of the queue, then replenish.
    pub fn play(&mut self) -> Result<ActionOutcome, ActionError> {
        let piece = self.queue.dequeue().ok_or(ActionError::QueueEmpty)?;
        let replacement = self.replenish();
        Ok(ActionOutcome::Played { piece, replacement })
    }

    /// Move the front piece onto the reserve stack, then replenish.
    ///
    /// A full stack is reported before an empty queue, and without
    /// consuming anything from the queue.
    pub fn reserve(&mut self) -> Result<ActionOutcome, ActionError> {
        if self.stack.is_full() {
            return Err(ActionError::StackFull);
        }
        let piece = self.queue.dequeue().ok_or(ActionError::QueueEmpty)?;
        // Full check above guarantees the push lands
        let _ = self.stack.push(piece);
        let replacement = self.replenish();
        Ok(ActionOutcome::Reserved { piece, replacement })
    }

    /// Consume the piece on top of the reserve stack.
    pub fn use_reserve(&mut self) -> Result<ActionOutcome, ActionError> {
        let piece = self.stack.pop().ok_or(ActionError::StackEmpty)?;
        Ok(ActionOutcome::ReserveUsed { piece })
    }

    /// Exchange the queue's front piece with the stack's top piece in
    /// place. No ids or counts change and nothing is replenished.
    pub fn swap_front_top(&mut self) -> Result<ActionOutcome, ActionError> {
        match (self.queue.front_mut(), self.stack.top_mut()) {
            (None, _) => Err(ActionError::QueueEmpty),
            (_, None) => Err(ActionError::StackEmpty),
            (Some(front), Some(top)) => {
                std::mem::swap(front, top);
                Ok(ActionOutcome::Swapped {
                    queue_front: *front,
                    stack_top: *top,
                })
            }
        }
    }

    /// 3-for-3 bulk exchange between the reserve stack and the queue.
    ///
    /// Requires a full stack (3 pieces) and at least 3 pieces in the
    /// queue. Pieces leave the stack top-first and enter the queue in
    /// that order, so the old stack top becomes the new queue front.
    /// The queue's front 3 are pushed in reverse, so the originally
    /// front-most piece ends on top of the stack. Any queue remainder
    /// beyond the exchanged 3 is re-appended at the rear in its original
    /// relative order.
    pub fn bulk_exchange(&mut self) -> Result<ActionOutcome, ActionError> {
        if !self.stack.is_full() || self.queue.len() < EXCHANGE_SIZE {
            return Err(ActionError::InsufficientForBulkExchange);
        }

        let mut from_stack = [None::<Piece>; EXCHANGE_SIZE];
        for slot in from_stack.iter_mut() {
            *slot = self.stack.pop();
        }

        let mut from_queue = [None::<Piece>; EXCHANGE_SIZE];
        for slot in from_queue.iter_mut() {
            *slot = self.queue.dequeue();
        }

        // At most capacity - 3 pieces can remain; drain them all
        let mut remainder = [None::<Piece>; QUEUE_CAPACITY - EXCHANGE_SIZE];
        for slot in remainder.iter_mut() {
            *slot = self.queue.dequeue();
        }

        // Both containers were just drained below capacity, so every
        // insertion below lands.
        for piece in from_queue.iter().rev().flatten() {
            let _ = self.stack.push(*piece);
        }
        for piece in from_stack.iter().flatten() {
            let _ = self.queue.enqueue(*piece);
        }
        for piece in remainder.iter().flatten() {
            let _ = self.queue.enqueue(*piece);
        }

        Ok(ActionOutcome::Exchanged)
    }

    /// Write a flat read-only view of this state into a reusable buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        for (slot, piece) in out.queue.iter_mut().zip(self.queue.iter()) {
            *slot = Some(*piece);
        }
        out.queue_len = self.queue.len();
        for (slot, piece) in out.stack.iter_mut().zip(self.stack.iter()) {
            *slot = Some(*piece);
        }
        out.stack_len = self.stack.len();
        out.next_id = self.next_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::STACK_CAPACITY;

    #[test]
    fn test_new_game_prefilled() {
        let state = GameState::new(1);
        assert!(state.queue().is_full());
        assert!(state.stack().is_empty());
        assert_eq!(state.next_id(), QUEUE_CAPACITY as u32);

        let ids: Vec<u32> = state.queue().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_replenish_keeps_queue_full() {
        let mut state = GameState::new(7);
        for _ in 0..20 {
            state.play().unwrap();
            assert_eq!(state.queue().len(), QUEUE_CAPACITY);
        }
    }

    #[test]
    fn test_reserve_full_stack_does_not_consume_queue() {
        let mut state = GameState::new(7);
        for _ in 0..STACK_CAPACITY {
            state.reserve().unwrap();
        }
        let front_before = *state.queue().front().unwrap();

        assert_eq!(state.reserve(), Err(ActionError::StackFull));
        assert_eq!(*state.queue().front().unwrap(), front_before);
        assert_eq!(state.queue().len(), QUEUE_CAPACITY);
    }

    #[test]
    fn test_swap_front_top_reports_queue_side_first() {
        // Empty stack, non-empty queue: stack side is the failure
        let mut state = GameState::new(7);
        assert_eq!(state.swap_front_top(), Err(ActionError::StackEmpty));

        // Empty queue wins over empty stack
        while state.queue.dequeue().is_some() {}
        assert_eq!(state.swap_front_top(), Err(ActionError::QueueEmpty));
    }

    #[test]
    fn test_play_on_drained_queue_reports_empty() {
        // The action layer keeps the queue topped up, so drain it directly
        let mut state = GameState::new(7);
        while state.queue.dequeue().is_some() {}
        let id_before = state.next_id();

        assert_eq!(state.play(), Err(ActionError::QueueEmpty));
        assert!(state.queue().is_empty());
        assert_eq!(state.next_id(), id_before);
    }

    #[test]
    fn test_reserve_on_drained_queue_reports_empty() {
        let mut state = GameState::new(7);
        while state.queue.dequeue().is_some() {}

        assert_eq!(state.reserve(), Err(ActionError::QueueEmpty));
        assert!(state.stack().is_empty());
    }
}

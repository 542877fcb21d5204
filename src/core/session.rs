//! Session module - undo policy over the game state
//!
//! Holds the live state plus the single retained snapshot. Before every
//! undoable action the snapshot is overwritten with a clone of the current
//! state; `Undo` restores it. Only one level of history exists: undo right
//! after a failed action restores the (unchanged) pre-action state, and
//! undoing before any action restores the freshly constructed state.
//!
//! Undo itself is never snapshotted, so undoing an undo is unsupported.

use crate::core::{ActionError, ActionOutcome, GameState};
use crate::types::GameAction;

/// A game state paired with its undo snapshot.
#[derive(Debug, Clone)]
pub struct GameSession {
    current: GameState,
    previous: GameState,
}

impl GameSession {
    /// Start a session with the given RNG seed.
    ///
    /// The initial state is snapshotted immediately, so an `Undo` issued
    /// as the very first action is a well-defined no-op restore.
    pub fn new(seed: u32) -> Self {
        let current = GameState::new(seed);
        let previous = current.clone();
        Self { current, previous }
    }

    pub fn state(&self) -> &GameState {
        &self.current
    }

    /// Dispatch one action.
    ///
    /// Every action except `Undo` first overwrites the retained snapshot
    /// with the current state - even when the action then fails, so a
    /// rejected attempt still counts as the last move.
    pub fn apply(&mut self, action: GameAction) -> Result<ActionOutcome, ActionError> {
        if action != GameAction::Undo {
            self.previous.clone_from(&self.current);
        }

        match action {
            GameAction::Play => self.current.play(),
            GameAction::Reserve => self.current.reserve(),
            GameAction::UseReserve => self.current.use_reserve(),
            GameAction::SwapFrontTop => self.current.swap_front_top(),
            GameAction::BulkExchange => self.current.bulk_exchange(),
            GameAction::Undo => {
                self.current.clone_from(&self.previous);
                Ok(ActionOutcome::Undone)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_ids(session: &GameSession) -> Vec<u32> {
        session.state().queue().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_undo_before_any_action_restores_initial_state() {
        let mut session = GameSession::new(3);
        let initial = queue_ids(&session);

        assert_eq!(session.apply(GameAction::Undo), Ok(ActionOutcome::Undone));
        assert_eq!(queue_ids(&session), initial);
        assert_eq!(session.state().next_id(), 5);
    }

    #[test]
    fn test_undo_rolls_back_id_counter() {
        let mut session = GameSession::new(3);
        session.apply(GameAction::Play).unwrap();
        assert_eq!(session.state().next_id(), 6);

        session.apply(GameAction::Undo).unwrap();
        assert_eq!(session.state().next_id(), 5);
    }

    #[test]
    fn test_failed_action_overwrites_snapshot() {
        let mut session = GameSession::new(3);
        session.apply(GameAction::Play).unwrap();
        let after_play = queue_ids(&session);

        // UseReserve fails on the empty stack, but still took a snapshot,
        // so undo restores the post-play state rather than the pre-play one.
        assert!(session.apply(GameAction::UseReserve).is_err());
        session.apply(GameAction::Undo).unwrap();
        assert_eq!(queue_ids(&session), after_play);
    }
}

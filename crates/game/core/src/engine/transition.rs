use crate::env::TransitionTicket;
use crate::state::{PendingMove, StateError};

use super::{MoveCompletion, TransitionError, TurnEngine};

impl<'a> TurnEngine<'a> {
    /// Applies the deferred move behind `ticket`: the predator leaves its
    /// source tile and becomes the destination's resident.
    pub fn complete_transition(
        &mut self,
        ticket: TransitionTicket,
    ) -> Result<MoveCompletion, TransitionError> {
        let pending = self
            .state
            .turn
            .pending
            .remove(ticket)
            .ok_or(TransitionError::UnknownTicket(ticket))?;
        self.apply_move(pending)
    }

    /// Completes every outstanding move at once, in ticket order.
    ///
    /// Tickets settled here are stale afterwards; a late completion signal
    /// for one of them gets [`TransitionError::UnknownTicket`].
    pub fn settle_pending(&mut self) -> Result<Vec<MoveCompletion>, TransitionError> {
        self.state
            .turn
            .pending
            .tickets()
            .into_iter()
            .map(|ticket| self.complete_transition(ticket))
            .collect()
    }

    fn apply_move(&mut self, pending: PendingMove) -> Result<MoveCompletion, TransitionError> {
        let board = &self.state.board;
        if board.resident(pending.from).map_err(StateError::from)? != Some(pending.entity) {
            return Err(StateError::PendingMoveDetached {
                entity: pending.entity,
                from: pending.from,
            }
            .into());
        }
        if let Some(occupant) = board.resident(pending.to).map_err(StateError::from)? {
            return Err(StateError::PositionOccupied {
                position: pending.to,
                occupant,
            }
            .into());
        }

        self.state.place_entity(pending.entity, pending.to)?;

        Ok(MoveCompletion {
            ticket: pending.ticket,
            predator: pending.entity,
            from: pending.from,
            to: pending.to,
        })
    }
}

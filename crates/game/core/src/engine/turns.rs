use crate::config::GameConfig;
use crate::env::{GameEnv, Point, SpeciesOracle, Transition, TransitionScheduler};
use crate::state::{Entity, EntityId, EntityKind, PendingMove, StateError, TurnPhase};

use super::{OutcomeKind, PredatorOutcome, TurnEngine, TurnError, TurnReport};

impl<'a> TurnEngine<'a> {
    /// Resolves one full turn.
    ///
    /// Refuses to start while the lock is held or while moves from an earlier
    /// turn are still pending. On an invariant violation the lock is left
    /// held, and every later call reports [`TurnError::Locked`].
    pub fn resolve_turn(
        &mut self,
        env: GameEnv<'_>,
        scheduler: &mut dyn TransitionScheduler,
    ) -> Result<TurnReport, TurnError> {
        if self.state.turn.is_locked() {
            return Err(TurnError::Locked);
        }
        if !self.state.turn.pending.is_empty() {
            return Err(TurnError::transitions_pending(
                self.state.turn.pending.len(),
            ));
        }

        let species = env.species()?;
        let rng = env.rng()?;
        let config = env.config()?;
        config.validate(species)?;

        self.state.turn.phase = TurnPhase::ResolvingTurn;
        let turn = self.state.turn.turn;

        // Walk by index from the back: removing entry `i` leaves every entry
        // below it where it was.
        let mut outcomes = Vec::with_capacity(self.state.turn.roster.len());
        let mut index = self.state.turn.roster.len();
        while index > 0 {
            index -= 1;
            let predator = self.state.turn.roster[index];
            outcomes.push(self.step_predator(predator, turn, species, config, scheduler)?);
        }

        let spawned = self.spawn_step(turn, species, rng, config)?;

        debug_assert_eq!(self.state.check_invariants(), Ok(()));

        self.state.turn.turn += 1;
        self.state.turn.phase = TurnPhase::Idle;

        Ok(TurnReport {
            turn,
            outcomes,
            spawned,
        })
    }

    fn step_predator(
        &mut self,
        predator: EntityId,
        turn: u64,
        species: &dyn SpeciesOracle,
        config: &GameConfig,
        scheduler: &mut dyn TransitionScheduler,
    ) -> Result<PredatorOutcome, TurnError> {
        let from = self
            .state
            .entity(predator)
            .and_then(|entity| entity.position)
            .ok_or(StateError::RosterEntryOffBoard(predator))?;
        let to = from.advanced();
        let outcome = |kind| PredatorOutcome {
            predator,
            from,
            kind,
        };

        // Edge before any occupancy lookup: the terminal column has no tiles.
        if to.x == self.state.board.dimensions().terminal_column() {
            self.state.destroy_entity(predator)?;
            return Ok(outcome(OutcomeKind::Exited));
        }

        if let Some(reserved) = self.state.turn.pending.iter().find(|m| m.to == to) {
            return Ok(outcome(OutcomeKind::Blocked {
                by: reserved.entity,
            }));
        }

        let occupant = self
            .state
            .resident_at(to)?
            .map(|entity| (entity.id, entity.kind()));

        let kind = match occupant {
            None => {
                let ticket = self.state.turn.pending.issue_ticket();
                self.state.turn.pending.insert(PendingMove {
                    ticket,
                    entity: predator,
                    from,
                    to,
                    turn,
                });
                scheduler.schedule(Transition {
                    ticket,
                    entity: predator,
                    from,
                    to,
                    destination: Point::tile_center(to),
                    duration_ms: config.transition_ms,
                });
                OutcomeKind::Advancing { to, ticket }
            }
            Some((plant, EntityKind::Plant)) => {
                self.state.destroy_entity(plant)?;
                self.state.place_entity(predator, to)?;
                OutcomeKind::AtePlant { plant, to }
            }
            Some((prey, EntityKind::Prey)) => {
                let mut eaten = self.state.destroy_entity(prey)?;
                let hunter = self
                    .state
                    .entities
                    .get_mut(predator)
                    .and_then(Entity::as_predator_mut);
                let nutrition = match (hunter, eaten.as_prey_mut()) {
                    (Some(hunter), Some(target)) => hunter.consume_target(target, true, species),
                    _ => 0,
                };
                self.state.destroy_entity(predator)?;
                OutcomeKind::AtePrey {
                    prey,
                    to,
                    nutrition,
                }
            }
            Some((other, EntityKind::Predator)) => OutcomeKind::Blocked { by: other },
        };

        Ok(outcome(kind))
    }
}

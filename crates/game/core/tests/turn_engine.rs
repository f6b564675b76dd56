use game_core::{
    BoardDimensions, EntityId, EntityKind, Env, GameConfig, GameEnv, GameState, ImmediateScheduler,
    OracleError, OutcomeKind, PcgRng, Point, Position, SpeciesId, SpeciesTable, SpeciesTraits,
    StateError, TransitionError, TurnEngine, TurnError, TurnPhase,
};

const FOX: SpeciesId = SpeciesId(0);
const CLOVER: SpeciesId = SpeciesId(1);
const RABBIT: SpeciesId = SpeciesId(2);
const WOLF: SpeciesId = SpeciesId(3);

struct Fixture {
    species: SpeciesTable,
    rng: PcgRng,
    config: GameConfig,
}

impl Fixture {
    fn new() -> Self {
        let species = SpeciesTable::new(vec![
            SpeciesTraits::new(FOX, "fox", EntityKind::Predator)
                .with_appetite(5, 2)
                .with_prey(vec![RABBIT]),
            SpeciesTraits::new(CLOVER, "clover", EntityKind::Plant),
            SpeciesTraits::new(RABBIT, "rabbit", EntityKind::Prey).with_health(3),
            SpeciesTraits::new(WOLF, "wolf", EntityKind::Predator).with_appetite(8, 4),
        ])
        .unwrap();
        let config = GameConfig::new(BoardDimensions::new(9, 5), vec![FOX, WOLF]);

        Self {
            species,
            rng: PcgRng,
            config,
        }
    }

    fn env(&self) -> GameEnv<'_> {
        Env::with_all(&self.species, &self.rng, &self.config).into_game_env()
    }

    fn state(&self, seed: u64) -> GameState {
        GameState::new(self.config.board, seed)
    }
}

fn place(fixture: &Fixture, state: &mut GameState, species: SpeciesId, x: i32, y: i32) -> EntityId {
    TurnEngine::new(state)
        .spawn(fixture.env(), species, Position::new(x, y))
        .unwrap()
}

#[test]
fn predator_at_terminal_column_exits_before_anything_else() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    let fox = place(&fixture, &mut state, FOX, 8, 2);

    let mut scheduler = ImmediateScheduler::new();
    let report = TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].predator, fox);
    assert_eq!(report.outcomes[0].kind, OutcomeKind::Exited);
    assert!(!state.turn.in_roster(fox));
    assert!(state.entity(fox).is_none());
    assert_eq!(state.board.resident(Position::new(8, 2)), Ok(None));
    assert!(scheduler.scheduled().is_empty());
}

#[test]
fn eating_a_plant_relocates_the_predator_synchronously() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    let fox = place(&fixture, &mut state, FOX, 3, 1);
    let clover = place(&fixture, &mut state, CLOVER, 4, 1);

    let mut scheduler = ImmediateScheduler::new();
    let report = TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    assert_eq!(
        report.outcomes[0].kind,
        OutcomeKind::AtePlant {
            plant: clover,
            to: Position::new(4, 1)
        }
    );
    assert_eq!(state.board.resident(Position::new(3, 1)), Ok(None));
    assert_eq!(state.board.resident(Position::new(4, 1)), Ok(Some(fox)));
    assert_eq!(state.entity(fox).unwrap().position, Some(Position::new(4, 1)));
    assert!(state.entity(clover).is_none());
    assert!(state.turn.pending.is_empty());
    assert_eq!(state.check_invariants(), Ok(()));
}

#[test]
fn eating_prey_removes_both_and_predator_never_arrives() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    let fox = place(&fixture, &mut state, FOX, 3, 1);
    let rabbit = place(&fixture, &mut state, RABBIT, 4, 1);

    let mut scheduler = ImmediateScheduler::new();
    let report = TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    // Voracity 2 against 3 health.
    assert_eq!(
        report.outcomes[0].kind,
        OutcomeKind::AtePrey {
            prey: rabbit,
            to: Position::new(4, 1),
            nutrition: 2
        }
    );
    assert!(state.entity(fox).is_none());
    assert!(state.entity(rabbit).is_none());
    assert!(!state.turn.in_roster(fox));
    assert_eq!(state.board.resident(Position::new(3, 1)), Ok(None));
    assert_eq!(state.board.resident(Position::new(4, 1)), Ok(None));
}

#[test]
fn empty_destination_is_deferred_until_completion() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    let fox = place(&fixture, &mut state, FOX, 1, 1);

    let mut scheduler = ImmediateScheduler::new();
    let report = TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    let OutcomeKind::Advancing { to, ticket } = report.outcomes[0].kind else {
        panic!("expected an advance, got {:?}", report.outcomes[0].kind);
    };
    assert_eq!(to, Position::new(2, 1));

    let scheduled = scheduler.scheduled();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].ticket, ticket);
    assert_eq!(scheduled[0].entity, fox);
    assert_eq!(scheduled[0].destination, Point::new(2.5, 1.5));
    assert_eq!(scheduled[0].duration_ms, GameConfig::DEFAULT_TRANSITION_MS);

    // Still on the source tile until the scheduler reports back.
    assert_eq!(state.board.resident(Position::new(1, 1)), Ok(Some(fox)));
    assert_eq!(state.board.resident(Position::new(2, 1)), Ok(None));

    let completion = TurnEngine::new(&mut state)
        .complete_transition(ticket)
        .unwrap();
    assert_eq!(completion.predator, fox);
    assert_eq!(state.board.resident(Position::new(1, 1)), Ok(None));
    assert_eq!(state.board.resident(Position::new(2, 1)), Ok(Some(fox)));
    assert_eq!(state.check_invariants(), Ok(()));

    assert_eq!(
        TurnEngine::new(&mut state).complete_transition(ticket),
        Err(TransitionError::UnknownTicket(ticket))
    );
}

#[test]
fn roster_is_processed_last_added_first() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    let leader = place(&fixture, &mut state, FOX, 2, 1);
    let follower = place(&fixture, &mut state, WOLF, 1, 1);

    let mut scheduler = ImmediateScheduler::new();
    let report = TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    // The follower goes first and still sees the leader in its way.
    assert_eq!(report.outcomes[0].predator, follower);
    assert_eq!(report.outcomes[0].kind, OutcomeKind::Blocked { by: leader });
    assert_eq!(report.outcomes[1].predator, leader);
    assert!(matches!(
        report.outcomes[1].kind,
        OutcomeKind::Advancing { .. }
    ));
    assert_eq!(state.board.resident(Position::new(1, 1)), Ok(Some(follower)));
}

#[test]
fn spawn_adds_exactly_one_predator_in_column_zero() {
    let fixture = Fixture::new();
    let mut state = fixture.state(42);
    let fox = place(&fixture, &mut state, FOX, 3, 1);
    place(&fixture, &mut state, CLOVER, 4, 1);

    let mut scheduler = ImmediateScheduler::new();
    let report = TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    let spawned = report.spawned.unwrap();
    assert_eq!(state.turn.roster, vec![fox, spawned.predator]);
    assert_eq!(spawned.position.x, 0);
    assert!((0..5).contains(&spawned.position.y));
    assert!(fixture.config.predator_roster.contains(&spawned.species));
    assert_eq!(
        state.entity(spawned.predator).unwrap().position,
        Some(spawned.position)
    );
}

#[test]
fn spawn_skips_when_column_zero_is_full() {
    let fixture = Fixture::new();
    let mut state = fixture.state(3);
    for y in 0..5 {
        place(&fixture, &mut state, CLOVER, 0, y);
    }

    let mut scheduler = ImmediateScheduler::new();
    let report = TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    assert_eq!(report.spawned, None);
    assert!(state.turn.roster.is_empty());
}

#[test]
fn next_turn_waits_for_pending_moves() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    place(&fixture, &mut state, FOX, 1, 1);

    let mut scheduler = ImmediateScheduler::new();
    TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    let result = TurnEngine::new(&mut state).resolve_turn(fixture.env(), &mut scheduler);
    assert_eq!(result, Err(TurnError::TransitionsPending { count: 1 }));
    assert_eq!(state.turn.turn, 1);
    assert_eq!(state.turn.phase, TurnPhase::Idle);
}

#[test]
fn pending_destination_is_reserved() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    place(&fixture, &mut state, FOX, 1, 1);

    let mut scheduler = ImmediateScheduler::new();
    TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();

    let mut engine = TurnEngine::new(&mut state);
    assert!(!engine.is_free(Position::new(2, 1)));
    assert_eq!(
        engine.spawn_predator(fixture.env(), WOLF, Position::new(2, 1)),
        Err(TurnError::SpawnBlocked {
            position: Position::new(2, 1)
        })
    );
}

#[test]
fn settling_applies_every_outstanding_move() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    let first = place(&fixture, &mut state, FOX, 1, 0);
    let second = place(&fixture, &mut state, WOLF, 5, 3);

    let mut scheduler = ImmediateScheduler::new();
    let report = TurnEngine::new(&mut state)
        .resolve_turn(fixture.env(), &mut scheduler)
        .unwrap();
    let tickets: Vec<_> = report.tickets().collect();

    let completions = TurnEngine::new(&mut state).settle_pending().unwrap();
    assert_eq!(completions.len(), 2);
    assert!(state.turn.pending.is_empty());
    assert_eq!(state.board.resident(Position::new(2, 0)), Ok(Some(first)));
    assert_eq!(state.board.resident(Position::new(6, 3)), Ok(Some(second)));

    for ticket in tickets {
        assert_eq!(
            TurnEngine::new(&mut state).complete_transition(ticket),
            Err(TransitionError::UnknownTicket(ticket))
        );
    }

    assert!(
        TurnEngine::new(&mut state)
            .resolve_turn(fixture.env(), &mut scheduler)
            .is_ok()
    );
}

#[test]
fn roster_and_board_stay_in_lockstep_over_many_turns() {
    let fixture = Fixture::new();
    let mut state = fixture.state(2024);
    for (x, y) in [(2, 0), (4, 1), (6, 2), (3, 3), (5, 4)] {
        place(&fixture, &mut state, CLOVER, x, y);
    }
    for (x, y) in [(7, 0), (2, 2), (8, 4)] {
        place(&fixture, &mut state, RABBIT, x, y);
    }

    let mut scheduler = ImmediateScheduler::new();
    for _ in 0..40 {
        TurnEngine::new(&mut state)
            .resolve_turn(fixture.env(), &mut scheduler)
            .unwrap();
        TurnEngine::new(&mut state).settle_pending().unwrap();

        assert_eq!(state.check_invariants(), Ok(()));
        for &predator in &state.turn.roster {
            let position = state.entity(predator).unwrap().position.unwrap();
            assert_eq!(state.board.resident(position), Ok(Some(predator)));
        }
        let on_board = state
            .board
            .occupied()
            .filter(|&(_, id)| state.entity(id).is_some_and(|e| e.is_predator()))
            .count();
        assert_eq!(on_board, state.turn.roster.len());
    }
    assert_eq!(state.turn.turn, 40);
}

#[test]
fn same_seed_same_game() {
    let fixture = Fixture::new();
    let run = |seed| {
        let mut state = fixture.state(seed);
        let mut scheduler = ImmediateScheduler::new();
        let mut reports = Vec::new();
        for _ in 0..10 {
            reports.push(
                TurnEngine::new(&mut state)
                    .resolve_turn(fixture.env(), &mut scheduler)
                    .unwrap(),
            );
            TurnEngine::new(&mut state).settle_pending().unwrap();
        }
        reports
    };

    assert_eq!(run(9), run(9));
}

#[test]
fn invariant_violation_poisons_the_lock() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);
    state.turn.roster.push(EntityId(77));

    let mut scheduler = ImmediateScheduler::new();
    let result = TurnEngine::new(&mut state).resolve_turn(fixture.env(), &mut scheduler);
    assert_eq!(
        result,
        Err(TurnError::Invariant(StateError::RosterEntryOffBoard(
            EntityId(77)
        )))
    );
    assert_eq!(state.turn.phase, TurnPhase::ResolvingTurn);

    let result = TurnEngine::new(&mut state).resolve_turn(fixture.env(), &mut scheduler);
    assert_eq!(result, Err(TurnError::Locked));
}

#[test]
fn missing_oracles_are_reported() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);

    let mut scheduler = ImmediateScheduler::new();
    let result = TurnEngine::new(&mut state).resolve_turn(GameEnv::empty(), &mut scheduler);
    assert_eq!(
        result,
        Err(TurnError::Oracle(OracleError::SpeciesNotAvailable))
    );
    assert_eq!(state.turn.phase, TurnPhase::Idle);
}

#[test]
fn spawn_predator_rejects_other_kinds() {
    let fixture = Fixture::new();
    let mut state = fixture.state(1);

    let result =
        TurnEngine::new(&mut state).spawn_predator(fixture.env(), CLOVER, Position::new(0, 0));
    assert_eq!(result, Err(TurnError::NotAPredatorSpecies { species: CLOVER }));

    let result =
        TurnEngine::new(&mut state).spawn_predator(fixture.env(), FOX, Position::new(9, 0));
    assert_eq!(
        result,
        Err(TurnError::SpawnOutOfBounds {
            position: Position::new(9, 0)
        })
    );
}

//! Plain-text board rendering.
use std::fmt::Write;

use game_core::{EntityKind, GameState, OutcomeKind, Position, SpeciesOracle, TurnReport};

/// One glyph per tile: predators upper-case, prey lower-case, plants `*`.
pub fn render_board(state: &GameState, species: &dyn SpeciesOracle) -> String {
    let dims = state.board.dimensions();
    let mut out = String::with_capacity(dims.tile_count() + dims.height as usize);

    for y in 0..dims.height as i32 {
        for x in 0..dims.width as i32 {
            let glyph = match state.resident_at(Position::new(x, y)) {
                Ok(Some(entity)) => {
                    let name = species.traits(entity.species()).map(|t| t.name.as_str());
                    glyph(entity.kind(), name)
                }
                _ => '.',
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn glyph(kind: EntityKind, name: Option<&str>) -> char {
    let initial = name.and_then(|name| name.chars().next()).unwrap_or('?');
    match kind {
        EntityKind::Plant => '*',
        EntityKind::Prey => initial.to_ascii_lowercase(),
        EntityKind::Predator => initial.to_ascii_uppercase(),
    }
}

/// One-line summary of a turn report.
pub fn summarize(report: &TurnReport) -> String {
    let (mut exited, mut advancing, mut ate, mut blocked) = (0, 0, 0, 0);
    for outcome in &report.outcomes {
        match outcome.kind {
            OutcomeKind::Exited => exited += 1,
            OutcomeKind::Advancing { .. } => advancing += 1,
            OutcomeKind::AtePlant { .. } | OutcomeKind::AtePrey { .. } => ate += 1,
            OutcomeKind::Blocked { .. } => blocked += 1,
        }
    }

    let mut line = format!(
        "turn {}: {} advancing, {} ate, {} blocked, {} exited",
        report.turn, advancing, ate, blocked, exited
    );
    if let Some(spawned) = report.spawned {
        let _ = write!(line, ", spawned {} at {}", spawned.predator, spawned.position);
    }
    line
}

#[cfg(test)]
mod tests {
    use game_core::{
        BoardDimensions, EntityId, Env, GameConfig, PcgRng, PredatorOutcome, SpeciesId,
        SpeciesTable, SpeciesTraits, TurnEngine,
    };

    use super::*;

    #[test]
    fn board_uses_kind_specific_glyphs() {
        let species = SpeciesTable::new(vec![
            SpeciesTraits::new(SpeciesId(0), "fox", EntityKind::Predator).with_appetite(5, 2),
            SpeciesTraits::new(SpeciesId(1), "rabbit", EntityKind::Prey).with_health(3),
            SpeciesTraits::new(SpeciesId(2), "clover", EntityKind::Plant),
        ])
        .unwrap();
        let mut state = GameState::new(BoardDimensions::new(3, 2), 0);
        let config = GameConfig::default();
        let env = Env::with_all(&species, &PcgRng, &config).into_game_env();
        let mut engine = TurnEngine::new(&mut state);
        engine.spawn(env, SpeciesId(0), Position::new(0, 0)).unwrap();
        engine.spawn(env, SpeciesId(1), Position::new(1, 0)).unwrap();
        engine.spawn(env, SpeciesId(2), Position::new(2, 1)).unwrap();

        assert_eq!(render_board(&state, &species), "Fr.\n..*\n");
    }

    #[test]
    fn summary_counts_outcomes() {
        let report = TurnReport {
            turn: 3,
            outcomes: vec![PredatorOutcome {
                predator: EntityId(0),
                from: Position::new(4, 0),
                kind: OutcomeKind::Exited,
            }],
            spawned: None,
        };

        assert_eq!(
            summarize(&report),
            "turn 3: 0 advancing, 0 ate, 0 blocked, 1 exited"
        );
    }
}

use super::PreyState;
use crate::env::{SpeciesOracle, SpeciesTraits};
use crate::state::SpeciesId;

/// Species caps copied onto a predator when it is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppetiteCaps {
    pub hunger: i32,
    pub voracity: i32,
}

impl AppetiteCaps {
    pub const fn new(hunger: i32, voracity: i32) -> Self {
        Self { hunger, voracity }
    }

    pub fn from_traits(traits: &SpeciesTraits) -> Self {
        Self::new(traits.hunger, traits.voracity)
    }
}

/// Per-instance predator appetite.
///
/// # Invariants
///
/// - `voracity` always lies in `[0, caps.voracity]`
/// - `regurgitate` never raises `hunger` above `caps.hunger`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredatorState {
    species: SpeciesId,
    hunger: i32,
    voracity: i32,
    caps: AppetiteCaps,
}

impl PredatorState {
    /// A freshly created predator: fully hungry, fully voracious.
    pub fn new(species: SpeciesId, caps: AppetiteCaps) -> Self {
        Self {
            species,
            hunger: caps.hunger,
            voracity: caps.voracity.max(0),
            caps,
        }
    }

    pub fn from_traits(traits: &SpeciesTraits) -> Self {
        Self::new(traits.id, AppetiteCaps::from_traits(traits))
    }

    /// Overrides the starting counters. Voracity is clamped like
    /// [`set_voracity`](Self::set_voracity); hunger is taken as given.
    #[must_use]
    pub fn with_appetite(mut self, hunger: i32, voracity: i32) -> Self {
        self.hunger = hunger;
        self.set_voracity(voracity);
        self
    }

    pub fn species(&self) -> SpeciesId {
        self.species
    }

    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    pub fn voracity(&self) -> i32 {
        self.voracity
    }

    /// Consumes an anonymous amount of nutrition and returns how much counted.
    ///
    /// Non-positive nutrition or a satisfied predator is a no-op returning 0.
    /// Unforced consumption is capped by voracity; forced consumption ignores
    /// it. The result is `applied + min(new_hunger, 0)`, so whatever pushes
    /// hunger below zero is excluded: forcing 10 into a hunger of 5 leaves
    /// hunger at -5 and reports 5.
    pub fn consume(&mut self, nutrition: i32, forced: bool) -> i32 {
        if nutrition <= 0 || self.hunger <= 0 {
            return 0;
        }

        let applied = if forced {
            nutrition
        } else {
            self.voracity.min(nutrition)
        };

        self.hunger = self.hunger.saturating_sub(applied);
        applied + self.hunger.min(0)
    }

    /// Bites `prey` for up to `voracity` health and feeds on what was removed.
    ///
    /// Only natural prey are eaten unless `forced` is set; anything else
    /// returns 0 and leaves both sides untouched.
    pub fn consume_target(
        &mut self,
        prey: &mut PreyState,
        forced: bool,
        species: &dyn SpeciesOracle,
    ) -> i32 {
        if !forced && !self.is_predator_of(prey.species(), species) {
            return 0;
        }

        let nutrition = prey.injure(self.voracity);
        self.hunger = self.hunger.saturating_sub(nutrition);
        nutrition
    }

    pub fn is_predator_of(&self, prey: SpeciesId, species: &dyn SpeciesOracle) -> bool {
        species.is_predator_of(self.species, prey)
    }

    pub fn is_hungry(&self) -> bool {
        self.hunger > 0
    }

    pub fn is_satisfied(&self) -> bool {
        !self.is_hungry()
    }

    /// Whether this predator can take anything from an unforced encounter.
    pub fn can_consume(&self) -> bool {
        self.voracity > 0
    }

    pub fn kill_voracity(&mut self) {
        self.voracity = 0;
    }

    pub fn restore_voracity(&mut self) {
        self.voracity = self.caps.voracity.max(0);
    }

    pub fn set_voracity(&mut self, voracity: i32) {
        self.voracity = voracity.max(0).min(self.caps.voracity.max(0));
    }

    pub fn regurgitate(&mut self, nutrition: i32) {
        self.hunger = self
            .hunger
            .saturating_add(nutrition.max(0))
            .min(self.caps.hunger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SpeciesTable;
    use crate::state::EntityKind;

    fn predator(hunger: i32, voracity: i32) -> PredatorState {
        PredatorState::new(SpeciesId(0), AppetiteCaps::new(10, 4)).with_appetite(hunger, voracity)
    }

    fn table() -> SpeciesTable {
        SpeciesTable::new(vec![
            SpeciesTraits::new(SpeciesId(0), "fox", EntityKind::Predator)
                .with_appetite(10, 4)
                .with_prey(vec![SpeciesId(1)]),
            SpeciesTraits::new(SpeciesId(1), "rabbit", EntityKind::Prey).with_health(6),
            SpeciesTraits::new(SpeciesId(2), "tortoise", EntityKind::Prey).with_health(6),
        ])
        .unwrap()
    }

    #[test]
    fn unforced_consumption_is_capped_by_voracity() {
        let mut fox = predator(5, 3);

        assert_eq!(fox.consume(10, false), 3);
        assert_eq!(fox.hunger(), 2);
    }

    #[test]
    fn forced_consumption_reports_applied_minus_overshoot() {
        let mut fox = predator(5, 3);

        let consumed = fox.consume(10, true);

        assert_eq!(fox.hunger(), -5);
        assert_eq!(consumed, 5);
        assert!(fox.is_satisfied());
    }

    #[test]
    fn unforced_overshoot_is_excluded_too() {
        let mut fox = predator(2, 3);

        assert_eq!(fox.consume(10, false), 2);
        assert_eq!(fox.hunger(), -1);
    }

    #[test]
    fn consumption_is_a_no_op_when_satisfied_or_given_nothing() {
        let mut fox = predator(0, 3);
        assert_eq!(fox.consume(10, false), 0);
        assert_eq!(fox.consume(10, true), 0);
        assert_eq!(fox.hunger(), 0);

        let mut fox = predator(5, 3);
        assert_eq!(fox.consume(0, true), 0);
        assert_eq!(fox.consume(-4, false), 0);
        assert_eq!(fox.hunger(), 5);
    }

    #[test]
    fn voracity_is_clamped_to_species_cap() {
        let mut fox = predator(5, 3);

        fox.set_voracity(-5);
        assert_eq!(fox.voracity(), 0);
        assert!(!fox.can_consume());

        fox.set_voracity(999);
        assert_eq!(fox.voracity(), 4);
        assert!(fox.can_consume());
    }

    #[test]
    fn kill_and_restore_voracity() {
        let mut fox = predator(5, 3);

        fox.kill_voracity();
        assert_eq!(fox.voracity(), 0);
        assert_eq!(fox.consume(10, false), 0);
        assert_eq!(fox.hunger(), 5);

        fox.restore_voracity();
        assert_eq!(fox.voracity(), 4);
    }

    #[test]
    fn regurgitate_is_bounded_by_hunger_cap() {
        let mut fox = predator(5, 3);

        fox.regurgitate(-3);
        assert_eq!(fox.hunger(), 5);

        fox.regurgitate(3);
        assert_eq!(fox.hunger(), 8);

        fox.regurgitate(50);
        assert_eq!(fox.hunger(), 10);
    }

    #[test]
    fn consume_target_respects_prey_relation() {
        let table = table();
        let mut fox = PredatorState::from_traits(table.traits(SpeciesId(0)).unwrap());
        let mut rabbit = PreyState::from_traits(table.traits(SpeciesId(1)).unwrap());
        let mut tortoise = PreyState::from_traits(table.traits(SpeciesId(2)).unwrap());

        assert_eq!(fox.consume_target(&mut tortoise, false, &table), 0);
        assert_eq!(tortoise.health().current, 6);
        assert_eq!(fox.hunger(), 10);

        assert_eq!(fox.consume_target(&mut rabbit, false, &table), 4);
        assert_eq!(rabbit.health().current, 2);
        assert_eq!(fox.hunger(), 6);

        assert_eq!(fox.consume_target(&mut tortoise, true, &table), 4);
        assert_eq!(fox.hunger(), 2);
    }

    #[test]
    fn consume_target_yields_at_most_remaining_health() {
        let table = table();
        let mut fox = PredatorState::from_traits(table.traits(SpeciesId(0)).unwrap());
        let mut rabbit =
            PreyState::from_traits(table.traits(SpeciesId(1)).unwrap()).with_health(1);

        assert_eq!(fox.consume_target(&mut rabbit, false, &table), 1);
        assert!(rabbit.is_dead());
        assert_eq!(fox.hunger(), 9);
    }
}

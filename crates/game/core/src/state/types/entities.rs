use std::collections::BTreeMap;

use super::{EntityId, Position, SpeciesId};
use crate::consumption::{PredatorState, PreyState};

/// Classification tag of a board occupant.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    Plant,
    Prey,
    Predator,
}

/// Plants carry no behavioural state beyond their species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlantState {
    pub species: SpeciesId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityBody {
    Plant(PlantState),
    Prey(PreyState),
    Predator(PredatorState),
}

impl EntityBody {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityBody::Plant(_) => EntityKind::Plant,
            EntityBody::Prey(_) => EntityKind::Prey,
            EntityBody::Predator(_) => EntityKind::Predator,
        }
    }

    pub fn species(&self) -> SpeciesId {
        match self {
            EntityBody::Plant(plant) => plant.species,
            EntityBody::Prey(prey) => prey.species(),
            EntityBody::Predator(predator) => predator.species(),
        }
    }
}

/// A logical board occupant.
///
/// `position` is `Some` exactly while a tile holds this entity, and then it
/// equals that tile's coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub position: Option<Position>,
    pub body: EntityBody,
}

impl Entity {
    pub fn new(id: EntityId, body: EntityBody) -> Self {
        Self {
            id,
            position: None,
            body,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.body.kind()
    }

    pub fn species(&self) -> SpeciesId {
        self.body.species()
    }

    pub fn is_plant(&self) -> bool {
        matches!(self.body, EntityBody::Plant(_))
    }

    pub fn is_prey(&self) -> bool {
        matches!(self.body, EntityBody::Prey(_))
    }

    pub fn is_predator(&self) -> bool {
        matches!(self.body, EntityBody::Predator(_))
    }

    pub fn as_predator(&self) -> Option<&PredatorState> {
        match &self.body {
            EntityBody::Predator(predator) => Some(predator),
            _ => None,
        }
    }

    pub fn as_predator_mut(&mut self) -> Option<&mut PredatorState> {
        match &mut self.body {
            EntityBody::Predator(predator) => Some(predator),
            _ => None,
        }
    }

    pub fn as_prey_mut(&mut self) -> Option<&mut PreyState> {
        match &mut self.body {
            EntityBody::Prey(prey) => Some(prey),
            _ => None,
        }
    }
}

/// Every live entity, keyed by id.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    entities: BTreeMap<EntityId, Entity>,
}

impl EntitiesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn insert(&mut self, entity: Entity) {
        self.entities.insert(entity.id, entity);
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.iter().filter(|entity| entity.kind() == kind).count()
    }
}

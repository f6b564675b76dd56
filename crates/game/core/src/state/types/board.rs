use super::{EntityId, Position};
use crate::state::error::BoardError;

/// Fixed board size, set once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardDimensions {
    pub width: u32,
    pub height: u32,
}

impl BoardDimensions {
    /// Largest accepted side. Keeps coordinates and the terminal column
    /// inside `i32` and the tile grid a sane allocation.
    pub const MAX_SIDE: u32 = 4096;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Column one past the last playable column. A predator whose destination
    /// lands here has left the board.
    pub const fn terminal_column(&self) -> i32 {
        self.width as i32
    }

    pub const fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A single grid cell holding at most one resident.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    position: Position,
    resident: Option<EntityId>,
}

impl Tile {
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            resident: None,
        }
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn resident(&self) -> Option<EntityId> {
        self.resident
    }

    pub const fn is_occupied(&self) -> bool {
        self.resident.is_some()
    }

    /// Overwrites the resident. Callers clear the previous one first.
    pub fn set_resident(&mut self, resident: Option<EntityId>) {
        self.resident = resident;
    }

    pub fn remove_resident(&mut self) -> Option<EntityId> {
        self.resident.take()
    }
}

/// Row-major grid of tiles. Holds occupancy only; entity data lives in
/// [`EntitiesState`](super::EntitiesState).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    dimensions: BoardDimensions,
    tiles: Vec<Tile>,
}

impl Board {
    pub fn new(dimensions: BoardDimensions) -> Self {
        let mut tiles = Vec::with_capacity(dimensions.tile_count());
        for y in 0..dimensions.height as i32 {
            for x in 0..dimensions.width as i32 {
                tiles.push(Tile::new(Position::new(x, y)));
            }
        }
        Self { dimensions, tiles }
    }

    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index_of(&self, position: Position) -> Result<usize, BoardError> {
        if !self.contains(position) {
            return Err(BoardError::OutOfBounds {
                position,
                width: self.dimensions.width,
                height: self.dimensions.height,
            });
        }
        Ok(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    pub fn tile(&self, position: Position) -> Result<&Tile, BoardError> {
        let index = self.index_of(position)?;
        Ok(&self.tiles[index])
    }

    pub fn tile_mut(&mut self, position: Position) -> Result<&mut Tile, BoardError> {
        let index = self.index_of(position)?;
        Ok(&mut self.tiles[index])
    }

    /// Resident at `position`, or `Ok(None)` for an empty tile.
    pub fn resident(&self, position: Position) -> Result<Option<EntityId>, BoardError> {
        self.tile(position).map(Tile::resident)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tiles that currently hold a resident.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, EntityId)> + '_ {
        self.tiles
            .iter()
            .filter_map(|tile| tile.resident().map(|id| (tile.position(), id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_coordinate_maps_to_its_own_tile() {
        let board = Board::new(BoardDimensions::new(9, 5));
        assert_eq!(board.tiles().count(), 45);

        for y in 0..5 {
            for x in 0..9 {
                let position = Position::new(x, y);
                assert_eq!(board.tile(position).unwrap().position(), position);
            }
        }
    }

    #[test]
    fn out_of_bounds_lookups_fail() {
        let board = Board::new(BoardDimensions::new(9, 5));

        for position in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(9, 0),
            Position::new(0, 5),
        ] {
            assert!(matches!(
                board.tile(position),
                Err(BoardError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn tile_residency_is_exclusive() {
        let mut board = Board::new(BoardDimensions::new(3, 3));
        let position = Position::new(1, 2);

        let tile = board.tile_mut(position).unwrap();
        tile.set_resident(Some(EntityId(1)));
        tile.set_resident(Some(EntityId(2)));

        assert_eq!(board.resident(position).unwrap(), Some(EntityId(2)));
        assert_eq!(
            board.tile_mut(position).unwrap().remove_resident(),
            Some(EntityId(2))
        );
        assert!(!board.tile(position).unwrap().is_occupied());
    }

    #[test]
    fn terminal_column_is_one_past_the_last() {
        let dims = BoardDimensions::new(9, 5);
        assert_eq!(dims.terminal_column(), 9);
        assert!(!dims.contains(Position::new(dims.terminal_column(), 0)));
    }
}

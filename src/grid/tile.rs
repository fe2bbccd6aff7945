//! Tiles - the value-bearing pieces on the board.
//!
//! A `Tile` has identity: two tiles with equal value are still different
//! tiles. Identity is a `TileId` handed out by the owning `Grid`, and the
//! merge provenance of a tile refers to its sources by id only, so no tile
//! ever holds another tile.

use serde::{Deserialize, Serialize};

/// Largest face value a tile can carry.
pub const MAX_TILE_VALUE: u32 = 1 << 31;

use crate::core::Position;

/// Unique identifier for a tile within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tile {
    id: TileId,

    /// Current cell. Kept equal to the cell the grid stores this tile in.
    position: Position,

    /// Face value: a power of two, at least 2.
    value: u32,

    /// Where the tile stood before the current move (for animation).
    previous_position: Option<Position>,

    /// The two tiles this one was merged from, during the move that created it.
    merged_from: Option<[TileId; 2]>,
}

impl Tile {
    /// Create a tile. Ids come from `Grid::new_tile`; the value is checked
    /// when the tile is inserted.
    #[must_use]
    pub(crate) fn new(id: TileId, position: Position, value: u32) -> Self {
        Self {
            id,
            position,
            value,
            previous_position: None,
            merged_from: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn previous_position(&self) -> Option<Position> {
        self.previous_position
    }

    #[must_use]
    pub fn merged_from(&self) -> Option<[TileId; 2]> {
        self.merged_from
    }

    /// Value of the tile two of these merge into. `None` when doubling
    /// would overflow, so such tiles never merge.
    #[must_use]
    pub fn merged_value(&self) -> Option<u32> {
        self.value.checked_mul(2)
    }

    /// True if this tile was produced by a merge during the current move.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.merged_from.is_some()
    }

    /// Snapshot the current position into `previous_position`.
    pub fn save_position(&mut self) {
        self.previous_position = Some(self.position);
    }

    /// Update the tile's own coordinate.
    ///
    /// Does not touch grid storage. Tiles stored in a grid are moved with
    /// `Grid::relocate`, which keeps both in step.
    pub(crate) fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Record merge provenance.
    pub(crate) fn set_merged_from(&mut self, sources: [TileId; 2]) {
        self.merged_from = Some(sources);
    }

    /// Forget merge provenance from the previous move.
    pub fn clear_merged_from(&mut self) {
        self.merged_from = None;
    }
}

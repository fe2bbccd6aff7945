//! Presenter boundary.
//!
//! The engine never draws anything. After `setup()` and after every settled
//! move the owning session hands an `Actuator` a read-only `GameSnapshot`;
//! on restart the actuator's `restart` hook runs first so it can clear any
//! score or message it is showing.

pub mod colors;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::grid::{Grid, Tile, TileId};

pub use colors::{tile_color, DEFAULT_COLOR};
pub use text::TextActuator;

/// Game status sent alongside each snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub score: u64,
    pub over: bool,
    pub won: bool,
}

/// One occupied cell as seen by a presenter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub x: i32,
    pub y: i32,
    pub value: u32,

    /// Cell the tile slid from this move, if it existed before the move.
    pub previous_position: Option<Position>,

    /// Source tiles, if this tile was created by a merge this move.
    pub merged_from: Option<[TileId; 2]>,
}

impl From<&Tile> for TileView {
    fn from(tile: &Tile) -> Self {
        let position = tile.position();
        Self {
            id: tile.id(),
            x: position.x,
            y: position.y,
            value: tile.value(),
            previous_position: tile.previous_position(),
            merged_from: tile.merged_from(),
        }
    }
}

/// Read-only picture of the board handed to an `Actuator`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board edge length.
    pub size: usize,

    /// Occupied cells in grid enumeration order.
    pub tiles: Vec<TileView>,

    pub metadata: Metadata,
}

impl GameSnapshot {
    /// Capture the current grid.
    #[must_use]
    pub fn capture(grid: &Grid, metadata: Metadata) -> Self {
        Self {
            size: grid.size(),
            tiles: grid.tiles().map(TileView::from).collect(),
            metadata,
        }
    }

    /// Tile at a cell, if any.
    #[must_use]
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&TileView> {
        self.tiles.iter().find(|t| t.x == x && t.y == y)
    }

    /// Largest tile value on the board, 0 when empty.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.tiles.iter().map(|t| t.value).max().unwrap_or(0)
    }
}

/// Render sink for game state.
///
/// Implementations translate snapshots into whatever the front-end needs
/// (a scene graph, terminal output, a network message).
pub trait Actuator {
    /// Draw the board and status.
    fn actuate(&mut self, snapshot: &GameSnapshot);

    /// Reset presenter-side state (score display, messages) before a restart.
    fn restart(&mut self) {}
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    fn actuate(&mut self, snapshot: &GameSnapshot) {
        (**self).actuate(snapshot);
    }

    fn restart(&mut self) {
        (**self).restart();
    }
}

impl<A: Actuator + ?Sized> Actuator for Box<A> {
    fn actuate(&mut self, snapshot: &GameSnapshot) {
        (**self).actuate(snapshot);
    }

    fn restart(&mut self) {
        (**self).restart();
    }
}

/// Actuator that discards everything (headless play, benchmarks).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullActuator;

impl Actuator for NullActuator {
    fn actuate(&mut self, _snapshot: &GameSnapshot) {}
}

/// Actuator that keeps every snapshot it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingActuator {
    pub snapshots: Vec<GameSnapshot>,
    pub restarts: usize,
}

impl RecordingActuator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&GameSnapshot> {
        self.snapshots.last()
    }
}

impl Actuator for RecordingActuator {
    fn actuate(&mut self, snapshot: &GameSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn restart(&mut self) {
        self.restarts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_orders_tiles() {
        let grid = Grid::from_rows(&[vec![0, 2], vec![4, 0]]).unwrap();
        let snapshot = GameSnapshot::capture(&grid, Metadata::default());

        assert_eq!(snapshot.size, 2);
        let cells: Vec<_> = snapshot.tiles.iter().map(|t| (t.x, t.y, t.value)).collect();
        assert_eq!(cells, vec![(0, 1, 4), (1, 0, 2)]);
    }

    #[test]
    fn test_tile_at_and_max_value() {
        let grid = Grid::from_rows(&[vec![8, 2], vec![0, 0]]).unwrap();
        let snapshot = GameSnapshot::capture(&grid, Metadata::default());

        assert_eq!(snapshot.tile_at(0, 0).map(|t| t.value), Some(8));
        assert!(snapshot.tile_at(1, 1).is_none());
        assert_eq!(snapshot.max_value(), 8);
    }

    #[test]
    fn test_recording_actuator() {
        let grid = Grid::new(2);
        let mut recorder = RecordingActuator::new();
        let metadata = Metadata { score: 12, over: false, won: false };

        recorder.actuate(&GameSnapshot::capture(&grid, metadata));
        recorder.restart();

        assert_eq!(recorder.snapshots.len(), 1);
        assert_eq!(recorder.last().unwrap().metadata.score, 12);
        assert_eq!(recorder.restarts, 1);
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn drive<A: Actuator>(mut actuator: A, snapshot: &GameSnapshot) {
            actuator.restart();
            actuator.actuate(snapshot);
        }

        let snapshot = GameSnapshot::capture(&Grid::new(2), Metadata::default());
        let mut recorder = RecordingActuator::new();
        drive(&mut recorder, &snapshot);
        drive(Box::new(NullActuator), &snapshot);

        assert_eq!(recorder.snapshots.len(), 1);
        assert_eq!(recorder.restarts, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let grid = Grid::from_rows(&[vec![2, 0], vec![0, 0]]).unwrap();
        let snapshot = GameSnapshot::capture(&grid, Metadata { score: 4, over: false, won: true });

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}

//! # tile-merge
//!
//! Rule engine for sliding-tile merge puzzles (2048 and its variants).
//!
//! ## Design Principles
//!
//! 1. **Engine only**: The crate resolves moves, scores them and detects
//!    the end of the game. Drawing is delegated to an `Actuator`.
//!
//! 2. **One owner per tile**: The `Grid` owns every tile. A tile's
//!    coordinate and the cell holding it are updated together, never apart.
//!
//! 3. **Reproducible**: All randomness comes from a seeded `GameRng`, so
//!    the same seed and move sequence always yield the same board.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, RNG, configuration, errors
//! - `grid`: Tiles and the board that owns them
//! - `game`: Traversal order, slide search, `GameManager`
//! - `actuator`: Presenter boundary, snapshots, text rendering
//! - `input`: Key, swipe and click adapters producing directions
//! - `session`: Frame-pump wrapper that renders once per tick

pub mod core;
pub mod grid;
pub mod game;
pub mod actuator;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Direction, GameConfig, GameRng, GridBuildError, GridError, InvalidDirection,
    Position, Vector,
};

pub use crate::grid::{Grid, Tile, TileId};

pub use crate::game::{find_farthest_position, FarthestPosition, GameManager, Traversals};

pub use crate::actuator::{
    Actuator, GameSnapshot, Metadata, NullActuator, RecordingActuator, TextActuator, TileView,
};

pub use crate::input::{Modifiers, SwipeClassifier, TouchTracker};

pub use crate::session::TileBoard;

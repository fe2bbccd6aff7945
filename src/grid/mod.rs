//! Board storage: tiles and the grid that owns them.
//!
//! The grid is the only owner of tiles. Lookups are bounds-checked and
//! moves go through `Grid::relocate`, so a tile's coordinate and the cell
//! holding it cannot drift apart.

pub mod tile;
#[allow(clippy::module_inception)]
pub mod grid;

pub use tile::{Tile, TileId, MAX_TILE_VALUE};
pub use grid::Grid;

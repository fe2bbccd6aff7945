//! Traversal order and slide search.
//!
//! Tiles nearest the wall they are moving toward must be processed first,
//! otherwise a tile behind them would stop short of the space they vacate.

use smallvec::SmallVec;

use crate::core::{Position, Vector};
use crate::grid::Grid;

/// Index list for one axis. Inline for boards up to 8x8.
pub type AxisOrder = SmallVec<[i32; 8]>;

/// Visiting order for a move: `x` is the outer loop, `y` the inner loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traversals {
    pub x: AxisOrder,
    pub y: AxisOrder,
}

impl Traversals {
    /// Build the order for `vector` on a board of edge `size`.
    ///
    /// Both axes run `0..size`; an axis is reversed when the vector points
    /// along it in the positive direction.
    #[must_use]
    pub fn build(size: usize, vector: Vector) -> Self {
        let mut x: AxisOrder = (0..size as i32).collect();
        let mut y: AxisOrder = (0..size as i32).collect();

        if vector.dx == 1 {
            x.reverse();
        }
        if vector.dy == 1 {
            y.reverse();
        }

        Self { x, y }
    }

    /// All positions in visiting order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.x
            .iter()
            .flat_map(move |&x| self.y.iter().map(move |&y| Position::new(x, y)))
    }
}

/// Result of sliding from a cell until something blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FarthestPosition {
    /// Last empty in-bounds cell reached (the start cell if blocked at once).
    pub farthest: Position,

    /// First blocking cell: occupied, or just outside the board.
    pub next: Position,
}

/// Walk from `start` along `vector` while the next cell is in bounds and empty.
#[must_use]
pub fn find_farthest_position(grid: &Grid, start: Position, vector: Vector) -> FarthestPosition {
    let mut previous = start;
    let mut cell = start.step(vector);

    while grid.within_bounds(cell) && grid.is_available(cell) {
        previous = cell;
        cell = cell.step(vector);
    }

    FarthestPosition {
        farthest: previous,
        next: cell,
    }
}

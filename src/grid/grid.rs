//! The board: a fixed-size square of cells, each holding at most one tile.
//!
//! The `Grid` owns every tile on the board and is the single place that
//! checks coordinates. It supports:
//! - Bounds-checked lookups that read out-of-range cells as empty
//! - Deterministic cell enumeration (x outer, y inner)
//! - Uniform random choice among empty cells
//! - Atomic relocation that moves a tile and rewrites its coordinate together
//!
//! ## Invariant
//!
//! A tile stored at cell `(x, y)` has `tile.position() == (x, y)`. Every
//! mutator on this type preserves that, so callers never update the two
//! separately.

use crate::core::{ConfigError, GameRng, GridBuildError, GridError, Position};

use super::tile::{Tile, TileId};

/// Square board of optional tiles.
///
/// ## Usage
///
/// ```
/// use tile_merge::core::Position;
/// use tile_merge::grid::Grid;
///
/// let mut grid = Grid::new(4);
/// grid.place_tile(Position::new(0, 0), 2).unwrap();
///
/// grid.relocate(Position::new(0, 0), Position::new(3, 0)).unwrap();
/// assert_eq!(grid.cell_at(Position::new(3, 0)).map(|t| t.value()), Some(2));
/// assert!(grid.cell_at(Position::new(9, 9)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,

    /// Cell storage, indexed `x * size + y`.
    cells: Vec<Option<Tile>>,

    /// Next tile id to hand out.
    next_id: u32,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            next_id: 0,
        }
    }

    /// Build a grid from rows of values, top row first. `0` is an empty cell.
    ///
    /// ```
    /// use tile_merge::grid::Grid;
    ///
    /// let grid = Grid::from_rows(&[
    ///     vec![2, 2],
    ///     vec![0, 4],
    /// ]).unwrap();
    /// assert_eq!(grid.tile_count(), 3);
    /// ```
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, GridBuildError> {
        let size = rows.len();
        if size < 2 {
            return Err(ConfigError::SizeTooSmall(size).into());
        }
        let mut grid = Self::new(size);

        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ConfigError::NotSquare {
                    rows: size,
                    columns: row.len(),
                }
                .into());
            }
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    grid.place_tile(Position::new(x as i32, y as i32), value)?;
                }
            }
        }

        Ok(grid)
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Storage index for an in-bounds position.
    fn index(&self, position: Position) -> Option<usize> {
        if self.within_bounds(position) {
            Some(position.x as usize * self.size + position.y as usize)
        } else {
            None
        }
    }

    /// Position of a storage index.
    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// Check `0 <= x < size` and `0 <= y < size`.
    #[must_use]
    pub fn within_bounds(&self, position: Position) -> bool {
        let size = self.size as i64;
        let (x, y) = (i64::from(position.x), i64::from(position.y));
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Get the tile at a position. Out-of-bounds positions read as empty.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> Option<&Tile> {
        self.index(position).and_then(|i| self.cells[i].as_ref())
    }

    /// Check if a cell holds a tile.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cell_at(position).is_some()
    }

    /// Check if a cell holds no tile.
    ///
    /// Out-of-bounds positions are reported available, exactly like the
    /// complement of `is_occupied`. Pair with `within_bounds` when sliding.
    #[must_use]
    pub fn is_available(&self, position: Position) -> bool {
        !self.is_occupied(position)
    }

    /// All empty cells, in enumeration order.
    #[must_use]
    pub fn available_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    /// Check if any cell is empty.
    #[must_use]
    pub fn cells_available(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Pick an empty cell uniformly at random. `None` if the grid is full.
    pub fn random_available_cell(&self, rng: &mut GameRng) -> Option<Position> {
        let cells = self.available_cells();
        rng.choose(&cells).copied()
    }

    /// Put a new tile of `value` on an empty cell.
    ///
    /// The value must be a power of two of at least 2. Every tile gets a
    /// fresh id, so ids on the board stay unique.
    pub fn place_tile(&mut self, position: Position, value: u32) -> Result<TileId, GridError> {
        if self.index(position).is_none() {
            return Err(GridError::OutOfBounds(position));
        }
        if self.is_occupied(position) {
            return Err(GridError::Occupied(position));
        }
        let tile = self.new_tile(position, value);
        let id = tile.id();
        self.insert_tile(tile)?;
        Ok(id)
    }

    /// Create a tile with a fresh id. The tile is not placed yet.
    pub(crate) fn new_tile(&mut self, position: Position, value: u32) -> Tile {
        let id = TileId(self.next_id);
        self.next_id += 1;
        Tile::new(id, position, value)
    }

    /// Place a tile at its own position.
    ///
    /// Overwrites whatever occupied the cell and returns it.
    pub(crate) fn insert_tile(&mut self, tile: Tile) -> Result<Option<Tile>, GridError> {
        if tile.value() < 2 || !tile.value().is_power_of_two() {
            return Err(GridError::InvalidValue(tile.value()));
        }
        let index = self
            .index(tile.position())
            .ok_or(GridError::OutOfBounds(tile.position()))?;
        Ok(self.cells[index].replace(tile))
    }

    /// Clear a cell, returning the tile that was there.
    pub fn remove_tile(&mut self, position: Position) -> Option<Tile> {
        let index = self.index(position)?;
        self.cells[index].take()
    }

    /// Move the tile at `from` to the empty cell `to`, updating its coordinate.
    ///
    /// Relocating a tile onto its own cell is a no-op.
    pub fn relocate(&mut self, from: Position, to: Position) -> Result<(), GridError> {
        let from_index = self.index(from).ok_or(GridError::OutOfBounds(from))?;
        let to_index = self.index(to).ok_or(GridError::OutOfBounds(to))?;

        if self.cells[from_index].is_none() {
            return Err(GridError::Empty(from));
        }
        if from_index == to_index {
            return Ok(());
        }
        if self.cells[to_index].is_some() {
            return Err(GridError::Occupied(to));
        }

        if let Some(mut tile) = self.cells[from_index].take() {
            tile.move_to(to);
            self.cells[to_index] = Some(tile);
        }
        Ok(())
    }

    /// Visit every cell in enumeration order (x outer, y inner).
    pub fn for_each_cell<F>(&self, mut visit: F)
    where
        F: FnMut(Position, Option<&Tile>),
    {
        for (i, cell) in self.cells.iter().enumerate() {
            visit(self.position_of(i), cell.as_ref());
        }
    }

    /// Mutate every tile in place. Tiles must not change position here.
    pub(crate) fn for_each_tile_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Tile),
    {
        for tile in self.cells.iter_mut().flatten() {
            visit(tile);
        }
    }

    /// All tiles in enumeration order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Values as rows, top row first, `0` for empty cells.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .map(|y| {
                (0..self.size)
                    .map(|x| {
                        self.cell_at(Position::new(x as i32, y as i32))
                            .map_or(0, Tile::value)
                    })
                    .collect()
            })
            .collect()
    }
}

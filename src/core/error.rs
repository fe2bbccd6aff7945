//! Error types.
//!
//! Board queries never fail: an out-of-bounds coordinate simply reads as
//! "no tile". Errors are reserved for construction-time configuration
//! mistakes and for explicit grid mutations the caller got wrong.

use thiserror::Error;

use super::Position;

/// Invalid game configuration. Returned before any game state is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    SizeTooSmall(usize),

    #[error("grid size {0} is too large")]
    SizeTooLarge(usize),

    #[error("{start_tiles} start tiles do not fit on a {size}x{size} grid")]
    TooManyStartTiles { start_tiles: usize, size: usize },

    #[error("board rows must form a square, got {rows} rows and a row of {columns} cells")]
    NotSquare { rows: usize, columns: usize },

    #[error("winning value must be a power of two of at least 4, got {0}")]
    InvalidWinningValue(u32),

    #[error("four probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Rejected grid mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),

    #[error("cell {0} is already occupied")]
    Occupied(Position),

    #[error("cell {0} holds no tile")]
    Empty(Position),

    #[error("tile value {0} is not a power of two of at least 2")]
    InvalidValue(u32),
}

/// A direction code outside 0-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown direction code {0}")]
pub struct InvalidDirection(pub u8);

/// Failure building a grid from rows of values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridBuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

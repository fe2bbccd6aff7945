//! Cell coordinates, move directions and their unit vectors.
//!
//! ## Coordinate Convention
//!
//! `x` grows to the right, `y` grows downward. Moving "up" therefore
//! decreases `y`.
//!
//! ```
//! use tile_merge::core::{Direction, Position};
//!
//! let start = Position::new(1, 1);
//! assert_eq!(start.step(Direction::Up.vector()), Position::new(1, 0));
//! assert_eq!(start.step(Direction::Right.vector()), Position::new(2, 1));
//! ```

use serde::{Deserialize, Serialize};

use super::error::InvalidDirection;

/// A cell coordinate.
///
/// Signed so that stepping off the board produces a representable
/// (out-of-bounds) position instead of wrapping. Bounds are checked by
/// `Grid::within_bounds`, never here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step along `vector`.
    #[must_use]
    pub const fn step(self, vector: Vector) -> Self {
        Self {
            x: self.x + vector.dx,
            y: self.y + vector.dy,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit displacement applied repeatedly while sliding a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

/// Move direction.
///
/// The discriminants are the wire-level direction codes used by input
/// adapters: 0 = up, 1 = right, 2 = down, 3 = left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector for this direction.
    #[must_use]
    pub const fn vector(self) -> Vector {
        match self {
            Direction::Up => Vector { dx: 0, dy: -1 },
            Direction::Right => Vector { dx: 1, dy: 0 },
            Direction::Down => Vector { dx: 0, dy: 1 },
            Direction::Left => Vector { dx: -1, dy: 0 },
        }
    }

    /// The direction code (0-3).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a direction by code. Returns `None` for codes above 3.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(InvalidDirection(code))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

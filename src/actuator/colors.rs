//! Tile colours by value.
//!
//! For graphical presenters; the text actuator draws without colour.
//!
//! ```
//! use tile_merge::actuator::{tile_color, DEFAULT_COLOR};
//!
//! assert_eq!(tile_color(64), "#E95936");
//! assert_eq!(tile_color(4), DEFAULT_COLOR);
//! ```

/// Colour for values without an entry (2, 4, and anything above 2048).
pub const DEFAULT_COLOR: &str = "#D6CAB5";

/// Hex colour for a tile value.
#[must_use]
pub const fn tile_color(value: u32) -> &'static str {
    match value {
        8 => "#F2B179",
        16 => "#F59563",
        32 => "#FA7A61",
        64 => "#E95936",
        128 => "#F3D86D",
        256 => "#F2D04B",
        512 => "#E3C225",
        1024 => "#ECC440",
        2048 => "#ECC400",
        _ => DEFAULT_COLOR,
    }
}

//! Input adapters: turn discrete gestures into move directions.
//!
//! Three gesture sources are supported:
//! - Keyboard arrow keys (browser `keyCode` numbering)
//! - Trackpad swipes, classified from the axis delta between touch start
//!   and touch end
//! - Taps/clicks, classified by which third of the viewport they land in
//!
//! Swipes and clicks share a 3x3 zone table. Only the four edge-middle
//! zones map to a direction; corners and the centre are unrecognised.
//! Deciding *whether* a device should use click zones (e.g. mobile
//! detection) is left to the caller.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Key code for the up arrow.
pub const KEY_UP: u32 = 38;
/// Key code for the right arrow.
pub const KEY_RIGHT: u32 = 39;
/// Key code for the down arrow.
pub const KEY_DOWN: u32 = 40;
/// Key code for the left arrow.
pub const KEY_LEFT: u32 = 37;

/// Axis delta a swipe must exceed to count as leaving the middle band.
pub const DEFAULT_MIN_STEP: f32 = 0.3;

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    #[must_use]
    pub fn any(self) -> bool {
        self.alt || self.ctrl || self.meta || self.shift
    }
}

/// Map an arrow key to a direction. Any held modifier suppresses the move.
#[must_use]
pub fn direction_for_key(key_code: u32, modifiers: Modifiers) -> Option<Direction> {
    if modifiers.any() {
        return None;
    }
    match key_code {
        KEY_UP => Some(Direction::Up),
        KEY_RIGHT => Some(Direction::Right),
        KEY_DOWN => Some(Direction::Down),
        KEY_LEFT => Some(Direction::Left),
        _ => None,
    }
}

/// Horizontal band of the 3x3 zone table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Middle,
    Right,
}

/// Vertical band of the 3x3 zone table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

/// Direction for a zone, if the zone has one.
#[must_use]
pub const fn direction_for_zone(row: Row, column: Column) -> Option<Direction> {
    match (row, column) {
        (Row::Top, Column::Middle) => Some(Direction::Up),
        (Row::Middle, Column::Right) => Some(Direction::Right),
        (Row::Bottom, Column::Middle) => Some(Direction::Down),
        (Row::Middle, Column::Left) => Some(Direction::Left),
        _ => None,
    }
}

/// Classifies trackpad swipes.
///
/// ```
/// use tile_merge::core::Direction;
/// use tile_merge::input::SwipeClassifier;
///
/// let swipe = SwipeClassifier::default();
/// assert_eq!(swipe.classify([0.0, 0.0], [0.8, 0.1]), Some(Direction::Right));
/// assert_eq!(swipe.classify([0.0, 0.0], [0.8, 0.8]), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeClassifier {
    pub min_step: f32,
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self {
            min_step: DEFAULT_MIN_STEP,
        }
    }
}

impl SwipeClassifier {
    #[must_use]
    pub fn new(min_step: f32) -> Self {
        Self { min_step }
    }

    /// Zone for a swipe from `start` to `end` (axis coordinates, `y` down).
    #[must_use]
    pub fn zone(&self, start: [f32; 2], end: [f32; 2]) -> (Row, Column) {
        let dx = end[0] - start[0];
        let dy = end[1] - start[1];

        let column = if dx < -self.min_step {
            Column::Left
        } else if dx > self.min_step {
            Column::Right
        } else {
            Column::Middle
        };
        let row = if dy < -self.min_step {
            Row::Top
        } else if dy > self.min_step {
            Row::Bottom
        } else {
            Row::Middle
        };

        (row, column)
    }

    /// Direction for a swipe, or `None` if it was diagonal or too short.
    #[must_use]
    pub fn classify(&self, start: [f32; 2], end: [f32; 2]) -> Option<Direction> {
        let (row, column) = self.zone(start, end);
        direction_for_zone(row, column)
    }
}

/// Classify a click at `(x, y)` in a `width` x `height` viewport by thirds.
#[must_use]
pub fn classify_click(x: f32, y: f32, width: f32, height: f32) -> Option<Direction> {
    let column = if x < width / 3.0 {
        Column::Left
    } else if x > width - width / 3.0 {
        Column::Right
    } else {
        Column::Middle
    };
    let row = if y < height / 3.0 {
        Row::Top
    } else if y > height - height / 3.0 {
        Row::Bottom
    } else {
        Row::Middle
    };

    direction_for_zone(row, column)
}

/// Tracks one trackpad touch from start to end.
///
/// The first axis reading after `touch_start` becomes the swipe origin;
/// the latest reading at `touch_end` is the swipe end.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    classifier: SwipeClassifier,
    origin: Option<[f32; 2]>,
    current: [f32; 2],
}

impl TouchTracker {
    #[must_use]
    pub fn new(classifier: SwipeClassifier) -> Self {
        Self {
            classifier,
            ..Self::default()
        }
    }

    /// A new touch begins; forget the previous origin.
    pub fn touch_start(&mut self) {
        self.origin = None;
    }

    /// Record an axis reading.
    pub fn axis_moved(&mut self, axis: [f32; 2]) {
        self.current = axis;
        if self.origin.is_none() {
            self.origin = Some(axis);
        }
    }

    /// The touch ends. Returns the swipe direction, if recognised.
    pub fn touch_end(&mut self) -> Option<Direction> {
        let origin = self.origin.take()?;
        self.classifier.classify(origin, self.current)
    }
}

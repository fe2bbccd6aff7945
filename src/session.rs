//! Frame-pump integration.
//!
//! Input events arrive at any rate; rendering happens once per display
//! refresh. `TileBoard` sits between the two: a successful move only marks
//! the board dirty, and the next `tick()` renders it.
//!
//! ```
//! use tile_merge::actuator::RecordingActuator;
//! use tile_merge::core::GameConfig;
//! use tile_merge::input::{Modifiers, KEY_LEFT, KEY_RIGHT};
//! use tile_merge::session::TileBoard;
//!
//! let mut board = TileBoard::new(GameConfig::default().with_seed(1), RecordingActuator::new()).unwrap();
//! board.key_down(KEY_LEFT, Modifiers::default());
//! board.key_down(KEY_RIGHT, Modifiers::default());
//! board.tick();
//! board.tick();
//! // one frame from setup, at most one more for both moves
//! assert!(board.manager().actuator().snapshots.len() <= 2);
//! ```

use tracing::debug;

use crate::actuator::Actuator;
use crate::core::{ConfigError, Direction, GameConfig};
use crate::game::GameManager;
use crate::input::{classify_click, direction_for_key, Modifiers, TouchTracker};

/// A game plus the input plumbing and dirty flag around it.
#[derive(Debug)]
pub struct TileBoard<A: Actuator> {
    manager: GameManager<A>,
    touch: TouchTracker,
    dirty: bool,
}

impl<A: Actuator> TileBoard<A> {
    pub fn new(config: GameConfig, actuator: A) -> Result<Self, ConfigError> {
        Ok(Self::from_manager(GameManager::new(config, actuator)?))
    }

    /// Wrap an existing manager.
    #[must_use]
    pub fn from_manager(manager: GameManager<A>) -> Self {
        Self {
            manager,
            touch: TouchTracker::default(),
            dirty: false,
        }
    }

    /// Apply a move. Returns whether anything moved.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        let moved = self.manager.make_move(direction);
        if moved {
            self.dirty = true;
        }
        moved
    }

    /// Apply a move by direction code; unknown codes are ignored.
    pub fn move_code(&mut self, code: u8) -> bool {
        match Direction::from_code(code) {
            Some(direction) => self.move_tiles(direction),
            None => {
                debug!(code, "ignoring unknown direction code");
                false
            }
        }
    }

    /// Keyboard input.
    pub fn key_down(&mut self, key_code: u32, modifiers: Modifiers) -> bool {
        direction_for_key(key_code, modifiers).is_some_and(|d| self.move_tiles(d))
    }

    /// Click/tap input in a `width` x `height` viewport.
    pub fn click(&mut self, x: f32, y: f32, width: f32, height: f32) -> bool {
        classify_click(x, y, width, height).is_some_and(|d| self.move_tiles(d))
    }

    pub fn touch_start(&mut self) {
        self.touch.touch_start();
    }

    pub fn axis_moved(&mut self, axis: [f32; 2]) {
        self.touch.axis_moved(axis);
    }

    /// End of a trackpad touch. Returns `None` if the swipe was not
    /// recognised, otherwise whether the move changed the board.
    pub fn touch_end(&mut self) -> Option<bool> {
        let direction = self.touch.touch_end()?;
        Some(self.move_tiles(direction))
    }

    /// Render if a move happened since the last tick. Returns whether it rendered.
    pub fn tick(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        self.manager.actuate();
        true
    }

    /// Restart the game. `restart` renders, so nothing stays pending.
    pub fn restart(&mut self) {
        self.manager.restart();
        self.dirty = false;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn manager(&self) -> &GameManager<A> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut GameManager<A> {
        &mut self.manager
    }
}

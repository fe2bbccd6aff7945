//! Game configuration.
//!
//! A `GameConfig` fixes the board geometry and the rules that vary between
//! variants of the puzzle:
//! - `size`: board edge length (the board is always square)
//! - `start_tiles`: tiles placed by `setup()`
//! - `winning_value`: merged tile value that ends the game as won
//! - `four_probability`: chance that a spawned tile is a 4 rather than a 2
//! - `seed`: RNG seed, so sessions are reproducible
//!
//! Configs are validated once, when a `GameManager` is built.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 4;

/// Largest accepted board edge length.
pub const MAX_SIZE: usize = 256;

/// Default number of tiles placed at game start.
pub const DEFAULT_START_TILES: usize = 2;

/// Default winning tile.
pub const DEFAULT_WINNING_VALUE: u32 = 2048;

/// Default probability that a spawned tile is a 4.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length (2..=`MAX_SIZE`).
    pub size: usize,

    /// Tiles spawned by `setup()`.
    pub start_tiles: usize,

    /// Merging into this value wins the game.
    pub winning_value: u32,

    /// Probability of spawning a 4 instead of a 2.
    pub four_probability: f64,

    /// Seed for spawn positions and values.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            start_tiles: DEFAULT_START_TILES,
            winning_value: DEFAULT_WINNING_VALUE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a default configuration for a board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the number of start tiles.
    #[must_use]
    pub fn with_start_tiles(mut self, count: usize) -> Self {
        self.start_tiles = count;
        self
    }

    /// Set the winning tile value.
    #[must_use]
    pub fn with_winning_value(mut self, value: u32) -> Self {
        self.winning_value = value;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::SizeTooSmall(self.size));
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge(self.size));
        }
        if self.start_tiles > self.cell_count() {
            return Err(ConfigError::TooManyStartTiles {
                start_tiles: self.start_tiles,
                size: self.size,
            });
        }
        if self.winning_value < 4 || !self.winning_value.is_power_of_two() {
            return Err(ConfigError::InvalidWinningValue(self.winning_value));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidProbability(self.four_probability));
        }
        Ok(())
    }
}

//! Game orchestration: one full move, scoring, spawning, terminal detection.

use tracing::{debug, info, trace};

use crate::actuator::{Actuator, GameSnapshot, Metadata};
use crate::core::{ConfigError, Direction, GameConfig, GameRng, Position};
use crate::grid::{Grid, TileId};

use super::traversal::{find_farthest_position, Traversals};

/// Runs a single play session.
///
/// Holds the grid, the score and the two terminal flags. Once either
/// `over` or `won` is set, `make_move` does nothing until `restart`.
///
/// ## Usage
///
/// ```
/// use tile_merge::actuator::RecordingActuator;
/// use tile_merge::core::{Direction, GameConfig};
/// use tile_merge::game::GameManager;
///
/// let mut game = GameManager::new(GameConfig::default().with_seed(7), RecordingActuator::new()).unwrap();
/// assert_eq!(game.grid().tile_count(), 2);
///
/// let moved = game.make_move(Direction::Left);
/// if moved {
///     game.actuate();
/// }
/// let frames = game.actuator().snapshots.len();
/// assert_eq!(frames, if moved { 2 } else { 1 });
/// ```
#[derive(Debug)]
pub struct GameManager<A: Actuator> {
    config: GameConfig,
    grid: Grid,
    score: u64,
    over: bool,
    won: bool,
    rng: GameRng,
    actuator: A,
}

impl<A: Actuator> GameManager<A> {
    /// Validate the config, set up a fresh game and render it.
    pub fn new(config: GameConfig, actuator: A) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut manager = Self {
            grid: Grid::new(config.size),
            rng: GameRng::new(config.seed),
            score: 0,
            over: false,
            won: false,
            config,
            actuator,
        };
        manager.setup();
        Ok(manager)
    }

    /// Start from an existing board instead of random start tiles.
    ///
    /// The config's `size` is taken from the grid. Renders once, like `setup`.
    pub fn with_grid(config: GameConfig, grid: Grid, actuator: A) -> Result<Self, ConfigError> {
        let config = GameConfig {
            size: grid.size(),
            ..config
        };
        config.validate()?;

        let mut manager = Self {
            grid,
            rng: GameRng::new(config.seed),
            score: 0,
            over: false,
            won: false,
            config,
            actuator,
        };
        manager.actuate();
        Ok(manager)
    }

    /// Fresh grid, zero score, cleared flags, start tiles, then render.
    pub fn setup(&mut self) {
        self.grid = Grid::new(self.config.size);
        self.score = 0;
        self.over = false;
        self.won = false;

        self.add_start_tiles();
        info!(size = self.config.size, tiles = self.grid.tile_count(), "game set up");
        self.actuate();
    }

    /// Let the actuator clear its display, then set up again.
    pub fn restart(&mut self) {
        info!(score = self.score, "restarting game");
        self.actuator.restart();
        self.setup();
    }

    fn add_start_tiles(&mut self) {
        for _ in 0..self.config.start_tiles {
            self.add_random_tile();
        }
    }

    /// Spawn a 2 (or a 4, with the configured probability) on a random
    /// empty cell. Does nothing on a full grid.
    pub fn add_random_tile(&mut self) -> Option<TileId> {
        let position = self.grid.random_available_cell(&mut self.rng)?;
        let value = if self.rng.gen_bool(self.config.four_probability) {
            4
        } else {
            2
        };

        let tile = self.grid.new_tile(position, value);
        let id = tile.id();
        self.grid.insert_tile(tile).ok()?;
        trace!(%position, value, "spawned tile");
        Some(id)
    }

    /// Current status flags and score.
    #[must_use]
    pub fn metadata(&self) -> Metadata {
        Metadata {
            score: self.score,
            over: self.over,
            won: self.won,
        }
    }

    /// Read-only picture of the current board.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.grid, self.metadata())
    }

    /// Send the current board to the actuator.
    pub fn actuate(&mut self) {
        let snapshot = self.snapshot();
        self.actuator.actuate(&snapshot);
    }

    /// Clear merge provenance and remember where every tile starts.
    fn prepare_tiles(&mut self) {
        self.grid.for_each_tile_mut(|tile| {
            tile.clear_merged_from();
            tile.save_position();
        });
    }

    /// Slide every tile toward `direction`, merging equal neighbours.
    ///
    /// Returns whether any tile changed cell. When something moved, one
    /// random tile is spawned. The board is checked for remaining moves
    /// after every call, so an unmoved move on a stuck board sets `over`.
    /// The caller decides when to render.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        if self.is_terminated() {
            return false;
        }

        let vector = direction.vector();
        let traversals = Traversals::build(self.grid.size(), vector);
        let score_before = self.score;
        let mut moved = false;

        self.prepare_tiles();

        for cell in traversals.positions() {
            let Some(tile) = self.grid.cell_at(cell) else {
                continue;
            };
            let (tile_id, value) = (tile.id(), tile.value());
            let doubled = tile.merged_value();

            let positions = find_farthest_position(&self.grid, cell, vector);

            // A tile created by a merge this move cannot take part in another.
            let merge_with = self
                .grid
                .cell_at(positions.next)
                .filter(|next| next.value() == value && !next.is_merged())
                .map(|next| next.id())
                .zip(doubled);

            let destination = match merge_with {
                Some((next_id, merged_value)) => {
                    self.merge(cell, positions.next, [tile_id, next_id], merged_value);
                    positions.next
                }
                None => {
                    let result = self.grid.relocate(cell, positions.farthest);
                    debug_assert!(result.is_ok(), "slide target must be free: {result:?}");
                    positions.farthest
                }
            };

            if destination != cell {
                moved = true;
            }
        }

        if moved {
            self.add_random_tile();
        }
        if !self.moves_available() {
            self.over = true;
            info!(score = self.score, "game over");
        }

        debug!(
            %direction,
            moved,
            gained = self.score - score_before,
            score = self.score,
            "move resolved"
        );
        moved
    }

    /// Replace the tiles at `from` and `target` with one tile of `value` at `target`.
    fn merge(&mut self, from: Position, target: Position, sources: [TileId; 2], value: u32) {
        let mut merged = self.grid.new_tile(target, value);
        merged.set_merged_from(sources);

        let result = self.grid.insert_tile(merged);
        debug_assert!(result.is_ok(), "merge target must be on the board");
        self.grid.remove_tile(from);

        self.score += u64::from(value);
        if value == self.config.winning_value {
            self.won = true;
            info!(value, score = self.score, "winning tile reached");
        }
    }

    /// True if there is an empty cell or two equal neighbours.
    #[must_use]
    pub fn moves_available(&self) -> bool {
        self.grid.cells_available() || self.tile_matches_available()
    }

    /// True if any two orthogonally adjacent tiles share a value they can
    /// still be merged from.
    #[must_use]
    pub fn tile_matches_available(&self) -> bool {
        self.grid.tiles().filter(|tile| tile.merged_value().is_some()).any(|tile| {
            Direction::ALL.iter().any(|direction| {
                self.grid
                    .cell_at(tile.position().step(direction.vector()))
                    .is_some_and(|other| other.value() == tile.value())
            })
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// No legal moves remain.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The winning tile has been made.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Either terminal flag is set.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.over || self.won
    }

    #[must_use]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }
}

//! Core engine types: positions, directions, RNG, configuration, errors.
//!
//! Everything here is independent of how a board is stored or rendered.

pub mod position;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Direction, Position, Vector};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{ConfigError, GridBuildError, GridError, InvalidDirection};

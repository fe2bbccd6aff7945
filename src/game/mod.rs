//! Move resolution.
//!
//! `GameManager` drives a session: it builds the traversal order for a
//! direction, slides and merges tiles, keeps the score, spawns new tiles
//! and detects the terminal states.

pub mod manager;
pub mod traversal;

pub use manager::GameManager;
pub use traversal::{find_farthest_position, FarthestPosition, Traversals};

//! Move resolution integration tests.
//!
//! Boards are built row by row (top row first, `0` = empty) and driven
//! through `GameManager::make_move`.

use tile_merge::actuator::{NullActuator, RecordingActuator};
use tile_merge::core::{Direction, GameConfig, Position};
use tile_merge::game::GameManager;
use tile_merge::grid::{Grid, MAX_TILE_VALUE};

fn game(rows: &[Vec<u32>]) -> GameManager<NullActuator> {
    let grid = Grid::from_rows(rows).unwrap();
    GameManager::with_grid(GameConfig::default(), grid, NullActuator).unwrap()
}

fn value_at(game: &GameManager<NullActuator>, x: i32, y: i32) -> u32 {
    game.grid().cell_at(Position::new(x, y)).map_or(0, |t| t.value())
}

/// Sum of all tile values on the board.
fn values_sum(game: &GameManager<NullActuator>) -> u32 {
    game.grid().tiles().map(|t| t.value()).sum()
}

// =============================================================================
// Basic Merges
// =============================================================================

#[test]
fn test_pair_merges_to_the_left() {
    let mut game = game(&[
        vec![2, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    assert!(game.make_move(Direction::Left));

    assert_eq!(value_at(&game, 0, 0), 4);
    assert_eq!(game.score(), 4);
    // one merged tile plus one spawn
    assert_eq!(game.grid().tile_count(), 2);
}

#[test]
fn test_full_row_merges_pairwise() {
    let mut game = game(&[
        vec![2, 2, 2, 2],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    assert!(game.make_move(Direction::Left));

    assert_eq!(value_at(&game, 0, 0), 4);
    assert_eq!(value_at(&game, 1, 0), 4);
    assert_eq!(game.score(), 8);
}

#[test]
fn test_full_row_merges_pairwise_to_the_right() {
    let mut game = game(&[
        vec![0, 0, 0, 0],
        vec![2, 2, 2, 2],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    assert!(game.make_move(Direction::Right));

    assert_eq!(value_at(&game, 3, 1), 4);
    assert_eq!(value_at(&game, 2, 1), 4);
    assert_eq!(game.score(), 8);
}

#[test]
fn test_three_equal_tiles_merge_nearest_wall_first() {
    let mut game = game(&[
        vec![0, 2, 2, 2],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    assert!(game.make_move(Direction::Right));

    assert_eq!(value_at(&game, 3, 0), 4);
    assert_eq!(value_at(&game, 2, 0), 2);
    assert_eq!(game.score(), 4);
}

#[test]
fn test_unequal_tiles_stack_without_merging() {
    let mut game = game(&[
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![2, 0, 0, 0],
        vec![4, 0, 0, 0],
    ]);

    assert!(game.make_move(Direction::Up));

    assert_eq!(value_at(&game, 0, 0), 2);
    assert_eq!(value_at(&game, 0, 1), 4);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_columns_move_independently() {
    let mut game = game(&[
        vec![2, 0, 8, 0],
        vec![0, 4, 8, 0],
        vec![2, 0, 0, 0],
        vec![0, 4, 0, 16],
    ]);
    let before = values_sum(&game);

    assert!(game.make_move(Direction::Down));

    assert_eq!(value_at(&game, 0, 3), 4);
    assert_eq!(value_at(&game, 1, 3), 8);
    assert_eq!(value_at(&game, 2, 3), 16);
    assert_eq!(value_at(&game, 3, 3), 16);
    assert_eq!(game.score(), 4 + 8 + 16);

    let spawned = values_sum(&game) - before;
    assert!(spawned == 2 || spawned == 4);
}

// =============================================================================
// No-op and Terminal States
// =============================================================================

#[test]
fn test_blocked_move_returns_false_and_spawns_nothing() {
    let mut game = game(&[
        vec![2, 4, 8, 16],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    assert!(!game.make_move(Direction::Up));
    assert!(!game.make_move(Direction::Left));
    assert_eq!(game.grid().tile_count(), 4);
    assert!(!game.is_over());
}

#[test]
fn test_stuck_board_has_no_moves() {
    let mut game = game(&[
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ]);

    assert!(!game.moves_available());
    assert!(!game.tile_matches_available());

    assert!(!game.make_move(Direction::Left));
    assert!(game.is_over());
}

#[test]
fn test_full_board_with_a_match_is_not_over() {
    let mut game = game(&[
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 8, 8],
    ]);

    assert!(game.moves_available());
    assert!(!game.make_move(Direction::Up));
    assert!(!game.is_over());

    assert!(game.make_move(Direction::Left));
    assert_eq!(value_at(&game, 2, 3), 16);
    assert_eq!(game.score(), 16);
}

#[test]
fn test_last_move_into_dead_end_sets_over() {
    // Merging the two 2s leaves one gap, which the spawn fills. Whether
    // the game ends depends on the spawned value.
    let mut game = game(&[vec![2, 2], vec![8, 16]]);

    assert!(game.make_move(Direction::Left));
    assert_eq!(value_at(&game, 0, 0), 4);

    let spawned = value_at(&game, 1, 0);
    assert!(spawned == 2 || spawned == 4);
    if spawned == 2 {
        assert!(game.is_over());
    } else {
        // 4 next to 4 still merges
        assert!(!game.is_over());
    }
}

#[test]
fn test_win_then_frozen() {
    let mut game = game(&[
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![1024, 0, 0, 1024],
    ]);

    assert!(game.make_move(Direction::Left));
    assert!(game.is_won());
    assert_eq!(value_at(&game, 0, 3), 2048);

    let rows = game.grid().to_rows();
    let score = game.score();
    for direction in Direction::ALL {
        assert!(!game.make_move(direction));
    }
    assert_eq!(game.grid().to_rows(), rows);
    assert_eq!(game.score(), score);
}

#[test]
fn test_tiles_beyond_target_do_not_win() {
    let config = GameConfig::default().with_winning_value(64);
    let grid = Grid::from_rows(&[vec![64, 64], vec![0, 0]]).unwrap();
    let mut game = GameManager::with_grid(config, grid, NullActuator).unwrap();

    assert!(game.make_move(Direction::Left));
    assert!(!game.is_won());
    assert_eq!(game.score(), 128);
}

#[test]
fn test_largest_tiles_do_not_merge() {
    let mut game = game(&[vec![MAX_TILE_VALUE, MAX_TILE_VALUE], vec![0, 0]]);

    assert!(!game.make_move(Direction::Left));
    assert_eq!(game.grid().to_rows(), vec![vec![MAX_TILE_VALUE, MAX_TILE_VALUE], vec![0, 0]]);
    assert_eq!(game.score(), 0);
    assert!(!game.is_over());
}

#[test]
fn test_board_of_largest_tiles_is_over() {
    let mut game = game(&[
        vec![MAX_TILE_VALUE, MAX_TILE_VALUE],
        vec![MAX_TILE_VALUE, MAX_TILE_VALUE],
    ]);

    assert!(!game.tile_matches_available());
    assert!(!game.make_move(Direction::Right));
    assert!(game.is_over());
}

// =============================================================================
// Spawning
// =============================================================================

#[test]
fn test_spawn_fills_the_only_gap() {
    for seed in 0..20 {
        let grid = Grid::from_rows(&[vec![2, 4, 8], vec![16, 0, 32], vec![64, 128, 256]]).unwrap();
        let config = GameConfig::default().with_seed(seed);
        let mut game = GameManager::with_grid(config, grid, NullActuator).unwrap();

        assert!(game.add_random_tile().is_some());

        let filled = value_at(&game, 1, 1);
        assert!(filled == 2 || filled == 4, "seed {seed} spawned {filled}");
        assert!(!game.grid().cells_available());
    }
}

#[test]
fn test_four_probability_extremes() {
    let always_four = GameConfig::new(4).with_four_probability(1.0).with_start_tiles(6);
    let game = GameManager::new(always_four, NullActuator).unwrap();
    assert!(game.grid().tiles().all(|t| t.value() == 4));

    let never_four = GameConfig::new(4).with_four_probability(0.0).with_start_tiles(6);
    let game = GameManager::new(never_four, NullActuator).unwrap();
    assert!(game.grid().tiles().all(|t| t.value() == 2));
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut game = GameManager::new(GameConfig::default().with_seed(seed), NullActuator).unwrap();
        for i in 0..50 {
            game.make_move(Direction::ALL[i % 4]);
        }
        (game.grid().to_rows(), game.score())
    };

    assert_eq!(play(5), play(5));
}

// =============================================================================
// Rendering Boundary
// =============================================================================

#[test]
fn test_snapshot_carries_animation_hints() {
    let grid = Grid::from_rows(&[vec![2, 0, 2], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
    let mut game = GameManager::with_grid(GameConfig::default(), grid, RecordingActuator::new()).unwrap();

    assert!(game.make_move(Direction::Left));
    game.actuate();

    let snapshot = game.actuator().last().unwrap();
    let merged = snapshot.tile_at(0, 0).unwrap();
    assert_eq!(merged.value, 4);
    assert!(merged.merged_from.is_some());
    assert_eq!(snapshot.metadata.score, 4);
}

#[test]
fn test_moved_tile_remembers_origin() {
    let grid = Grid::from_rows(&[vec![0, 0, 0], vec![0, 0, 0], vec![0, 8, 0]]).unwrap();
    let mut game = GameManager::with_grid(GameConfig::default(), grid, RecordingActuator::new()).unwrap();

    assert!(game.make_move(Direction::Up));

    let snapshot = game.snapshot();
    let moved = snapshot.tile_at(1, 0).unwrap();
    assert_eq!(moved.previous_position, Some(Position::new(1, 2)));
    assert!(moved.merged_from.is_none());
}

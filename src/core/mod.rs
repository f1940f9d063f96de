//! Core module - pure puzzle engine with no I/O
//!
//! Deterministic generation, placement rules and scoring. Everything here is
//! single-threaded and synchronous; the caller owns each session's grid and
//! is responsible for call ordering (never apply a placement without a
//! preceding successful `can_place`).

pub mod grid;
pub mod rng;
pub mod scoring;
pub mod sequence;
pub mod session;
pub mod shapes;

// Re-export commonly used items
pub use grid::{create_grid, Grid, PlacedCells};
pub use rng::{grid_rng, sequence_rng, Mulberry32};
pub use scoring::{calculate_score, get_stars, ScoreResult};
pub use sequence::{generate_tile_sequence, Tile};
pub use session::{GamePhase, GameSession};
pub use shapes::{
    flip_shape, get_shape, rotate_shape, shape_bounds, Shape, ShapeBounds, ShapeKey,
};

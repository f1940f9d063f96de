//! Sequence module - daily tile sequence generation
//!
//! Uses the coverage-budget policy: the sequence's total footprint is
//! budgeted against the board's buildable area, so a well-played game can
//! approach full coverage without it being guaranteed. Some puzzles are
//! tighter than others by design.

use crate::core::grid::create_grid;
use crate::core::rng::{grid_rng, sequence_rng};
use crate::core::shapes::{get_shape, Shape, ShapeKey};
use crate::types::{BuildingColor, COLOR_COUNT, COVERAGE_MIN, COVERAGE_SPREAD, MAX_TILES};

/// One drawable tile: a shape footprint plus a building color.
/// Immutable once generated; consumed exactly once (placed or skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub shape: Shape,
    pub color: BuildingColor,
}

/// Generate the daily tile sequence for a puzzle number.
///
/// Pure and deterministic: the terrain is regenerated from the same seed the
/// terrain generator uses, only to count buildable cells, then tiles are
/// drawn from the sequence stream until the coverage budget is met or the
/// tile cap is reached.
pub fn generate_tile_sequence(puzzle_number: u32) -> Vec<Tile> {
    let grid = create_grid(&mut grid_rng(puzzle_number));
    let buildable = grid.buildable_cells();

    let mut rng = sequence_rng(puzzle_number);
    let ratio = COVERAGE_MIN + rng.next_f64() * COVERAGE_SPREAD;
    let budget = (ratio * buildable as f64) as usize;

    let mut tiles = Vec::new();
    let mut covered = 0;
    while covered < budget && tiles.len() < MAX_TILES {
        let key = ShapeKey::ALL[rng.next_below(ShapeKey::ALL.len() as u32) as usize];
        let color = BuildingColor::ALL[rng.next_below(COLOR_COUNT as u32) as usize];
        let shape = get_shape(key);
        covered += shape.len();
        tiles.push(Tile { shape, color });
    }

    tiles
}

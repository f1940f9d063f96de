//! Scoring module - connected-component analysis over a grid snapshot
//!
//! `calculate_score` is a pure function over a grid snapshot: it is called
//! after every placement for the live HUD and once more for the final
//! result, with an identical algorithm. Total work is O(ROWS x COLS): the
//! tally pass visits every cell once and each color's component search
//! visits each cell of that color at most once.

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::types::{
    BuildingColor, Terrain, COLOR_COUNT, COLS, GRID_SIZE, ROCK_WEIGHT, ROWS, SKIP_PENALTY,
    STAR_THRESHOLDS, TREE_WEIGHT,
};

/// Score breakdown for a grid snapshot.
/// Derived and read-only; the grid itself stays the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub total: i32,
    /// Largest connected group per color, indexed by `BuildingColor::index`
    pub groups: [u32; COLOR_COUNT],
    pub trees_uncovered: u32,
    pub rocks_uncovered: u32,
    /// Uncovered empty cells; reported for display, not part of the total
    pub empty_uncovered: u32,
    pub skipped: u32,
}

impl ScoreResult {
    /// Largest connected group size for one color
    pub fn group(&self, color: BuildingColor) -> u32 {
        self.groups[color.index()]
    }
}

/// Calculate the full score breakdown for a grid snapshot.
///
/// total = sum of each color's largest connected group
///       + uncovered trees * TREE_WEIGHT
///       - uncovered rocks * ROCK_WEIGHT
///       - skipped tiles * SKIP_PENALTY
pub fn calculate_score(grid: &Grid, skipped_count: u32) -> ScoreResult {
    let mut trees_uncovered = 0;
    let mut rocks_uncovered = 0;
    let mut empty_uncovered = 0;

    for cell in grid.cells() {
        if cell.building.is_some() {
            continue;
        }
        match cell.terrain {
            Terrain::Tree => trees_uncovered += 1,
            Terrain::Rock => rocks_uncovered += 1,
            Terrain::Empty => empty_uncovered += 1,
            Terrain::River => {}
        }
    }

    let mut groups = [0u32; COLOR_COUNT];
    for color in BuildingColor::ALL {
        groups[color.index()] = largest_group(grid, color);
    }

    let group_score: i32 = groups.iter().map(|&size| size as i32).sum();
    let total = group_score + trees_uncovered as i32 * TREE_WEIGHT
        - rocks_uncovered as i32 * ROCK_WEIGHT
        - skipped_count as i32 * SKIP_PENALTY;

    ScoreResult {
        total,
        groups,
        trees_uncovered,
        rocks_uncovered,
        empty_uncovered,
        skipped: skipped_count,
    }
}

/// Size of the largest 4-connected group of cells built in `color`.
/// Only the single largest component counts, not the sum of all of them.
fn largest_group(grid: &Grid, color: BuildingColor) -> u32 {
    let mut visited = [false; GRID_SIZE];
    let mut largest = 0;

    for row in 0..ROWS as i8 {
        for col in 0..COLS as i8 {
            let idx = row as usize * COLS as usize + col as usize;
            if visited[idx] || grid.building(row, col) != Some(color) {
                continue;
            }

            // Flood fill from this seed cell.
            let mut stack: ArrayVec<(i8, i8), GRID_SIZE> = ArrayVec::new();
            visited[idx] = true;
            stack.push((row, col));
            let mut size = 0;

            while let Some((cur_row, cur_col)) = stack.pop() {
                size += 1;
                for (next_row, next_col) in Grid::neighbors(cur_row, cur_col) {
                    let next_idx = next_row as usize * COLS as usize + next_col as usize;
                    if !visited[next_idx] && grid.building(next_row, next_col) == Some(color) {
                        visited[next_idx] = true;
                        stack.push((next_row, next_col));
                    }
                }
            }

            largest = largest.max(size);
        }
    }

    largest
}

/// Map a total score to a 0-5 star rating via fixed thresholds
pub fn get_stars(total: i32) -> u8 {
    for (i, &min) in STAR_THRESHOLDS.iter().enumerate() {
        if total >= min {
            return (5 - i) as u8;
        }
    }
    0
}

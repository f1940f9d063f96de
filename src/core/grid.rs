//! Grid module - terrain generation and tile placement
//!
//! The grid is ROWS x COLS (10x7). Each cell carries a terrain type fixed at
//! generation time and an optional building color set exactly once when a
//! tile covers it. Uses a flat array for cache locality.
//! Coordinates: (row, col) with row 0 at the top.

use arrayvec::ArrayVec;

use crate::core::rng::Mulberry32;
use crate::core::shapes::Shape;
use crate::types::{
    BuildingColor, Cell, Terrain, COLS, GRID_SIZE, MAX_FEATURE_ATTEMPTS, MAX_SHAPE_CELLS,
    RIVER_CLAMP_MAX, RIVER_CLAMP_MIN, RIVER_START_MIN, RIVER_START_SPREAD, ROCKS_MIN,
    ROCKS_SPREAD, ROWS, TREES_MIN, TREES_SPREAD,
};

/// Absolute grid coordinates covered by one placed tile
pub type PlacedCells = ArrayVec<(i8, i8), MAX_SHAPE_CELLS>;

/// The puzzle grid - 10 rows x 7 cols using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a grid with all-empty terrain and no buildings
    pub fn new() -> Self {
        Self {
            cells: [Cell::empty(); GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= ROWS as i8 || col < 0 || col >= COLS as i8 {
            return None;
        }
        Some((row as usize) * (COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        ROWS
    }

    pub fn cols(&self) -> u8 {
        COLS
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Terrain at (row, col), if in bounds
    pub fn terrain(&self, row: i8, col: i8) -> Option<Terrain> {
        self.get(row, col).map(|cell| cell.terrain)
    }

    /// Building at (row, col); None when out of bounds or unbuilt
    pub fn building(&self, row: i8, col: i8) -> Option<BuildingColor> {
        self.get(row, col).and_then(|cell| cell.building)
    }

    fn set_terrain(&mut self, row: i8, col: i8, terrain: Terrain) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx].terrain = terrain;
                true
            }
            None => false,
        }
    }

    /// 4-directional in-bounds neighbors of a cell
    pub fn neighbors(row: i8, col: i8) -> ArrayVec<(i8, i8), 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row < ROWS as i8 - 1 {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col < COLS as i8 - 1 {
            result.push((row, col + 1));
        }
        result
    }

    /// Whether any cell on the grid has a building
    pub fn has_any_building(&self) -> bool {
        self.cells.iter().any(|cell| cell.building.is_some())
    }

    /// Number of buildable (non-river) cells
    pub fn buildable_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.terrain != Terrain::River)
            .count()
    }

    /// Check whether a tile shape can be placed at the given anchor.
    ///
    /// Rejects out-of-bounds cells, overlap with existing buildings and river
    /// terrain. The first tile of a game must touch the river; every later
    /// tile must touch an existing building, so the city grows outward from
    /// the river.
    pub fn can_place(&self, shape: &Shape, anchor_row: i8, anchor_col: i8) -> bool {
        for &(dr, dc) in shape {
            let row = anchor_row + dr;
            let col = anchor_col + dc;
            let Some(cell) = self.get(row, col) else {
                return false;
            };
            if cell.building.is_some() || cell.terrain == Terrain::River {
                return false;
            }
        }

        if self.has_any_building() {
            self.touches_building(shape, anchor_row, anchor_col)
        } else {
            self.touches_river(shape, anchor_row, anchor_col)
        }
    }

    fn touches_river(&self, shape: &Shape, anchor_row: i8, anchor_col: i8) -> bool {
        shape.iter().any(|&(dr, dc)| {
            Self::neighbors(anchor_row + dr, anchor_col + dc)
                .iter()
                .any(|&(nr, nc)| self.terrain(nr, nc) == Some(Terrain::River))
        })
    }

    fn touches_building(&self, shape: &Shape, anchor_row: i8, anchor_col: i8) -> bool {
        shape.iter().any(|&(dr, dc)| {
            Self::neighbors(anchor_row + dr, anchor_col + dc)
                .iter()
                .any(|&(nr, nc)| self.building(nr, nc).is_some())
        })
    }

    /// Place a tile, setting `building = color` on every covered cell, and
    /// return the absolute coordinates affected.
    ///
    /// Must only be called after `can_place` returns true; covered cells that
    /// fall outside the grid are skipped as a guard.
    pub fn place_tile(
        &mut self,
        shape: &Shape,
        anchor_row: i8,
        anchor_col: i8,
        color: BuildingColor,
    ) -> PlacedCells {
        let mut placed = PlacedCells::new();
        for &(dr, dc) in shape {
            let row = anchor_row + dr;
            let col = anchor_col + dc;
            if let Some(idx) = Self::index(row, col) {
                self.cells[idx].building = Some(color);
                placed.push((row, col));
            }
        }
        placed
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major cell vector, used by the persistence records
    pub fn to_cells(&self) -> Vec<Cell> {
        self.cells.to_vec()
    }

    /// Rebuild a grid from a row-major cell vector.
    /// Returns None unless exactly ROWS x COLS cells are provided.
    pub fn from_cells(cells: &[Cell]) -> Option<Self> {
        if cells.len() != GRID_SIZE {
            return None;
        }
        let mut grid = Self::new();
        grid.cells.copy_from_slice(cells);
        Some(grid)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the terrain for one puzzle: a contiguous top-to-bottom river,
/// then rocks and trees scattered onto empty cells.
pub fn create_grid(rng: &mut Mulberry32) -> Grid {
    let mut grid = Grid::new();

    place_river(&mut grid, rng);

    let num_rocks = ROCKS_MIN + rng.next_below(ROCKS_SPREAD);
    place_features(&mut grid, Terrain::Rock, num_rocks, rng);

    let num_trees = TREES_MIN + rng.next_below(TREES_SPREAD);
    place_features(&mut grid, Terrain::Tree, num_trees, rng);

    grid
}

/// Lay a single-column-wide river from the top row to the bottom, drifting
/// by at most one column per row and never touching the outer columns.
fn place_river(grid: &mut Grid, rng: &mut Mulberry32) {
    let mut col = RIVER_START_MIN + rng.next_below(RIVER_START_SPREAD) as i8;
    for row in 0..ROWS as i8 {
        grid.set_terrain(row, col, Terrain::River);
        let drift = rng.next_below(3) as i8 - 1;
        col = (col + drift).clamp(RIVER_CLAMP_MIN, RIVER_CLAMP_MAX);
    }
}

/// Scatter `count` features onto empty cells via bounded rejection sampling.
/// A shortfall when the attempt budget runs out is accepted silently.
fn place_features(grid: &mut Grid, terrain: Terrain, count: u32, rng: &mut Mulberry32) {
    let mut placed = 0;
    let mut attempts = 0;
    while placed < count && attempts < MAX_FEATURE_ATTEMPTS {
        let row = rng.next_below(ROWS as u32) as i8;
        let col = rng.next_below(COLS as u32) as i8;
        if grid.terrain(row, col) == Some(Terrain::Empty) {
            grid.set_terrain(row, col, terrain);
            placed += 1;
        }
        attempts += 1;
    }
}

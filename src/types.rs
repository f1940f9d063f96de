//! Core types shared across the engine
//! Pure data types and tuning constants with no game logic

use serde::{Deserialize, Serialize};

/// Grid dimensions
pub const ROWS: u8 = 10;
pub const COLS: u8 = 7;

/// Total number of cells on the grid
pub const GRID_SIZE: usize = (ROWS as usize) * (COLS as usize);

/// River generation: start column band and meander clamp.
/// The river starts at `RIVER_START_MIN + [0, RIVER_START_SPREAD)` and each
/// row drifts by -1/0/+1, clamped to `[RIVER_CLAMP_MIN, RIVER_CLAMP_MAX]`.
pub const RIVER_START_MIN: i8 = 3;
pub const RIVER_START_SPREAD: u32 = 2;
pub const RIVER_CLAMP_MIN: i8 = 2;
pub const RIVER_CLAMP_MAX: i8 = (COLS as i8) - 2;

/// Terrain feature counts: `MIN + [0, SPREAD)` rocks/trees per grid
pub const ROCKS_MIN: u32 = 5;
pub const ROCKS_SPREAD: u32 = 3;
pub const TREES_MIN: u32 = 4;
pub const TREES_SPREAD: u32 = 3;

/// Rejection-sampling bound for terrain feature placement.
/// When exhausted the generator accepts fewer features.
pub const MAX_FEATURE_ATTEMPTS: u32 = 100;

/// Maximum cells in a single tile shape
pub const MAX_SHAPE_CELLS: usize = 5;

/// Tile sequence generation: hard cap on tiles per puzzle, and the target
/// coverage ratio band `[COVERAGE_MIN, COVERAGE_MIN + COVERAGE_SPREAD)` of
/// buildable (non-river) cells.
pub const MAX_TILES: usize = 25;
pub const COVERAGE_MIN: f64 = 0.90;
pub const COVERAGE_SPREAD: f64 = 0.10;

/// Score weights
pub const TREE_WEIGHT: i32 = 2;
pub const ROCK_WEIGHT: i32 = 2;
pub const SKIP_PENALTY: i32 = 2;

/// Display weight for uncovered empty cells in the share breakdown.
/// Not part of the canonical total.
pub const OPEN_FIELD_WEIGHT: i32 = 1;

/// Star rating thresholds: total >= THRESHOLDS[i] earns `5 - i` stars
pub const STAR_THRESHOLDS: [i32; 5] = [50, 40, 30, 20, 1];

/// Terrain of a grid cell, fixed at generation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Empty,
    Rock,
    Tree,
    River,
}

/// Building colors a tile can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingColor {
    Rust,
    Sand,
    Sage,
}

/// Number of building colors
pub const COLOR_COUNT: usize = 3;

impl BuildingColor {
    pub const ALL: [BuildingColor; COLOR_COUNT] = [
        BuildingColor::Rust,
        BuildingColor::Sand,
        BuildingColor::Sage,
    ];

    /// Stable index into per-color tables
    pub fn index(self) -> usize {
        match self {
            BuildingColor::Rust => 0,
            BuildingColor::Sand => 1,
            BuildingColor::Sage => 2,
        }
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rust" => Some(BuildingColor::Rust),
            "sand" => Some(BuildingColor::Sand),
            "sage" => Some(BuildingColor::Sage),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingColor::Rust => "rust",
            BuildingColor::Sand => "sand",
            BuildingColor::Sage => "sage",
        }
    }
}

/// A single grid cell: immutable terrain plus an optional building set once
/// by placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub terrain: Terrain,
    pub building: Option<BuildingColor>,
}

impl Cell {
    pub const fn empty() -> Self {
        Self {
            terrain: Terrain::Empty,
            building: None,
        }
    }

    pub const fn with_terrain(terrain: Terrain) -> Self {
        Self {
            terrain,
            building: None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_roundtrip() {
        for color in BuildingColor::ALL {
            assert_eq!(BuildingColor::from_str(color.as_str()), Some(color));
        }
        assert_eq!(BuildingColor::from_str("RUST"), Some(BuildingColor::Rust));
        assert_eq!(BuildingColor::from_str("plaid"), None);
    }

    #[test]
    fn test_color_indices_are_distinct() {
        let mut seen = [false; COLOR_COUNT];
        for color in BuildingColor::ALL {
            assert!(!seen[color.index()]);
            seen[color.index()] = true;
        }
    }

    #[test]
    fn test_cell_serde_schema_uses_lowercase_tags() {
        let cell = Cell {
            terrain: Terrain::River,
            building: Some(BuildingColor::Rust),
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"terrain":"river","building":"rust"}"#);
    }
}

//! Shapes module - tile footprint catalog and transforms
//!
//! A shape is a set of `(row, col)` offsets relative to an implicit origin,
//! always normalized so the minimum row and minimum column are both 0 and the
//! offsets are sorted. Rotation and flip are pure, total functions over
//! normalized shapes.

use arrayvec::ArrayVec;

use crate::types::MAX_SHAPE_CELLS;

/// Offset of a single cell relative to the shape origin
pub type CellOffset = (i8, i8);

/// A tile footprint - 2 to 5 normalized cell offsets
pub type Shape = ArrayVec<CellOffset, MAX_SHAPE_CELLS>;

/// Named shapes in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKey {
    // Dominoes (2 cells)
    DominoH,
    DominoV,
    // Triominoes (3 cells)
    TriI,
    TriL,
    TriJ,
    // Tetrominoes (4 cells)
    TetI,
    TetO,
    TetT,
    TetS,
    TetZ,
    TetL,
    TetJ,
    // Pentominoes (5 cells)
    PentF,
    PentP,
    PentU,
    PentT,
}

impl ShapeKey {
    pub const ALL: [ShapeKey; 16] = [
        ShapeKey::DominoH,
        ShapeKey::DominoV,
        ShapeKey::TriI,
        ShapeKey::TriL,
        ShapeKey::TriJ,
        ShapeKey::TetI,
        ShapeKey::TetO,
        ShapeKey::TetT,
        ShapeKey::TetS,
        ShapeKey::TetZ,
        ShapeKey::TetL,
        ShapeKey::TetJ,
        ShapeKey::PentF,
        ShapeKey::PentP,
        ShapeKey::PentU,
        ShapeKey::PentT,
    ];

    /// Parse a shape key from its catalog name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "d_h" => Some(ShapeKey::DominoH),
            "d_v" => Some(ShapeKey::DominoV),
            "t_i" => Some(ShapeKey::TriI),
            "t_l" => Some(ShapeKey::TriL),
            "t_j" => Some(ShapeKey::TriJ),
            "tt_i" => Some(ShapeKey::TetI),
            "tt_o" => Some(ShapeKey::TetO),
            "tt_t" => Some(ShapeKey::TetT),
            "tt_s" => Some(ShapeKey::TetS),
            "tt_z" => Some(ShapeKey::TetZ),
            "tt_l" => Some(ShapeKey::TetL),
            "tt_j" => Some(ShapeKey::TetJ),
            "p_f" => Some(ShapeKey::PentF),
            "p_p" => Some(ShapeKey::PentP),
            "p_u" => Some(ShapeKey::PentU),
            "p_t" => Some(ShapeKey::PentT),
            _ => None,
        }
    }

    /// Catalog name of the shape
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKey::DominoH => "d_h",
            ShapeKey::DominoV => "d_v",
            ShapeKey::TriI => "t_i",
            ShapeKey::TriL => "t_l",
            ShapeKey::TriJ => "t_j",
            ShapeKey::TetI => "tt_i",
            ShapeKey::TetO => "tt_o",
            ShapeKey::TetT => "tt_t",
            ShapeKey::TetS => "tt_s",
            ShapeKey::TetZ => "tt_z",
            ShapeKey::TetL => "tt_l",
            ShapeKey::TetJ => "tt_j",
            ShapeKey::PentF => "p_f",
            ShapeKey::PentP => "p_p",
            ShapeKey::PentU => "p_u",
            ShapeKey::PentT => "p_t",
        }
    }

    fn offsets(self) -> &'static [CellOffset] {
        match self {
            ShapeKey::DominoH => &[(0, 0), (0, 1)],
            ShapeKey::DominoV => &[(0, 0), (1, 0)],
            ShapeKey::TriI => &[(0, 0), (0, 1), (0, 2)],
            ShapeKey::TriL => &[(0, 0), (1, 0), (1, 1)],
            ShapeKey::TriJ => &[(0, 0), (0, 1), (1, 0)],
            ShapeKey::TetI => &[(0, 0), (0, 1), (0, 2), (0, 3)],
            ShapeKey::TetO => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            ShapeKey::TetT => &[(0, 0), (0, 1), (0, 2), (1, 1)],
            ShapeKey::TetS => &[(0, 0), (0, 1), (1, 1), (1, 2)],
            ShapeKey::TetZ => &[(0, 1), (0, 2), (1, 0), (1, 1)],
            ShapeKey::TetL => &[(0, 0), (1, 0), (2, 0), (2, 1)],
            ShapeKey::TetJ => &[(0, 1), (1, 1), (2, 0), (2, 1)],
            ShapeKey::PentF => &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
            ShapeKey::PentP => &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)],
            ShapeKey::PentU => &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)],
            ShapeKey::PentT => &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
        }
    }
}

/// Get the normalized shape for a catalog key
pub fn get_shape(key: ShapeKey) -> Shape {
    key.offsets().iter().copied().collect()
}

/// Normalize a shape: shift so min row and min col are 0, then sort so equal
/// shapes compare equal.
///
/// Empty shapes are a caller error guarded at construction time; over any
/// non-empty shape this is total.
pub fn normalize(cells: &mut Shape) {
    debug_assert!(!cells.is_empty(), "shapes must contain at least one cell");
    let min_r = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_c = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
    for cell in cells.iter_mut() {
        cell.0 -= min_r;
        cell.1 -= min_c;
    }
    cells.sort_unstable();
}

/// Rotate a shape 90 degrees clockwise: (r, c) -> (c, -r), then normalize
pub fn rotate_shape(cells: &Shape) -> Shape {
    let mut rotated: Shape = cells.iter().map(|&(r, c)| (c, -r)).collect();
    normalize(&mut rotated);
    rotated
}

/// Flip a shape horizontally (mirror along the vertical axis):
/// (r, c) -> (r, -c), then normalize
pub fn flip_shape(cells: &Shape) -> Shape {
    let mut flipped: Shape = cells.iter().map(|&(r, c)| (r, -c)).collect();
    normalize(&mut flipped);
    flipped
}

/// Bounding box dimensions of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeBounds {
    pub rows: u8,
    pub cols: u8,
}

/// Bounding box of a normalized shape, used by callers for preview layout
/// and drag centering
pub fn shape_bounds(cells: &Shape) -> ShapeBounds {
    let max_r = cells.iter().map(|&(r, _)| r).max().unwrap_or(0);
    let max_c = cells.iter().map(|&(_, c)| c).max().unwrap_or(0);
    ShapeBounds {
        rows: (max_r + 1) as u8,
        cols: (max_c + 1) as u8,
    }
}

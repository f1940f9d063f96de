//! Session module - one play-through of a daily puzzle
//!
//! `GameSession` owns the grid, the tile sequence and the play cursor. The
//! engine itself stays stateless and reentrant: all mutation happens through
//! this aggregate, which the caller owns and passes into each call.
//!
//! Undo is a single-slot snapshot, not a stack: one mistake can be taken
//! back, look-ahead cannot. In hard mode skip and undo are disabled outright
//! and no snapshot is ever captured.

use crate::core::grid::{create_grid, Grid, PlacedCells};
use crate::core::rng::grid_rng;
use crate::core::scoring::{calculate_score, ScoreResult};
use crate::core::sequence::{generate_tile_sequence, Tile};
use crate::core::shapes::{flip_shape, rotate_shape, Shape};
use crate::persist::SavedGame;
use crate::types::BuildingColor;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

/// Single-slot undo snapshot captured before a placement or skip
#[derive(Debug, Clone)]
struct Snapshot {
    grid: Grid,
    current_index: usize,
    skipped_count: u32,
    shape: Shape,
}

/// One game in progress: grid, tile sequence, cursor and undo slot
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle_number: u32,
    grid: Grid,
    sequence: Vec<Tile>,
    /// Index of the tile currently in hand (== next tile to draw on resume)
    current_index: usize,
    /// In-hand shape with rotations/flips applied
    current_shape: Option<Shape>,
    skipped_count: u32,
    hard_mode: bool,
    undo_slot: Option<Snapshot>,
    phase: GamePhase,
}

impl GameSession {
    /// Create a session for a puzzle number. Terrain and tile sequence are
    /// derived deterministically, so every player sees the same game.
    pub fn new(puzzle_number: u32, hard_mode: bool) -> Self {
        Self {
            puzzle_number,
            grid: create_grid(&mut grid_rng(puzzle_number)),
            sequence: generate_tile_sequence(puzzle_number),
            current_index: 0,
            current_shape: None,
            skipped_count: 0,
            hard_mode,
            undo_slot: None,
            phase: GamePhase::NotStarted,
        }
    }

    /// Start the session and draw the first tile
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.phase = GamePhase::InProgress;
        self.load_current_tile();
    }

    pub fn puzzle_number(&self) -> u32 {
        self.puzzle_number
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    pub fn skipped_count(&self) -> u32 {
        self.skipped_count
    }

    /// Index of the tile in hand (one past the last consumed tile)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    /// In-hand shape (with transforms applied) and its color
    pub fn current_tile(&self) -> Option<(&Shape, BuildingColor)> {
        let shape = self.current_shape.as_ref()?;
        let tile = self.sequence.get(self.current_index)?;
        Some((shape, tile.color))
    }

    /// Whether the in-hand tile fits at the given anchor
    pub fn can_place_current(&self, anchor_row: i8, anchor_col: i8) -> bool {
        match self.current_tile() {
            Some((shape, _)) => self.grid.can_place(shape, anchor_row, anchor_col),
            None => false,
        }
    }

    /// Place the in-hand tile. Returns the covered cells, or None if the
    /// placement is invalid or the session is not in progress.
    pub fn place_current(&mut self, anchor_row: i8, anchor_col: i8) -> Option<PlacedCells> {
        if self.phase != GamePhase::InProgress {
            return None;
        }
        let (shape, color) = {
            let (shape, color) = self.current_tile()?;
            (shape.clone(), color)
        };
        if !self.grid.can_place(&shape, anchor_row, anchor_col) {
            return None;
        }

        self.capture_snapshot(&shape);
        let placed = self.grid.place_tile(&shape, anchor_row, anchor_col, color);
        self.advance();
        Some(placed)
    }

    /// Skip the in-hand tile for a score penalty.
    /// Returns false in hard mode or when nothing is in hand.
    pub fn skip_current(&mut self) -> bool {
        if self.hard_mode || self.phase != GamePhase::InProgress {
            return false;
        }
        let Some(shape) = self.current_shape.clone() else {
            return false;
        };

        self.capture_snapshot(&shape);
        self.skipped_count += 1;
        self.advance();
        true
    }

    /// Rotate the in-hand shape 90 degrees clockwise
    pub fn rotate_current(&mut self) -> bool {
        match self.current_shape.as_mut() {
            Some(shape) => {
                *shape = rotate_shape(shape);
                true
            }
            None => false,
        }
    }

    /// Flip the in-hand shape horizontally
    pub fn flip_current(&mut self) -> bool {
        match self.current_shape.as_mut() {
            Some(shape) => {
                *shape = flip_shape(shape);
                true
            }
            None => false,
        }
    }

    /// Restore the snapshot taken before the last placement or skip.
    /// Single-shot: the slot is cleared on use. Returns false when no
    /// snapshot exists (including always in hard mode).
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_slot.take() else {
            return false;
        };
        self.grid = snapshot.grid;
        self.current_index = snapshot.current_index;
        self.skipped_count = snapshot.skipped_count;
        self.current_shape = Some(snapshot.shape);
        self.phase = GamePhase::InProgress;
        true
    }

    /// Finish now. Undrawn tiles are not counted as skipped.
    pub fn end_early(&mut self) {
        self.phase = GamePhase::Finished;
        self.current_shape = None;
        self.undo_slot = None;
    }

    /// Running (or final) score for the current grid
    pub fn score(&self) -> ScoreResult {
        calculate_score(&self.grid, self.skipped_count)
    }

    /// Serializable record of this in-progress session
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            puzzle_number: self.puzzle_number,
            grid: self.grid.to_cells(),
            current_tile_index: self.current_index,
            skipped_count: self.skipped_count,
            hard_mode: self.hard_mode,
        }
    }

    /// Rebuild a session from a saved record. The tile sequence is
    /// regenerated from the puzzle number; the saved grid must have the
    /// exact board dimensions or the record is treated as unusable.
    pub fn resume(saved: &SavedGame) -> Option<Self> {
        let grid = Grid::from_cells(&saved.grid)?;
        let sequence = generate_tile_sequence(saved.puzzle_number);

        let mut session = Self {
            puzzle_number: saved.puzzle_number,
            grid,
            sequence,
            current_index: saved.current_tile_index,
            current_shape: None,
            skipped_count: saved.skipped_count,
            hard_mode: saved.hard_mode,
            undo_slot: None,
            phase: GamePhase::InProgress,
        };
        session.load_current_tile();
        Some(session)
    }

    fn capture_snapshot(&mut self, shape: &Shape) {
        if self.hard_mode {
            return;
        }
        self.undo_slot = Some(Snapshot {
            grid: self.grid.clone(),
            current_index: self.current_index,
            skipped_count: self.skipped_count,
            shape: shape.clone(),
        });
    }

    fn advance(&mut self) {
        self.current_index += 1;
        self.load_current_tile();
    }

    fn load_current_tile(&mut self) {
        match self.sequence.get(self.current_index) {
            Some(tile) => {
                self.current_shape = Some(tile.shape.clone());
            }
            None => {
                self.phase = GamePhase::Finished;
                self.current_shape = None;
            }
        }
    }
}

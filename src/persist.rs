//! Persistence records - schema for the caller's storage layer
//!
//! The engine does no I/O itself; it defines the serializable records the
//! storage layer reads and writes, plus the stats bookkeeping rules. Field
//! names stay camelCase so records written by earlier clients keep loading.
//!
//! Decoding is tolerant by design: malformed or missing state means "no
//! saved state" and the caller falls back to fresh generation. Nothing here
//! is fatal.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::Cell;

/// Number of recent per-puzzle scores retained in the stats record
pub const SCORE_HISTORY_LIMIT: usize = 30;

/// In-progress game record, enough to resume mid-puzzle.
/// `current_tile_index` is the index of the next tile to draw (one past the
/// last consumed tile).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub puzzle_number: u32,
    pub grid: Vec<Cell>,
    pub current_tile_index: usize,
    pub skipped_count: u32,
    #[serde(default)]
    pub hard_mode: bool,
}

/// Completed game record, kept so a finished board can be redisplayed
/// without replaying the generated sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGame {
    pub puzzle_number: u32,
    pub grid: Vec<Cell>,
    pub skipped_count: u32,
}

/// One entry in the recent-score history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub puzzle: u32,
    pub score: i32,
}

/// Aggregate lifetime stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub games_played: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub best_score: i32,
    pub total_score: i64,
    /// Last recorded puzzle number, -1 before any game
    pub last_puzzle: i64,
    /// Last `SCORE_HISTORY_LIMIT` scores
    pub scores: Vec<ScoreEntry>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            games_played: 0,
            current_streak: 0,
            max_streak: 0,
            best_score: 0,
            total_score: 0,
            last_puzzle: -1,
            scores: Vec::new(),
        }
    }
}

impl Stats {
    /// Record a completed game.
    ///
    /// The streak increments only when the new puzzle number is exactly one
    /// greater than the last recorded (or this is the first game); replaying
    /// the same puzzle leaves the streak alone; any other gap resets it to 1.
    pub fn record_game(&mut self, puzzle_number: u32, score: i32) {
        self.games_played += 1;
        self.total_score += score as i64;

        if score > self.best_score {
            self.best_score = score;
        }

        if self.last_puzzle == puzzle_number as i64 - 1 || self.last_puzzle == -1 {
            self.current_streak += 1;
        } else if self.last_puzzle != puzzle_number as i64 {
            self.current_streak = 1;
        }
        self.last_puzzle = puzzle_number as i64;

        if self.current_streak > self.max_streak {
            self.max_streak = self.current_streak;
        }

        self.scores.push(ScoreEntry {
            puzzle: puzzle_number,
            score,
        });
        if self.scores.len() > SCORE_HISTORY_LIMIT {
            let excess = self.scores.len() - SCORE_HISTORY_LIMIT;
            self.scores.drain(..excess);
        }
    }

    /// Whether a puzzle already appears in the score history
    pub fn has_completed(&self, puzzle_number: u32) -> bool {
        self.scores.iter().any(|entry| entry.puzzle == puzzle_number)
    }

    /// Mean score across recorded games, rounded to nearest
    pub fn average_score(&self) -> i32 {
        if self.games_played == 0 {
            return 0;
        }
        let n = self.games_played as i64;
        // Round half away from zero, matching integer display expectations.
        let total = self.total_score;
        ((total + total.signum() * n / 2) / n) as i32
    }
}

/// Encode a record to its storage string
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode a record from storage. Malformed input is treated as no saved
/// state, never an error.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

//! Bird City - deterministic daily tile-placement puzzle engine.
//!
//! A fixed 10x7 grid gets terrain (river, rocks, trees) and an ordered tile
//! sequence generated from the day's puzzle number, so every player sees the
//! same board and tiles. Placement grows the city outward from the river;
//! scoring runs connected-component analysis per building color.
//!
//! The engine is presentation-free: rendering, input and storage are
//! external callers driven entirely by the return values of `core`, with
//! `persist` defining the records the storage layer keeps.

pub mod core;
pub mod daily;
pub mod persist;
pub mod share;
pub mod types;

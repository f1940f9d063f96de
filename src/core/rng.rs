//! RNG module - seeded mulberry32 generator
//!
//! Every piece of daily generation (terrain and tile sequence) is driven by
//! this generator so that all players of a given puzzle number see the same
//! board and the same tiles. Two independent streams are derived from one
//! puzzle number via distinct affine transforms of the seed, keeping terrain
//! and tile order decorrelated.
//!
//! mulberry32 is pure 32-bit integer arithmetic, so the sequence is stable
//! across platforms.

/// Seed transform for the tile sequence stream
pub const SEQUENCE_SEED_MULT: u32 = 31337;

/// Seed transform for the terrain stream
pub const TERRAIN_SEED_MULT: u32 = 7919;
pub const TERRAIN_SEED_OFFSET: u32 = 42;

/// mulberry32 PRNG
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate the next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a random float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Generate a random value in [0, max)
    pub fn next_below(&mut self, max: u32) -> u32 {
        (self.next_f64() * max as f64) as u32
    }
}

/// RNG stream for the terrain of a puzzle number
pub fn grid_rng(puzzle_number: u32) -> Mulberry32 {
    Mulberry32::new(
        puzzle_number
            .wrapping_mul(TERRAIN_SEED_MULT)
            .wrapping_add(TERRAIN_SEED_OFFSET),
    )
}

/// RNG stream for the tile sequence of a puzzle number
pub fn sequence_rng(puzzle_number: u32) -> Mulberry32 {
    Mulberry32::new(puzzle_number.wrapping_mul(SEQUENCE_SEED_MULT))
}

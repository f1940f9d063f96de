//! Daily module - puzzle numbering
//!
//! The puzzle number is the day index since a fixed epoch, computed against
//! the player's local midnight so everyone in a timezone rolls over together.
//! Alternate daily boards add a large per-variant offset so their seed space
//! never collides with the main sequence.

/// Milliseconds per day
pub const DAY_MS: i64 = 86_400_000;

/// Days from the unix epoch to 2025-01-01, the first puzzle's day
pub const EPOCH_DAY: i64 = 20_089;

/// Seed-space offset between board variants
pub const VARIANT_OFFSET: u32 = 100_000;

/// Puzzle number for a moment in time.
///
/// `unix_ms` is milliseconds since the unix epoch (UTC); `tz_offset_min` is
/// the local offset from UTC in minutes (positive east). Days before the
/// fixed epoch clamp to puzzle 0.
pub fn puzzle_number(unix_ms: i64, tz_offset_min: i32) -> u32 {
    let local_ms = unix_ms + tz_offset_min as i64 * 60_000;
    let day = local_ms.div_euclid(DAY_MS) - EPOCH_DAY;
    day.max(0) as u32
}

/// Puzzle number for a board variant. Variant 1 is the main daily board;
/// each extra board shifts the seed space by `VARIANT_OFFSET`.
pub fn variant_puzzle_number(base: u32, variant: u32) -> u32 {
    base + variant.saturating_sub(1) * VARIANT_OFFSET
}

/// Day number for display, with any variant offset stripped
pub fn display_day(puzzle_number: u32) -> u32 {
    if puzzle_number > VARIANT_OFFSET {
        puzzle_number % VARIANT_OFFSET
    } else {
        puzzle_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_zero_on_epoch_day() {
        // 2025-01-01T00:00:00Z
        let epoch_ms = EPOCH_DAY * DAY_MS;
        assert_eq!(puzzle_number(epoch_ms, 0), 0);
        assert_eq!(puzzle_number(epoch_ms + DAY_MS - 1, 0), 0);
        assert_eq!(puzzle_number(epoch_ms + DAY_MS, 0), 1);
    }

    #[test]
    fn test_local_midnight_rollover() {
        let epoch_ms = EPOCH_DAY * DAY_MS;
        // One hour before UTC midnight, in a UTC+2 zone: already the next day.
        let t = epoch_ms + DAY_MS - 3_600_000;
        assert_eq!(puzzle_number(t, 0), 0);
        assert_eq!(puzzle_number(t, 120), 1);
        // In a UTC-5 zone the previous day still applies at 02:00 UTC.
        assert_eq!(puzzle_number(epoch_ms + 2 * 3_600_000, -300), 0);
    }

    #[test]
    fn test_pre_epoch_clamps_to_zero() {
        assert_eq!(puzzle_number(0, 0), 0);
        assert_eq!(puzzle_number(-DAY_MS, 0), 0);
    }

    #[test]
    fn test_variant_offsets_never_collide() {
        let base = 420;
        assert_eq!(variant_puzzle_number(base, 1), 420);
        assert_eq!(variant_puzzle_number(base, 2), 100_420);
        assert_eq!(variant_puzzle_number(base, 3), 200_420);
    }

    #[test]
    fn test_display_day_strips_offset() {
        assert_eq!(display_day(420), 420);
        assert_eq!(display_day(100_420), 420);
        assert_eq!(display_day(200_420), 420);
    }
}

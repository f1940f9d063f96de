//! Share module - result summary text
//!
//! Builds the copyable end-of-game summary: title line, star row and a
//! compact emoji breakdown of the score terms. Pure string construction;
//! clipboards and share sheets belong to the caller.

use crate::core::grid::Grid;
use crate::core::scoring::{calculate_score, get_stars};
use crate::daily::display_day;
use crate::types::{BuildingColor, OPEN_FIELD_WEIGHT, ROCK_WEIGHT, SKIP_PENALTY, TREE_WEIGHT};

const SITE_URL: &str = "bird-city.janschill.de";

fn color_emoji(color: BuildingColor) -> &'static str {
    match color {
        BuildingColor::Rust => "\u{1F7E7}",
        BuildingColor::Sand => "\u{1F7E8}",
        BuildingColor::Sage => "\u{1F7E9}",
    }
}

/// Build the share text for a finished board.
///
/// `board_variant` is 1 for the main daily board, 2+ for extra boards.
pub fn share_text(
    grid: &Grid,
    puzzle_number: u32,
    board_variant: u32,
    skipped_count: u32,
    hard_mode: bool,
) -> String {
    let result = calculate_score(grid, skipped_count);
    let stars = get_stars(result.total);

    let mut star_row = String::new();
    for _ in 0..stars {
        star_row.push('\u{2B50}');
    }
    for _ in stars..5 {
        star_row.push('\u{2606}');
    }

    let label = if board_variant > 1 {
        format!(" (Extra #{})", board_variant - 1)
    } else {
        String::new()
    };
    let hard_label = if hard_mode { " \u{1F525}" } else { "" };

    let mut breakdown = String::new();
    for color in BuildingColor::ALL {
        let group = result.group(color);
        if group > 0 {
            breakdown.push_str(&format!("{}+{} ", color_emoji(color), group));
        }
    }
    if result.trees_uncovered > 0 {
        breakdown.push_str(&format!(
            "\u{1F332}+{} ",
            result.trees_uncovered as i32 * TREE_WEIGHT
        ));
    }
    if result.rocks_uncovered > 0 {
        breakdown.push_str(&format!(
            "\u{1FAA8}-{} ",
            result.rocks_uncovered as i32 * ROCK_WEIGHT
        ));
    }
    if result.empty_uncovered > 0 {
        breakdown.push_str(&format!(
            "\u{1F7EB}-{} ",
            result.empty_uncovered as i32 * OPEN_FIELD_WEIGHT
        ));
    }
    if result.skipped > 0 {
        breakdown.push_str(&format!(
            "\u{1F6AB}-{}",
            result.skipped as i32 * SKIP_PENALTY
        ));
    }
    let breakdown = breakdown.trim_end();

    format!(
        "Bird City #{}{}{} \u{1F3D9}\u{FE0F}\n{} {}pts\n{}\n{}",
        display_day(puzzle_number),
        label,
        hard_label,
        star_row,
        result.total,
        breakdown,
        SITE_URL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::{get_shape, ShapeKey};
    use crate::types::{Cell, Terrain, COLS, GRID_SIZE, ROWS};

    fn played_grid() -> Grid {
        let mut cells = vec![Cell::empty(); GRID_SIZE];
        for row in 0..ROWS as usize {
            cells[row * COLS as usize + 3].terrain = Terrain::River;
        }
        cells[5 * COLS as usize + 5].terrain = Terrain::Rock;
        let mut grid = Grid::from_cells(&cells).unwrap();
        grid.place_tile(&get_shape(ShapeKey::TetO), 0, 1, BuildingColor::Rust);
        grid
    }

    #[test]
    fn test_share_text_layout() {
        let text = share_text(&played_grid(), 42, 1, 1, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Bird City #42"));
        assert!(!lines[0].contains("Extra"));
        assert!(lines[1].ends_with("pts"));
        // Rust group of 4, one rock, skips and open fields all appear.
        assert!(lines[2].contains("\u{1F7E7}+4"));
        assert!(lines[2].contains("\u{1FAA8}-2"));
        assert!(lines[2].contains("\u{1F6AB}-2"));
        assert_eq!(lines[3], SITE_URL);
    }

    #[test]
    fn test_share_text_variant_and_hard_mode() {
        let text = share_text(&played_grid(), 100_042, 2, 0, true);
        let title = text.lines().next().unwrap();
        // Variant offset stripped for display, extra board labeled.
        assert!(title.starts_with("Bird City #42 (Extra #1)"));
        assert!(title.contains('\u{1F525}'));
        // No skip marker when nothing was skipped.
        assert!(!text.contains('\u{1F6AB}'));
    }

    #[test]
    fn test_star_row_always_five_symbols() {
        let text = share_text(&played_grid(), 1, 1, 0, false);
        let star_row = text.lines().nth(1).unwrap();
        let stars: String = star_row.chars().take_while(|c| !c.is_ascii()).collect();
        assert_eq!(stars.chars().count(), 5);
    }
}

use glyph_engine::{Cell, Color, Grid, GridStore, MagicWandOptions, Position, magic_wand};
use pretty_assertions::assert_eq;

use crate::grid_with;

fn glyph_only(contiguous: bool) -> MagicWandOptions {
    MagicWandOptions {
        match_glyph: true,
        match_foreground: false,
        match_background: false,
        contiguous,
    }
}

#[test]
fn test_contiguous_run_excludes_isolated_match() {
    let grid = grid_with((5, 1), &[((0, 0), '*'), ((1, 0), '*'), ((2, 0), '*'), ((4, 0), '*')]);
    let mask = magic_wand::select(&grid, Position::new(0, 0), &glyph_only(true));
    assert_eq!(mask.sorted_positions(), vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]);
}

#[test]
fn test_global_includes_isolated_match() {
    let grid = grid_with((5, 1), &[((0, 0), '*'), ((1, 0), '*'), ((2, 0), '*'), ((3, 0), '-'), ((4, 0), '*')]);
    let mask = magic_wand::select(&grid, Position::new(0, 0), &glyph_only(false));
    assert_eq!(
        mask.sorted_positions(),
        vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0), Position::new(4, 0)]
    );
}

#[test]
fn test_contiguous_is_four_connected() {
    // diagonal neighbours don't connect
    let grid = grid_with((3, 3), &[((0, 0), '#'), ((1, 1), '#'), ((2, 2), '#')]);
    let mask = magic_wand::select(&grid, Position::new(1, 1), &glyph_only(true));
    assert_eq!(mask.sorted_positions(), vec![Position::new(1, 1)]);
}

#[test]
fn test_match_by_background_ignores_glyph() {
    let blue = Color::new(0, 0, 255);
    let mut grid = Grid::new((4, 1));
    grid.set(Position::new(0, 0), Cell::new('a', Color::WHITE, blue));
    grid.set(Position::new(1, 0), Cell::new('b', Color::WHITE, blue));
    grid.set(Position::new(2, 0), Cell::new('c', Color::WHITE, Color::BLACK));
    grid.set(Position::new(3, 0), Cell::new('d', Color::WHITE, blue));

    let options = MagicWandOptions {
        match_glyph: false,
        match_foreground: false,
        match_background: true,
        contiguous: true,
    };
    let mask = magic_wand::select(&grid, Position::new(1, 0), &options);
    assert_eq!(mask.sorted_positions(), vec![Position::new(0, 0), Position::new(1, 0)]);

    let global = magic_wand::select(&grid, Position::new(1, 0), &MagicWandOptions { contiguous: false, ..options });
    assert_eq!(global.len(), 3);
}

#[test]
fn test_contiguous_fill_terminates_on_large_region() {
    let mut grid = Grid::new((64, 64));
    for y in 0..64 {
        for x in 0..64 {
            grid.set(Position::new(x, y), Cell::from('.'));
        }
    }
    let mask = magic_wand::select(&grid, Position::new(10, 10), &glyph_only(true));
    assert_eq!(mask.len(), 64 * 64);
}

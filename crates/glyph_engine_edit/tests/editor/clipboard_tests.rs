//! Tests for copy, cut and the per kind clipboard slots

use glyph_engine_edit::{Clipboard, GridStore, Position, SelectionKind, SelectionMask, SelectionTool};
use pretty_assertions::assert_eq;

use crate::{create_test_state, drag, glyph, grid_with};

#[test]
fn test_copy_normalizes_to_selection_corner() {
    let grid = grid_with((6, 6), &[((2, 3), 'a'), ((4, 4), 'b')]);
    let mut clipboard = Clipboard::new();
    assert!(clipboard.copy(SelectionKind::Rectangle, &grid, &SelectionMask::from_rectangle((2, 3), (4, 4))));

    let entry = clipboard.entry(SelectionKind::Rectangle).unwrap();
    assert_eq!(entry.original_position, Position::new(2, 3));
    assert_eq!(entry.data.get(&Position::new(0, 0)).map(|c| c.glyph), Some('a'));
    assert_eq!(entry.data.get(&Position::new(2, 1)).map(|c| c.glyph), Some('b'));
    // empty cells inside the selection aren't stored
    assert_eq!(entry.data.len(), 2);
    assert_eq!(clipboard.active_kind(), Some(SelectionKind::Rectangle));
}

#[test]
fn test_paste_at_original_position_round_trips() {
    let grid = grid_with((6, 6), &[((1, 1), 'x'), ((2, 1), 'y'), ((1, 3), 'z')]);
    let mask = SelectionMask::from_rectangle((1, 1), (2, 3));
    let mut clipboard = Clipboard::new();
    clipboard.copy(SelectionKind::Lasso, &grid, &mask);

    let origin = clipboard.entry(SelectionKind::Lasso).unwrap().original_position;
    let pasted = clipboard.paste(None, origin).unwrap();
    let expected: std::collections::HashMap<_, _> = mask.iter().filter_map(|pos| grid.get(*pos).map(|cell| (*pos, cell))).collect();
    assert_eq!(pasted, expected);
}

#[test]
fn test_slots_are_independent() {
    let grid = grid_with((4, 4), &[((0, 0), 'r'), ((3, 3), 'l')]);
    let mut clipboard = Clipboard::new();
    clipboard.copy(SelectionKind::Rectangle, &grid, &SelectionMask::from_rectangle((0, 0), (0, 0)));
    clipboard.copy(SelectionKind::Lasso, &grid, &SelectionMask::from_rectangle((3, 3), (3, 3)));

    let rect = clipboard.paste(Some(SelectionKind::Rectangle), Position::new(1, 1)).unwrap();
    assert_eq!(rect.get(&Position::new(1, 1)).map(|c| c.glyph), Some('r'));
    let lasso = clipboard.paste(None, Position::new(1, 1)).unwrap();
    assert_eq!(lasso.get(&Position::new(1, 1)).map(|c| c.glyph), Some('l'));
    assert!(clipboard.paste(Some(SelectionKind::MagicWand), Position::new(0, 0)).is_none());
}

#[test]
fn test_empty_active_slot_falls_back_to_precedence() {
    let grid = grid_with((4, 4), &[((0, 0), 'r')]);
    let mut clipboard = Clipboard::new();
    clipboard.copy(SelectionKind::Rectangle, &grid, &SelectionMask::from_rectangle((0, 0), (0, 0)));
    // a wand selection over empty cells copies nothing populated
    clipboard.copy(SelectionKind::MagicWand, &grid, &SelectionMask::from_rectangle((2, 2), (3, 3)));
    assert_eq!(clipboard.active_kind(), Some(SelectionKind::MagicWand));

    let resolved = clipboard.paste(None, Position::new(0, 0)).unwrap();
    assert_eq!(resolved.get(&Position::new(0, 0)).map(|c| c.glyph), Some('r'));
    assert!(clipboard.paste(Some(SelectionKind::MagicWand), Position::new(0, 0)).is_none());
}

#[test]
fn test_edit_state_copy_returns_text() {
    let mut state = create_test_state((6, 3), &[((1, 0), 'h'), ((2, 0), 'i'), ((1, 1), '!')]);
    drag(&mut state, (1, 0), (3, 1));

    let text = state.copy().unwrap();
    assert_eq!(text.as_deref(), Some("hi\n!"));
    assert!(state.clipboard().has_clipboard());
    // copying never touches the grid or the history
    assert_eq!(glyph(&state, 1, 0), Some('h'));
    assert!(state.history().is_empty());
}

#[test]
fn test_copy_without_selection() {
    let mut state = create_test_state((3, 3), &[((0, 0), 'a')]);
    assert_eq!(state.copy().unwrap(), None);
    assert!(!state.clipboard().has_clipboard());
}

#[test]
fn test_cut_clears_cells_in_one_step() {
    let mut state = create_test_state((4, 4), &[((0, 0), 'a'), ((1, 0), 'b'), ((3, 3), 'c')]);
    drag(&mut state, (0, 0), (1, 0));

    assert_eq!(state.cut().unwrap().as_deref(), Some("ab"));
    assert_eq!(glyph(&state, 0, 0), None);
    assert_eq!(glyph(&state, 1, 0), None);
    assert_eq!(glyph(&state, 3, 3), Some('c'));
    assert_eq!(state.history().len(), 1);

    state.undo().unwrap();
    assert_eq!(glyph(&state, 0, 0), Some('a'));
}

#[test]
fn test_copy_uses_slot_of_selection_tool() {
    let mut state = create_test_state((4, 4), &[((1, 1), '*'), ((2, 1), '*')]);
    state.set_tool(SelectionTool::MagicWand).unwrap();
    state.pointer_down(Position::new(1, 1), glyph_engine_edit::PointerButton::Left).unwrap();
    state.pointer_up(Position::new(1, 1));

    state.copy().unwrap();
    let entry = state.clipboard().entry(SelectionKind::MagicWand).unwrap();
    assert_eq!(entry.data.len(), 2);
    assert!(state.clipboard().entry(SelectionKind::Rectangle).is_none());
}

//! Tests for moving selected content

use glyph_engine_edit::{EditKey, GridStore, MoveState, PointerButton, Position, SelectionMask};
use pretty_assertions::assert_eq;

use crate::{block_state, drag, glyph, grid_with};

fn block_mask() -> SelectionMask {
    SelectionMask::from_rectangle((1, 1), (2, 2))
}

// ============================================================================
// Move Compositor
// ============================================================================

#[test]
fn test_move_block_scenario() {
    let mut grid = grid_with((5, 5), &[((1, 1), '#'), ((2, 1), '#'), ((1, 2), '#'), ((2, 2), '#')]);
    let mut state = MoveState::begin(&block_mask(), &grid, Position::new(1, 1));
    state.update(Position::new(3, 3));
    assert_eq!(state.current_offset(), Position::new(2, 2));

    state.commit(&mut grid).unwrap();

    for pos in [(3, 3), (3, 4), (4, 3), (4, 4)] {
        assert_eq!(grid.glyph_at(pos), Some('#'), "expected # at {pos:?}");
    }
    for pos in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        assert_eq!(grid.glyph_at(pos), None, "expected empty cell at {pos:?}");
    }
    assert_eq!(grid.len(), 4);
}

#[test]
fn test_cancel_leaves_grid_untouched() {
    let grid = grid_with((5, 5), &[((1, 1), '#'), ((2, 2), '@'), ((4, 4), 'x')]);
    let before = grid.clone();

    let mut state = MoveState::begin(&block_mask(), &grid, Position::new(1, 1));
    state.update(Position::new(4, 0));
    state.release();
    state.cancel();

    assert_eq!(grid, before);
}

#[test]
fn test_move_and_move_back_restores_grid() {
    let mut grid = grid_with((8, 8), &[((1, 1), 'a'), ((2, 1), 'b'), ((1, 2), 'c'), ((6, 6), 'z')]);
    let before = grid.clone();
    let mask = block_mask();

    let mut state = MoveState::begin(&mask, &grid, Position::new(0, 0));
    state.update(Position::new(3, 2));
    state.commit(&mut grid).unwrap();

    let moved = mask.translated(Position::new(3, 2));
    let mut state = MoveState::begin(&moved, &grid, Position::new(3, 2));
    state.update(Position::new(0, 0));
    state.commit(&mut grid).unwrap();

    assert_eq!(grid, before);
}

#[test]
fn test_cells_moved_off_canvas_are_dropped() {
    let mut grid = grid_with((5, 5), &[((1, 1), '#'), ((2, 1), '#'), ((1, 2), '#'), ((2, 2), '#')]);
    let mut state = MoveState::begin(&block_mask(), &grid, Position::new(1, 1));
    state.update(Position::new(4, 1));
    state.commit(&mut grid).unwrap();

    assert_eq!(grid.glyph_at((4, 1)), Some('#'));
    assert_eq!(grid.glyph_at((4, 2)), Some('#'));
    assert_eq!(grid.len(), 2);
}

#[test]
fn test_preview_shows_displaced_cells() {
    let grid = grid_with((5, 5), &[((1, 1), '#')]);
    let mut state = MoveState::begin(&block_mask(), &grid, Position::new(1, 1));
    state.update(Position::new(0, 0));
    let preview: Vec<_> = state.preview().map(|(pos, cell)| (pos, cell.glyph)).collect();
    assert_eq!(preview, vec![(Position::new(0, 0), '#')]);
}

// ============================================================================
// Edit state
// ============================================================================

#[test]
fn test_drag_inside_selection_moves_on_enter() {
    let mut state = block_state();
    drag(&mut state, (1, 1), (2, 2));

    drag(&mut state, (1, 1), (3, 3));
    // nothing is written while the move is pending
    assert_eq!(glyph(&state, 1, 1), Some('#'));
    assert_eq!(glyph(&state, 3, 3), None);
    assert_eq!(state.selection_offset(), Position::new(2, 2));
    assert!(state.is_selected(Position::new(4, 4)));

    state.key_down(EditKey::Enter).unwrap();
    assert!(state.move_state().is_none());
    for (x, y) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
        assert_eq!(glyph(&state, x, y), Some('#'));
    }
    assert_eq!(glyph(&state, 1, 1), None);
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.undo_description(), Some("Move selection".to_string()));
    assert_eq!(
        state.selection_mask().map(SelectionMask::sorted_positions),
        Some(SelectionMask::from_rectangle((3, 3), (4, 4)).sorted_positions())
    );
}

#[test]
fn test_second_drag_continues_from_previous_offset() {
    let mut state = block_state();
    drag(&mut state, (1, 1), (2, 2));

    drag(&mut state, (1, 1), (3, 3));
    // grab the moved block at its new place
    drag(&mut state, (3, 3), (4, 3));
    assert_eq!(state.selection_offset(), Position::new(3, 2));

    state.key_down(EditKey::Enter).unwrap();
    assert_eq!(glyph(&state, 4, 3), Some('#'));
    assert_eq!(glyph(&state, 4, 4), Some('#'));
    assert_eq!(state.grid().len(), 2);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_click_outside_commits_move() {
    let mut state = block_state();
    drag(&mut state, (1, 1), (2, 2));
    drag(&mut state, (2, 2), (3, 2));

    state.pointer_down(Position::new(0, 4), PointerButton::Left).unwrap();
    assert!(state.move_state().is_none());
    assert_eq!(glyph(&state, 3, 1), Some('#'));
    assert_eq!(glyph(&state, 1, 1), None);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_move_back_to_start_leaves_no_history() {
    let mut state = block_state();
    drag(&mut state, (1, 1), (2, 2));
    drag(&mut state, (1, 1), (1, 1));
    state.key_down(EditKey::Enter).unwrap();
    assert!(state.history().is_empty());
}

#[test]
fn test_escape_commits_move_and_clears_selection() {
    let mut state = block_state();
    drag(&mut state, (1, 1), (2, 2));
    drag(&mut state, (1, 1), (2, 1));
    state.key_down(EditKey::Escape).unwrap();

    assert!(state.selection().is_none());
    assert_eq!(glyph(&state, 3, 1), Some('#'));
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_undo_during_move_restores_original() {
    let mut state = block_state();
    let before = state.grid().clone();
    drag(&mut state, (1, 1), (2, 2));
    drag(&mut state, (1, 1), (3, 3));

    assert!(state.undo().unwrap());
    assert!(state.move_state().is_none());
    assert_eq!(state.grid(), &before);
    assert!(state.can_redo());
    assert!(state.history().actions().iter().all(|action| action.is_finalized()));
}

#[test]
fn test_cancel_move_keeps_grid() {
    let mut state = block_state();
    let before = state.grid().clone();
    drag(&mut state, (1, 1), (2, 2));
    drag(&mut state, (1, 1), (3, 3));

    assert!(state.cancel_move());
    assert_eq!(state.grid(), &before);
    assert!(state.history().is_empty());
    assert_eq!(state.selection_offset(), Position::default());
}

#[test]
fn test_right_click_cancels_move() {
    let mut state = block_state();
    let before = state.grid().clone();
    drag(&mut state, (1, 1), (2, 2));
    drag(&mut state, (1, 1), (3, 3));

    state.pointer_down(Position::new(3, 3), PointerButton::Right).unwrap();
    assert!(state.move_state().is_none());
    assert_eq!(state.selection_offset(), Position::default());
    assert_eq!(state.grid(), &before);
    assert!(state.history().is_empty());

    // the next left drag starts fresh instead of continuing the move
    drag(&mut state, (0, 0), (0, 4));
    assert!(state.move_state().is_none());
    assert_eq!(state.selection_mask().map(SelectionMask::len), Some(5));
}

#[test]
fn test_move_skips_empty_cells() {
    let mut state = crate::create_test_state((5, 5), &[((0, 0), 'a'), ((2, 0), 'b'), ((0, 1), 'c')]);
    drag(&mut state, (0, 0), (1, 0));
    drag(&mut state, (0, 0), (0, 1));
    state.key_down(EditKey::Enter).unwrap();

    // 'c' sat below the selection and is overwritten only where a moved cell lands
    assert_eq!(glyph(&state, 0, 1), Some('a'));
    assert_eq!(glyph(&state, 1, 1), None);
    assert_eq!(glyph(&state, 2, 0), Some('b'));
    assert_eq!(state.grid().cells().len(), 2);
}

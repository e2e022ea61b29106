//! Tests for the edit state
//!
//! Every operation that changes the grid must push exactly one history entry
//! and be undoable; gestures that are still pending must never touch the grid.

mod clipboard_tests;
mod move_tests;

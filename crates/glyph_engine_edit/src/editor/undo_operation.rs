//! History records as a tagged enum.
//!
//! The history only stores what the canvas looked like; applying a record is
//! done by [`super::EditState`] with an exhaustive match.

use crate::{CellMap, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum HistoryAction {
    /// Any change to cell content.
    CanvasEdit {
        previous_snapshot: CellMap,
        /// Attached once the edit has been applied, see [`super::HistoryStack::finalize_canvas_edit`].
        next_snapshot: Option<CellMap>,
        frame_index: usize,
        description: String,
    },

    /// Canvas dimensions changed. Content outside the new size is lost on redo.
    CanvasResize {
        previous_size: Size,
        new_size: Size,
        previous_snapshot: CellMap,
        frame_index: usize,
    },
}

impl HistoryAction {
    /// Get a description of this operation for UI display
    pub fn description(&self) -> String {
        match self {
            HistoryAction::CanvasEdit { description, .. } => description.clone(),
            HistoryAction::CanvasResize { new_size, .. } => format!("Resize canvas to {}x{}", new_size.width, new_size.height),
        }
    }

    pub fn frame_index(&self) -> usize {
        match self {
            HistoryAction::CanvasEdit { frame_index, .. } | HistoryAction::CanvasResize { frame_index, .. } => *frame_index,
        }
    }

    /// False for a canvas edit that is still waiting for its after state.
    pub fn is_finalized(&self) -> bool {
        match self {
            HistoryAction::CanvasEdit { next_snapshot, .. } => next_snapshot.is_some(),
            HistoryAction::CanvasResize { .. } => true,
        }
    }
}

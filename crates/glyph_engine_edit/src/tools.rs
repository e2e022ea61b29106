//! Tools and input events understood by the edit state.

use serde::{Deserialize, Serialize};

use crate::SelectionKind;

/// Selection tools. Each one builds a [`crate::SelectionMask`] its own way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionTool {
    /// Drag a rectangle between two corners
    #[default]
    Rectangle,
    /// Draw a freehand outline
    Lasso,
    /// Click a cell to select everything that looks like it
    MagicWand,
}

impl SelectionTool {
    pub const ALL: [SelectionTool; 3] = [SelectionTool::Rectangle, SelectionTool::Lasso, SelectionTool::MagicWand];

    pub fn kind(self) -> SelectionKind {
        match self {
            SelectionTool::Rectangle => SelectionKind::Rectangle,
            SelectionTool::Lasso => SelectionKind::Lasso,
            SelectionTool::MagicWand => SelectionKind::MagicWand,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SelectionTool::Rectangle => "Rectangle Select",
            SelectionTool::Lasso => "Lasso Select",
            SelectionTool::MagicWand => "Magic Wand",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// Keys that drive engine operations. Everything else stays in the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Escape,
    Enter,
    Delete,
}

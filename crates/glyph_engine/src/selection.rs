use serde::{Deserialize, Serialize};

/// How a mask looks to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// The mask fills its bounding box completely.
    Rectangle,
    /// Anything else: lasso outlines, wand regions, combined masks.
    Custom,
}

/// The tool a selection was made with. Each kind owns its own clipboard slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionKind {
    Rectangle,
    Lasso,
    MagicWand,
}

impl SelectionKind {
    pub const ALL: [SelectionKind; 3] = [SelectionKind::Rectangle, SelectionKind::Lasso, SelectionKind::MagicWand];

    /// Order in which clipboard slots are tried when no kind is requested and
    /// the active slot is empty.
    pub const PASTE_PRECEDENCE: [SelectionKind; 3] = [SelectionKind::MagicWand, SelectionKind::Lasso, SelectionKind::Rectangle];
}

impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionKind::Rectangle => write!(f, "rectangle"),
            SelectionKind::Lasso => write!(f, "lasso"),
            SelectionKind::MagicWand => write!(f, "magic wand"),
        }
    }
}

/// How a freshly built mask combines with the one already active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddType {
    #[default]
    Default,
    Add,
    Subtract,
}

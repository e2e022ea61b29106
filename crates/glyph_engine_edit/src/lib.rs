mod editor;
pub use editor::*;

pub mod tools;
pub use tools::{EditKey, PointerButton, SelectionTool};

mod options;
pub use options::EditorOptions;

// Re-export all necessary types from glyph_engine
pub use glyph_engine::{
    AddType, Cell, CellMap, CellMatcher, Color, EngineError, Grid, GridStore, MagicWandOptions, PathPoint, Position, Rectangle, Result, SelectionKind,
    SelectionMask, Shape, Size, magic_wand, polygon,
};

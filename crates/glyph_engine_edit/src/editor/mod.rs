mod undo_stack;
pub use undo_stack::*;

mod undo_operation;
pub use undo_operation::HistoryAction;

mod move_state;
pub use move_state::MoveState;

mod clipboard;
pub use clipboard::{Clipboard, ClipboardEntry};

mod paste;
pub use paste::PastePreview;

mod editor_error;
pub use editor_error::*;

mod edit_operations;
mod selection_operations;

use crate::{
    AddType, CellMap, EditorOptions, Grid, GridStore, PathPoint, Position, Result, SelectionKind, SelectionMask, SelectionTool, Shape,
};

/// The selection currently shown on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSelection {
    pub kind: SelectionKind,
    pub mask: SelectionMask,
    /// Freehand path a lasso mask was built from, kept to rebuild the mask
    /// when the smoothing tolerance changes.
    lasso: Option<LassoSource>,
}

impl ActiveSelection {
    pub fn new(kind: SelectionKind, mask: SelectionMask) -> Self {
        Self { kind, mask, lasso: None }
    }

    /// Raw lasso path this selection came from, if any.
    pub fn lasso_path(&self) -> Option<&[PathPoint]> {
        self.lasso.as_ref().map(|source| source.path.as_slice())
    }
}

#[derive(Clone, Debug, PartialEq)]
struct LassoSource {
    path: Vec<PathPoint>,
    /// Mask the lasso was combined with.
    base: SelectionMask,
    add_type: AddType,
}

/// A selection gesture between pointer down and pointer up.
#[derive(Clone, Debug, PartialEq)]
enum Gesture {
    Rectangle {
        anchor: Position,
        base: SelectionMask,
        /// Set once the pointer left the anchor cell.
        dragged: bool,
    },
    Lasso { path: Vec<PathPoint>, base: SelectionMask },
}

/// Interactive editing state on top of a [`GridStore`].
///
/// Owns the active tool and selection, a pending move or paste, the clipboard
/// slots and the undo history. All grid changes go through [`GridStore::replace_all`]
/// (or [`GridStore::resize`]) with a history entry pushed right before and
/// finalized right after.
pub struct EditState<G: GridStore = Grid> {
    grid: G,
    options: EditorOptions,

    tool: SelectionTool,
    add_type: AddType,

    selection: Option<ActiveSelection>,
    gesture: Option<Gesture>,

    move_state: Option<MoveState>,
    move_dragging: bool,

    paste_preview: Option<PastePreview>,
    clipboard: Clipboard,

    history: HistoryStack,
    /// Set between `begin_canvas_edit` and `end_canvas_edit`.
    open_canvas_edit: bool,
    frame_index: usize,
}

impl Default for EditState {
    fn default() -> Self {
        Self::new(Grid::new((80, 25)))
    }
}

impl<G: GridStore> EditState<G> {
    pub fn new(grid: G) -> Self {
        Self::with_options(grid, EditorOptions::default())
    }

    pub fn with_options(grid: G, options: EditorOptions) -> Self {
        Self {
            grid,
            history: HistoryStack::new(options.max_history_size),
            options,
            tool: SelectionTool::default(),
            add_type: AddType::default(),
            selection: None,
            gesture: None,
            move_state: None,
            move_dragging: false,
            paste_preview: None,
            clipboard: Clipboard::default(),
            open_canvas_edit: false,
            frame_index: 0,
        }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Direct grid access for tools that draw cell by cell. Wrap such changes in
    /// [`Self::begin_canvas_edit`] / [`Self::end_canvas_edit`] to make them undoable.
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EditorOptions) {
        self.history.set_max_size(options.max_history_size);
        let tolerance = options.lasso_smoothing_tolerance;
        self.options = options;
        self.set_lasso_smoothing_tolerance(tolerance);
    }

    pub fn tool(&self) -> SelectionTool {
        self.tool
    }

    pub fn add_type(&self) -> AddType {
        self.add_type
    }

    pub fn selection(&self) -> Option<&ActiveSelection> {
        self.selection.as_ref()
    }

    /// Selected cells, without the offset of a pending move.
    pub fn selection_mask(&self) -> Option<&SelectionMask> {
        self.selection.as_ref().map(|sel| &sel.mask)
    }

    pub fn selection_shape(&self) -> Option<Shape> {
        self.selection_mask().and_then(SelectionMask::shape)
    }

    /// Offset the selection is drawn at while a move is pending.
    pub fn selection_offset(&self) -> Position {
        self.move_state.as_ref().map(MoveState::total_offset).unwrap_or_default()
    }

    pub fn is_selected(&self, pos: Position) -> bool {
        let offset = self.selection_offset();
        self.selection.as_ref().is_some_and(|sel| sel.mask.is_selected(pos - offset))
    }

    /// The path being drawn, or the one the active lasso selection was built from.
    pub fn lasso_path(&self) -> Option<&[PathPoint]> {
        match &self.gesture {
            Some(Gesture::Lasso { path, .. }) => Some(path),
            _ => self.selection.as_ref().and_then(ActiveSelection::lasso_path),
        }
    }

    pub fn is_drawing_lasso(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Lasso { .. }))
    }

    pub fn move_state(&self) -> Option<&MoveState> {
        self.move_state.as_ref()
    }

    pub fn paste_preview(&self) -> Option<&PastePreview> {
        self.paste_preview.as_ref()
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn set_frame_index(&mut self, frame_index: usize) {
        self.frame_index = frame_index;
    }

    /// Starts a history entry for changes made through [`Self::grid_mut`].
    ///
    /// Returns false if another canvas edit is still open.
    pub fn begin_canvas_edit(&mut self, description: impl Into<String>) -> bool {
        if self.open_canvas_edit {
            log::warn!("canvas edit already in progress");
            return false;
        }
        self.history.push_canvas_edit(self.grid.snapshot(), self.frame_index, description);
        self.open_canvas_edit = true;
        true
    }

    /// Closes the entry opened by [`Self::begin_canvas_edit`] with the current grid content.
    pub fn end_canvas_edit(&mut self) -> bool {
        if !self.open_canvas_edit {
            return false;
        }
        self.open_canvas_edit = false;
        self.history.finalize_canvas_edit(self.grid.snapshot())
    }

    /// Replaces the grid content with `cells` as one undoable step.
    ///
    /// If the grid rejects the content the history is rolled back to what it
    /// was before and the error is returned.
    pub(crate) fn apply_canvas_edit(&mut self, description: &str, cells: CellMap) -> Result<()> {
        self.end_canvas_edit();
        let displaced = self.history.push_canvas_edit(self.grid.snapshot(), self.frame_index, description);
        if let Err(err) = self.grid.replace_all(cells) {
            log::error!("{description} failed: {err}");
            self.history.rollback(displaced);
            return Err(err);
        }
        self.history.finalize_canvas_edit(self.grid.snapshot());
        Ok(())
    }

    fn set_selection(&mut self, selection: Option<ActiveSelection>) {
        self.selection = selection.filter(|sel| !sel.mask.is_empty());
        if let Some(sel) = &self.selection {
            log::debug!("{} selection of {} cells", sel.kind, sel.mask.len());
        }
    }

    /// Mask a new gesture combines with. Replacing gestures start from nothing.
    fn gesture_base(&self) -> SelectionMask {
        match (self.add_type, &self.selection) {
            (AddType::Default, _) | (_, None) => SelectionMask::new(),
            (_, Some(sel)) => sel.mask.clone(),
        }
    }
}

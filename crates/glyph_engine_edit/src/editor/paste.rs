use crate::{Cell, CellMap, Position, Rectangle};

use super::ClipboardEntry;

/// A paste that has not been written to the grid yet.
///
/// The preview floats over the canvas and can be dragged around until it is
/// committed or dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct PastePreview {
    data: CellMap,
    position: Position,
    /// Bounds of `data` relative to `position`.
    bounds: Rectangle,
    is_dragging: bool,
    drag_grab_offset: Position,
}

impl PastePreview {
    pub fn new(entry: &ClipboardEntry, position: Position) -> Self {
        Self {
            data: entry.data.clone(),
            position,
            bounds: entry.bounds().unwrap_or_default(),
            is_dragging: false,
            drag_grab_offset: Position::default(),
        }
    }

    pub fn data(&self) -> &CellMap {
        &self.data
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Bounds in canvas coordinates.
    pub fn placed_bounds(&self) -> Rectangle {
        self.bounds + self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn contains(&self, point: Position) -> bool {
        self.placed_bounds().is_inside(point)
    }

    /// Grabs the preview at `point`. Returns false if `point` misses it.
    pub fn start_drag(&mut self, point: Position) -> bool {
        if !self.contains(point) {
            return false;
        }
        self.is_dragging = true;
        self.drag_grab_offset = point - self.position;
        true
    }

    pub fn update_drag(&mut self, pointer: Position) {
        if self.is_dragging {
            self.position = pointer - self.drag_grab_offset;
        }
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    /// Cells at their current canvas position.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.data.iter().map(|(pos, cell)| (*pos + self.position, *cell))
    }

    /// Absolute cells to merge into the grid.
    pub fn commit(self) -> CellMap {
        log::debug!("commit paste of {} cells at {}", self.data.len(), self.position);
        self.cells().collect()
    }
}

use std::collections::HashMap;

use crate::{Cell, EngineError, Position, Result, Size};

/// Sparse cell mapping. A missing key is an empty cell.
pub type CellMap = HashMap<Position, Cell>;

/// The authoritative cell storage the editing engine reads from and writes to.
///
/// The engine never mutates a store cell by cell while a gesture is in flight;
/// committed results are applied through [`GridStore::replace_all`].
pub trait GridStore {
    fn get(&self, pos: Position) -> Option<Cell>;
    fn set(&mut self, pos: Position, cell: Cell);
    fn clear(&mut self, pos: Position);

    /// Atomically replaces the whole cell mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the store can't hold the new content.
    fn replace_all(&mut self, cells: CellMap) -> Result<()>;

    /// Changes the canvas dimensions, dropping cells that fall outside.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not a valid canvas size.
    fn resize(&mut self, size: Size) -> Result<()>;

    fn cells(&self) -> &CellMap;
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    fn is_inside(&self, pos: Position) -> bool {
        self.size().contains(pos)
    }

    fn snapshot(&self) -> CellMap {
        self.cells().clone()
    }
}

/// Reference [`GridStore`] backed by a hash map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    size: Size,
    cells: CellMap,
    cell_limit: Option<usize>,
}

impl Grid {
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            cells: CellMap::new(),
            cell_limit: None,
        }
    }

    /// Limits the number of populated cells the grid accepts in [`GridStore::replace_all`].
    pub fn with_cell_limit(mut self, limit: usize) -> Self {
        self.cell_limit = Some(limit);
        self
    }

    pub fn from_cells(size: impl Into<Size>, cells: CellMap) -> Self {
        let size = size.into();
        let cells = cells.into_iter().filter(|(pos, _)| size.contains(*pos)).collect();
        Self { size, cells, cell_limit: None }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn glyph_at(&self, pos: impl Into<Position>) -> Option<char> {
        self.cells.get(&pos.into()).map(|c| c.glyph)
    }
}

impl GridStore for Grid {
    fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(&pos).copied()
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        if !self.size.contains(pos) {
            log::debug!("ignoring write outside of canvas at {pos}");
            return;
        }
        self.cells.insert(pos, cell);
    }

    fn clear(&mut self, pos: Position) {
        self.cells.remove(&pos);
    }

    fn replace_all(&mut self, cells: CellMap) -> Result<()> {
        if let Some(limit) = self.cell_limit {
            if cells.len() > limit {
                return Err(EngineError::CapacityExceeded {
                    requested: cells.len(),
                    limit,
                });
            }
        }
        let size = self.size;
        self.cells = cells.into_iter().filter(|(pos, _)| size.contains(*pos)).collect();
        Ok(())
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        if size.is_empty() {
            return Err(EngineError::InvalidSize { size });
        }
        self.size = size;
        self.cells.retain(|pos, _| size.contains(*pos));
        Ok(())
    }

    fn cells(&self) -> &CellMap {
        &self.cells
    }

    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }
}

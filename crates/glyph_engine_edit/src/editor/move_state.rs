use crate::{Cell, CellMap, GridStore, Position, Result, SelectionMask, Size};

/// Content of a selection that is being dragged around.
///
/// The grid is never touched while a move is live. The displacement is kept in
/// two parts: `base_offset` holds finished drag gestures, `current_offset` the
/// gesture in progress. Splitting them keeps the selection anchored when the
/// next drag starts from a different cell than the previous one ended on.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveState {
    original_data: CellMap,
    start_pos: Position,
    base_offset: Position,
    current_offset: Position,
}

impl MoveState {
    /// Lifts the populated cells under `mask` out of `grid`.
    pub fn begin(mask: &SelectionMask, grid: &dyn GridStore, start: Position) -> Self {
        let original_data: CellMap = mask.iter().filter_map(|pos| grid.get(*pos).map(|cell| (*pos, cell))).collect();
        log::debug!("begin move of {} cells at {start}", original_data.len());
        Self {
            original_data,
            start_pos: start,
            base_offset: Position::default(),
            current_offset: Position::default(),
        }
    }

    pub fn original_data(&self) -> &CellMap {
        &self.original_data
    }

    pub fn start_pos(&self) -> Position {
        self.start_pos
    }

    pub fn base_offset(&self) -> Position {
        self.base_offset
    }

    pub fn current_offset(&self) -> Position {
        self.current_offset
    }

    pub fn total_offset(&self) -> Position {
        self.base_offset + self.current_offset
    }

    pub fn update(&mut self, pointer: Position) {
        self.current_offset = pointer - self.start_pos;
    }

    /// Ends a drag gesture without committing; the selection stays live.
    pub fn release(&mut self) {
        self.base_offset += self.current_offset;
        self.current_offset = Position::default();
    }

    /// Starts another drag gesture on the same move.
    pub fn resume(&mut self, pointer: Position) {
        self.start_pos = pointer;
        self.current_offset = Position::default();
    }

    /// Displaced cells as they should be drawn. Positions may lie outside the canvas.
    pub fn preview(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let offset = self.total_offset();
        self.original_data.iter().map(move |(pos, cell)| (*pos + offset, *cell))
    }

    /// Builds the content `cells` would have after the move: every original
    /// position is cleared first, then the displaced cells are written. Cells
    /// landing outside `size` are dropped.
    pub fn composite(&self, cells: &CellMap, size: Size) -> CellMap {
        let mut result = cells.clone();
        for pos in self.original_data.keys() {
            result.remove(pos);
        }
        let mut dropped = 0;
        for (pos, cell) in self.preview() {
            if size.contains(pos) {
                result.insert(pos, cell);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::debug!("{dropped} cells moved outside of the canvas");
        }
        result
    }

    /// Writes the move into `grid` with a single `replace_all`.
    pub fn commit(self, grid: &mut dyn GridStore) -> Result<()> {
        let cells = self.composite(grid.cells(), grid.size());
        log::debug!("commit move of {} cells by {}", self.original_data.len(), self.total_offset());
        grid.replace_all(cells)
    }

    /// Drops the move. The grid never saw it, so there is nothing to undo.
    pub fn cancel(self) {
        log::debug!("cancel move of {} cells", self.original_data.len());
    }
}

#![allow(clippy::missing_errors_doc)]

use super::{ActiveSelection, EditState, HistoryAction, PastePreview};
use crate::{CellMap, GridStore, Position, Result, SelectionKind, Size};

impl<G: GridStore> EditState<G> {
    /// Copies the selection into the clipboard slot of its kind.
    ///
    /// Returns the copied content as plain text for the system clipboard, or
    /// `None` if nothing is selected.
    pub fn copy(&mut self) -> Result<Option<String>> {
        self.commit_move()?;
        let Some(sel) = &self.selection else {
            return Ok(None);
        };
        if !self.clipboard.copy(sel.kind, &self.grid, &sel.mask) {
            return Ok(None);
        }
        Ok(self.clipboard.entry(sel.kind).map(super::ClipboardEntry::to_text))
    }

    pub fn cut(&mut self) -> Result<Option<String>> {
        let text = self.copy()?;
        if text.is_some() {
            self.delete_selection()?;
        }
        Ok(text)
    }

    /// Erases the populated cells under the selection as one history entry.
    pub fn delete_selection(&mut self) -> Result<()> {
        self.commit_move()?;
        let Some(sel) = &self.selection else {
            return Ok(());
        };
        let mut cells = self.grid.snapshot();
        let before = cells.len();
        cells.retain(|pos, _| !sel.mask.is_selected(*pos));
        if cells.len() == before {
            return Ok(());
        }
        self.apply_canvas_edit("Delete selection", cells)
    }

    /// Writes clipboard content with its top left corner at `target` right away.
    ///
    /// Returns false if the resolved clipboard slot is empty.
    pub fn paste(&mut self, kind: Option<SelectionKind>, target: Position) -> Result<bool> {
        self.commit_move()?;
        self.cancel_paste();
        let Some(pasted) = self.clipboard.paste(kind, target) else {
            log::warn!("paste without clipboard content");
            return Ok(false);
        };
        self.merge_pasted(pasted)?;
        Ok(true)
    }

    /// Shows the clipboard content as a floating preview at `initial`.
    ///
    /// Returns false if there is nothing to paste.
    pub fn start_paste_mode(&mut self, initial: Position) -> Result<bool> {
        if !self.clipboard.has_clipboard() {
            log::warn!("paste mode requested without clipboard content");
            return Ok(false);
        }
        self.commit_move()?;
        self.cancel_paste();
        self.gesture = None;
        self.selection = None;

        let Some(entry) = self.clipboard.resolve(None) else {
            return Ok(false);
        };
        self.paste_preview = Some(PastePreview::new(entry, initial));
        Ok(true)
    }

    pub fn commit_paste(&mut self) -> Result<()> {
        let Some(preview) = self.paste_preview.take() else {
            return Ok(());
        };
        self.merge_pasted(preview.commit())
    }

    /// Drops the paste preview. Returns whether there was one.
    pub fn cancel_paste(&mut self) -> bool {
        let canceled = self.paste_preview.take().is_some();
        if canceled {
            log::debug!("paste canceled");
        }
        canceled
    }

    fn merge_pasted(&mut self, pasted: CellMap) -> Result<()> {
        let size = self.grid.size();
        let mut cells = self.grid.snapshot();
        cells.extend(pasted.into_iter().filter(|(pos, _)| size.contains(*pos)));
        self.apply_canvas_edit("Paste", cells)
    }

    /// Writes a pending move into the grid and moves the selection along.
    ///
    /// A move that ended where it started leaves no history entry.
    pub fn commit_move(&mut self) -> Result<()> {
        self.move_dragging = false;
        let Some(state) = self.move_state.take() else {
            return Ok(());
        };
        let offset = state.total_offset();
        if offset.is_zero() {
            state.cancel();
            return Ok(());
        }

        let cells = state.composite(self.grid.cells(), self.grid.size());
        self.apply_canvas_edit("Move selection", cells)?;

        let size = self.grid.size();
        if let Some(sel) = self.selection.take() {
            let mask = sel.mask.translated(offset).clipped(size);
            self.set_selection(Some(ActiveSelection::new(sel.kind, mask)));
        }
        Ok(())
    }

    /// Drops a pending move; the selection stays where it was.
    pub fn cancel_move(&mut self) -> bool {
        self.move_dragging = false;
        match self.move_state.take() {
            Some(state) => {
                state.cancel();
                true
            }
            None => false,
        }
    }

    /// Changes the canvas size as one history entry. Cells outside the new size are lost.
    pub fn resize_canvas(&mut self, size: impl Into<Size>) -> Result<()> {
        let new_size = size.into();
        self.commit_move()?;
        self.cancel_paste();
        self.gesture = None;
        self.end_canvas_edit();

        let previous_size = self.grid.size();
        if previous_size == new_size {
            return Ok(());
        }
        let displaced = self.history.push(HistoryAction::CanvasResize {
            previous_size,
            new_size,
            previous_snapshot: self.grid.snapshot(),
            frame_index: self.frame_index,
        });
        if let Err(err) = self.grid.resize(new_size) {
            log::error!("resize to {new_size} failed: {err}");
            self.history.rollback(displaced);
            return Err(err);
        }
        self.clip_selection();
        Ok(())
    }

    /// Reverts the most recent history entry. Returns false if there is nothing to undo.
    ///
    /// A pending move is committed first and then reverted with everything
    /// else; a paste preview or a lasso being drawn is dropped.
    pub fn undo(&mut self) -> Result<bool> {
        self.finish_pending_gestures()?;
        let Some(action) = self.history.undo().cloned() else {
            return Ok(false);
        };
        log::debug!("undo {}", action.description());

        let applied = match action {
            HistoryAction::CanvasEdit { previous_snapshot, .. } => self.grid.replace_all(previous_snapshot),
            HistoryAction::CanvasResize {
                previous_size,
                new_size,
                previous_snapshot,
                ..
            } => self.restore_size(previous_size, new_size, previous_snapshot),
        };
        if let Err(err) = applied {
            log::error!("undo failed: {err}");
            self.history.redo();
            return Err(err);
        }
        self.selection = None;
        Ok(true)
    }

    /// Re-applies the next history entry. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        self.finish_pending_gestures()?;
        let Some(action) = self.history.redo().cloned() else {
            return Ok(false);
        };
        log::debug!("redo {}", action.description());

        let applied = match action {
            HistoryAction::CanvasEdit { next_snapshot, .. } => match next_snapshot {
                Some(cells) => self.grid.replace_all(cells),
                None => {
                    log::warn!("redo of an unfinished canvas edit ignored");
                    Ok(())
                }
            },
            HistoryAction::CanvasResize { new_size, .. } => self.grid.resize(new_size),
        };
        if let Err(err) = applied {
            log::error!("redo failed: {err}");
            self.history.undo();
            return Err(err);
        }
        self.selection = None;
        Ok(true)
    }

    /// Forgets all history, e.g. when a new document is loaded.
    pub fn reset_history(&mut self) {
        self.open_canvas_edit = false;
        self.history.clear();
    }

    /// Settles everything that could leave a history entry half done.
    fn finish_pending_gestures(&mut self) -> Result<()> {
        self.cancel_paste();
        self.gesture = None;
        self.end_canvas_edit();
        self.commit_move()
    }

    /// Undoes a resize. The grid keeps `current_size` if the old content can't be put back.
    fn restore_size(&mut self, previous_size: Size, current_size: Size, previous_snapshot: CellMap) -> Result<()> {
        self.grid.resize(previous_size)?;
        if let Err(err) = self.grid.replace_all(previous_snapshot) {
            if let Err(resize_err) = self.grid.resize(current_size) {
                log::error!("can't go back to {current_size} either: {resize_err}");
            }
            return Err(err);
        }
        Ok(())
    }

    fn clip_selection(&mut self) {
        let size = self.grid.size();
        if let Some(sel) = self.selection.take() {
            let mask = sel.mask.clipped(size);
            self.set_selection(Some(ActiveSelection { mask, ..sel }));
        }
    }
}

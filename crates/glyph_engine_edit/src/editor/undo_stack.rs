//! Linear undo/redo ledger.
//!
//! The stack is a cursor over a list of [`HistoryAction`]s. It never applies
//! anything itself: `undo` hands back the record whose `previous_snapshot` the
//! caller restores, `redo` the one whose after state the caller re-applies.

use crate::CellMap;

use super::HistoryAction;

pub const DEFAULT_MAX_HISTORY_SIZE: usize = 100;

/// Entries a [`HistoryStack::push`] removed, kept so the push can be taken back
/// with [`HistoryStack::rollback`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Displaced {
    /// Oldest entries dropped to stay within `max_size`.
    trimmed: Vec<HistoryAction>,
    /// The redo branch the push cut off.
    redo: Vec<HistoryAction>,
}

impl Displaced {
    pub fn is_empty(&self) -> bool {
        self.trimmed.is_empty() && self.redo.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryStack {
    actions: Vec<HistoryAction>,
    /// Index of the last applied action, `None` if everything is undone.
    cursor: Option<usize>,
    max_size: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY_SIZE)
    }
}

impl HistoryStack {
    /// A `max_size` of 0 is treated as 1.
    pub fn new(max_size: usize) -> Self {
        Self {
            actions: Vec::new(),
            cursor: None,
            max_size: max_size.max(1),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Changes the limit, dropping the oldest actions if the stack is now too long.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size.max(1);
        let dropped = self.trim_front();
        if !dropped.is_empty() {
            log::debug!("history limit {} dropped {} entries", self.max_size, dropped.len());
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn actions(&self) -> &[HistoryAction] {
        &self.actions
    }

    /// Appends `action`, throwing away everything that could have been redone.
    ///
    /// Returns what had to go to make room.
    pub fn push(&mut self, action: HistoryAction) -> Displaced {
        let keep = self.cursor.map_or(0, |c| c + 1);
        let redo = if keep < self.actions.len() {
            log::debug!("discarding {} redo entries", self.actions.len() - keep);
            self.actions.split_off(keep)
        } else {
            Vec::new()
        };
        self.actions.push(action);
        let trimmed = self.trim_front();
        self.cursor = Some(self.actions.len() - 1);
        Displaced { trimmed, redo }
    }

    fn trim_front(&mut self) -> Vec<HistoryAction> {
        if self.actions.len() <= self.max_size {
            return Vec::new();
        }
        let overflow = self.actions.len() - self.max_size;
        self.cursor = self.cursor.and_then(|c| c.checked_sub(overflow));
        self.actions.drain(..overflow).collect()
    }

    /// Records the state before an edit. The edit itself happens afterwards and
    /// is closed with [`Self::finalize_canvas_edit`], so a whole gesture ends up
    /// as a single entry.
    pub fn push_canvas_edit(&mut self, previous_snapshot: CellMap, frame_index: usize, description: impl Into<String>) -> Displaced {
        self.push(HistoryAction::CanvasEdit {
            previous_snapshot,
            next_snapshot: None,
            frame_index,
            description: description.into(),
        })
    }

    /// Attaches the after state to the most recently pushed canvas edit.
    ///
    /// Returns false (and leaves the stack alone) if that entry already has one
    /// or isn't a canvas edit.
    pub fn finalize_canvas_edit(&mut self, snapshot: CellMap) -> bool {
        match self.actions.last_mut() {
            Some(HistoryAction::CanvasEdit { next_snapshot, .. }) if next_snapshot.is_none() => {
                *next_snapshot = Some(snapshot);
                true
            }
            _ => false,
        }
    }

    /// Removes the most recent action if it is the current one. Used to roll back
    /// a push whose edit could not be applied.
    pub fn discard_last(&mut self) -> Option<HistoryAction> {
        let last = self.actions.len().checked_sub(1)?;
        if self.cursor != Some(last) {
            return None;
        }
        self.cursor = last.checked_sub(1);
        self.actions.pop()
    }

    /// Takes back the most recent push, putting the entries it displaced where they were.
    ///
    /// Returns `None` (and leaves the stack alone) if the last action isn't the current one.
    pub fn rollback(&mut self, displaced: Displaced) -> Option<HistoryAction> {
        let action = self.discard_last()?;
        let Displaced { mut trimmed, redo } = displaced;
        trimmed.append(&mut self.actions);
        self.actions = trimmed;
        self.cursor = self.actions.len().checked_sub(1);
        self.actions.extend(redo);
        Some(action)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.next_redo_index().is_some()
    }

    fn next_redo_index(&self) -> Option<usize> {
        let next = self.cursor.map_or(0, |c| c + 1);
        (next < self.actions.len()).then_some(next)
    }

    pub fn undo_description(&self) -> Option<String> {
        self.cursor.map(|c| self.actions[c].description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.next_redo_index().map(|i| self.actions[i].description())
    }

    /// Steps back, returning the action to revert.
    pub fn undo(&mut self) -> Option<&HistoryAction> {
        let current = self.cursor?;
        self.cursor = current.checked_sub(1);
        self.actions.get(current)
    }

    /// Steps forward, returning the action to re-apply.
    pub fn redo(&mut self) -> Option<&HistoryAction> {
        let next = self.next_redo_index()?;
        self.cursor = Some(next);
        self.actions.get(next)
    }

    pub fn clear(&mut self) {
        self.actions.clear();
        self.cursor = None;
    }
}

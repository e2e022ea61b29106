#![allow(clippy::missing_errors_doc)]

use super::{ActiveSelection, EditState, Gesture, LassoSource, MoveState};
use crate::{
    AddType, EditKey, GridStore, MagicWandOptions, PathPoint, PointerButton, Position, Rectangle, Result, SelectionKind, SelectionMask, SelectionTool,
    magic_wand, polygon,
};

impl<G: GridStore> EditState<G> {
    /// Switches tools. A pending move is committed, everything else in flight is dropped.
    pub fn set_tool(&mut self, tool: SelectionTool) -> Result<()> {
        if self.tool == tool {
            return Ok(());
        }
        self.commit_move()?;
        self.cancel_paste();
        self.gesture = None;
        self.selection = None;
        self.tool = tool;
        Ok(())
    }

    pub fn set_add_type(&mut self, add_type: AddType) {
        self.add_type = add_type;
    }

    pub fn set_magic_wand_options(&mut self, options: MagicWandOptions) {
        self.options.magic_wand = options;
    }

    /// Selects the whole canvas as a rectangle.
    pub fn select_all(&mut self) -> Result<()> {
        self.commit_move()?;
        self.cancel_paste();
        self.gesture = None;
        let size = self.grid.size();
        if size.is_empty() {
            self.selection = None;
            return Ok(());
        }
        let mask = SelectionMask::from_rectangle((0, 0), (size.width - 1, size.height - 1));
        self.set_selection(Some(ActiveSelection::new(SelectionKind::Rectangle, mask)));
        Ok(())
    }

    /// Drops the selection, committing a pending move first.
    pub fn clear_selection(&mut self) -> Result<()> {
        self.commit_move()?;
        self.gesture = None;
        self.selection = None;
        Ok(())
    }

    /// Changes the lasso smoothing tolerance and rebuilds the active lasso mask from its path.
    ///
    /// A selection that is being moved keeps its mask.
    pub fn set_lasso_smoothing_tolerance(&mut self, tolerance: f32) {
        let tolerance = tolerance.max(0.0);
        self.options.lasso_smoothing_tolerance = tolerance;
        if self.move_state.is_some() {
            return;
        }
        let size = self.grid.size();
        if let Some(sel) = &mut self.selection {
            if let Some(source) = &sel.lasso {
                let mask = polygon::rasterize_polygon(&polygon::smooth_path(&source.path, tolerance), size);
                sel.mask = SelectionMask::combine(&source.base, mask, source.add_type);
                log::debug!("rebuilt lasso selection with tolerance {tolerance}: {} cells", sel.mask.len());
            }
        }
        if self.selection.as_ref().is_some_and(|sel| sel.mask.is_empty()) {
            self.selection = None;
        }
    }

    pub fn pointer_down(&mut self, point: impl Into<PathPoint>, button: PointerButton) -> Result<()> {
        let point = point.into();
        let pos = point.cell();

        if button == PointerButton::Right {
            if self.cancel_paste() {
                return Ok(());
            }
            if self.is_drawing_lasso() {
                self.cancel_lasso();
            } else {
                self.cancel_move();
            }
            return Ok(());
        }

        if let Some(preview) = &mut self.paste_preview {
            if !preview.start_drag(pos) {
                self.commit_paste()?;
            }
            return Ok(());
        }

        if self.add_type == AddType::Default && self.is_selected(pos) {
            self.grab_selection(pos);
            return Ok(());
        }

        // anything else starts a new gesture, which must not see a pending move
        self.commit_move()?;
        match self.tool {
            SelectionTool::Rectangle => {
                let anchor = self.clamp_rectangle_point(pos);
                let base = self.gesture_base();
                self.gesture = Some(Gesture::Rectangle { anchor, base, dragged: false });
                self.update_rectangle(anchor);
            }
            SelectionTool::Lasso => {
                let base = self.gesture_base();
                if self.add_type == AddType::Default {
                    self.selection = None;
                }
                self.gesture = Some(Gesture::Lasso { path: vec![point], base });
            }
            SelectionTool::MagicWand => {
                let base = self.gesture_base();
                let mask = magic_wand::select(&self.grid, pos, &self.options.magic_wand);
                let mask = SelectionMask::combine(&base, mask, self.add_type);
                self.set_selection(Some(ActiveSelection::new(SelectionKind::MagicWand, mask)));
            }
        }
        Ok(())
    }

    pub fn pointer_move(&mut self, point: impl Into<PathPoint>) {
        let point = point.into();
        let pos = point.cell();

        if let Some(preview) = &mut self.paste_preview {
            preview.update_drag(pos);
            return;
        }
        if self.move_dragging {
            if let Some(state) = &mut self.move_state {
                state.update(pos);
            }
            return;
        }
        let end = self.clamp_rectangle_point(pos);
        match &mut self.gesture {
            Some(Gesture::Lasso { path, .. }) => {
                if path.last() != Some(&point) {
                    path.push(point);
                }
            }
            Some(Gesture::Rectangle { anchor, dragged, .. }) => {
                *dragged |= end != *anchor;
                self.update_rectangle(end);
            }
            None => {}
        }
    }

    pub fn pointer_up(&mut self, point: impl Into<PathPoint>) {
        self.pointer_move(point);

        if let Some(preview) = &mut self.paste_preview {
            preview.end_drag();
            return;
        }
        if self.move_dragging {
            self.move_dragging = false;
            if let Some(state) = &mut self.move_state {
                state.release();
            }
            return;
        }
        match self.gesture.take() {
            Some(Gesture::Lasso { path, base }) => self.finish_lasso(path, base),
            // a plain click outside the selection deselects
            Some(Gesture::Rectangle { dragged: false, .. }) if self.add_type == AddType::Default => {
                log::debug!("click without drag, selection cleared");
                self.selection = None;
            }
            Some(Gesture::Rectangle { .. }) | None => {}
        }
    }

    pub fn key_down(&mut self, key: EditKey) -> Result<()> {
        match key {
            EditKey::Escape => {
                if self.cancel_paste() {
                    return Ok(());
                }
                if self.is_drawing_lasso() {
                    self.cancel_lasso();
                    return Ok(());
                }
                self.clear_selection()
            }
            EditKey::Enter => {
                if self.paste_preview.is_some() {
                    self.commit_paste()
                } else {
                    self.commit_move()
                }
            }
            EditKey::Delete => self.delete_selection(),
        }
    }

    /// Starts or continues moving the selection from `pos`.
    fn grab_selection(&mut self, pos: Position) {
        if let Some(state) = &mut self.move_state {
            state.resume(pos);
        } else if let Some(sel) = &self.selection {
            self.move_state = Some(MoveState::begin(&sel.mask, &self.grid, pos));
        }
        self.move_dragging = true;
    }

    fn clamp_rectangle_point(&self, pos: Position) -> Position {
        if self.options.clip_rectangle_to_canvas {
            self.grid.size().clamp(pos)
        } else {
            pos
        }
    }

    fn update_rectangle(&mut self, end: Position) {
        let Some(Gesture::Rectangle { anchor, base, .. }) = &self.gesture else {
            return;
        };
        let rect = Rectangle::from_corners(*anchor, end);
        let mut incoming = SelectionMask::new();
        incoming.add_rectangle(rect);
        let mask = SelectionMask::combine(base, incoming, self.add_type);
        self.set_selection(Some(ActiveSelection::new(SelectionKind::Rectangle, mask)));
    }

    fn cancel_lasso(&mut self) {
        if let Some(Gesture::Lasso { base, .. }) = self.gesture.take() {
            log::debug!("lasso canceled");
            let kind = self.selection.as_ref().map_or(SelectionKind::Lasso, |sel| sel.kind);
            if self.add_type != AddType::Default {
                self.set_selection(Some(ActiveSelection::new(kind, base)));
            }
        }
    }

    fn finish_lasso(&mut self, path: Vec<PathPoint>, base: SelectionMask) {
        if path.len() < 3 {
            log::debug!("lasso with {} points discarded", path.len());
            if self.add_type != AddType::Default {
                let kind = self.selection.as_ref().map_or(SelectionKind::Lasso, |sel| sel.kind);
                self.set_selection(Some(ActiveSelection::new(kind, base)));
            }
            return;
        }
        let smoothed = polygon::smooth_path(&path, self.options.lasso_smoothing_tolerance);
        let mask = polygon::rasterize_polygon(&smoothed, self.grid.size());
        let add_type = self.add_type;
        let combined = SelectionMask::combine(&base, mask, add_type);
        self.set_selection(Some(ActiveSelection {
            kind: SelectionKind::Lasso,
            mask: combined,
            lasso: Some(LassoSource { path, base, add_type }),
        }));
    }
}

//! Magic wand: select cells that look like a clicked cell.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Cell, GridStore, Position, SelectionMask};

/// Which cell fields must match, and whether the region has to be connected.
///
/// Fields that are switched off act as wildcards. With every field off any
/// populated cell matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagicWandOptions {
    pub match_glyph: bool,
    pub match_foreground: bool,
    pub match_background: bool,
    /// Flood outward from the clicked cell (4-connected) instead of scanning the whole grid.
    pub contiguous: bool,
}

impl Default for MagicWandOptions {
    fn default() -> Self {
        Self {
            match_glyph: true,
            match_foreground: false,
            match_background: false,
            contiguous: true,
        }
    }
}

impl MagicWandOptions {
    pub fn matcher(&self, target: Cell) -> CellMatcher {
        CellMatcher { target, options: *self }
    }
}

/// Compares cells against a target under a [`MagicWandOptions`] policy.
#[derive(Clone, Copy, Debug)]
pub struct CellMatcher {
    target: Cell,
    options: MagicWandOptions,
}

impl CellMatcher {
    pub fn matches(&self, cell: &Cell) -> bool {
        (!self.options.match_glyph || cell.glyph == self.target.glyph)
            && (!self.options.match_foreground || cell.foreground == self.target.foreground)
            && (!self.options.match_background || cell.background == self.target.background)
    }
}

/// Builds the wand selection for a click at `start`.
///
/// Clicking an empty or out-of-canvas cell selects nothing.
pub fn select(grid: &dyn GridStore, start: Position, options: &MagicWandOptions) -> SelectionMask {
    if !grid.is_inside(start) {
        return SelectionMask::new();
    }
    let Some(target) = grid.get(start) else {
        return SelectionMask::new();
    };
    let matcher = options.matcher(target);
    let mask = if options.contiguous {
        select_contiguous(grid, start, &matcher)
    } else {
        select_global(grid, &matcher)
    };
    log::debug!(
        "magic wand at {start} ({}) selected {} cells",
        if options.contiguous { "contiguous" } else { "global" },
        mask.len()
    );
    mask
}

/// 4-connected BFS from `start`, bounded by the canvas.
pub fn select_contiguous(grid: &dyn GridStore, start: Position, matcher: &CellMatcher) -> SelectionMask {
    let mut result = SelectionMask::new();
    let size = grid.size();
    if !size.contains(start) {
        return result;
    }

    let mut queue = VecDeque::new();
    queue.push_back(start);
    result.set_is_selected(start, true);

    while let Some(pos) = queue.pop_front() {
        for next in pos.neighbours() {
            if !size.contains(next) || result.is_selected(next) {
                continue;
            }
            if grid.get(next).is_some_and(|cell| matcher.matches(&cell)) {
                result.set_is_selected(next, true);
                queue.push_back(next);
            }
        }
    }
    result
}

/// Every populated cell that matches, connected or not.
pub fn select_global(grid: &dyn GridStore, matcher: &CellMatcher) -> SelectionMask {
    grid.cells()
        .iter()
        .filter(|(pos, cell)| grid.is_inside(**pos) && matcher.matches(cell))
        .map(|(pos, _)| *pos)
        .collect()
}

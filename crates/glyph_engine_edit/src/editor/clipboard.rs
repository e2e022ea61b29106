use crate::{CellMap, GridStore, Position, Rectangle, SelectionKind, SelectionMask};

/// Copied content, keyed relative to the top left corner of the selection it came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipboardEntry {
    pub data: CellMap,
    pub original_position: Position,
}

impl ClipboardEntry {
    /// Copies the populated cells of `mask`. Returns `None` for an empty mask.
    pub fn from_selection(grid: &dyn GridStore, mask: &SelectionMask) -> Option<Self> {
        let bounds = mask.bounds()?;
        let origin = bounds.top_left();
        let data = mask.iter().filter_map(|pos| grid.get(*pos).map(|cell| (*pos - origin, cell))).collect();
        Some(Self {
            data,
            original_position: origin,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Relative bounds of the copied cells, `None` if nothing populated was copied.
    pub fn bounds(&self) -> Option<Rectangle> {
        let mut keys = self.data.keys();
        let first = *keys.next()?;
        let (min, max) = keys.fold((first, first), |(min, max), pos| (min.min(*pos), max.max(*pos)));
        Some(Rectangle::from_corners(min, max))
    }

    /// The content placed with its top left corner at `target`.
    pub fn translated(&self, target: Position) -> CellMap {
        self.data.iter().map(|(pos, cell)| (*pos + target, *cell)).collect()
    }

    /// Plain text rendition: one line per row, empty cells as spaces, trailing
    /// spaces trimmed.
    pub fn to_text(&self) -> String {
        let Some(bounds) = self.bounds() else {
            return String::new();
        };
        let mut lines = Vec::new();
        for y in 0..=bounds.bottom() {
            let mut line = String::new();
            for x in 0..=bounds.right() {
                line.push(self.data.get(&Position::new(x, y)).map_or(' ', |cell| cell.glyph));
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}

/// One clipboard slot per selection kind. Copying into one slot never touches the others.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clipboard {
    rectangle: Option<ClipboardEntry>,
    lasso: Option<ClipboardEntry>,
    magic_wand: Option<ClipboardEntry>,
    active_kind: Option<SelectionKind>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, kind: SelectionKind) -> &mut Option<ClipboardEntry> {
        match kind {
            SelectionKind::Rectangle => &mut self.rectangle,
            SelectionKind::Lasso => &mut self.lasso,
            SelectionKind::MagicWand => &mut self.magic_wand,
        }
    }

    pub fn entry(&self, kind: SelectionKind) -> Option<&ClipboardEntry> {
        match kind {
            SelectionKind::Rectangle => self.rectangle.as_ref(),
            SelectionKind::Lasso => self.lasso.as_ref(),
            SelectionKind::MagicWand => self.magic_wand.as_ref(),
        }
    }

    pub fn active_kind(&self) -> Option<SelectionKind> {
        self.active_kind
    }

    /// Copies the selected cells into the slot for `kind` and makes it the preferred one.
    ///
    /// Returns false and changes nothing if `mask` is empty.
    pub fn copy(&mut self, kind: SelectionKind, grid: &dyn GridStore, mask: &SelectionMask) -> bool {
        let Some(entry) = ClipboardEntry::from_selection(grid, mask) else {
            log::debug!("nothing selected, {kind} copy ignored");
            return false;
        };
        log::debug!("copied {} cells from {} into {kind} slot", entry.data.len(), entry.original_position);
        *self.slot_mut(kind) = Some(entry);
        self.active_kind = Some(kind);
        true
    }

    /// Picks the entry a paste should use.
    ///
    /// An explicit `kind` only looks at that slot. Otherwise the active slot wins
    /// if it holds anything, then [`SelectionKind::PASTE_PRECEDENCE`] decides.
    pub fn resolve(&self, kind: Option<SelectionKind>) -> Option<&ClipboardEntry> {
        let usable = |kind: SelectionKind| self.entry(kind).filter(|entry| !entry.is_empty());
        if let Some(kind) = kind {
            return usable(kind);
        }
        self.active_kind
            .and_then(usable)
            .or_else(|| SelectionKind::PASTE_PRECEDENCE.into_iter().find_map(usable))
    }

    /// Absolute cells for pasting at `target`. The grid is left to the caller.
    pub fn paste(&self, kind: Option<SelectionKind>, target: Position) -> Option<CellMap> {
        self.resolve(kind).map(|entry| entry.translated(target))
    }

    pub fn has_clipboard(&self) -> bool {
        SelectionKind::ALL.into_iter().any(|kind| self.entry(kind).is_some_and(|entry| !entry.is_empty()))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

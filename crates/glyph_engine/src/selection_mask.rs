use std::collections::HashSet;

use crate::{AddType, Position, Rectangle, Shape, Size};

/// Set of selected cells.
///
/// An empty mask means nothing is selected. Every constructor is total: bad
/// input produces an empty mask rather than an error.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SelectionMask {
    cells: HashSet<Position>,
}

impl SelectionMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// All cells between both corners, inclusive. Corner order doesn't matter.
    pub fn from_rectangle(start: impl Into<Position>, end: impl Into<Position>) -> Self {
        let rect = Rectangle::from_corners(start, end);
        Self {
            cells: rect.positions().collect(),
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn add_rectangle(&mut self, rect: Rectangle) {
        self.cells.extend(rect.positions());
    }

    pub fn is_selected(&self, pos: impl Into<Position>) -> bool {
        self.cells.contains(&pos.into())
    }

    pub fn set_is_selected(&mut self, pos: impl Into<Position>, selected: bool) {
        let pos = pos.into();
        if selected {
            self.cells.insert(pos);
        } else {
            self.cells.remove(&pos);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    /// Selected positions in row-major order.
    pub fn sorted_positions(&self) -> Vec<Position> {
        let mut result: Vec<Position> = self.cells.iter().copied().collect();
        result.sort();
        result
    }

    /// Smallest rectangle containing every selected cell, `None` for an empty mask.
    pub fn bounds(&self) -> Option<Rectangle> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), pos| (min.min(*pos), max.max(*pos)));
        Some(Rectangle::from_corners(min, max))
    }

    /// `Shape::Rectangle` iff the mask fills its bounding box.
    pub fn shape(&self) -> Option<Shape> {
        self.bounds().map(|bounds| self.shape_in(bounds))
    }

    pub fn shape_in(&self, bounds: Rectangle) -> Shape {
        if self.cells.len() == bounds.area() {
            Shape::Rectangle
        } else {
            Shape::Custom
        }
    }

    pub fn union(a: &SelectionMask, b: &SelectionMask) -> SelectionMask {
        SelectionMask {
            cells: a.cells.union(&b.cells).copied().collect(),
        }
    }

    pub fn subtract(a: &SelectionMask, b: &SelectionMask) -> SelectionMask {
        SelectionMask {
            cells: a.cells.difference(&b.cells).copied().collect(),
        }
    }

    /// Combines `incoming` with `current` the way a selection gesture with `add_type` does.
    pub fn combine(current: &SelectionMask, incoming: SelectionMask, add_type: AddType) -> SelectionMask {
        match add_type {
            AddType::Default => incoming,
            AddType::Add => SelectionMask::union(current, &incoming),
            AddType::Subtract => SelectionMask::subtract(current, &incoming),
        }
    }

    pub fn translated(&self, offset: Position) -> SelectionMask {
        SelectionMask {
            cells: self.cells.iter().map(|pos| *pos + offset).collect(),
        }
    }

    /// Drops all cells outside `[0, width) x [0, height)`.
    pub fn clipped(&self, size: Size) -> SelectionMask {
        SelectionMask {
            cells: self.cells.iter().copied().filter(|pos| size.contains(*pos)).collect(),
        }
    }
}

impl FromIterator<Position> for SelectionMask {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        SelectionMask {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Position> for SelectionMask {
    fn extend<T: IntoIterator<Item = Position>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SelectionMask {
    type Item = &'a Position;
    type IntoIter = std::collections::hash_set::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

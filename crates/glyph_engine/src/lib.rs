#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

mod cell;
pub use cell::*;

mod position;
pub use position::*;

mod error;
pub use error::*;

mod grid;
pub use grid::*;

mod selection;
pub use selection::*;

mod selection_mask;
pub use selection_mask::*;

pub mod magic_wand;
pub use magic_wand::{CellMatcher, MagicWandOptions};

pub mod polygon;
pub use polygon::PathPoint;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    /// True if `pos` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Clamps `pos` into `[0, width - 1] x [0, height - 1]`.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(pos.x.clamp(0, (self.width - 1).max(0)), pos.y.clamp(0, (self.height - 1).max(0)))
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<(usize, usize)> for Size {
    fn from(value: (usize, usize)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from(value: (u32, u32)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

/// Axis aligned cell rectangle. `size` counts cells, so a rectangle covering a
/// single cell has size `1x1` and `left() == right()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub start: Position,
    pub size: Size,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(x:{}, y:{}, width: {}, height: {})",
            self.start.x, self.start.y, self.size.width, self.size.height
        )
    }
}

impl Rectangle {
    pub fn new(start: Position, size: Size) -> Self {
        Self { start, size }
    }

    pub fn from_min_size(pos: impl Into<Position>, size: impl Into<Size>) -> Rectangle {
        Rectangle {
            start: pos.into(),
            size: size.into(),
        }
    }

    /// Builds the rectangle spanning both corners, inclusive. Corner order doesn't matter.
    pub fn from_corners(p1: impl Into<Position>, p2: impl Into<Position>) -> Rectangle {
        let p1 = p1.into();
        let p2 = p2.into();
        let min = p1.min(p2);
        let max = p1.max(p2);
        Rectangle {
            start: min,
            size: Size::new(max.x - min.x + 1, max.y - min.y + 1),
        }
    }

    pub fn top_left(&self) -> Position {
        self.start
    }

    /// Last cell covered by the rectangle (inclusive).
    pub fn bottom_right(&self) -> Position {
        Position::new(self.right(), self.bottom())
    }

    pub fn left(&self) -> i32 {
        self.start.x
    }

    pub fn top(&self) -> i32 {
        self.start.y
    }

    pub fn right(&self) -> i32 {
        self.start.x + self.size.width - 1
    }

    pub fn bottom(&self) -> i32 {
        self.start.y + self.size.height - 1
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn area(&self) -> usize {
        self.size.area()
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn is_inside(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.start.x <= pos.x && self.start.y <= pos.y && pos.x < self.start.x + self.size.width && pos.y < self.start.y + self.size.height
    }

    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.start.x..self.start.x + self.size.width
    }

    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.start.y..self.start.y + self.size.height
    }

    /// Iterates all covered positions row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.y_range().flat_map(move |y| self.x_range().map(move |x| Position::new(x, y)))
    }

    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let min = self.start.max(other.start);
        let max = self.bottom_right().min(other.bottom_right());
        if max.x < min.x || max.y < min.y {
            return Rectangle::new(min, Size::default());
        }
        Rectangle::from_corners(min, max)
    }
}

impl Add<Position> for Rectangle {
    type Output = Rectangle;

    fn add(self, rhs: Position) -> Rectangle {
        Rectangle {
            start: self.start + rhs,
            size: self.size,
        }
    }
}

impl AddAssign<Position> for Rectangle {
    fn add_assign(&mut self, rhs: Position) {
        self.start += rhs;
    }
}

impl Sub<Position> for Rectangle {
    type Output = Rectangle;

    fn sub(self, rhs: Position) -> Rectangle {
        Rectangle {
            start: self.start - rhs,
            size: self.size,
        }
    }
}

impl SubAssign<Position> for Rectangle {
    fn sub_assign(&mut self, rhs: Position) {
        self.start -= rhs;
    }
}

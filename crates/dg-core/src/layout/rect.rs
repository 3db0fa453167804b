//! Grid-unit rectangles for rooms, footprints and doors

use serde::{Deserialize, Serialize};

use super::grid::Coord;

/// Room or door extent in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left x coordinate
    pub x: usize,
    /// Top y coordinate
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if a point lies inside the rectangle
    pub fn contains(&self, (x, y): Coord) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle shares any cell with another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Rectangle grown by `margin` on every side
    ///
    /// Returns `None` if the grown rectangle would start left of or above
    /// the origin.
    pub fn expand(&self, margin: usize) -> Option<Rect> {
        Some(Rect {
            x: self.x.checked_sub(margin)?,
            y: self.y.checked_sub(margin)?,
            width: self.width + 2 * margin,
            height: self.height + 2 * margin,
        })
    }

    /// Check if the rectangle fits in a `width` x `height` grid
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.right() <= width && self.bottom() <= height
    }

    /// Every cell in the rectangle, column by column
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (self.x..self.right()).flat_map(move |x| (self.y..self.bottom()).map(move |y| (x, y)))
    }
}

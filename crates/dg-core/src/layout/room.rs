//! Placed rooms

use serde::{Deserialize, Serialize};

use super::cell::RoomNumber;
use super::door::DoorRecord;
use super::grid::Coord;
use super::rect::Rect;
use super::size::{RoomType, SizeClass};
use super::WALL_SIZE;

/// A room committed to the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedRoom {
    /// X coordinate of room interior (left edge)
    pub x: usize,
    /// Y coordinate of room interior (top edge)
    pub y: usize,
    /// Width of room interior
    pub width: usize,
    /// Height of room interior
    pub height: usize,
    /// 1-based placement order
    pub room_number: RoomNumber,
    pub room_type: RoomType,
    pub size: SizeClass,
    /// Perimeter cells in carve order
    pub walls: Vec<Coord>,
    pub doors: Vec<DoorRecord>,
}

impl PlacedRoom {
    /// Interior rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Interior rectangle plus walls
    pub fn footprint(&self) -> Option<Rect> {
        self.rect().expand(WALL_SIZE)
    }

    /// Get room area (interior cells)
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

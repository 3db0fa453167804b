//! Door carving between consecutive rooms
//!
//! A door is cut into the wall segment a new room shares with its
//! predecessor, or with the grid edge for the first room. Corner cells at
//! either end of the segment are never used; the door is a random
//! contiguous slice of what remains.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::GameRng;

use super::cell::{CellKind, RoomNumber};
use super::grid::{Coord, Grid};
use super::placement::Side;
use super::rect::Rect;
use super::style::DoorStyle;

/// Widest door, in cells
pub const MAX_DOOR_WIDTH: usize = 4;

/// Wall of the new room a door sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Which wall of `room` the cell belongs to
    ///
    /// Checked in north, east, south, west order so corner cells resolve
    /// to the first match.
    pub fn of_wall_cell((x, y): Coord, room: &Rect) -> Option<Direction> {
        if y + 1 == room.y {
            Some(Direction::North)
        } else if x == room.right() {
            Some(Direction::East)
        } else if y == room.bottom() {
            Some(Direction::South)
        } else if x + 1 == room.x {
            Some(Direction::West)
        } else {
            None
        }
    }
}

/// What lies on the other side of a door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Connection {
    /// Dungeon entrance through the grid edge
    Outside,
    Room(RoomNumber),
}

/// A door rectangle in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorRecord {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub direction: Direction,
    pub connection: Connection,
    /// Door kind and lock, when a styler assigned one
    pub style: Option<DoorStyle>,
}

impl DoorRecord {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Number of door cells
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every cell along one edge of the grid
pub fn boundary_walls(grid: &Grid, side: Side) -> Vec<Coord> {
    let last_x = grid.width() - 1;
    let last_y = grid.height() - 1;
    match side {
        Side::Top => (0..grid.width()).map(|x| (x, 0)).collect(),
        Side::Right => (0..grid.height()).map(|y| (last_x, y)).collect(),
        Side::Bottom => (0..grid.width()).map(|x| (x, last_y)).collect(),
        Side::Left => (0..grid.height()).map(|y| (0, y)).collect(),
    }
}

/// Wall cells shared by `walls` and `reference`, minus the two end cells
///
/// Keeps the order of `walls`.
pub fn shared_wall(walls: &[Coord], reference: &[Coord]) -> Vec<Coord> {
    let reference: HashSet<Coord> = reference.iter().copied().collect();
    let mut shared: Vec<Coord> = walls
        .iter()
        .copied()
        .filter(|c| reference.contains(c))
        .collect();

    if shared.len() <= 2 {
        return Vec::new();
    }
    shared.pop();
    shared.remove(0);
    shared
}

/// Largest door that may be cut into a shared wall of `len` cells
pub fn max_door_len(len: usize) -> usize {
    MAX_DOOR_WIDTH.min(len.div_ceil(2))
}

/// Cut a door between a freshly carved room and a reference wall
///
/// Returns `None` when the trimmed shared wall is empty. The door cells
/// are stamped onto the grid; the returned record has no style yet.
pub fn carve_door(
    grid: &mut Grid,
    room: &Rect,
    walls: &[Coord],
    reference: &[Coord],
    connection: Connection,
    rng: &mut GameRng,
) -> Option<DoorRecord> {
    let shared = shared_wall(walls, reference);
    if shared.is_empty() {
        log::debug!("no shared wall for room at ({}, {}), no door", room.x, room.y);
        return None;
    }

    let size = rng.roll(1, max_door_len(shared.len()));
    let start = rng.roll(0, shared.len() - size);
    let cells = &shared[start..start + size];

    let anchor = cells[0];
    let Some(direction) = Direction::of_wall_cell(anchor, room) else {
        log::warn!("door anchor {anchor:?} is not on the walls of {room:?}");
        return None;
    };

    let (mut width, mut height) = (1, 1);
    for &(x, y) in cells {
        grid.set_cell(x, y, CellKind::Door);
        if x > anchor.0 {
            width += 1;
        } else if y > anchor.1 {
            height += 1;
        }
    }

    Some(DoorRecord {
        x: anchor.0,
        y: anchor.1,
        width,
        height,
        direction,
        connection,
        style: None,
    })
}

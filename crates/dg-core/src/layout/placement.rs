//! Room placement search
//!
//! The first room is pushed against a random grid edge so that its wall
//! lies on the grid boundary. Every later room must fit on free cells and
//! share wall cells with the room placed before it; the search scans the
//! whole grid and picks one legal coordinate at random.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::GameRng;

use super::cell::CellKind;
use super::grid::{Coord, Grid};
use super::rect::Rect;
use super::sizer::Dimensions;
use super::WALL_SIZE;

/// Grid edge a first room is placed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Check if a room plus its walls fits in the grid at all
pub fn fits_in_grid(grid: &Grid, dims: Dimensions) -> bool {
    dims.width >= 1
        && dims.height >= 1
        && dims.width + 2 * WALL_SIZE <= grid.width()
        && dims.height + 2 * WALL_SIZE <= grid.height()
}

/// Top-left coordinate of a first room against a random edge
///
/// Returns `None` when the room cannot fit in the grid with its walls.
pub fn starting_point(grid: &Grid, dims: Dimensions, rng: &mut GameRng) -> Option<(Coord, Side)> {
    if !fits_in_grid(grid, dims) {
        return None;
    }

    let side = *rng.choose(&Side::ALL)?;

    // Highest top-left coordinate that keeps the walls inside the grid
    let max_x = grid.width() - WALL_SIZE - dims.width;
    let max_y = grid.height() - WALL_SIZE - dims.height;

    let coord = match side {
        Side::Top => (rng.roll(WALL_SIZE, max_x), WALL_SIZE),
        Side::Right => (max_x, rng.roll(WALL_SIZE, max_y)),
        Side::Bottom => (rng.roll(WALL_SIZE, max_x), max_y),
        Side::Left => (WALL_SIZE, rng.roll(WALL_SIZE, max_y)),
    };

    Some((coord, side))
}

/// Check the footprint of a room with top-left interior corner `(x, y)`
///
/// The interior must be blank. The surrounding wall ring may also reuse
/// existing walls, which is how neighbouring rooms end up sharing a wall;
/// doors and interiors are never overwritten.
pub fn footprint_is_clear(grid: &Grid, (x, y): Coord, dims: Dimensions) -> bool {
    let room = Rect::new(x, y, dims.width, dims.height);
    let Some(footprint) = room.expand(WALL_SIZE) else {
        return false;
    };
    if !footprint.fits_within(grid.width(), grid.height()) {
        return false;
    }

    footprint.cells().all(|(cx, cy)| match grid.cell_at(cx, cy) {
        Some(CellKind::Blank) => true,
        Some(CellKind::Wall) => !room.contains((cx, cy)),
        _ => false,
    })
}

/// Check if the wall ring of a candidate touches any of the given walls
fn touches_walls(coord: Coord, dims: Dimensions, walls: &HashSet<Coord>) -> bool {
    let room = Rect::new(coord.0, coord.1, dims.width, dims.height);
    let Some(footprint) = room.expand(WALL_SIZE) else {
        return false;
    };
    footprint
        .cells()
        .filter(|&cell| !room.contains(cell))
        .any(|cell| walls.contains(&cell))
}

/// Every legal top-left coordinate for a room next to `prev_walls`
///
/// Scans the full grid in column order, so the result is deterministic for
/// a given grid.
pub fn valid_room_coords(grid: &Grid, prev_walls: &[Coord], dims: Dimensions) -> Vec<Coord> {
    if !fits_in_grid(grid, dims) {
        return Vec::new();
    }

    let walls: HashSet<Coord> = prev_walls.iter().copied().collect();
    let mut coords = Vec::new();

    for x in WALL_SIZE..=(grid.width() - WALL_SIZE - dims.width) {
        for y in WALL_SIZE..=(grid.height() - WALL_SIZE - dims.height) {
            if touches_walls((x, y), dims, &walls) && footprint_is_clear(grid, (x, y), dims) {
                coords.push((x, y));
            }
        }
    }

    log::trace!(
        "{} candidate positions for a {}x{} room",
        coords.len(),
        dims.width,
        dims.height
    );

    coords
}

/// Pick a random legal position next to the previous room
///
/// `None` means the room does not fit anywhere and should be dropped.
pub fn choose_placement(
    grid: &Grid,
    prev_walls: &[Coord],
    dims: Dimensions,
    rng: &mut GameRng,
) -> Option<Coord> {
    let coords = valid_room_coords(grid, prev_walls, dims);
    rng.choose(&coords).copied()
}

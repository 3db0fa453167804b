//! Stamping rooms onto the grid

use super::cell::{CellKind, RoomNumber};
use super::grid::{Coord, Grid};
use super::rect::Rect;
use super::WALL_SIZE;

/// Carve a room interior and its surrounding walls
///
/// Returns the wall cells in stamping order (column by column, top to
/// bottom). Cells outside the grid are skipped. No overlap check happens
/// here: callers only pass rectangles accepted by the placement search.
pub fn carve_room(grid: &mut Grid, room: Rect, room_number: RoomNumber) -> Vec<Coord> {
    let margin = WALL_SIZE as isize;
    let mut walls = Vec::with_capacity(2 * (room.width + room.height) + 4);

    for dx in -margin..(room.width as isize + margin) {
        for dy in -margin..(room.height as isize + margin) {
            let Some((x, y)) = grid.offset((room.x, room.y), dx, dy) else {
                continue;
            };

            if room.contains((x, y)) {
                grid.set_cell(x, y, CellKind::Interior(room_number));
            } else {
                grid.set_cell(x, y, CellKind::Wall);
                walls.push((x, y));
            }
        }
    }

    walls
}

//! Room dimension rules
//!
//! Regular rooms roll width and height independently from their size
//! class. Hallways roll a length and a thickness and lay them out along a
//! random or forced orientation. Everything is clamped so a room plus its
//! walls never exceeds the grid.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::rng::GameRng;
use crate::settings::RoomRequest;

use super::size::{DimensionRange, DimensionTable, HALL_LENGTH_MIN, HALL_WIDTH_MAX, HALL_WIDTH_MIN};

/// Interior size of a room in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Clamp so the room leaves space for a wall on each side of the grid
    pub fn clamp_to_grid(self, grid_width: usize, grid_height: usize) -> Self {
        Self {
            width: self.width.min(grid_width.saturating_sub(2)),
            height: self.height.min(grid_height.saturating_sub(2)),
        }
    }
}

/// Hallway dimensions: one long side, one thin side
///
/// `horizontal` forces the orientation; otherwise it is a coin flip. The
/// range must reach `HALL_LENGTH_MIN`; `DimensionTable::range_for` checks it.
pub fn hallway_dimensions(
    range: DimensionRange,
    horizontal: Option<bool>,
    rng: &mut GameRng,
) -> Dimensions {
    let horizontal = horizontal.unwrap_or_else(|| rng.coin());

    let length = rng.roll(HALL_LENGTH_MIN.max(range.min), range.max);
    let thickness = rng.roll(HALL_WIDTH_MIN, HALL_WIDTH_MAX);

    if horizontal {
        Dimensions::new(length, thickness)
    } else {
        Dimensions::new(thickness, length)
    }
}

/// Resolve a request to clamped room dimensions
pub fn room_dimensions(
    table: &DimensionTable,
    grid_width: usize,
    grid_height: usize,
    request: &RoomRequest,
    rng: &mut GameRng,
) -> Result<Dimensions, LayoutError> {
    if !request.room_type.allows(request.size) {
        return Err(LayoutError::SizeNotAllowed {
            room_type: request.room_type,
            size: request.size,
        });
    }

    let range = table.range_for(request.size, request.room_type)?;

    let dims = if request.room_type.is_linear() {
        hallway_dimensions(range, request.horizontal, rng)
    } else {
        Dimensions::new(rng.roll(range.min, range.max), rng.roll(range.min, range.max))
    };

    Ok(dims.clamp_to_grid(grid_width, grid_height))
}

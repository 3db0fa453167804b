//! Dungeon layout
//!
//! Contains the cell grid, room sizing and placement, door carving, and
//! the assembler that chains rooms together.

mod assembler;
mod carve;
mod cell;
mod door;
mod grid;
mod placement;
mod rect;
mod result;
mod room;
mod size;
mod sizer;
mod style;

/// Thickness of the wall ring around every room interior
pub const WALL_SIZE: usize = 1;

pub use assembler::{AssemblerState, DungeonAssembler, generate_layout};
pub use carve::carve_room;
pub use cell::{CellKind, RoomNumber};
pub use door::{
    Connection, Direction, DoorRecord, MAX_DOOR_WIDTH, boundary_walls, carve_door, max_door_len,
    shared_wall,
};
pub use grid::{Coord, Grid};
pub use placement::{
    Side, choose_placement, fits_in_grid, footprint_is_clear, starting_point, valid_room_coords,
};
pub use rect::Rect;
pub use result::{DoorKey, DoorLookup, Layout, RoomDoor};
pub use room::PlacedRoom;
pub use size::{
    DimensionRange, DimensionTable, HALL_LENGTH_MIN, HALL_WIDTH_MAX, HALL_WIDTH_MIN, RoomType,
    SizeClass,
};
pub use sizer::{Dimensions, hallway_dimensions, room_dimensions};
pub use style::{
    DoorFlags, DoorKind, DoorStyle, DoorStyleMode, DoorStyler, LOCKED_CHANCE, Probability,
    Unstyled, WeightedDoorStyles, door_probability, secret_probability,
};

//! dg-core: Procedural dungeon layout engine
//!
//! Places an ordered list of requested rooms on a rectangular grid. Each
//! room shares a wall with the room placed before it and is joined to it
//! by a door; the first room opens onto the grid edge. The engine does no
//! I/O and is fully deterministic for a given seed.
//!
//! ```
//! use dg_core::{GameRng, MapSettings, RoomRequest, generate_layout};
//!
//! let room: RoomRequest = "small".parse().unwrap();
//! let settings = MapSettings::new(20, 20, vec![room; 3]);
//! let layout = generate_layout(&settings, &mut GameRng::new(7)).unwrap();
//! assert!(!layout.rooms.is_empty());
//! ```

pub mod error;
pub mod layout;
pub mod rng;
pub mod settings;

pub use error::LayoutError;
pub use layout::{
    CellKind, Connection, DoorRecord, DungeonAssembler, Grid, Layout, PlacedRoom, RoomType,
    SizeClass, generate_layout,
};
pub use rng::GameRng;
pub use settings::{MapSettings, RoomRequest};

//! Dungeon assembly
//!
//! Walks the room requests in order. Each request is sized, placed next to
//! the previous room (or against a grid edge for the first room), carved,
//! and connected with a door. Requests that do not fit anywhere are
//! dropped and the previous room stays the anchor for the next request.

use crate::error::LayoutError;
use crate::rng::GameRng;
use crate::settings::MapSettings;

use super::carve::carve_room;
use super::door::{Connection, boundary_walls, carve_door};
use super::grid::{Coord, Grid};
use super::placement::{Side, choose_placement, starting_point};
use super::rect::Rect;
use super::result::Layout;
use super::room::PlacedRoom;
use super::sizer::room_dimensions;
use super::style::DoorStyler;

/// Progress through the request list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    /// Nothing processed yet
    Empty,
    /// Next request to process
    Placing(usize),
    Done,
}

/// Builds one layout from one settings value
pub struct DungeonAssembler<'a> {
    settings: &'a MapSettings,
    grid: Grid,
    rooms: Vec<PlacedRoom>,
    /// Index into `rooms` of the room the next request attaches to
    previous: Option<usize>,
    state: AssemblerState,
    styler: Box<dyn DoorStyler>,
}

impl<'a> DungeonAssembler<'a> {
    /// Validate settings and allocate a blank grid
    pub fn new(settings: &'a MapSettings) -> Result<Self, LayoutError> {
        settings.validate()?;
        Ok(Self {
            settings,
            grid: Grid::new(settings.grid_width, settings.grid_height),
            rooms: Vec::with_capacity(settings.rooms.len()),
            previous: None,
            state: AssemblerState::Empty,
            styler: settings.door_styles.styler(),
        })
    }

    /// Replace the door styler chosen by the settings
    pub fn with_styler(mut self, styler: Box<dyn DoorStyler>) -> Self {
        self.styler = styler;
        self
    }

    pub fn state(&self) -> AssemblerState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[PlacedRoom] {
        &self.rooms
    }

    /// Process one request and return the new state
    pub fn step(&mut self, rng: &mut GameRng) -> Result<AssemblerState, LayoutError> {
        let index = match self.state {
            AssemblerState::Empty => 0,
            AssemblerState::Placing(i) => i,
            AssemblerState::Done => return Ok(AssemblerState::Done),
        };

        let Some(request) = self.settings.rooms.get(index) else {
            self.state = AssemblerState::Done;
            return Ok(self.state);
        };

        let dims = room_dimensions(
            &self.settings.dimensions,
            self.grid.width(),
            self.grid.height(),
            request,
            rng,
        )?;

        let previous = self.previous.map(|i| &self.rooms[i]);
        let placement: Option<(Coord, Option<Side>)> = match previous {
            Some(prev) => choose_placement(&self.grid, &prev.walls, dims, rng).map(|c| (c, None)),
            None => starting_point(&self.grid, dims, rng).map(|(c, side)| (c, Some(side))),
        };

        match placement {
            None => {
                log::debug!(
                    "dropping request {} ({} {}, {}x{}): no room left",
                    index + 1,
                    request.size,
                    request.room_type,
                    dims.width,
                    dims.height
                );
            }
            Some(((x, y), side)) => {
                let room_number = self.rooms.len() as u32 + 1;
                let rect = Rect::new(x, y, dims.width, dims.height);
                let walls = carve_room(&mut self.grid, rect, room_number);

                let (reference, connection) = match (self.previous, side) {
                    (Some(i), _) => (
                        self.rooms[i].walls.clone(),
                        Connection::Room(self.rooms[i].room_number),
                    ),
                    (None, Some(side)) => (boundary_walls(&self.grid, side), Connection::Outside),
                    (None, None) => (Vec::new(), Connection::Outside),
                };

                let mut doors = Vec::new();
                if let Some(mut door) =
                    carve_door(&mut self.grid, &rect, &walls, &reference, connection, rng)
                {
                    door.style = self.styler.style(rng);
                    doors.push(door);
                }

                log::debug!(
                    "room {room_number} ({} {}) at ({x}, {y}) {}x{} with {} door(s)",
                    request.size,
                    request.room_type,
                    dims.width,
                    dims.height,
                    doors.len()
                );

                self.rooms.push(PlacedRoom {
                    x,
                    y,
                    width: dims.width,
                    height: dims.height,
                    room_number,
                    room_type: request.room_type,
                    size: request.size,
                    walls,
                    doors,
                });
                self.previous = Some(self.rooms.len() - 1);
            }
        }

        self.state = if index + 1 < self.settings.rooms.len() {
            AssemblerState::Placing(index + 1)
        } else {
            AssemblerState::Done
        };
        Ok(self.state)
    }

    /// Process every remaining request and hand over the layout
    pub fn run(mut self, rng: &mut GameRng) -> Result<Layout, LayoutError> {
        while self.step(rng)? != AssemblerState::Done {}

        log::debug!(
            "placed {} of {} rooms",
            self.rooms.len(),
            self.settings.rooms.len()
        );
        log::trace!("layout grid:\n{}", self.grid.dump());

        Ok(Layout {
            grid: self.grid,
            rooms: self.rooms,
        })
    }
}

/// Generate a layout from settings
pub fn generate_layout(settings: &MapSettings, rng: &mut GameRng) -> Result<Layout, LayoutError> {
    DungeonAssembler::new(settings)?.run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style::{DoorKind, DoorStyle};
    use crate::layout::{CellKind, DimensionRange, RoomType, SizeClass};
    use crate::settings::RoomRequest;

    fn requests(n: usize, size: SizeClass) -> Vec<RoomRequest> {
        vec![RoomRequest::new(size, RoomType::Room); n]
    }

    #[test]
    fn test_state_machine() {
        let settings = MapSettings::new(30, 30, requests(2, SizeClass::Small));
        let mut rng = GameRng::new(42);
        let mut assembler = DungeonAssembler::new(&settings).unwrap();

        assert_eq!(assembler.state(), AssemblerState::Empty);
        assert_eq!(assembler.step(&mut rng).unwrap(), AssemblerState::Placing(1));
        assert_eq!(assembler.rooms().len(), 1);
        assert_eq!(assembler.step(&mut rng).unwrap(), AssemblerState::Done);
        assert_eq!(assembler.step(&mut rng).unwrap(), AssemblerState::Done);
        assert_eq!(assembler.rooms().len(), 2);
    }

    #[test]
    fn test_empty_request_list() {
        let settings = MapSettings::new(10, 10, vec![]);
        let mut rng = GameRng::new(1);
        let layout = generate_layout(&settings, &mut rng).unwrap();
        assert!(layout.rooms.is_empty());
        assert_eq!(layout.grid.count(CellKind::Blank), 100);
    }

    #[test]
    fn test_rooms_numbered_in_order() {
        let settings = MapSettings::new(40, 40, requests(6, SizeClass::Small));
        let mut rng = GameRng::new(3);
        let layout = generate_layout(&settings, &mut rng).unwrap();

        for (i, room) in layout.rooms.iter().enumerate() {
            assert_eq!(room.room_number as usize, i + 1);
            assert_eq!(layout.grid.room_cells(room.room_number).len(), room.area());
        }
    }

    #[test]
    fn test_first_room_opens_outside() {
        let settings = MapSettings::new(20, 20, requests(3, SizeClass::Medium));
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let layout = generate_layout(&settings, &mut rng).unwrap();
            let first = &layout.rooms[0];
            assert_eq!(first.doors.len(), 1);
            assert_eq!(first.doors[0].connection, Connection::Outside);
            for room in &layout.rooms[1..] {
                for door in &room.doors {
                    assert_eq!(door.connection, Connection::Room(room.room_number - 1));
                }
            }
        }
    }

    #[test]
    fn test_dropped_room_keeps_previous_anchor() {
        // A massive room clamps to the whole 7x7 grid and can never sit
        // beside room 1; the 1x1 request after it still attaches to room 1.
        let mut settings = MapSettings::new(
            7,
            7,
            vec![
                RoomRequest::new(SizeClass::Tiny, RoomType::Room),
                RoomRequest::new(SizeClass::Massive, RoomType::Room),
                RoomRequest::new(SizeClass::Tiny, RoomType::Room),
            ],
        );
        settings.dimensions.tiny = DimensionRange::new(1, 1);

        for seed in 0..30 {
            let mut rng = GameRng::new(seed);
            let layout = generate_layout(&settings, &mut rng).unwrap();
            assert_eq!(layout.rooms.len(), 2);
            assert_eq!(layout.rooms[1].room_number, 2);
            assert_eq!(layout.rooms[1].size, SizeClass::Tiny);
            for door in &layout.rooms[1].doors {
                assert_eq!(door.connection, Connection::Room(1));
            }
        }
    }

    #[test]
    fn test_configuration_error_aborts() {
        let settings = MapSettings::new(
            20,
            20,
            vec![RoomRequest::new(SizeClass::Tiny, RoomType::GreatHall)],
        );
        let mut rng = GameRng::new(1);
        assert!(matches!(
            generate_layout(&settings, &mut rng),
            Err(LayoutError::SizeNotAllowed { .. })
        ));
    }

    struct AlwaysIron;

    impl DoorStyler for AlwaysIron {
        fn style(&mut self, _rng: &mut GameRng) -> Option<DoorStyle> {
            Some(DoorStyle::new(DoorKind::Iron, true))
        }
    }

    #[test]
    fn test_custom_styler() {
        let settings = MapSettings::new(30, 30, requests(4, SizeClass::Small));
        let mut rng = GameRng::new(12);
        let layout = DungeonAssembler::new(&settings)
            .unwrap()
            .with_styler(Box::new(AlwaysIron))
            .run(&mut rng)
            .unwrap();

        let doors: Vec<_> = layout.rooms.iter().flat_map(|r| r.doors.iter()).collect();
        assert!(!doors.is_empty());
        for door in doors {
            assert_eq!(door.style, Some(DoorStyle::new(DoorKind::Iron, true)));
        }
        assert_eq!(layout.door_lookup().keys.len(), layout.door_count());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let settings = MapSettings::new(30, 20, requests(8, SizeClass::Medium));
        let a = generate_layout(&settings, &mut GameRng::new(77)).unwrap();
        let b = generate_layout(&settings, &mut GameRng::new(77)).unwrap();
        assert_eq!(a, b);
    }
}

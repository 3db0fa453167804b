use proptest::prelude::*;
use strum::IntoEnumIterator;

use dg_core::layout::{CellKind, Connection, max_door_len, shared_wall};
use dg_core::{GameRng, Layout, MapSettings, RoomRequest, RoomType, SizeClass, generate_layout};

fn request_strategy() -> impl Strategy<Value = RoomRequest> {
    let types: Vec<RoomType> = RoomType::iter().collect();
    (
        prop::sample::select(types),
        prop::sample::select(SizeClass::ALL.to_vec()),
        any::<Option<bool>>(),
    )
        .prop_map(|(room_type, size, horizontal)| {
            let size = if room_type.allows(size) {
                size
            } else {
                room_type.allowed_sizes()[0]
            };
            RoomRequest {
                size,
                room_type,
                horizontal,
            }
        })
}

fn settings_strategy() -> impl Strategy<Value = MapSettings> {
    (
        3_usize..=40,
        3_usize..=40,
        prop::collection::vec(request_strategy(), 0..10),
    )
        .prop_map(|(w, h, rooms)| MapSettings::new(w, h, rooms))
}

fn generate(settings: &MapSettings, seed: u64) -> Layout {
    generate_layout(settings, &mut GameRng::new(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rooms_stay_inside_grid(settings in settings_strategy(), seed in any::<u64>()) {
        let layout = generate(&settings, seed);
        prop_assert!(layout.rooms.len() <= settings.rooms.len());
        for room in &layout.rooms {
            prop_assert!(room.x >= 1 && room.y >= 1);
            prop_assert!(room.x + room.width < settings.grid_width);
            prop_assert!(room.y + room.height < settings.grid_height);
        }
    }

    #[test]
    fn rooms_never_overlap(settings in settings_strategy(), seed in any::<u64>()) {
        let layout = generate(&settings, seed);
        for (i, a) in layout.rooms.iter().enumerate() {
            prop_assert_eq!(layout.grid.room_cells(a.room_number).len(), a.area());
            for b in &layout.rooms[i + 1..] {
                prop_assert!(
                    !a.rect().intersects(&b.rect()),
                    "rooms {} and {} overlap", a.room_number, b.room_number
                );
            }
        }
    }

    #[test]
    fn interiors_are_walled_off(settings in settings_strategy(), seed in any::<u64>()) {
        let layout = generate(&settings, seed);
        for room in &layout.rooms {
            for (x, y) in room.rect().cells() {
                for dx in -1_isize..=1 {
                    for dy in -1_isize..=1 {
                        let cell = layout
                            .grid
                            .offset((x, y), dx, dy)
                            .and_then(|(nx, ny)| layout.grid.cell_at(nx, ny));
                        let ok = matches!(cell, Some(CellKind::Wall) | Some(CellKind::Door))
                            || cell == Some(CellKind::Interior(room.room_number));
                        prop_assert!(
                            ok,
                            "cell next to ({x}, {y}) in room {} is {cell:?}",
                            room.room_number
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn rooms_form_a_chain(settings in settings_strategy(), seed in any::<u64>()) {
        let layout = generate(&settings, seed);

        if let Some(first) = layout.rooms.first() {
            prop_assert_eq!(first.room_number, 1);
            prop_assert_eq!(first.doors.len(), 1);
            prop_assert_eq!(first.doors[0].connection, Connection::Outside);
        }

        for pair in layout.rooms.windows(2) {
            let (prev, room) = (&pair[0], &pair[1]);
            prop_assert_eq!(room.room_number, prev.room_number + 1);

            let footprint = room.footprint().unwrap();
            prop_assert!(footprint.cells().any(|c| prev.walls.contains(&c)));

            let shared = shared_wall(&room.walls, &prev.walls);
            if room.doors.is_empty() {
                prop_assert!(shared.is_empty());
            }
            for door in &room.doors {
                prop_assert_eq!(door.connection, Connection::Room(prev.room_number));
                prop_assert!(door.len() >= 1 && door.len() <= max_door_len(shared.len()));
                for cell in door.rect().cells() {
                    prop_assert!(shared.contains(&cell));
                }
            }
        }
    }

    #[test]
    fn door_cells_are_doors(settings in settings_strategy(), seed in any::<u64>()) {
        let layout = generate(&settings, seed);
        let mut door_cells = 0;
        for room in &layout.rooms {
            for door in &room.doors {
                prop_assert!(door.width == 1 || door.height == 1);
                for (x, y) in door.rect().cells() {
                    prop_assert_eq!(layout.grid.cell_at(x, y), Some(CellKind::Door));
                    door_cells += 1;
                }
            }
        }
        prop_assert_eq!(layout.grid.count(CellKind::Door), door_cells);
    }

    #[test]
    fn same_seed_same_layout(settings in settings_strategy(), seed in any::<u64>()) {
        prop_assert_eq!(generate(&settings, seed), generate(&settings, seed));
    }
}

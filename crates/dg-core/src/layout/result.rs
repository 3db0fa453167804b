//! Generated layout and door lookups for downstream consumers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cell::RoomNumber;
use super::door::{Connection, DoorRecord};
use super::grid::Grid;
use super::room::PlacedRoom;
use super::style::DoorKind;

/// Output of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub grid: Grid,
    pub rooms: Vec<PlacedRoom>,
}

/// A door seen from one of the rooms it opens into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDoor {
    pub door: DoorRecord,
    /// Room or outside on the far side
    pub leads_to: Connection,
}

/// Key for a locked door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorKey {
    pub kind: DoorKind,
    pub connects: [Connection; 2],
}

/// Doors grouped by room, plus keys for every locked door
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorLookup {
    pub doors: BTreeMap<RoomNumber, Vec<RoomDoor>>,
    pub keys: Vec<DoorKey>,
}

impl Layout {
    /// Total number of doors
    pub fn door_count(&self) -> usize {
        self.rooms.iter().map(|r| r.doors.len()).sum()
    }

    /// Index doors by every room they touch
    ///
    /// A door recorded on room `n` that connects to room `m` shows up under
    /// both rooms. Locked doors also produce a key.
    pub fn door_lookup(&self) -> DoorLookup {
        let mut lookup = DoorLookup::default();

        for room in &self.rooms {
            let here = Connection::Room(room.room_number);
            for door in &room.doors {
                lookup.doors.entry(room.room_number).or_default().push(RoomDoor {
                    door: *door,
                    leads_to: door.connection,
                });

                if let Connection::Room(other) = door.connection {
                    lookup.doors.entry(other).or_default().push(RoomDoor {
                        door: *door,
                        leads_to: here,
                    });
                }

                if let Some(style) = door.style.filter(|s| s.is_locked()) {
                    lookup.keys.push(DoorKey {
                        kind: style.kind,
                        connects: [here, door.connection],
                    });
                }
            }
        }

        lookup
    }
}

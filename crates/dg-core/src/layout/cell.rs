//! Occupancy cell types

use serde::{Deserialize, Serialize};

/// 1-based sequential room id
pub type RoomNumber = u32;

/// Classification of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    #[default]
    Blank,
    Wall,
    Door,
    /// Interior of the given room
    Interior(RoomNumber),
}

impl CellKind {
    pub const fn is_blank(&self) -> bool {
        matches!(self, CellKind::Blank)
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self, CellKind::Wall)
    }

    pub const fn is_door(&self) -> bool {
        matches!(self, CellKind::Door)
    }

    /// Room that owns this cell, if it is an interior cell
    pub const fn room_number(&self) -> Option<RoomNumber> {
        match self {
            CellKind::Interior(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if a cell holding `self` may be overwritten with `next`
    ///
    /// Cells never go back to blank, walls may become doors once, and
    /// doors and interiors are final.
    pub fn can_become(&self, next: CellKind) -> bool {
        match (*self, next) {
            (current, next) if current == next => true,
            (CellKind::Blank, _) => true,
            (CellKind::Wall, CellKind::Door) => true,
            _ => false,
        }
    }

    /// Debug symbol for grid dumps
    pub const fn symbol(&self) -> char {
        match self {
            CellKind::Blank => ' ',
            CellKind::Wall => '#',
            CellKind::Door => '+',
            CellKind::Interior(_) => '.',
        }
    }
}

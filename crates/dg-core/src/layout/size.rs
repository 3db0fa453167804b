//! Size classes, dimension ranges and room types
//!
//! Room types are plain tags for downstream consumers, except that some are
//! only built in certain sizes and hallways use their own dimension rule.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::LayoutError;

/// Minimum hallway length
pub const HALL_LENGTH_MIN: usize = 3;
/// Hallway thickness range
pub const HALL_WIDTH_MIN: usize = 1;
pub const HALL_WIDTH_MAX: usize = 1;

/// Named size bucket, smallest first
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SizeClass {
    Tiny,
    Small,
    Medium,
    Large,
    Massive,
}

impl SizeClass {
    /// All size classes, smallest first
    pub const ALL: [SizeClass; 5] = [
        SizeClass::Tiny,
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::Massive,
    ];
}

/// Inclusive integer range for one size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min: usize,
    pub max: usize,
}

impl DimensionRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Non-empty and never zero-sized
    pub fn is_valid(&self) -> bool {
        self.min >= 1 && self.min <= self.max
    }
}

/// Dimension range for every size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionTable {
    pub tiny: DimensionRange,
    pub small: DimensionRange,
    pub medium: DimensionRange,
    pub large: DimensionRange,
    pub massive: DimensionRange,
}

impl Default for DimensionTable {
    fn default() -> Self {
        Self {
            tiny: DimensionRange::new(2, 3),
            small: DimensionRange::new(2, 4),
            medium: DimensionRange::new(2, 5),
            large: DimensionRange::new(3, 10),
            massive: DimensionRange::new(5, 15),
        }
    }
}

impl DimensionTable {
    /// Range for a size class
    pub fn range(&self, size: SizeClass) -> DimensionRange {
        match size {
            SizeClass::Tiny => self.tiny,
            SizeClass::Small => self.small,
            SizeClass::Medium => self.medium,
            SizeClass::Large => self.large,
            SizeClass::Massive => self.massive,
        }
    }

    /// Range for a size class, rejecting empty or zero ranges
    pub fn checked_range(&self, size: SizeClass) -> Result<DimensionRange, LayoutError> {
        let range = self.range(size);
        if range.is_valid() {
            Ok(range)
        } else {
            Err(LayoutError::InvalidRange {
                size,
                min: range.min,
                max: range.max,
            })
        }
    }

    /// Range for a size class under a room type's dimension rule
    ///
    /// Hallways need a range that reaches `HALL_LENGTH_MIN`.
    pub fn range_for(
        &self,
        size: SizeClass,
        room_type: RoomType,
    ) -> Result<DimensionRange, LayoutError> {
        let range = self.checked_range(size)?;
        if room_type.is_linear() && range.max < HALL_LENGTH_MIN {
            return Err(LayoutError::InvalidRange {
                size,
                min: range.min,
                max: range.max,
            });
        }
        Ok(range)
    }

    /// Check every range in the table
    pub fn validate(&self) -> Result<(), LayoutError> {
        SizeClass::ALL
            .iter()
            .try_for_each(|&size| self.checked_range(size).map(|_| ()))
    }
}

/// Room type tag
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RoomType {
    /// Generic room
    #[default]
    Room,
    /// Linear corridor, one cell thick
    Hallway,
    Armory,
    Atrium,
    Ballroom,
    Bathhouse,
    Bedroom,
    Chapel,
    Dining,
    Dormitory,
    GreatHall,
    Kitchen,
    Library,
    Pantry,
    Parlour,
    Storage,
    Study,
    Throne,
    TortureChamber,
    Treasury,
}

impl RoomType {
    /// Check if the room uses the linear hallway dimension rule
    pub fn is_linear(self) -> bool {
        matches!(self, RoomType::Hallway)
    }

    /// Size classes this room type may be built in
    pub fn allowed_sizes(self) -> &'static [SizeClass] {
        use SizeClass::*;
        match self {
            RoomType::Ballroom | RoomType::Dormitory | RoomType::Throne => {
                &[Medium, Large, Massive]
            }
            RoomType::Bathhouse | RoomType::Dining => &[Small, Medium, Large, Massive],
            RoomType::GreatHall => &[Large, Massive],
            RoomType::Pantry | RoomType::Parlour | RoomType::Study | RoomType::TortureChamber => {
                &[Tiny, Small, Medium]
            }
            _ => &SizeClass::ALL,
        }
    }

    /// Check if this room type may be built in the given size
    pub fn allows(self, size: SizeClass) -> bool {
        self.allowed_sizes().contains(&size)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_default_ranges() {
        let table = DimensionTable::default();
        assert_eq!(table.range(SizeClass::Tiny), DimensionRange::new(2, 3));
        assert_eq!(table.range(SizeClass::Small), DimensionRange::new(2, 4));
        assert_eq!(table.range(SizeClass::Medium), DimensionRange::new(2, 5));
        assert_eq!(table.range(SizeClass::Large), DimensionRange::new(3, 10));
        assert_eq!(table.range(SizeClass::Massive), DimensionRange::new(5, 15));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_invalid_range_rejected() {
        let table = DimensionTable {
            medium: DimensionRange::new(6, 4),
            ..DimensionTable::default()
        };
        let err = table.validate().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidRange { size: SizeClass::Medium, min: 6, max: 4 }
        ));

        let zero = DimensionTable {
            tiny: DimensionRange::new(0, 3),
            ..DimensionTable::default()
        };
        assert!(zero.checked_range(SizeClass::Tiny).is_err());
    }

    #[test]
    fn test_hallway_range_must_reach_min_length() {
        let table = DimensionTable {
            tiny: DimensionRange::new(1, 2),
            ..DimensionTable::default()
        };
        assert_eq!(
            table.range_for(SizeClass::Tiny, RoomType::Room).unwrap(),
            DimensionRange::new(1, 2)
        );
        assert!(matches!(
            table.range_for(SizeClass::Tiny, RoomType::Hallway),
            Err(LayoutError::InvalidRange { size: SizeClass::Tiny, min: 1, max: 2 })
        ));
        assert!(
            DimensionTable::default()
                .range_for(SizeClass::Tiny, RoomType::Hallway)
                .is_ok()
        );
    }

    #[test]
    fn test_size_names() {
        assert_eq!(SizeClass::from_str("massive").unwrap(), SizeClass::Massive);
        assert_eq!(SizeClass::Small.to_string(), "small");
        assert!(SizeClass::from_str("huge").is_err());
    }

    #[test]
    fn test_room_type_names() {
        assert_eq!(RoomType::from_str("greatHall").unwrap(), RoomType::GreatHall);
        assert_eq!(RoomType::TortureChamber.to_string(), "tortureChamber");
        let json = serde_json::to_string(&RoomType::GreatHall).unwrap();
        assert_eq!(json, r#""greatHall""#);
    }

    #[test]
    fn test_allowed_sizes() {
        assert!(RoomType::GreatHall.allows(SizeClass::Massive));
        assert!(!RoomType::GreatHall.allows(SizeClass::Medium));
        assert!(!RoomType::Ballroom.allows(SizeClass::Tiny));
        assert!(!RoomType::Pantry.allows(SizeClass::Large));

        // Unrestricted types take every size
        for size in SizeClass::iter() {
            assert!(RoomType::Room.allows(size));
            assert!(RoomType::Hallway.allows(size));
        }
    }

    #[test]
    fn test_only_hallway_is_linear() {
        let linear: Vec<_> = RoomType::iter().filter(|t| t.is_linear()).collect();
        assert_eq!(linear, vec![RoomType::Hallway]);
    }
}

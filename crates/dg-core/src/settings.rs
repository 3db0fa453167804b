//! Generation settings
//!
//! Settings are plain serde structs with camelCase fields so they can be
//! loaded from the same JSON the map form produces.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::{DimensionTable, DoorStyleMode, RoomType, SizeClass};

/// Smallest grid side: one interior cell plus a wall on each side
pub const MIN_GRID_SIDE: usize = 3;

/// One requested room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub size: SizeClass,
    #[serde(default)]
    pub room_type: RoomType,
    /// Forced orientation for linear room types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<bool>,
}

impl RoomRequest {
    pub fn new(size: SizeClass, room_type: RoomType) -> Self {
        Self {
            size,
            room_type,
            horizontal: None,
        }
    }

    /// Force a hallway's orientation
    pub fn oriented(mut self, horizontal: bool) -> Self {
        self.horizontal = Some(horizontal);
        self
    }
}

impl FromStr for RoomRequest {
    type Err = LayoutError;

    /// Parse `size` or `size:roomType`, e.g. `large:greatHall`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (size, room_type) = match s.split_once(':') {
            Some((size, room_type)) => (size, Some(room_type)),
            None => (s, None),
        };

        let size = SizeClass::from_str(size.trim()).map_err(|_| LayoutError::UnknownName {
            what: "size class",
            name: size.trim().to_string(),
        })?;

        let room_type = match room_type {
            Some(name) => RoomType::from_str(name.trim()).map_err(|_| LayoutError::UnknownName {
                what: "room type",
                name: name.trim().to_string(),
            })?,
            None => RoomType::default(),
        };

        Ok(Self::new(size, room_type))
    }
}

/// Everything one generation run needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub grid_width: usize,
    pub grid_height: usize,
    #[serde(default)]
    pub rooms: Vec<RoomRequest>,
    #[serde(default)]
    pub dimensions: DimensionTable,
    #[serde(default)]
    pub door_styles: DoorStyleMode,
}

impl MapSettings {
    pub fn new(grid_width: usize, grid_height: usize, rooms: Vec<RoomRequest>) -> Self {
        Self {
            grid_width,
            grid_height,
            rooms,
            dimensions: DimensionTable::default(),
            door_styles: DoorStyleMode::default(),
        }
    }

    pub fn with_door_styles(mut self, mode: DoorStyleMode) -> Self {
        self.door_styles = mode;
        self
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let settings: MapSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check grid size, the dimension table and every request
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.grid_width < MIN_GRID_SIDE || self.grid_height < MIN_GRID_SIDE {
            return Err(LayoutError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                min: MIN_GRID_SIDE,
            });
        }

        self.dimensions.validate()?;

        for request in &self.rooms {
            if !request.room_type.allows(request.size) {
                return Err(LayoutError::SizeNotAllowed {
                    room_type: request.room_type,
                    size: request.size,
                });
            }
            self.dimensions.range_for(request.size, request.room_type)?;
        }

        Ok(())
    }
}

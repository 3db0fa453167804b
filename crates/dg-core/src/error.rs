//! Configuration errors reported by layout generation
//!
//! Placement exhaustion and doorless rooms are normal outcomes and never
//! surface here.

use thiserror::Error;

use crate::layout::{RoomType, SizeClass};

/// Errors that abort a single generation call
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Grid {width}x{height} is too small: both sides must be at least {min}")]
    GridTooSmall { width: usize, height: usize, min: usize },

    #[error("Invalid dimension range for {size}: {min}..={max}")]
    InvalidRange { size: SizeClass, min: usize, max: usize },

    #[error("Room type {room_type} cannot be {size}")]
    SizeNotAllowed { room_type: RoomType, size: SizeClass },

    #[error("Unknown {what}: '{name}'")]
    UnknownName { what: &'static str, name: String },

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

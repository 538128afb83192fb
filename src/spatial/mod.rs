//! Spatial data structures for generated maps
//!
//! This module contains:
//! - The owned tile grid and tile coordinates
//! - Tile catalog classification
//! - Entity markers and their post-generation placement

/// Player, goal and enemy markers
pub mod entities;
/// Tile grid storage and bounds-checked access
pub mod grid;
/// Tile id classification against the atlas
pub mod tiles;

pub use entities::{Entity, EntityKind, EntitySet};
pub use grid::{EMPTY_TILE, TileGrid, TileId, TilePos};

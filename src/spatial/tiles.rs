//! Tile catalog classification for the bundled dungeon tileset
//!
//! The atlas groups walkable ground and solid walls into fixed id ranges.
//! Consumers use these to decide collision for tiles that were painted by
//! hand rather than produced by the generator.

use crate::spatial::grid::TileId;

/// Broad category of a tile id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Unpainted tile
    Empty,
    /// Walkable ground
    Floor,
    /// Solid wall
    Wall,
    /// Decoration or any other atlas entry
    Other,
}

/// Check if a tile id belongs to the floor ranges of the atlas
pub const fn is_floor_tile(tile: TileId) -> bool {
    matches!(tile, 4..=81 | 191..=218)
}

/// Check if a tile id belongs to the wall range of the atlas
pub const fn is_wall_tile(tile: TileId) -> bool {
    matches!(tile, 88..=190)
}

/// Classify a tile id using the atlas ranges
pub const fn classify(tile: TileId) -> TileClass {
    // Any negative id is treated like the empty sentinel
    if tile < 0 {
        TileClass::Empty
    } else if is_floor_tile(tile) {
        TileClass::Floor
    } else if is_wall_tile(tile) {
        TileClass::Wall
    } else {
        TileClass::Other
    }
}

/// Tile pair used when painting a generated maze
///
/// Explicit ids always win over the atlas ranges, so a generator run with
/// ids outside the catalog still classifies its own output correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePalette {
    /// Tile id painted for walls and the border ring
    pub wall: TileId,
    /// Tile id painted for carved corridors
    pub floor: TileId,
}

impl TilePalette {
    /// Create a palette from explicit wall and floor ids
    pub const fn new(wall: TileId, floor: TileId) -> Self {
        Self { wall, floor }
    }

    /// Classify a tile, preferring this palette's ids over the atlas ranges
    pub const fn classify(&self, tile: TileId) -> TileClass {
        if tile == self.wall {
            TileClass::Wall
        } else if tile == self.floor {
            TileClass::Floor
        } else {
            classify(tile)
        }
    }
}

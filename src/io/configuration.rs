//! Generation constants and runtime configuration defaults

// Maze shape
/// Default corridor thickness in tiles
pub const DEFAULT_CORRIDOR_WIDTH: usize = 3;
/// Smallest cell-grid extent per axis; smaller layouts are clamped up to this
pub const MIN_CELL_DIMENSION: usize = 2;
/// One extra loop attempt is made per this many maze cells
pub const LOOP_DENSITY_DIVISOR: usize = 12;

// Default map dimensions, matching the editor session defaults
/// Default grid width in tiles
pub const DEFAULT_GRID_W: usize = 80;
/// Default grid height in tiles
pub const DEFAULT_GRID_H: usize = 60;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Tile catalog defaults (indices into the tileset atlas)
/// Default wall tile id
pub const DEFAULT_WALL_TILE_ID: i32 = 92;
/// Default floor tile id
pub const DEFAULT_FLOOR_TILE_ID: i32 = 5;
/// Pixels per tile in the tileset sheet
pub const DEFAULT_TILE_SIZE_PX: u32 = 32;
/// Player field-of-view radius stored in session metadata
pub const FOV_RADIUS_TILES: u32 = 7;

// Session document
/// Current session document format version
pub const DOCUMENT_VERSION: u32 = 1;
/// Default save path used by the editor
pub const DEFAULT_SAVE_PATH: &str = "map.json";
/// Notes embedded in saved documents
pub const DOCUMENT_NOTES: &str =
    "Load this JSON in Rust. Use tiles[y][x] to draw. Entities list for spawns.";

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of maps generated per invocation
pub const DEFAULT_MAP_COUNT: usize = 1;

// Output settings
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Edge length in pixels of one tile in preview images
pub const PREVIEW_TILE_PX: u32 = 4;
/// Preview colour for wall tiles
pub const PREVIEW_WALL_RGBA: [u8; 4] = [40, 36, 48, 255];
/// Preview colour for floor tiles
pub const PREVIEW_FLOOR_RGBA: [u8; 4] = [214, 206, 178, 255];
/// Preview colour for tiles outside the wall/floor catalog
pub const PREVIEW_OTHER_RGBA: [u8; 4] = [120, 120, 120, 255];
/// Preview colour for the player marker
pub const PREVIEW_PLAYER_RGBA: [u8; 4] = [52, 152, 219, 255];
/// Preview colour for the goal marker
pub const PREVIEW_GOAL_RGBA: [u8; 4] = [46, 204, 113, 255];
/// Preview colour for enemy markers
pub const PREVIEW_ENEMY_RGBA: [u8; 4] = [231, 76, 60, 255];
/// Progress bar width in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

//! Seeded maze generation for tile-based dungeon maps
//!
//! A randomized depth-first walk plans connectivity on a coarse cell grid,
//! the plan is rasterized into corridors of a fixed minimum width, a few
//! extra adjacencies add loops, and the outer ring is sealed with walls.
//! The random source is always supplied by the caller, so every map is
//! reproducible from its seed.

#![forbid(unsafe_code)]

/// Maze generation stages and entry points
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile grid, tile catalog and entity markers
pub mod spatial;

pub use algorithm::{GeneratedMaze, GenerationParams, generate, generate_seeded};
pub use io::error::{MazeError, Result};
pub use spatial::{TileGrid, TileId};

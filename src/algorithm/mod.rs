/// Loop augmentation and border finalization
pub mod augmentation;
/// Visited-cell bitset for the depth-first walk
pub mod bitset;
/// Generation parameters and the maze entry points
pub mod executor;
/// Coarse cell grid geometry
pub mod layout;
/// Corridor stamping onto the tile grid
pub mod rasterizer;
/// Randomized depth-first spanning tree
pub mod spanning_tree;

pub use executor::{GeneratedMaze, GenerationParams, generate, generate_seeded};

//! Loop augmentation and border finalization
//!
//! Extra adjacencies are carved on top of the spanning tree so the maze has
//! cycles. Augmentation only ever adds floor, so it cannot disconnect
//! anything. The wall ring is written last and overrides all carving.

use crate::algorithm::layout::{CellCoord, CellLayout, DIRECTIONS};
use crate::algorithm::rasterizer::Rasterizer;
use crate::io::configuration::LOOP_DENSITY_DIVISOR;
use crate::spatial::grid::{TileGrid, TileId};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Number of loop attempts made for a layout
pub const fn loop_attempts(layout: &CellLayout) -> usize {
    layout.cell_count() / LOOP_DENSITY_DIVISOR
}

/// Carve random extra adjacencies between neighbouring cells
///
/// Each attempt draws a cell (column, then row) and a direction uniformly;
/// when the neighbour exists a line is carved between the two centres
/// regardless of whether the tree already joined them. Returns the number
/// of lines carved.
pub fn augment_loops<R: Rng + ?Sized>(
    rasterizer: &mut Rasterizer<'_>,
    layout: &CellLayout,
    rng: &mut R,
) -> usize {
    let mut carved = 0;

    for _ in 0..loop_attempts(layout) {
        let cell = CellCoord::new(
            rng.random_range(0..layout.cell_width()),
            rng.random_range(0..layout.cell_height()),
        );
        let Some(&direction) = DIRECTIONS.choose(rng) else {
            continue;
        };

        if let Some(neighbor) = layout.neighbor(cell, direction) {
            rasterizer.carve_line(layout.cell_to_tile(cell), layout.cell_to_tile(neighbor));
            carved += 1;
        }
    }

    carved
}

/// Seal the grid by overwriting its outer ring with `wall`
pub fn finalize_border(grid: &mut TileGrid, wall: TileId) {
    grid.fill_border(wall);
}

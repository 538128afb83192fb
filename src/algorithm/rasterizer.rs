//! Paints cells and cell adjacencies onto the tile grid as thick corridors
//!
//! All writes are idempotent overwrites to the floor id, so the output does
//! not depend on the order stamps are applied in.

use crate::algorithm::layout::CellLayout;
use crate::algorithm::spanning_tree::SpanningTree;
use crate::spatial::grid::{TileGrid, TileId, TilePos};

/// Stamps square corridor blocks onto a borrowed grid
pub struct Rasterizer<'a> {
    grid: &'a mut TileGrid,
    corridor_width: usize,
    floor: TileId,
}

impl<'a> Rasterizer<'a> {
    /// Create a rasterizer painting `floor` with the given corridor width
    ///
    /// A corridor width of 0 is treated as 1.
    pub fn new(grid: &'a mut TileGrid, corridor_width: usize, floor: TileId) -> Self {
        Self {
            grid,
            corridor_width: corridor_width.max(1),
            floor,
        }
    }

    /// Corridor width used for each stamp
    pub const fn corridor_width(&self) -> usize {
        self.corridor_width
    }

    /// Grid being painted
    pub fn grid(&self) -> &TileGrid {
        &*self.grid
    }

    /// Paint a `corridor_width`-square block centred on `center`
    ///
    /// The block spans `center - half .. center - half + corridor_width` on
    /// both axes with `half = corridor_width / 2`, clipped to the grid.
    /// Returns the number of tiles written.
    pub fn carve_corridor(&mut self, center: TilePos) -> usize {
        let width = self.corridor_width as i32;
        let first_x = center.x - width / 2;
        let first_y = center.y - width / 2;

        let mut written = 0;
        for y in first_y..first_y + width {
            for x in first_x..first_x + width {
                if self.grid.paint(TilePos::new(x, y), self.floor) {
                    written += 1;
                }
            }
        }
        written
    }

    /// Stamp corridors along the straight segment from `a` to `b`
    ///
    /// The segment is sampled at `max(|dx|, |dy|) + 1` evenly spaced points,
    /// each rounded to the nearest tile, so consecutive stamps are never more
    /// than one tile apart whatever the slope.
    pub fn carve_line(&mut self, a: TilePos, b: TilePos) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.carve_corridor(a);
            return;
        }

        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            let x = (f64::from(dx).mul_add(t, f64::from(a.x))).round() as i32;
            let y = (f64::from(dy).mul_add(t, f64::from(a.y))).round() as i32;
            self.carve_corridor(TilePos::new(x, y));
        }
    }

    /// Paint the start cell and every edge of a spanning tree
    ///
    /// Each edge is drawn as a line between the two cell centres followed
    /// by an explicit stamp on the destination centre.
    pub fn carve_tree(&mut self, layout: &CellLayout, tree: &SpanningTree) {
        self.carve_corridor(layout.cell_to_tile(tree.start));

        for edge in &tree.edges {
            let from = layout.cell_to_tile(edge.from);
            let to = layout.cell_to_tile(edge.to);
            self.carve_line(from, to);
            self.carve_corridor(to);
        }
    }
}

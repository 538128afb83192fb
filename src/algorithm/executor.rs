//! Maze generation entry points
//!
//! Runs the three stages in order: spanning tree over the cell grid,
//! corridor rasterization with loop augmentation, then border finalization.
//! Generation is a pure function of the parameters and the random stream;
//! the caller owns both the RNG and the returned grid.

use crate::algorithm::augmentation::{augment_loops, finalize_border};
use crate::algorithm::layout::{CellCoord, CellLayout};
use crate::algorithm::rasterizer::Rasterizer;
use crate::algorithm::spanning_tree::build_spanning_tree;
use crate::io::configuration::{
    DEFAULT_CORRIDOR_WIDTH, DEFAULT_FLOOR_TILE_ID, DEFAULT_GRID_H, DEFAULT_GRID_W, DEFAULT_SEED,
    DEFAULT_WALL_TILE_ID,
};
use crate::spatial::grid::{TileGrid, TileId, TilePos};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters for one maze generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationParams {
    /// Grid width in tiles
    pub tile_width: usize,
    /// Grid height in tiles
    pub tile_height: usize,
    /// Tile id for walls and the border ring
    pub wall_tile_id: TileId,
    /// Tile id for carved corridors
    pub floor_tile_id: TileId,
    /// Corridor thickness in tiles
    pub corridor_width: usize,
    /// Seed used by [`generate_seeded`]
    pub rng_seed: u64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_GRID_W,
            tile_height: DEFAULT_GRID_H,
            wall_tile_id: DEFAULT_WALL_TILE_ID,
            floor_tile_id: DEFAULT_FLOOR_TILE_ID,
            corridor_width: DEFAULT_CORRIDOR_WIDTH,
            rng_seed: DEFAULT_SEED,
        }
    }
}

impl GenerationParams {
    /// Parameters for a grid with the default corridor width and seed
    pub const fn new(
        tile_width: usize,
        tile_height: usize,
        wall_tile_id: TileId,
        floor_tile_id: TileId,
    ) -> Self {
        Self {
            tile_width,
            tile_height,
            wall_tile_id,
            floor_tile_id,
            corridor_width: DEFAULT_CORRIDOR_WIDTH,
            rng_seed: DEFAULT_SEED,
        }
    }

    /// Replace the corridor width
    #[must_use]
    pub const fn with_corridor_width(mut self, corridor_width: usize) -> Self {
        self.corridor_width = corridor_width;
        self
    }

    /// Replace the seed
    #[must_use]
    pub const fn with_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Copy with every field clamped into its valid range
    ///
    /// Tile dimensions and corridor width are raised to at least 1.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            tile_width: self.tile_width.max(1),
            tile_height: self.tile_height.max(1),
            corridor_width: self.corridor_width.max(1),
            ..*self
        }
    }

    /// Cell grid these parameters produce
    pub fn layout(&self) -> CellLayout {
        let params = self.normalized();
        CellLayout::new(params.tile_width, params.tile_height, params.corridor_width)
    }
}

/// Output of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// Finished tile grid, exactly `tile_width × tile_height`
    pub grid: TileGrid,
    /// Cell grid the maze was planned on
    pub layout: CellLayout,
    /// Cell the spanning tree started from
    pub start: CellCoord,
    /// Number of extra adjacencies carved by loop augmentation
    pub loops_carved: usize,
    /// Set when the parameters could not host a proper maze
    ///
    /// The grid is still valid and sealed, but the cell grid had to be
    /// clamped, so some cell centres may lie on or beyond the border and the
    /// interior may be a single block or fragmented.
    pub degenerate: bool,
}

impl GeneratedMaze {
    /// Tile-space centre of the start cell
    pub fn start_tile(&self) -> TilePos {
        self.layout.cell_to_tile(self.start)
    }

    /// Take ownership of the grid
    pub fn into_grid(self) -> TileGrid {
        self.grid
    }
}

/// Generate a maze using a caller-supplied random source
///
/// Never fails: out-of-range parameters are clamped. Identical parameters
/// and an identically seeded `rng` produce an identical grid.
pub fn generate<R: Rng + ?Sized>(params: &GenerationParams, rng: &mut R) -> GeneratedMaze {
    let params = params.normalized();
    let layout = params.layout();

    if layout.is_clamped() {
        log::warn!(
            "degenerate maze: {}x{} tiles cannot fit two cells of corridor width {} per axis",
            params.tile_width,
            params.tile_height,
            params.corridor_width
        );
    }

    let mut grid = TileGrid::filled(params.tile_width, params.tile_height, params.wall_tile_id);
    let tree = build_spanning_tree(&layout, rng);

    let loops_carved = {
        let mut rasterizer = Rasterizer::new(&mut grid, layout.corridor_width(), params.floor_tile_id);
        rasterizer.carve_tree(&layout, &tree);
        augment_loops(&mut rasterizer, &layout, rng)
    };

    finalize_border(&mut grid, params.wall_tile_id);

    log::debug!(
        "generated {}x{} maze on {}x{} cells, {} loops, {} floor tiles",
        params.tile_width,
        params.tile_height,
        layout.cell_width(),
        layout.cell_height(),
        loops_carved,
        grid.count(params.floor_tile_id)
    );

    GeneratedMaze {
        grid,
        layout,
        start: tree.start,
        loops_carved,
        degenerate: layout.is_clamped(),
    }
}

/// Generate a maze with a `StdRng` seeded from `params.rng_seed`
pub fn generate_seeded(params: &GenerationParams) -> GeneratedMaze {
    let mut rng = StdRng::seed_from_u64(params.rng_seed);
    generate(params, &mut rng)
}

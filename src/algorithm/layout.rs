//! Coarse cell grid overlaid on the tile grid
//!
//! Each maze cell owns a `corridor_width + 1` tile pitch. Cell centres sit on
//! `1 + index * step`, leaving one tile of border on the low edges, and the
//! cell count per axis is chosen so the last centre's corridor still ends
//! before the high border:
//!
//! ```text
//! usable   = tile_dim - 2
//! cell_dim = max(2, floor((usable - corridor_width) / step) + 1)
//! ```

use crate::io::configuration::MIN_CELL_DIMENSION;
use crate::spatial::grid::TilePos;

/// Position in the coarse cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Cell column
    pub x: usize,
    /// Cell row
    pub y: usize,
}

impl CellCoord {
    /// Create a cell coordinate
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Cardinal step between neighbouring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +x
    East,
    /// -x
    West,
    /// +y
    South,
    /// -y
    North,
}

/// Neighbour probing order used by every random choice over directions
pub const DIRECTIONS: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
];

impl Direction {
    /// Unit offset `(dx, dy)` in cell space
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::South => (0, 1),
            Self::North => (0, -1),
        }
    }
}

/// Derived cell-grid geometry for one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    cell_width: usize,
    cell_height: usize,
    corridor_width: usize,
    clamped: bool,
}

impl CellLayout {
    /// Derive the cell grid for a tile grid and corridor width
    ///
    /// `corridor_width` below 1 is treated as 1. Axes that cannot fit two
    /// cells are clamped to two anyway; [`CellLayout::is_clamped`] reports it.
    pub fn new(tile_width: usize, tile_height: usize, corridor_width: usize) -> Self {
        let corridor_width = corridor_width.max(1);
        let (cell_width, clamped_x) = axis_cells(tile_width, corridor_width);
        let (cell_height, clamped_y) = axis_cells(tile_height, corridor_width);

        Self {
            cell_width,
            cell_height,
            corridor_width,
            clamped: clamped_x || clamped_y,
        }
    }

    /// Number of cell columns
    pub const fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Number of cell rows
    pub const fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.cell_width * self.cell_height
    }

    /// Corridor thickness in tiles (at least 1)
    pub const fn corridor_width(&self) -> usize {
        self.corridor_width
    }

    /// Tile distance between neighbouring cell centres
    pub const fn step(&self) -> usize {
        self.corridor_width + 1
    }

    /// Whether an axis was forced up to the minimum cell count
    ///
    /// Clamped layouts may place cell centres on or past the border ring.
    pub const fn is_clamped(&self) -> bool {
        self.clamped
    }

    /// Whether a cell lies inside the cell grid
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.x < self.cell_width && cell.y < self.cell_height
    }

    /// Row-major index of a cell
    pub const fn index(&self, cell: CellCoord) -> usize {
        cell.y * self.cell_width + cell.x
    }

    /// Neighbour of `cell` one step in `direction`, if it is inside the grid
    pub fn neighbor(&self, cell: CellCoord, direction: Direction) -> Option<CellCoord> {
        let (dx, dy) = direction.offset();
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;
        let next = CellCoord::new(x, y);
        self.contains(next).then_some(next)
    }

    /// Tile-space centre of a cell
    pub fn cell_to_tile(&self, cell: CellCoord) -> TilePos {
        TilePos::new(self.axis_to_tile(cell.x), self.axis_to_tile(cell.y))
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let width = self.cell_width;
        (0..self.cell_height).flat_map(move |y| (0..width).map(move |x| CellCoord::new(x, y)))
    }

    fn axis_to_tile(&self, index: usize) -> i32 {
        1 + (index * self.step()) as i32
    }
}

fn axis_cells(tile_dim: usize, corridor_width: usize) -> (usize, bool) {
    let usable = tile_dim as i64 - 2;
    let step = corridor_width as i64 + 1;
    let raw = (usable - corridor_width as i64).div_euclid(step) + 1;

    match usize::try_from(raw) {
        Ok(cells) if cells >= MIN_CELL_DIMENSION => (cells, false),
        _ => (MIN_CELL_DIMENSION, true),
    }
}

//! Owned tile grid with bounds-checked access
//!
//! Tiles are stored row-major in an `Array2` indexed `[row, col]`, i.e.
//! `[y, x]`. Public accessors take `(x, y)` and never panic on out-of-range
//! coordinates: reads return `None`, writes report whether they landed.

use ndarray::Array2;

/// Tile identifier: an index into the tileset atlas, or [`EMPTY_TILE`]
pub type TileId = i32;

/// Sentinel for an unpainted tile
pub const EMPTY_TILE: TileId = -1;

/// Signed tile-space coordinate
///
/// Stamps and lines may extend past the grid edge, so painting works in
/// signed space and clips on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl TilePos {
    /// Create a tile position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangular grid of tile ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Array2<TileId>,
}

impl TileGrid {
    /// Create a grid with every tile set to [`EMPTY_TILE`]
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, EMPTY_TILE)
    }

    /// Create a grid with every tile set to `tile`
    pub fn filled(width: usize, height: usize, tile: TileId) -> Self {
        Self {
            tiles: Array2::from_elem((height, width), tile),
        }
    }

    /// Build a grid from row-major rows
    ///
    /// Returns `None` when the rows are ragged. An empty slice yields an
    /// empty grid.
    pub fn from_rows(rows: &[Vec<TileId>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let flat: Vec<TileId> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((height, width), flat)
            .ok()
            .map(|tiles| Self { tiles })
    }

    /// Copy the grid out as row-major rows (`rows[y][x]`)
    pub fn to_rows(&self) -> Vec<Vec<TileId>> {
        self.tiles.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Grid width in tiles
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Grid height in tiles
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Read-only view of the underlying array (`[row, col]`)
    pub const fn as_array(&self) -> &Array2<TileId> {
        &self.tiles
    }

    /// Check whether a signed coordinate lies inside the grid
    pub fn contains(&self, pos: TilePos) -> bool {
        Self::to_index(pos).is_some_and(|(x, y)| x < self.width() && y < self.height())
    }

    /// Tile at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<TileId> {
        self.tiles.get([y, x]).copied()
    }

    /// Tile at a signed position, or `None` outside the grid
    pub fn get_at(&self, pos: TilePos) -> Option<TileId> {
        Self::to_index(pos).and_then(|(x, y)| self.get(x, y))
    }

    /// Overwrite the tile at `(x, y)`
    ///
    /// Returns `false` without writing when the coordinate is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, tile: TileId) -> bool {
        self.tiles.get_mut([y, x]).map(|cell| *cell = tile).is_some()
    }

    /// Overwrite the tile at a signed position, clipping to grid bounds
    pub fn paint(&mut self, pos: TilePos, tile: TileId) -> bool {
        Self::to_index(pos).is_some_and(|(x, y)| self.set(x, y, tile))
    }

    /// Overwrite the outermost ring of tiles
    pub fn fill_border(&mut self, tile: TileId) {
        let (Some(last_row), Some(last_col)) =
            (self.height().checked_sub(1), self.width().checked_sub(1))
        else {
            return;
        };

        self.tiles.row_mut(0).fill(tile);
        self.tiles.row_mut(last_row).fill(tile);
        self.tiles.column_mut(0).fill(tile);
        self.tiles.column_mut(last_col).fill(tile);
    }

    /// Number of tiles equal to `tile`
    pub fn count(&self, tile: TileId) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(x, y, tile)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TileId)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((y, x), &tile)| (x, y, tile))
    }

    fn to_index(pos: TilePos) -> Option<(usize, usize)> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        Some((x, y))
    }
}

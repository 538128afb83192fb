//! JSON session documents shared with the map editor and the game
//!
//! Layout on disk:
//!
//! ```json
//! {
//!   "version": 1,
//!   "grid_w": 80,
//!   "grid_h": 60,
//!   "tile_size_px": 32,
//!   "tiles": [[92, 92, ...], ...],
//!   "entities": [{ "kind": "player", "x": 1, "y": 1 }],
//!   "meta": { "notes": "...", "fov_radius_tiles": 7 }
//! }
//! ```
//!
//! `tiles` is row-major (`tiles[y][x]`) with `-1` for empty tiles. Older
//! documents without `version`, `tile_size_px`, `entities` or `meta` still
//! load with defaults.

use crate::io::configuration::{
    DEFAULT_TILE_SIZE_PX, DOCUMENT_NOTES, DOCUMENT_VERSION, FOV_RADIUS_TILES,
};
use crate::io::error::{MazeError, Result, invalid_document};
use crate::spatial::entities::{Entity, EntitySet};
use crate::spatial::grid::{TileGrid, TileId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Free-form document metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Human-readable notes for consumers
    #[serde(default)]
    pub notes: String,
    /// Player field-of-view radius in tiles
    #[serde(default = "default_fov_radius")]
    pub fov_radius_tiles: u32,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            notes: DOCUMENT_NOTES.to_string(),
            fov_radius_tiles: FOV_RADIUS_TILES,
        }
    }
}

/// A saved map: tile grid plus entity markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Grid width in tiles
    pub grid_w: usize,
    /// Grid height in tiles
    pub grid_h: usize,
    /// Pixels per tile in the tileset sheet
    #[serde(default = "default_tile_size")]
    pub tile_size_px: u32,
    /// Row-major tile ids, `-1` for empty
    pub tiles: Vec<Vec<TileId>>,
    /// Entity markers
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Document metadata
    #[serde(default)]
    pub meta: DocumentMeta,
}

const fn default_version() -> u32 {
    DOCUMENT_VERSION
}

const fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE_PX
}

const fn default_fov_radius() -> u32 {
    FOV_RADIUS_TILES
}

impl MapDocument {
    /// Build a document from a grid and its markers
    pub fn from_parts(grid: &TileGrid, entities: &EntitySet, tile_size_px: u32) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            grid_w: grid.width(),
            grid_h: grid.height(),
            tile_size_px,
            tiles: grid.to_rows(),
            entities: entities.as_slice().to_vec(),
            meta: DocumentMeta::default(),
        }
    }

    /// Check that the tile rows and entity positions match the declared size
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tiles` does not contain exactly `grid_h` rows
    /// - Any row does not contain exactly `grid_w` tiles
    /// - Any entity lies outside the grid
    pub fn validate(&self) -> Result<()> {
        if self.tiles.len() != self.grid_h {
            return Err(invalid_document(&format!(
                "expected {} tile rows, found {}",
                self.grid_h,
                self.tiles.len()
            )));
        }

        if let Some((y, row)) = self
            .tiles
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.grid_w)
        {
            return Err(invalid_document(&format!(
                "row {y} has {} tiles, expected {}",
                row.len(),
                self.grid_w
            )));
        }

        if let Some(entity) = self
            .entities
            .iter()
            .find(|e| e.x >= self.grid_w || e.y >= self.grid_h)
        {
            return Err(invalid_document(&format!(
                "{} at ({}, {}) lies outside the {}x{} grid",
                entity.kind, entity.x, entity.y, self.grid_w, self.grid_h
            )));
        }

        Ok(())
    }

    /// Convert the tile rows into a grid
    ///
    /// # Errors
    ///
    /// Returns an error if the document fails [`MapDocument::validate`]
    pub fn to_grid(&self) -> Result<TileGrid> {
        self.validate()?;
        if self.grid_h == 0 {
            return Ok(TileGrid::new(self.grid_w, 0));
        }
        TileGrid::from_rows(&self.tiles)
            .ok_or_else(|| invalid_document(&"tile rows do not form a rectangle"))
    }

    /// Entity markers with player/goal uniqueness applied
    pub fn entity_set(&self) -> EntitySet {
        EntitySet::from_entities(self.entities.iter().copied())
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document or fails
    /// [`MapDocument::validate`]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Write the document to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - Serialization fails
    /// - The file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| MazeError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;

        std::fs::write(path, json).map_err(|e| MazeError::FileSystem {
            path: path.to_path_buf(),
            operation: "write",
            source: e,
        })
    }

    /// Read and validate a document from `path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents are not a valid document
    /// - The document fails [`MapDocument::validate`]
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| MazeError::FileSystem {
            path: path.to_path_buf(),
            operation: "read",
            source: e,
        })?;

        let document: Self = serde_json::from_str(&json).map_err(|e| MazeError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        document.validate()?;
        Ok(document)
    }
}

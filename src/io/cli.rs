//! Command-line interface for batch maze generation

use crate::algorithm::executor::{GeneratedMaze, GenerationParams, generate_seeded};
use crate::io::configuration::{
    DEFAULT_CORRIDOR_WIDTH, DEFAULT_FLOOR_TILE_ID, DEFAULT_GRID_H, DEFAULT_GRID_W,
    DEFAULT_MAP_COUNT, DEFAULT_SAVE_PATH, DEFAULT_SEED, DEFAULT_TILE_SIZE_PX,
    DEFAULT_WALL_TILE_ID, MAX_GRID_DIMENSION, PREVIEW_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::session::MapDocument;
use crate::spatial::entities::EntitySet;
use crate::spatial::tiles::TilePalette;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tilemaze")]
#[command(
    author,
    version,
    about = "Generate maze dungeon maps as tile-grid JSON documents"
)]
/// Command-line arguments for the maze generator
// Independent switches for output, verbosity and overwrite behaviour
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output JSON document (numbered per map when --count > 1)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_SAVE_PATH)]
    pub output: PathBuf,

    /// Grid width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_W)]
    pub width: usize,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_H)]
    pub height: usize,

    /// Corridor width in tiles
    #[arg(short, long, default_value_t = DEFAULT_CORRIDOR_WIDTH)]
    pub corridor: usize,

    /// Wall tile id
    #[arg(long, default_value_t = DEFAULT_WALL_TILE_ID)]
    pub wall: i32,

    /// Floor tile id
    #[arg(long, default_value_t = DEFAULT_FLOOR_TILE_ID)]
    pub floor: i32,

    /// Random seed for reproducible generation (first map of a batch)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of maps to generate, seeded consecutively
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAP_COUNT)]
    pub count: usize,

    /// Also write a PNG preview next to each document
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite documents that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Fail instead of writing a degenerate maze
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.force
    }

    /// Reject values the generator would otherwise silently clamp
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is 0 or above `MAX_GRID_DIMENSION`
    /// - Corridor width is 0
    /// - Map count is 0
    /// - A tile id is negative (reserved for empty tiles)
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if self.corridor == 0 {
            return Err(invalid_parameter(
                "corridor",
                &self.corridor,
                &"must be at least 1",
            ));
        }

        if self.count == 0 {
            return Err(invalid_parameter("count", &self.count, &"must be at least 1"));
        }

        for (parameter, value) in [("wall", self.wall), ("floor", self.floor)] {
            if value < 0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"tile ids must be non-negative",
                ));
            }
        }

        Ok(())
    }

    /// Generation parameters for the map at `index` within the batch
    pub const fn params_for(&self, index: usize) -> GenerationParams {
        GenerationParams::new(self.width, self.height, self.wall, self.floor)
            .with_corridor_width(self.corridor)
            .with_seed(self.seed.wrapping_add(index as u64))
    }

    /// Document path for the map at `index` within the batch
    pub fn output_path(&self, index: usize) -> PathBuf {
        if self.count <= 1 {
            return self.output.clone();
        }
        let extension = self
            .output
            .extension()
            .unwrap_or_else(|| OsStr::new("json"));
        sibling_path(&self.output, &format!("_{index}"), extension)
    }
}

/// Preview image path for a document path
pub fn preview_path(document_path: &Path) -> PathBuf {
    sibling_path(document_path, PREVIEW_SUFFIX, OsStr::new("png"))
}

fn sibling_path(path: &Path, suffix: &str, extension: &OsStr) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let name = format!(
        "{}{suffix}.{}",
        stem.to_string_lossy(),
        extension.to_string_lossy()
    );

    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Summary of a finished batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Documents written
    pub written: Vec<PathBuf>,
    /// Documents skipped because they already existed
    pub skipped: Vec<PathBuf>,
    /// Documents whose maze was degenerate
    pub degenerate: Vec<PathBuf>,
}

/// Orchestrates generation and export of every map in a batch
pub struct BatchGenerator {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl BatchGenerator {
    /// Create a batch generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Progress of the current batch
    pub const fn progress(&self) -> &ProgressManager {
        &self.progress_manager
    }

    /// Generate and write every map
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Argument validation fails
    /// - `--strict` is set and a maze is degenerate
    /// - A document or preview cannot be written
    pub fn run(&mut self) -> Result<BatchReport> {
        self.cli.validate()?;

        let mut report = BatchReport::default();
        for index in 0..self.cli.count {
            let path = self.cli.output_path(index);
            if self.cli.skip_existing() && path.exists() {
                self.notify(&format!("Skipping: {} (output exists)", path.display()));
                self.progress_manager.complete_map();
                report.skipped.push(path);
                continue;
            }

            self.progress_manager.start_map(&path);
            let maze = generate_seeded(&self.cli.params_for(index));
            if maze.degenerate {
                if self.cli.strict {
                    self.progress_manager.finish();
                    return Err(invalid_parameter(
                        "width/height",
                        &format!("{}x{}", self.cli.width, self.cli.height),
                        &format!(
                            "too small for corridor width {} (degenerate maze)",
                            self.cli.corridor
                        ),
                    ));
                }
                self.notify(&format!(
                    "Warning: {} is degenerate; the grid is too small for corridor width {}",
                    path.display(),
                    self.cli.corridor
                ));
                report.degenerate.push(path.clone());
            }

            self.write_map(&maze, &path)?;
            self.progress_manager.complete_map();
            report.written.push(path);
        }

        self.progress_manager.finish();
        Ok(report)
    }

    fn write_map(&self, maze: &GeneratedMaze, path: &Path) -> Result<()> {
        let mut entities = EntitySet::new();
        entities.place_markers(maze.grid.width(), maze.grid.height());

        MapDocument::from_parts(&maze.grid, &entities, DEFAULT_TILE_SIZE_PX).save(path)?;

        if self.cli.png {
            let palette = TilePalette::new(self.cli.wall, self.cli.floor);
            export_grid_as_png(&maze.grid, &entities, &palette, &preview_path(path))?;
        }

        Ok(())
    }

    // Allow print for user feedback on skipped and degenerate maps
    #[allow(clippy::print_stderr)]
    fn notify(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}

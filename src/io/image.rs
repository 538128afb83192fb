//! PNG previews of generated maps with entity markers

use crate::io::configuration::{
    PREVIEW_ENEMY_RGBA, PREVIEW_FLOOR_RGBA, PREVIEW_GOAL_RGBA, PREVIEW_OTHER_RGBA,
    PREVIEW_PLAYER_RGBA, PREVIEW_TILE_PX, PREVIEW_WALL_RGBA,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::entities::{EntityKind, EntitySet};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::{TileClass, TilePalette};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

// Empty tiles stay transparent
const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

const fn tile_color(class: TileClass) -> [u8; 4] {
    match class {
        TileClass::Empty => TRANSPARENT,
        TileClass::Floor => PREVIEW_FLOOR_RGBA,
        TileClass::Wall => PREVIEW_WALL_RGBA,
        TileClass::Other => PREVIEW_OTHER_RGBA,
    }
}

const fn entity_color(kind: EntityKind) -> [u8; 4] {
    match kind {
        EntityKind::Player => PREVIEW_PLAYER_RGBA,
        EntityKind::Goal => PREVIEW_GOAL_RGBA,
        EntityKind::Tank | EntityKind::Shooter => PREVIEW_ENEMY_RGBA,
    }
}

/// Render a grid to an image, `tile_px` pixels per tile edge
///
/// Tiles are coloured by class under `palette`; markers are drawn over the
/// tile they stand on. Markers outside the grid are skipped.
pub fn render_preview(
    grid: &TileGrid,
    entities: &EntitySet,
    palette: &TilePalette,
    tile_px: u32,
) -> RgbaImage {
    let tile_px = tile_px.max(1);
    let width = grid.width() as u32 * tile_px;
    let height = grid.height() as u32 * tile_px;
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    let fill_tile = |img: &mut RgbaImage, x: usize, y: usize, color: [u8; 4]| {
        let origin_x = x as u32 * tile_px;
        let origin_y = y as u32 * tile_px;
        for dy in 0..tile_px {
            for dx in 0..tile_px {
                img.put_pixel(origin_x + dx, origin_y + dy, Rgba(color));
            }
        }
    };

    for (x, y, tile) in grid.iter() {
        fill_tile(&mut img, x, y, tile_color(palette.classify(tile)));
    }

    for entity in entities {
        if entity.x < grid.width() && entity.y < grid.height() {
            fill_tile(&mut img, entity.x, entity.y, entity_color(entity.kind));
        }
    }

    img
}

/// Export a map preview as PNG with the default tile size
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no tiles
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &TileGrid,
    entities: &EntitySet,
    palette: &TilePalette,
    output_path: &Path,
) -> Result<()> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.width(), grid.height()),
            &"cannot export an empty grid",
        ));
    }

    let img = render_preview(grid, entities, palette, PREVIEW_TILE_PX);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

//! Tests for loop augmentation and border finalization

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use tilemaze::algorithm::augmentation::{augment_loops, finalize_border, loop_attempts};
    use tilemaze::algorithm::layout::CellLayout;
    use tilemaze::algorithm::rasterizer::Rasterizer;
    use tilemaze::algorithm::spanning_tree::build_spanning_tree;
    use tilemaze::spatial::TileGrid;

    const WALL: i32 = 9;
    const FLOOR: i32 = 1;

    // Tests one attempt is made per twelve cells, rounded down
    // Verified by using ceiling division for the attempt count
    #[test]
    fn test_loop_attempt_count() {
        assert_eq!(loop_attempts(&CellLayout::new(80, 60, 3)), 22);
        assert_eq!(loop_attempts(&CellLayout::new(40, 30, 5)), 2);
        assert_eq!(loop_attempts(&CellLayout::new(10, 10, 3)), 0);
    }

    // Tests augmentation never removes floor laid down by the tree
    // Verified by painting the wall id in augment_loops
    #[test]
    fn test_augmentation_is_monotonic() {
        let layout = CellLayout::new(80, 60, 3);
        let mut rng = StdRng::seed_from_u64(11);
        let tree = build_spanning_tree(&layout, &mut rng);

        let mut grid = TileGrid::filled(80, 60, WALL);
        let mut rasterizer = Rasterizer::new(&mut grid, 3, FLOOR);
        rasterizer.carve_tree(&layout, &tree);
        let before = rasterizer.grid().clone();
        let carved = augment_loops(&mut rasterizer, &layout, &mut rng);

        assert!(carved <= loop_attempts(&layout));
        for (x, y, tile) in before.iter() {
            if tile == FLOOR {
                assert_eq!(grid.get(x, y), Some(FLOOR), "floor lost at ({x}, {y})");
            }
        }
        assert!(grid.count(FLOOR) >= before.count(FLOOR));
    }

    // Tests layouts under twelve cells are left untouched
    // Verified by forcing at least one attempt
    #[test]
    fn test_small_layouts_get_no_loops() {
        let layout = CellLayout::new(10, 10, 3);
        let mut grid = TileGrid::filled(10, 10, WALL);
        let mut rng = StdRng::seed_from_u64(0);

        let carved = augment_loops(&mut Rasterizer::new(&mut grid, 3, FLOOR), &layout, &mut rng);

        assert_eq!(carved, 0);
        assert_eq!(grid.count(FLOOR), 0);
    }

    // Tests the whole outer ring is overwritten and the interior left alone
    // Verified by skipping the last column in fill_border
    #[test]
    fn test_finalize_border_overwrites_ring() {
        let mut grid = TileGrid::filled(5, 4, FLOOR);
        finalize_border(&mut grid, WALL);

        assert_eq!(grid.count(WALL), 14);
        assert_eq!(grid.count(FLOOR), 6);
        for (x, y, tile) in grid.iter() {
            let on_ring = x == 0 || y == 0 || x == 4 || y == 3;
            assert_eq!(tile == WALL, on_ring, "({x}, {y})");
        }
    }

    // Tests single-row and single-column grids become entirely wall
    // Verified by returning early for grids thinner than three tiles
    #[test]
    fn test_finalize_border_thin_grids() {
        let mut row = TileGrid::filled(6, 1, FLOOR);
        finalize_border(&mut row, WALL);
        assert_eq!(row.count(WALL), 6);

        let mut column = TileGrid::filled(1, 4, FLOOR);
        finalize_border(&mut column, WALL);
        assert_eq!(column.count(WALL), 4);
    }
}

//! Tests for command-line parsing, validation and batch generation

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tilemaze::MazeError;
    use tilemaze::io::cli::{BatchGenerator, Cli, preview_path};
    use tilemaze::io::configuration::{
        DEFAULT_CORRIDOR_WIDTH, DEFAULT_FLOOR_TILE_ID, DEFAULT_GRID_H, DEFAULT_GRID_W,
        DEFAULT_SEED, DEFAULT_WALL_TILE_ID,
    };
    use tilemaze::io::session::MapDocument;
    use tilemaze::spatial::EntityKind;

    fn cli_for(output: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![OsString::from("tilemaze"), output.as_os_str().to_owned()];
        args.extend(extra.iter().map(OsString::from));
        Cli::parse_from(args)
    }

    // Tests CLI parsing with no arguments uses the documented defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["tilemaze"]);

        assert_eq!(cli.output, PathBuf::from("map.json"));
        assert_eq!((cli.width, cli.height), (DEFAULT_GRID_W, DEFAULT_GRID_H));
        assert_eq!(cli.corridor, DEFAULT_CORRIDOR_WIDTH);
        assert_eq!(cli.wall, DEFAULT_WALL_TILE_ID);
        assert_eq!(cli.floor, DEFAULT_FLOOR_TILE_ID);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.count, 1);
        assert!(cli.should_show_progress());
        assert!(cli.skip_existing());
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the short flags for width and height
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "tilemaze", "out.json", "-w", "40", "-H", "30", "-c", "5", "--wall", "100",
            "--floor", "200", "-s", "7", "-n", "3", "--png", "--quiet", "--force", "--strict",
        ]);

        assert_eq!((cli.width, cli.height, cli.corridor), (40, 30, 5));
        assert_eq!((cli.wall, cli.floor), (100, 200));
        assert_eq!((cli.seed, cli.count), (7, 3));
        assert!(cli.png && cli.quiet && cli.force && cli.strict);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests validation rejects values the generator would clamp
    // Verified by removing the corridor check
    #[test]
    fn test_validate_rejects_bad_values() {
        let rejected: [&[&str]; 6] = [
            &["tilemaze", "-w", "0"],
            &["tilemaze", "-H", "0"],
            &["tilemaze", "-c", "0"],
            &["tilemaze", "-n", "0"],
            &["tilemaze", "--wall=-1"],
            &["tilemaze", "-w", "10001"],
        ];
        for args in rejected {
            let cli = Cli::parse_from(args);
            assert!(
                matches!(cli.validate(), Err(MazeError::InvalidParameter { .. })),
                "{args:?} should be rejected"
            );
        }

        assert!(Cli::parse_from(["tilemaze", "-w", "3", "-H", "3"]).validate().is_ok());
    }

    // Tests batch maps are numbered and seeded consecutively
    // Verified by using the same seed for every map
    #[test]
    fn test_batch_paths_and_seeds() {
        let cli = Cli::parse_from(["tilemaze", "out/maze.json", "-n", "3", "-s", "10"]);

        assert_eq!(cli.output_path(0), PathBuf::from("out/maze_0.json"));
        assert_eq!(cli.output_path(2), PathBuf::from("out/maze_2.json"));
        assert_eq!(cli.params_for(0).rng_seed, 10);
        assert_eq!(cli.params_for(2).rng_seed, 12);

        let single = Cli::parse_from(["tilemaze", "maze"]);
        assert_eq!(single.output_path(0), PathBuf::from("maze"));
    }

    // Tests preview paths sit next to their documents
    // Verified by keeping the json extension
    #[test]
    fn test_preview_path() {
        assert_eq!(
            preview_path(Path::new("out/maze_1.json")),
            PathBuf::from("out/maze_1_preview.png")
        );
        assert_eq!(preview_path(Path::new("map.json")), PathBuf::from("map_preview.png"));
    }

    // Tests a batch writes loadable documents with markers and previews
    // Verified by skipping marker placement before saving
    #[test]
    fn test_batch_run_writes_documents() -> tilemaze::Result<()> {
        let dir = TempDir::new()?;
        let output = dir.path().join("maps").join("m.json");
        let cli = cli_for(&output, &["-w", "20", "-H", "15", "-n", "2", "--png", "-q"]);

        let report = BatchGenerator::new(cli).run()?;
        assert_eq!(report.written.len(), 2);
        assert!(report.skipped.is_empty());
        assert!(report.degenerate.is_empty());

        for path in &report.written {
            let doc = MapDocument::load(path)?;
            assert_eq!((doc.grid_w, doc.grid_h), (20, 15));
            let entities = doc.entity_set();
            assert!(entities.position_of(EntityKind::Player).is_some());
            assert_eq!(entities.position_of(EntityKind::Goal), Some((18, 13)));
            assert!(preview_path(path).exists());
        }
        Ok(())
    }

    // Tests existing documents are skipped unless forced
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_batch_run_skips_existing() -> tilemaze::Result<()> {
        let dir = TempDir::new()?;
        let output = dir.path().join("m.json");

        BatchGenerator::new(cli_for(&output, &["-q"])).run()?;
        let mut rerun = BatchGenerator::new(cli_for(&output, &["-q"]));
        let second = rerun.run()?;
        assert_eq!(second.skipped, vec![output.clone()]);
        assert!(second.written.is_empty());
        assert_eq!(rerun.progress().completed(), 1);

        let forced = BatchGenerator::new(cli_for(&output, &["-q", "-f"])).run()?;
        assert_eq!(forced.written, vec![output]);
        Ok(())
    }

    // Tests degenerate mazes are reported, or rejected under --strict
    // Verified by ignoring the strict flag
    #[test]
    fn test_batch_run_degenerate() -> tilemaze::Result<()> {
        let dir = TempDir::new()?;
        let lenient = dir.path().join("small.json");
        let strict = dir.path().join("strict.json");

        let report = BatchGenerator::new(cli_for(&lenient, &["-w", "3", "-H", "3", "-q"])).run()?;
        assert_eq!(report.degenerate, vec![lenient.clone()]);
        assert!(lenient.exists());

        let result =
            BatchGenerator::new(cli_for(&strict, &["-w", "3", "-H", "3", "-q", "--strict"])).run();
        assert!(matches!(result, Err(MazeError::InvalidParameter { .. })));
        assert!(!strict.exists());
        Ok(())
    }
}

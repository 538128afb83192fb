//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tilemaze::io::progress::ProgressManager;

    // Tests completed count follows complete_map calls
    // Verified by not incrementing the bar
    #[test]
    fn test_completed_count() {
        let progress = ProgressManager::hidden(3);
        assert_eq!(progress.completed(), 0);

        progress.start_map(Path::new("out/map_0.json"));
        progress.complete_map();
        progress.start_map(Path::new("out/map_1.json"));
        progress.complete_map();

        assert_eq!(progress.completed(), 2);
        progress.finish();
    }

    // Tests paths without a file name do not panic
    // Verified by unwrapping the file name
    #[test]
    fn test_start_map_without_file_name() {
        let progress = ProgressManager::hidden(1);
        progress.start_map(Path::new("/"));
        progress.finish();
        assert_eq!(progress.completed(), 0);
    }
}

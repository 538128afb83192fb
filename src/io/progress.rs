//! Batch progress display for multi-map generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking maps written in a batch
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for `map_count` maps drawn to stderr
    pub fn new(map_count: usize) -> Self {
        let bar = ProgressBar::new(map_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Create a progress bar that tracks counts without drawing anything
    pub fn hidden(map_count: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(map_count as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Show which output is being generated
    pub fn start_map(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Mark one map as handled, whether written or skipped
    pub fn complete_map(&self) {
        self.bar.inc(1);
    }

    /// Number of maps marked complete
    pub fn completed(&self) -> usize {
        self.bar.position() as usize
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

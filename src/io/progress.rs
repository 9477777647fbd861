//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// `(label, collapsed cells, total cells)` of one visible bar
pub type BarState = (String, usize, usize);

/// How a file's synthesis ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Written,
    Failed,
}

/// Collapse progress of one started file
#[derive(Clone, Debug)]
struct FileProgress {
    name: String,
    collapsed: usize,
    total: usize,
    outcome: Option<Outcome>,
}

impl FileProgress {
    fn label(&self) -> String {
        match self.outcome {
            Some(Outcome::Written) => format!("✓ {}", self.name),
            Some(Outcome::Failed) => format!("✗ {}", self.name),
            None => self.name.clone(),
        }
    }

    fn bar_state(&self) -> BarState {
        (self.label(), self.collapsed, self.total)
    }
}

/// Coordinates progress display for batch operations
///
/// Automatically switches between individual progress bars (for small batches)
/// and a single batch progress bar (for large batches) based on file count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    /// Indexed by file position; `None` until the file starts
    files: Vec<Option<FileProgress>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            files: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files announced to [`ProgressManager::initialize`]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Configure progress bar for a new file
    pub fn start_file(&mut self, index: usize, path: &Path, total_cells: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        if self.files.len() <= index {
            self.files.resize_with(index + 1, || None);
        }
        if let Some(slot) = self.files.get_mut(index) {
            *slot = Some(FileProgress {
                name,
                collapsed: 0,
                total: total_cells,
                outcome: None,
            });
        }
        self.update_bars();
    }

    /// Report the number of collapsed cells of the current attempt
    ///
    /// A retry starts again from the cells its initial propagation fixed.
    pub fn update_collapsed(&mut self, index: usize, collapsed: usize) {
        if let Some(file) = self.file_mut(index) {
            file.collapsed = collapsed.min(file.total);
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        self.close_file(index, Outcome::Written);
    }

    /// Mark file as failed and update batch progress
    pub fn fail_file(&mut self, index: usize) {
        self.close_file(index, Outcome::Failed);
    }

    fn file_mut(&mut self, index: usize) -> Option<&mut FileProgress> {
        self.files.get_mut(index).and_then(Option::as_mut)
    }

    fn close_file(&mut self, index: usize, outcome: Outcome) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(file) = self.file_mut(index) {
            if outcome == Outcome::Written {
                file.collapsed = file.total;
            }
            file.outcome = Some(outcome);
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Bar states of the most recently started files, oldest first
    pub fn visible_states(&self) -> Vec<BarState> {
        let started: Vec<&FileProgress> = self.files.iter().flatten().collect();
        let hidden = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        started
            .into_iter()
            .skip(hidden)
            .map(FileProgress::bar_state)
            .collect()
    }

    /// Redraw the bars from the visible window, blanking the rest
    fn update_bars(&self) {
        let mut visible = self.visible_states().into_iter();

        for bar in &self.file_bars {
            if let Some((label, collapsed, total)) = visible.next() {
                let width = total.to_string().len();
                bar.set_length(total as u64);
                bar.set_position(collapsed as u64);
                bar.set_message(format!("{collapsed:>width$}/{total}"));
                bar.set_prefix(label);
            } else {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}

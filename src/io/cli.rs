//! Command-line interface for batch synthesis from PNG samples

use crate::algorithm::executor::{SynthesisConfig, Synthesizer};
use crate::analysis::model::OverlappingModel;
use crate::io::configuration::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_SIZE, DEFAULT_PATTERN_SIZE, DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_image, load_sample};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "overlapwfc")]
#[command(
    author,
    version,
    about = "Synthesize images with the overlapping wave function collapse model"
)]
/// Command-line arguments for the synthesis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Edge length of extracted patterns
    #[arg(short, long, default_value_t = DEFAULT_PATTERN_SIZE)]
    pub pattern_size: usize,

    /// Output width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Output height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Do not wrap the sample at its edges when extracting patterns
    #[arg(long)]
    pub bounded_input: bool,

    /// Do not make the output tile seamlessly
    #[arg(long)]
    pub bounded_output: bool,

    /// Enable pattern rotation transformations (90°, 180°, 270°)
    #[arg(short = 'r', long)]
    pub rotate: bool,

    /// Enable pattern mirroring transformations (horizontal and vertical reflections)
    #[arg(short = 'm', long)]
    pub mirror: bool,

    /// Maximum collapse iterations per attempt (defaults to one per cell)
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Attempts before giving up on contradictions
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output dimensions `(width, height)`
    pub fn output_size(&self) -> (usize, usize) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (DEFAULT_OUTPUT_SIZE, DEFAULT_OUTPUT_SIZE),
        }
    }

    /// Synthesis configuration described by the arguments
    pub fn config(&self) -> SynthesisConfig {
        let (output_width, output_height) = self.output_size();
        SynthesisConfig {
            pattern_size: self.pattern_size,
            output_width,
            output_height,
            periodic_input: !self.bounded_input,
            periodic_output: !self.bounded_output,
            include_rotations: self.rotate,
            include_reflections: self.mirror,
            iteration_budget: self.iterations,
            max_attempts: self.attempts,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, configuration validation or
    /// the synthesis of any file fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.config().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            let outcome = self.process_file(file, index);
            if let Some(ref mut pm) = self.progress_manager {
                if outcome.is_ok() {
                    pm.complete_file(index);
                } else {
                    pm.fail_file(index);
                }
            }
            outcome?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// PNG files selected by the target argument, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a readable
    /// directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) != Some("png") {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn is_output_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);
        let config = self.cli.config();
        let seed = self.cli.seed;

        let sample = load_sample(input_path)?;
        let model = OverlappingModel::build(&sample, &config.extraction_options())?;
        let synthesizer = Synthesizer::new(&model, config)?;

        if let Some(ref mut pm) = self.progress_manager {
            let (width, height) = config.wave_dimensions();
            pm.start_file(index, input_path, width * height);
        }

        let progress_manager = &mut self.progress_manager;
        let image = synthesizer.synthesize_with_progress(seed, |run| {
            if let Some(pm) = progress_manager.as_mut() {
                pm.update_collapsed(index, run.wave().collapsed_cells());
            }
        })?;

        export_image(&image, &output_path)?;

        log::info!(
            "synthesized {} -> {} in {:.2?}",
            input_path.display(),
            output_path.display(),
            start_time.elapsed()
        );

        Ok(())
    }

    /// Output path written for an input file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

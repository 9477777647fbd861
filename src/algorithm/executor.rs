use crate::{
    algorithm::propagation::{PropagationOutcome, Propagator},
    algorithm::render::{SynthesizedImage, render},
    algorithm::selection::{Observation, RandomSelector, choose_pattern, observe},
    algorithm::wave::Wave,
    analysis::model::OverlappingModel,
    analysis::patterns::ExtractionOptions,
    analysis::sample::Sample,
    io::configuration::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_SIZE, DEFAULT_PATTERN_SIZE, ENTROPY_NOISE_SCALE,
        MAX_OUTPUT_DIMENSION,
    },
    io::error::{AlgorithmError, Result, invalid_parameter},
    spatial::GridTopology,
};

/// Odd 64-bit constant separating the seeds of consecutive attempts
const ATTEMPT_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Synthesis parameters controlling extraction, output shape and retries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
// Each flag toggles an independent feature of the overlapping model
#[allow(clippy::struct_excessive_bools)]
pub struct SynthesisConfig {
    /// Edge length N of extracted patterns
    pub pattern_size: usize,
    /// Output width in pixels
    pub output_width: usize,
    /// Output height in pixels
    pub output_height: usize,
    /// Treat the sample as wrapping at its edges
    pub periodic_input: bool,
    /// Make the output tile seamlessly
    pub periodic_output: bool,
    /// Include rotated pattern variants
    pub include_rotations: bool,
    /// Include reflected pattern variants
    pub include_reflections: bool,
    /// Maximum collapse iterations per attempt; `None` allows one per cell
    pub iteration_budget: Option<usize>,
    /// Attempts made before giving up on contradictions
    pub max_attempts: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            pattern_size: DEFAULT_PATTERN_SIZE,
            output_width: DEFAULT_OUTPUT_SIZE,
            output_height: DEFAULT_OUTPUT_SIZE,
            periodic_input: true,
            periodic_output: true,
            include_rotations: false,
            include_reflections: false,
            iteration_budget: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SynthesisConfig {
    /// Pattern extraction settings implied by this configuration
    pub const fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions {
            pattern_size: self.pattern_size,
            periodic_input: self.periodic_input,
            include_rotations: self.include_rotations,
            include_reflections: self.include_reflections,
        }
    }

    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if an output dimension is zero or too large, if a
    /// bounded output is smaller than one pattern, or if the attempt count
    /// or iteration budget is zero
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("output_width", self.output_width),
            ("output_height", self.output_height),
        ] {
            if value == 0 || value > MAX_OUTPUT_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_OUTPUT_DIMENSION}"),
                ));
            }
            if !self.periodic_output && value < self.pattern_size {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!(
                        "non-periodic output must fit a {0}x{0} pattern",
                        self.pattern_size
                    ),
                ));
            }
        }

        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one attempt is required",
            ));
        }

        if self.iteration_budget == Some(0) {
            return Err(invalid_parameter(
                "iteration_budget",
                &0,
                &"budget must allow at least one iteration",
            ));
        }

        Ok(())
    }

    /// Wave dimensions for this output
    ///
    /// Periodic output has one cell per pixel; bounded output has one cell
    /// per position where a whole pattern fits.
    pub const fn wave_dimensions(&self) -> (usize, usize) {
        if self.periodic_output {
            (self.output_width, self.output_height)
        } else {
            (
                self.output_width.saturating_sub(self.pattern_size) + 1,
                self.output_height.saturating_sub(self.pattern_size) + 1,
            )
        }
    }
}

/// Seed used by the given attempt of a synthesis seeded with `seed`
pub const fn derive_attempt_seed(seed: u64, attempt: usize) -> u64 {
    seed.wrapping_add(ATTEMPT_SEED_STRIDE.wrapping_mul(attempt as u64))
}

/// State of a single attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Uncollapsed cells remain and no contradiction occurred
    Running,
    /// Every cell holds exactly one pattern
    Collapsed,
    /// Some cell lost every pattern
    Contradiction {
        /// Coordinates `(x, y)` of the emptied cell
        cell: (usize, usize),
    },
}

/// One attempt of the observe, collapse and propagate loop
///
/// Manages the wave, the propagation worklist and the attempt's own random
/// selector. Borrows the shared model read-only.
pub struct SynthesisRun<'m> {
    model: &'m OverlappingModel,
    config: SynthesisConfig,
    seed: u64,
    wave: Wave,
    propagator: Propagator,
    random_selector: RandomSelector,
    state: RunState,
    iteration: usize,
    budget: usize,
}

impl<'m> SynthesisRun<'m> {
    /// Initialize the wave and enforce initial consistency
    ///
    /// A model whose patterns can never neighbor each other leaves the run
    /// in the `Contradiction` state right away.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or does not match
    /// the model's pattern size
    pub fn new(model: &'m OverlappingModel, config: &SynthesisConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        if model.pattern_size() != config.pattern_size {
            return Err(invalid_parameter(
                "pattern_size",
                &config.pattern_size,
                &format!("model was built with size {}", model.pattern_size()),
            ));
        }

        let (width, height) = config.wave_dimensions();
        let topology = GridTopology::new(width, height, config.periodic_output);

        let mut random_selector = RandomSelector::new(seed);
        let noise = (0..topology.cell_count())
            .map(|_| random_selector.noise(ENTROPY_NOISE_SCALE))
            .collect();

        let mut wave = Wave::new(topology, model, noise);
        let mut propagator = Propagator::new();
        let budget = config.iteration_budget.unwrap_or(topology.cell_count());

        log::debug!(
            "starting attempt with seed {seed}: {width}x{height} cells, {} patterns",
            model.pattern_count()
        );

        let state = match propagator.initialize(&mut wave, model) {
            PropagationOutcome::Contradiction { cell } => RunState::Contradiction {
                cell: topology.coordinates(cell),
            },
            PropagationOutcome::Stable if wave.is_fully_collapsed() => RunState::Collapsed,
            PropagationOutcome::Stable => RunState::Running,
        };

        Ok(Self {
            model,
            config: *config,
            seed,
            wave,
            propagator,
            random_selector,
            state,
            iteration: 0,
            budget,
        })
    }

    /// Perform one observe, collapse and propagate step
    ///
    /// Returns `Ok(true)` while the run can continue and `Ok(false)` once
    /// every cell is collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A contradiction empties a cell (now or in an earlier step)
    /// - The iteration budget is exhausted
    pub fn execute_iteration(&mut self) -> Result<bool> {
        match self.state {
            RunState::Collapsed => return Ok(false),
            RunState::Contradiction { cell } => return Err(self.contradiction_error(cell)),
            RunState::Running => {}
        }

        let cell = match observe(&self.wave) {
            Observation::Collapsed => {
                self.state = RunState::Collapsed;
                return Ok(false);
            }
            Observation::Contradiction(cell) => {
                return Err(self.fail(cell));
            }
            Observation::Cell(cell) => cell,
        };

        if self.iteration >= self.budget {
            return Err(AlgorithmError::BudgetExceeded {
                budget: self.budget,
            });
        }
        self.iteration += 1;

        let Some(chosen) = choose_pattern(&self.wave, cell, self.model, &mut self.random_selector)
        else {
            return Err(self.fail(cell));
        };
        log::trace!(
            "iteration {}: collapsing cell {cell} to pattern {chosen}",
            self.iteration
        );

        match self
            .propagator
            .collapse(&mut self.wave, self.model, cell, chosen)
        {
            PropagationOutcome::Contradiction { cell: emptied } => Err(self.fail(emptied)),
            PropagationOutcome::Stable if self.wave.is_fully_collapsed() => {
                self.state = RunState::Collapsed;
                Ok(false)
            }
            PropagationOutcome::Stable => Ok(true),
        }
    }

    /// Iterate until the wave is collapsed
    ///
    /// # Errors
    ///
    /// Returns an error on contradiction or when the budget runs out
    pub fn run_to_completion(&mut self) -> Result<()> {
        while self.execute_iteration()? {}
        Ok(())
    }

    /// Render the collapsed wave at the configured output size
    ///
    /// # Errors
    ///
    /// Returns an error if the run has not reached the `Collapsed` state
    pub fn render(&self) -> Result<SynthesizedImage> {
        render(
            &self.wave,
            self.model,
            self.config.output_width,
            self.config.output_height,
        )
    }

    fn fail(&mut self, cell: usize) -> AlgorithmError {
        let coordinates = self.wave.topology().coordinates(cell);
        self.state = RunState::Contradiction { cell: coordinates };
        self.contradiction_error(coordinates)
    }

    const fn contradiction_error(&self, cell: (usize, usize)) -> AlgorithmError {
        AlgorithmError::Contradiction {
            cell,
            iteration: self.iteration,
        }
    }

    /// Current state of the attempt
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Number of collapses performed so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Maximum number of collapses allowed
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Seed of this attempt
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The search state
    pub const fn wave(&self) -> &Wave {
        &self.wave
    }

    /// Removals still waiting in the propagation queue
    pub fn pending_propagations(&self) -> usize {
        self.propagator.pending()
    }
}

/// Runs attempts against a shared model, retrying on contradiction
pub struct Synthesizer<'m> {
    model: &'m OverlappingModel,
    config: SynthesisConfig,
}

impl<'m> Synthesizer<'m> {
    /// Create a synthesizer for a model
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(model: &'m OverlappingModel, config: SynthesisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// The configuration applied to every attempt
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Run a single attempt with exactly this seed
    ///
    /// # Errors
    ///
    /// Returns an error on contradiction or when the budget runs out
    pub fn attempt(&self, seed: u64) -> Result<SynthesizedImage> {
        self.attempt_with_progress(seed, &mut |_: &SynthesisRun<'_>| {})
    }

    fn attempt_with_progress<F>(&self, seed: u64, on_iteration: &mut F) -> Result<SynthesizedImage>
    where
        F: FnMut(&SynthesisRun<'_>),
    {
        let mut run = SynthesisRun::new(self.model, &self.config, seed)?;
        on_iteration(&run);
        while run.execute_iteration()? {
            on_iteration(&run);
        }
        on_iteration(&run);
        run.render()
    }

    /// Synthesize an image, retrying contradictions with derived seeds
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Every attempt ends in contradiction
    /// - An attempt exhausts its iteration budget
    pub fn synthesize(&self, seed: u64) -> Result<SynthesizedImage> {
        self.synthesize_with_progress(seed, |_| {})
    }

    /// Synthesize like [`Synthesizer::synthesize`], reporting every iteration
    ///
    /// `on_iteration` sees the run after initialization, after every
    /// successful step and once more when the run finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Every attempt ends in contradiction
    /// - An attempt exhausts its iteration budget
    pub fn synthesize_with_progress<F>(
        &self,
        seed: u64,
        mut on_iteration: F,
    ) -> Result<SynthesizedImage>
    where
        F: FnMut(&SynthesisRun<'_>),
    {
        for attempt in 0..self.config.max_attempts {
            let attempt_seed = derive_attempt_seed(seed, attempt);
            match self.attempt_with_progress(attempt_seed, &mut on_iteration) {
                Ok(image) => {
                    log::info!(
                        "attempt {} of {} succeeded with seed {attempt_seed}",
                        attempt + 1,
                        self.config.max_attempts
                    );
                    return Ok(image);
                }
                Err(error) if error.is_recoverable() => {
                    log::warn!(
                        "attempt {} of {} failed: {error}",
                        attempt + 1,
                        self.config.max_attempts
                    );
                }
                Err(error) => return Err(error),
            }
        }

        Err(AlgorithmError::AttemptsExhausted {
            attempts: self.config.max_attempts,
        })
    }
}

/// Build a model from the sample and synthesize one image
///
/// # Errors
///
/// Returns an error if the sample cannot provide patterns of the configured
/// size, the configuration is invalid, or synthesis fails
pub fn synthesize(
    sample: &Sample,
    config: &SynthesisConfig,
    seed: u64,
) -> Result<SynthesizedImage> {
    let model = OverlappingModel::build(sample, &config.extraction_options())?;
    Synthesizer::new(&model, *config)?.synthesize(seed)
}

/// Synthesize from a flat RGB buffer, returning a flat RGB buffer
///
/// # Errors
///
/// Returns an error if the buffer is not a valid sample or synthesis fails
pub fn synthesize_rgb(
    data: &[u8],
    width: usize,
    height: usize,
    config: &SynthesisConfig,
    seed: u64,
) -> Result<Vec<u8>> {
    let sample = Sample::from_rgb(data, width, height)?;
    synthesize(&sample, config, seed).map(SynthesizedImage::into_data)
}

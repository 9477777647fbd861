//! Algorithm constants and runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default edge length of extracted patterns
pub const DEFAULT_PATTERN_SIZE: usize = 3;

/// Default width and height of the synthesized image
pub const DEFAULT_OUTPUT_SIZE: usize = 48;

/// Default number of attempts before giving up on contradictions
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Upper bound of the random perturbation added to cell entropy
///
/// Small enough never to reorder cells whose entropies genuinely differ.
pub const ENTROPY_NOISE_SCALE: f64 = 1e-6;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension
pub const MAX_OUTPUT_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_wfc";

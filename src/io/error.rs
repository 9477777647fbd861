//! Error types for sample validation, synthesis and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Sample image is unusable for the requested pattern size
    InvalidSample {
        /// Description of what's wrong with the sample
        reason: String,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rendering was requested before every cell collapsed
    IncompleteWave {
        /// Number of cells still holding more than one pattern
        uncollapsed: usize,
    },

    /// A cell lost its last admissible pattern
    ///
    /// Recoverable by restarting the attempt with a different seed.
    Contradiction {
        /// Coordinates `(x, y)` of the emptied cell
        cell: (usize, usize),
        /// Collapse iteration during which propagation failed
        iteration: usize,
    },

    /// The iteration budget ran out before a terminal state was reached
    BudgetExceeded {
        /// Number of iterations that were allowed
        budget: usize,
    },

    /// Every attempt ended in a contradiction
    AttemptsExhausted {
        /// Number of attempts made
        attempts: usize,
    },

    /// Failed to load a sample image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a synthesized image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl AlgorithmError {
    /// Whether a fresh attempt with another seed may succeed
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Contradiction { .. })
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSample { reason } => {
                write!(f, "Invalid sample: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::IncompleteWave { uncollapsed } => {
                write!(
                    f,
                    "Cannot render an incomplete wave ({uncollapsed} cells not collapsed)"
                )
            }
            Self::Contradiction { cell, iteration } => {
                write!(
                    f,
                    "Contradiction at cell ({}, {}) during iteration {iteration}",
                    cell.0, cell.1
                )
            }
            Self::BudgetExceeded { budget } => {
                write!(f, "Iteration budget of {budget} exhausted before completion")
            }
            Self::AttemptsExhausted { attempts } => {
                write!(f, "All {attempts} attempts ended in contradiction")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid sample error
pub fn invalid_sample(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidSample {
        reason: reason.to_string(),
    }
}

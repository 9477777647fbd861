//! Overlapping-model wave function collapse for texture synthesis
//!
//! The engine extracts NxN patterns from a sample image, precomputes which
//! patterns may overlap each other, and fills an output grid by repeatedly
//! collapsing the lowest-entropy cell and propagating the consequences until
//! every cell holds a single pattern or a contradiction forces a retry.

#![forbid(unsafe_code)]

/// Core algorithm implementation including wave state, propagation and collapse
pub mod algorithm;
/// Sample conversion, pattern extraction and the compatibility model
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mathematical utilities for entropy calculations
pub mod math;
/// Directions, grid topology and pattern symmetries
pub mod spatial;

pub use algorithm::executor::{SynthesisConfig, Synthesizer, synthesize, synthesize_rgb};
pub use algorithm::render::SynthesizedImage;
pub use analysis::model::OverlappingModel;
pub use analysis::sample::Sample;
pub use io::error::{AlgorithmError, Result};

//! Immutable synthesis model built once per sample

use crate::analysis::compatibility::CompatibilityTable;
use crate::analysis::patterns::{ExtractionOptions, PatternCatalog};
use crate::analysis::sample::{Rgb, Sample};
use crate::io::error::Result;
use crate::math::entropy::{weight_log_weight, weighted_entropy};

/// Palette, pattern catalog and compatibility table of one sample
///
/// Read-only after construction, so any number of independent runs may
/// borrow the same model, including from different threads.
#[derive(Clone, Debug)]
pub struct OverlappingModel {
    palette: Vec<Rgb>,
    catalog: PatternCatalog,
    compatibility: CompatibilityTable,
    weights: Vec<f64>,
    weight_log_weights: Vec<f64>,
}

impl OverlappingModel {
    /// Extract patterns from the sample and precompute their adjacency
    ///
    /// # Errors
    ///
    /// Returns an error if the sample is too small for the pattern size
    pub fn build(sample: &Sample, options: &ExtractionOptions) -> Result<Self> {
        let catalog = PatternCatalog::extract(sample, options)?;
        let compatibility = CompatibilityTable::build(&catalog);
        let weights = catalog.weights();
        let weight_log_weights = weights.iter().map(|&w| weight_log_weight(w)).collect();
        log::debug!(
            "model has {} patterns with initial cell entropy {:.4}",
            catalog.len(),
            weighted_entropy(&weights)
        );

        Ok(Self {
            palette: sample.palette().to_vec(),
            catalog,
            compatibility,
            weights,
            weight_log_weights,
        })
    }

    /// Distinct sample colors addressed by pattern pixels
    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    /// Color of a palette index
    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.palette.get(index).copied()
    }

    /// Extracted patterns
    pub const fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Adjacency relation between patterns
    pub const fn compatibility(&self) -> &CompatibilityTable {
        &self.compatibility
    }

    /// Number of distinct patterns
    pub fn pattern_count(&self) -> usize {
        self.catalog.len()
    }

    /// Edge length of every pattern
    pub const fn pattern_size(&self) -> usize {
        self.catalog.pattern_size()
    }

    /// Pattern frequencies as sampling weights
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Precomputed `w·ln w` of every pattern weight
    pub fn weight_log_weights(&self) -> &[f64] {
        &self.weight_log_weights
    }
}

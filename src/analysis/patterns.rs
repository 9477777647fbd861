//! Pattern extraction from sample images
//!
//! Slides an NxN window across the sample, expands every window into its
//! enabled symmetry variants, and deduplicates the results into a catalog
//! where each distinct block carries the number of times it was seen.

use crate::analysis::sample::Sample;
use crate::io::error::{Result, invalid_sample};
use crate::spatial::symmetry::{Symmetry, variants};
use ndarray::Array2;
use std::collections::HashMap;

/// An NxN block of palette indices extracted from the sample
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pixels: Array2<usize>,
    symmetry: Symmetry,
    frequency: usize,
}

impl Pattern {
    /// Pixels with shape `(N, N)`, indexed `(y, x)`
    pub const fn pixels(&self) -> &Array2<usize> {
        &self.pixels
    }

    /// Edge length N
    pub fn size(&self) -> usize {
        self.pixels.nrows()
    }

    /// Palette index at local coordinates `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> Option<usize> {
        self.pixels.get((y, x)).copied()
    }

    /// Palette index of the top-left pixel
    pub fn reference_pixel(&self) -> usize {
        self.pixel(0, 0).unwrap_or_default()
    }

    /// Transform that first produced this block
    pub const fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Occurrences in the sample across all symmetry variants
    pub const fn frequency(&self) -> usize {
        self.frequency
    }
}

/// Parameters controlling which windows and variants are collected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Edge length of each pattern
    pub pattern_size: usize,
    /// Treat the sample as wrapping at its edges
    pub periodic_input: bool,
    /// Add the 90°, 180° and 270° rotations of each window
    pub include_rotations: bool,
    /// Add the horizontal reflection of each window and rotation
    pub include_reflections: bool,
}

/// Deduplicated patterns with dense ids in order of first discovery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternCatalog {
    pattern_size: usize,
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Extract every pattern of the sample
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern size is zero or larger than the
    /// smaller sample dimension
    pub fn extract(sample: &Sample, options: &ExtractionOptions) -> Result<Self> {
        let n = options.pattern_size;
        let (width, height) = (sample.width(), sample.height());

        if n == 0 {
            return Err(invalid_sample(&"pattern size must be at least 1"));
        }
        if n > width.min(height) {
            return Err(invalid_sample(&format!(
                "pattern size {n} exceeds the {width}x{height} sample"
            )));
        }

        let (x_positions, y_positions) = if options.periodic_input {
            (width, height)
        } else {
            (width - n + 1, height - n + 1)
        };

        let mut patterns: Vec<Pattern> = Vec::new();
        let mut lookup: HashMap<Vec<usize>, usize> = HashMap::new();

        for y in 0..y_positions {
            for x in 0..x_positions {
                let block = Self::window(sample.indices(), x, y, n);
                for (symmetry, variant) in variants(
                    &block,
                    options.include_rotations,
                    options.include_reflections,
                ) {
                    let key: Vec<usize> = variant.iter().copied().collect();
                    if let Some(pattern) = lookup
                        .get(&key)
                        .and_then(|&index| patterns.get_mut(index))
                    {
                        pattern.frequency += 1;
                    } else {
                        lookup.insert(key, patterns.len());
                        patterns.push(Pattern {
                            pixels: variant,
                            symmetry,
                            frequency: 1,
                        });
                    }
                }
            }
        }

        log::debug!(
            "extracted {} patterns of size {n} from {}x{} windows",
            patterns.len(),
            x_positions,
            y_positions
        );

        Ok(Self {
            pattern_size: n,
            patterns,
        })
    }

    // Coordinates wrap so periodic windows may straddle the sample edge
    fn window(indices: &Array2<usize>, x: usize, y: usize, n: usize) -> Array2<usize> {
        let (height, width) = indices.dim();
        Array2::from_shape_fn((n, n), |(dy, dx)| {
            indices
                .get(((y + dy) % height, (x + dx) % width))
                .copied()
                .unwrap_or_default()
        })
    }

    /// Edge length of every pattern
    pub const fn pattern_size(&self) -> usize {
        self.pattern_size
    }

    /// Number of distinct patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the catalog holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern with the given id
    pub fn get(&self, id: usize) -> Option<&Pattern> {
        self.patterns.get(id)
    }

    /// All patterns, indexed by id
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Frequencies as sampling weights, indexed by id
    pub fn weights(&self) -> Vec<f64> {
        self.patterns.iter().map(|p| p.frequency as f64).collect()
    }
}

//! Sample image validation and conversion to palette indices

use crate::io::error::{Result, invalid_sample};
use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};

/// An RGB color triple
pub type Rgb = [u8; 3];

/// Number of color components per pixel in sample and output buffers
pub const COMPONENTS: usize = 3;

/// A sample image reduced to a palette and a grid of palette indices
///
/// The grid has shape `(height, width)`; each entry addresses `palette`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    indices: Array2<usize>,
    palette: Vec<Rgb>,
}

impl Sample {
    /// Build a sample from a flat row-major RGB buffer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `width` or `height` is zero
    /// - `data` does not hold exactly `width * height * 3` bytes
    pub fn from_rgb(data: &[u8], width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_sample(&format!(
                "sample dimensions must be non-zero, got {width}x{height}"
            )));
        }

        let expected = width * height * COMPONENTS;
        if data.len() != expected {
            return Err(invalid_sample(&format!(
                "expected {expected} bytes for a {width}x{height} RGB sample, got {}",
                data.len()
            )));
        }

        let pixels: Vec<Rgb> = data
            .chunks_exact(COMPONENTS)
            .filter_map(|chunk| match *chunk {
                [r, g, b] => Some([r, g, b]),
                _ => None,
            })
            .collect();

        // Deterministic color ordering ensures reproducible pattern ids
        let palette: Vec<Rgb> = pixels
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let lookup: HashMap<Rgb, usize> = palette
            .iter()
            .enumerate()
            .map(|(index, &color)| (color, index))
            .collect();

        let indices = Array2::from_shape_fn((height, width), |(y, x)| {
            pixels
                .get(y * width + x)
                .and_then(|color| lookup.get(color))
                .copied()
                .unwrap_or_default()
        });

        Ok(Self { indices, palette })
    }

    /// Build a sample from an index grid and its palette
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or an index does not address
    /// the palette
    pub fn from_indices(indices: Array2<usize>, palette: Vec<Rgb>) -> Result<Self> {
        let (height, width) = indices.dim();
        if width == 0 || height == 0 {
            return Err(invalid_sample(&format!(
                "sample dimensions must be non-zero, got {width}x{height}"
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&index| index >= palette.len()) {
            return Err(invalid_sample(&format!(
                "color index {bad} exceeds palette of {} colors",
                palette.len()
            )));
        }
        Ok(Self { indices, palette })
    }

    /// Grid of palette indices with shape `(height, width)`
    pub const fn indices(&self) -> &Array2<usize> {
        &self.indices
    }

    /// Distinct colors of the sample, sorted by their bytes
    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    /// Sample width in pixels
    pub fn width(&self) -> usize {
        self.indices.ncols()
    }

    /// Sample height in pixels
    pub fn height(&self) -> usize {
        self.indices.nrows()
    }
}

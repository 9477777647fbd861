//! Conversion of a collapsed wave into an RGB pixel buffer

use crate::algorithm::wave::Wave;
use crate::analysis::model::OverlappingModel;
use crate::analysis::sample::{COMPONENTS, Rgb};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};

/// Row-major RGB output of a successful synthesis
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesizedImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl SynthesizedImage {
    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Flat buffer of `width * height * 3` bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Color at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * COMPONENTS;
        match *self.data.get(start..start + COMPONENTS)? {
            [r, g, b] => Some([r, g, b]),
            _ => None,
        }
    }

    /// Consume the image and return its buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Render a fully collapsed wave at the requested output size
///
/// Each pixel takes the color of its cell's pattern at the pixel's offset
/// from that cell. With one cell per pixel the offset is always zero, so
/// the top-left sample of each pattern is used; a bounded wave is smaller
/// than the output by N-1 cells and the last rows and columns are read from
/// the interior of the bordering patterns.
///
/// # Errors
///
/// Returns an error if:
/// - Any cell does not hold exactly one pattern
/// - The output size cannot be covered by the wave's patterns
pub fn render(
    wave: &Wave,
    model: &OverlappingModel,
    width: usize,
    height: usize,
) -> Result<SynthesizedImage> {
    if !wave.is_fully_collapsed() {
        let uncollapsed = (0..wave.cell_count())
            .filter(|&cell| !wave.is_collapsed(cell))
            .count();
        return Err(AlgorithmError::IncompleteWave { uncollapsed });
    }

    let topology = wave.topology();
    let n = model.pattern_size();
    let covers = |extent: usize, cells: usize| extent >= cells && extent - cells < n;
    if !covers(width, topology.width()) || !covers(height, topology.height()) {
        return Err(invalid_parameter(
            "output_size",
            &format!("{width}x{height}"),
            &format!(
                "a {}x{} wave of size-{n} patterns cannot cover it",
                topology.width(),
                topology.height()
            ),
        ));
    }

    let last_column = topology.width().saturating_sub(1);
    let last_row = topology.height().saturating_sub(1);
    let mut data = Vec::with_capacity(width * height * COMPONENTS);

    for y in 0..height {
        for x in 0..width {
            let (cx, cy) = (x.min(last_column), y.min(last_row));
            let color = wave
                .collapsed_pattern(topology.index_of(cx, cy))
                .and_then(|id| model.catalog().get(id))
                .and_then(|pattern| pattern.pixel(x - cx, y - cy))
                .and_then(|index| model.color(index))
                .ok_or(AlgorithmError::IncompleteWave { uncollapsed: 1 })?;
            data.extend_from_slice(&color);
        }
    }

    Ok(SynthesizedImage {
        width,
        height,
        data,
    })
}

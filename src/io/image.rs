//! PNG loading into samples and export of synthesized images

use crate::algorithm::render::SynthesizedImage;
use crate::analysis::sample::Sample;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use image::RgbImage;
use std::path::Path;

/// Load a sample from an image file, discarding any alpha channel
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The decoded image has zero width or height
pub fn load_sample<P: AsRef<Path>>(path: P) -> Result<Sample> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    Sample::from_rgb(rgb.as_raw(), width, height)
}

/// Save a synthesized image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The image dimensions do not fit the encoder
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image(image: &SynthesizedImage, output_path: &Path) -> Result<()> {
    let width = u32::try_from(image.width())
        .map_err(|e| invalid_parameter("output_width", &image.width(), &e))?;
    let height = u32::try_from(image.height())
        .map_err(|e| invalid_parameter("output_height", &image.height(), &e))?;

    let buffer = RgbImage::from_raw(width, height, image.data().to_vec()).ok_or_else(|| {
        invalid_parameter(
            "output",
            &format!("{width}x{height}"),
            &"pixel buffer does not match the image dimensions",
        )
    })?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

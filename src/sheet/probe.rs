//! Image dimension probe.

use std::path::Path;

use image::ImageReader;

use crate::error::{OperationError, Result};

use super::Size;

/// Read the pixel size of a PNG from its header, without decoding pixels.
///
/// The format is detected from the file contents, not the extension.
pub fn probe_dimensions(path: &Path) -> Result<Size> {
    let reader = ImageReader::open(path)
        .map_err(|e| OperationError::Image {
            path: path.to_path_buf(),
            message: format!("Failed to open image: {}", e),
        })?
        .with_guessed_format()
        .map_err(|e| OperationError::Image {
            path: path.to_path_buf(),
            message: format!("Failed to read image header: {}", e),
        })?;

    let (w, h) = reader.into_dimensions().map_err(|e| OperationError::Image {
        path: path.to_path_buf(),
        message: format!("Unrecognized image header: {}", e),
    })?;

    Ok(Size { w, h })
}

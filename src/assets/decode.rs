use std::path::Path;

use image::RgbImage;

use crate::foundation::error::{SheetsError, SheetsResult};

/// Decode any raster format supported by `image` into opaque RGB8.
///
/// Alpha, if present, is dropped rather than composited.
pub fn decode_image(bytes: &[u8]) -> SheetsResult<RgbImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SheetsError::input(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgb8())
}

/// Read and decode the source photo at `path`.
pub fn load_source_image(path: &Path) -> SheetsResult<RgbImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| SheetsError::input(format!("read '{}': {e}", path.display())))?;
    let img = decode_image(&bytes).map_err(|e| match e {
        SheetsError::Input(msg) => SheetsError::input(format!("'{}': {msg}", path.display())),
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded source image"
    );
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

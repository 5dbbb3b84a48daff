use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::{
    config::model::{Placement, SheetsConfig},
    foundation::core::{Rgb8, Rgba8Premul, SheetSize},
    foundation::error::{SheetsError, SheetsResult},
    render::{layer::Layer, sheet::render_sheet},
};

/// Top-left corner that centers a `layer`-sized image on the canvas, shifted by the placement.
pub fn paste_position(canvas_size: u32, layer: (u32, u32), placement: &Placement) -> (i64, i64) {
    let center = i64::from(canvas_size / 2);
    (
        center - i64::from(layer.0 / 2) + i64::from(placement.dx),
        center - i64::from(layer.1 / 2) + i64::from(placement.dy),
    )
}

/// Paint every placement back to front and flatten onto the configured background.
///
/// Each sheet's temporaries are dropped once it has been painted.
#[tracing::instrument(skip(config), fields(canvas = config.canvas_size))]
pub fn compose_sheets(
    config: &SheetsConfig,
    size: SheetSize,
    color: Rgb8,
) -> SheetsResult<RgbImage> {
    config.validate()?;
    let n = config.canvas_size;
    let mut canvas = Layer::filled(n, n, Rgba8Premul::opaque(config.background))?;

    for (index, placement) in config.placements.iter().enumerate() {
        let rendered = render_sheet(size, color, placement.angle_deg, &config.style)?;
        let (width, height) = rendered.dimensions();
        let (x, y) = paste_position(n, (width, height), placement);
        canvas.paste_over(&rendered.shadow, x, y);
        canvas.paste_over(&rendered.sheet, x, y);
        tracing::debug!(
            index,
            angle_deg = placement.angle_deg,
            x,
            y,
            width,
            height,
            "painted sheet"
        );
    }

    Ok(canvas.flatten_onto(config.background))
}

/// Write `img` as PNG, creating the parent directory if needed.
pub fn encode_png(img: &RgbImage, path: &Path) -> SheetsResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            SheetsError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| SheetsError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;

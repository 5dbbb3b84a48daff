use std::path::Path;

use image::RgbImage;

use crate::{
    assets::decode::load_source_image,
    color::sampler::{SampleOpts, sample_color},
    config::model::SheetsConfig,
    foundation::core::Rgb8,
    foundation::error::SheetsResult,
    geometry::sheet::{SheetFit, max_sheet_size},
    render::compositor::{compose_sheets, encode_png},
};

/// What a render decided along the way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderReport {
    /// Color sampled from the source photo.
    pub color: Rgb8,
    /// Sheet size shared by every placement.
    pub fit: SheetFit,
    /// Side of the square output image.
    pub canvas_size: u32,
}

/// Sample, size, render and composite in memory.
pub fn render_sheets_image(
    source: &RgbImage,
    config: &SheetsConfig,
) -> SheetsResult<(RgbImage, RenderReport)> {
    config.validate()?;
    let color = sample_color(source, &config.sample)?;
    let fit = max_sheet_size(
        config.canvas_size,
        config.style.shadow_width,
        config.max_angle_deg,
        config.aspect_ratio,
    );
    tracing::info!(
        color = %color,
        width = fit.size.width,
        height = fit.size.height,
        fallback = fit.fallback,
        "sheet layout"
    );
    let img = compose_sheets(config, fit.size, color)?;
    Ok((
        img,
        RenderReport {
            color,
            fit,
            canvas_size: config.canvas_size,
        },
    ))
}

/// Load `input`, render the sheet stack and write it to `output` as PNG.
#[tracing::instrument(skip(config))]
pub fn render_sheets_file(
    input: &Path,
    output: &Path,
    config: &SheetsConfig,
) -> SheetsResult<RenderReport> {
    let source = load_source_image(input)?;
    let (img, report) = render_sheets_image(&source, config)?;
    encode_png(&img, output)?;
    Ok(report)
}

/// Load `path` and sample its representative color.
#[tracing::instrument]
pub fn sample_color_file(path: &Path, opts: &SampleOpts) -> SheetsResult<Rgb8> {
    let img = load_source_image(path)?;
    sample_color(&img, opts)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;

use image::RgbImage;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{SheetsError, SheetsResult};

/// How pixel channels are reduced to one representative value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    /// Arithmetic mean per channel, truncated.
    Mean,
    /// Median per channel; even counts average the two middle values, truncated.
    #[default]
    Median,
}

/// Options for [`sample_color`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SampleOpts {
    /// Side of a square crop centered on the image midpoint. `None` samples the whole image.
    pub crop: Option<u32>,
    /// Channel reduction strategy.
    pub aggregate: Aggregate,
}

/// Clamped crop rectangle in source pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge (inclusive).
    pub x: u32,
    /// Top edge (inclusive).
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Square of side `side` centered on `(width / 2, height / 2)`, clamped to the image.
///
/// Odd sides lose one pixel (`half = side / 2` on each side of the center).
pub fn centered_crop(width: u32, height: u32, side: u32) -> SheetsResult<CropRect> {
    let half = i64::from(side / 2);
    let (cx, cy) = (i64::from(width / 2), i64::from(height / 2));

    let x0 = (cx - half).max(0);
    let y0 = (cy - half).max(0);
    let x1 = (cx + half).min(i64::from(width));
    let y1 = (cy + half).min(i64::from(height));
    if x1 <= x0 || y1 <= y0 {
        return Err(SheetsError::validation(format!(
            "crop box {side} leaves no pixels in a {width}x{height} image"
        )));
    }

    Ok(CropRect {
        x: x0 as u32,
        y: y0 as u32,
        width: (x1 - x0) as u32,
        height: (y1 - y0) as u32,
    })
}

/// Reduce an image (or its centered crop) to one representative color.
pub fn sample_color(img: &RgbImage, opts: &SampleOpts) -> SheetsResult<Rgb8> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(SheetsError::input("cannot sample an empty image"));
    }

    let rect = match opts.crop {
        Some(side) => centered_crop(w, h, side)?,
        None => CropRect {
            x: 0,
            y: 0,
            width: w,
            height: h,
        },
    };
    let swatch = image::imageops::crop_imm(img, rect.x, rect.y, rect.width, rect.height).to_image();

    let mut hist = [[0u64; 256]; 3];
    for px in swatch.pixels() {
        for (c, &v) in px.0.iter().enumerate() {
            hist[c][usize::from(v)] += 1;
        }
    }
    let count = u64::from(rect.width) * u64::from(rect.height);

    let reduce = |h: &[u64; 256]| match opts.aggregate {
        Aggregate::Mean => histogram_mean(h, count),
        Aggregate::Median => histogram_median(h, count),
    };
    let color = Rgb8::new(reduce(&hist[0]), reduce(&hist[1]), reduce(&hist[2]));
    tracing::debug!(
        x = rect.x,
        y = rect.y,
        width = rect.width,
        height = rect.height,
        aggregate = ?opts.aggregate,
        color = %color,
        "sampled representative color"
    );
    Ok(color)
}

fn histogram_mean(hist: &[u64; 256], count: u64) -> u8 {
    let sum: u64 = hist
        .iter()
        .enumerate()
        .map(|(v, &n)| v as u64 * n)
        .sum();
    (sum / count) as u8
}

fn histogram_median(hist: &[u64; 256], count: u64) -> u8 {
    let upper = histogram_rank(hist, count / 2);
    if count % 2 == 1 {
        return upper;
    }
    let lower = histogram_rank(hist, count / 2 - 1);
    ((u16::from(lower) + u16::from(upper)) / 2) as u8
}

/// Value at zero-based `rank` in the sorted sample.
fn histogram_rank(hist: &[u64; 256], rank: u64) -> u8 {
    let mut seen = 0u64;
    for (v, &n) in hist.iter().enumerate() {
        seen += n;
        if seen > rank {
            return v as u8;
        }
    }
    255
}

#[cfg(test)]
#[path = "../../tests/unit/color/sampler.rs"]
mod tests;

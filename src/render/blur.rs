use crate::foundation::error::{SheetsError, SheetsResult};
use crate::foundation::math::buffer_len;

const Q16_ONE: i64 = 1 << 16;

/// Kernel half-width used for a Gaussian of standard deviation `sigma`.
pub fn kernel_radius(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (3.0 * sigma).ceil() as u32
}

/// Gaussian-blur a single-channel `width * height` mask.
///
/// Taps past the edges reuse the nearest edge pixel.
pub fn blur_mask(src: &[u8], width: u32, height: u32, sigma: f32) -> SheetsResult<Vec<u8>> {
    let expected_len =
        buffer_len(width, height, 1).ok_or_else(|| SheetsError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(SheetsError::render(
            "blur_mask expects src matching width*height",
        ));
    }
    let radius = kernel_radius(sigma);
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> SheetsResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(SheetsError::validation("blur sigma must be > 0"));
    }

    let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
    let r = i64::from(radius);
    let taps: Vec<f64> = (-r..=r)
        .map(|i| (-((i * i) as f64) / two_sigma_sq).exp())
        .collect();
    let total: f64 = taps.iter().sum();
    if total <= 0.0 {
        return Err(SheetsError::render("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = taps
        .iter()
        .map(|t| ((t / total) * Q16_ONE as f64).round().clamp(0.0, Q16_ONE as f64) as u32)
        .collect();
    settle_center_tap(&mut weights);
    Ok(weights)
}

/// Fold the rounding residue into the center tap so the weights sum to exactly [`Q16_ONE`].
fn settle_center_tap(weights: &mut [u32]) {
    let sum: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let mid = weights.len() / 2;
    if let Some(center) = weights.get_mut(mid) {
        *center = (i64::from(*center) + Q16_ONE - sum).clamp(0, Q16_ONE) as u32;
    }
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let w = i64::from(width);
    for y in 0..i64::from(height) {
        let row = (y * w) as usize;
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i64 - radius).clamp(0, w - 1);
                acc += u64::from(kw) * u64::from(src[row + sx as usize]);
            }
            dst[row + x as usize] = q16_to_u8(acc);
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let w = i64::from(width);
    let h = i64::from(height);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i64 - radius).clamp(0, h - 1);
                acc += u64::from(kw) * u64::from(src[(sy * w + x) as usize]);
            }
            dst[(y * w + x) as usize] = q16_to_u8(acc);
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + (Q16_ONE as u64 >> 1)) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;

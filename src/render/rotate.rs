use kurbo::{Affine, Point, Vec2};

use crate::{
    foundation::error::{SheetsError, SheetsResult},
    foundation::math::round15,
    render::composite::PremulRgba8,
    render::layer::Layer,
};

/// Rotation that turns content counter-clockwise on screen (y pointing down).
///
/// Trig values are rounded so right angles produce exact zeros.
fn screen_rotation(angle_deg: f64) -> Affine {
    let theta = angle_deg.to_radians();
    let (s, c) = (round15(theta.sin()), round15(theta.cos()));
    Affine::new([c, -s, s, c, 0.0, 0.0])
}

fn about_center(rotation: Affine, src_center: Vec2, dst_center: Vec2) -> Affine {
    Affine::translate(dst_center) * rotation * Affine::translate(-src_center)
}

/// Size of the canvas that holds a `width x height` layer rotated by `angle_deg` without clipping.
pub fn rotated_extent(width: u32, height: u32, angle_deg: f64) -> (u32, u32) {
    let (w, h) = (f64::from(width), f64::from(height));
    let center = Vec2::new(w / 2.0, h / 2.0);
    let fwd = about_center(screen_rotation(angle_deg), center, center);

    let corners = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ];
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in corners.map(|p| fwd * p) {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    (
        (max_x.ceil() - min_x.floor()) as u32,
        (max_y.ceil() - min_y.floor()) as u32,
    )
}

/// Rotate `src` by `angle_deg` (counter-clockwise on screen) with bicubic resampling.
///
/// The output grows to the rotated bounding box and keeps the rotation centered. Output pixels
/// whose centers fall outside the source are transparent.
pub fn rotate_expand(src: &Layer, angle_deg: f64) -> SheetsResult<Layer> {
    if !angle_deg.is_finite() {
        return Err(SheetsError::validation("rotation angle must be finite"));
    }
    let (nw, nh) = rotated_extent(src.width, src.height, angle_deg);
    let mut out = Layer::new(nw, nh)?;
    if src.width == 0 || src.height == 0 {
        return Ok(out);
    }

    let (w, h) = (f64::from(src.width), f64::from(src.height));
    let inv = about_center(
        screen_rotation(-angle_deg),
        Vec2::new(f64::from(nw) / 2.0, f64::from(nh) / 2.0),
        Vec2::new(w / 2.0, h / 2.0),
    );
    let [a, b, c, d, e, f] = inv.as_coeffs();

    for oy in 0..nh {
        let py = f64::from(oy) + 0.5;
        for ox in 0..nw {
            let px = f64::from(ox) + 0.5;
            let u = a * px + c * py + e;
            let v = b * px + d * py + f;
            if u < 0.0 || v < 0.0 || u >= w || v >= h {
                continue;
            }
            out.set_pixel(ox, oy, sample_bicubic(src, u - 0.5, v - 0.5));
        }
    }
    Ok(out)
}

/// Keys cubic convolution kernel with `a = -0.5`.
fn cubic_weight(t: f64) -> f64 {
    const A: f64 = -0.5;
    let t = t.abs();
    if t < 1.0 {
        ((A + 2.0) * t - (A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        ((A * t - 5.0 * A) * t + 8.0 * A) * t - 4.0 * A
    } else {
        0.0
    }
}

fn cubic_weights(t: f64) -> [f64; 4] {
    [
        cubic_weight(t + 1.0),
        cubic_weight(t),
        cubic_weight(1.0 - t),
        cubic_weight(2.0 - t),
    ]
}

/// Sample at continuous pixel coordinates where integer values hit pixel centers.
fn sample_bicubic(src: &Layer, fx: f64, fy: f64) -> PremulRgba8 {
    let (x0, y0) = (fx.floor(), fy.floor());
    let wx = cubic_weights(fx - x0);
    let wy = cubic_weights(fy - y0);
    let (x0, y0) = (x0 as i64, y0 as i64);
    let max_x = i64::from(src.width) - 1;
    let max_y = i64::from(src.height) - 1;

    let mut acc = [0f64; 4];
    for (j, &wyj) in wy.iter().enumerate() {
        let sy = (y0 + j as i64 - 1).clamp(0, max_y) as u32;
        let mut row = [0f64; 4];
        for (i, &wxi) in wx.iter().enumerate() {
            let sx = (x0 + i as i64 - 1).clamp(0, max_x) as u32;
            let px = src.pixel(sx, sy);
            for ch in 0..4 {
                row[ch] += wxi * f64::from(px[ch]);
            }
        }
        for ch in 0..4 {
            acc[ch] += wyj * row[ch];
        }
    }

    let alpha = acc[3].round().clamp(0.0, 255.0);
    // Overshoot can push color past coverage; clamp to keep the pixel validly premultiplied.
    let channel = |v: f64| v.round().clamp(0.0, alpha) as u8;
    [channel(acc[0]), channel(acc[1]), channel(acc[2]), alpha as u8]
}

#[cfg(test)]
#[path = "../../tests/unit/render/rotate.rs"]
mod tests;

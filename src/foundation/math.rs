pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Round to 15 decimal places so trig results like `cos(90°)` collapse to exact zero.
pub(crate) fn round15(v: f64) -> f64 {
    const SCALE: f64 = 1e15;
    (v * SCALE).round() / SCALE
}

/// Checked `width * height * channels` for pixel buffers.
pub(crate) fn buffer_len(width: u32, height: u32, channels: usize) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

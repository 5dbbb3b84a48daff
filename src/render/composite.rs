use crate::foundation::math::mul_div255_u8;

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Porter-Duff "over": `src + dst * (1 - src.a)` on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Composite a premultiplied pixel over an opaque background, dropping alpha.
pub fn flatten(px: PremulRgba8, bg: [u8; 3]) -> [u8; 3] {
    let inv = 255u16 - u16::from(px[3]);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = px[i].saturating_add(mul_div255_u8(u16::from(bg[i]), inv));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

use image::RgbImage;

use crate::{
    foundation::core::{Rgb8, Rgba8Premul},
    foundation::error::{SheetsError, SheetsResult},
    foundation::math::buffer_len,
    render::composite::{self, PremulRgba8},
};

/// A premultiplied RGBA8 pixel grid, tightly packed and row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes.
    pub data: Vec<u8>,
}

impl Layer {
    /// Fully transparent layer.
    pub fn new(width: u32, height: u32) -> SheetsResult<Self> {
        Self::filled(width, height, Rgba8Premul::transparent())
    }

    /// Layer with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgba8Premul) -> SheetsResult<Self> {
        let len = buffer_len(width, height, 4)
            .ok_or_else(|| SheetsError::render("layer buffer size overflow"))?;
        let data = px.to_array().repeat(len / 4);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap existing premultiplied bytes.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> SheetsResult<Self> {
        let expected = buffer_len(width, height, 4)
            .ok_or_else(|| SheetsError::render("layer buffer size overflow"))?;
        if data.len() != expected {
            return Err(SheetsError::render(
                "layer data must match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Pixel at `(x, y)`; panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> PremulRgba8 {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite pixel at `(x, y)`; panics when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: PremulRgba8) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Row `y` as a mutable byte slice.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = self.index(0, y);
        let end = start + (self.width as usize) * 4;
        &mut self.data[start..end]
    }

    /// Alpha channel as a single-channel mask.
    pub fn alpha_mask(&self) -> Vec<u8> {
        self.data.chunks_exact(4).map(|px| px[3]).collect()
    }

    /// True when every pixel has full coverage.
    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 255)
    }

    /// Composite `src` over this layer with its top-left corner at `(x, y)`.
    ///
    /// The offset may be negative or push `src` past the far edges; only the overlap is painted.
    pub fn paste_over(&mut self, src: &Layer, x: i64, y: i64) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(src.width)).min(i64::from(self.width));
        let y1 = (y + i64::from(src.height)).min(i64::from(self.height));
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let span = ((x1 - x0) as usize) * 4;
        for dy in y0..y1 {
            let sy = (dy - y) as u32;
            let sx = (x0 - x) as u32;
            let s_start = src.index(sx, sy);
            let d_start = self.index(x0 as u32, dy as u32);
            let s_row = &src.data[s_start..s_start + span];
            let d_row = &mut self.data[d_start..d_start + span];
            for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
                let out = composite::over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        }
    }

    /// Composite onto an opaque background and drop alpha.
    pub fn flatten_onto(&self, bg: Rgb8) -> RgbImage {
        let bg = bg.to_array();
        let mut out = RgbImage::new(self.width, self.height);
        for (dst, px) in out.pixels_mut().zip(self.data.chunks_exact(4)) {
            dst.0 = composite::flatten([px[0], px[1], px[2], px[3]], bg);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;

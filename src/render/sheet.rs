use crate::{
    config::model::{GlossStyle, SheetStyle},
    foundation::core::{Rgb8, Rgba8Premul, SheetSize},
    foundation::error::{SheetsError, SheetsResult},
    foundation::math::mul_div255_u8,
    render::{blur, layer::Layer, rotate},
};

/// A rotated sheet and its matching drop shadow.
///
/// Both layers always have the same dimensions and are pasted at the same position.
#[derive(Clone, Debug)]
pub struct RenderedSheet {
    /// Soft black halo, painted first.
    pub shadow: Layer,
    /// Gradient + gloss sheet, painted over the shadow.
    pub sheet: Layer,
}

impl RenderedSheet {
    /// Shared `(width, height)` of both layers.
    pub fn dimensions(&self) -> (u32, u32) {
        self.sheet.dimensions()
    }
}

/// Render one sheet of `size` in `color`, rotated by `angle_deg` counter-clockwise.
#[tracing::instrument(level = "debug", skip(style), fields(width = size.width, height = size.height))]
pub fn render_sheet(
    size: SheetSize,
    color: Rgb8,
    angle_deg: f64,
    style: &SheetStyle,
) -> SheetsResult<RenderedSheet> {
    if size.width <= 1 || size.height <= 1 {
        return Err(SheetsError::validation(format!(
            "sheet size {}x{} is too small to render",
            size.width, size.height
        )));
    }

    let mut flat = gradient_layer(size, color, style.gradient_strength)?;
    if let Some(gloss) = gloss_layer(size, &style.gloss)? {
        flat.paste_over(&gloss, 0, 0);
    }
    let embedded = embed_centered(&flat, style.shadow_width)?;
    let shadow = shadow_layer(&embedded, style.shadow_width, style.shadow_alpha)?;

    let sheet = rotate::rotate_expand(&embedded, angle_deg)?;
    let shadow = rotate::rotate_expand(&shadow, angle_deg)?;
    if sheet.dimensions() != shadow.dimensions() {
        return Err(SheetsError::render("sheet and shadow layers diverged in size"));
    }
    Ok(RenderedSheet { shadow, sheet })
}

/// Opaque vertical gradient: row 0 is `color` lightened by `strength`, the last row is `color`.
pub fn gradient_layer(size: SheetSize, color: Rgb8, strength: f64) -> SheetsResult<Layer> {
    let mut layer = Layer::new(size.width, size.height)?;
    let last = f64::from(size.height.saturating_sub(1).max(1));
    for y in 0..size.height {
        let ratio = f64::from(y) / last;
        let px = Rgba8Premul::opaque(color.lighten(strength * (1.0 - ratio))).to_array();
        for dst in layer.row_mut(y).chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }
    Ok(layer)
}

/// White highlight with per-pixel alpha, or `None` when the style has no gloss.
pub fn gloss_layer(size: SheetSize, style: &GlossStyle) -> SheetsResult<Option<Layer>> {
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    match *style {
        GlossStyle::None => Ok(None),
        GlossStyle::Linear { max_alpha, band } => {
            let mut layer = Layer::new(size.width, size.height)?;
            let band_px = band * h;
            let rows = (band_px as u32).min(size.height);
            for y in 0..rows {
                let fade = 1.0 - f64::from(y) / band_px;
                let a = (f64::from(max_alpha) * fade * fade) as u8;
                for dst in layer.row_mut(y).chunks_exact_mut(4) {
                    dst.copy_from_slice(&[a, a, a, a]);
                }
            }
            Ok(Some(layer))
        }
        GlossStyle::Radial {
            max_alpha,
            rel_radius,
            center_x,
            center_y,
        } => {
            let mut layer = Layer::new(size.width, size.height)?;
            let cx = (w * center_x).trunc();
            let cy = (h * center_y).trunc();
            let reach = rel_radius * w.hypot(h);
            let peak = f64::from(max_alpha);
            for y in 0..size.height {
                for x in 0..size.width {
                    let dist = (f64::from(x) - cx).hypot(f64::from(y) - cy);
                    let a = (peak * (1.0 - dist / reach)).clamp(0.0, peak) as u8;
                    if a != 0 {
                        layer.set_pixel(x, y, [a, a, a, a]);
                    }
                }
            }
            Ok(Some(layer))
        }
    }
}

/// Side of the square layer a sheet is embedded in before rotation.
///
/// The diagonal guarantees no corner leaves the layer at any angle; the padding leaves room for
/// the shadow's blur.
pub fn embedded_side(size: SheetSize, shadow_width: u32) -> SheetsResult<u32> {
    let diagonal = size.diagonal().ceil();
    if diagonal >= f64::from(u32::MAX) {
        return Err(SheetsError::validation("sheet diagonal does not fit in u32"));
    }
    shadow_width
        .checked_mul(2)
        .and_then(|pad| (diagonal as u32).checked_add(pad))
        .ok_or_else(|| {
            SheetsError::validation(format!(
                "shadow_width {shadow_width} is too large to pad a {}x{} sheet",
                size.width, size.height
            ))
        })
}

/// Center `flat` on a transparent square of [`embedded_side`].
pub fn embed_centered(flat: &Layer, shadow_width: u32) -> SheetsResult<Layer> {
    let size = SheetSize {
        width: flat.width,
        height: flat.height,
    };
    let side = embedded_side(size, shadow_width)?;
    let mut layer = Layer::new(side, side)?;
    let x = i64::from((side - flat.width) / 2);
    let y = i64::from((side - flat.height) / 2);
    layer.paste_over(flat, x, y);
    Ok(layer)
}

/// Black halo painted through the blurred coverage of `embedded` at up to `alpha`.
pub fn shadow_layer(embedded: &Layer, shadow_width: u32, alpha: u8) -> SheetsResult<Layer> {
    let mask = blur::blur_mask(
        &embedded.alpha_mask(),
        embedded.width,
        embedded.height,
        shadow_width as f32,
    )?;
    let mut data = vec![0u8; mask.len() * 4];
    for (px, &m) in data.chunks_exact_mut(4).zip(&mask) {
        px[3] = mul_div255_u8(u16::from(alpha), u16::from(m));
    }
    Layer::from_premul(embedded.width, embedded.height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sheet.rs"]
mod tests;

use crate::foundation::core::SheetSize;

/// Width used for the fallback size when no width satisfies the bound.
pub const FALLBACK_WIDTH: u32 = 100;

/// Smallest width the search is allowed to try is one step above this.
const SEARCH_FLOOR: u32 = 10;

/// Result of [`max_sheet_size`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SheetFit {
    /// Chosen sheet size.
    pub size: SheetSize,
    /// True when the search found nothing and the fixed fallback was returned.
    pub fallback: bool,
}

/// Largest sheet whose full diagonal plus `2 * shadow` fits in `canvas`.
///
/// Widths are tried from `canvas` downward in steps of 2. The diagonal bounds the layer for
/// every rotation, so `max_angle_deg` does not tighten the result.
pub fn max_sheet_size(canvas: u32, shadow: u32, max_angle_deg: f64, aspect_ratio: f64) -> SheetFit {
    let limit = f64::from(canvas);
    let pad = 2.0 * f64::from(shadow);

    let mut width = canvas;
    while width > SEARCH_FLOOR {
        let size = SheetSize::from_width(width, aspect_ratio);
        if size.diagonal() + pad <= limit {
            return SheetFit {
                size,
                fallback: false,
            };
        }
        width -= 2;
    }

    let size = SheetSize::from_width(FALLBACK_WIDTH, aspect_ratio);
    tracing::warn!(
        canvas,
        shadow,
        max_angle_deg,
        width = size.width,
        height = size.height,
        "no sheet size fits the canvas; using fallback"
    );
    SheetFit {
        size,
        fallback: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sheet.rs"]
mod tests;

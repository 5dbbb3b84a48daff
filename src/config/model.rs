use std::{fs::File, io::BufReader, path::Path};

use crate::{
    color::sampler::{Aggregate, SampleOpts},
    foundation::core::{Rgb8, SheetSize},
    foundation::error::{SheetsError, SheetsResult},
    geometry::sheet::FALLBACK_WIDTH,
};

/// Largest accepted canvas side. Working layers are premultiplied RGBA8, so this bounds a
/// canvas at 256 MiB.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Everything one render needs besides the source photo.
///
/// Every field has a default, so a JSON config only needs to list what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Side of the square output canvas in pixels.
    pub canvas_size: u32,
    /// Largest rotation the layout is designed for. Informational; sizing uses the diagonal.
    pub max_angle_deg: f64,
    /// Sheet width divided by sheet height.
    pub aspect_ratio: f64,
    /// Sheets in back-to-front paint order.
    pub placements: Vec<Placement>,
    /// How the sheet color is sampled from the photo.
    pub sample: SampleOpts,
    /// Per-sheet look.
    pub style: SheetStyle,
    /// Opaque color the composite is flattened onto.
    pub background: Rgb8,
}

/// One sheet instance: rotation plus offset of its center from the canvas center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Rotation in degrees, counter-clockwise on screen.
    pub angle_deg: f64,
    /// Horizontal offset in pixels.
    pub dx: i32,
    /// Vertical offset in pixels (positive is down).
    pub dy: i32,
}

impl Placement {
    /// Build a placement.
    pub const fn new(angle_deg: f64, dx: i32, dy: i32) -> Self {
        Self { angle_deg, dx, dy }
    }
}

/// Look of a single sheet.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SheetStyle {
    /// How far row 0 is pulled toward white; the last row keeps the fill color.
    pub gradient_strength: f64,
    /// Specular highlight.
    pub gloss: GlossStyle,
    /// Blur sigma of the drop shadow, also the padding around the rotated sheet.
    pub shadow_width: u32,
    /// Peak opacity of the drop shadow.
    pub shadow_alpha: u8,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            gradient_strength: 0.13,
            gloss: GlossStyle::linear(),
            shadow_width: 10,
            shadow_alpha: 60,
        }
    }
}

/// White highlight composited over the gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GlossStyle {
    /// No highlight.
    None,
    /// Band along the top edge fading out quadratically.
    Linear {
        /// Opacity at row 0.
        max_alpha: u8,
        /// Fraction of the sheet height covered by the band.
        band: f64,
    },
    /// Round highlight fading linearly with distance from its center.
    Radial {
        /// Opacity at the center.
        max_alpha: u8,
        /// Fade-out distance as a fraction of the sheet diagonal.
        rel_radius: f64,
        /// Center x as a fraction of the sheet width.
        center_x: f64,
        /// Center y as a fraction of the sheet height.
        center_y: f64,
    },
}

impl GlossStyle {
    /// Paper-like top band.
    pub fn linear() -> Self {
        Self::Linear {
            max_alpha: 38,
            band: 0.28,
        }
    }

    /// Metallic off-center sheen.
    pub fn radial() -> Self {
        Self::Radial {
            max_alpha: 100,
            rel_radius: 0.60,
            center_x: 0.6,
            center_y: 0.4,
        }
    }
}

/// Back-to-front placements of the stock three-sheet stack.
pub fn default_placements() -> Vec<Placement> {
    vec![
        Placement::new(-11.0, -32, -38),
        Placement::new(7.0, 7, 22),
        Placement::new(-4.0, 47, -12),
    ]
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1500,
            max_angle_deg: 15.0,
            aspect_ratio: 2.0 / 3.0,
            placements: default_placements(),
            sample: SampleOpts {
                crop: None,
                aggregate: Aggregate::Median,
            },
            style: SheetStyle::default(),
            background: Rgb8::WHITE,
        }
    }
}

impl SheetsConfig {
    /// Matte paper sheets with a top-band gloss.
    pub fn paper() -> Self {
        Self::default()
    }

    /// Foil sheets with a radial sheen.
    pub fn metallic() -> Self {
        Self {
            style: SheetStyle {
                gloss: GlossStyle::radial(),
                ..SheetStyle::default()
            },
            ..Self::default()
        }
    }

    /// Load and validate a JSON config.
    pub fn from_path(path: &Path) -> SheetsResult<Self> {
        let f = File::open(path)
            .map_err(|e| SheetsError::validation(format!("open config '{}': {e}", path.display())))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| SheetsError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config held in memory.
    pub fn from_json_str(s: &str) -> SheetsResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| SheetsError::serde(format!("parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the renderer cannot honor.
    pub fn validate(&self) -> SheetsResult<()> {
        if self.canvas_size == 0 || self.canvas_size > MAX_CANVAS_SIZE {
            return Err(SheetsError::validation(format!(
                "canvas_size must be within 1..={MAX_CANVAS_SIZE}"
            )));
        }
        if u64::from(self.style.shadow_width) * 2 >= u64::from(self.canvas_size) {
            return Err(SheetsError::validation(
                "style.shadow_width must be less than half of canvas_size",
            ));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(SheetsError::validation("aspect_ratio must be finite and > 0"));
        }
        // The fallback sheet must be renderable and no taller than the largest canvas.
        let fallback = SheetSize::from_width(FALLBACK_WIDTH, self.aspect_ratio);
        if fallback.height < 2 || fallback.height > MAX_CANVAS_SIZE {
            return Err(SheetsError::validation(format!(
                "aspect_ratio {} gives a {FALLBACK_WIDTH}x{} sheet",
                self.aspect_ratio, fallback.height
            )));
        }
        if !self.max_angle_deg.is_finite() {
            return Err(SheetsError::validation("max_angle_deg must be finite"));
        }
        if self.placements.is_empty() {
            return Err(SheetsError::validation("placements must not be empty"));
        }
        for (i, p) in self.placements.iter().enumerate() {
            if !p.angle_deg.is_finite() {
                return Err(SheetsError::validation(format!(
                    "placement {i} angle must be finite"
                )));
            }
        }
        if let Some(side) = self.sample.crop
            && side < 2
        {
            return Err(SheetsError::validation("sample.crop must be >= 2"));
        }
        self.style.validate()
    }
}

impl SheetStyle {
    /// Reject styles with out-of-range parameters.
    pub fn validate(&self) -> SheetsResult<()> {
        if !(0.0..=1.0).contains(&self.gradient_strength) {
            return Err(SheetsError::validation(
                "gradient_strength must be within [0, 1]",
            ));
        }
        match self.gloss {
            GlossStyle::None => {}
            GlossStyle::Linear { band, .. } => {
                if !band.is_finite() || band <= 0.0 || band > 1.0 {
                    return Err(SheetsError::validation("linear gloss band must be in (0, 1]"));
                }
            }
            GlossStyle::Radial {
                rel_radius,
                center_x,
                center_y,
                ..
            } => {
                if !rel_radius.is_finite() || rel_radius <= 0.0 {
                    return Err(SheetsError::validation(
                        "radial gloss rel_radius must be > 0",
                    ));
                }
                if !center_x.is_finite() || !center_y.is_finite() {
                    return Err(SheetsError::validation("radial gloss center must be finite"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;

//! sheetstack renders a small stack of overlapping material sheets, tinted with the
//! representative color of a photo, as a single square product image.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `RgbImage -> Rgb8` via mean or median over an optional centered crop
//! 2. **Size**: the largest sheet whose diagonal plus shadow padding fits the canvas
//! 3. **Render**: per placement, a gradient + gloss sheet and its soft shadow, rotated together
//! 4. **Composite**: paint placements back to front, flatten onto white, encode PNG
//!
//! Every stage is a plain function over in-memory images; [`render_sheets_file`] strings them
//! together for the `render_sheets` binary.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs and config produce identical pixels.
//! - **Premultiplied RGBA8** for every intermediate layer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod color;
mod config;
mod foundation;
mod geometry;
mod pipeline;
/// Sheet rendering and compositing stages.
pub mod render;

pub use assets::decode::{decode_image, load_source_image};
pub use color::sampler::{Aggregate, CropRect, SampleOpts, centered_crop, sample_color};
pub use config::model::{
    GlossStyle, MAX_CANVAS_SIZE, Placement, SheetStyle, SheetsConfig, default_placements,
};
pub use foundation::core::{Rgb8, Rgba8Premul, SheetSize};
pub use foundation::error::{SheetsError, SheetsResult};
pub use geometry::sheet::{FALLBACK_WIDTH, SheetFit, max_sheet_size};
pub use pipeline::{RenderReport, render_sheets_file, render_sheets_image, sample_color_file};
pub use render::compositor::{compose_sheets, encode_png, paste_position};
pub use render::layer::Layer;
pub use render::rotate::{rotate_expand, rotated_extent};
pub use render::sheet::{RenderedSheet, render_sheet};

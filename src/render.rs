//! Per-sheet rendering and final compositing.
//!
//! All intermediate layers are premultiplied RGBA8. Only [`compositor::compose_sheets`] leaves
//! that space, when it flattens the canvas onto an opaque background.

/// Separable Gaussian blur over single-channel masks.
pub mod blur;
/// Premultiplied "over" operator and flattening.
pub mod composite;
/// Canvas assembly and PNG output.
pub mod compositor;
/// Premultiplied RGBA8 pixel grid.
pub mod layer;
/// Bicubic rotation with bounding expansion.
pub mod rotate;
/// Gradient, gloss, shadow and rotation for one sheet.
pub mod sheet;

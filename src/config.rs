/// Serde configuration model and presets.
pub mod model;

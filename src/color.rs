/// Representative-color extraction from decoded photos.
pub mod sampler;

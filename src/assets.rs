/// Source-photo decoding.
pub mod decode;

/// Sheet sizing that keeps rotated, shadow-padded layers inside the canvas.
pub mod sheet;

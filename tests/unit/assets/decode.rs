use std::io::Cursor;

use super::*;

#[test]
fn decode_png_drops_alpha_and_keeps_dimensions() {
    let img = image::RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 255]).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let rgb = decode_image(&buf).unwrap();
    assert_eq!(rgb.dimensions(), (2, 1));
    assert_eq!(rgb.get_pixel(0, 0).0, [100, 50, 200]);
    assert_eq!(rgb.get_pixel(1, 0).0, [1, 2, 3]);
}

#[test]
fn garbage_bytes_are_an_input_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, SheetsError::Input(_)));
}

#[test]
fn missing_file_names_the_path() {
    let path = Path::new("target/decode_unit/does-not-exist.png");
    let err = load_source_image(path).unwrap_err();
    assert!(matches!(err, SheetsError::Input(_)));
    assert!(err.to_string().contains("does-not-exist.png"));
}

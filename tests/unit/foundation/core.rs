use super::*;

#[test]
fn hex_is_lowercase_and_zero_padded() {
    assert_eq!(Rgb8::new(255, 10, 0).to_hex(), "#ff0a00");
    assert_eq!(Rgb8::new(0xAB, 0xCD, 0xEF).to_string(), "#abcdef");
}

#[test]
fn from_hex_accepts_optional_hash_and_rejects_garbage() {
    assert_eq!(Rgb8::from_hex("#12ab9F").unwrap(), Rgb8::new(0x12, 0xab, 0x9f));
    assert_eq!(Rgb8::from_hex("000000").unwrap(), Rgb8::new(0, 0, 0));
    assert!(Rgb8::from_hex("#12345").is_err());
    assert!(Rgb8::from_hex("#zz0000").is_err());
}

#[test]
fn lighten_truncates_toward_white() {
    // 0 + 255 * 0.13 = 33.15
    assert_eq!(Rgb8::new(255, 0, 0).lighten(0.13), Rgb8::new(255, 33, 33));
    assert_eq!(Rgb8::new(10, 20, 30).lighten(0.0), Rgb8::new(10, 20, 30));
    assert_eq!(Rgb8::new(10, 20, 30).lighten(1.0), Rgb8::WHITE);
}

#[test]
fn premul_constructors() {
    assert_eq!(Rgba8Premul::transparent().to_array(), [0; 4]);
    assert_eq!(Rgba8Premul::opaque(Rgb8::new(1, 2, 3)).to_array(), [1, 2, 3, 255]);
}

#[test]
fn serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgb8::new(0x12, 0x34, 0x56)).unwrap();
    assert_eq!(json, r##""#123456""##);
    let c: Rgb8 = serde_json::from_str(r##""#FFfFff""##).unwrap();
    assert_eq!(c, Rgb8::WHITE);
    assert!(serde_json::from_str::<Rgb8>(r#""white""#).is_err());
    assert!(serde_json::from_str::<Rgb8>(r#"{"r":1,"g":2,"b":3}"#).is_err());
}

#[test]
fn sheet_size_floors_height() {
    let size = SheetSize::from_width(820, 2.0 / 3.0);
    assert_eq!(size, SheetSize { width: 820, height: 1230 });
    let size = SheetSize::from_width(101, 2.0 / 3.0);
    assert_eq!(size.height, 151);
    assert!((SheetSize { width: 3, height: 4 }.diagonal() - 5.0).abs() < 1e-12);
}

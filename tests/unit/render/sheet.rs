use super::*;

const RED: Rgb8 = Rgb8::new(255, 0, 0);

fn size(width: u32, height: u32) -> SheetSize {
    SheetSize { width, height }
}

fn style(gloss: GlossStyle) -> SheetStyle {
    SheetStyle {
        gloss,
        shadow_width: 3,
        ..SheetStyle::default()
    }
}

#[test]
fn gradient_is_lightest_at_the_top() {
    let l = gradient_layer(size(4, 10), RED, 0.13).unwrap();
    assert_eq!(l.pixel(0, 0), [255, 33, 33, 255]);
    assert_eq!(l.pixel(3, 9), [255, 0, 0, 255]);
    for y in 1..10 {
        assert!(l.pixel(0, y)[1] <= l.pixel(0, y - 1)[1]);
    }
    assert!(l.is_opaque());
}

#[test]
fn zero_strength_gradient_is_flat() {
    let c = Rgb8::new(12, 34, 56);
    let l = gradient_layer(size(3, 5), c, 0.0).unwrap();
    assert!(l.data.chunks_exact(4).all(|px| px == [12, 34, 56, 255]));
}

#[test]
fn linear_gloss_fades_out_within_band() {
    let l = gloss_layer(size(2, 100), &GlossStyle::linear())
        .unwrap()
        .unwrap();
    assert_eq!(l.pixel(0, 0), [38, 38, 38, 38]);
    assert!(l.pixel(0, 10)[3] < 38);
    // Band covers int(0.28 * 100) = 28 rows.
    assert_eq!(l.pixel(1, 27)[3], 0);
    assert_eq!(l.pixel(1, 28), [0, 0, 0, 0]);
    assert_eq!(l.pixel(1, 99), [0, 0, 0, 0]);
}

#[test]
fn radial_gloss_peaks_at_its_center() {
    let l = gloss_layer(size(50, 100), &GlossStyle::radial())
        .unwrap()
        .unwrap();
    assert_eq!(l.pixel(30, 40)[3], 100);
    assert!(l.pixel(0, 99)[3] < l.pixel(30, 40)[3]);
    for px in l.data.chunks_exact(4) {
        assert!(px[0] == px[3] && px[3] <= 100);
    }
}

#[test]
fn no_gloss_style_yields_no_layer() {
    assert!(gloss_layer(size(4, 4), &GlossStyle::None).unwrap().is_none());
}

#[test]
fn embed_centers_sheet_in_padded_square() {
    let flat = gradient_layer(size(20, 30), RED, 0.0).unwrap();
    assert_eq!(embedded_side(size(20, 30), 4).unwrap(), 45);
    let e = embed_centered(&flat, 4).unwrap();
    assert_eq!(e.dimensions(), (45, 45));
    assert_eq!(e.pixel(12, 7), [255, 0, 0, 255]);
    assert_eq!(e.pixel(31, 36), [255, 0, 0, 255]);
    assert_eq!(e.pixel(11, 7)[3], 0);
    assert_eq!(e.pixel(32, 36)[3], 0);
    assert_eq!(e.pixel(12, 37)[3], 0);
}

#[test]
fn shadow_is_soft_black_and_capped() {
    let flat = gradient_layer(size(20, 30), RED, 0.0).unwrap();
    let e = embed_centered(&flat, 2).unwrap();
    assert_eq!(e.dimensions(), (41, 41));
    let s = shadow_layer(&e, 2, 60).unwrap();
    assert_eq!(s.dimensions(), e.dimensions());
    for px in s.data.chunks_exact(4) {
        assert_eq!(&px[..3], &[0, 0, 0]);
        assert!(px[3] <= 60);
    }
    assert_eq!(s.pixel(20, 20)[3], 60);
    // Just outside the sheet's left edge (x = 10) the halo is partial.
    let edge = s.pixel(9, 20)[3];
    assert!(edge > 0 && edge < 60, "edge alpha {edge}");
    assert_eq!(s.pixel(0, 0)[3], 0);
}

#[test]
fn layers_stay_aligned_for_every_angle() {
    let st = style(GlossStyle::linear());
    for angle in [-90.0, -60.0, -11.0, -4.0, 0.0, 7.0, 45.0, 90.0] {
        let r = render_sheet(size(12, 18), RED, angle, &st).unwrap();
        assert_eq!(r.shadow.dimensions(), r.sheet.dimensions(), "angle {angle}");
    }
}

#[test]
fn zero_angle_keeps_embedded_size() {
    let st = style(GlossStyle::radial());
    let r = render_sheet(size(12, 18), RED, 0.0, &st).unwrap();
    let side = embedded_side(size(12, 18), 3).unwrap();
    assert_eq!(r.dimensions(), (side, side));
}

#[test]
fn rotation_grows_layers_to_fit() {
    let st = style(GlossStyle::linear());
    let r = render_sheet(size(12, 18), RED, 7.0, &st).unwrap();
    let side = embedded_side(size(12, 18), 3).unwrap();
    assert!(r.sheet.width > side && r.sheet.height > side);
    // The sheet center stays opaque.
    let (w, h) = r.dimensions();
    assert_eq!(r.sheet.pixel(w / 2, h / 2)[3], 255);
}

#[test]
fn degenerate_sizes_are_rejected() {
    let st = SheetStyle::default();
    assert!(render_sheet(size(1, 10), RED, 0.0, &st).is_err());
    assert!(render_sheet(size(10, 1), RED, 0.0, &st).is_err());
}

#[test]
fn oversized_shadow_padding_is_an_error() {
    let err = embedded_side(size(12, 18), u32::MAX).unwrap_err();
    assert!(matches!(err, SheetsError::Validation(_)));

    let st = SheetStyle {
        shadow_width: 3_000_000_000,
        ..SheetStyle::default()
    };
    let err = render_sheet(size(12, 18), RED, 0.0, &st).unwrap_err();
    assert!(err.to_string().contains("shadow_width"));
}

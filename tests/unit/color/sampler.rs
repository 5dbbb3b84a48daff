use image::{Rgb, RgbImage};

use super::*;

fn opts(crop: Option<u32>, aggregate: Aggregate) -> SampleOpts {
    SampleOpts { crop, aggregate }
}

#[test]
fn uniform_image_returns_its_color_for_any_box_and_aggregate() {
    let img = RgbImage::from_pixel(40, 30, Rgb([12, 200, 77]));
    for crop in [None, Some(2), Some(10), Some(30), Some(1000)] {
        for aggregate in [Aggregate::Mean, Aggregate::Median] {
            let c = sample_color(&img, &opts(crop, aggregate)).unwrap();
            assert_eq!(c, Rgb8::new(12, 200, 77), "crop={crop:?} agg={aggregate:?}");
        }
    }
}

#[test]
fn box_100_on_1000_square_crops_center_region() {
    let rect = centered_crop(1000, 1000, 100).unwrap();
    assert_eq!(
        rect,
        CropRect {
            x: 450,
            y: 450,
            width: 100,
            height: 100
        }
    );
}

#[test]
fn crop_only_reads_center_pixels() {
    let mut img = RgbImage::from_pixel(1000, 1000, Rgb([0, 0, 0]));
    for y in 450..550 {
        for x in 450..550 {
            img.put_pixel(x, y, Rgb([250, 128, 4]));
        }
    }
    let c = sample_color(&img, &opts(Some(100), Aggregate::Mean)).unwrap();
    assert_eq!(c, Rgb8::new(250, 128, 4));
}

#[test]
fn oversized_box_is_clamped_to_image() {
    let rect = centered_crop(40, 20, 100).unwrap();
    assert_eq!(
        rect,
        CropRect {
            x: 0,
            y: 0,
            width: 40,
            height: 20
        }
    );
}

#[test]
fn odd_box_drops_one_pixel() {
    let rect = centered_crop(11, 11, 5).unwrap();
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (3, 3, 4, 4));
}

#[test]
fn degenerate_box_is_rejected() {
    let img = RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]));
    assert!(sample_color(&img, &opts(Some(1), Aggregate::Mean)).is_err());
    assert!(sample_color(&img, &opts(Some(0), Aggregate::Median)).is_err());
}

#[test]
fn mean_truncates_and_median_ignores_outliers() {
    // Four pixels: 0, 0, 1, 255 in every channel.
    let mut img = RgbImage::new(4, 1);
    for (x, v) in [0u8, 0, 1, 255].into_iter().enumerate() {
        img.put_pixel(x as u32, 0, Rgb([v, v, v]));
    }
    let mean = sample_color(&img, &opts(None, Aggregate::Mean)).unwrap();
    assert_eq!(mean, Rgb8::new(64, 64, 64)); // 256 / 4
    let median = sample_color(&img, &opts(None, Aggregate::Median)).unwrap();
    assert_eq!(median, Rgb8::new(0, 0, 0)); // (0 + 1) / 2
}

#[test]
fn median_of_odd_count_is_middle_value() {
    let mut img = RgbImage::new(3, 1);
    img.put_pixel(0, 0, Rgb([9, 1, 200]));
    img.put_pixel(1, 0, Rgb([3, 2, 100]));
    img.put_pixel(2, 0, Rgb([5, 3, 0]));
    let c = sample_color(&img, &opts(None, Aggregate::Median)).unwrap();
    assert_eq!(c, Rgb8::new(5, 2, 100));
}

#[test]
fn empty_image_is_an_input_error() {
    let img = RgbImage::new(0, 0);
    let err = sample_color(&img, &SampleOpts::default()).unwrap_err();
    assert!(matches!(err, SheetsError::Input(_)));
}

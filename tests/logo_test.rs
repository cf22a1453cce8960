//! Tests for the website logo conversion

use std::fs;
use std::path::Path;

use assetkit::errors::AssetError;
use assetkit::logo;
use assetkit::util::testing;
use image::{Rgb, Rgba, RgbaImage};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Project dir with a logo source: red square on a transparent background.
/// The file carries the fixed .webp name; the loader sniffs content, so
/// PNG bytes are fine as test input.
#[fixture]
fn project_dir() -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    let img = RgbaImage::from_fn(64, 64, |x, y| {
        if (16..48).contains(&x) && (16..48).contains(&y) {
            Rgba([200, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    img.save_with_format(temp.path().join(logo::SOURCE_WEBP), image::ImageFormat::Png)
        .unwrap();
    temp
}

fn ico_entry_count(path: &Path) -> u16 {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[0..4], &[0, 0, 1, 0], "not an ICO file");
    u16::from_le_bytes([bytes[4], bytes[5]])
}

#[rstest]
fn given_transparent_logo_when_converting_then_png_is_flattened_on_white(project_dir: TempDir) {
    logo::convert_in(project_dir.path()).unwrap();

    let png = image::open(project_dir.path().join(logo::PNG_PATH)).unwrap();
    assert!(!png.color().has_alpha());
    let rgb = png.to_rgb8();
    // transparent corner becomes white, opaque center keeps its color
    assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
    assert_eq!(rgb.get_pixel(32, 32), &Rgb([200, 0, 0]));
}

#[rstest]
fn given_logo_when_converting_then_build_ico_is_created_with_six_entries(project_dir: TempDir) {
    logo::convert_in(project_dir.path()).unwrap();

    assert_eq!(
        ico_entry_count(&project_dir.path().join(logo::ICO_PATH)),
        6
    );
}

#[test]
fn given_opaque_logo_when_converting_then_png_keeps_colors() {
    let temp = tempfile::tempdir().unwrap();
    let img = image::RgbImage::from_pixel(32, 32, Rgb([12, 34, 56]));
    img.save_with_format(temp.path().join(logo::SOURCE_WEBP), image::ImageFormat::Png)
        .unwrap();

    logo::convert_in(temp.path()).unwrap();

    let rgb = image::open(temp.path().join(logo::PNG_PATH))
        .unwrap()
        .to_rgb8();
    assert_eq!(rgb.get_pixel(16, 16), &Rgb([12, 34, 56]));
}

#[test]
fn given_undecodable_source_when_converting_then_fails_with_image_error() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join(logo::SOURCE_WEBP), b"not an image").unwrap();

    let result = logo::convert_in(temp.path());

    assert!(matches!(result, Err(AssetError::Image { .. })));
    assert!(!temp.path().join(logo::PNG_PATH).exists());
    assert!(!temp.path().join(logo::ICO_PATH).exists());
}

#[test]
fn given_missing_source_when_converting_then_fails_and_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();

    let result = logo::convert_in(temp.path());

    match result {
        Err(AssetError::SourceMissing(path)) => {
            assert!(path.ends_with(logo::SOURCE_WEBP));
        }
        other => panic!("expected SourceMissing, got {:?}", other),
    }
    assert!(!temp.path().join(logo::PNG_PATH).exists());
    assert!(!temp.path().join(logo::ICO_PATH).exists());
}

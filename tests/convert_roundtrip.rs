//! End-to-end conversion through the real default chain.
//!
//! Runs against the in-process raster backend, so the whole file is gated
//! on the `raster` feature.
#![cfg(feature = "raster")]

use iconize::backend::{ConvertPlan, default_chain};
use iconize::convert::{ConvertError, convert};
use std::path::Path;

fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    img.save(path).unwrap();
}

#[test]
fn default_sizes_produce_three_suffixed_files() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("icon.png");
    create_test_png(&source, 256, 256);

    let plan = ConvertPlan::new(&source, &[16, 48, 128]);
    let chain = default_chain();
    let report = convert(&plan, &chain, &mut |_| {}).unwrap();

    assert_eq!(report.backend, "raster");
    assert!(report.is_success());
    for size in [16u32, 48, 128] {
        let path = tmp.path().join(format!("icon-{size}.png"));
        let (w, h) = image::image_dimensions(&path).unwrap();
        assert_eq!((w, h), (size, size));
    }
}

#[test]
fn missing_source_writes_nothing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("icon.png");

    let plan = ConvertPlan::new(&source, &[16, 48, 128]);
    let chain = default_chain();
    let err = convert(&plan, &chain, &mut |_| {}).unwrap_err();

    assert!(matches!(err, ConvertError::MissingSource(_)));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn second_run_overwrites_without_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("icon.png");
    create_test_png(&source, 200, 200);

    let plan = ConvertPlan::new(&source, &[16]);
    let chain = default_chain();
    assert!(convert(&plan, &chain, &mut |_| {}).unwrap().is_success());
    assert!(convert(&plan, &chain, &mut |_| {}).unwrap().is_success());

    let (w, h) = image::image_dimensions(tmp.path().join("icon-16.png")).unwrap();
    assert_eq!((w, h), (16, 16));
}

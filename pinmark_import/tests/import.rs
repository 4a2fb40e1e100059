// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intake paths from bytes, data URLs, and files.

use std::io::Cursor;

use pinmark_import::{ImageFormat, ImageKind, ImageSource, ImportError};

fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let mut out = Vec::new();
    image::RgbImage::new(width, height)
        .write_to(&mut Cursor::new(&mut out), format)
        .unwrap();
    out
}

#[test]
fn raster_bytes_are_measured() {
    let source = ImageSource::from_bytes(encoded(400, 300, ImageFormat::Png)).unwrap();
    assert_eq!(source.kind, ImageKind::Raster(ImageFormat::Png));
    assert_eq!((source.width, source.height), (400, 300));
    assert!(!source.is_degenerate());
}

#[test]
fn bmp_is_recognized_too() {
    let source = ImageSource::from_bytes(encoded(3, 2, ImageFormat::Bmp)).unwrap();
    assert_eq!(source.kind, ImageKind::Raster(ImageFormat::Bmp));
    assert_eq!((source.width, source.height), (3, 2));
}

#[test]
fn raster_data_url_round_trips() {
    let source = ImageSource::from_bytes(encoded(9, 4, ImageFormat::Png)).unwrap();
    let url = source.to_data_url();
    assert!(url.starts_with("data:image/png;base64,"));
    assert_eq!(ImageSource::from_data_url(&url).unwrap(), source);
}

#[test]
fn svg_data_url_is_repaired() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 120.9 80"/>"#;
    let url = pinmark_import::DataUrl::encode("image/svg+xml", svg.as_bytes());
    let source = ImageSource::from_data_url(&url).unwrap();
    assert_eq!(source.kind, ImageKind::Svg);
    assert_eq!((source.width, source.height), (120, 80));
    let text = String::from_utf8(source.bytes).unwrap();
    assert!(text.starts_with(r#"<svg width="120" height="80" xmlns="#));
    assert!(!text.contains("100%"));
}

#[test]
fn svg_bytes_are_sniffed() {
    let source =
        ImageSource::from_bytes(b"<?xml version=\"1.0\"?><svg width=\"10\" height=\"20\"/>".to_vec())
            .unwrap();
    assert_eq!(source.kind, ImageKind::Svg);
    assert_eq!((source.width, source.height), (10, 20));
}

#[test]
fn files_are_read_from_disk() {
    let path = std::env::temp_dir().join(format!("pinmark-import-{}.png", std::process::id()));
    std::fs::write(&path, encoded(5, 6, ImageFormat::Png)).unwrap();
    let source = ImageSource::from_path(&path).unwrap();
    assert_eq!((source.width, source.height), (5, 6));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn bad_input_is_reported() {
    assert!(matches!(
        ImageSource::from_bytes(Vec::new()),
        Err(ImportError::Empty)
    ));
    assert!(matches!(
        ImageSource::from_bytes(b"nope".to_vec()),
        Err(ImportError::UnknownFormat)
    ));
    assert!(matches!(
        ImageSource::from_path(std::path::Path::new("/definitely/not/here.png")),
        Err(ImportError::Io(_))
    ));
}

#[test]
fn blank_sources_carry_only_dimensions() {
    let source = ImageSource::blank(0, 10);
    assert!(source.is_degenerate());
    assert_eq!(source.kind, ImageKind::Blank);
    assert!(source.bytes.is_empty());
}

//! Shared helpers for unit tests: synthetic source images.

use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::path::Path;

/// Write a small valid JPEG with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a JPEG carrying an EXIF orientation tag. The APP1 segment is a
/// minimal little-endian TIFF with a single IFD0 entry (tag 0x0112,
/// Orientation, type SHORT), spliced in right after the SOI marker.
/// Orientation values follow the EXIF standard; 6 means "rotate 90°
/// clockwise to display".
pub fn create_test_jpeg_with_orientation(path: &Path, width: u32, height: u32, orientation: u16) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut jpeg)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();

    // FF E1, segment length 0x0022, "Exif\0\0", then the TIFF body.
    let mut app1 = vec![0xFF, 0xE1, 0x00, 0x22];
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
    app1.extend_from_slice(&[0x01, 0x00]);
    app1.extend_from_slice(&[0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00]);
    app1.extend_from_slice(&orientation.to_le_bytes());
    app1.extend_from_slice(&[0x00, 0x00]);
    app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    let mut bytes = Vec::with_capacity(jpeg.len() + app1.len());
    bytes.extend_from_slice(&jpeg[..2]);
    bytes.extend_from_slice(&app1);
    bytes.extend_from_slice(&jpeg[2..]);
    std::fs::write(path, bytes).unwrap();
}

/// Write a small valid PNG with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([90, 120, 150]));
    img.save(path).unwrap();
}

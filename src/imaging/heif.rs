//! HEIC/HEIF decoding via libheif.
//!
//! Compiled only with the `heif` feature. libheif applies the container's
//! rotation/mirror transforms during decode, so the returned buffer is
//! already display-oriented.

use super::codec::ImagingError;
use image::RgbImage;
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
use std::path::Path;

pub fn decode_rgb(path: &Path) -> Result<RgbImage, ImagingError> {
    let decode_err = |reason: String| ImagingError::Decode {
        path: path.display().to_string(),
        reason,
    };

    let lib_heif = LibHeif::new();
    let ctx = HeifContext::read_from_file(&path.to_string_lossy())
        .map_err(|e| decode_err(e.to_string()))?;
    let handle = ctx
        .primary_image_handle()
        .map_err(|e| decode_err(e.to_string()))?;
    let decoded = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(|e| decode_err(e.to_string()))?;

    let planes = decoded.planes();
    let plane = planes
        .interleaved
        .ok_or_else(|| decode_err("no interleaved RGB plane".into()))?;

    let width = plane.width;
    let height = plane.height;
    let stride = plane.stride;
    let row_bytes = width as usize * 3;

    // Rows may be padded to libheif's stride; copy them out tightly packed.
    let mut rgb = Vec::with_capacity(row_bytes * height as usize);
    for row in 0..height as usize {
        let start = row * stride;
        rgb.extend_from_slice(&plane.data[start..start + row_bytes]);
    }

    RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| decode_err("decoded HEIF plane has unexpected size".into()))
}

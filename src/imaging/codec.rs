//! Decode, orientation correction, and WebP encoding.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Decode (HEIC/HEIF) | libheif via the optional `heif` feature |
//! | Orientation correction | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → WebP | `webp` crate, lossy, compression method 6 (slowest/best) |

use super::calculations::Dimensions;
use super::formats;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("WebP encode failed: {0}")]
    Encode(String),
}

/// Decode an image, apply its embedded orientation, and flatten to 3-channel
/// RGB. The returned buffer matches the intended display orientation
/// regardless of the source's rotation flags.
pub fn load_rgb(path: &Path) -> Result<RgbImage, ImagingError> {
    if formats::is_heif(path) {
        return load_heif_rgb(path);
    }

    let decode_err = |e: String| ImagingError::Decode {
        path: path.display().to_string(),
        reason: e,
    };

    let mut decoder = ImageReader::open(path)
        .map_err(ImagingError::Io)?
        .with_guessed_format()
        .map_err(ImagingError::Io)?
        .into_decoder()
        .map_err(|e| decode_err(e.to_string()))?;

    // Formats without orientation metadata report NoTransforms; a metadata
    // read failure should not fail the whole decode either.
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);

    let mut img =
        DynamicImage::from_decoder(decoder).map_err(|e| decode_err(e.to_string()))?;
    img.apply_orientation(orientation);

    Ok(img.into_rgb8())
}

#[cfg(feature = "heif")]
fn load_heif_rgb(path: &Path) -> Result<RgbImage, ImagingError> {
    super::heif::decode_rgb(path)
}

#[cfg(not(feature = "heif"))]
fn load_heif_rgb(path: &Path) -> Result<RgbImage, ImagingError> {
    Err(ImagingError::Decode {
        path: path.display().to_string(),
        reason: "HEIF support not compiled in (build with --features heif)".into(),
    })
}

/// Dimensions of a decoded buffer.
pub fn dimensions_of(img: &RgbImage) -> Dimensions {
    Dimensions {
        width: img.width(),
        height: img.height(),
    }
}

/// Proportional downscale with Lanczos3 resampling.
pub fn downscale(img: &RgbImage, target: Dimensions) -> RgbImage {
    image::imageops::resize(img, target.width, target.height, FilterType::Lanczos3)
}

/// Encode as lossy WebP at the given quality, using compression method 6
/// (the slowest, best-effort setting), and write to `path`, overwriting any
/// existing file. Returns the encoded size in bytes.
pub fn encode_webp(img: &RgbImage, path: &Path, quality: u32) -> Result<u64, ImagingError> {
    let encoder = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height());

    let mut config = webp::WebPConfig::new()
        .map_err(|_| ImagingError::Encode("invalid encoder configuration".into()))?;
    config.quality = quality.clamp(1, 100) as f32;
    config.method = 6;

    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|e| ImagingError::Encode(format!("{e:?}")))?;

    std::fs::write(path, &*encoded)?;
    Ok(encoded.len() as u64)
}

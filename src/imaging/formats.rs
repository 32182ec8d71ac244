//! Supported source formats and codec capability detection.
//!
//! The extension table is resolved once at startup: candidates whose decoder
//! is compiled into the `image` crate, plus HEIC/HEIF when the `heif` feature
//! (libheif) is built in. Format matching elsewhere in the pipeline consults
//! this table instead of assuming static availability.

use image::ImageFormat;
use std::path::Path;
use std::sync::LazyLock;

/// Extensions decoded by the `image` crate, paired with their format so we
/// can verify the decoder is actually compiled in.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("webp", ImageFormat::WebP),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
];

/// HEIC/HEIF extensions, decodable only through libheif.
const HEIF_EXTENSIONS: &[&str] = &["heic", "heif"];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut exts: Vec<&'static str> = PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect();
    if heif_supported() {
        exts.extend_from_slice(HEIF_EXTENSIONS);
    }
    exts
});

/// Whether HEIC/HEIF decoding was compiled in.
pub fn heif_supported() -> bool {
    cfg!(feature = "heif")
}

/// The set of source extensions the pipeline will pick up.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether `path` has a supported source extension (case-insensitive).
pub fn is_supported_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}

/// Whether `path` is a HEIC/HEIF file by extension, regardless of capability.
pub fn is_heif(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            HEIF_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s))
        })
}

//! The gallery manifest: ordered photo descriptors for one gallery.
//!
//! The manifest is the sole persisted state of a pipeline run. It is written
//! as `index.json` in the gallery's output directory and embedded verbatim as
//! an inline literal by the page regenerator — both copies come from
//! [`to_pretty_json`], so they stay content-identical by construction.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file name inside each gallery output directory.
pub const MANIFEST_FILENAME: &str = "index.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Manifest is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One processed photo as published to the gallery grid.
///
/// Ordering within the manifest equals the source directory's byte-wise
/// lexicographic filename order and determines display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Web-relative path: configured URL prefix + output filename.
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Source filename with the extension stripped.
    pub title: String,
}

/// Serialize entries as a pretty-printed JSON array, 4-space indented.
pub fn to_pretty_json(entries: &[ManifestEntry]) -> Result<String, ManifestError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write `index.json` into `output_dir`, overwriting any previous manifest.
/// Returns the path written.
pub fn write_manifest(output_dir: &Path, entries: &[ManifestEntry]) -> Result<PathBuf, ManifestError> {
    let path = output_dir.join(MANIFEST_FILENAME);
    std::fs::write(&path, to_pretty_json(entries)?)?;
    Ok(path)
}

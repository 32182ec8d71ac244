//! The image pipeline: one directory of photos in, web-ready WebP assets and
//! a JSON manifest out.
//!
//! Per image, in order: decode, orientation correction, RGB flattening,
//! width-bounded Lanczos3 downscale, lossy WebP encode. Files are processed
//! in ascending byte-wise lexicographic filename order, and manifest entries
//! preserve that order — it is the gallery's display order.
//!
//! Failure isolation is per file: a photo that fails to decode, process, or
//! encode is reported and excluded from the manifest without aborting the
//! rest of the batch. A missing or empty source directory skips the whole
//! job with a diagnostic; neither is an error to the caller, and a missing
//! source creates no output directory.

use crate::config::{GalleryJob, Settings};
use crate::imaging::{self, ImagingError};
use crate::manifest::{self, ManifestEntry, ManifestError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Why a whole gallery job produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingSource,
    NoImages,
}

/// One successfully converted photo.
#[derive(Debug, Clone)]
pub struct WrittenImage {
    pub source_name: String,
    pub output_name: String,
    /// Encoded WebP size in bytes.
    pub bytes: u64,
}

/// One photo that failed and was excluded from the manifest.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub source_name: String,
    pub error: String,
}

/// Result of a completed (non-skipped) gallery job.
#[derive(Debug)]
pub struct ProcessedGallery {
    /// Manifest entries in display order, one per converted photo.
    pub entries: Vec<ManifestEntry>,
    pub written: Vec<WrittenImage>,
    pub failures: Vec<FileFailure>,
    pub manifest_path: PathBuf,
}

#[derive(Debug)]
pub enum GalleryOutcome {
    Skipped(SkipReason),
    Processed(ProcessedGallery),
}

/// Convert one gallery's source directory into web-ready assets plus a
/// manifest. See the module docs for ordering and failure semantics.
pub fn process_gallery(
    job: &GalleryJob,
    settings: &Settings,
) -> Result<GalleryOutcome, PipelineError> {
    if !job.source.is_dir() {
        return Ok(GalleryOutcome::Skipped(SkipReason::MissingSource));
    }

    let files = list_source_files(&job.source)?;
    if files.is_empty() {
        return Ok(GalleryOutcome::Skipped(SkipReason::NoImages));
    }

    std::fs::create_dir_all(&job.output)?;

    let mut entries = Vec::new();
    let mut written = Vec::new();
    let mut failures = Vec::new();

    for source_path in &files {
        match process_one(job, settings, source_path) {
            Ok((entry, image)) => {
                entries.push(entry);
                written.push(image);
            }
            Err(e) => failures.push(FileFailure {
                source_name: display_name(source_path),
                error: e.to_string(),
            }),
        }
    }

    let manifest_path = manifest::write_manifest(&job.output, &entries)?;

    Ok(GalleryOutcome::Processed(ProcessedGallery {
        entries,
        written,
        failures,
        manifest_path,
    }))
}

/// List supported source paths in ascending byte-wise lexicographic
/// filename order. Case-sensitive on purpose: `B.jpg` sorts before `a.png`.
/// Paths are kept as-is so non-UTF-8 filenames still open; lossy conversion
/// happens only when a name is rendered for display or output.
fn list_source_files(source: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(source)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && imaging::is_supported_source(p))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn process_one(
    job: &GalleryJob,
    settings: &Settings,
    source_path: &Path,
) -> Result<(ManifestEntry, WrittenImage), ImagingError> {
    let source_name = display_name(source_path);
    let title = source_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_name.clone());

    let img = imaging::load_rgb(source_path)?;

    let source_dims = imaging::dimensions_of(&img);
    let target = imaging::fit_width(source_dims, settings.max_width);
    let img = if imaging::needs_downscale(source_dims, settings.max_width) {
        imaging::downscale(&img, target)
    } else {
        img
    };

    let output_name = format!("{title}.webp");
    let output_path = job.output.join(&output_name);
    let bytes = imaging::encode_webp(&img, &output_path, settings.quality)?;

    let entry = ManifestEntry {
        url: format!("{}/{}", job.url_prefix, output_name),
        width: target.width,
        height: target.height,
        title,
    };
    let image = WrittenImage {
        source_name,
        output_name,
        bytes,
    };
    Ok((entry, image))
}

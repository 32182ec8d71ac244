//! CLI output formatting for the pipeline, regenerator, and page builder.
//!
//! Format functions are pure — no I/O, no side effects — so they are unit
//! testable; `main` prints the returned lines. Every gallery job reports a
//! header line, one line per converted or failed file, and a summary.

use crate::config::GalleryJob;
use crate::imaging;
use crate::pipeline::{FileFailure, ProcessedGallery, SkipReason, WrittenImage};
use crate::regen::{RegenOutcome, RewriteStrategy};
use std::path::Path;

/// Startup notice when HEIC/HEIF decoding is not compiled in. `None` when
/// the capability is present.
pub fn format_capability_notice() -> Option<String> {
    if imaging::heif_supported() {
        None
    } else {
        Some("HEIF support not compiled in; .heic/.heif files will be skipped".to_string())
    }
}

pub fn format_gallery_header(job: &GalleryJob) -> String {
    format!("Processing {}", job.source.display())
}

pub fn format_skip(job: &GalleryJob, reason: SkipReason) -> String {
    match reason {
        SkipReason::MissingSource => format!("  Folder not found: {}", job.source.display()),
        SkipReason::NoImages => format!("  No images found in {}", job.source.display()),
    }
}

pub fn format_written(image: &WrittenImage) -> String {
    format!(
        "  {} -> {} ({}KB)",
        image.source_name,
        image.output_name,
        image.bytes / 1024
    )
}

pub fn format_failure(failure: &FileFailure) -> String {
    format!("  Failed {}: {}", failure.source_name, failure.error)
}

pub fn format_gallery_summary(result: &ProcessedGallery) -> String {
    let mut line = format!(
        "  {} images -> {}",
        result.entries.len(),
        result.manifest_path.display()
    );
    if !result.failures.is_empty() {
        line.push_str(&format!(" ({} failed)", result.failures.len()));
    }
    line
}

/// Report line for a regeneration outcome. A missing page is a silent no-op
/// and yields `None`; an unrecognized page yields a warning.
pub fn format_regen(page_path: &Path, outcome: RegenOutcome) -> Option<String> {
    match outcome {
        RegenOutcome::PageMissing => None,
        RegenOutcome::Rewritten(strategy) => {
            let how = match strategy {
                RewriteStrategy::Anchor => "anchored data block",
                RewriteStrategy::FunctionBlock => "legacy function block",
                RewriteStrategy::DataLiteral => "legacy data literal",
            };
            Some(format!("  Updated {} ({})", page_path.display(), how))
        }
        RegenOutcome::NoMatch => Some(format!(
            "  Warning: no recognized gallery data block in {}; page left unchanged",
            page_path.display()
        )),
    }
}

pub fn format_page_written(path: &Path) -> String {
    format!("Wrote {}", path.display())
}

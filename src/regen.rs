//! Gallery page regeneration: rewrite a page's embedded photo data in place
//! without disturbing the rest of the document.
//!
//! Rewrite strategies, tried in order:
//!
//! 1. **Anchor contract** — pages built by [`page`](crate::page) bracket the
//!    loader with `// <gallery-data>` / `// </gallery-data>` markers; the
//!    span between them is replaced wholesale and the markers are kept, so
//!    regeneration is idempotent and independent of the code's shape.
//! 2. **Legacy function block** — a `loadGallery()` declaration (optionally
//!    `async`) up to the next `function` declaration or the `window.onload`
//!    trailing marker, matched with dot-matches-newline patterns.
//! 3. **Legacy data literal** — a bare `const photos = […];` assignment;
//!    only the literal is replaced.
//!
//! When no strategy matches, the document is left untouched and the caller
//! gets [`RegenOutcome::NoMatch`] to report. This is pure text substitution;
//! the document is never parsed as a tree.

use crate::manifest::{self, ManifestEntry, ManifestError};
use crate::page::{self, DATA_ANCHOR_END, DATA_ANCHOR_START};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Which rewrite strategy applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteStrategy {
    Anchor,
    FunctionBlock,
    DataLiteral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenOutcome {
    /// No page at the expected path; nothing to do.
    PageMissing,
    Rewritten(RewriteStrategy),
    /// Page exists but no strategy matched; left unchanged.
    NoMatch,
}

/// `loadGallery` block bounded by the next function declaration or the
/// `window.onload` assignment. The terminator is captured and re-emitted so
/// the surrounding document is preserved byte for byte.
static FUNCTION_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:async\s+)?function\s+loadGallery\s*\(\)\s*\{.*?\}(\s*function|\s*window\.onload)")
        .expect("valid pattern")
});

static DATA_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)const\s+photos\s*=\s*\[.*?\];").expect("valid pattern"));

/// Rewrite the page's photo data block with the given manifest entries.
///
/// The inline literal is the exact string [`manifest::to_pretty_json`]
/// produces, which is also what the pipeline writes to `index.json` — the
/// two copies stay content-identical.
pub fn update_gallery_page(
    page_path: &Path,
    entries: &[ManifestEntry],
) -> Result<RegenOutcome, RegenError> {
    if !page::page_exists(page_path) {
        return Ok(RegenOutcome::PageMissing);
    }

    let html = std::fs::read_to_string(page_path)?;
    let photos_json = manifest::to_pretty_json(entries)?;
    let loader = page::render_inline_loader(&photos_json);

    let (rewritten, strategy) = match rewrite(&html, &loader, &photos_json) {
        Some(result) => result,
        None => return Ok(RegenOutcome::NoMatch),
    };

    std::fs::write(page_path, rewritten)?;
    Ok(RegenOutcome::Rewritten(strategy))
}

fn rewrite(html: &str, loader: &str, photos_json: &str) -> Option<(String, RewriteStrategy)> {
    if let Some(result) = rewrite_anchored(html, loader) {
        return Some((result, RewriteStrategy::Anchor));
    }

    if FUNCTION_BLOCK.is_match(html) {
        let result = FUNCTION_BLOCK.replace(html, |caps: &Captures| {
            format!("\n{loader}\n        {}", &caps[1])
        });
        return Some((result.into_owned(), RewriteStrategy::FunctionBlock));
    }

    if DATA_LITERAL.is_match(html) {
        let result = DATA_LITERAL.replace(html, |_: &Captures| {
            format!("const photos = {photos_json};")
        });
        return Some((result.into_owned(), RewriteStrategy::DataLiteral));
    }

    None
}

/// Replace the span between the anchor markers, keeping the markers.
fn rewrite_anchored(html: &str, loader: &str) -> Option<String> {
    let start = html.find(DATA_ANCHOR_START)?;
    let end = html.find(DATA_ANCHOR_END)?;
    if end <= start {
        return None;
    }
    let mut result = String::with_capacity(html.len() + loader.len());
    result.push_str(&html[..start + DATA_ANCHOR_START.len()]);
    result.push('\n');
    result.push_str(loader);
    result.push_str("\n        ");
    result.push_str(&html[end..]);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageSpec;
    use std::path::PathBuf;

    fn entries() -> Vec<ManifestEntry> {
        vec![
            ManifestEntry {
                url: "../images/g/B.webp".to_string(),
                width: 2560,
                height: 1706,
                title: "B".to_string(),
            },
            ManifestEntry {
                url: "../images/g/a.webp".to_string(),
                width: 800,
                height: 600,
                title: "a".to_string(),
            },
        ]
    }

    fn built_page(tmp: &tempfile::TempDir) -> PathBuf {
        let spec = PageSpec {
            path: tmp.path().join("notes/g.html"),
            title: "Gallery".to_string(),
            date: "2025.02".to_string(),
            location: "Yunnan".to_string(),
            latin_location: "Dali & Lijiang".to_string(),
            description: "High passes and old towns.".to_string(),
            json_path: "../images/g/index.json".to_string(),
        };
        page::write_gallery_page(&spec).unwrap();
        spec.path
    }

    #[test]
    fn missing_page_is_silent_noop() {
        let outcome =
            update_gallery_page(Path::new("/nonexistent/notes/g.html"), &entries()).unwrap();
        assert_eq!(outcome, RegenOutcome::PageMissing);
    }

    #[test]
    fn built_page_rewrites_via_anchor() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = built_page(&tmp);

        let outcome = update_gallery_page(&path, &entries()).unwrap();
        assert_eq!(outcome, RegenOutcome::Rewritten(RewriteStrategy::Anchor));

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(DATA_ANCHOR_START));
        assert!(html.contains(DATA_ANCHOR_END));
        assert!(html.contains("../images/g/B.webp"));
        assert!(!html.contains("fetch("));
        // Surrounding document untouched
        assert!(html.contains("openLightbox"));
        assert!(html.contains("High passes and old towns."));
    }

    #[test]
    fn anchor_rewrite_is_idempotent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = built_page(&tmp);

        update_gallery_page(&path, &entries()).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        update_gallery_page(&path, &entries()).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn inline_literal_matches_manifest_json_exactly() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = built_page(&tmp);

        update_gallery_page(&path, &entries()).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        let json = manifest::to_pretty_json(&entries()).unwrap();
        assert!(html.contains(&json));
    }

    const LEGACY_ASYNC_PAGE: &str = r#"<html><body>
    <script>
        async function loadGallery() {
            const response = await fetch('../images/g/index.json');
            const photos = await response.json();
            grid.innerHTML = photos.map(p => `<div>${p.url}</div>`).join('');
        }

        function openLightbox(src) {
            show(src);
        }

        window.onload = loadGallery;
    </script>
</body></html>"#;

    #[test]
    fn legacy_async_function_block_replaced() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("g.html");
        std::fs::write(&path, LEGACY_ASYNC_PAGE).unwrap();

        let outcome = update_gallery_page(&path, &entries()).unwrap();
        assert_eq!(
            outcome,
            RegenOutcome::Rewritten(RewriteStrategy::FunctionBlock)
        );

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("const photos ="));
        assert!(html.contains("../images/g/B.webp"));
        assert!(!html.contains("await fetch"));
        // The rest of the script survives
        assert!(html.contains("function openLightbox(src)"));
        assert!(html.contains("window.onload = loadGallery;"));
    }

    #[test]
    fn legacy_plain_function_bounded_by_onload() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("g.html");
        let html_in = r#"<script>
        function loadGallery() {
            const photos = [];
            render(photos);
        }
        window.onload = loadGallery;
    </script>"#;
        std::fs::write(&path, html_in).unwrap();

        let outcome = update_gallery_page(&path, &entries()).unwrap();
        assert_eq!(
            outcome,
            RegenOutcome::Rewritten(RewriteStrategy::FunctionBlock)
        );
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("window.onload = loadGallery;"));
        assert!(html.contains("../images/g/a.webp"));
    }

    #[test]
    fn data_literal_fallback_replaces_only_the_array() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("g.html");
        let html_in = r#"<script>
        const photos = [
            { "url": "old.webp" }
        ];
        renderGrid(photos);
    </script>"#;
        std::fs::write(&path, html_in).unwrap();

        let outcome = update_gallery_page(&path, &entries()).unwrap();
        assert_eq!(
            outcome,
            RegenOutcome::Rewritten(RewriteStrategy::DataLiteral)
        );
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(!html.contains("old.webp"));
        assert!(html.contains("../images/g/B.webp"));
        assert!(html.contains("renderGrid(photos);"));
    }

    #[test]
    fn unrecognized_page_left_unchanged() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("g.html");
        let html_in = "<html><body><p>hand-written page</p></body></html>";
        std::fs::write(&path, html_in).unwrap();

        let outcome = update_gallery_page(&path, &entries()).unwrap();
        assert_eq!(outcome, RegenOutcome::NoMatch);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), html_in);
    }

    #[test]
    fn empty_manifest_rewrites_to_empty_array() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = built_page(&tmp);

        let outcome = update_gallery_page(&path, &[]).unwrap();
        assert_eq!(outcome, RegenOutcome::Rewritten(RewriteStrategy::Anchor));
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("const photos = [];"));
    }
}

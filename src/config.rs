//! Job-list configuration.
//!
//! The set of gallery jobs (source/output/prefix triples), the page
//! definitions, and the pipeline settings live in an explicit `webgal.toml`
//! rather than being baked into control flow. `webgal init` writes a fully
//! documented stock config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Pipeline settings shared by all galleries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Maximum output width in pixels; wider images are downscaled.
    pub max_width: u32,
    /// WebP encode quality (1-100).
    pub quality: u32,
    /// Directory holding the per-gallery HTML pages.
    pub pages_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_width: 2560,
            quality: 80,
            pages_dir: PathBuf::from("notes"),
        }
    }
}

/// One gallery conversion job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryJob {
    /// Directory of source photos.
    pub source: PathBuf,
    /// Directory receiving re-encoded images and `index.json`.
    pub output: PathBuf,
    /// Web path prefix stamped into manifest entry URLs.
    pub url_prefix: String,
}

impl GalleryJob {
    /// Gallery identifier: the source directory's name. Keys the HTML page
    /// path under the pages directory.
    pub fn gallery_id(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Path of this gallery's static page.
    pub fn page_path(&self, pages_dir: &Path) -> PathBuf {
        pages_dir.join(format!("{}.html", self.gallery_id()))
    }
}

/// Metadata for one from-scratch gallery page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    /// Output file path of the page.
    pub path: PathBuf,
    pub title: String,
    /// Date label shown in the header (free-form, e.g. "2024.10").
    pub date: String,
    pub location: String,
    /// Transliterated location label shown below the location.
    pub latin_location: String,
    pub description: String,
    /// Manifest path the page fetches at load time, relative to the page.
    pub json_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub settings: Settings,
    pub galleries: Vec<GalleryJob>,
    pub pages: Vec<PageSpec>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for job in &self.galleries {
            if job.source.as_os_str().is_empty() || job.output.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "gallery source and output must be non-empty paths".into(),
                ));
            }
            if job.url_prefix.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "gallery {} has an empty url_prefix",
                    job.source.display()
                )));
            }
        }
        for page in &self.pages {
            if page.path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("page path must be non-empty".into()));
            }
            if page.json_path.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "page {} has an empty json_path",
                    page.path.display()
                )));
            }
        }
        Ok(())
    }
}

/// A documented stock config, written by `webgal init`.
pub fn stock_config_toml() -> &'static str {
    r#"# webgal configuration
#
# `webgal process` converts every [[galleries]] entry and refreshes the
# matching page under settings.pages_dir. `webgal pages` rebuilds every
# [[pages]] entry from scratch.

[settings]
# Images wider than this are downscaled proportionally.
max_width = 2560
# WebP encode quality (1-100).
quality = 80
# Directory holding the per-gallery HTML pages.
pages_dir = "notes"

[[galleries]]
source = "raw_photos/aba"
output = "images/aba"
url_prefix = "../images/aba"

[[pages]]
path = "notes/aba.html"
title = "Autumn in the North"
date = "2024.10"
location = "Sichuan, China"
latin_location = "Jiuzhai & Huanglong"
description = "Valleys, lakes and glaciers in deep autumn light."
json_path = "../images/aba/index.json"
"#
}

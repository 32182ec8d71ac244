//! # webgal
//!
//! A static photo-gallery generator. Two batch jobs, run sequentially, with
//! no shared state beyond the filesystem:
//!
//! ```text
//! 1. Pipeline   raw_photos/<g>/  →  images/<g>/*.webp + index.json
//! 2. Regen      index.json      →  notes/<g>.html (in-place data rewrite)
//! ```
//!
//! Plus a from-scratch page builder that produces the `notes/<g>.html`
//! documents the regenerator later edits.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Explicit job list and settings from `webgal.toml` |
//! | [`imaging`] | Decode, orientation correction, downscale math, WebP encode |
//! | [`pipeline`] | Per-gallery batch conversion with per-file failure isolation |
//! | [`manifest`] | Ordered photo descriptors, 4-space pretty JSON |
//! | [`regen`] | In-place rewrite of a page's embedded photo data |
//! | [`page`] | Complete gallery page generation via Maud |
//! | [`output`] | CLI diagnostics — pure formatting + print wrappers |
//!
//! # Design Decisions
//!
//! ## WebP-Only Output
//!
//! Every source photo is re-encoded to lossy WebP at the slowest, best
//! compression effort. A single modern format keeps output directories flat
//! and the manifest trivial.
//!
//! ## Anchored Data Blocks Over Code-Shape Matching
//!
//! Pages built here bracket their data-loading function with marker
//! comments. The regenerator rewrites the span between the markers, so it
//! never depends on matching arbitrary prior code. Regex matching of legacy
//! `loadGallery` function bodies survives only as a fallback for pages that
//! predate the markers.
//!
//! ## Explicit Job List
//!
//! The set of galleries (source/output/prefix triples) and pages lives in
//! `webgal.toml`, not in control flow. `webgal init` writes a documented
//! stock config.
//!
//! ## Capability-Resolved Formats
//!
//! The supported-extension table is computed at startup from what is
//! actually compiled in. HEIC/HEIF decoding (libheif) is an optional cargo
//! feature; its absence is reported once and those files are skipped, never
//! a fatal error.

pub mod config;
pub mod imaging;
pub mod manifest;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod regen;

#[cfg(test)]
pub(crate) mod test_helpers;

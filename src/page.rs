//! Gallery page generation.
//!
//! Builds a complete static gallery page from scratch: a fixed visual
//! template (dark masonry layout, lightbox overlay) with the per-gallery
//! metadata substituted in, plus client-side logic that fetches the JSON
//! manifest on load and renders the grid.
//!
//! The data-loading function is bracketed by `// <gallery-data>` /
//! `// </gallery-data>` marker comments. That is the anchor contract the
//! [regenerator](crate::regen) honors when it later swaps the fetch-based
//! loader for an inline data literal — no pattern matching against arbitrary
//! code shape is needed for pages built here.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): compile-time
//! checked templates with auto-escaped interpolation. The grid styles and
//! lightbox script are embedded from `static/` at compile time.

use crate::config::PageSpec;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/page.css");
const LIGHTBOX_JS: &str = include_str!("../static/lightbox.js");

/// Start marker of the data-loading block. Everything between the markers is
/// owned by the generator/regenerator pair; hand edits there will be lost.
pub const DATA_ANCHOR_START: &str = "// <gallery-data>";
/// End marker of the data-loading block.
pub const DATA_ANCHOR_END: &str = "// </gallery-data>";

/// Grid-cell construction shared by the fetch-based and inline loaders:
/// one masonry cell per entry, lazy image load, click-to-zoom handler.
const GRID_RENDER_JS: &str = r#"            const grid = document.getElementById('photo-grid');
            if (!grid) return;
            grid.innerHTML = photos.map(p => `
                <div class="masonry-item group cursor-zoom-in overflow-hidden rounded-sm bg-neutral-900" onclick="openLightbox('${p.url}')">
                    <img src="${p.url}" class="w-full h-auto hover:scale-[1.03] transition-transform duration-700" onload="this.parentElement.classList.add('loaded')" loading="lazy">
                </div>
            `).join('');
            if (window.lucide) lucide.createIcons();"#;

/// Render the anchored loader that fetches the manifest at page load.
pub fn render_fetch_loader(json_path: &str) -> String {
    format!(
        r#"        {DATA_ANCHOR_START}
        async function loadGallery() {{
            try {{
                const response = await fetch('{json_path}');
                const photos = await response.json();
{GRID_RENDER_JS}
            }} catch (e) {{ console.error('Gallery Error:', e); }}
        }}
        {DATA_ANCHOR_END}"#
    )
}

/// Render a loader carrying the manifest inline. `photos_json` must be the
/// exact serialized manifest so the inline copy stays identical to
/// `index.json`.
pub fn render_inline_loader(photos_json: &str) -> String {
    format!(
        r#"        function loadGallery() {{
            const photos = {photos_json};
{GRID_RENDER_JS}
        }}"#
    )
}

/// Render the complete gallery page document.
pub fn render_page(spec: &PageSpec) -> String {
    let page_title = format!("{} — Photo Journal", spec.title);
    let script = format!("{}\n\n{}", render_fetch_loader(&spec.json_path), LIGHTBOX_JS);

    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" class="scroll-smooth" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_title) }
                link rel="icon" href="../favicon.svg" type="image/svg+xml";
                script src="https://cdn.tailwindcss.com" {}
                link href="https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,400;0,700;1,400&family=Noto+Sans+SC:wght@300;400;500&display=swap" rel="stylesheet";
                script src="https://unpkg.com/lucide@latest" {}
                style { (PreEscaped(CSS)) }
            }
            body class="antialiased" {
                nav class="fixed top-0 w-full z-50 px-8 py-6 flex justify-between items-center bg-gradient-to-b from-black/80 to-transparent" {
                    a href="../index.html" class="flex items-center text-xs uppercase tracking-[0.3em] text-gray-400 hover:text-[#c5a059] transition-colors group" {
                        i data-lucide="arrow-left" class="w-4 h-4 mr-2 group-hover:-translate-x-1 transition-transform" {}
                        " Back to Home"
                    }
                }
                header class="pt-40 pb-20 px-8 max-w-7xl mx-auto border-b border-white/5" {
                    div class="flex flex-col md:flex-row md:items-end justify-between" {
                        div {
                            span class="text-[#c5a059] text-[10px] uppercase tracking-widest" {
                                "Travel Log · " (spec.date)
                            }
                            h1 class="text-5xl md:text-7xl font-serif italic mt-4 mb-6 text-white" { (spec.title) }
                            p class="text-gray-500 max-w-2xl leading-relaxed font-light text-sm" { (spec.description) }
                        }
                        div class="mt-8 md:mt-0 text-right" {
                            div class="flex items-center justify-end space-x-2 text-[#c5a059] mb-1" {
                                i data-lucide="map-pin" class="w-4 h-4" {}
                                span class="text-sm font-serif italic text-white text-right" { (spec.location) }
                            }
                            p class="text-[10px] text-gray-600 tracking-tighter uppercase" { (spec.latin_location) }
                        }
                    }
                }
                main class="px-8 py-20 max-w-7xl mx-auto" {
                    div id="photo-grid" class="masonry" {}
                }
                div id="lightbox" class="fixed inset-0 bg-[#0a0a0a]/98 z-[100] hidden flex flex-col items-center justify-center p-4 cursor-zoom-out" onclick="closeLightbox()" {
                    img id="lightboxImg" class="max-w-full max-h-[90vh] shadow-2xl transition-transform duration-500 scale-95" src="";
                }
                script { (PreEscaped(script)) }
            }
        }
    };

    markup.into_string()
}

/// Write the page to `spec.path`, creating parent directories as needed and
/// fully overwriting any prior content.
pub fn write_gallery_page(spec: &PageSpec) -> Result<(), PageError> {
    if let Some(parent) = spec.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&spec.path, render_page(spec))?;
    Ok(())
}

/// True when the page path exists.
pub fn page_exists(path: &Path) -> bool {
    path.is_file()
}

//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Calculate output dimensions for a width-bounded proportional downscale.
///
/// Images wider than `max_width` are scaled down to exactly `max_width`,
/// with the height reduced proportionally and truncated to a whole pixel
/// (3000×2000 at max 2560 → 2560×1706). Images at or under the bound keep
/// their dimensions unchanged.
///
/// # Examples
/// ```
/// # use webgal::imaging::{Dimensions, fit_width};
/// assert_eq!(
///     fit_width(Dimensions { width: 3000, height: 2000 }, 2560),
///     Dimensions { width: 2560, height: 1706 }
/// );
/// assert_eq!(
///     fit_width(Dimensions { width: 800, height: 600 }, 2560),
///     Dimensions { width: 800, height: 600 }
/// );
/// ```
pub fn fit_width(source: Dimensions, max_width: u32) -> Dimensions {
    if source.width <= max_width {
        return source;
    }
    let ratio = max_width as f64 / source.width as f64;
    Dimensions {
        width: max_width,
        height: (source.height as f64 * ratio) as u32,
    }
}

/// Whether `fit_width` would change the pixel buffer at all.
pub fn needs_downscale(source: Dimensions, max_width: u32) -> bool {
    source.width > max_width
}

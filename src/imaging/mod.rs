//! Image processing — pure Rust by default.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image` crate decoders; libheif behind the `heif` feature |
//! | **Orientation** | embedded EXIF tag applied to the pixel buffer |
//! | **Downscale** | Lanczos3, width-bounded, aspect preserved |
//! | **Encode** | lossy WebP, compression method 6 |
//!
//! The module is split into:
//! - **Calculations**: pure functions for dimension math (unit testable)
//! - **Formats**: capability-resolved supported-extension table
//! - **Codec**: the actual decode/resize/encode work

mod calculations;
mod codec;
pub mod formats;
#[cfg(feature = "heif")]
mod heif;

pub use calculations::{Dimensions, fit_width, needs_downscale};
pub use codec::{ImagingError, dimensions_of, downscale, encode_webp, load_rgb};
pub use formats::{heif_supported, is_supported_source, supported_input_extensions};

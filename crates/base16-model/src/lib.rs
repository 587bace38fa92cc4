//! Shared types for the base16 stylesheet generator.

pub mod base;
pub mod color;
pub mod error;
pub mod options;
pub mod palette;
pub mod scheme;
pub mod variant;

pub use base::Base;
pub use color::Rgb;
pub use error::{ColorError, Result};
pub use options::{DEFAULT_OUTPUT_PATH, GenerateOptions};
pub use palette::{Hue, Paint, Palette, RAMP_STEPS, Ramp, Role};
pub use scheme::{DEFAULT_AUTHOR, DEFAULT_SCHEME_NAME, Scheme};
pub use variant::{Variant, VariantRequest};

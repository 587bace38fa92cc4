//! Palette derivation for base16 schemes.
//!
//! ```text
//! Scheme + VariantRequest
//!     │
//!     ▼
//! variant.rs:   resolve dark/light (luminance of base00 when auto)
//!     │
//!     ▼
//! palette.rs:   accent ramps, neutral ramps, semantic roles
//! ```
//!
//! Everything here is a pure function of its inputs. [`luminance`] and
//! [`adjust`] hold the color math the deriver is built on.

pub mod adjust;
pub mod luminance;
pub mod palette;
pub mod variant;

pub use adjust::{Ratio, darken, lighten, mix, try_darken, try_lighten, try_mix};
pub use luminance::relative_luminance;
pub use palette::{accent_ramp, dark_ramp, derive_palette, generate_palette, light_ramp};
pub use variant::{DARK_THRESHOLD, classify_luminance, infer_variant, resolve_variant};

//! Stylesheet override output.
//!
//! Renders a derived [`base16_model::Palette`] as an SCSS override document
//! and writes it to disk:
//!
//! - a comment header naming the scheme, author and variant
//! - SCSS variables for every ramp step (`$blue_1` .. `$dark_5`)
//! - `@define-color` directives for the UI roles, in bg/fg pairs

mod document;

pub use document::{GENERATOR, render_document, write_document};

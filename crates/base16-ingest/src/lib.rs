//! Scheme file ingestion: YAML in, validated [`base16_model::Scheme`] out.

pub mod error;
pub mod scheme;

pub use error::{Result, SchemeError};
pub use scheme::{inline_source_path, load_scheme, parse_scheme, scheme_name_from_path};

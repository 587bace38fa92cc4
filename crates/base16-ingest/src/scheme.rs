//! Base16 scheme loading.
//!
//! A scheme file is a flat YAML mapping:
//!
//! ```yaml
//! scheme: "Tomorrow Night"
//! author: "Chris Kempson"
//! base00: "1d1f21"
//! # ... base01 through base0F
//! ```
//!
//! All sixteen `baseXX` keys are required. Validation happens once here; the
//! returned [`Scheme`] is complete by construction.

use std::path::{Path, PathBuf};

use base16_model::{Base, ColorError, DEFAULT_AUTHOR, DEFAULT_SCHEME_NAME, Rgb, Scheme};
use serde_yaml::{Mapping, Value};
use tracing::{debug, info};

use crate::error::{Result, SchemeError};

/// Placeholder path for schemes parsed from memory.
const INLINE_SOURCE: &str = "<input>";

/// Read, parse and validate a scheme file.
///
/// The scheme name falls back to the file stem when the file has no
/// `scheme` key.
pub fn load_scheme(path: &Path) -> Result<Scheme> {
    let source = std::fs::read_to_string(path).map_err(|e| SchemeError::io(path, e))?;
    let default_name = scheme_name_from_path(path);
    let scheme = parse_at(&source, path, default_name.as_deref().unwrap_or(DEFAULT_SCHEME_NAME))?;
    info!(
        path = %path.display(),
        scheme = %scheme.name,
        author = %scheme.author,
        "loaded scheme"
    );
    Ok(scheme)
}

/// Parse and validate scheme text. `default_name` is used when the text has
/// no `scheme` key.
pub fn parse_scheme(source: &str, default_name: &str) -> Result<Scheme> {
    parse_at(source, Path::new(INLINE_SOURCE), default_name)
}

/// The file stem of a scheme path, e.g. `tomorrow-night` for
/// `schemes/tomorrow-night.yaml`.
pub fn scheme_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

fn parse_at(source: &str, path: &Path, default_name: &str) -> Result<Scheme> {
    let document: Value = serde_yaml::from_str(source).map_err(|e| SchemeError::Yaml {
        path: path.to_path_buf(),
        source: e,
    })?;
    let Value::Mapping(mapping) = document else {
        return Err(SchemeError::NotAMapping {
            path: path.to_path_buf(),
        });
    };

    let missing: Vec<Base> = Base::ALL
        .into_iter()
        .filter(|base| !mapping.contains_key(base.as_str()))
        .collect();
    if !missing.is_empty() {
        return Err(SchemeError::MissingColors {
            path: path.to_path_buf(),
            missing,
        });
    }

    let mut colors = [Rgb::BLACK; 16];
    for base in Base::ALL {
        colors[base.index()] = slot_color(&mapping, base).map_err(|e| SchemeError::InvalidColor {
            path: path.to_path_buf(),
            slot: base,
            source: e,
        })?;
    }

    let name = metadata(&mapping, "scheme").unwrap_or_else(|| default_name.to_string());
    let author = metadata(&mapping, "author").unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
    debug!(path = %path.display(), scheme = %name, "validated 16 base colors");
    Ok(Scheme::new(name, author, colors))
}

fn slot_color(mapping: &Mapping, base: Base) -> std::result::Result<Rgb, ColorError> {
    match mapping.get(base.as_str()) {
        Some(Value::String(text)) => Rgb::from_hex(text.trim()),
        // Unquoted all-digit colors such as 181818 arrive as integers.
        Some(Value::Number(number)) if number.is_u64() => {
            let text = number.to_string();
            if text.len() == 6 {
                Rgb::from_hex(&text)
            } else {
                Err(ColorError::invalid_hex(
                    text,
                    "unquoted number; write the color as a quoted string",
                ))
            }
        }
        Some(other) => Err(ColorError::invalid_hex(
            describe(other),
            "expected a hex color string",
        )),
        None => Err(ColorError::invalid_hex("", "missing value")),
    }
}

fn metadata(mapping: &Mapping, key: &str) -> Option<String> {
    mapping
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}

/// Path used in errors for schemes parsed with [`parse_scheme`].
pub fn inline_source_path() -> PathBuf {
    PathBuf::from(INLINE_SOURCE)
}

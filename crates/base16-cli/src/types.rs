use std::path::PathBuf;

use base16_model::{Base, Rgb, Variant};

/// Outcome of a `generate` run.
#[derive(Debug)]
pub struct GenerateResult {
    pub scheme_name: String,
    pub variant: Variant,
    pub output: PathBuf,
    pub document: String,
    /// False for dry runs.
    pub written: bool,
}

/// What the `colors` command reports about a scheme.
#[derive(Debug)]
pub struct SchemeOverview {
    pub name: String,
    pub author: String,
    pub variant: Variant,
    pub background_luminance: f64,
    pub colors: Vec<(Base, Rgb)>,
}

//! Configuration options for stylesheet generation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::variant::VariantRequest;

/// Default output location inside an adw-gtk3 style source tree.
pub const DEFAULT_OUTPUT_PATH: &str = "src/sass/_base16-override.scss";

/// Options controlling a single generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Where the rendered document is written.
    pub output: PathBuf,
    /// Requested variant; `Auto` infers it from `base00`.
    pub variant: VariantRequest,
    /// Render without writing.
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            variant: VariantRequest::Auto,
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_variant(mut self, variant: VariantRequest) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }
}

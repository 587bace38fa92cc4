//! Generation pipeline with explicit stages.
//!
//! 1. **Ingest**: load and validate the scheme file
//! 2. **Derive**: resolve the variant and derive the palette
//! 3. **Render**: build the override document
//! 4. **Output**: write the document, unless this is a dry run
//!
//! A failure in ingest stops the run before anything is derived or written.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use base16_ingest::load_scheme;
use base16_model::{GenerateOptions, Palette, Scheme, VariantRequest};
use base16_report::{render_document, write_document};
use base16_transform::{generate_palette, infer_variant, relative_luminance};

use crate::types::{GenerateResult, SchemeOverview};

/// Load and validate the scheme.
pub fn ingest(scheme_path: &Path) -> Result<Scheme> {
    let span = info_span!("ingest", path = %scheme_path.display());
    let _guard = span.enter();
    let scheme = load_scheme(scheme_path)?;
    Ok(scheme)
}

/// Resolve the variant and derive every ramp and role.
pub fn derive(scheme: &Scheme, request: VariantRequest) -> Palette {
    let span = info_span!("derive", scheme = %scheme.name, request = %request);
    let _guard = span.enter();
    generate_palette(scheme, request)
}

/// Run the full pipeline for one scheme.
pub fn generate(scheme_path: &Path, options: &GenerateOptions) -> Result<GenerateResult> {
    let scheme = ingest(scheme_path)?;
    let palette = derive(&scheme, options.variant);
    let document = render_document(&scheme, &palette);
    debug!(bytes = document.len(), "rendered document");

    let written = if options.dry_run {
        debug!(output = %options.output.display(), "dry run, skipping write");
        false
    } else {
        let span = info_span!("output", path = %options.output.display());
        let _guard = span.enter();
        write_document(&options.output, &document)
            .with_context(|| format!("generate stylesheet for {}", scheme.name))?;
        true
    };

    Ok(GenerateResult {
        scheme_name: scheme.name,
        variant: palette.variant,
        output: options.output.clone(),
        document,
        written,
    })
}

/// Load a scheme and describe it without deriving or writing anything.
pub fn inspect(scheme_path: &Path) -> Result<SchemeOverview> {
    let scheme = ingest(scheme_path)?;
    let background_luminance = relative_luminance(scheme.background());
    Ok(SchemeOverview {
        variant: infer_variant(&scheme),
        background_luminance,
        colors: scheme.iter().collect(),
        name: scheme.name,
        author: scheme.author,
    })
}

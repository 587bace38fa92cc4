use anyhow::Result;
use tracing::info_span;

use base16_cli::pipeline::{generate, inspect};
use base16_cli::types::{GenerateResult, SchemeOverview};
use base16_model::GenerateOptions;

use crate::cli::{ColorsArgs, GenerateArgs};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", scheme = %args.scheme.display());
    let _guard = span.enter();
    let options = GenerateOptions::new()
        .with_output(&args.output)
        .with_variant(args.variant.into())
        .with_dry_run(args.dry_run);
    generate(&args.scheme, &options)
}

pub fn run_colors(args: &ColorsArgs) -> Result<SchemeOverview> {
    let span = info_span!("colors", scheme = %args.scheme.display());
    let _guard = span.enter();
    inspect(&args.scheme)
}

//! Dark/light variant resolution.

use base16_model::{Scheme, Variant, VariantRequest};
use tracing::debug;

use crate::luminance::relative_luminance;

/// Backgrounds darker than this luminance render as [`Variant::Dark`].
pub const DARK_THRESHOLD: f64 = 0.5;

/// Strictly below the threshold is dark; the threshold itself is light.
pub fn classify_luminance(luminance: f64) -> Variant {
    if luminance < DARK_THRESHOLD {
        Variant::Dark
    } else {
        Variant::Light
    }
}

/// Infer the variant from the scheme background (`base00`).
pub fn infer_variant(scheme: &Scheme) -> Variant {
    classify_luminance(relative_luminance(scheme.background()))
}

/// Resolve a requested variant. Explicit requests are returned unchanged.
pub fn resolve_variant(scheme: &Scheme, request: VariantRequest) -> Variant {
    if let Some(variant) = request.explicit() {
        debug!(scheme = %scheme.name, variant = %variant, "using requested variant");
        return variant;
    }
    let luminance = relative_luminance(scheme.background());
    let variant = classify_luminance(luminance);
    debug!(
        scheme = %scheme.name,
        background = %scheme.background(),
        luminance,
        variant = %variant,
        "inferred variant from background"
    );
    variant
}

//! Palette derivation: sixteen base colors to ramps and UI roles.
//!
//! Accent hues get a five-step ramp around their base slot. Neutrals get a
//! light ramp darkened from `base07` and a dark ramp read straight from
//! `base04`..`base00`. Surface roles branch once on the resolved variant.

use base16_model::{
    Base, Hue, Paint, Palette, Ramp, Rgb, Role, Scheme, Variant, VariantRequest,
};
use tracing::debug;

use crate::adjust::{Ratio, darken, lighten};
use crate::variant::resolve_variant;

const P02: Ratio = Ratio::constant(0.02);
const P05: Ratio = Ratio::constant(0.05);
const P08: Ratio = Ratio::constant(0.08);
const P10: Ratio = Ratio::constant(0.10);
const P12: Ratio = Ratio::constant(0.12);
const P15: Ratio = Ratio::constant(0.15);
const P20: Ratio = Ratio::constant(0.20);
const P30: Ratio = Ratio::constant(0.30);

/// Lightest to darkest; step 3 is `base` itself.
pub fn accent_ramp(base: Rgb) -> Ramp {
    Ramp::new([
        lighten(base, P30),
        lighten(base, P15),
        base,
        darken(base, P10),
        darken(base, P20),
    ])
}

/// Neutral ramp anchored at `base07`.
pub fn light_ramp(scheme: &Scheme) -> Ramp {
    let anchor = scheme[Base::Base07];
    Ramp::new([
        anchor,
        darken(anchor, P02),
        darken(anchor, P10),
        darken(anchor, P20),
        darken(anchor, P30),
    ])
}

/// `base04`, `base03`, `base02`, `base01`, `base00`.
pub fn dark_ramp(scheme: &Scheme) -> Ramp {
    Ramp::new([
        scheme[Base::Base04],
        scheme[Base::Base03],
        scheme[Base::Base02],
        scheme[Base::Base01],
        scheme[Base::Base00],
    ])
}

/// Window-level surfaces for one variant.
#[derive(Debug, Clone, Copy)]
struct Surfaces {
    window_bg: Rgb,
    window_fg: Rgb,
    view_bg: Rgb,
    view_fg: Rgb,
    headerbar_bg: Rgb,
    card_bg: Rgb,
    dialog_bg: Rgb,
    popover_bg: Rgb,
}

impl Surfaces {
    fn dark(scheme: &Scheme) -> Self {
        let bg = scheme[Base::Base00];
        let fg = scheme[Base::Base05];
        let raised = lighten(bg, P12);
        Self {
            window_bg: bg,
            window_fg: fg,
            view_bg: lighten(bg, P05),
            view_fg: fg,
            headerbar_bg: lighten(bg, P10),
            card_bg: lighten(bg, P08),
            dialog_bg: raised,
            popover_bg: raised,
        }
    }

    fn light(scheme: &Scheme) -> Self {
        let bg = scheme[Base::Base07];
        let fg = scheme[Base::Base02];
        Self {
            window_bg: darken(bg, P02),
            window_fg: fg,
            view_bg: bg,
            view_fg: fg,
            headerbar_bg: darken(bg, P08),
            card_bg: bg,
            dialog_bg: darken(bg, P02),
            popover_bg: bg,
        }
    }
}

/// Derive the full palette for an already resolved variant.
pub fn derive_palette(scheme: &Scheme, variant: Variant) -> Palette {
    let surfaces = match variant {
        Variant::Dark => Surfaces::dark(scheme),
        Variant::Light => Surfaces::light(scheme),
    };
    // Foreground on accent/success/warning fills. Destructive and error
    // always take white.
    let on_fill = match variant {
        Variant::Dark => Paint::White,
        Variant::Light => Paint::Color(surfaces.window_fg),
    };

    let palette = Palette::from_fn(
        variant,
        |hue: Hue| accent_ramp(scheme[hue.base()]),
        light_ramp(scheme),
        dark_ramp(scheme),
        |role| match role {
            Role::AccentBg => scheme[Base::Base0D].into(),
            Role::DestructiveBg | Role::ErrorBg => scheme[Base::Base08].into(),
            Role::SuccessBg => scheme[Base::Base0B].into(),
            Role::WarningBg => scheme[Base::Base09].into(),
            Role::AccentFg | Role::SuccessFg | Role::WarningFg => on_fill,
            Role::DestructiveFg | Role::ErrorFg => Paint::White,
            Role::WindowBg => surfaces.window_bg.into(),
            Role::ViewBg => surfaces.view_bg.into(),
            Role::HeaderbarBg | Role::SidebarBg => surfaces.headerbar_bg.into(),
            Role::CardBg => surfaces.card_bg.into(),
            Role::DialogBg => surfaces.dialog_bg.into(),
            Role::PopoverBg => surfaces.popover_bg.into(),
            Role::WindowFg | Role::HeaderbarFg | Role::SidebarFg | Role::DialogFg => {
                surfaces.window_fg.into()
            }
            Role::ViewFg | Role::CardFg | Role::PopoverFg => surfaces.view_fg.into(),
        },
    );
    debug!(scheme = %scheme.name, variant = %variant, "derived palette");
    palette
}

/// Resolve the variant and derive the palette in one step.
pub fn generate_palette(scheme: &Scheme, request: VariantRequest) -> Palette {
    let variant = resolve_variant(scheme, request);
    derive_palette(scheme, variant)
}

//! Relative luminance of sRGB colors.

use base16_model::Rgb;

/// Compute the relative luminance of a color.
///
/// Each channel is normalized to [0, 1] and gamma-expanded, then weighted:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns 0.0 for black and 1.0 for white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let [r, g, b] = color.channels().map(linearize);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

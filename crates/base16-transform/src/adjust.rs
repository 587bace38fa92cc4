//! Lighten, darken and mix over RGB channels.
//!
//! All three operate per channel in sRGB space and truncate toward zero, so
//! results are stable across platforms for the same inputs.

use base16_model::{ColorError, Result, Rgb};

/// A blend ratio in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ratio(f64);

impl Ratio {
    pub const ZERO: Ratio = Ratio(0.0);
    pub const ONE: Ratio = Ratio(1.0);

    /// # Errors
    ///
    /// Returns [`ColorError::RatioOutOfRange`] for values outside [0, 1],
    /// including NaN.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ColorError::RatioOutOfRange { ratio: value })
        }
    }

    /// Ratio for literal constants. Used in a `const` item, an out-of-range
    /// value fails the build.
    ///
    /// # Panics
    ///
    /// Panics when `value` is outside [0, 1].
    pub const fn constant(value: f64) -> Self {
        assert!(value >= 0.0 && value <= 1.0, "ratio constant outside [0, 1]");
        Self(value)
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Ratio {
    type Error = ColorError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

/// Move each channel toward 255 by `ratio` of its headroom.
#[must_use]
pub fn lighten(color: Rgb, ratio: Ratio) -> Rgb {
    let t = ratio.get();
    map_channels(color, |c| c + (255.0 - c) * t)
}

/// Scale each channel toward 0 by `ratio`.
#[must_use]
pub fn darken(color: Rgb, ratio: Ratio) -> Rgb {
    let t = ratio.get();
    map_channels(color, |c| c * (1.0 - t))
}

/// Linear interpolation: `ratio = 0` yields `from`, `ratio = 1` yields `to`.
#[must_use]
pub fn mix(from: Rgb, to: Rgb, ratio: Ratio) -> Rgb {
    let t = ratio.get();
    let [r1, g1, b1] = from.channels().map(f64::from);
    let [r2, g2, b2] = to.channels().map(f64::from);
    Rgb::new(
        to_channel(r1 * (1.0 - t) + r2 * t),
        to_channel(g1 * (1.0 - t) + g2 * t),
        to_channel(b1 * (1.0 - t) + b2 * t),
    )
}

/// [`lighten`] with an unchecked ratio.
///
/// # Errors
///
/// Returns [`ColorError::RatioOutOfRange`] when `ratio` is outside [0, 1].
pub fn try_lighten(color: Rgb, ratio: f64) -> Result<Rgb> {
    Ok(lighten(color, Ratio::new(ratio)?))
}

/// [`darken`] with an unchecked ratio.
///
/// # Errors
///
/// Returns [`ColorError::RatioOutOfRange`] when `ratio` is outside [0, 1].
pub fn try_darken(color: Rgb, ratio: f64) -> Result<Rgb> {
    Ok(darken(color, Ratio::new(ratio)?))
}

/// [`mix`] with an unchecked ratio.
///
/// # Errors
///
/// Returns [`ColorError::RatioOutOfRange`] when `ratio` is outside [0, 1].
pub fn try_mix(from: Rgb, to: Rgb, ratio: f64) -> Result<Rgb> {
    Ok(mix(from, to, Ratio::new(ratio)?))
}

fn map_channels(color: Rgb, f: impl Fn(f64) -> f64) -> Rgb {
    Rgb::from_channels(color.channels().map(|c| to_channel(f(f64::from(c)))))
}

// Truncates toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

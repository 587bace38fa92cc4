//! The sixteen base16 color slots.
//!
//! # Base16 Reference
//!
//! - `base00`..`base07`: neutral ramp from background to brightest foreground
//! - `base08`..`base0F`: accents (red, orange, yellow, green, cyan, blue,
//!   purple, brown)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A base16 slot, addressed by its two-digit uppercase hex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Base {
    #[serde(rename = "base00")]
    Base00,
    #[serde(rename = "base01")]
    Base01,
    #[serde(rename = "base02")]
    Base02,
    #[serde(rename = "base03")]
    Base03,
    #[serde(rename = "base04")]
    Base04,
    #[serde(rename = "base05")]
    Base05,
    #[serde(rename = "base06")]
    Base06,
    #[serde(rename = "base07")]
    Base07,
    #[serde(rename = "base08")]
    Base08,
    #[serde(rename = "base09")]
    Base09,
    #[serde(rename = "base0A")]
    Base0A,
    #[serde(rename = "base0B")]
    Base0B,
    #[serde(rename = "base0C")]
    Base0C,
    #[serde(rename = "base0D")]
    Base0D,
    #[serde(rename = "base0E")]
    Base0E,
    #[serde(rename = "base0F")]
    Base0F,
}

impl Base {
    /// All slots in index order.
    pub const ALL: [Base; 16] = [
        Base::Base00,
        Base::Base01,
        Base::Base02,
        Base::Base03,
        Base::Base04,
        Base::Base05,
        Base::Base06,
        Base::Base07,
        Base::Base08,
        Base::Base09,
        Base::Base0A,
        Base::Base0B,
        Base::Base0C,
        Base::Base0D,
        Base::Base0E,
        Base::Base0F,
    ];

    /// Position in [`Base::ALL`] (0..16).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The scheme file key, e.g. `base0A`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Base::Base00 => "base00",
            Base::Base01 => "base01",
            Base::Base02 => "base02",
            Base::Base03 => "base03",
            Base::Base04 => "base04",
            Base::Base05 => "base05",
            Base::Base06 => "base06",
            Base::Base07 => "base07",
            Base::Base08 => "base08",
            Base::Base09 => "base09",
            Base::Base0A => "base0A",
            Base::Base0B => "base0B",
            Base::Base0C => "base0C",
            Base::Base0D => "base0D",
            Base::Base0E => "base0E",
            Base::Base0F => "base0F",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Base {
    type Err = String;

    /// Keys are matched exactly; `base0a` is not `base0A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Base::ALL
            .into_iter()
            .find(|base| base.as_str() == s)
            .ok_or_else(|| format!("unknown base16 slot: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position() {
        for (position, base) in Base::ALL.iter().enumerate() {
            assert_eq!(base.index(), position);
        }
    }

    #[test]
    fn keys_use_uppercase_hex_index() {
        assert_eq!(Base::Base0A.as_str(), "base0A");
        assert_eq!(Base::Base0F.to_string(), "base0F");
        assert_eq!(format!("base{:02X}", Base::Base0D.index()), "base0D");
    }

    #[test]
    fn parse_roundtrip() {
        for base in Base::ALL {
            assert_eq!(base.as_str().parse::<Base>().unwrap(), base);
        }
        assert!("base0a".parse::<Base>().is_err());
        assert!("base10".parse::<Base>().is_err());
    }
}

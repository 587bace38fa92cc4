//! Dark/light rendering variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The resolved rendering variant. Chosen once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Dark,
    Light,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Variant::Dark)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The variant a caller asked for. `Auto` defers to the scheme background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantRequest {
    #[default]
    Auto,
    Dark,
    Light,
}

impl VariantRequest {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantRequest::Auto => "auto",
            VariantRequest::Dark => "dark",
            VariantRequest::Light => "light",
        }
    }

    /// The requested variant, or `None` for `Auto`.
    pub fn explicit(&self) -> Option<Variant> {
        match self {
            VariantRequest::Auto => None,
            VariantRequest::Dark => Some(Variant::Dark),
            VariantRequest::Light => Some(Variant::Light),
        }
    }
}

impl fmt::Display for VariantRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(VariantRequest::Auto),
            "dark" => Ok(VariantRequest::Dark),
            "light" => Ok(VariantRequest::Light),
            other => Err(format!("unknown variant '{other}' (expected light, dark or auto)")),
        }
    }
}

impl From<Variant> for VariantRequest {
    fn from(value: Variant) -> Self {
        match value {
            Variant::Dark => VariantRequest::Dark,
            Variant::Light => VariantRequest::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parsing() {
        assert_eq!("auto".parse::<VariantRequest>(), Ok(VariantRequest::Auto));
        assert_eq!(" Dark ".parse::<VariantRequest>(), Ok(VariantRequest::Dark));
        assert_eq!("LIGHT".parse::<VariantRequest>(), Ok(VariantRequest::Light));
        assert!("dim".parse::<VariantRequest>().is_err());
    }

    #[test]
    fn explicit_requests() {
        assert_eq!(VariantRequest::Auto.explicit(), None);
        assert_eq!(VariantRequest::Dark.explicit(), Some(Variant::Dark));
        assert_eq!(VariantRequest::Light.explicit(), Some(Variant::Light));
        assert_eq!(VariantRequest::from(Variant::Light), VariantRequest::Light);
    }

    #[test]
    fn display() {
        assert_eq!(Variant::Dark.to_string(), "dark");
        assert_eq!(VariantRequest::default().to_string(), "auto");
        assert!(Variant::Dark.is_dark());
        assert!(!Variant::Light.is_dark());
    }
}

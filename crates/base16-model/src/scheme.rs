//! Validated base16 scheme.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::base::Base;
use crate::color::Rgb;

/// Author shown when the scheme file has no `author` key.
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Scheme name used when neither the file nor its path supplies one.
pub const DEFAULT_SCHEME_NAME: &str = "Base16";

/// A complete base16 scheme.
///
/// Every slot holds a color, so lookups by [`Base`] cannot fail. Values are
/// only produced by the ingest layer after all sixteen keys were validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub author: String,
    colors: [Rgb; 16],
}

impl Scheme {
    pub fn new(name: impl Into<String>, author: impl Into<String>, colors: [Rgb; 16]) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            colors,
        }
    }

    pub fn color(&self, base: Base) -> Rgb {
        self.colors[base.index()]
    }

    /// The window background slot (`base00`).
    pub fn background(&self) -> Rgb {
        self.color(Base::Base00)
    }

    pub fn colors(&self) -> &[Rgb; 16] {
        &self.colors
    }

    /// Slots with their colors in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Base, Rgb)> + '_ {
        Base::ALL.into_iter().map(|base| (base, self.color(base)))
    }
}

impl Index<Base> for Scheme {
    type Output = Rgb;

    fn index(&self, base: Base) -> &Rgb {
        &self.colors[base.index()]
    }
}

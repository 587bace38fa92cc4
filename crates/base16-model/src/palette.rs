//! Derived UI palette: tonal ramps plus semantic role colors.
//!
//! The palette is computed in full before anything is emitted. It exposes a
//! flat `name -> value` view (`blue_3`, `window_bg_color`, ...) matching the
//! identifiers used in the generated stylesheet.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::base::Base;
use crate::color::Rgb;
use crate::variant::Variant;

/// Number of steps in every ramp.
pub const RAMP_STEPS: usize = 5;

/// Accent hues and the base slot each one is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Brown,
}

impl Hue {
    /// Emission order.
    pub const ALL: [Hue; 7] = [
        Hue::Blue,
        Hue::Green,
        Hue::Yellow,
        Hue::Orange,
        Hue::Red,
        Hue::Purple,
        Hue::Brown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hue::Blue => "blue",
            Hue::Green => "green",
            Hue::Yellow => "yellow",
            Hue::Orange => "orange",
            Hue::Red => "red",
            Hue::Purple => "purple",
            Hue::Brown => "brown",
        }
    }

    pub fn base(&self) -> Base {
        match self {
            Hue::Blue => Base::Base0D,
            Hue::Green => Base::Base0B,
            Hue::Yellow => Base::Base0A,
            Hue::Orange => Base::Base09,
            Hue::Red => Base::Base08,
            Hue::Purple => Base::Base0E,
            Hue::Brown => Base::Base0F,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Five colors ordered lightest to darkest.
///
/// Consumers address steps by position (`blue_1` .. `blue_5`), so the order
/// is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ramp([Rgb; RAMP_STEPS]);

impl Ramp {
    pub const fn new(steps: [Rgb; RAMP_STEPS]) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[Rgb; RAMP_STEPS] {
        &self.0
    }

    /// One-based step lookup, as used in variable names.
    pub fn step(&self, number: usize) -> Option<Rgb> {
        number
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .copied()
    }

    /// The third step.
    pub fn midpoint(&self) -> Rgb {
        self.0[2]
    }
}

/// A role value: either a concrete color or the `white` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paint {
    Color(Rgb),
    White,
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Color(color) => write!(f, "{color}"),
            Paint::White => f.write_str("white"),
        }
    }
}

impl From<Rgb> for Paint {
    fn from(value: Rgb) -> Self {
        Paint::Color(value)
    }
}

/// Semantic UI roles in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    AccentBg,
    AccentFg,
    DestructiveBg,
    DestructiveFg,
    SuccessBg,
    SuccessFg,
    WarningBg,
    WarningFg,
    ErrorBg,
    ErrorFg,
    WindowBg,
    WindowFg,
    ViewBg,
    ViewFg,
    HeaderbarBg,
    HeaderbarFg,
    SidebarBg,
    SidebarFg,
    CardBg,
    CardFg,
    DialogBg,
    DialogFg,
    PopoverBg,
    PopoverFg,
}

impl Role {
    pub const COUNT: usize = 24;

    pub const ALL: [Role; Role::COUNT] = [
        Role::AccentBg,
        Role::AccentFg,
        Role::DestructiveBg,
        Role::DestructiveFg,
        Role::SuccessBg,
        Role::SuccessFg,
        Role::WarningBg,
        Role::WarningFg,
        Role::ErrorBg,
        Role::ErrorFg,
        Role::WindowBg,
        Role::WindowFg,
        Role::ViewBg,
        Role::ViewFg,
        Role::HeaderbarBg,
        Role::HeaderbarFg,
        Role::SidebarBg,
        Role::SidebarFg,
        Role::CardBg,
        Role::CardFg,
        Role::DialogBg,
        Role::DialogFg,
        Role::PopoverBg,
        Role::PopoverFg,
    ];

    /// The stylesheet color name, e.g. `window_bg_color`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::AccentBg => "accent_bg_color",
            Role::AccentFg => "accent_fg_color",
            Role::DestructiveBg => "destructive_bg_color",
            Role::DestructiveFg => "destructive_fg_color",
            Role::SuccessBg => "success_bg_color",
            Role::SuccessFg => "success_fg_color",
            Role::WarningBg => "warning_bg_color",
            Role::WarningFg => "warning_fg_color",
            Role::ErrorBg => "error_bg_color",
            Role::ErrorFg => "error_fg_color",
            Role::WindowBg => "window_bg_color",
            Role::WindowFg => "window_fg_color",
            Role::ViewBg => "view_bg_color",
            Role::ViewFg => "view_fg_color",
            Role::HeaderbarBg => "headerbar_bg_color",
            Role::HeaderbarFg => "headerbar_fg_color",
            Role::SidebarBg => "sidebar_bg_color",
            Role::SidebarFg => "sidebar_fg_color",
            Role::CardBg => "card_bg_color",
            Role::CardFg => "card_fg_color",
            Role::DialogBg => "dialog_bg_color",
            Role::DialogFg => "dialog_fg_color",
            Role::PopoverBg => "popover_bg_color",
            Role::PopoverFg => "popover_fg_color",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fully derived palette for one scheme and variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub variant: Variant,
    accents: [Ramp; 7],
    pub light: Ramp,
    pub dark: Ramp,
    roles: [Paint; Role::COUNT],
}

impl Palette {
    /// Build a palette from per-hue and per-role functions.
    ///
    /// Taking functions keeps every hue and role populated: callers match on
    /// the enum and the compiler checks the match is exhaustive.
    pub fn from_fn(
        variant: Variant,
        accent: impl Fn(Hue) -> Ramp,
        light: Ramp,
        dark: Ramp,
        role: impl Fn(Role) -> Paint,
    ) -> Self {
        Self {
            variant,
            accents: Hue::ALL.map(accent),
            light,
            dark,
            roles: Role::ALL.map(role),
        }
    }

    pub fn accent(&self, hue: Hue) -> &Ramp {
        &self.accents[hue.index()]
    }

    pub fn accents(&self) -> impl Iterator<Item = (Hue, &Ramp)> {
        Hue::ALL.into_iter().zip(self.accents.iter())
    }

    pub fn role(&self, role: Role) -> Paint {
        self.roles[role.index()]
    }

    pub fn roles(&self) -> impl Iterator<Item = (Role, Paint)> + '_ {
        Role::ALL.into_iter().zip(self.roles.iter().copied())
    }

    /// Every named ramp in emission order: the accent ramps, then `light`
    /// and `dark`.
    pub fn ramps(&self) -> Vec<(&'static str, &Ramp)> {
        let mut ramps: Vec<(&'static str, &Ramp)> = self
            .accents()
            .map(|(hue, ramp)| (hue.as_str(), ramp))
            .collect();
        ramps.push(("light", &self.light));
        ramps.push(("dark", &self.dark));
        ramps
    }

    /// Flat view: `blue_1`..`dark_5` followed by the role names.
    pub fn entries(&self) -> Vec<(String, Paint)> {
        let mut entries = Vec::with_capacity(9 * RAMP_STEPS + Role::COUNT);
        for (name, ramp) in self.ramps() {
            for (index, color) in ramp.steps().iter().enumerate() {
                entries.push((format!("{name}_{}", index + 1), Paint::Color(*color)));
            }
        }
        entries.extend(
            self.roles()
                .map(|(role, paint)| (role.as_str().to_string(), paint)),
        );
        entries
    }

    /// Look up a flat entry by name.
    pub fn get(&self, name: &str) -> Option<Paint> {
        if let Some(role) = Role::ALL.into_iter().find(|role| role.as_str() == name) {
            return Some(self.role(role));
        }
        let (ramp_name, step) = name.rsplit_once('_')?;
        let step: usize = step.parse().ok()?;
        self.ramps()
            .into_iter()
            .find(|(candidate, _)| *candidate == ramp_name)
            .and_then(|(_, ramp)| ramp.step(step))
            .map(Paint::Color)
    }
}

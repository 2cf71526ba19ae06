//! Appearance names shared by settings and the compositor.

use serde::{Deserialize, Serialize};

/// Fill style of a bevelled surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    Flat,
    Raised,
    DullGlass,
    ShinyGlass,
    Agua,
    #[default]
    SoftGradient,
    Gradient,
    Harsh,
    Inverted,
    Darken,
    Bevelled,
    Fade,
}

impl Appearance {
    /// One of the glass styles.
    pub fn is_glass(self) -> bool {
        matches!(self, Appearance::DullGlass | Appearance::ShinyGlass)
    }

    /// Styles drawn as a single colour.
    pub fn is_flat(self) -> bool {
        matches!(self, Appearance::Flat | Appearance::Raised | Appearance::Fade)
    }
}

/// Decorative pattern behind window contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundKind {
    #[default]
    Flat,
    Gradient,
    Striped,
    Rings,
}

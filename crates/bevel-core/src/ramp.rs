//! Shade ramps: the fixed set of colours derived from one base colour.

use crate::color::{Color, shade};
use crate::policy::{NUM_STD_SHADES, ShadingPolicy};
use std::ops::Index;

/// Total number of slots in a ramp.
pub const TOTAL_SHADES: usize = 10;

/// Highlight variant of the original colour.
pub const SHADE_ORIG_HIGHLIGHT: usize = 6;
/// Highlight variant of shade 4.
pub const SHADE_4_HIGHLIGHT: usize = 7;
/// Highlight variant of shade 2.
pub const SHADE_2_HIGHLIGHT: usize = 8;
/// The unshaded base colour.
pub const ORIGINAL_SHADE: usize = 9;

/// Shade used for standard borders.
pub const STD_BORDER: usize = 5;
/// Shade used for borders of disabled widgets.
pub const DISABLED_BORDER: usize = STD_BORDER;
/// Shade used for menu stripes.
pub const MENU_STRIPE_SHADE: usize = 2;

/// An immutable ramp of shaded colours.
///
/// Slots `0..6` are the standard shades, followed by three highlight
/// variants and the original colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadeRamp([Color; TOTAL_SHADES]);

impl ShadeRamp {
    /// Derive a ramp from `base` under `policy`.
    pub fn generate(base: Color, policy: &ShadingPolicy) -> Self {
        let mut shades = [base; TOTAL_SHADES];
        for (i, slot) in shades.iter_mut().enumerate().take(NUM_STD_SHADES) {
            *slot = shade(base, policy.shade_factor(i), policy.shading);
        }
        let hl = policy.highlight();
        shades[SHADE_ORIG_HIGHLIGHT] = shade(base, hl, policy.shading);
        shades[SHADE_4_HIGHLIGHT] = shade(shades[4], hl, policy.shading);
        shades[SHADE_2_HIGHLIGHT] = shade(shades[2], hl, policy.shading);
        shades[ORIGINAL_SHADE] = base;
        Self(shades)
    }

    /// The unshaded base colour.
    pub fn original(&self) -> Color {
        self.0[ORIGINAL_SHADE]
    }

    /// Colour at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    /// The border colour.
    pub fn border(&self) -> Color {
        self.0[STD_BORDER]
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }
}

impl Index<usize> for ShadeRamp {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

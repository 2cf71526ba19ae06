//! Shading policy: the inputs that decide how a ramp is derived from a colour.

use crate::color::Shading;
use serde::{Deserialize, Serialize};

/// Number of standard shades in a ramp.
pub const NUM_STD_SHADES: usize = 6;

/// Highest supported contrast level.
pub const MAX_CONTRAST: u8 = 10;

/// Default contrast level.
pub const DEFAULT_CONTRAST: u8 = 7;

/// Default highlight strength in percent.
pub const DEFAULT_HIGHLIGHT_FACTOR: i32 = 3;

/// Amount subtracted from the border shade when darker borders are enabled.
const DARKER_BORDER_DELTA: f64 = 0.1;

/// Index of the border shade.
const BORDER_SHADE: usize = 5;

/// Per-contrast shade factors for the HSL, HSV and HCY strategies.
const SHADES: [[f64; NUM_STD_SHADES]; MAX_CONTRAST as usize + 1] = [
    [1.05, 1.04, 0.90, 0.800, 0.830, 0.82],
    [1.06, 1.04, 0.90, 0.790, 0.831, 0.78],
    [1.07, 1.04, 0.90, 0.785, 0.832, 0.75],
    [1.08, 1.05, 0.90, 0.782, 0.833, 0.72],
    [1.09, 1.05, 0.90, 0.782, 0.834, 0.70],
    [1.10, 1.06, 0.90, 0.782, 0.836, 0.68],
    [1.12, 1.06, 0.90, 0.782, 0.838, 0.63],
    [1.16, 1.07, 0.90, 0.782, 0.840, 0.62],
    [1.18, 1.07, 0.90, 0.783, 0.842, 0.60],
    [1.20, 1.08, 0.90, 0.784, 0.844, 0.58],
    [1.22, 1.08, 0.90, 0.786, 0.848, 0.55],
];

/// Per-contrast shade factors for the simple RGB strategy.
const SIMPLE_SHADES: [[f64; NUM_STD_SHADES]; MAX_CONTRAST as usize + 1] = [
    [1.07, 1.03, 0.91, 0.780, 0.834, 0.75],
    [1.08, 1.03, 0.91, 0.781, 0.835, 0.74],
    [1.09, 1.03, 0.91, 0.782, 0.836, 0.73],
    [1.10, 1.04, 0.91, 0.783, 0.837, 0.72],
    [1.11, 1.04, 0.91, 0.784, 0.838, 0.71],
    [1.12, 1.05, 0.91, 0.785, 0.840, 0.70],
    [1.13, 1.05, 0.91, 0.786, 0.842, 0.69],
    [1.14, 1.06, 0.91, 0.787, 0.844, 0.68],
    [1.16, 1.06, 0.91, 0.788, 0.846, 0.67],
    [1.18, 1.07, 0.91, 0.789, 0.848, 0.66],
    [1.20, 1.07, 0.91, 0.790, 0.850, 0.65],
];

/// Convert a percentage into a multiplicative factor (`3` becomes `1.03`).
pub fn percent_to_factor(percent: i32) -> f64 {
    (100.0 + percent as f64) / 100.0
}

/// Strategy and parameters used to derive a shade ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingPolicy {
    pub shading: Shading,
    /// Contrast level, `0..=10`. Larger values are clamped.
    pub contrast: u8,
    /// Darken the border shade further.
    pub darker_borders: bool,
    /// Highlight strength in percent.
    pub highlight_factor: i32,
    /// Explicit per-shade multipliers, used instead of the contrast table.
    pub custom_shades: Option<[f64; NUM_STD_SHADES]>,
}

impl Default for ShadingPolicy {
    fn default() -> Self {
        Self {
            shading: Shading::default(),
            contrast: DEFAULT_CONTRAST,
            darker_borders: false,
            highlight_factor: DEFAULT_HIGHLIGHT_FACTOR,
            custom_shades: None,
        }
    }
}

impl ShadingPolicy {
    /// Contrast clamped to the supported range.
    pub fn effective_contrast(&self) -> u8 {
        self.contrast.min(MAX_CONTRAST)
    }

    /// Factor for standard shade `index` (`0..6`).
    ///
    /// Custom shades win over the contrast table. Out of range indices yield
    /// the identity factor.
    pub fn shade_factor(&self, index: usize) -> f64 {
        if index >= NUM_STD_SHADES {
            return 1.0;
        }
        if let Some(custom) = &self.custom_shades {
            return custom[index].max(0.0);
        }
        let table = if self.shading == Shading::Simple { &SIMPLE_SHADES } else { &SHADES };
        let factor = table[self.effective_contrast() as usize][index];
        if self.darker_borders && index == BORDER_SHADE {
            factor - DARKER_BORDER_DELTA
        } else {
            factor
        }
    }

    /// Multiplier used for the highlight slots of a ramp.
    pub fn highlight(&self) -> f64 {
        percent_to_factor(self.highlight_factor).max(0.0)
    }

    /// Builder-style setter for the highlight strength.
    pub fn with_highlight(mut self, percent: i32) -> Self {
        self.highlight_factor = percent;
        self
    }

    /// Builder-style setter for the shading strategy.
    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }
}

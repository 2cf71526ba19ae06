//! Corner radii.

use serde::{Deserialize, Serialize};

/// How strongly corners are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStyle {
    None,
    Slight,
    #[default]
    Full,
    Extra,
    /// Half the smaller side.
    Max,
}

/// Which outline the radius is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RadiusKind {
    /// The outer border.
    #[default]
    External,
    /// Fill and inner bevel lines, one pixel inside the border.
    Internal,
    /// Etch and glow, one pixel outside the border.
    Etch,
    /// Selection highlights.
    Selection,
}

impl RoundStyle {
    fn external(self, max: f64) -> f64 {
        match self {
            RoundStyle::None => 0.0,
            RoundStyle::Slight => 2.0,
            RoundStyle::Full => 5.0,
            RoundStyle::Extra => 7.0,
            RoundStyle::Max => max,
        }
    }
}

/// Corner radius for a `width` x `height` outline.
///
/// Never exceeds half the smaller side.
pub fn corner_radius(style: RoundStyle, kind: RadiusKind, width: f64, height: f64) -> f64 {
    let max = (width.min(height) / 2.0).max(0.0);
    if style == RoundStyle::None {
        return 0.0;
    }
    let ext = style.external(max);
    let radius = match kind {
        RadiusKind::External => ext,
        RadiusKind::Internal => (ext - 1.0).max(0.0),
        RadiusKind::Etch => ext + 1.0,
        RadiusKind::Selection => ext.min(3.0),
    };
    radius.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles() {
        assert_eq!(corner_radius(RoundStyle::None, RadiusKind::Etch, 40.0, 40.0), 0.0);
        assert_eq!(corner_radius(RoundStyle::Slight, RadiusKind::External, 40.0, 40.0), 2.0);
        assert_eq!(corner_radius(RoundStyle::Full, RadiusKind::External, 40.0, 40.0), 5.0);
        assert_eq!(corner_radius(RoundStyle::Extra, RadiusKind::External, 40.0, 40.0), 7.0);
        assert_eq!(corner_radius(RoundStyle::Max, RadiusKind::External, 40.0, 20.0), 10.0);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(corner_radius(RoundStyle::Full, RadiusKind::Internal, 40.0, 40.0), 4.0);
        assert_eq!(corner_radius(RoundStyle::Full, RadiusKind::Etch, 40.0, 40.0), 6.0);
        assert_eq!(corner_radius(RoundStyle::Extra, RadiusKind::Selection, 40.0, 40.0), 3.0);
    }

    #[test]
    fn test_capped_by_size() {
        assert_eq!(corner_radius(RoundStyle::Extra, RadiusKind::External, 6.0, 40.0), 3.0);
        assert_eq!(corner_radius(RoundStyle::Max, RadiusKind::Etch, 8.0, 8.0), 4.0);
        assert_eq!(corner_radius(RoundStyle::Full, RadiusKind::External, -4.0, 10.0), 0.0);
    }
}

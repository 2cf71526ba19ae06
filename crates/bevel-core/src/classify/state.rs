//! Widget interaction state.

use crate::ramp::{ORIGINAL_SHADE, SHADE_2_HIGHLIGHT, SHADE_4_HIGHLIGHT, SHADE_ORIG_HIGHLIGHT};
use serde::{Deserialize, Serialize};

/// Interaction state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WidgetState {
    #[default]
    Normal,
    /// Pressed.
    Active,
    /// Hovered.
    Prelight,
    Selected,
    /// Disabled.
    Insensitive,
}

impl From<i32> for WidgetState {
    fn from(raw: i32) -> Self {
        match raw {
            1 => WidgetState::Active,
            2 => WidgetState::Prelight,
            3 => WidgetState::Selected,
            4 => WidgetState::Insensitive,
            _ => WidgetState::Normal,
        }
    }
}

impl WidgetState {
    pub fn is_disabled(self) -> bool {
        self == WidgetState::Insensitive
    }
}

/// Ramp slot used to fill a widget.
///
/// `set` marks a toggled or checked widget; `darker` selects the darker
/// variant used for troughs and grooves.
pub fn fill_shade(state: WidgetState, set: bool, darker: bool) -> usize {
    match state {
        WidgetState::Insensitive => {
            if darker { 2 } else { ORIGINAL_SHADE }
        }
        WidgetState::Prelight if set => {
            if darker { 3 } else { SHADE_4_HIGHLIGHT }
        }
        WidgetState::Prelight => {
            if darker { SHADE_2_HIGHLIGHT } else { SHADE_ORIG_HIGHLIGHT }
        }
        _ if set || state == WidgetState::Active => {
            if darker { 5 } else { 4 }
        }
        _ => {
            if darker { 2 } else { ORIGINAL_SHADE }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_shade() {
        assert_eq!(fill_shade(WidgetState::Normal, false, false), ORIGINAL_SHADE);
        assert_eq!(fill_shade(WidgetState::Normal, false, true), 2);
        assert_eq!(fill_shade(WidgetState::Insensitive, true, false), ORIGINAL_SHADE);
        assert_eq!(fill_shade(WidgetState::Prelight, false, false), SHADE_ORIG_HIGHLIGHT);
        assert_eq!(fill_shade(WidgetState::Prelight, false, true), SHADE_2_HIGHLIGHT);
        assert_eq!(fill_shade(WidgetState::Prelight, true, false), SHADE_4_HIGHLIGHT);
        assert_eq!(fill_shade(WidgetState::Prelight, true, true), 3);
        assert_eq!(fill_shade(WidgetState::Active, false, false), 4);
        assert_eq!(fill_shade(WidgetState::Selected, true, true), 5);
        assert_eq!(fill_shade(WidgetState::Selected, false, false), ORIGINAL_SHADE);
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(WidgetState::from(2), WidgetState::Prelight);
        assert_eq!(WidgetState::from(4), WidgetState::Insensitive);
        assert_eq!(WidgetState::from(17), WidgetState::Normal);
        assert!(WidgetState::from(4).is_disabled());
    }
}

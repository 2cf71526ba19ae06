//! Shape and border classification.
//!
//! The host toolkit hands the engine an already classified [`WidgetRole`];
//! these functions turn it into the corner rounding and border treatment used
//! by the compositor. Every function here is total: unknown input falls back
//! to square corners and a flat border.

mod border;
mod radius;
mod role;
mod state;

pub use border::{BorderProfile, ShadowKind, classify_border};
pub use radius::{RadiusKind, RoundStyle, corner_radius};
pub use role::{StepperPosition, WidgetRole, uses_button_palette};
pub use state::{WidgetState, fill_shade};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Corners of a rectangle that are drawn rounded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Rounding: u8 {
        const TOP_LEFT = 0b0001;
        const TOP_RIGHT = 0b0010;
        const BOTTOM_LEFT = 0b0100;
        const BOTTOM_RIGHT = 0b1000;
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Rounding {
    /// Swap left and right corners.
    pub fn mirrored(self) -> Self {
        let mut out = Rounding::empty();
        out.set(Rounding::TOP_LEFT, self.contains(Rounding::TOP_RIGHT));
        out.set(Rounding::TOP_RIGHT, self.contains(Rounding::TOP_LEFT));
        out.set(Rounding::BOTTOM_LEFT, self.contains(Rounding::BOTTOM_RIGHT));
        out.set(Rounding::BOTTOM_RIGHT, self.contains(Rounding::BOTTOM_LEFT));
        out
    }
}

bitflags! {
    /// Style options that override the default rounding of some roles.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StyleFlags: u8 {
        /// Scrollbar sliders are square.
        const SQUARE_SCROLLBAR_SLIDER = 0b0000_0001;
        /// Scale sliders are square.
        const SQUARE_SLIDER = 0b0000_0010;
        /// Scrollbar steppers are drawn flat.
        const FLAT_SCROLLBAR_BUTTONS = 0b0000_0100;
        /// Scrollbars have no stepper buttons.
        const NO_SCROLLBAR_BUTTONS = 0b0000_1000;
        /// Scale sliders use the plain (rectangular) style.
        const PLAIN_SLIDER = 0b0001_0000;
    }
}

/// Text direction of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    pub fn is_rtl(self) -> bool {
        self == TextDirection::RightToLeft
    }
}

/// Layout axis of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Corner rounding for `role`.
///
/// Right-to-left layouts mirror the result for every role, scrollbar
/// steppers included: stepper positions are logical, so a start stepper is
/// rounded on whichever side the track starts.
pub fn classify_rounding(role: WidgetRole, direction: TextDirection, flags: StyleFlags) -> Rounding {
    let round = match role {
        WidgetRole::ScrollbarSlider => {
            let bare_track = flags.contains(StyleFlags::NO_SCROLLBAR_BUTTONS)
                || flags.contains(StyleFlags::FLAT_SCROLLBAR_BUTTONS);
            if !flags.contains(StyleFlags::SQUARE_SCROLLBAR_SLIDER) && bare_track {
                Rounding::ALL
            } else {
                Rounding::empty()
            }
        }
        WidgetRole::ScaleSlider => {
            if flags.contains(StyleFlags::SQUARE_SLIDER | StyleFlags::PLAIN_SLIDER) {
                Rounding::empty()
            } else {
                Rounding::ALL
            }
        }
        WidgetRole::Splitter
        | WidgetRole::OptionMenu
        | WidgetRole::ToggleButton
        | WidgetRole::Scale
        | WidgetRole::Button => Rounding::ALL,
        WidgetRole::SpinUp => Rounding::TOP_RIGHT,
        WidgetRole::SpinDown => Rounding::BOTTOM_RIGHT,
        WidgetRole::ScrollbarStepper { orientation, position } => match (position, orientation) {
            (StepperPosition::Start, Orientation::Horizontal) => Rounding::LEFT,
            (StepperPosition::Start, Orientation::Vertical) => Rounding::TOP,
            (StepperPosition::End, Orientation::Horizontal) => Rounding::RIGHT,
            (StepperPosition::End, Orientation::Vertical) => Rounding::BOTTOM,
            _ => Rounding::empty(),
        },
        WidgetRole::ComboButton => Rounding::RIGHT,
        WidgetRole::ListViewHeader | WidgetRole::Unknown => Rounding::empty(),
    };

    if direction.is_rtl() { round.mirrored() } else { round }
}

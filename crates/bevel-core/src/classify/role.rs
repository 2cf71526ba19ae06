//! Widget roles and scrollbar stepper positions.

use super::Orientation;
use crate::geometry::IntRect;

/// Length of the `hscrollbar_` / `vscrollbar_` prefix of stepper details.
const SCROLLBAR_PREFIX_LEN: usize = "hscrollbar_".len();

/// Which stepper cell of a scrollbar track a stepper button occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepperPosition {
    /// First cell at the start of the track.
    Start,
    /// Second cell from the start.
    StartInner,
    /// Second cell from the end.
    EndInner,
    /// Last cell at the end of the track.
    End,
    #[default]
    None,
}

impl StepperPosition {
    /// Parse the suffix of a `[hv]scrollbar_*` detail.
    fn from_suffix(suffix: &str) -> Self {
        if suffix == "end_inner" {
            StepperPosition::EndInner
        } else if suffix.contains("start_inner") {
            StepperPosition::StartInner
        } else if suffix == "end" {
            StepperPosition::End
        } else if suffix.contains("start") {
            StepperPosition::Start
        } else {
            StepperPosition::None
        }
    }

    /// Find the stepper cell that `stepper` overlaps within `track`.
    ///
    /// Cells are `stepper`-sized slots at both ends of the track. A track at
    /// `(-1, -1)` is not allocated yet and yields [`StepperPosition::None`].
    pub fn detect(track: &IntRect, stepper: &IntRect, orientation: Orientation) -> Self {
        if track.x == -1 && track.y == -1 {
            return StepperPosition::None;
        }

        let horizontal = orientation == Orientation::Horizontal;
        let cell = |offset: i32| {
            if horizontal {
                IntRect::new(track.x + offset, track.y, stepper.width, stepper.height)
            } else {
                IntRect::new(track.x, track.y + offset, stepper.width, stepper.height)
            }
        };
        let (len, size) = if horizontal { (track.width, stepper.width) } else { (track.height, stepper.height) };

        let candidates = [
            (0, StepperPosition::Start),
            (size, StepperPosition::StartInner),
            (len - size * 2, StepperPosition::EndInner),
            (len - size, StepperPosition::End),
        ];
        candidates
            .into_iter()
            .find(|(offset, _)| stepper.intersect(&cell(*offset)).is_some())
            .map_or(StepperPosition::None, |(_, position)| position)
    }
}

/// Semantic role of the widget part being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetRole {
    /// Thumb of a scrollbar.
    ScrollbarSlider,
    /// Thumb of a scale.
    ScaleSlider,
    Splitter,
    OptionMenu,
    ToggleButton,
    /// Trough of a scale.
    Scale,
    SpinUp,
    SpinDown,
    ScrollbarStepper {
        orientation: Orientation,
        position: StepperPosition,
    },
    Button,
    /// Dropdown button of a combo box.
    ComboButton,
    ListViewHeader,
    #[default]
    Unknown,
}

impl WidgetRole {
    /// Map a toolkit detail token to a role.
    ///
    /// Unrecognised tokens map to [`WidgetRole::Unknown`].
    pub fn from_detail(detail: &str) -> Self {
        match detail {
            "slider" => WidgetRole::ScrollbarSlider,
            "qtc-slider" => WidgetRole::ScaleSlider,
            "splitter" => WidgetRole::Splitter,
            "optionmenu" => WidgetRole::OptionMenu,
            "togglebutton" => WidgetRole::ToggleButton,
            "hscale" | "vscale" => WidgetRole::Scale,
            "spinbutton_up" => WidgetRole::SpinUp,
            "spinbutton_down" => WidgetRole::SpinDown,
            "button" => WidgetRole::Button,
            "stepper" => WidgetRole::ScrollbarStepper {
                orientation: Orientation::Horizontal,
                position: StepperPosition::None,
            },
            _ if is_scrollbar_detail(detail) => {
                let orientation = if detail.starts_with('v') { Orientation::Vertical } else { Orientation::Horizontal };
                let position = detail
                    .get(SCROLLBAR_PREFIX_LEN..)
                    .map_or(StepperPosition::None, StepperPosition::from_suffix);
                WidgetRole::ScrollbarStepper { orientation, position }
            }
            _ => WidgetRole::Unknown,
        }
    }

    /// Replace the position of a scrollbar stepper role.
    pub fn with_stepper_position(self, position: StepperPosition) -> Self {
        match self {
            WidgetRole::ScrollbarStepper { orientation, .. } => WidgetRole::ScrollbarStepper { orientation, position },
            other => other,
        }
    }
}

/// `hscrollbar`, `vscrollbar` and their `_start`/`_end` variants.
fn is_scrollbar_detail(detail: &str) -> bool {
    detail.len() > 1 && detail.is_char_boundary(1) && detail[1..].starts_with("scrollbar")
}

/// Whether widgets with this detail are drawn with the button palette.
pub fn uses_button_palette(detail: &str) -> bool {
    matches!(
        detail,
        "optionmenu"
            | "button"
            | "buttondefault"
            | "togglebuttondefault"
            | "togglebutton"
            | "hscale"
            | "vscale"
            | "spinbutton"
            | "spinbutton_up"
            | "spinbutton_down"
            | "slider"
            | "qtc-slider"
            | "stepper"
    ) || is_scrollbar_detail(detail)
}

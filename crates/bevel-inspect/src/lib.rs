//! Bevel Inspector
//!
//! Loads engine settings, regenerates the process palettes and renders a
//! sample sheet of widget panels into a recording surface.

mod sheet;

pub use sheet::{PanelSummary, Sample, SheetReport, draw_sample, render_sheet, sample_sheet};

use bevel_core::color::Color;
use bevel_core::ramp::ShadeRamp;
use bevel_core::{EngineSettings, PaletteSet, SettingsError};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Inspector errors.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Unknown argument: {0}")]
    Argument(String),
}

pub type InspectResult<T> = Result<T, InspectError>;

/// Load settings from `path`, or use the defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> InspectResult<EngineSettings> {
    match path {
        Some(path) => {
            log::info!("Loading settings from {}", path.display());
            Ok(EngineSettings::from_file(path)?)
        }
        None => Ok(EngineSettings::default()),
    }
}

/// `#rrggbb` form of a colour.
pub fn hex(color: Color) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// A named ramp rendered as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RampSummary {
    pub name: &'static str,
    pub shades: Vec<String>,
}

impl RampSummary {
    fn new(name: &'static str, ramp: &ShadeRamp) -> Self {
        Self { name, shades: ramp.as_slice().iter().copied().map(hex).collect() }
    }
}

/// The always-present ramps of `palettes`, plus any optional ones that are set.
pub fn palette_summary(palettes: &PaletteSet) -> Vec<RampSummary> {
    let mut ramps = vec![
        RampSummary::new("background", &palettes.background),
        RampSummary::new("button", &palettes.button),
        RampSummary::new("button_disabled", &palettes.button_disabled),
        RampSummary::new("highlight", &palettes.highlight),
        RampSummary::new("focus", &palettes.focus),
        RampSummary::new("menubar", &palettes.menubar),
        RampSummary::new("menu", &palettes.menu),
        RampSummary::new("selected_check_radio", &palettes.selected_check_radio),
    ];
    let optional = [
        ("slider", &palettes.slider),
        ("combo_button", &palettes.combo_button),
        ("sorted_list", &palettes.sorted_list),
        ("default_button", &palettes.default_button),
        ("mouse_over", &palettes.mouse_over),
        ("sidebar", &palettes.sidebar),
        ("progress", &palettes.progress),
    ];
    for (name, ramp) in optional {
        if let Some(ramp) = ramp {
            ramps.push(RampSummary::new(name, ramp));
        }
    }
    ramps
}

/// Full inspector output.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub generation: u64,
    pub ramps: Vec<RampSummary>,
    pub sheet: SheetReport,
}

impl Inspection {
    pub fn to_json(&self) -> InspectResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| InspectError::Serialization(e.to_string()))
    }
}

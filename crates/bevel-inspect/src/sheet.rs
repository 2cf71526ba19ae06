//! Sample sheet of widget panels.

use bevel_core::classify::{
    BorderProfile, ShadowKind, TextDirection, WidgetRole, WidgetState, classify_border, classify_rounding, fill_shade,
    uses_button_palette,
};
use bevel_core::geometry::IntRect;
use bevel_core::ramp::ShadeRamp;
use bevel_core::{EngineSettings, PaletteSet};
use bevel_render::{DrawFlags, Glow, PanelOptions, RecordingSurface, Surface, draw_panel};
use serde::Serialize;

/// Height of one sheet row.
pub const ROW_HEIGHT: i32 = 28;
/// Width of a sample panel.
pub const PANEL_WIDTH: i32 = 96;
const MARGIN: i32 = 4;

/// One widget part drawn on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub label: &'static str,
    pub detail: &'static str,
    pub state: WidgetState,
    pub shadow: ShadowKind,
    pub direction: TextDirection,
    pub focused: bool,
    pub rect: IntRect,
}

const fn sample(label: &'static str, detail: &'static str, state: WidgetState, shadow: ShadowKind) -> Sample {
    Sample {
        label,
        detail,
        state,
        shadow,
        direction: TextDirection::LeftToRight,
        focused: false,
        rect: IntRect::new(0, 0, PANEL_WIDTH, ROW_HEIGHT - MARGIN),
    }
}

/// Widget parts covering the roles, states and border profiles.
pub fn sample_sheet() -> Vec<Sample> {
    let mut samples = vec![
        sample("button", "button", WidgetState::Normal, ShadowKind::Out),
        sample("button hover", "button", WidgetState::Prelight, ShadowKind::Out),
        sample("button pressed", "button", WidgetState::Active, ShadowKind::In),
        sample("button disabled", "button", WidgetState::Insensitive, ShadowKind::Out),
        Sample { focused: true, ..sample("button focused", "button", WidgetState::Normal, ShadowKind::Out) },
        sample("default button", "buttondefault", WidgetState::Normal, ShadowKind::Out),
        sample("toggle", "togglebutton", WidgetState::Active, ShadowKind::In),
        sample("option menu", "optionmenu", WidgetState::Normal, ShadowKind::Out),
        sample("spin up", "spinbutton_up", WidgetState::Normal, ShadowKind::Out),
        sample("spin down", "spinbutton_down", WidgetState::Normal, ShadowKind::Out),
        sample("stepper start", "hscrollbar_start", WidgetState::Normal, ShadowKind::Out),
        sample("stepper end", "vscrollbar_end", WidgetState::Normal, ShadowKind::Out),
        Sample {
            direction: TextDirection::RightToLeft,
            ..sample("stepper start rtl", "hscrollbar_start", WidgetState::Normal, ShadowKind::Out)
        },
        sample("scrollbar slider", "slider", WidgetState::Prelight, ShadowKind::Out),
        sample("scale slider", "qtc-slider", WidgetState::Normal, ShadowKind::Out),
        sample("scale trough", "hscale", WidgetState::Normal, ShadowKind::In),
        sample("entry", "entry", WidgetState::Normal, ShadowKind::In),
        sample("frame", "frame", WidgetState::Normal, ShadowKind::EtchedIn),
        sample("panel", "handlebox", WidgetState::Normal, ShadowKind::EtchedOut),
        sample("collapsed", "button", WidgetState::Normal, ShadowKind::Out),
    ];

    for (row, sample) in samples.iter_mut().enumerate() {
        sample.rect.y = row as i32 * ROW_HEIGHT + MARGIN / 2;
        sample.rect.x = MARGIN;
    }
    if let Some(collapsed) = samples.last_mut() {
        collapsed.rect.width = 0;
    }
    samples
}

/// Ramp used to draw `sample`.
fn sample_ramp<'a>(palettes: &'a PaletteSet, sample: &Sample) -> &'a ShadeRamp {
    let disabled = sample.state.is_disabled();
    match WidgetRole::from_detail(sample.detail) {
        _ if disabled && uses_button_palette(sample.detail) => palettes.button_ramp(true),
        WidgetRole::ScrollbarSlider | WidgetRole::ScaleSlider => palettes.slider_or_button(),
        WidgetRole::ComboButton => palettes.combo_button_or_button(),
        _ if sample.detail == "buttondefault" => palettes.default_button_or_button(),
        _ if uses_button_palette(sample.detail) => &palettes.button,
        _ => &palettes.background,
    }
}

/// What drawing one sample produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSummary {
    pub label: &'static str,
    pub role: String,
    pub rounding: u8,
    pub border: String,
    pub primitives: usize,
}

/// Totals for a rendered sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetReport {
    pub panels: Vec<PanelSummary>,
    /// Samples that produced no primitives.
    pub skipped: usize,
    pub primitives: usize,
    pub paints: usize,
    pub max_clip_depth: usize,
}

/// Draw one sample panel.
pub fn draw_sample(surface: &mut dyn Surface, settings: &EngineSettings, palettes: &PaletteSet, sample: &Sample) {
    let role = WidgetRole::from_detail(sample.detail);
    let rounding = classify_rounding(role, sample.direction, settings.flags);
    let border = classify_border(sample.shadow);
    let ramp = sample_ramp(palettes, sample);
    let set = role == WidgetRole::ToggleButton && sample.state == WidgetState::Active;
    let darker = border == BorderProfile::Sunken && role == WidgetRole::Scale;
    let base = ramp[fill_shade(sample.state, set, darker)];

    let mut flags = DrawFlags::default();
    if border == BorderProfile::Sunken {
        flags |= DrawFlags::SUNKEN;
    }
    let mut options = PanelOptions {
        appearance: settings.appearance,
        shading: settings.policy.shading,
        round_style: settings.round,
        flags,
        disabled: sample.state.is_disabled(),
        ..Default::default()
    };
    if sample.focused {
        options = options.with_focus(&palettes.focus);
        if settings.glow_focus {
            options = options.with_glow(Glow { color: palettes.focus.border(), default_button: false });
        }
    } else if sample.detail == "buttondefault" {
        options = options.with_glow(Glow { color: palettes.default_button_or_button().border(), default_button: true });
    } else if settings.etch {
        options = options.with_etch(border == BorderProfile::Raised);
    }
    if matches!(border, BorderProfile::Light | BorderProfile::Flat) && role == WidgetRole::Unknown {
        options = options.with_background(settings.background, palettes.colors().window);
    }

    draw_panel(surface, &sample.rect, base, ramp, rounding, border, &options);
}

/// Draw every sample into `surface` and summarise the result.
pub fn render_sheet(surface: &mut RecordingSurface, settings: &EngineSettings, palettes: &PaletteSet) -> SheetReport {
    let mut report = SheetReport::default();
    for sample in sample_sheet() {
        let before = surface.len();
        draw_sample(surface, settings, palettes, &sample);
        let primitives = surface.len() - before;
        if primitives == 0 {
            log::debug!("Sample {:?} drew nothing", sample.label);
            report.skipped += 1;
        }
        let role = WidgetRole::from_detail(sample.detail);
        report.panels.push(PanelSummary {
            label: sample.label,
            role: format!("{role:?}"),
            rounding: classify_rounding(role, sample.direction, settings.flags).bits(),
            border: format!("{:?}", classify_border(sample.shadow)),
            primitives,
        });
    }
    report.primitives = surface.len();
    report.paints = surface.paint_count();
    report.max_clip_depth = surface.max_clip_depth();
    report
}

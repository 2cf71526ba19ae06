//! Bevel Core Library
//!
//! Colour shading, palette generation and shape classification for the Bevel
//! widget style engine. Nothing here draws; the render crate turns these
//! values into paths and brushes.

pub mod appearance;
pub mod classify;
pub mod color;
pub mod geometry;
pub mod palette;
pub mod policy;
pub mod ramp;
pub mod settings;

pub use appearance::{Appearance, BackgroundKind};
pub use classify::{
    BorderProfile, Orientation, RadiusKind, RoundStyle, Rounding, ShadowKind, StepperPosition, StyleFlags,
    TextDirection, WidgetRole, WidgetState, classify_border, classify_rounding, corner_radius, fill_shade,
};
pub use color::{Color, Shading, mid_color, shade, tint};
pub use geometry::{IntRect, ToolbarNeighbours, adjust_toolbar_button};
pub use palette::{PaletteOptions, PaletteSet, PaletteStore, ShadeMode, ThemeColors, palette_store};
pub use policy::ShadingPolicy;
pub use ramp::ShadeRamp;
pub use settings::{EngineSettings, SettingsError, SettingsResult};

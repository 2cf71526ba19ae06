//! Bevel Render Library
//!
//! Drawing surface abstraction, path construction and the panel compositor.
//! The optional Vello surface encodes primitives into a `vello::Scene`.

pub mod appearance;
pub mod background;
pub mod compositor;
pub mod decor;
pub mod path;
mod surface;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use appearance::{bevel_brush, shade_stops};
pub use background::fill_background;
pub use compositor::{DrawFlags, Etch, Glow, PanelOptions, draw_panel};
pub use decor::{LineStyle, draw_dots, draw_faded_line, draw_lines, draw_selection};
pub use surface::{DrawCommand, RecordingSurface, Surface};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;

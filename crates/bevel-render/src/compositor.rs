//! Panel compositor.
//!
//! [`draw_panel`] paints a bordered, bevelled rounded rectangle in layers,
//! back to front:
//!
//! 1. optional background pattern, clipped to the rounded outline
//! 2. bevel gradient fill
//! 3. optional outer glow
//! 4. optional etched edge
//! 5. border stroke and inner bevel lines
//!
//! Every layer stays inside the widget rectangle and the caller's clip. The
//! compositor keeps no state between calls.

use crate::appearance::bevel_brush;
use crate::background::fill_background;
use crate::path::{Half, PATH_TOLERANCE, half_path, radius_for, rounded_path, stroke_rect};
use crate::surface::Surface;
use bevel_core::appearance::{Appearance, BackgroundKind};
use bevel_core::classify::{BorderProfile, RadiusKind, RoundStyle, Rounding};
use bevel_core::color::{Color, Shading};
use bevel_core::geometry::IntRect;
use bevel_core::ramp::{DISABLED_BORDER, STD_BORDER, ShadeRamp};
use bitflags::bitflags;
use kurbo::{Affine, BezPath, Shape, Stroke};
use peniko::{Brush, Fill};

/// Opacity of the dark half of an etched edge.
pub const ETCH_TOP_ALPHA: f32 = 0.055;
/// Opacity of the light half of an etched edge.
pub const ETCH_BOTTOM_ALPHA: f32 = 0.1;
/// Opacity of a focus or mouse-over glow.
pub const GLOW_ALPHA: f32 = 0.65;
/// Opacity of the default button glow.
pub const DEF_BTN_GLOW_ALPHA: f32 = 0.5;
/// Opacity of a border blended into its background.
pub const BORDER_BLEND_ALPHA: f32 = 0.7;

/// Ramp slot of the light inner bevel line.
const BEVEL_LIGHT: usize = 0;
/// Ramp slot of the dark inner bevel line.
const BEVEL_DARK: usize = 4;

bitflags! {
    /// Modifiers for a panel draw.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DrawFlags: u16 {
        /// Draw the inner bevel lines of raised, sunken and light borders.
        const DRAW_INSIDE = 0x001;
        /// Blend the border into the background.
        const BLEND = 0x002;
        /// Reverse the bevel gradient.
        const SUNKEN = 0x004;
        /// Draw the border.
        const DO_BORDER = 0x008;
        /// The widget is laid out vertically.
        const VERTICAL = 0x010;
        /// Skip glow and etch.
        const HIDE_EFFECT = 0x020;
        /// The widget has keyboard focus.
        const HAS_FOCUS = 0x040;
    }
}

impl Default for DrawFlags {
    fn default() -> Self {
        DrawFlags::DO_BORDER | DrawFlags::DRAW_INSIDE
    }
}

/// A soft halo around the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    /// Glow of the default button, drawn fainter.
    pub default_button: bool,
}

impl Glow {
    pub fn alpha(&self) -> f32 {
        if self.default_button { DEF_BTN_GLOW_ALPHA } else { GLOW_ALPHA }
    }
}

/// A one pixel engraved edge around the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Etch {
    /// Light on the top-left instead of the bottom-right.
    pub raised: bool,
}

/// Options for [`draw_panel`].
#[derive(Debug, Clone, Copy)]
pub struct PanelOptions<'a> {
    pub appearance: Appearance,
    pub shading: Shading,
    pub round_style: RoundStyle,
    pub flags: DrawFlags,
    /// Pattern and colour drawn behind the bevel.
    pub background: Option<(BackgroundKind, Color)>,
    /// Drawn on the outermost pixel ring.
    pub glow: Option<Glow>,
    /// Drawn on the ring inside the glow, or the outermost ring without one.
    pub etch: Option<Etch>,
    /// Ramp whose border colour is used while focused.
    pub focus: Option<&'a ShadeRamp>,
    pub disabled: bool,
    /// Caller clip; drawing is limited to its intersection with the widget.
    pub clip: Option<IntRect>,
    pub alpha: f32,
}

impl Default for PanelOptions<'_> {
    fn default() -> Self {
        Self {
            appearance: Appearance::default(),
            shading: Shading::default(),
            round_style: RoundStyle::default(),
            flags: DrawFlags::default(),
            background: None,
            glow: None,
            etch: None,
            focus: None,
            disabled: false,
            clip: None,
            alpha: 1.0,
        }
    }
}

impl<'a> PanelOptions<'a> {
    /// Whether the gradient runs across a horizontal widget.
    pub fn horizontal(&self) -> bool {
        !self.flags.contains(DrawFlags::VERTICAL)
    }

    pub fn with_flags(mut self, flags: DrawFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_glow(mut self, glow: Glow) -> Self {
        self.glow = Some(glow);
        self
    }

    pub fn with_etch(mut self, raised: bool) -> Self {
        self.etch = Some(Etch { raised });
        self
    }

    pub fn with_focus(mut self, focus: &'a ShadeRamp) -> Self {
        self.focus = Some(focus);
        self.flags |= DrawFlags::HAS_FOCUS;
        self
    }

    pub fn with_clip(mut self, clip: IntRect) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn with_background(mut self, kind: BackgroundKind, color: Color) -> Self {
        self.background = Some((kind, color));
        self
    }
}

fn solid(color: Color, alpha: f32) -> Brush {
    Brush::Solid(color.with_alpha(alpha))
}

fn stroke_path(surface: &mut dyn Surface, brush: &Brush, path: &BezPath) {
    surface.stroke(&Stroke::new(1.0), Affine::IDENTITY, brush, None, path);
}

/// Draw a bordered, bevelled panel.
///
/// `base` is the fill colour and `ramp` supplies border and bevel colours.
/// An empty `rect`, or one entirely outside `options.clip`, draws nothing.
pub fn draw_panel(
    surface: &mut dyn Surface,
    rect: &IntRect,
    base: Color,
    ramp: &ShadeRamp,
    rounding: Rounding,
    border: BorderProfile,
    options: &PanelOptions,
) {
    if rect.is_empty() {
        log::trace!("Skipping empty panel {:?}", rect);
        return;
    }
    let visible = match options.clip {
        Some(clip) => match rect.intersect(&clip) {
            Some(visible) => visible,
            None => {
                log::trace!("Panel {:?} lies outside clip {:?}", rect, clip);
                return;
            }
        },
        None => *rect,
    };

    let flags = options.flags;
    let alpha = options.alpha.clamp(0.0, 1.0);
    let style = options.round_style;

    surface.push_clip(Affine::IDENTITY, &visible.to_rect().to_path(PATH_TOLERANCE));

    // Glow takes the outermost pixel and etch the next; the border moves in
    // past them. A ring is dropped when the rect has no room for it.
    let show_effect = !flags.contains(DrawFlags::HIDE_EFFECT);
    let mut border_rect = *rect;
    let mut take_ring = || {
        let ring = border_rect;
        if show_effect && !ring.inset(1).is_empty() {
            border_rect = ring.inset(1);
            Some(ring)
        } else {
            None
        }
    };
    let glow = options.glow.and_then(|glow| take_ring().map(|ring| (glow, ring)));
    let etch = options.etch.and_then(|etch| take_ring().map(|ring| (etch, ring)));
    let outer = border_rect.to_rect();

    if let Some((kind, color)) = options.background {
        let outline = rounded_path(outer, radius_for(style, RadiusKind::External, outer), rounding);
        surface.push_clip(Affine::IDENTITY, &outline);
        fill_background(surface, &border_rect, color, kind, options.shading, alpha);
        surface.pop_clip();
    }

    let do_border = flags.contains(DrawFlags::DO_BORDER);
    let fill_rect = if do_border { border_rect.inset(1) } else { border_rect };
    if !fill_rect.is_empty() {
        let area = fill_rect.to_rect();
        let kind = if do_border { RadiusKind::Internal } else { RadiusKind::External };
        let path = rounded_path(area, radius_for(style, kind, outer), rounding);
        let sunken = flags.contains(DrawFlags::SUNKEN) || border == BorderProfile::Sunken;
        let brush = bevel_brush(area, base, options.appearance, options.shading, options.horizontal(), sunken, alpha);
        surface.fill(Fill::NonZero, Affine::IDENTITY, &brush, None, &path);
    }

    if let Some((glow, ring)) = glow {
        let radius = radius_for(style, RadiusKind::Etch, ring.to_rect());
        let path = rounded_path(stroke_rect(&ring), radius, rounding);
        stroke_path(surface, &solid(glow.color, glow.alpha() * alpha), &path);
    }

    if let Some((etch, ring)) = etch {
        let edge = stroke_rect(&ring);
        let radius = radius_for(style, RadiusKind::Etch, ring.to_rect());
        let dark = solid(Color::BLACK, ETCH_TOP_ALPHA * alpha);
        let light = solid(Color::WHITE, ETCH_BOTTOM_ALPHA * alpha);
        let (top_left, bottom_right) = if etch.raised { (&light, &dark) } else { (&dark, &light) };
        stroke_path(surface, top_left, &half_path(edge, radius, rounding, Half::TopLeft));
        stroke_path(surface, bottom_right, &half_path(edge, radius, rounding, Half::BottomRight));
    }

    if do_border {
        let color = match options.focus {
            _ if options.disabled => ramp[DISABLED_BORDER],
            Some(focus) if flags.contains(DrawFlags::HAS_FOCUS) => focus[STD_BORDER],
            _ => ramp[STD_BORDER],
        };
        let border_alpha = if flags.contains(DrawFlags::BLEND) { alpha * BORDER_BLEND_ALPHA } else { alpha };
        let edge = stroke_rect(&border_rect);
        let path = rounded_path(edge, radius_for(style, RadiusKind::External, outer), rounding);
        stroke_path(surface, &solid(color, border_alpha), &path);

        let inner = border_rect.inset(1);
        if flags.contains(DrawFlags::DRAW_INSIDE) && border != BorderProfile::Flat && !inner.is_empty() {
            let light = solid(ramp[BEVEL_LIGHT], alpha);
            let dark = solid(ramp[BEVEL_DARK], alpha);
            let (top_left, bottom_right) = match border {
                BorderProfile::Sunken => (&dark, &light),
                BorderProfile::Light => (&light, &light),
                _ => (&light, &dark),
            };
            let edge = stroke_rect(&inner);
            let radius = radius_for(style, RadiusKind::Internal, outer);
            stroke_path(surface, top_left, &half_path(edge, radius, rounding, Half::TopLeft));
            stroke_path(surface, bottom_right, &half_path(edge, radius, rounding, Half::BottomRight));
        }
    }

    surface.pop_clip();
}

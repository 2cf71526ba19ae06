//! Decorative primitives: separators, grips and selections.

use crate::appearance::bevel_brush;
use crate::path::{PATH_TOLERANCE, radius_for, rounded_path, stroke_rect};
use crate::surface::Surface;
use bevel_core::appearance::Appearance;
use bevel_core::classify::{RadiusKind, RoundStyle, Rounding};
use bevel_core::color::{Color, Shading};
use bevel_core::geometry::IntRect;
use bevel_core::ramp::{STD_BORDER, ShadeRamp};
use kurbo::{Affine, BezPath, Rect, Shape, Stroke};
use peniko::{Brush, Fill, Gradient};

/// Fraction of a faded line spent fading in or out.
pub const FADE_SIZE: f32 = 0.4;
/// Distance between the starts of two grip dots.
pub const DOT_PERIOD: i32 = 4;
/// Pixels covered by one dot and its highlight.
const DOT_SIZE: i32 = 3;
/// Distance between the starts of two grip lines.
pub const LINE_PERIOD: i32 = 3;
/// Opacity of the selection fill.
pub const SELECTION_FILL_ALPHA: f32 = 0.45;

const LIGHT: usize = 0;
const DARK: usize = STD_BORDER;

/// How grip lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// Dark line with a light line below or right of it.
    #[default]
    Sunken,
    /// Dark line only.
    Flat,
    /// Dashed dark line.
    Dashes,
}

/// Draw a one pixel separator along the first row (or column) of `rect`.
///
/// The ends fade to transparent when `fade_start` / `fade_end` are set.
pub fn draw_faded_line(
    surface: &mut dyn Surface,
    rect: &IntRect,
    color: Color,
    horizontal: bool,
    fade_start: bool,
    fade_end: bool,
    alpha: f32,
) {
    if rect.is_empty() {
        return;
    }
    let area = rect.to_rect();
    let (p0, p1) = if horizontal {
        let y = area.y0 + 0.5;
        ((area.x0, y), (area.x1, y))
    } else {
        let x = area.x0 + 0.5;
        ((x, area.y0), (x, area.y1))
    };

    let solid = color.with_alpha(alpha);
    let clear = color.with_alpha(0.0);
    let gradient = Gradient::new_linear(p0, p1).with_stops([
        (0.0, if fade_start { clear } else { solid }),
        (FADE_SIZE, solid),
        (1.0 - FADE_SIZE, solid),
        (1.0, if fade_end { clear } else { solid }),
    ]);

    let mut path = BezPath::new();
    path.move_to(p0);
    path.line_to(p1);
    surface.stroke(&Stroke::new(1.0), Affine::IDENTITY, &Brush::Gradient(gradient), None, &path);
}

/// First offset and how many items of `size` repeating every `period` fit
/// centred in `length`.
fn centre_run(length: i32, count: usize, period: i32, size: i32) -> (i32, usize) {
    if length < size {
        return (0, 0);
    }
    let fits = ((length - size) / period + 1) as usize;
    let count = count.min(fits);
    if count == 0 {
        return (0, 0);
    }
    let span = (count as i32 - 1) * period + size;
    ((length - span) / 2, count)
}

fn fill_pixels(surface: &mut dyn Surface, brush: &Brush, rect: Rect) {
    surface.fill(Fill::NonZero, Affine::IDENTITY, brush, None, &rect.to_path(PATH_TOLERANCE));
}

/// Draw up to `count` grip dots centred in `rect`, laid out along the
/// horizontal axis when `horizontal` is set.
pub fn draw_dots(surface: &mut dyn Surface, rect: &IntRect, ramp: &ShadeRamp, horizontal: bool, count: usize, alpha: f32) {
    let (along, across) = if horizontal { (rect.width, rect.height) } else { (rect.height, rect.width) };
    if rect.is_empty() || across < DOT_SIZE {
        return;
    }
    let (start, count) = centre_run(along, count, DOT_PERIOD, DOT_SIZE);
    let cross = (across - DOT_SIZE) / 2;
    let light = Brush::Solid(ramp[LIGHT].with_alpha(alpha));
    let dark = Brush::Solid(ramp[DARK].with_alpha(alpha));

    for i in 0..count as i32 {
        let offset = start + i * DOT_PERIOD;
        let (x, y) = if horizontal { (rect.x + offset, rect.y + cross) } else { (rect.x + cross, rect.y + offset) };
        let (x, y) = (x as f64, y as f64);
        fill_pixels(surface, &light, Rect::new(x + 1.0, y + 1.0, x + 3.0, y + 3.0));
        fill_pixels(surface, &dark, Rect::new(x, y, x + 2.0, y + 2.0));
    }
}

/// Draw up to `count` grip lines centred in `rect`.
///
/// Horizontal lines span the width of `rect` and stack downwards; vertical
/// lines span its height and stack rightwards.
pub fn draw_lines(
    surface: &mut dyn Surface,
    rect: &IntRect,
    ramp: &ShadeRamp,
    horizontal: bool,
    count: usize,
    style: LineStyle,
    alpha: f32,
) {
    if rect.is_empty() {
        return;
    }
    let across = if horizontal { rect.height } else { rect.width };
    let size = if style == LineStyle::Sunken { 2 } else { 1 };
    let (start, count) = centre_run(across, count, LINE_PERIOD, size);
    let area = rect.to_rect();
    let light = Brush::Solid(ramp[LIGHT].with_alpha(alpha));
    let dark = Brush::Solid(ramp[DARK].with_alpha(alpha));
    let stroke = match style {
        LineStyle::Dashes => Stroke::new(1.0).with_dashes(0.0, [2.0, 2.0]),
        _ => Stroke::new(1.0),
    };

    let line = |offset: i32| {
        let mut path = BezPath::new();
        if horizontal {
            let y = (rect.y + offset) as f64 + 0.5;
            path.move_to((area.x0 + 0.5, y));
            path.line_to((area.x1 - 0.5, y));
        } else {
            let x = (rect.x + offset) as f64 + 0.5;
            path.move_to((x, area.y0 + 0.5));
            path.line_to((x, area.y1 - 0.5));
        }
        path
    };

    for i in 0..count as i32 {
        let offset = start + i * LINE_PERIOD;
        surface.stroke(&stroke, Affine::IDENTITY, &dark, None, &line(offset));
        if style == LineStyle::Sunken {
            surface.stroke(&stroke, Affine::IDENTITY, &light, None, &line(offset + 1));
        }
    }
}

/// Draw a selection highlight: a translucent gradient with a rounded border.
#[allow(clippy::too_many_arguments)]
pub fn draw_selection(
    surface: &mut dyn Surface,
    rect: &IntRect,
    color: Color,
    shading: Shading,
    style: RoundStyle,
    round: Rounding,
    horizontal: bool,
    alpha: f32,
) {
    if rect.is_empty() {
        log::trace!("Skipping empty selection {:?}", rect);
        return;
    }
    let area = rect.to_rect();
    let radius = radius_for(style, RadiusKind::Selection, area);

    let brush = bevel_brush(area, color, Appearance::SoftGradient, shading, horizontal, false, alpha * SELECTION_FILL_ALPHA);
    surface.fill(Fill::NonZero, Affine::IDENTITY, &brush, None, &rounded_path(area, radius, round));

    let border = rounded_path(stroke_rect(rect), radius, round);
    surface.stroke(&Stroke::new(1.0), Affine::IDENTITY, &Brush::Solid(color.with_alpha(alpha)), None, &border);
}

//! Gradient definitions for each appearance.

use bevel_core::appearance::Appearance;
use bevel_core::color::{Color, Shading, shade};
use kurbo::{Point, Rect};
use peniko::{Brush, ColorStop, Gradient};

/// A gradient stop: position along the axis and shade factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeStop {
    pub pos: f32,
    pub factor: f64,
}

const fn stop(pos: f32, factor: f64) -> ShadeStop {
    ShadeStop { pos, factor }
}

const FLAT: &[ShadeStop] = &[stop(0.0, 1.0), stop(1.0, 1.0)];
const SOFT_GRADIENT: &[ShadeStop] = &[stop(0.0, 1.04), stop(1.0, 0.98)];
const GRADIENT: &[ShadeStop] = &[stop(0.0, 1.08), stop(1.0, 0.94)];
const HARSH: &[ShadeStop] = &[stop(0.0, 1.2), stop(1.0, 0.85)];
const INVERTED: &[ShadeStop] = &[stop(0.0, 0.93), stop(1.0, 1.04)];
const DARKEN: &[ShadeStop] = &[stop(0.0, 1.0), stop(1.0, 0.92)];
const DULL_GLASS: &[ShadeStop] = &[stop(0.0, 1.05), stop(0.499, 0.984), stop(0.5, 0.941), stop(1.0, 1.0)];
const SHINY_GLASS: &[ShadeStop] = &[stop(0.0, 1.2), stop(0.499, 0.984), stop(0.5, 0.917), stop(1.0, 1.0)];
const AGUA: &[ShadeStop] = &[stop(0.0, 1.4), stop(0.6, 1.0), stop(1.0, 0.92)];
const BEVELLED: &[ShadeStop] = &[stop(0.0, 1.05), stop(0.1, 1.02), stop(0.9, 0.996), stop(1.0, 0.95)];

/// Shade stops for `appearance`, ordered by position.
pub fn shade_stops(appearance: Appearance) -> &'static [ShadeStop] {
    match appearance {
        Appearance::Flat | Appearance::Raised | Appearance::Fade => FLAT,
        Appearance::SoftGradient => SOFT_GRADIENT,
        Appearance::Gradient => GRADIENT,
        Appearance::Harsh => HARSH,
        Appearance::Inverted => INVERTED,
        Appearance::Darken => DARKEN,
        Appearance::DullGlass => DULL_GLASS,
        Appearance::ShinyGlass => SHINY_GLASS,
        Appearance::Agua => AGUA,
        Appearance::Bevelled => BEVELLED,
    }
}

/// Whether the appearance is drawn as a radial gradient.
pub fn is_radial(appearance: Appearance) -> bool {
    appearance == Appearance::Agua
}

/// Brush for a bevelled fill of `rect`.
///
/// Each stop is `shade(base, factor, shading)`, the same derivation
/// `ShadeRamp::generate` uses for its slots, so passing the ramp's base and
/// its policy's shading keeps the gradient consistent with the ramp.
/// Horizontal widgets shade from top to bottom, vertical ones from left to
/// right. Sunken fills run the stops in reverse.
pub fn bevel_brush(
    rect: Rect,
    base: Color,
    appearance: Appearance,
    shading: Shading,
    horizontal: bool,
    sunken: bool,
    alpha: f32,
) -> Brush {
    let stops = shade_stops(appearance);
    if appearance.is_flat() {
        return Brush::Solid(base.with_alpha(alpha));
    }

    let mut color_stops: Vec<ColorStop> = stops
        .iter()
        .map(|s| {
            let pos = if sunken { 1.0 - s.pos } else { s.pos };
            ColorStop::from((pos, shade(base, s.factor, shading).with_alpha(alpha)))
        })
        .collect();
    if sunken {
        color_stops.reverse();
    }

    let gradient = if is_radial(appearance) {
        let center = Point::new(rect.center().x, rect.y0);
        let radius = rect.width().max(rect.height()) as f32;
        Gradient::new_radial(center, radius)
    } else if horizontal {
        Gradient::new_linear((rect.x0, rect.y0), (rect.x0, rect.y1))
    } else {
        Gradient::new_linear((rect.x0, rect.y0), (rect.x1, rect.y0))
    };
    Brush::Gradient(gradient.with_stops(color_stops.as_slice()))
}

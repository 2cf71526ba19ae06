//! Window and panel background patterns.

use crate::path::PATH_TOLERANCE;
use crate::surface::Surface;
use bevel_core::appearance::BackgroundKind;
use bevel_core::color::{Color, Shading, shade};
use bevel_core::geometry::IntRect;
use kurbo::{Affine, Circle, Rect, Shape, Stroke};
use peniko::{Brush, Fill, Gradient};

/// Distance between the starts of two stripes.
pub const STRIPE_PERIOD: i32 = 4;
/// Height of a stripe.
pub const STRIPE_WIDTH: i32 = 2;
/// Shade applied to stripes.
const STRIPE_SHADE: f64 = 0.95;
/// Shade at the top and bottom of a gradient background.
const GRADIENT_TOP: f64 = 1.03;
const GRADIENT_BOTTOM: f64 = 0.97;
/// Opacity of decorative rings.
const RING_ALPHA: f32 = 0.12;
const RING_WIDTH: f64 = 2.0;
const RING_COUNT: usize = 3;

/// Fill `rect` with a background pattern of `color`.
///
/// Does nothing for an empty rectangle. The pattern never leaves `rect`.
pub fn fill_background(
    surface: &mut dyn Surface,
    rect: &IntRect,
    color: Color,
    kind: BackgroundKind,
    shading: Shading,
    alpha: f32,
) {
    if rect.is_empty() {
        return;
    }
    let area = rect.to_rect();
    let path = area.to_path(PATH_TOLERANCE);

    match kind {
        BackgroundKind::Flat => {
            surface.fill(Fill::NonZero, Affine::IDENTITY, &Brush::Solid(color.with_alpha(alpha)), None, &path);
        }
        BackgroundKind::Gradient => {
            let top = shade(color, GRADIENT_TOP, shading).with_alpha(alpha);
            let bottom = shade(color, GRADIENT_BOTTOM, shading).with_alpha(alpha);
            let gradient = Gradient::new_linear((area.x0, area.y0), (area.x0, area.y1)).with_stops([(0.0, top), (1.0, bottom)]);
            surface.fill(Fill::NonZero, Affine::IDENTITY, &Brush::Gradient(gradient), None, &path);
        }
        BackgroundKind::Striped => {
            surface.fill(Fill::NonZero, Affine::IDENTITY, &Brush::Solid(color.with_alpha(alpha)), None, &path);
            let stripe = Brush::Solid(shade(color, STRIPE_SHADE, shading).with_alpha(alpha));
            let mut y = rect.y;
            while y < rect.bottom() {
                let height = STRIPE_WIDTH.min(rect.bottom() - y);
                let band = Rect::new(area.x0, y as f64, area.x1, (y + height) as f64);
                surface.fill(Fill::NonZero, Affine::IDENTITY, &stripe, None, &band.to_path(PATH_TOLERANCE));
                y += STRIPE_PERIOD;
            }
        }
        BackgroundKind::Rings => {
            surface.fill(Fill::NonZero, Affine::IDENTITY, &Brush::Solid(color.with_alpha(alpha)), None, &path);
            let max_radius = area.width().min(area.height()) / 2.0 - RING_WIDTH;
            if max_radius <= 0.0 {
                return;
            }
            let ring = Brush::Solid(Color::WHITE.with_alpha(RING_ALPHA * alpha));
            let stroke = Stroke::new(RING_WIDTH);
            for i in 0..RING_COUNT {
                let radius = max_radius * (i + 1) as f64 / RING_COUNT as f64;
                let circle = Circle::new(area.center(), radius);
                surface.stroke(&stroke, Affine::IDENTITY, &ring, None, &circle.to_path(PATH_TOLERANCE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn test_empty_is_noop() {
        let mut surface = RecordingSurface::new();
        fill_background(&mut surface, &IntRect::new(0, 0, 0, 10), Color::WHITE, BackgroundKind::Striped, Shading::Hsv, 1.0);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_flat_and_gradient() {
        let rect = IntRect::new(0, 0, 20, 20);
        let mut surface = RecordingSurface::new();
        fill_background(&mut surface, &rect, Color::WHITE, BackgroundKind::Flat, Shading::Hsv, 1.0);
        fill_background(&mut surface, &rect, Color::WHITE, BackgroundKind::Gradient, Shading::Hsv, 1.0);
        assert_eq!(surface.paint_count(), 2);
    }

    #[test]
    fn test_stripes() {
        let rect = IntRect::new(0, 0, 20, 10);
        let mut surface = RecordingSurface::new();
        fill_background(&mut surface, &rect, Color::grey(40000), BackgroundKind::Striped, Shading::Hsv, 1.0);
        // base fill plus stripes at y = 0, 4, 8
        assert_eq!(surface.paint_count(), 4);
    }

    #[test]
    fn test_pattern_stays_inside() {
        let rect = IntRect::new(5, 5, 40, 30);
        for kind in [BackgroundKind::Flat, BackgroundKind::Gradient, BackgroundKind::Striped, BackgroundKind::Rings] {
            let mut surface = RecordingSurface::new();
            fill_background(&mut surface, &rect, Color::grey(40000), kind, Shading::Hsv, 1.0);
            let area = rect.to_rect();
            for cmd in surface.commands() {
                let b = cmd.bounds().unwrap();
                assert!(b.x0 >= area.x0 - 1e-6 && b.y0 >= area.y0 - 1e-6, "{kind:?}");
                assert!(b.x1 <= area.x1 + 1e-6 && b.y1 <= area.y1 + 1e-6, "{kind:?}");
            }
        }
    }
}

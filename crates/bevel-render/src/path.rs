//! Path construction for rounded widget outlines.

use bevel_core::classify::{RadiusKind, RoundStyle, Rounding, corner_radius};
use bevel_core::geometry::IntRect;
use kurbo::{BezPath, Rect, RoundedRect, RoundedRectRadii, Shape};

/// Tolerance used when flattening shapes into paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Rectangle whose 1px stroke covers exactly the outer pixels of `rect`.
pub fn stroke_rect(rect: &IntRect) -> Rect {
    let r = rect.to_rect();
    Rect::new(r.x0 + 0.5, r.y0 + 0.5, r.x1 - 0.5, r.y1 - 0.5)
}

fn radii(radius: f64, round: Rounding) -> RoundedRectRadii {
    let r = |corner| if round.contains(corner) { radius } else { 0.0 };
    RoundedRectRadii::new(
        r(Rounding::TOP_LEFT),
        r(Rounding::TOP_RIGHT),
        r(Rounding::BOTTOM_RIGHT),
        r(Rounding::BOTTOM_LEFT),
    )
}

/// Outline of `rect` with the corners in `round` rounded by `radius`.
pub fn rounded_path(rect: Rect, radius: f64, round: Rounding) -> BezPath {
    let radius = radius.min(rect.width().min(rect.height()) / 2.0).max(0.0);
    RoundedRect::from_rect(rect, radii(radius, round)).to_path(PATH_TOLERANCE)
}

/// Radius for a widget outline of the given kind, sized to `rect`.
pub fn radius_for(style: RoundStyle, kind: RadiusKind, rect: Rect) -> f64 {
    corner_radius(style, kind, rect.width(), rect.height())
}

/// Which half of an outline to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Left and top edges.
    TopLeft,
    /// Right and bottom edges.
    BottomRight,
}

/// Open path along one half of a rounded outline, used for bevel lines.
pub fn half_path(rect: Rect, radius: f64, round: Rounding, half: Half) -> BezPath {
    let radius = radius.min(rect.width().min(rect.height()) / 2.0).max(0.0);
    let r = |corner| if round.contains(corner) { radius } else { 0.0 };
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
    let mut path = BezPath::new();

    match half {
        Half::TopLeft => {
            let tl = r(Rounding::TOP_LEFT);
            path.move_to((x0, y1 - r(Rounding::BOTTOM_LEFT)));
            path.line_to((x0, y0 + tl));
            if tl > 0.0 {
                path.quad_to((x0, y0), (x0 + tl, y0));
            }
            path.line_to((x1 - r(Rounding::TOP_RIGHT), y0));
        }
        Half::BottomRight => {
            let br = r(Rounding::BOTTOM_RIGHT);
            path.move_to((x1, y0 + r(Rounding::TOP_RIGHT)));
            path.line_to((x1, y1 - br));
            if br > 0.0 {
                path.quad_to((x1, y1), (x1 - br, y1));
            }
            path.line_to((x0 + r(Rounding::BOTTOM_LEFT), y1));
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_rect() {
        let r = stroke_rect(&IntRect::new(0, 0, 10, 4));
        assert_eq!(r, Rect::new(0.5, 0.5, 9.5, 3.5));
    }

    #[test]
    fn test_rounded_path_bounds() {
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
        let path = rounded_path(rect, 4.0, Rounding::ALL);
        let bbox = path.bounding_box();
        assert!((bbox.x0 - 0.0).abs() < 1e-6);
        assert!((bbox.y1 - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_square_corners_contain_corner_point() {
        let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        let square = rounded_path(rect, 5.0, Rounding::empty());
        let round = rounded_path(rect, 5.0, Rounding::ALL);
        assert!(square.contains((0.2, 0.2).into()));
        assert!(!round.contains((0.2, 0.2).into()));
    }

    #[test]
    fn test_half_paths_stay_inside() {
        let rect = Rect::new(0.5, 0.5, 19.5, 9.5);
        for half in [Half::TopLeft, Half::BottomRight] {
            let bbox = half_path(rect, 3.0, Rounding::ALL, half).bounding_box();
            assert!(bbox.x0 >= rect.x0 - 1e-9 && bbox.x1 <= rect.x1 + 1e-9);
            assert!(bbox.y0 >= rect.y0 - 1e-9 && bbox.y1 <= rect.y1 + 1e-9);
        }
    }

    #[test]
    fn test_radius_for() {
        let rect = Rect::new(0.0, 0.0, 6.0, 30.0);
        assert_eq!(radius_for(RoundStyle::Extra, RadiusKind::External, rect), 3.0);
    }
}

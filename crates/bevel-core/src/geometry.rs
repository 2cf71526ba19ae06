//! Integer widget geometry.

use crate::classify::{Orientation, Rounding};
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// An integer rectangle as supplied by the widget toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Shrink the rectangle so it lies inside `container`.
    ///
    /// Width and height never become negative.
    pub fn constrain(&mut self, container: &IntRect) {
        if self.x < container.x {
            self.width = self.width.saturating_sub(container.x.saturating_sub(self.x));
            self.x = container.x;
        }
        if self.y < container.y {
            self.height = self.height.saturating_sub(container.y.saturating_sub(self.y));
            self.y = container.y;
        }
        if self.right() > container.right() {
            self.width = self.width.saturating_sub(self.right().saturating_sub(container.right()));
        }
        if self.bottom() > container.bottom() {
            self.height = self.height.saturating_sub(self.bottom().saturating_sub(container.bottom()));
        }
        self.width = self.width.max(0);
        self.height = self.height.max(0);
    }

    /// Overlapping part of two rectangles, if any.
    pub fn intersect(&self, other: &IntRect) -> Option<IntRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = IntRect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y));
        (!rect.is_empty()).then_some(rect)
    }

    /// Shrink by `amount` on every side (grow when negative).
    pub const fn inset(&self, amount: i32) -> IntRect {
        let twice = amount.saturating_mul(2);
        IntRect::new(
            self.x.saturating_add(amount),
            self.y.saturating_add(amount),
            self.width.saturating_sub(twice),
            self.height.saturating_sub(twice),
        )
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x as f64, self.y as f64, self.right() as f64, self.bottom() as f64)
    }
}

/// Neighbourhood of a button on a toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolbarNeighbours {
    /// The previous item is a tool button.
    pub prev_is_button: bool,
    /// The next item is a tool button.
    pub next_is_button: bool,
    /// The button is part of a menu tool button.
    pub menu_button: bool,
    /// The button is the arrow half of a menu tool button.
    pub arrow_button: bool,
}

/// Merge a toolbar button visually with its neighbours.
///
/// Extends `rect` along the toolbar axis toward neighbouring tool buttons so
/// grouped buttons share borders, and returns the rounding for the group.
/// A plain button without neighbouring tool buttons keeps `rect` and `round`.
pub fn adjust_toolbar_button(
    rect: &mut IntRect,
    round: Rounding,
    orientation: Orientation,
    neighbours: ToolbarNeighbours,
) -> Rounding {
    let horizontal = orientation == Orientation::Horizontal;
    let leading = if horizontal { Rounding::LEFT } else { Rounding::TOP };
    let trailing = if horizontal { Rounding::RIGHT } else { Rounding::BOTTOM };
    let round_start = !neighbours.prev_is_button;
    let round_end = !neighbours.next_is_button;

    // (rounding, position delta, size delta)
    let (result, shift, grow) = if neighbours.arrow_button {
        match (round_start, round_end) {
            (true, true) | (false, true) => (trailing, -4, 4),
            _ => (Rounding::empty(), -4, 8),
        }
    } else if neighbours.menu_button {
        match (round_start, round_end) {
            (true, _) => (leading, 0, 4),
            _ => (Rounding::empty(), -4, 8),
        }
    } else {
        match (round_start, round_end) {
            (true, true) => return round,
            (true, false) => (leading, 0, 4),
            (false, true) => (trailing, -4, 4),
            (false, false) => (Rounding::empty(), -4, 8),
        }
    };

    if horizontal {
        rect.x = rect.x.saturating_add(shift);
        rect.width = rect.width.saturating_add(grow);
    } else {
        rect.y = rect.y.saturating_add(shift);
        rect.height = rect.height.saturating_add(grow);
    }
    result
}

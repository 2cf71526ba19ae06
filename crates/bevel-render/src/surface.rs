//! Drawing surface abstraction.

use kurbo::{Affine, BezPath, Rect, Shape, Stroke};
use peniko::{Brush, Fill};

/// Target of the compositor's path primitives.
///
/// Methods take `&BezPath` so the trait stays object-safe. The surface owns
/// its own lifetime; the compositor never creates or drops one.
pub trait Surface {
    /// Fill a shape with the given brush.
    fn fill(&mut self, fill_rule: Fill, transform: Affine, brush: &Brush, brush_transform: Option<Affine>, shape: &BezPath);

    /// Stroke a shape with the given brush.
    fn stroke(&mut self, style: &Stroke, transform: Affine, brush: &Brush, brush_transform: Option<Affine>, shape: &BezPath);

    /// Restrict subsequent drawing to `shape` until the matching [`Surface::pop_clip`].
    fn push_clip(&mut self, transform: Affine, shape: &BezPath);

    /// Remove the most recent clip.
    fn pop_clip(&mut self);
}

/// A primitive issued against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        fill_rule: Fill,
        transform: Affine,
        brush: Brush,
        shape: BezPath,
    },
    Stroke {
        width: f64,
        transform: Affine,
        brush: Brush,
        shape: BezPath,
    },
    PushClip {
        transform: Affine,
        shape: BezPath,
    },
    PopClip,
}

impl DrawCommand {
    /// Area touched by the command, including half the stroke width.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            DrawCommand::Fill { transform, shape, .. } | DrawCommand::PushClip { transform, shape } => {
                Some(transform.transform_rect_bbox(shape.bounding_box()))
            }
            DrawCommand::Stroke { width, transform, shape, .. } => {
                Some(transform.transform_rect_bbox(shape.bounding_box()).inflate(width / 2.0, width / 2.0))
            }
            DrawCommand::PopClip => None,
        }
    }

    /// Whether the command paints pixels (fill or stroke).
    pub fn is_paint(&self) -> bool {
        matches!(self, DrawCommand::Fill { .. } | DrawCommand::Stroke { .. })
    }
}

/// A surface that records every primitive it receives.
///
/// Used by tests and by the inspector to examine what a draw call produced.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
    max_clip_depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Total number of recorded primitives, clips included.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of fills and strokes.
    pub fn paint_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_paint()).count()
    }

    /// Clips pushed but not yet popped.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Deepest clip nesting seen so far.
    pub fn max_clip_depth(&self) -> usize {
        self.max_clip_depth
    }

    /// Forget all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
        self.max_clip_depth = 0;
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        self.clip_depth = 0;
        self.max_clip_depth = 0;
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn fill(&mut self, fill_rule: Fill, transform: Affine, brush: &Brush, _brush_transform: Option<Affine>, shape: &BezPath) {
        self.commands.push(DrawCommand::Fill {
            fill_rule,
            transform,
            brush: brush.clone(),
            shape: shape.clone(),
        });
    }

    fn stroke(&mut self, style: &Stroke, transform: Affine, brush: &Brush, _brush_transform: Option<Affine>, shape: &BezPath) {
        self.commands.push(DrawCommand::Stroke {
            width: style.width,
            transform,
            brush: brush.clone(),
            shape: shape.clone(),
        });
    }

    fn push_clip(&mut self, transform: Affine, shape: &BezPath) {
        self.clip_depth += 1;
        self.max_clip_depth = self.max_clip_depth.max(self.clip_depth);
        self.commands.push(DrawCommand::PushClip { transform, shape: shape.clone() });
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            log::warn!("pop_clip without a matching push_clip");
            return;
        }
        self.clip_depth -= 1;
        self.commands.push(DrawCommand::PopClip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    #[test]
    fn test_recording() {
        let mut surface = RecordingSurface::new();
        let path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);
        let brush = Brush::Solid(Color::from_rgb8(255, 0, 0));

        surface.push_clip(Affine::IDENTITY, &path);
        surface.fill(Fill::NonZero, Affine::IDENTITY, &brush, None, &path);
        surface.stroke(&Stroke::new(2.0), Affine::IDENTITY, &brush, None, &path);
        surface.pop_clip();

        assert_eq!(surface.len(), 4);
        assert_eq!(surface.paint_count(), 2);
        assert_eq!(surface.clip_depth(), 0);
        assert_eq!(surface.max_clip_depth(), 1);
    }

    #[test]
    fn test_stroke_bounds_include_half_width() {
        let cmd = DrawCommand::Stroke {
            width: 2.0,
            transform: Affine::IDENTITY,
            brush: Brush::Solid(Color::from_rgb8(0, 0, 0)),
            shape: Rect::new(1.0, 1.0, 9.0, 9.0).to_path(0.1),
        };
        assert_eq!(cmd.bounds(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(DrawCommand::PopClip.bounds(), None);
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut surface = RecordingSurface::new();
        surface.pop_clip();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_take_and_clear() {
        let mut surface = RecordingSurface::new();
        surface.push_clip(Affine::IDENTITY, &Rect::new(0.0, 0.0, 1.0, 1.0).to_path(0.1));
        let taken = surface.take();
        assert_eq!(taken.len(), 1);
        assert!(surface.is_empty());
        assert_eq!(surface.clip_depth(), 0);
    }
}

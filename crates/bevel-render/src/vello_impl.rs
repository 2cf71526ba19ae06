//! Vello-backed drawing surface.

use crate::surface::Surface;
use kurbo::{Affine, BezPath, Stroke};
use peniko::{Brush, Fill, Mix};
use vello::Scene;

/// A [`Surface`] that encodes primitives into a Vello scene.
#[derive(Default)]
pub struct VelloSurface {
    scene: Scene,
    layers: usize,
}

impl VelloSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        if self.layers > 0 {
            log::warn!("Taking scene with {} unclosed clip layers", self.layers);
            self.layers = 0;
        }
        std::mem::take(&mut self.scene)
    }

    pub fn reset(&mut self) {
        self.scene.reset();
        self.layers = 0;
    }
}

impl Surface for VelloSurface {
    fn fill(&mut self, fill_rule: Fill, transform: Affine, brush: &Brush, brush_transform: Option<Affine>, shape: &BezPath) {
        self.scene.fill(fill_rule, transform, brush, brush_transform, shape);
    }

    fn stroke(&mut self, style: &Stroke, transform: Affine, brush: &Brush, brush_transform: Option<Affine>, shape: &BezPath) {
        self.scene.stroke(style, transform, brush, brush_transform, shape);
    }

    fn push_clip(&mut self, transform: Affine, shape: &BezPath) {
        self.scene.push_layer(Mix::Clip, 1.0, transform, shape);
        self.layers += 1;
    }

    fn pop_clip(&mut self) {
        if self.layers == 0 {
            log::warn!("pop_clip without a matching push_clip");
            return;
        }
        self.scene.pop_layer();
        self.layers -= 1;
    }
}

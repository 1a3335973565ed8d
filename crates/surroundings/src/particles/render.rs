//! Host-side vertex output

use crate::foundation::math::DVec3;

/// Builder-style vertex sink provided by the host renderer
///
/// A vertex is written as `vertex -> uv -> color -> uv2 -> end_vertex`.
pub trait VertexConsumer {
    /// Start a vertex at a camera-relative position
    fn vertex(&mut self, x: f64, y: f64, z: f64) -> &mut dyn VertexConsumer;

    /// Texture coordinates
    fn uv(&mut self, u: f32, v: f32) -> &mut dyn VertexConsumer;

    /// RGBA color
    fn color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) -> &mut dyn VertexConsumer;

    /// Packed light-map coordinates
    fn uv2(&mut self, sky: i32, block: i32) -> &mut dyn VertexConsumer;

    /// Finish the current vertex
    fn end_vertex(&mut self);
}

/// Active camera for the frame being rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: DVec3,
}

impl Camera {
    /// Create a camera at `position`
    pub fn new(position: DVec3) -> Self {
        Self { position }
    }
}

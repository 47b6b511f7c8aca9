//! Core types flowing through the render pipeline

use super::math::{Vec2, Vec4};

/// A triangle: three indices into a mesh's vertex array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub v0: usize,
    pub v1: usize,
    pub v2: usize,
}

impl Triangle {
    pub fn new(v0: usize, v1: usize, v2: usize) -> Self {
        Self { v0, v1, v2 }
    }
}

/// Three homogeneous points after the view/projection transform.
/// Transient: produced and consumed within one frame's pipeline call.
pub type ClipTriangle = [Vec4; 3];

/// A screen-space triangle plus its painter's-algorithm sort key.
/// Depth is the mean of the three post-divide z values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec2; 3],
    pub depth: f32,
}

/// Sink for the ordered screen triangles of a frame.
///
/// Implemented by the presentation layer (macroquad in the app shell,
/// plain collectors in tests). Triangles arrive back-to-front; a surface
/// that fills them in arrival order gets painter's-algorithm occlusion.
pub trait DrawSurface {
    fn fill_triangle(&mut self, triangle: &ScreenTriangle);
}

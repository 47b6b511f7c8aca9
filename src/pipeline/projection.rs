//! Perspective projection and viewport matrices
//!
//! Both matrices are fixed for the session; changing resolution or FOV
//! means building a new `Projection`.

use super::math::Mat4;

/// Session-fixed projection state
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    projection: Mat4,
    viewport: Mat4,
}

impl Projection {
    /// Build from a horizontal FOV (radians), near/far planes, and the
    /// target resolution in pixels. The vertical FOV is derived from the
    /// aspect ratio.
    pub fn new(h_fov: f32, near: f32, far: f32, width: usize, height: usize) -> Self {
        let v_fov = h_fov * (height as f32 / width as f32);

        let right = (h_fov * 0.5).tan();
        let left = -right;
        let top = (v_fov * 0.5).tan();
        let bottom = -top;

        let m00 = 2.0 / (right - left);
        let m11 = 2.0 / (top - bottom);
        let m22 = (far + near) / (far - near);
        let m32 = -2.0 * near * far / (far - near);

        // m23 = 1 moves view-space depth into w for the later divide
        let projection = Mat4::from_rows([
            [m00, 0.0, 0.0, 0.0],
            [0.0, m11, 0.0, 0.0],
            [0.0, 0.0, m22, 1.0],
            [0.0, 0.0, m32, 0.0],
        ]);

        let half_w = width as f32 * 0.5;
        let half_h = height as f32 * 0.5;

        // NDC [-1,1] to pixels: y flipped (screen origin is top-left),
        // centered on half resolution
        let viewport = Mat4::from_rows([
            [half_w, 0.0, 0.0, 0.0],
            [0.0, -half_h, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [half_w, half_h, 0.0, 1.0],
        ]);

        Self { projection, viewport }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn viewport_matrix(&self) -> Mat4 {
        self.viewport
    }
}

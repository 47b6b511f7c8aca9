//! First-person camera: position plus yaw/pitch angles
//!
//! The view matrix is derived on demand from the angles; nothing is
//! cached, so look and movement updates can interleave freely between
//! frames.

use std::f32::consts::FRAC_PI_2;
use super::math::{Mat4, Vec3};

/// Discrete movement request, axis-aligned in camera space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Camera state: world position and accumulated look angles (roll unused)
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Current orthonormal basis: canonical axes rotated by
    /// `rotate_x(pitch) * rotate_y(yaw)`. The composition order is load
    /// bearing; swapping it changes what "looking up while turned" means.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let rotation = Mat4::rotate_x(self.pitch) * Mat4::rotate_y(self.yaw);
        let right = (Vec3::RIGHT.to_direction() * rotation).xyz();
        let up = (Vec3::UP.to_direction() * rotation).xyz();
        let forward = (Vec3::FORWARD.to_direction() * rotation).xyz();
        (right, up, forward)
    }

    /// Translate along the current camera axes by a constant step.
    ///
    /// The step is per invocation, not scaled by elapsed time: callers
    /// invoke once per input tick, so movement rate follows the tick
    /// rate. Intentional for this engine; do not frame-time correct here.
    pub fn apply_movement(&mut self, direction: MoveDirection, speed: f32) {
        let (right, up, forward) = self.basis();
        let step = match direction {
            MoveDirection::Forward => forward,
            MoveDirection::Backward => -forward,
            MoveDirection::Right => right,
            MoveDirection::Left => -right,
            MoveDirection::Up => up,
            MoveDirection::Down => -up,
        };
        self.position = self.position + step * speed;
    }

    /// Accumulate look deltas. Yaw is unconstrained; pitch clamps to
    /// straight up/down to avoid flipping over the poles.
    pub fn apply_look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// World-to-view transform: `translate(-position)` followed by the
    /// basis rotation (columns are right/up/forward). Pure in
    /// (yaw, pitch, position).
    pub fn view_matrix(&self) -> Mat4 {
        let (right, up, forward) = self.basis();
        Mat4::translate(-self.position) * Mat4::from_basis(right, up, forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::math::Vec4;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    #[test]
    fn test_pitch_clamps_at_poles() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.apply_look(0.0, 10.0);
        assert!((cam.pitch - FRAC_PI_2).abs() < EPS);
        cam.apply_look(0.0, -100.0);
        assert!((cam.pitch + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_yaw_unconstrained() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.apply_look(10.0 * PI, 0.0);
        assert!((cam.yaw - 10.0 * PI).abs() < 1e-4);
    }

    #[test]
    fn test_identity_view_matrix() {
        let cam = Camera::new(Vec3::ZERO);
        let p = Vec3::new(1.0, 2.0, 3.0).to_point() * cam.view_matrix();
        assert!((p.x - 1.0).abs() < EPS);
        assert!((p.y - 2.0).abs() < EPS);
        assert!((p.z - 3.0).abs() < EPS);
    }

    #[test]
    fn test_view_matrix_centers_camera_position() {
        let mut cam = Camera::new(Vec3::new(4.0, -2.0, 7.0));
        cam.apply_look(1.3, 0.4);
        let origin = cam.position.to_point() * cam.view_matrix();
        assert!(origin.x.abs() < EPS && origin.y.abs() < EPS && origin.z.abs() < EPS);
    }

    #[test]
    fn test_movement_follows_yaw() {
        let mut cam = Camera::new(Vec3::ZERO);
        // Quarter turn: forward becomes +X
        cam.apply_look(FRAC_PI_2, 0.0);
        cam.apply_movement(MoveDirection::Forward, 2.0);
        assert!((cam.position.x - 2.0).abs() < 1e-4);
        assert!(cam.position.y.abs() < 1e-4);
        assert!(cam.position.z.abs() < 1e-4);
    }

    #[test]
    fn test_movement_step_is_constant_per_tick() {
        let mut cam = Camera::new(Vec3::ZERO);
        for _ in 0..3 {
            cam.apply_movement(MoveDirection::Up, 0.5);
        }
        assert!((cam.position.y - 1.5).abs() < EPS);
    }

    #[test]
    fn test_point_ahead_maps_to_view_axis() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, -5.0));
        cam.apply_look(0.7, -0.2);
        let (_, _, forward) = cam.basis();
        let ahead = cam.position + forward * 3.0;
        let viewed: Vec4 = ahead.to_point() * cam.view_matrix();
        // A point straight ahead lands on the view-space +Z axis
        assert!(viewed.x.abs() < 1e-4);
        assert!(viewed.y.abs() < 1e-4);
        assert!((viewed.z - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_basis_is_pure() {
        let mut cam = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        cam.apply_look(0.5, 0.25);
        let before = cam.position;
        let _ = cam.view_matrix();
        let _ = cam.basis();
        assert_eq!(cam.position, before);
    }
}

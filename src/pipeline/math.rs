//! Vector and matrix math for the homogeneous pipeline
//!
//! All transforms use the row-vector convention: a point is a 1x4 row
//! multiplied on the left of a 4x4 matrix, so `v * a * b` applies `a`
//! first, then `b`.

use std::ops::{Add, Sub, Mul, Neg, Div};
use serde::{Serialize, Deserialize};

/// 3D Vector (object-space positions, camera basis axes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const RIGHT: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const FORWARD: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Extend to a homogeneous point (w = 1)
    pub fn to_point(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, 1.0)
    }

    /// Extend to a homogeneous direction (w = 0, unaffected by translation)
    pub fn to_direction(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, 0.0)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

/// 2D Vector (screen-space pixel coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Homogeneous 4-component point or plane coefficient row
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4 { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn dot(self, other: Vec4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    fn add(self, other: Vec4) -> Vec4 {
        Vec4 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

impl Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, other: Vec4) -> Vec4 {
        Vec4 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w,
        }
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;
    fn mul(self, s: f32) -> Vec4 {
        Vec4 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;
    fn div(self, s: f32) -> Vec4 {
        Vec4 {
            x: self.x / s,
            y: self.y / s,
            z: self.z / s,
            w: self.w / s,
        }
    }
}

/// 4x4 matrix, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub rows: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Translation by `t`
    pub fn translate(t: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [t.x, t.y, t.z, 1.0],
        ])
    }

    /// Rotation about the X axis (pitch)
    pub fn rotate_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis (yaw)
    pub fn rotate_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis (roll)
    pub fn rotate_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Uniform scale of the spatial components
    pub fn scale(s: f32) -> Self {
        Self::from_rows([
            [s, 0.0, 0.0, 0.0],
            [0.0, s, 0.0, 0.0],
            [0.0, 0.0, s, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Matrix whose columns are the given basis axes.
    ///
    /// Row-multiplying a world-space direction by this matrix yields its
    /// coordinates in the (right, up, forward) frame.
    pub fn from_basis(right: Vec3, up: Vec3, forward: Vec3) -> Self {
        Self::from_rows([
            [right.x, up.x, forward.x, 0.0],
            [right.y, up.y, forward.y, 0.0],
            [right.z, up.z, forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, other: Mat4) -> Mat4 {
        let mut rows = [[0.0f32; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Mat4 { rows }
    }
}

/// Row vector times matrix
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    fn mul(self, m: Mat4) -> Vec4 {
        let v = [self.x, self.y, self.z, self.w];
        let mut out = [0.0f32; 4];
        for (j, cell) in out.iter_mut().enumerate() {
            *cell = (0..4).map(|i| v[i] * m.rows[i][j]).sum();
        }
        Vec4::new(out[0], out[1], out[2], out[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn assert_vec4_eq(a: Vec4, b: Vec4) {
        assert!((a.x - b.x).abs() < EPS, "{:?} != {:?}", a, b);
        assert!((a.y - b.y).abs() < EPS, "{:?} != {:?}", a, b);
        assert!((a.z - b.z).abs() < EPS, "{:?} != {:?}", a, b);
        assert!((a.w - b.w).abs() < EPS, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_translate_point() {
        let p = Vec3::new(1.0, 2.0, 3.0).to_point();
        let moved = p * Mat4::translate(Vec3::new(10.0, 20.0, 30.0));
        assert_vec4_eq(moved, Vec4::new(11.0, 22.0, 33.0, 1.0));
    }

    #[test]
    fn test_translate_ignores_directions() {
        let d = Vec3::FORWARD.to_direction();
        let moved = d * Mat4::translate(Vec3::new(5.0, 5.0, 5.0));
        assert_vec4_eq(moved, Vec4::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        // +Z forward rotated a quarter turn about Y lands on +X
        let v = Vec3::FORWARD.to_direction() * Mat4::rotate_y(FRAC_PI_2);
        assert_vec4_eq(v, Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        // +Z forward pitched a quarter turn about X lands on -Y
        let v = Vec3::FORWARD.to_direction() * Mat4::rotate_x(FRAC_PI_2);
        assert_vec4_eq(v, Vec4::new(0.0, -1.0, 0.0, 0.0));
    }

    #[test]
    fn test_scale() {
        let p = Vec3::new(1.0, -2.0, 3.0).to_point() * Mat4::scale(2.0);
        assert_vec4_eq(p, Vec4::new(2.0, -4.0, 6.0, 1.0));
    }

    #[test]
    fn test_composition_order() {
        // Row-vector convention: v * (a * b) == (v * a) * b
        let a = Mat4::rotate_y(0.7);
        let b = Mat4::translate(Vec3::new(3.0, 0.0, -1.0));
        let v = Vec3::new(1.0, 2.0, 3.0).to_point();
        assert_vec4_eq(v * (a * b), (v * a) * b);
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(4.0, 3.0, 2.0, 1.0);
        assert_vec4_eq(v * Mat4::IDENTITY, v);
    }

    #[test]
    fn test_vec4_div_scalar() {
        let v = Vec4::new(2.0, 4.0, 6.0, 2.0) / 2.0;
        assert_vec4_eq(v, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }
}

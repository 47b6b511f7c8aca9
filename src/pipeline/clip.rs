//! Homogeneous view-frustum clipping
//!
//! Sutherland-Hodgman specialized to triangles: one input triangle is
//! clipped against the six canonical planes in turn and comes out as 0
//! to 2^6 triangles (far fewer in practice). Everything happens on
//! pre-divide homogeneous coordinates, where plane interpolation is
//! affine and therefore perspective safe.

use super::math::Vec4;
use super::types::ClipTriangle;

/// The six frustum planes as homogeneous coefficient rows, fixed order.
/// A vertex `v` is inside a plane when `dot(v, plane) >= 0`; after the
/// perspective transform `w` stands in for the unit-cube extent.
pub const FRUSTUM_PLANES: [Vec4; 6] = [
    Vec4::new(1.0, 0.0, 0.0, 1.0),  // left:   x + w >= 0
    Vec4::new(-1.0, 0.0, 0.0, 1.0), // right: -x + w >= 0
    Vec4::new(0.0, 1.0, 0.0, 1.0),  // bottom: y + w >= 0
    Vec4::new(0.0, -1.0, 0.0, 1.0), // top:   -y + w >= 0
    Vec4::new(0.0, 0.0, 1.0, 1.0),  // near:   z + w >= 0
    Vec4::new(0.0, 0.0, -1.0, 1.0), // far:   -z + w >= 0
];

/// Hard cap on candidates: each plane can at most double the set, so six
/// planes bound the fan-out at 2^6 per input triangle.
pub const MAX_CLIP_TRIANGLES: usize = 64;

const EMPTY: ClipTriangle = [Vec4::ZERO; 3];

/// Per-call scratch space for the plane-by-plane candidate sets.
///
/// Sized for the theoretical worst case so clipping never allocates.
/// One buffer per worker; never share across concurrent clips.
pub struct ClipBuffer {
    current: [ClipTriangle; MAX_CLIP_TRIANGLES],
    next: [ClipTriangle; MAX_CLIP_TRIANGLES],
}

impl ClipBuffer {
    pub fn new() -> Self {
        Self {
            current: [EMPTY; MAX_CLIP_TRIANGLES],
            next: [EMPTY; MAX_CLIP_TRIANGLES],
        }
    }
}

impl Default for ClipBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Intersection of the edge `a -> b` with a plane, by affine
/// interpolation of the homogeneous coordinates.
fn intersect_edge(a: Vec4, b: Vec4, plane: Vec4) -> Vec4 {
    let da = a.dot(plane);
    let db = b.dot(plane);
    let t = da / (da - db);
    a + (b - a) * t
}

/// Clip one triangle against one plane, writing 0..=2 triangles into
/// `out` and returning the count.
fn clip_against_plane(triangle: &ClipTriangle, plane: Vec4, out: &mut [ClipTriangle; 2]) -> usize {
    let mut inside = [Vec4::ZERO; 3];
    let mut outside = [Vec4::ZERO; 3];
    let mut inside_count = 0;
    let mut outside_count = 0;

    for &v in triangle {
        // d == 0 counts as inside, so shared edges of adjacent triangles
        // classify consistently and leave neither gaps nor double cover
        if v.dot(plane) >= 0.0 {
            inside[inside_count] = v;
            inside_count += 1;
        } else {
            outside[outside_count] = v;
            outside_count += 1;
        }
    }

    match inside_count {
        0 => 0,
        3 => {
            out[0] = *triangle;
            1
        }
        1 => {
            // One survivor: shrink to the corner it anchors
            let a = inside[0];
            out[0] = [
                a,
                intersect_edge(a, outside[0], plane),
                intersect_edge(a, outside[1], plane),
            ];
            1
        }
        _ => {
            // Two survivors: the inside region is a quad, fanned into two
            let a = inside[0];
            let b = inside[1];
            let cut_b = intersect_edge(b, outside[0], plane);
            let cut_a = intersect_edge(a, outside[0], plane);
            out[0] = [a, b, cut_b];
            out[1] = [a, cut_b, cut_a];
            2
        }
    }
}

/// Clip a clip-space triangle against all six frustum planes.
///
/// Returns a slice into `buf` holding the surviving triangles; empty when
/// the input is fully outside any plane.
pub fn clip_triangle(buf: &mut ClipBuffer, triangle: ClipTriangle) -> &[ClipTriangle] {
    buf.current[0] = triangle;
    let mut count = 1;

    for plane in FRUSTUM_PLANES {
        let mut next_count = 0;
        let mut out = [EMPTY; 2];
        for i in 0..count {
            let produced = clip_against_plane(&buf.current[i], plane, &mut out);
            buf.next[next_count..next_count + produced].copy_from_slice(&out[..produced]);
            next_count += produced;
        }
        if next_count == 0 {
            return &buf.current[..0];
        }
        buf.current[..next_count].copy_from_slice(&buf.next[..next_count]);
        count = next_count;
    }

    &buf.current[..count]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    /// A triangle comfortably inside the whole frustum (w = 1 cube)
    fn inner_triangle() -> ClipTriangle {
        [
            Vec4::new(-0.5, -0.5, 0.0, 1.0),
            Vec4::new(0.5, -0.5, 0.0, 1.0),
            Vec4::new(0.0, 0.5, 0.0, 1.0),
        ]
    }

    /// Push a triangle's vertices outside one plane by axis offset.
    /// `axis` selects x/y/z, `sign` which side; `which` masks vertices.
    fn pushed_outside(axis: usize, sign: f32, which: [bool; 3]) -> ClipTriangle {
        let mut tri = inner_triangle();
        for (v, push) in tri.iter_mut().zip(which) {
            if push {
                match axis {
                    0 => v.x = sign * 3.0,
                    1 => v.y = sign * 3.0,
                    _ => v.z = sign * 3.0,
                }
            }
        }
        tri
    }

    #[test]
    fn test_fully_inside_passes_unchanged() {
        let mut buf = ClipBuffer::new();
        let tri = inner_triangle();
        let result = clip_triangle(&mut buf, tri);
        assert_eq!(result.len(), 1);
        for (got, want) in result[0].iter().zip(tri) {
            assert!((got.x - want.x).abs() < EPS);
            assert!((got.y - want.y).abs() < EPS);
            assert!((got.z - want.z).abs() < EPS);
            assert!((got.w - want.w).abs() < EPS);
        }
    }

    #[test]
    fn test_fully_outside_each_plane_rejects() {
        let mut buf = ClipBuffer::new();
        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                let tri = pushed_outside(axis, sign, [true, true, true]);
                let result = clip_triangle(&mut buf, tri);
                assert_eq!(result.len(), 0, "axis {} sign {}", axis, sign);
            }
        }
    }

    #[test]
    fn test_one_vertex_outside_yields_two() {
        let mut buf = ClipBuffer::new();
        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                let tri = pushed_outside(axis, sign, [true, false, false]);
                let result = clip_triangle(&mut buf, tri);
                assert_eq!(result.len(), 2, "axis {} sign {}", axis, sign);
            }
        }
    }

    #[test]
    fn test_two_vertices_outside_yields_one() {
        let mut buf = ClipBuffer::new();
        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                let tri = pushed_outside(axis, sign, [true, true, false]);
                let result = clip_triangle(&mut buf, tri);
                assert_eq!(result.len(), 1, "axis {} sign {}", axis, sign);
            }
        }
    }

    #[test]
    fn test_intersections_lie_on_plane() {
        let mut buf = ClipBuffer::new();
        // One vertex pushed past the right plane (x = w)
        let tri = pushed_outside(0, 1.0, [true, false, false]);
        let plane = FRUSTUM_PLANES[1];
        let mut cut_points = 0;
        for clipped in clip_triangle(&mut buf, tri) {
            for v in clipped {
                let d = v.dot(plane);
                assert!(d >= -EPS, "vertex ended up outside: d = {}", d);
                if d.abs() < EPS {
                    cut_points += 1;
                }
            }
        }
        // The two output triangles share the cut edge on the plane
        assert!(cut_points >= 2);
    }

    #[test]
    fn test_vertex_exactly_on_plane_is_inside() {
        let mut buf = ClipBuffer::new();
        let mut tri = inner_triangle();
        tri[0].x = 1.0; // exactly on the right plane with w = 1
        let result = clip_triangle(&mut buf, tri);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_corner_straddle_survives_multiple_planes() {
        let mut buf = ClipBuffer::new();
        // Large triangle poking out of right and top at once
        let tri = [
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(2.5, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 2.5, 0.0, 1.0),
        ];
        let result = clip_triangle(&mut buf, tri);
        assert!(!result.is_empty());
        assert!(result.len() <= MAX_CLIP_TRIANGLES);
        for clipped in result {
            for v in clipped {
                for plane in FRUSTUM_PLANES {
                    assert!(v.dot(plane) >= -EPS);
                }
            }
        }
    }

    #[test]
    fn test_homogeneous_interpolation_keeps_w() {
        let mut buf = ClipBuffer::new();
        // Perspective-style triangle with varying w straddling the near plane
        let tri = [
            Vec4::new(0.0, 0.0, -2.0, 1.0),
            Vec4::new(0.5, 0.0, 2.0, 4.0),
            Vec4::new(-0.5, 0.0, 2.0, 4.0),
        ];
        let result = clip_triangle(&mut buf, tri);
        assert!(!result.is_empty());
        for clipped in result {
            for v in clipped {
                // Clipping must interpolate w, never divide it away
                assert!(v.w > 0.0);
            }
        }
    }
}

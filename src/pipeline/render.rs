//! The per-frame face pipeline and painter's-algorithm presentation
//!
//! For every mesh triangle: transform to clip space, frustum clip,
//! perspective divide, viewport map, then sort the survivors
//! back-to-front and hand them to the draw surface. Faces are
//! independent, so the transform/clip/project stage runs in parallel.

use rayon::prelude::*;

use super::camera::Camera;
use super::clip::{clip_triangle, ClipBuffer};
use super::math::{Mat4, Vec2};
use super::projection::Projection;
use super::types::{ClipTriangle, DrawSurface, ScreenTriangle};
use crate::world::Mesh;

/// Run the face pipeline over a mesh: view/projection transform, clip,
/// divide, viewport map. Output order is deterministic (mesh order, then
/// clip order within a face); call [`sort_back_to_front`] before drawing.
pub fn project_mesh(mesh: &Mesh, camera: &Camera, projection: &Projection) -> Vec<ScreenTriangle> {
    let view_projection = camera.view_matrix() * projection.projection_matrix();
    let viewport = projection.viewport_matrix();

    mesh.triangles()
        .par_iter()
        .map_init(ClipBuffer::new, |buf, tri| {
            let clip_space: ClipTriangle = [
                mesh.vertex(tri.v0) * view_projection,
                mesh.vertex(tri.v1) * view_projection,
                mesh.vertex(tri.v2) * view_projection,
            ];

            clip_triangle(buf, clip_space)
                .iter()
                .map(|clipped| to_screen(clipped, viewport))
                .collect::<Vec<_>>()
        })
        .flatten()
        .collect()
}

/// Perspective divide and viewport mapping for one clipped triangle.
/// Must run strictly after clipping: the divide destroys the linearity
/// the clipper depends on.
fn to_screen(clipped: &ClipTriangle, viewport: Mat4) -> ScreenTriangle {
    let mut points = [Vec2::default(); 3];
    let mut z_sum = 0.0;

    for (point, &v) in points.iter_mut().zip(clipped) {
        // Near-plane clipping guarantees w > 0 for every survivor
        debug_assert!(v.w > 0.0, "perspective divide with w = {}", v.w);
        let ndc = v / v.w;
        z_sum += ndc.z;
        let screen = ndc * viewport;
        *point = Vec2::new(screen.x, screen.y);
    }

    ScreenTriangle {
        points,
        depth: z_sum / 3.0,
    }
}

/// Order triangles farthest-first for the painter's algorithm.
///
/// Draw order alone decides occlusion; intersecting or coplanar geometry
/// can mis-order. Known limitation of the technique, not a bug here.
pub fn sort_back_to_front(triangles: &mut [ScreenTriangle]) {
    triangles.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

/// Sort and hand every triangle, in order, to the draw surface.
pub fn present(triangles: &mut [ScreenTriangle], surface: &mut dyn DrawSurface) {
    sort_back_to_front(triangles);
    for triangle in triangles.iter() {
        surface.fill_triangle(triangle);
    }
}

//! Triangle mesh storage and load-time fan triangulation
//!
//! Vertices are homogeneous points (w = 1 in object space) owned by the
//! mesh; the render pipeline only ever borrows them. Polygon faces are
//! triangulated exactly once, when the mesh is built.

use crate::pipeline::{Mat4, Triangle, Vec3, Vec4};

/// Error type for mesh construction
#[derive(Debug)]
pub enum MeshError {
    /// A face referenced a vertex index past the end of the vertex list
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    /// A face had fewer than three indices
    TooFewIndices { face: usize, count: usize },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::IndexOutOfRange { face, index, vertex_count } => write!(
                f,
                "face {} references vertex {} but the mesh has {} vertices",
                face, index, vertex_count
            ),
            MeshError::TooFewIndices { face, count } => {
                write!(f, "face {} has {} indices, need at least 3", face, count)
            }
        }
    }
}

impl std::error::Error for MeshError {}

/// An object-space triangle mesh
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec4>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Build a mesh from object-space positions and polygon faces of
    /// zero-based vertex indices.
    ///
    /// Faces with more than three indices are fan-triangulated here,
    /// once; the triangle list is immutable afterwards. Fails fast on an
    /// out-of-range index or a face with fewer than three indices.
    pub fn new(positions: Vec<Vec3>, faces: &[Vec<usize>]) -> Result<Self, MeshError> {
        let vertices: Vec<Vec4> = positions.into_iter().map(Vec3::to_point).collect();

        let mut triangles = Vec::new();
        for (face_idx, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::TooFewIndices {
                    face: face_idx,
                    count: face.len(),
                });
            }
            for &index in face {
                if index >= vertices.len() {
                    return Err(MeshError::IndexOutOfRange {
                        face: face_idx,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }

            // Fan around the first vertex, walking the polygon backwards:
            // (v0, v_i, v_{i-1}) for i from last down to 2
            let mut i = face.len() - 1;
            while i >= 2 {
                triangles.push(Triangle::new(face[0], face[i], face[i - 1]));
                i -= 1;
            }
        }

        Ok(Self { vertices, triangles })
    }

    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex(&self, index: usize) -> Vec4 {
        self.vertices[index]
    }

    /// Move the whole mesh by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.transform(Mat4::translate(offset));
    }

    pub fn rotate_x(&mut self, angle: f32) {
        self.transform(Mat4::rotate_x(angle));
    }

    pub fn rotate_y(&mut self, angle: f32) {
        self.transform(Mat4::rotate_y(angle));
    }

    pub fn rotate_z(&mut self, angle: f32) {
        self.transform(Mat4::rotate_z(angle));
    }

    pub fn scale(&mut self, factor: f32) {
        self.transform(Mat4::scale(factor));
    }

    fn transform(&mut self, matrix: Mat4) {
        for v in &mut self.vertices {
            *v = *v * matrix;
        }
    }
}

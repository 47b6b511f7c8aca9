//! Wavefront `.obj` loading and saving
//!
//! Only the subset the engine needs: `v x y z` position lines and
//! `f i j k ...` face lines (1-based, `i/uv/normal` slash forms accepted,
//! everything else ignored).

use std::fs;
use std::path::Path;

use crate::pipeline::Vec3;
use super::mesh::{Mesh, MeshError};

/// Error type for obj loading
#[derive(Debug)]
pub enum ObjError {
    IoError(std::io::Error),
    /// A `v` or `f` line that did not parse (line numbers are 1-based)
    ParseError { line: usize, message: String },
    /// The parsed listing did not form a valid mesh
    MeshError(MeshError),
}

impl From<std::io::Error> for ObjError {
    fn from(e: std::io::Error) -> Self {
        ObjError::IoError(e)
    }
}

impl From<MeshError> for ObjError {
    fn from(e: MeshError) -> Self {
        ObjError::MeshError(e)
    }
}

impl std::fmt::Display for ObjError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjError::IoError(e) => write!(f, "IO error: {}", e),
            ObjError::ParseError { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            ObjError::MeshError(e) => write!(f, "Mesh error: {}", e),
        }
    }
}

impl std::error::Error for ObjError {}

/// Load a mesh from an `.obj` file
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, ObjError> {
    let contents = fs::read_to_string(path)?;
    parse_obj(&contents)
}

/// Parse `.obj` text into a mesh
pub fn parse_obj(source: &str) -> Result<Mesh, ObjError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut faces: Vec<Vec<usize>> = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(rest) = line.strip_prefix("v ") {
            let coords: Vec<f32> = rest
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<f32>().map_err(|e| ObjError::ParseError {
                        line: line_no,
                        message: format!("bad coordinate {:?}: {}", tok, e),
                    })
                })
                .collect::<Result<_, _>>()?;
            if coords.len() < 3 {
                return Err(ObjError::ParseError {
                    line: line_no,
                    message: format!("vertex has {} coordinates, need 3", coords.len()),
                });
            }
            positions.push(Vec3::new(coords[0], coords[1], coords[2]));
        } else if let Some(rest) = line.strip_prefix("f ") {
            let mut face = Vec::new();
            for tok in rest.split_whitespace() {
                // `f 1/2/3` forms: only the position index matters here
                let index_tok = tok.split('/').next().unwrap_or(tok);
                let one_based: usize =
                    index_tok.parse().map_err(|e| ObjError::ParseError {
                        line: line_no,
                        message: format!("bad face index {:?}: {}", index_tok, e),
                    })?;
                let zero_based = one_based.checked_sub(1).ok_or_else(|| ObjError::ParseError {
                    line: line_no,
                    message: "face indices are 1-based, found 0".to_string(),
                })?;
                face.push(zero_based);
            }
            faces.push(face);
        }
        // comments, vt/vn lines, object names: ignored
    }

    Ok(Mesh::new(positions, &faces)?)
}

/// Render a mesh as `.obj` text (positions and triangle faces only)
pub fn to_obj_string(mesh: &Mesh) -> String {
    let mut contents = String::new();
    for v in mesh.vertices() {
        contents.push_str(&format!("v {} {} {}\n", v.x, v.y, v.z));
    }
    for t in mesh.triangles() {
        contents.push_str(&format!("f {} {} {}\n", t.v0 + 1, t.v1 + 1, t.v2 + 1));
    }
    contents
}

/// Save a mesh as an `.obj` file
pub fn save_obj<P: AsRef<Path>>(mesh: &Mesh, path: P) -> std::io::Result<()> {
    fs::write(path, to_obj_string(mesh))
}

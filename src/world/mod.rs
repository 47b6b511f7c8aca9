//! World module - meshes and where they come from
//!
//! - Mesh storage with one-shot fan triangulation
//! - Wavefront `.obj` loading/saving
//! - Seeded procedural terrain

mod mesh;
mod obj;
pub mod terrain;

pub use mesh::*;
pub use obj::*;

//! Software 3D rasterization pipeline
//!
//! Object space to screen space, one frame at a time:
//! - Row-vector homogeneous matrix math
//! - Yaw/pitch camera with derived view matrix
//! - Perspective projection and viewport mapping
//! - Six-plane frustum clipping in clip space (the hard part)
//! - Perspective divide, depth keys, painter's-algorithm ordering
//!
//! The pipeline emits ordered 2D triangles; filling pixels is the
//! presentation layer's job.

mod math;
mod types;
mod camera;
mod projection;
mod clip;
mod render;

pub use math::*;
pub use types::*;
pub use camera::*;
pub use projection::*;
pub use clip::*;
pub use render::*;

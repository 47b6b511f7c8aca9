//! Procedural terrain: fBm value noise over a regular grid
//!
//! Generates the same mesh layout the engine's terrain files use: one
//! vertex per grid cell corner, two triangles per cell, heights from a
//! seeded octave-summed value noise normalized to [0, 1] and scaled.

use crate::pipeline::Vec3;
use super::mesh::Mesh;

/// Terrain generation parameters
#[derive(Debug, Clone)]
pub struct TerrainSettings {
    /// Grid size in vertices
    pub grid_width: usize,
    pub grid_height: usize,
    /// Base noise frequency per grid step
    pub frequency: f32,
    /// Octaves of detail and how they stack
    pub octaves: u32,
    pub persistence: f32,
    pub lacunarity: f32,
    /// Vertical scale applied to the normalized heights
    pub height_scale: f32,
    /// World-space distance between neighboring grid vertices
    pub grid_scale: f32,
    pub seed: u32,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            grid_width: 64,
            grid_height: 64,
            frequency: 0.05,
            octaves: 4,
            persistence: 0.4,
            lacunarity: 2.2,
            height_scale: 50.0,
            grid_scale: 10.0,
            seed: 0,
        }
    }
}

/// Hash a lattice point to [0, 1)
fn lattice_value(ix: i32, iy: i32, seed: u32) -> f32 {
    let mut h = (ix as u32)
        .wrapping_mul(0x9E37_79B1)
        .wrapping_add((iy as u32).wrapping_mul(0x85EB_CA77))
        .wrapping_add(seed.wrapping_mul(0xC2B2_AE3D));
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h = h.wrapping_mul(0x2973_2D35);
    h ^= h >> 15;
    (h >> 8) as f32 / (1 << 24) as f32
}

/// Smoothly interpolated value noise at one point
fn value_noise(x: f32, y: f32, seed: u32) -> f32 {
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let fx = x - ix as f32;
    let fy = y - iy as f32;

    // smoothstep fade
    let sx = fx * fx * (3.0 - 2.0 * fx);
    let sy = fy * fy * (3.0 - 2.0 * fy);

    let v00 = lattice_value(ix, iy, seed);
    let v10 = lattice_value(ix + 1, iy, seed);
    let v01 = lattice_value(ix, iy + 1, seed);
    let v11 = lattice_value(ix + 1, iy + 1, seed);

    let top = v00 + (v10 - v00) * sx;
    let bottom = v01 + (v11 - v01) * sx;
    top + (bottom - top) * sy
}

/// Octave-summed value noise (fractional Brownian motion)
fn fbm(x: f32, y: f32, settings: &TerrainSettings) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = settings.frequency;
    for octave in 0..settings.octaves {
        total += amplitude * value_noise(x * frequency, y * frequency, settings.seed + octave);
        amplitude *= settings.persistence;
        frequency *= settings.lacunarity;
    }
    total
}

/// Generate a terrain mesh from the settings
pub fn generate(settings: &TerrainSettings) -> Mesh {
    let (w, h) = (settings.grid_width, settings.grid_height);

    let mut heights = vec![0.0f32; w * h];
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for y in 0..h {
        for x in 0..w {
            let value = fbm(x as f32, y as f32, settings);
            heights[y * w + x] = value;
            min = min.min(value);
            max = max.max(value);
        }
    }

    // Normalize to [0, 1]; a perfectly flat field stays at zero
    let range = max - min;
    for height in &mut heights {
        *height = if range > f32::EPSILON {
            (*height - min) / range
        } else {
            0.0
        };
    }

    let mut positions = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            positions.push(Vec3::new(
                x as f32 * settings.grid_scale,
                heights[y * w + x] * settings.height_scale,
                y as f32 * settings.grid_scale,
            ));
        }
    }

    // Two triangles per grid cell; a grid under 2x2 has no cells
    let mut faces = Vec::with_capacity(w.saturating_sub(1) * h.saturating_sub(1) * 2);
    for y in 0..h.saturating_sub(1) {
        for x in 0..w.saturating_sub(1) {
            let i = y * w + x;
            let i_right = i + 1;
            let i_down = i + w;
            let i_diag = i_down + 1;
            faces.push(vec![i, i_down, i_right]);
            faces.push(vec![i_right, i_down, i_diag]);
        }
    }

    Mesh::new(positions, &faces).expect("generated faces index generated vertices")
}

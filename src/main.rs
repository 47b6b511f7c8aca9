//! Polypaint: software 3D rendering engine
//!
//! A compute-then-present pipeline with the classic shape:
//! - Homogeneous view/projection transforms (row-vector convention)
//! - Six-plane frustum clipping in clip space, before the divide
//! - Painter's-algorithm depth ordering, no z-buffer
//!
//! The window, input mapping, and triangle fills are macroquad glue; all
//! geometry work lives in `pipeline` and `world`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod pipeline;
mod world;

use macroquad::prelude::*;

use config::SessionConfig;
use pipeline::{present, project_mesh, Camera, DrawSurface, MoveDirection, Projection, ScreenTriangle};
use world::terrain;

const CONFIG_PATH: &str = "assets/session.ron";
const TERRAIN_PATH: &str = "assets/terrain.obj";

fn window_conf() -> Conf {
    let config = config::load_or_default(CONFIG_PATH);
    Conf {
        window_title: format!("Polypaint v{}", VERSION),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Draw surface backed by macroquad's polygon fill
struct MacroquadSurface {
    fill: Color,
    outline: Color,
}

impl DrawSurface for MacroquadSurface {
    fn fill_triangle(&mut self, triangle: &ScreenTriangle) {
        let [a, b, c] = triangle.points;
        let (a, b, c) = (vec2(a.x, a.y), vec2(b.x, b.y), vec2(c.x, c.y));
        draw_triangle(a, b, c, self.fill);
        draw_triangle_lines(a, b, c, 1.0, self.outline);
    }
}

/// Map held keys to discrete per-tick camera movement
fn handle_movement(camera: &mut Camera, config: &SessionConfig) {
    let speed = config.move_speed;
    if is_key_down(KeyCode::W) {
        camera.apply_movement(MoveDirection::Forward, speed);
    }
    if is_key_down(KeyCode::S) {
        camera.apply_movement(MoveDirection::Backward, speed);
    }
    if is_key_down(KeyCode::A) {
        camera.apply_movement(MoveDirection::Left, speed);
    }
    if is_key_down(KeyCode::D) {
        camera.apply_movement(MoveDirection::Right, speed);
    }
    if is_key_down(KeyCode::Space) {
        camera.apply_movement(MoveDirection::Up, speed);
    }
    if is_key_down(KeyCode::LeftShift) {
        camera.apply_movement(MoveDirection::Down, speed);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config::load_or_default(CONFIG_PATH);

    macroquad::rand::srand(miniquad::date::now() as u64);
    let seed = macroquad::rand::gen_range(0u32, 200);
    let settings = terrain::TerrainSettings {
        seed,
        ..Default::default()
    };
    let generated = terrain::generate(&settings);
    println!(
        "Generated terrain: {} triangles (seed {})",
        generated.triangles().len(),
        seed
    );

    // Round-trip through the obj file so the terrain can be inspected or
    // swapped out; keep the in-memory mesh if the disk is unavailable
    let mut mesh = match world::save_obj(&generated, TERRAIN_PATH) {
        Ok(()) => match world::load_obj(TERRAIN_PATH) {
            Ok(mesh) => {
                println!("Reloaded {}", TERRAIN_PATH);
                mesh
            }
            Err(e) => {
                eprintln!("Failed to reload {}: {}", TERRAIN_PATH, e);
                generated
            }
        },
        Err(e) => {
            eprintln!("Failed to save {}: {}", TERRAIN_PATH, e);
            generated
        }
    };
    mesh.translate(pipeline::Vec3::new(0.0, 10.0, 0.0));

    let mut camera = Camera::new(pipeline::Vec3::ZERO);
    let projection = Projection::new(config.h_fov, config.near, config.far, config.width, config.height);
    let mut surface = MacroquadSurface {
        fill: ORANGE,
        outline: Color::from_rgba(60, 35, 0, 255),
    };

    set_cursor_grab(true);
    show_mouse(false);
    let mut last_mouse = mouse_position();

    loop {
        clear_background(BLACK);

        // Camera updates strictly before the parallel face pipeline
        handle_movement(&mut camera, &config);

        let mouse = mouse_position();
        let (dx, dy) = (mouse.0 - last_mouse.0, mouse.1 - last_mouse.1);
        last_mouse = mouse;
        camera.apply_look(-dx * config.mouse_sensitivity, -dy * config.mouse_sensitivity);

        let mut triangles = project_mesh(&mesh, &camera, &projection);
        present(&mut triangles, &mut surface);

        draw_text(
            &format!("FPS: {}", get_fps()),
            config.width as f32 - 250.0,
            40.0,
            50.0,
            WHITE,
        );

        next_frame().await;
    }
}

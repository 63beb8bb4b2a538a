//! Headless demo: run a small scene for a few seconds and record the
//! draw stream a real backend would receive.

use std::time::{Duration, Instant};

use glam::Vec3;

use bezier_bounce::render::{CommandList, colors};
use bezier_bounce::{Scene, SceneBounds, SceneConfig, tick};

const FRAMES: u32 = 180;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut scene = Scene::new(
        SceneBounds::new(-2.0, 2.0, -2.0, 2.0),
        SceneConfig::default(),
        0xB0B5,
    );

    let now = Instant::now();
    let spawn_points = [
        Vec3::new(-1.0, 0.5, 0.0),
        Vec3::new(0.8, -0.3, 0.0),
        Vec3::new(0.0, 1.2, 0.0),
        Vec3::new(-0.6, -1.0, 0.0),
    ];
    for (i, position) in spawn_points.into_iter().enumerate() {
        let color = colors::SPHERE_PALETTE[i % colors::SPHERE_PALETTE.len()];
        scene.spawn_body(color, position, now);
    }

    scene.add_curve([
        Vec3::new(-1.5, -1.5, 0.0),
        Vec3::new(0.0, 1.5, 0.0),
        Vec3::new(1.5, -1.5, 0.0),
    ]);

    for frame in 0..FRAMES {
        std::thread::sleep(FRAME_INTERVAL);
        tick(&mut scene, Instant::now());

        if frame % 60 == 0 {
            for (i, body) in scene.bodies.iter().enumerate() {
                log::info!(
                    "frame {frame}: sphere {i} at ({:+.2}, {:+.2}) vel ({:+.2}, {:+.2})",
                    body.position.x,
                    body.position.y,
                    body.velocity.x,
                    body.velocity.y,
                );
            }
        }
    }

    let mut ctx = CommandList::new();
    scene.draw(&mut ctx);
    log::info!(
        "final draw stream: {} commands, {} primitives ({} curve points)",
        ctx.commands.len(),
        ctx.primitives(),
        scene.curves[0].polyline().len(),
    );
}

//! Per-frame simulation step
//!
//! The surrounding animation loop calls `tick` once per frame.
//! Integration is wall-clock scaled, so the loop's cadence does not
//! change sphere speeds.

use std::time::Instant;

use super::Scene;
use super::collision::resolve_sphere_collision;

/// Advance the whole scene to `now`.
///
/// Every body is integrated and wall-contained first, so pair checks
/// read one consistent frame snapshot. Collisions then resolve in a
/// single pass over unordered pairs: each colliding pair responds
/// exactly once per frame.
pub fn tick(scene: &mut Scene, now: Instant) {
    let bounds = scene.bounds;
    let config = scene.config;

    for body in &mut scene.bodies {
        body.step(now, &bounds, &config);
    }

    for i in 0..scene.bodies.len() {
        let (head, tail) = scene.bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_sphere_collision(a, b, &config);
        }
    }
}

//! Sphere placement and motion
//!
//! A body is a placed sphere: display color, 3D position with a
//! decorative z, and a planar velocity. All physics acts on x,y only.
//! Constraint violations are never errors; positions and radii are
//! silently clamped so live dragging can never abort.

use std::time::Instant;

use glam::{Vec2, Vec3};
use rand::Rng;

use super::SceneBounds;
use crate::config::SceneConfig;

/// Velocity is expressed in scene units per 100 ms of wall time
const TIME_SCALE: f32 = 10.0;

/// A sphere placed in the scene
#[derive(Debug, Clone)]
pub struct Body {
    /// Display color, no physical role
    pub color: [f32; 3],
    /// Center of the sphere; z is decorative and untouched by physics
    pub position: Vec3,
    pub radius: f32,
    /// Planar velocity in scene units per 100 ms
    pub velocity: Vec2,
    /// Wall-clock reading of the last integration step
    last_update: Instant,
}

impl Body {
    /// Place a sphere at minimum radius with a random launch direction
    pub fn new(
        color: [f32; 3],
        position: Vec3,
        now: Instant,
        config: &SceneConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        Self {
            color,
            position,
            radius: config.min_radius,
            velocity: config.launch_speed * Vec2::new(angle.cos(), angle.sin()),
            last_update: now,
        }
    }

    /// Resize the sphere, clamped so it neither shrinks below the
    /// placement minimum nor grows past any wall from its current center.
    ///
    /// The wall clamps run after the minimum clamp, so a center close to
    /// a wall can still force a radius below the minimum.
    pub fn resize(&mut self, scale: f32, bounds: &SceneBounds, config: &SceneConfig) {
        let scale = scale
            .max(config.min_radius)
            .min(bounds.right - self.position.x)
            .min(bounds.top - self.position.y)
            .min(self.position.x - bounds.left)
            .min(self.position.y - bounds.bottom);
        self.radius = scale;
    }

    /// Relocate the sphere, clamped so the current radius stays inside
    /// the bounds. The requested z passes through untouched.
    pub fn move_to(&mut self, requested: Vec3, bounds: &SceneBounds) {
        let clamped = bounds.clamp_circle_center(crate::planar(requested), self.radius);
        self.position = Vec3::new(clamped.x, clamped.y, requested.z);
    }

    /// Whether `point` lies strictly within the sphere's planar footprint
    pub fn includes(&self, point: Vec3) -> bool {
        let d2 = (crate::planar(point) - crate::planar(self.position)).length_squared();
        d2 < self.radius * self.radius
    }

    /// Advance the body to `now`: Euler integration scaled by wall-clock
    /// time, then wall containment.
    ///
    /// A stalled frame produces a large `dt` and a correspondingly large
    /// jump; no clamp is applied. Each wall is checked independently, so
    /// a corner hit reflects both components in one step.
    pub fn step(&mut self, now: Instant, bounds: &SceneBounds, config: &SceneConfig) {
        let dt = now.duration_since(self.last_update).as_secs_f32() * TIME_SCALE;
        self.last_update = now;

        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;

        if self.position.x - self.radius < bounds.left {
            self.position.x = bounds.left + self.radius;
            self.velocity.x *= -config.restitution;
        }
        if self.position.x + self.radius > bounds.right {
            self.position.x = bounds.right - self.radius;
            self.velocity.x *= -config.restitution;
        }
        if self.position.y - self.radius < bounds.bottom {
            self.position.y = bounds.bottom + self.radius;
            self.velocity.y *= -config.restitution;
        }
        if self.position.y + self.radius > bounds.top {
            self.position.y = bounds.top - self.radius;
            self.velocity.y *= -config.restitution;
        }
    }

    /// Mass proxy: radius cubed, a stand-in for volume at uniform density
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius * self.radius * self.radius
    }

    /// Planar kinetic energy under the `r³` mass proxy
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass() * self.velocity.length_squared()
    }
}

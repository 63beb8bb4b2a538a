//! Scene state
//!
//! A scene owns the bounds, the placed spheres, the editable curves,
//! the per-scene config, and a seeded RNG so launch directions are
//! reproducible from a seed.

use std::time::Instant;

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{Body, SceneBounds};
use crate::config::SceneConfig;
use crate::curve::BezierCurve;
use crate::render::{DrawContext, draw_body, draw_curve};

/// An editable scene of bouncing spheres and Bezier curves
#[derive(Debug)]
pub struct Scene {
    pub bounds: SceneBounds,
    pub bodies: Vec<Body>,
    pub curves: Vec<BezierCurve>,
    pub config: SceneConfig,
    rng: Pcg32,
}

impl Scene {
    pub fn new(bounds: SceneBounds, config: SceneConfig, seed: u64) -> Self {
        log::info!(
            "new scene: {}x{} bounds, seed {seed}",
            bounds.width(),
            bounds.height()
        );
        Self {
            bounds,
            bodies: Vec::new(),
            curves: Vec::new(),
            config,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Place a sphere at minimum radius with a random launch direction.
    /// The requested position is clamped into the bounds. Returns the
    /// body's index.
    pub fn spawn_body(&mut self, color: [f32; 3], position: Vec3, now: Instant) -> usize {
        let config = self.config;
        let mut body = Body::new(color, position, now, &config, &mut self.rng);
        body.move_to(position, &self.bounds);
        log::debug!("spawned sphere {} at {}", self.bodies.len(), body.position);
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Add a curve over the given control points. Returns its index.
    pub fn add_curve(&mut self, control_points: [Vec3; 3]) -> usize {
        self.curves.push(BezierCurve::new(control_points, self.config));
        self.curves.len() - 1
    }

    /// Index of the topmost body whose footprint contains `point`.
    /// Later-spawned bodies win, matching how an editor picks.
    pub fn body_at(&self, point: Vec3) -> Option<usize> {
        self.bodies.iter().rposition(|body| body.includes(point))
    }

    /// Draw every body (shaded, no highlight) and every curve
    pub fn draw(&mut self, ctx: &mut impl DrawContext) {
        for body in &self.bodies {
            draw_body(body, ctx, None, true);
        }
        for curve in &mut self.curves {
            draw_curve(curve, ctx);
        }
    }
}

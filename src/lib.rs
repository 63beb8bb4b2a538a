//! Bezier Bounce - simulation kernel for an interactive scene editor
//!
//! Core modules:
//! - `sim`: Sphere physics (integration, wall containment, pairwise collisions)
//! - `curve`: Adaptive quadratic Bezier tessellation and control-point picking
//! - `render`: Thin immediate-mode draw backend the scene issues commands to
//! - `config`: Per-scene tolerances and physical constants

pub mod config;
pub mod curve;
pub mod render;
pub mod sim;

pub use config::SceneConfig;
pub use curve::BezierCurve;
pub use sim::{Body, Scene, SceneBounds, tick};

use glam::{Vec2, Vec3};

/// Drop the decorative z component of a scene position.
#[inline]
pub fn planar(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Heading of a planar direction in degrees, as fed to the backend's
/// rotate-about-z call.
#[inline]
pub fn heading_degrees(dir: Vec2) -> f32 {
    dir.y.atan2(dir.x).to_degrees()
}

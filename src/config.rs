//! Per-scene configuration
//!
//! Tolerances and physical constants that used to be scattered globals.
//! Each scene carries its own copy, so two scenes can run with different
//! smoothness or selection radii.

use serde::{Deserialize, Serialize};

/// Tolerances and physical constants for one scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Smallest sphere radius that can be placed
    pub min_radius: f32,
    /// Pick radius for curve control points
    pub select_radius: f32,
    /// Curve flatness: segments deviating more than `1/smoothness` from
    /// the true curve keep subdividing
    pub smoothness: f32,
    /// Floor for near-zero chord lengths in the flatness test
    pub epsilon: f32,
    /// Fraction of relative velocity preserved across a collision
    pub restitution: f32,
    /// Speed given to newly placed spheres (scene units per 100 ms)
    pub launch_speed: f32,
    /// Hard cap on subdivision depth for degenerate control triples
    pub max_flatten_depth: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            min_radius: 0.15,
            select_radius: 0.2,
            smoothness: 1000.0,
            epsilon: 1e-9,
            restitution: 0.95,
            launch_speed: 0.2,
            max_flatten_depth: 16,
        }
    }
}

impl SceneConfig {
    /// Flatness threshold in scene units
    #[inline]
    pub fn flatness_threshold(&self) -> f32 {
        1.0 / self.smoothness
    }

    /// Parse a config from its JSON representation
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the config to JSON for host editors that persist it
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

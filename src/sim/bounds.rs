//! Axis-aligned scene rectangle
//!
//! Everything physical lives inside one of these. The walls are the
//! containment surface for sphere bouncing and the clamp target for
//! interactive placement.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle bounding the scene
///
/// Invariant: `left < right` and `bottom < top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl SceneBounds {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        debug_assert!(left < right && bottom < top);
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Clamp a circle center so the circle stays fully inside.
    ///
    /// Lower walls win first, then upper walls; when the rectangle is
    /// tighter than the diameter the upper-wall clamp takes precedence.
    pub fn clamp_circle_center(&self, center: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            center.x.max(self.left + radius).min(self.right - radius),
            center.y.max(self.bottom + radius).min(self.top - radius),
        )
    }

    /// Whether a circle at `center` with `radius` is fully inside
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= self.left
            && center.x + radius <= self.right
            && center.y - radius >= self.bottom
            && center.y + radius <= self.top
    }
}

//! Quadratic Bezier curves with adaptive flattening
//!
//! A curve owns its three control points and a cached polyline
//! approximation. Edits go through the setters, which invalidate the
//! cache; the polyline is rebuilt lazily on the next use. Flattening
//! subdivides until every chord sits within the configured flatness
//! tolerance, with a hard depth cap for degenerate control triples.

use glam::Vec3;

use crate::config::SceneConfig;

/// A controllable quadratic Bezier curve
#[derive(Debug, Clone)]
pub struct BezierCurve {
    control_points: [Vec3; 3],
    /// Samples approximating the curve, valid iff `compiled`
    points: Vec<Vec3>,
    compiled: bool,
    config: SceneConfig,
}

impl BezierCurve {
    pub fn new(control_points: [Vec3; 3], config: SceneConfig) -> Self {
        Self {
            control_points,
            points: Vec::new(),
            compiled: false,
            config,
        }
    }

    #[inline]
    pub fn control_points(&self) -> &[Vec3; 3] {
        &self.control_points
    }

    /// Replace one control point and invalidate the cached polyline
    pub fn set_control_point(&mut self, index: usize, point: Vec3) {
        self.control_points[index] = point;
        self.compiled = false;
    }

    /// Replace all three control points and invalidate the cached polyline
    pub fn set_control_points(&mut self, control_points: [Vec3; 3]) {
        self.control_points = control_points;
        self.compiled = false;
    }

    #[inline]
    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    /// Evaluate the curve at parameter `t`, z fixed at 0
    ///
    /// `t` outside `[0,1]` is accepted and extrapolates.
    pub fn bezier(&self, t: f32) -> Vec3 {
        let [p0, p1, p2] = self.control_points;
        let u = 1.0 - t;
        let x = u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x;
        let y = u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y;
        Vec3::new(x, y, 0.0)
    }

    /// Rebuild the polyline if an edit invalidated it
    ///
    /// Idempotent: a second call without an intervening edit is a no-op,
    /// so at most one tessellation runs per invalidation cycle.
    pub fn compile(&mut self) {
        if self.compiled {
            return;
        }

        let p0 = self.bezier(0.0);
        let p1 = self.bezier(1.0);
        self.points.clear();
        self.points.push(p0);
        self.flatten(p0, p1);
        self.compiled = true;

        log::trace!("curve compiled to {} points", self.points.len());
    }

    /// The polyline approximation, compiling first if needed
    pub fn polyline(&mut self) -> &[Vec3] {
        self.compile();
        &self.points
    }

    /// Adaptive subdivision over `[0,1]`, appending to `self.points`.
    ///
    /// Work-stack formulation of the classic recursive split: a segment
    /// whose curve midpoint deviates from the chord by more than the
    /// flatness threshold splits in two, left half processed first so
    /// points land in parameter order. Depth is capped so collinear or
    /// coincident control triples cannot subdivide without bound.
    fn flatten(&mut self, p0: Vec3, p1: Vec3) {
        let threshold = self.config.flatness_threshold();
        let mut stack = vec![(0.0f32, 1.0f32, p0, p1, 0u32)];

        while let Some((t0, t1, a, b, depth)) = stack.pop() {
            let tm = (t0 + t1) / 2.0;
            let pm = self.bezier(tm);

            let chord = crate::planar(b) - crate::planar(a);
            let length = chord.length().max(self.config.epsilon);
            // Perpendicular distance from the curve midpoint to the chord
            let area = (chord.x * (pm.y - a.y) - chord.y * (pm.x - a.x)).abs();
            let distance = area / length;

            if distance > threshold && depth < self.config.max_flatten_depth {
                stack.push((tm, t1, pm, b, depth + 1));
                stack.push((t0, tm, a, pm, depth + 1));
            } else {
                self.points.push(b);
            }
        }
    }

    /// Index of the control point nearest to `query`, if strictly within
    /// the selection radius. Exact ties keep the earlier index.
    pub fn choose_control_point(&self, query: Vec3) -> Option<usize> {
        let mut which = None;
        let mut best_d2 = self.config.select_radius * self.config.select_radius;
        for (i, cp) in self.control_points.iter().enumerate() {
            let d2 = (crate::planar(query) - crate::planar(*cp)).length_squared();
            if d2 < best_d2 {
                which = Some(i);
                best_d2 = d2;
            }
        }
        which
    }
}

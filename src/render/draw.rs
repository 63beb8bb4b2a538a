//! Per-object draw sequences
//!
//! Each function programs the backend the same way the classic
//! immediate-mode editor did: push a transform, place and scale the
//! primitive, emit it, pop.

use super::{DrawContext, Primitive, colors};
use crate::curve::BezierCurve;
use crate::sim::Body;

/// Draw a sphere at its position and radius.
///
/// `highlight` adds a wireframe pass in the given color on top of the
/// filled mesh; `shaded` brackets the fill with the backend's lighting
/// toggle.
pub fn draw_body(body: &Body, ctx: &mut impl DrawContext, highlight: Option<[f32; 3]>, shaded: bool) {
    ctx.push_matrix();
    ctx.translate(body.position.x, body.position.y, body.position.z);
    ctx.scale(body.radius, body.radius, body.radius);

    if shaded {
        ctx.set_lighting(true);
    }
    ctx.set_color(body.color[0], body.color[1], body.color[2]);
    ctx.draw_primitive(Primitive::Sphere);
    if shaded {
        ctx.set_lighting(false);
    }

    if let Some([r, g, b]) = highlight {
        ctx.set_color(r, g, b);
        ctx.draw_primitive(Primitive::SphereWireframe);
    }

    ctx.pop_matrix();
}

/// Draw a curve's polyline and its three control-point handles.
///
/// Compiles the curve first if an edit invalidated it. Each polyline
/// segment is a unit path primitive rotated to the segment heading and
/// stretched to its length; handles are small squares floating above
/// the curve.
pub fn draw_curve(curve: &mut BezierCurve, ctx: &mut impl DrawContext) {
    let control_points = *curve.control_points();

    for segment in curve.polyline().windows(2) {
        let (p0, p1) = (segment[0], segment[1]);
        let dir = crate::planar(p1) - crate::planar(p0);
        let length = dir.length();
        let angle = crate::heading_degrees(dir);

        ctx.push_matrix();
        ctx.translate(p0.x, p0.y, 1.5);
        ctx.rotate(angle, 0.0, 0.0, 1.0);
        ctx.rotate(90.0, 0.0, 1.0, 0.0);
        ctx.scale(0.01, 0.01, length);
        ctx.set_color(colors::CURVE[0], colors::CURVE[1], colors::CURVE[2]);
        ctx.draw_primitive(Primitive::Path);
        ctx.pop_matrix();
    }

    for cp in control_points {
        ctx.push_matrix();
        ctx.translate(cp.x, cp.y, 1.9);
        ctx.scale(0.02, 0.02, 0.02);
        ctx.set_color(
            colors::CONTROL_POINT[0],
            colors::CONTROL_POINT[1],
            colors::CONTROL_POINT[2],
        );
        ctx.draw_primitive(Primitive::Square);
        ctx.pop_matrix();
    }
}

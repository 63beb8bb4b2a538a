//! Pairwise sphere collision detection and response
//!
//! Elastic collision with damping in the 2D plane. The separation
//! distance carries a synthetic third term from the radius difference
//! of the pair - not an actual z coordinate. This is the classic model
//! reproduced exactly: larger radius gaps report a larger separation,
//! so unequal spheres collide slightly later than their planar
//! footprints suggest.

use glam::Vec2;

use super::Body;
use crate::config::SceneConfig;

/// Result of a positive contact check
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Planar collision normal, pointing from `b` toward `a`
    pub normal: Vec2,
    /// Synthetic 3-term separation distance
    pub distance: f32,
    /// How far inside the combined radii the pair sits
    pub overlap: f32,
}

/// Check two bodies for contact
///
/// Returns `None` when the synthetic distance is at least the combined
/// radii. The distance is floored at `config.epsilon` so coincident
/// centers cannot divide by zero.
pub fn sphere_contact(a: &Body, b: &Body, config: &SceneConfig) -> Option<Contact> {
    let dx = a.position.x - b.position.x;
    let dy = a.position.y - b.position.y;
    let dz = a.radius - b.radius;
    let distance = (dx * dx + dy * dy + dz * dz).sqrt().max(config.epsilon);
    let min_dist = a.radius + b.radius;

    if distance >= min_dist {
        return None;
    }

    // Planar normal, normalized with the 3-term distance
    Some(Contact {
        normal: Vec2::new(dx / distance, dy / distance),
        distance,
        overlap: min_dist - distance,
    })
}

/// Resolve one colliding pair in place
///
/// Applies the impulse along the contact normal with masses `r³` and
/// restitution from the config, then pushes the pair apart in inverse
/// mass ratio. Only approaching pairs are resolved; an overlapping but
/// separating pair is left alone, positions included.
///
/// Returns whether a response was applied.
pub fn resolve_sphere_collision(a: &mut Body, b: &mut Body, config: &SceneConfig) -> bool {
    let Some(contact) = sphere_contact(a, b, config) else {
        return false;
    };

    let relative = a.velocity - b.velocity;
    let vel_along_normal = relative.dot(contact.normal);
    if vel_along_normal >= 0.0 {
        return false;
    }

    let m1 = a.mass();
    let m2 = b.mass();
    let total_mass = m1 + m2;

    let j = -(1.0 + config.restitution) * vel_along_normal / (1.0 / m1 + 1.0 / m2);
    a.velocity += (j / m1) * contact.normal;
    b.velocity -= (j / m2) * contact.normal;

    // Separate the pair; the heavier body moves less
    let correction = contact.overlap / total_mass;
    a.position += (contact.normal * correction * m2).extend(0.0);
    b.position -= (contact.normal * correction * m1).extend(0.0);

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::time::Instant;

    fn body_at(x: f32, y: f32, radius: f32, vel: Vec2) -> Body {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut body = Body::new(
            [1.0, 1.0, 1.0],
            Vec3::new(x, y, 0.0),
            Instant::now(),
            &SceneConfig::default(),
            &mut rng,
        );
        body.radius = radius;
        body.velocity = vel;
        body
    }

    #[test]
    fn test_head_on_equal_masses_swap_velocities() {
        let config = SceneConfig::default();
        let mut a = body_at(0.0, 0.0, 0.2, Vec2::new(0.1, 0.0));
        let mut b = body_at(0.3, 0.0, 0.2, Vec2::new(-0.1, 0.0));

        assert!(resolve_sphere_collision(&mut a, &mut b, &config));

        // Equal masses: velocities swap, scaled by restitution
        assert!((a.velocity.x - (-0.095)).abs() < 1e-5);
        assert!((b.velocity.x - 0.095).abs() < 1e-5);
        assert!(a.velocity.y.abs() < 1e-6 && b.velocity.y.abs() < 1e-6);

        // Symmetric separation up to the combined radii
        assert!((a.position.x - (-0.05)).abs() < 1e-5);
        assert!((b.position.x - 0.35).abs() < 1e-5);
        let gap = (b.position.x - a.position.x).abs();
        assert!(gap >= a.radius + b.radius - 1e-5);
    }

    #[test]
    fn test_no_response_when_apart() {
        let config = SceneConfig::default();
        let mut a = body_at(0.0, 0.0, 0.2, Vec2::new(0.1, 0.0));
        let mut b = body_at(0.5, 0.0, 0.2, Vec2::new(-0.1, 0.0));

        assert!(!resolve_sphere_collision(&mut a, &mut b, &config));
        assert_eq!(a.velocity, Vec2::new(0.1, 0.0));
        assert_eq!(a.position, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_no_response_when_separating() {
        let config = SceneConfig::default();
        let mut a = body_at(0.0, 0.0, 0.2, Vec2::new(-0.1, 0.0));
        let mut b = body_at(0.3, 0.0, 0.2, Vec2::new(0.1, 0.0));

        // Overlapping but moving apart: no impulse, no separation push
        assert!(!resolve_sphere_collision(&mut a, &mut b, &config));
        assert_eq!(a.position.x, 0.0);
        assert_eq!(b.position.x, 0.3);
    }

    #[test]
    fn test_radius_difference_widens_distance() {
        let config = SceneConfig::default();
        // Planar gap 0.35 < combined radii 0.4, but the radius-difference
        // term lifts the synthetic distance past the threshold.
        let a = body_at(0.0, 0.0, 0.3, Vec2::ZERO);
        let b = body_at(0.35, 0.0, 0.1, Vec2::ZERO);
        assert!(sphere_contact(&a, &b, &config).is_none());
    }

    #[test]
    fn test_coincident_centers_stay_finite() {
        let config = SceneConfig::default();
        let mut a = body_at(0.0, 0.0, 0.2, Vec2::new(0.1, 0.0));
        let mut b = body_at(0.0, 0.0, 0.2, Vec2::new(-0.1, 0.0));

        resolve_sphere_collision(&mut a, &mut b, &config);
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert!(a.position.is_finite() && b.position.is_finite());
    }

    #[test]
    fn test_heavier_body_moves_less() {
        let config = SceneConfig::default();
        let mut a = body_at(0.0, 0.0, 0.4, Vec2::new(0.1, 0.0));
        let mut b = body_at(0.5, 0.0, 0.2, Vec2::new(-0.1, 0.0));
        let (a0, b0) = (a.position.x, b.position.x);

        assert!(resolve_sphere_collision(&mut a, &mut b, &config));
        assert!((a.position.x - a0).abs() < (b.position.x - b0).abs());
    }

    proptest! {
        #[test]
        fn prop_collision_never_gains_energy(
            bx in -0.3f32..0.3,
            by in -0.3f32..0.3,
            ra in 0.15f32..0.5,
            rb in 0.15f32..0.5,
            avx in -1.0f32..1.0,
            avy in -1.0f32..1.0,
            bvx in -1.0f32..1.0,
            bvy in -1.0f32..1.0,
        ) {
            let config = SceneConfig::default();
            let mut a = body_at(0.0, 0.0, ra, Vec2::new(avx, avy));
            let mut b = body_at(bx, by, rb, Vec2::new(bvx, bvy));

            let before = a.kinetic_energy() + b.kinetic_energy();
            resolve_sphere_collision(&mut a, &mut b, &config);
            let after = a.kinetic_energy() + b.kinetic_energy();

            prop_assert!(after <= before + 1e-6);
        }
    }
}

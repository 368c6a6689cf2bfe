//! Ground reaction and kinetic friction for circles resting on a half-plane.

use super::{
    params::StepParams,
    shape::{Circle, HalfPlane},
};
use crate::math::Vec2;

/// Forces acting on a dynamic body during one integration step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactForces {
    pub gravity: Vec2,
    pub normal: Vec2,
    pub friction: Vec2,
}

impl ContactForces {
    /// Forces on a body that isn't touching the ground.
    pub fn free(mass: f64, gravity_accel: Vec2) -> Self {
        ContactForces {
            gravity: mass * gravity_accel,
            ..Default::default()
        }
    }

    #[inline]
    pub fn net(&self) -> Vec2 {
        self.gravity + self.normal + self.friction
    }
}

/// Compute the forces on a circle near the ground.
///
/// A circle counts as resting when its penetration into the ground is at least
/// `-params.resting_tolerance`. While resting, the normal force cancels the component
/// of gravity into the ground and kinetic friction of magnitude `μN` opposes the
/// tangential component of gravity.
/// There is no static friction: on a steep enough slope or with a large enough `μ`
/// the friction force exceeds the downhill pull.
pub fn ground_forces(
    center: Vec2,
    circle: &Circle,
    mass: f64,
    ground_point: Vec2,
    ground: &HalfPlane,
    gravity_accel: Vec2,
    params: &StepParams,
) -> ContactForces {
    let mut forces = ContactForces::free(mass, gravity_accel);

    let normal = *ground.normal();
    let penetration = circle.radius - ground.signed_distance(ground_point, center);
    if penetration < -params.resting_tolerance {
        return forces;
    }

    let g_normal_mag = gravity_accel.dot(normal);
    // the ground can only push; gravity pulling away from it leaves nothing to cancel
    if g_normal_mag >= 0.0 {
        return forces;
    }
    let g_tangent = gravity_accel - normal * g_normal_mag;

    forces.normal = normal * (-g_normal_mag * mass);
    let normal_mag = forces.normal.mag();

    let g_tangent_mag = g_tangent.mag();
    if g_tangent_mag > params.tangent_threshold && normal_mag > 0.0 {
        let kinetic = circle.friction * normal_mag;
        forces.friction = -g_tangent / g_tangent_mag * kinetic;
    }

    forces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Angle;

    const GROUND_POINT: Vec2 = Vec2 { x: 640.0, y: 540.0 };

    fn resting_center(ground: &HalfPlane, radius: f64) -> Vec2 {
        GROUND_POINT + *ground.normal() * radius
    }

    #[test]
    fn airborne_circle_only_feels_gravity() {
        let ground = HalfPlane::default();
        let center = Vec2::new(640.0, 300.0);
        let f = ground_forces(
            center,
            &Circle::new(18.0).with_friction(0.5),
            2.0,
            GROUND_POINT,
            &ground,
            Vec2::new(0.0, 300.0),
            &StepParams::default(),
        );
        assert_eq!(f, ContactForces::free(2.0, Vec2::new(0.0, 300.0)));
    }

    #[test]
    fn flat_ground_cancels_gravity_without_friction() {
        let ground = HalfPlane::default();
        let f = ground_forces(
            resting_center(&ground, 18.0),
            &Circle::new(18.0).with_friction(0.8),
            2.0,
            GROUND_POINT,
            &ground,
            Vec2::new(0.0, 300.0),
            &StepParams::default(),
        );
        assert!((f.normal - Vec2::new(0.0, -600.0)).mag() < 1e-9);
        assert_eq!(f.friction, Vec2::zero());
        assert!(f.net().mag() < 1e-9);
    }

    #[test]
    fn slope_friction_is_kinetic_and_opposes_sliding() {
        let ground = HalfPlane::from_rotation(Angle::Deg(30.0));
        for mu in [0.0, 0.1, 0.3, 0.8, 5.0] {
            let mass = 8.0;
            let g = Vec2::new(0.0, 300.0);
            let f = ground_forces(
                resting_center(&ground, 18.0),
                &Circle::new(18.0).with_friction(mu),
                mass,
                GROUND_POINT,
                &ground,
                g,
                &StepParams::default(),
            );
            let n_mag = f.normal.mag();
            assert!((n_mag - mass * 300.0 * Angle::Deg(30.0).rad().cos()).abs() < 1e-6);
            assert!((f.friction.mag() - mu * n_mag).abs() < 1e-9);

            // friction acts against the downhill pull
            let tangent = *ground.tangent();
            let g_t = mass * g.dot(tangent);
            let fr_t = f.friction.dot(tangent);
            assert!(fr_t * g_t <= 0.0);
        }
    }

    #[test]
    fn rough_shallow_slope_friction_exceeds_downhill_pull() {
        let ground = HalfPlane::from_rotation(Angle::Deg(10.0));
        let f = ground_forces(
            resting_center(&ground, 18.0),
            &Circle::new(18.0).with_friction(1.0),
            1.0,
            GROUND_POINT,
            &ground,
            Vec2::new(0.0, 300.0),
            &StepParams::default(),
        );
        let cos = Angle::Deg(10.0).rad().cos();
        let sin = Angle::Deg(10.0).rad().sin();
        assert!((f.friction.mag() - 300.0 * cos).abs() < 1e-6);
        assert!(f.friction.mag() > 300.0 * sin);
    }

    #[test]
    fn resting_tolerance_controls_contact() {
        let ground = HalfPlane::default();
        let params = StepParams::default();
        let just_above = resting_center(&ground, 18.0) + Vec2::new(0.0, -0.5);
        let well_above = resting_center(&ground, 18.0) + Vec2::new(0.0, -1.5);
        let g = Vec2::new(0.0, 300.0);
        let circle = Circle::new(18.0).with_friction(0.1);
        let near = ground_forces(just_above, &circle, 1.0, GROUND_POINT, &ground, g, &params);
        let far = ground_forces(well_above, &circle, 1.0, GROUND_POINT, &ground, g, &params);
        assert!(near.normal.mag() > 0.0);
        assert_eq!(far.normal, Vec2::zero());
    }
}

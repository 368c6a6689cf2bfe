//! Narrow phase overlap tests and the positional corrections that resolve them.

pub mod broadphase;
pub use broadphase::{BroadPhase, BruteForce};

pub mod overlap;
pub use overlap::{circle_circle_overlap, circle_half_plane_overlap, intersection_check};

pub mod response;
pub use response::{separate_circle_circle, separate_circle_half_plane};

use super::{body::Body, shape::Shape};
use crate::math::{Unit, Vec2};

/// An overlap between two bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// The separating direction, facing away from the first body.
    pub normal: Unit<Vec2>,
    /// Penetration depth before any correction. Always positive.
    pub depth: f64,
}

impl Contact {
    /// The same contact seen from the other body.
    #[inline]
    pub fn flipped(self) -> Self {
        Contact {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}

/// Test a pair of bodies for overlap and, if they overlap, push them apart.
///
/// Returns the contact that was found, with the normal facing away from `b1`.
/// Pairs of static bodies can still report a contact but are never moved,
/// and two half-planes never collide with each other.
pub fn resolve(b1: &mut Body, b2: &mut Body, bias: f64) -> Option<Contact> {
    match (b1.shape, b2.shape) {
        (Shape::Circle(c1), Shape::Circle(c2)) => {
            separate_circle_circle(b1, c1.radius, b2, c2.radius, bias)
        }
        (Shape::Circle(c), Shape::HalfPlane(h)) => {
            separate_circle_half_plane(b1, c.radius, b2.position, &h, bias)
        }
        (Shape::HalfPlane(h), Shape::Circle(c)) => {
            separate_circle_half_plane(b2, c.radius, b1.position, &h, bias).map(Contact::flipped)
        }
        (Shape::HalfPlane(_), Shape::HalfPlane(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{math::Angle, physics::shape::Circle};

    fn ball(x: f64, y: f64, r: f64) -> Body {
        Body::new_circle(Circle::new(r), 1.0).with_position(Vec2::new(x, y))
    }

    #[test]
    fn resolve_dispatches_in_either_order() {
        let mut ground = Body::new_half_plane(Vec2::new(0.0, 100.0), Angle::default());
        let mut c = ball(0.0, 95.0, 10.0).with_velocity(Vec2::new(3.0, 40.0));

        let contact = resolve(&mut ground, &mut c, 0.001).unwrap();
        assert!((contact.depth - 5.0).abs() < 1e-9);
        // from the plane towards the circle
        assert_eq!(*contact.normal, Vec2::new(0.0, -1.0));
        assert!((c.position.y - (90.0 - 0.001)).abs() < 1e-9);
        assert_eq!(c.velocity, Vec2::new(3.0, 0.0));
        assert_eq!(ground.position, Vec2::new(0.0, 100.0));

        let mut c = ball(0.0, 95.0, 10.0);
        let contact = resolve(&mut c, &mut ground, 0.001).unwrap();
        assert_eq!(*contact.normal, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn half_planes_ignore_each_other() {
        let mut h1 = Body::new_half_plane(Vec2::zero(), Angle::default());
        let mut h2 = Body::new_half_plane(Vec2::zero(), Angle::Deg(30.0));
        assert!(resolve(&mut h1, &mut h2, 0.001).is_none());
    }

    #[test]
    fn static_pairs_report_but_do_not_move() {
        let mut a = Body::new_static_circle(Circle::new(10.0));
        let mut b = Body::new_static_circle(Circle::new(10.0)).with_position(Vec2::new(5.0, 0.0));
        let contact = resolve(&mut a, &mut b, 0.001).unwrap();
        assert!((contact.depth - 15.0).abs() < 1e-9);
        assert_eq!(a.position, Vec2::zero());
        assert_eq!(b.position, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn separated_pair_has_no_contact() {
        let mut a = ball(0.0, 0.0, 10.0);
        let mut b = ball(30.0, 0.0, 10.0);
        assert!(resolve(&mut a, &mut b, 0.001).is_none());
    }

    #[test]
    fn resolved_contact_matches_overlap_check() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let mut pos = || Vec2::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0));
            let (p1, p2) = (pos(), pos());
            let angle = Angle::Deg(rng.gen_range(-180.0..180.0));
            let pairs = [
                (ball(p1.x, p1.y, 10.0), ball(p2.x, p2.y, 15.0)),
                (ball(p1.x, p1.y, 10.0), Body::new_half_plane(p2, angle)),
                (Body::new_half_plane(p1, angle), ball(p2.x, p2.y, 10.0)),
            ];
            for (mut b1, mut b2) in pairs {
                let expected = intersection_check(&b1, &b2);
                assert_eq!(resolve(&mut b1, &mut b2, 0.001), expected);
            }
        }
    }
}

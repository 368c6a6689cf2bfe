//! Pure overlap predicates. Nothing in here modifies a body.

use super::Contact;
use crate::{
    math::{Unit, Vec2},
    physics::{
        body::Body,
        shape::{HalfPlane, Shape},
    },
};

/// Whether two circles overlap. Exactly touching circles don't.
#[inline]
pub fn circle_circle_overlap(pos_a: Vec2, r_a: f64, pos_b: Vec2, r_b: f64) -> bool {
    (pos_b - pos_a).mag() < r_a + r_b
}

/// How deep a circle sinks into a half-plane whose boundary passes through `boundary_point`.
/// Negative when the circle is clear of it.
#[inline]
pub fn circle_half_plane_penetration(
    center: Vec2,
    radius: f64,
    boundary_point: Vec2,
    plane: &HalfPlane,
) -> f64 {
    radius - plane.signed_distance(boundary_point, center)
}

/// Whether a circle overlaps a half-plane. The circle always comes first.
#[inline]
pub fn circle_half_plane_overlap(
    center: Vec2,
    radius: f64,
    boundary_point: Vec2,
    plane: &HalfPlane,
) -> bool {
    circle_half_plane_penetration(center, radius, boundary_point, plane) > 0.0
}

/// Checks two bodies for overlap, with the contact normal facing away from `b1`.
pub fn intersection_check(b1: &Body, b2: &Body) -> Option<Contact> {
    use Shape::*;
    match (&b1.shape, &b2.shape) {
        (Circle(c1), Circle(c2)) => circle_circle(b1.position, c1.radius, b2.position, c2.radius),
        (Circle(c), HalfPlane(h)) => circle_half_plane(b1.position, c.radius, b2.position, h),
        (HalfPlane(h), Circle(c)) => {
            circle_half_plane(b2.position, c.radius, b1.position, h).map(Contact::flipped)
        }
        (HalfPlane(_), HalfPlane(_)) => None,
    }
}

fn circle_circle(pos_a: Vec2, r_a: f64, pos_b: Vec2, r_b: f64) -> Option<Contact> {
    if !circle_circle_overlap(pos_a, r_a, pos_b, r_b) {
        return None;
    }
    let ab = pos_b - pos_a;
    let dist = ab.mag();
    Some(Contact {
        normal: contact_normal(ab, dist),
        depth: (r_a + r_b) - dist,
    })
}

fn circle_half_plane(
    center: Vec2,
    radius: f64,
    boundary_point: Vec2,
    plane: &HalfPlane,
) -> Option<Contact> {
    let depth = circle_half_plane_penetration(center, radius, boundary_point, plane);
    (depth > 0.0).then(|| Contact {
        normal: -plane.normal(),
        depth,
    })
}

/// Direction from A to B given their offset and its length.
/// Coincident centers have no direction, so the x axis is used instead.
#[inline]
pub(super) fn contact_normal(ab: Vec2, dist: f64) -> Unit<Vec2> {
    if dist > 0.0 {
        Unit::new_unchecked(ab / dist)
    } else {
        Unit::unit_x()
    }
}

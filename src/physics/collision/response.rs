//! Positional correction for overlapping bodies.
//!
//! Overlaps are resolved by moving bodies apart by the penetration depth plus a small bias,
//! then removing the part of their velocity that would carry them back into each other.
//! Nothing bounces: restitution along the contact normal is zero
//! and tangential velocity is left alone.

use super::{overlap, Contact};
use crate::{
    math::Vec2,
    physics::{body::Body, shape::HalfPlane},
};

/// Push two overlapping circles apart along the line between their centers.
///
/// The correction is shared by move weight: a static circle takes none of it,
/// so a dynamic circle paired with a static one moves the whole distance.
/// If both are static, nothing moves.
/// Returns the contact if the circles overlapped, with the normal facing from `a` to `b`.
pub fn separate_circle_circle(
    a: &mut Body,
    r_a: f64,
    b: &mut Body,
    r_b: f64,
    bias: f64,
) -> Option<Contact> {
    let ab = b.position - a.position;
    let dist = ab.mag();
    let depth = (r_a + r_b) - dist;
    if depth <= 0.0 {
        return None;
    }
    let normal = overlap::contact_normal(ab, dist);
    let contact = Contact { normal, depth };

    let weights = [a.move_weight(), b.move_weight()];
    let weight_sum = weights[0] + weights[1];
    if weight_sum <= 0.0 {
        return Some(contact);
    }

    let correction = *normal * (depth + bias);
    a.position -= correction * (weights[0] / weight_sum);
    b.position += correction * (weights[1] / weight_sum);

    // cancel velocity carrying each body towards the other
    let vel_a = a.velocity.dot(*normal);
    if !a.is_static() && vel_a > 0.0 {
        a.velocity -= *normal * vel_a;
    }
    let vel_b = b.velocity.dot(*normal);
    if !b.is_static() && vel_b < 0.0 {
        b.velocity -= *normal * vel_b;
    }

    Some(contact)
}

/// Push a circle out of a half-plane along the plane's normal.
///
/// The half-plane never moves. A static circle is reported but left in place.
/// Returns the contact if they overlapped, with the normal facing from the circle to the plane.
pub fn separate_circle_half_plane(
    circle: &mut Body,
    radius: f64,
    boundary_point: Vec2,
    plane: &HalfPlane,
    bias: f64,
) -> Option<Contact> {
    let depth =
        overlap::circle_half_plane_penetration(circle.position, radius, boundary_point, plane);
    if depth <= 0.0 {
        return None;
    }

    if !circle.is_static() {
        let normal = *plane.normal();
        circle.position += normal * (depth + bias);

        let vel_n = circle.velocity.dot(normal);
        if vel_n < 0.0 {
            circle.velocity -= normal * vel_n;
        }
    }

    Some(Contact {
        normal: -plane.normal(),
        depth,
    })
}

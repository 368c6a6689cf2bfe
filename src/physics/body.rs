use super::{
    friction::ContactForces,
    shape::{Circle, HalfPlane, Shape},
    trail::Trail,
};
use crate::{
    error::{Error, Result},
    math::{Angle, Vec2},
};

/// RGBA color in the 0..=1 range, used only to tell a renderer how to draw a body.
pub type Color = [f32; 4];

pub mod colors {
    use super::Color;

    pub const RED: Color = [0.9, 0.16, 0.22, 1.0];
    pub const GREEN: Color = [0.0, 0.89, 0.19, 1.0];
    pub const BLUE: Color = [0.0, 0.47, 0.95, 1.0];
    pub const YELLOW: Color = [0.99, 0.98, 0.0, 1.0];
    pub const GRAY: Color = [0.51, 0.51, 0.51, 1.0];

    /// Color of any body that overlapped something during the last tick.
    pub const CONTACT_COLOR: Color = RED;
}

/// A physical entity in the world: a dynamic or static circle, or a static half-plane.
#[derive(Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    pub mass: Mass,
    pub(crate) shape: Shape,
    pub base_color: Color,
    pub(crate) in_contact: bool,
    pub(crate) forces: ContactForces,
    pub(crate) trail: Option<Trail>,
}

impl Body {
    /// A dynamic circle that responds to gravity and gets pushed out of overlaps.
    pub fn new_circle(circle: Circle, mass: f64) -> Self {
        Self::new(Shape::Circle(circle), Mass::from(mass))
    }

    /// A circle that never moves.
    pub fn new_static_circle(circle: Circle) -> Self {
        Self::new(Shape::Circle(circle), Mass::Infinite)
    }

    /// A static half-plane whose boundary passes through `point`.
    pub fn new_half_plane(point: Vec2, rotation: Angle) -> Self {
        Self::new(
            Shape::HalfPlane(HalfPlane::from_rotation(rotation)),
            Mass::Infinite,
        )
        .with_position(point)
        .with_base_color(colors::GRAY)
    }

    fn new(shape: Shape, mass: Mass) -> Self {
        Body {
            position: Vec2::zero(),
            velocity: Vec2::zero(),
            mass,
            shape,
            base_color: colors::GREEN,
            in_contact: false,
            forces: ContactForces::default(),
            trail: None,
        }
    }

    /// Set the position of the body in a builder-like chain.
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set the velocity of the body in a builder-like chain.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = color;
        self
    }

    /// Record up to `capacity` positions of this body, one per tick.
    pub fn with_trail(mut self, capacity: usize) -> Self {
        self.trail = Some(Trail::with_capacity(capacity));
        self
    }

    /// Static bodies are never integrated and never displaced by collisions.
    #[inline]
    pub fn is_static(&self) -> bool {
        matches!(self.mass, Mass::Infinite)
    }

    /// Share of a positional correction this body takes when paired with another body.
    #[inline]
    pub(crate) fn move_weight(&self) -> f64 {
        if self.is_static() {
            0.0
        } else {
            1.0
        }
    }

    /// The shape is fixed when the body is created.
    /// Half-planes can still be rotated through [`World::set_half_plane_rotation`][crate::World::set_half_plane_rotation].
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Whether the body overlapped anything during the last tick.
    #[inline]
    pub fn in_contact(&self) -> bool {
        self.in_contact
    }

    /// The color to draw this body with, flashing while in contact.
    #[inline]
    pub fn color(&self) -> Color {
        if self.in_contact {
            colors::CONTACT_COLOR
        } else {
            self.base_color
        }
    }

    /// Forces that acted on the body during the last integration.
    #[inline]
    pub fn forces(&self) -> &ContactForces {
        &self.forces
    }

    #[inline]
    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    #[inline]
    pub fn trail_mut(&mut self) -> Option<&mut Trail> {
        self.trail.as_mut()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Mass::Finite { mass, .. } = self.mass {
            if !(mass > 0.0 && mass.is_finite()) {
                return Err(Error::InvalidMass(mass));
            }
        }
        match &self.shape {
            Shape::Circle(circle) => circle.validate(),
            Shape::HalfPlane(_) => Ok(()),
        }
    }
}

/// Mass of a body, which is infinite for static bodies.
///
/// This stores both a mass value and its inverse, because dividing forces by mass
/// happens for every dynamic body on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mass {
    Finite { mass: f64, inverse: f64 },
    Infinite,
}

impl From<f64> for Mass {
    #[inline]
    fn from(mass: f64) -> Self {
        Mass::Finite {
            mass,
            inverse: 1.0 / mass,
        }
    }
}

impl Mass {
    /// Get the inverse of the mass, which is zero if the mass is infinite.
    #[inline]
    pub fn inv(&self) -> f64 {
        match self {
            Mass::Finite { inverse, .. } => *inverse,
            Mass::Infinite => 0.0,
        }
    }

    /// Get the mass if it's finite.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Mass::Finite { mass, .. } => Some(*mass),
            Mass::Infinite => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_bodies_have_no_move_weight() {
        let wall = Body::new_static_circle(Circle::new(10.0));
        assert!(wall.is_static());
        assert_eq!(wall.move_weight(), 0.0);
        assert_eq!(wall.mass.inv(), 0.0);

        let ball = Body::new_circle(Circle::new(10.0), 4.0);
        assert!(!ball.is_static());
        assert_eq!(ball.move_weight(), 1.0);
        assert_eq!(ball.mass.inv(), 0.25);
    }

    #[test]
    fn contact_flag_overrides_color() {
        let mut ball = Body::new_circle(Circle::new(10.0), 1.0).with_base_color(colors::BLUE);
        assert_eq!(ball.color(), colors::BLUE);
        ball.in_contact = true;
        assert_eq!(ball.color(), colors::CONTACT_COLOR);
    }

    #[test]
    fn validation_rejects_bad_mass() {
        assert_eq!(
            Body::new_circle(Circle::new(1.0), 0.0).validate(),
            Err(Error::InvalidMass(0.0))
        );
        assert!(Body::new_circle(Circle::new(1.0), f64::INFINITY)
            .validate()
            .is_err());
        assert!(Body::new_half_plane(Vec2::zero(), Angle::Deg(25.0))
            .validate()
            .is_ok());
    }
}

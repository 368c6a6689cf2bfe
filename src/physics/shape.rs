use crate::{
    error::{Error, Result},
    math::{self as m, Angle, Unit, Vec2},
};

/// The physical shape of a body, fixed when the body is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    HalfPlane(HalfPlane),
}

impl Shape {
    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::HalfPlane(_) => None,
        }
    }

    #[inline]
    pub fn as_half_plane(&self) -> Option<&HalfPlane> {
        match self {
            Shape::HalfPlane(h) => Some(h),
            Shape::Circle(_) => None,
        }
    }

    #[inline]
    pub fn as_half_plane_mut(&mut self) -> Option<&mut HalfPlane> {
        match self {
            Shape::HalfPlane(h) => Some(h),
            Shape::Circle(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
    /// Coefficient of kinetic friction against the ground.
    pub friction: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle {
            radius,
            friction: 0.0,
        }
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(Error::InvalidRadius(self.radius));
        }
        if !(self.friction >= 0.0 && self.friction.is_finite()) {
            return Err(Error::InvalidFriction(self.friction));
        }
        Ok(())
    }
}

/// An infinite static boundary line.
///
/// The line passes through the owning body's position.
/// Everything on the side the normal points to is free space;
/// a circle overlaps when `radius - dot(center - point, normal) > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    normal: Unit<Vec2>,
    rotation: Angle,
}

impl HalfPlane {
    /// Normal of an unrotated half-plane, pointing up on screen.
    pub const BASE_NORMAL: Vec2 = Vec2 { x: 0.0, y: -1.0 };

    /// A half-plane whose normal is [`BASE_NORMAL`][Self::BASE_NORMAL] rotated by `angle`.
    pub fn from_rotation(angle: Angle) -> Self {
        HalfPlane {
            normal: Unit::new_unchecked(Self::BASE_NORMAL).rotated(angle),
            rotation: angle,
        }
    }

    /// A half-plane facing in the direction of `normal`, which doesn't need to be normalized.
    pub fn from_normal(normal: Vec2) -> Result<Self> {
        let normal = Unit::try_new(normal).ok_or(Error::DegenerateNormal)?;
        let base = Self::BASE_NORMAL;
        // signed angle from the base normal, in the same sense as math::rotate
        let rotation = Angle::Rad((base.x * normal.y - base.y * normal.x).atan2(base.dot(*normal)));
        Ok(HalfPlane { normal, rotation })
    }

    /// Re-orient the half-plane. The normal is recomputed and stays unit length.
    pub fn set_rotation(&mut self, angle: Angle) {
        *self = Self::from_rotation(angle);
    }

    #[inline]
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    #[inline]
    pub fn normal(&self) -> Unit<Vec2> {
        self.normal
    }

    /// Direction along the boundary line.
    #[inline]
    pub fn tangent(&self) -> Unit<Vec2> {
        m::unit_left_normal(self.normal)
    }

    /// Signed distance of `point` from the boundary passing through `boundary_point`,
    /// positive on the free side.
    #[inline]
    pub fn signed_distance(&self, boundary_point: Vec2, point: Vec2) -> f64 {
        (point - boundary_point).dot(*self.normal)
    }
}

impl Default for HalfPlane {
    fn default() -> Self {
        Self::from_rotation(Angle::default())
    }
}

//! Types, aliases and helper operations for doing math with `ultraviolet`.
//!
//! Coordinates are in screen space: pixels, with +X to the right and +Y down.
use std::f64::consts::PI;
pub use ultraviolet as uv;

pub type Vec2 = uv::DVec2;

/// An angle in either degrees or radians.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub enum Angle {
    Rad(f64),
    Deg(f64),
}
impl Angle {
    /// Get the angle as degrees.
    #[inline]
    pub fn deg(&self) -> f64 {
        match self {
            Angle::Rad(rad) => rad * 180.0 / PI,
            Angle::Deg(deg) => *deg,
        }
    }

    /// Get the angle as radians.
    #[inline]
    pub fn rad(&self) -> f64 {
        match self {
            Angle::Rad(rad) => *rad,
            Angle::Deg(deg) => deg * PI / 180.0,
        }
    }
}
impl Default for Angle {
    fn default() -> Self {
        Angle::Rad(0.0)
    }
}

/// A wrapper type to indicate a vector should always be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit<T>(T);

impl Unit<Vec2> {
    /// Normalize `v`. Returns `None` for a zero-length or non-finite vector.
    pub fn try_new(v: Vec2) -> Option<Self> {
        let mag = v.mag();
        if mag > 0.0 && mag.is_finite() {
            Some(Unit(v / mag))
        } else {
            None
        }
    }

    pub const fn new_unchecked(v: Vec2) -> Self {
        Unit(v)
    }

    pub fn unit_x() -> Self {
        Unit(Vec2::unit_x())
    }

    pub fn unit_y() -> Self {
        Unit(Vec2::unit_y())
    }

    /// Rotate the unit vector, keeping it normalized.
    pub fn rotated(self, angle: Angle) -> Self {
        Unit(rotate(self.0, angle).normalized())
    }

    #[inline]
    pub fn into_inner(self) -> Vec2 {
        self.0
    }
}

impl<T> std::ops::Deref for Unit<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Neg for Unit<T>
where
    T: std::ops::Neg,
{
    type Output = Unit<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        Unit(-self.0)
    }
}

// Vec2 utils

/// Rotate a vector by an angle.
///
/// With +Y pointing down, a positive angle turns the vector clockwise on screen.
#[inline]
pub fn rotate(v: Vec2, angle: Angle) -> Vec2 {
    let (sin, cos) = angle.rad().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[inline]
pub fn left_normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
#[inline]
pub fn unit_left_normal(u: Unit<Vec2>) -> Unit<Vec2> {
    Unit::new_unchecked(left_normal(*u))
}

/// Module to (de)serialize `Vec2`s as `[x, y]` arrays,
/// using the serde attribute `#[serde(with = "serde_vec2")]`.
#[cfg(feature = "serde-types")]
pub mod serde_vec2 {
    use super::*;

    pub fn serialize<S>(v: &Vec2, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::Serialize;
        [v.x, v.y].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec2, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        <[f64; 2]>::deserialize(deserializer).map(|[x, y]| Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).mag() < 1e-9
    }

    #[test]
    fn angle_conversions() {
        assert!((Angle::Deg(180.0).rad() - PI).abs() < 1e-12);
        assert!((Angle::Rad(PI / 2.0).deg() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_follows_screen_convention() {
        // a quarter turn takes +X to +Y, which is downward on screen
        assert!(close(
            rotate(Vec2::unit_x(), Angle::Deg(90.0)),
            Vec2::unit_y()
        ));
        assert!(close(
            rotate(Vec2::new(0.0, -1.0), Angle::Deg(90.0)),
            Vec2::unit_x()
        ));
    }

    #[test]
    fn unit_rejects_zero_vectors() {
        assert!(Unit::try_new(Vec2::zero()).is_none());
        assert!(Unit::try_new(Vec2::new(f64::NAN, 1.0)).is_none());
        let u = Unit::try_new(Vec2::new(3.0, 4.0)).unwrap();
        assert!((u.mag() - 1.0).abs() < 1e-12);
    }
}

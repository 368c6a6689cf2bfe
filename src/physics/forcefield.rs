use crate::math::{self as m, Angle, Vec2};

/// A (possibly) position-dependent acceleration that is
/// fed to [`World::step_with_field`][super::World::step_with_field]
/// and applied to all dynamic bodies each tick.
///
/// The ground friction model treats the value at a body's position
/// as the gravitational acceleration acting on it.
pub trait ForceField {
    fn value_at(&self, position: Vec2) -> Vec2;
}

pub struct NoneField;
impl ForceField for NoneField {
    fn value_at(&self, _: Vec2) -> Vec2 {
        Vec2::zero()
    }
}

/// A combination of two different force fields.
pub struct Sum<F1: ForceField, F2: ForceField>(pub F1, pub F2);
impl<F1: ForceField, F2: ForceField> ForceField for Sum<F1, F2> {
    fn value_at(&self, pos: Vec2) -> Vec2 {
        self.0.value_at(pos) + self.1.value_at(pos)
    }
}

/// Constant gravity field over all of space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity(pub Vec2);

impl Gravity {
    /// Gravity of the given magnitude pointing along `angle`,
    /// measured from +X towards +Y (so 90 degrees points down on screen).
    pub fn from_polar(magnitude: f64, angle: Angle) -> Self {
        Gravity(magnitude * m::rotate(Vec2::unit_x(), angle))
    }
}

impl ForceField for Gravity {
    fn value_at(&self, _pos: Vec2) -> Vec2 {
        self.0
    }
}

use crate::math::Vec2;

/// Scheme used to advance a dynamic body over one timestep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub enum Integrator {
    /// Update velocity first, then move with the updated velocity.
    #[default]
    SemiImplicitEuler,
    /// Move with the old velocity, then update velocity.
    ExplicitEuler,
}

impl Integrator {
    #[inline]
    pub fn advance(self, position: &mut Vec2, velocity: &mut Vec2, accel: Vec2, dt: f64) {
        match self {
            Integrator::SemiImplicitEuler => {
                *velocity += accel * dt;
                *position += *velocity * dt;
            }
            Integrator::ExplicitEuler => {
                *position += *velocity * dt;
                *velocity += accel * dt;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semi_implicit_moves_with_new_velocity() {
        let (mut p, mut v) = (Vec2::zero(), Vec2::zero());
        Integrator::SemiImplicitEuler.advance(&mut p, &mut v, Vec2::new(0.0, 10.0), 0.5);
        assert_eq!(v, Vec2::new(0.0, 5.0));
        assert_eq!(p, Vec2::new(0.0, 2.5));
    }

    #[test]
    fn explicit_moves_with_old_velocity() {
        let (mut p, mut v) = (Vec2::zero(), Vec2::zero());
        Integrator::ExplicitEuler.advance(&mut p, &mut v, Vec2::new(0.0, 10.0), 0.5);
        assert_eq!(v, Vec2::new(0.0, 5.0));
        assert_eq!(p, Vec2::zero());
    }
}

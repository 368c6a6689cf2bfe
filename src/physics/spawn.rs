use super::{
    body::{colors, Body, Color},
    shape::Circle,
};
use crate::math::{Angle, Vec2};

/// Properties of a dynamic circle created by [`World::spawn`][super::World::spawn].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct SpawnParams {
    pub radius: f64,
    pub mass: f64,
    /// Coefficient of kinetic friction against the ground.
    pub friction: f64,
    pub base_color: Color,
}

impl SpawnParams {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = color;
        self
    }

    pub(crate) fn build(&self, position: Vec2, velocity: Vec2) -> Body {
        Body::new_circle(Circle::new(self.radius).with_friction(self.friction), self.mass)
            .with_position(position)
            .with_velocity(velocity)
            .with_base_color(self.base_color)
    }
}

impl Default for SpawnParams {
    fn default() -> Self {
        SpawnParams {
            radius: 18.0,
            mass: 1.0,
            friction: 0.1,
            base_color: colors::GREEN,
        }
    }
}

/// Launch controls: where new circles appear and how fast and in which direction they fly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub struct Launcher {
    #[cfg_attr(feature = "serde-types", serde(with = "crate::math::serde_vec2"))]
    pub origin: Vec2,
    /// Launch speed in pixels per second.
    pub speed: f64,
    /// Launch angle above the +X axis; positive angles aim up on screen.
    pub angle: Angle,
}

impl Launcher {
    pub fn new(origin: Vec2, speed: f64, angle: Angle) -> Self {
        Launcher {
            origin,
            speed,
            angle,
        }
    }

    /// Initial velocity of a launched circle. Up on screen is -Y.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        let (sin, cos) = self.angle.rad().sin_cos();
        Vec2::new(self.speed * cos, -self.speed * sin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_angle_aims_up_on_screen() {
        let launcher = Launcher::new(Vec2::new(100.0, 600.0), 300.0, Angle::Deg(90.0));
        let v = launcher.velocity();
        assert!(v.x.abs() < 1e-9);
        assert!((v.y + 300.0).abs() < 1e-9);

        let flat = Launcher::new(Vec2::zero(), 100.0, Angle::Deg(0.0)).velocity();
        assert_eq!(flat, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn built_circle_carries_params() {
        let params = SpawnParams::default()
            .with_radius(10.0)
            .with_mass(8.0)
            .with_friction(0.8)
            .with_base_color(colors::YELLOW);
        let body = params.build(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(body.mass.value(), Some(8.0));
        assert_eq!(body.shape.as_circle(), Some(&Circle::new(10.0).with_friction(0.8)));
        assert_eq!(body.position, Vec2::new(1.0, 2.0));
        assert_eq!(body.velocity, Vec2::new(3.0, 4.0));
        assert_eq!(body.base_color, colors::YELLOW);
    }
}

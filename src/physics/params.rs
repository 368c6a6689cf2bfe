//! Tunable parameters of a simulation step.
//!
//! These are owned by the caller and passed into [`World::step`][super::World::step]
//! so that external controls can change them between ticks.

use super::integrator::Integrator;
use crate::{
    error::{Error, Result},
    math::Vec2,
};

/// Parameters for a single fixed-timestep tick.
///
/// # Example
/// ```
/// use nudge::{StepParams, Vec2};
///
/// let params = StepParams::new()
///     .with_fps(50)
///     .with_gravity(Vec2::new(0.0, 9.0));
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct StepParams {
    /// Length of one tick in seconds. Default: 1/60.
    pub dt: f64,
    /// Gravitational acceleration in pixels per second squared. Default: 300 pointing down.
    #[cfg_attr(feature = "serde-types", serde(with = "crate::math::serde_vec2"))]
    pub gravity: Vec2,
    /// Extra distance added to every positional correction so that floating-point residue
    /// doesn't register as a new overlap on the next tick. Default: 0.001.
    pub separation_bias: f64,
    /// How far above the ground (in pixels) a circle still counts as resting on it
    /// for the friction model. Default: 1.
    pub resting_tolerance: f64,
    /// Tangential gravity below this magnitude produces no friction. Default: 1e-4.
    pub tangent_threshold: f64,
    pub integrator: Integrator,
    /// Dynamic bodies leaving this region are removed at the end of the tick.
    pub bounds: Bounds,
}

impl StepParams {
    pub fn new() -> Self {
        StepParams {
            dt: 1.0 / 60.0,
            gravity: Vec2::new(0.0, 300.0),
            separation_bias: 0.001,
            resting_tolerance: 1.0,
            tangent_threshold: 1e-4,
            integrator: Integrator::default(),
            bounds: Bounds::default(),
        }
    }

    /// Set the timestep to one tick of a loop running at `fps` frames per second.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.dt = 1.0 / f64::from(fps);
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_separation_bias(mut self, bias: f64) -> Self {
        self.separation_bias = bias;
        self
    }

    pub fn with_resting_tolerance(mut self, tolerance: f64) -> Self {
        self.resting_tolerance = tolerance;
        self
    }

    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Check that the timestep is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(Error::InvalidTimestep(self.dt));
        }
        Ok(())
    }

    /// Read parameters from a RON string. Missing fields take their default values.
    ///
    /// ```
    /// let params = nudge::StepParams::from_ron("(dt: 0.02, gravity: (0.0, 9.0))").unwrap();
    /// assert_eq!(params.dt, 0.02);
    /// assert_eq!(params.separation_bias, 0.001);
    /// ```
    #[cfg(feature = "serde-types")]
    pub fn from_ron(source: &str) -> Result<Self> {
        let params: StepParams =
            ron::de::from_str(source).map_err(|err| Error::Parse(err.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

impl Default for StepParams {
    fn default() -> Self {
        Self::new()
    }
}

/// The region of interest: a viewport rectangle plus a margin around it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct Bounds {
    #[cfg_attr(feature = "serde-types", serde(with = "crate::math::serde_vec2"))]
    pub min: Vec2,
    #[cfg_attr(feature = "serde-types", serde(with = "crate::math::serde_vec2"))]
    pub max: Vec2,
    pub margin: f64,
}

impl Bounds {
    /// A viewport of the given size with its top left corner at the origin.
    pub fn viewport(width: f64, height: f64, margin: f64) -> Self {
        Bounds {
            min: Vec2::zero(),
            max: Vec2::new(width, height),
            margin,
        }
    }

    /// Whether a point is inside the viewport extended by the margin.
    /// Points exactly on the outer edge are still inside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x - self.margin
            && p.x <= self.max.x + self.margin
            && p.y >= self.min.y - self.margin
            && p.y <= self.max.y + self.margin
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::viewport(1280.0, 720.0, 300.0)
    }
}

//! Errors from building bodies and parameters.
//!
//! Stepping the simulation never fails; numeric degeneracies during a step
//! are handled locally by falling back to a neutral result.

use crate::physics::body_set::BodyKey;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("friction coefficient must be non-negative and finite, got {0}")]
    InvalidFriction(f64),
    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),
    #[error("cannot build a half-plane normal from a zero-length vector")]
    DegenerateNormal,
    #[error("body {0:?} does not exist")]
    MissingBody(BodyKey),
    #[error("body {0:?} is not a half-plane")]
    NotAHalfPlane(BodyKey),
    #[error("failed to parse parameters: {0}")]
    Parse(String),
}

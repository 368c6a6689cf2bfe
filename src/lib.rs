//! Circles under gravity, static half-plane boundaries,
//! and the positional correction that keeps them from overlapping.
//!
//! A [`World`] owns every body. Each call to [`World::step`] integrates the dynamic bodies
//! over one fixed timestep, tests every pair of bodies for overlap,
//! nudges overlapping pairs apart and removes bodies that have left the region of interest.
//! Rendering and input live outside this crate and only read [`World::bodies`].

macro_rules! tracy_span {
    ($name:literal, $fn_name:literal) => {{
        #[cfg(feature = "tracy")]
        let span = tracy_client::Client::running()
            .map(|client| client.span_alloc(Some($name), $fn_name, file!(), line!(), 0));
        #[cfg(not(feature = "tracy"))]
        let span = ();
        span
    }};
}

pub mod error;
pub use error::{Error, Result};

pub mod math;
#[cfg(feature = "serde-types")]
pub use math::serde_vec2;
pub use math::{uv, Angle, Unit, Vec2};

pub mod physics;
pub use physics::{
    body::{colors, Body, Color, Mass},
    body_set::{BodyKey, BodySet},
    collision::{self, Contact},
    forcefield::{self, ForceField, Gravity},
    friction::ContactForces,
    integrator::Integrator,
    params::{Bounds, StepParams},
    shape::{Circle, HalfPlane, Shape},
    spawn::{Launcher, SpawnParams},
    trail::Trail,
    ContactEvent, World,
};

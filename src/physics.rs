use crate::{
    error::{Error, Result},
    math::{Angle, Vec2},
};

//

pub mod body;
pub use body::{Body, Mass};

pub mod body_set;
pub use body_set::{BodyKey, BodySet};

pub mod collision;
use collision::BroadPhase;
pub use collision::Contact;

pub mod forcefield;
pub use forcefield::{ForceField, Gravity};

pub mod friction;
use friction::ContactForces;

pub mod integrator;
pub mod params;
use params::StepParams;

pub mod shape;
pub mod spawn;
use spawn::{Launcher, SpawnParams};

pub mod trail;

//

/// Produced by the narrow phase for every pair of bodies that overlapped during a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactEvent {
    /// The pair in the order it was resolved.
    pub bodies: [BodyKey; 2],
    /// The overlap found before correction, with the normal facing away from `bodies[0]`.
    pub contact: Contact,
}

/// Owner of every body in the simulation.
///
/// The world has no global state: everything that can be tuned from outside
/// lives in the [`StepParams`][params::StepParams] passed to each [`step`][World::step].
///
/// # Example
/// ```
/// use nudge::{Angle, SpawnParams, StepParams, Vec2, World};
///
/// let mut world = World::new();
/// world.add_half_plane(Vec2::new(640.0, 650.0), Angle::Deg(0.0));
/// let ball = world
///     .spawn(Vec2::new(100.0, 600.0), Vec2::new(0.0, -200.0), &SpawnParams::default())
///     .unwrap();
///
/// let params = StepParams::default();
/// for _ in 0..120 {
///     world.step(&params);
/// }
/// assert!(world.get(ball).unwrap().position.y < 650.0);
/// ```
#[derive(Default)]
pub struct World {
    bodies: BodySet,
    ground: Option<BodyKey>,
    contacts: Vec<ContactEvent>,
    elapsed: f64,
    ticks: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert any kind of body. Fails if its mass or shape parameters are invalid.
    pub fn insert(&mut self, body: Body) -> Result<BodyKey> {
        body.validate()?;
        let key = self.bodies.insert(body);
        log::debug!("inserted body {:?}", key);
        Ok(key)
    }

    /// Create a dynamic circle.
    pub fn spawn(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        params: &SpawnParams,
    ) -> Result<BodyKey> {
        self.insert(params.build(position, velocity))
    }

    /// Create a dynamic circle at the launcher's origin, flying the way it's aimed.
    pub fn launch(&mut self, launcher: &Launcher, params: &SpawnParams) -> Result<BodyKey> {
        self.spawn(launcher.origin, launcher.velocity(), params)
    }

    /// Create a static half-plane boundary through `point`.
    pub fn add_half_plane(&mut self, point: Vec2, rotation: Angle) -> BodyKey {
        let key = self.bodies.insert(Body::new_half_plane(point, rotation));
        log::debug!("inserted half-plane {:?} at {:?}", key, point);
        key
    }

    /// Re-orient a half-plane, e.g. from an external control once per tick.
    pub fn set_half_plane_rotation(&mut self, key: BodyKey, rotation: Angle) -> Result<()> {
        let body = self.bodies.get_mut(key).ok_or(Error::MissingBody(key))?;
        let plane = body
            .shape
            .as_half_plane_mut()
            .ok_or(Error::NotAHalfPlane(key))?;
        plane.set_rotation(rotation);
        Ok(())
    }

    /// Choose the half-plane that circles rest on for the friction model,
    /// or disable ground friction with `None`.
    pub fn set_ground(&mut self, ground: Option<BodyKey>) -> Result<()> {
        if let Some(key) = ground {
            let body = self.bodies.get(key).ok_or(Error::MissingBody(key))?;
            if body.shape.as_half_plane().is_none() {
                return Err(Error::NotAHalfPlane(key));
            }
        }
        self.ground = ground;
        Ok(())
    }

    #[inline]
    pub fn ground(&self) -> Option<BodyKey> {
        self.ground
    }

    /// Remove a body, returning it if it still existed.
    pub fn remove(&mut self, key: BodyKey) -> Option<Body> {
        let removed = self.bodies.remove(key);
        if removed.is_some() {
            log::debug!("removed body {:?}", key);
        }
        removed
    }

    /// Remove every body and reset the clock.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.ground = None;
        self.contacts.clear();
        self.elapsed = 0.0;
        self.ticks = 0;
    }

    /// Access a body, if it still exists.
    #[inline]
    pub fn get(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.get(key)
    }

    /// Mutably access a body, if it still exists.
    #[inline]
    pub fn get_mut(&mut self, key: BodyKey) -> Option<&mut Body> {
        self.bodies.get_mut(key)
    }

    /// Every body in insertion order, for drawing.
    #[inline]
    pub fn bodies(&self) -> impl Iterator<Item = (BodyKey, &Body)> + '_ {
        self.bodies.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Contacts found during the last tick.
    #[inline]
    pub fn contacts(&self) -> &[ContactEvent] {
        &self.contacts
    }

    /// Simulated time in seconds since the world was created or cleared.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the simulation by one tick under uniform gravity `params.gravity`.
    pub fn step(&mut self, params: &StepParams) {
        self.step_with_field(params, &Gravity(params.gravity));
    }

    /// Advance the simulation by one tick, taking gravity from a force field.
    ///
    /// Integrates every dynamic body, resolves overlaps pair by pair in insertion order,
    /// then removes dynamic bodies that have left `params.bounds`.
    pub fn step_with_field(&mut self, params: &StepParams, forcefield: &impl ForceField) {
        let _span = tracy_span!("step", "step_with_field");

        self.elapsed += params.dt;
        self.ticks += 1;

        for (_, body) in self.bodies.bodies.iter_mut() {
            body.in_contact = false;
        }
        self.contacts.clear();

        self.integrate(params, forcefield);
        self.resolve_overlaps(params);
        self.remove_escaped(params);
    }

    fn integrate(&mut self, params: &StepParams, forcefield: &impl ForceField) {
        let _span = tracy_span!("integrate", "integrate");

        let ground = self.ground_plane();

        for (index, body) in self.bodies.bodies.iter_mut() {
            let mass = match body.mass {
                Mass::Finite { mass, inverse }
                    if mass > 0.0 && mass.is_finite() && inverse.is_finite() =>
                {
                    mass
                }
                Mass::Finite { mass, .. } => {
                    log::warn!(
                        "body {:?} has unusable mass {}, not integrating it",
                        BodyKey(index),
                        mass
                    );
                    continue;
                }
                Mass::Infinite => continue,
            };
            let gravity = forcefield.value_at(body.position);

            body.forces = match (ground, body.shape.as_circle()) {
                (Some((point, plane)), Some(circle)) => friction::ground_forces(
                    body.position,
                    circle,
                    mass,
                    point,
                    &plane,
                    gravity,
                    params,
                ),
                _ => ContactForces::free(mass, gravity),
            };
            let accel = body.forces.net() * body.mass.inv();
            params.integrator.advance(
                &mut body.position,
                &mut body.velocity,
                accel,
                params.dt,
            );

            if let Some(trail) = &mut body.trail {
                trail.push(body.position);
            }
        }
    }

    /// Position and shape of the ground half-plane,
    /// forgetting the ground if it has been removed since it was set.
    fn ground_plane(&mut self) -> Option<(Vec2, shape::HalfPlane)> {
        let key = self.ground?;
        let found = self
            .bodies
            .get(key)
            .and_then(|body| Some((body.position, *body.shape.as_half_plane()?)));
        if found.is_none() {
            log::warn!("ground {:?} no longer exists, disabling friction", key);
            self.ground = None;
        }
        found
    }

    fn resolve_overlaps(&mut self, params: &StepParams) {
        let _span = tracy_span!("resolve overlaps", "resolve_overlaps");

        let pairs = collision::BruteForce::pairs(self.bodies.keys());
        for [k1, k2] in pairs {
            if let (Some(b1), Some(b2)) = self.bodies.get2_mut(k1, k2) {
                if let Some(contact) = collision::resolve(b1, b2, params.separation_bias) {
                    b1.in_contact = true;
                    b2.in_contact = true;
                    log::trace!(
                        "resolved {:?} against {:?}, depth {}",
                        k1,
                        k2,
                        contact.depth
                    );
                    self.contacts.push(ContactEvent {
                        bodies: [k1, k2],
                        contact,
                    });
                }
            }
        }
    }

    fn remove_escaped(&mut self, params: &StepParams) {
        let bounds = params.bounds;
        let removed = self
            .bodies
            .retain(|body| body.is_static() || bounds.contains(body.position));
        for key in removed {
            log::debug!("removed body {:?} after it left the region of interest", key);
        }
    }
}

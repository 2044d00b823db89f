//! Tick-loop integration: resources, components, and systems that advance
//! planets and apply their fields to moving objects.
//!
//! All planet updates run in [`PlanetSet::Advance`] before any field query in
//! [`PlanetSet::ApplyFields`], so queries never observe a half-updated planet.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::activation::ActivationHooks;
use crate::planet::{Planet, Tick, TickOutcome};
use crate::system::SystemRegistry;

/// Simulation clock advanced by the host once per tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimClock {
    /// Seconds covered by the current tick.
    pub delta: f32,
    /// Seconds simulated so far.
    pub elapsed: f64,
    /// Number of ticks started.
    pub tick: u64,
}

impl SimClock {
    /// Start a new tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt;
        self.elapsed += dt as f64;
        self.tick += 1;
    }
}

/// Position of the observer (camera) whose proximity activates planets.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Observer {
    pub position: Vec2,
}

/// An object moved by planetary gravity and drag.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Ordering of planet systems within a tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlanetSet {
    /// Advance orbits and evaluate activation gates.
    Advance,
    /// Apply planet fields to [`Kinematics`].
    ApplyFields,
}

/// Advance every planet by the current tick.
///
/// Activation failures leave the planet dormant; they are logged and the
/// gate is tried again on the next tick.
pub fn planet_update_system(
    clock: Res<SimClock>,
    observer: Res<Observer>,
    systems: Res<SystemRegistry>,
    mut hooks: ResMut<ActivationHooks>,
    mut planets: Query<(Entity, &mut Planet)>,
) {
    let tick = Tick {
        dt: clock.delta,
        observer: observer.position,
    };
    for (entity, mut planet) in planets.iter_mut() {
        match planet.update(&tick, &*systems, &mut *hooks) {
            Ok(TickOutcome::Activated) => {
                tracing::debug!(?entity, tick = clock.tick, "planet activated this tick");
            }
            Ok(TickOutcome::Advanced) => {}
            Err(err) => {
                tracing::warn!(?entity, tick = clock.tick, %err, "planet update failed");
            }
        }
    }
}

/// Replace each object's velocity with the field-adjusted one of every
/// planet whose influence contains it, then integrate its position.
pub fn planet_field_system(
    clock: Res<SimClock>,
    planets: Query<&Planet>,
    mut objects: Query<&mut Kinematics>,
) {
    for mut body in objects.iter_mut() {
        let mut velocity = body.velocity;
        for planet in planets.iter() {
            if planet.is_within_influence(body.position) {
                velocity = planet.adjusted_effect_velocity(body.position, velocity);
            }
        }
        body.velocity = velocity;
        body.position += velocity * clock.delta;
    }
}

/// Insert the resources the planet systems read.
pub fn register_planet_resources(
    world: &mut World,
    systems: SystemRegistry,
    hooks: ActivationHooks,
) {
    world.insert_resource(SimClock::default());
    world.insert_resource(Observer::default());
    world.insert_resource(systems);
    world.insert_resource(hooks);
}

/// Schedule with planet updates ordered before field application.
pub fn build_planet_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.configure_sets(PlanetSet::Advance.before(PlanetSet::ApplyFields));
    schedule.add_systems((
        planet_update_system.in_set(PlanetSet::Advance),
        planet_field_system.in_set(PlanetSet::ApplyFields),
    ));
    schedule
}

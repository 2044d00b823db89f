//! The orbiting planet model.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use glam::Vec2;
use orbis_config::{PlanetTuning, PlanetTypeConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::{ActivationHooks, ActivationState};
use crate::error::PlanetError;
use crate::field::FieldModel;
use crate::orbit::OrbitalState;
use crate::system::{SystemId, SystemPositions};

/// Construction parameters of a planet, also used to persist and resume one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanetParams {
    /// Key into the planet type registry.
    pub planet_type: String,
    /// The star system this planet orbits.
    pub system: SystemId,
    pub orbit_angle: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub spin_angle: f32,
    pub spin_speed: f32,
    pub ground_radius: f32,
    /// Surface content was already generated in an earlier session.
    #[serde(default)]
    pub activated: bool,
    /// Gravity constant of a resumed planet. Drawn from the type's bounds
    /// when absent.
    #[serde(default)]
    pub gravity_constant: Option<f32>,
}

impl PlanetParams {
    fn validate(&self) -> Result<(), PlanetError> {
        let finite = [
            ("orbit_angle", self.orbit_angle),
            ("orbit_speed", self.orbit_speed),
            ("spin_angle", self.spin_angle),
            ("spin_speed", self.spin_speed),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(PlanetError::InvalidParams(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !(self.orbit_radius.is_finite() && self.orbit_radius >= 0.0) {
            return Err(PlanetError::InvalidParams(format!(
                "orbit_radius must be non-negative, got {}",
                self.orbit_radius
            )));
        }
        if !(self.ground_radius.is_finite() && self.ground_radius > 0.0) {
            return Err(PlanetError::InvalidParams(format!(
                "ground_radius must be positive, got {}",
                self.ground_radius
            )));
        }
        if let Some(g) = self.gravity_constant
            && !(g.is_finite() && g >= 0.0)
        {
            return Err(PlanetError::InvalidParams(format!(
                "gravity_constant must be non-negative, got {g}"
            )));
        }
        Ok(())
    }
}

/// Per-tick input to [`Planet::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Seconds elapsed since the previous tick.
    pub dt: f32,
    /// Current observer (camera) position.
    pub observer: Vec2,
}

/// What a successful [`Planet::update`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Angles and position advanced.
    Advanced,
    /// Angles and position advanced, and surface content was generated.
    Activated,
}

/// A planet revolving around a star system and spinning on its own axis,
/// with a gravity/drag field and lazily generated surface content.
#[derive(Component, Clone, Debug)]
pub struct Planet {
    system: SystemId,
    planet_type: String,
    config: Arc<PlanetTypeConfig>,
    orbit: OrbitalState,
    field: FieldModel,
    sky_height: f32,
    min_ground_radius: f32,
    position: Vec2,
    activation: ActivationState,
    landing_sites: Vec<Vec2>,
}

impl Planet {
    /// Build a planet around a system currently at `system_pos`.
    ///
    /// The gravity constant is drawn once here from `rng`, uniformly between
    /// the type's gravity bounds, scaled by the squared ground radius. A
    /// `gravity_constant` carried in `params` is reused instead and `rng` is
    /// left untouched.
    pub fn new<R: Rng>(
        params: PlanetParams,
        system_pos: Vec2,
        config: Arc<PlanetTypeConfig>,
        tuning: &PlanetTuning,
        rng: &mut R,
    ) -> Result<Self, PlanetError> {
        config.validate(&params.planet_type)?;
        tuning.validate()?;
        params.validate()?;

        let gravity_constant = match params.gravity_constant {
            Some(g) => g,
            None => {
                let grav = rng.random_range(config.min_grav..=config.max_grav);
                grav * params.ground_radius * params.ground_radius
            }
        };

        let orbit = OrbitalState {
            orbit_angle: params.orbit_angle,
            orbit_speed: params.orbit_speed,
            orbit_radius: params.orbit_radius,
            spin_angle: params.spin_angle,
            spin_speed: params.spin_speed,
        };
        let activation = if params.activated {
            ActivationState::Active
        } else {
            ActivationState::Dormant
        };

        Ok(Self {
            system: params.system,
            planet_type: params.planet_type,
            config,
            position: system_pos + orbit.offset(),
            orbit,
            field: FieldModel {
                ground_radius: params.ground_radius,
                atmosphere_height: tuning.atmosphere_height,
                gravity_constant,
            },
            sky_height: tuning.sky_height_from_ground,
            min_ground_radius: params.ground_radius,
            activation,
            landing_sites: Vec::new(),
        })
    }

    /// Advance one tick: move along the orbit, spin, and activate surface
    /// content if the observer came close enough.
    ///
    /// On an activation error the planet has still moved but stays
    /// [`ActivationState::Dormant`], so the gate fires again next tick.
    pub fn update<S: SystemPositions + ?Sized>(
        &mut self,
        tick: &Tick,
        systems: &S,
        hooks: &mut ActivationHooks,
    ) -> Result<TickOutcome, PlanetError> {
        let system_pos = systems
            .system_position(self.system)
            .ok_or(PlanetError::UnknownSystem(self.system))?;

        self.orbit.advance(tick.dt);
        self.position = system_pos + self.orbit.offset();
        tracing::trace!(
            planet_type = %self.planet_type,
            x = self.position.x,
            y = self.position.y,
            "planet advanced"
        );

        if self.activation != ActivationState::Dormant
            || tick.observer.distance(self.position) >= self.activation_distance()
        {
            return Ok(TickOutcome::Advanced);
        }

        self.activate(hooks)?;
        Ok(TickOutcome::Activated)
    }

    fn activate(&mut self, hooks: &mut ActivationHooks) -> Result<(), PlanetError> {
        self.activation = ActivationState::Activating;
        match hooks.generate(self) {
            Ok((min_ground_radius, landing_sites)) => {
                self.min_ground_radius = min_ground_radius;
                self.landing_sites = landing_sites;
                self.activation = ActivationState::Active;
                tracing::info!(
                    planet_type = %self.planet_type,
                    min_ground_radius,
                    landing_sites = self.landing_sites.len(),
                    "planet content activated"
                );
                Ok(())
            }
            Err(err) => {
                self.activation = ActivationState::Dormant;
                Err(err.into())
            }
        }
    }

    /// Observer distance below which activation triggers.
    pub fn activation_distance(&self) -> f32 {
        self.field.ground_radius + self.sky_height
    }

    /// Velocity of an object at `point` moving with `velocity` after this
    /// planet's gravity and atmospheric drag.
    pub fn adjusted_effect_velocity(&self, point: Vec2, velocity: Vec2) -> Vec2 {
        self.field
            .adjusted_effect_velocity(self.position, point, velocity)
    }

    pub fn is_near_ground(&self, point: Vec2) -> bool {
        self.field.is_near_ground(self.position, point)
    }

    pub fn is_within_influence(&self, point: Vec2) -> bool {
        self.field.contains(self.position, point)
    }

    /// Snapshot of the current state as construction parameters.
    pub fn params(&self) -> PlanetParams {
        PlanetParams {
            planet_type: self.planet_type.clone(),
            system: self.system,
            orbit_angle: self.orbit.orbit_angle,
            orbit_radius: self.orbit.orbit_radius,
            orbit_speed: self.orbit.orbit_speed,
            spin_angle: self.orbit.spin_angle,
            spin_speed: self.orbit.spin_speed,
            ground_radius: self.field.ground_radius,
            activated: self.is_activated(),
            gravity_constant: Some(self.field.gravity_constant),
        }
    }

    /// World position of landing site `index`, following the planet's spin.
    pub fn landing_site_world(&self, index: usize) -> Option<Vec2> {
        let site = self.landing_sites.get(index)?;
        Some(self.position + Vec2::from_angle(self.orbit.spin_angle).rotate(*site))
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn system(&self) -> SystemId {
        self.system
    }

    pub fn planet_type(&self) -> &str {
        &self.planet_type
    }

    pub fn config(&self) -> &Arc<PlanetTypeConfig> {
        &self.config
    }

    pub fn angle(&self) -> f32 {
        self.orbit.spin_angle
    }

    pub fn spin_speed(&self) -> f32 {
        self.orbit.spin_speed
    }

    pub fn orbit_angle(&self) -> f32 {
        self.orbit.orbit_angle
    }

    pub fn orbit_speed(&self) -> f32 {
        self.orbit.orbit_speed
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit.orbit_radius
    }

    pub fn ground_radius(&self) -> f32 {
        self.field.ground_radius
    }

    pub fn min_ground_radius(&self) -> f32 {
        self.min_ground_radius
    }

    pub fn atmosphere_height(&self) -> f32 {
        self.field.atmosphere_height
    }

    pub fn full_height(&self) -> f32 {
        self.field.full_height()
    }

    pub fn gravity_constant(&self) -> f32 {
        self.field.gravity_constant
    }

    pub fn activation(&self) -> ActivationState {
        self.activation
    }

    pub fn is_activated(&self) -> bool {
        self.activation == ActivationState::Active
    }

    pub fn landing_sites(&self) -> &[Vec2] {
        &self.landing_sites
    }
}

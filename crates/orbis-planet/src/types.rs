//! Registry of shared planet type configurations.

use std::sync::Arc;

use orbis_config::{Config, PlanetTuning, PlanetTypeConfig};
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::error::PlanetError;
use crate::planet::{Planet, PlanetParams};
use crate::system::SystemPositions;

/// Planet type configurations keyed by type name, each held once and shared
/// by every planet of that type.
#[derive(Clone, Debug, Default)]
pub struct PlanetTypes {
    types: FxHashMap<String, Arc<PlanetTypeConfig>>,
}

impl PlanetTypes {
    /// Register every type in the loaded config.
    pub fn from_config(config: &Config) -> Result<Self, PlanetError> {
        let mut types = Self::default();
        for (key, planet_type) in config.planet_types.iter() {
            types.insert(key.clone(), planet_type.clone())?;
        }
        Ok(types)
    }

    /// Add or replace a type after validating it.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        planet_type: PlanetTypeConfig,
    ) -> Result<(), PlanetError> {
        let key = key.into();
        planet_type.validate(&key)?;
        self.types.insert(key, Arc::new(planet_type));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Arc<PlanetTypeConfig>, PlanetError> {
        self.types
            .get(key)
            .cloned()
            .ok_or_else(|| PlanetError::UnknownPlanetType(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve the type and owning system of `params` and build the planet.
    pub fn create_planet<R: Rng, S: SystemPositions + ?Sized>(
        &self,
        params: PlanetParams,
        systems: &S,
        tuning: &PlanetTuning,
        rng: &mut R,
    ) -> Result<Planet, PlanetError> {
        let config = self.get(&params.planet_type)?;
        let system_pos = systems
            .system_position(params.system)
            .ok_or(PlanetError::UnknownSystem(params.system))?;
        Planet::new(params, system_pos, config, tuning, rng)
    }
}

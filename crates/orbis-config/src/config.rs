//! Configuration structs with sensible defaults and RON persistence.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Tick loop settings.
    pub simulation: SimulationConfig,
    /// Tunables shared by every planet regardless of type.
    pub planet: PlanetTuning,
    /// Per-type planet settings, keyed by type name.
    pub planet_types: PlanetTypeTable,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Tick loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds advanced per tick.
    pub time_step: f32,
    /// Number of ticks the headless runner executes.
    pub ticks: u32,
    /// Seed for every random draw made while building the world.
    pub seed: u64,
}

/// Global planet tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetTuning {
    /// Thickness of the atmosphere band above the ground radius.
    pub atmosphere_height: f32,
    /// Distance above the ground at which an approaching observer
    /// triggers surface content generation.
    pub sky_height_from_ground: f32,
}

/// Immutable settings shared by all planets of one type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetTypeConfig {
    /// Lower bound of the surface gravity factor.
    pub min_grav: f32,
    /// Upper bound of the surface gravity factor.
    pub max_grav: f32,
}

/// Wrapper so the type table gets non-empty defaults while still honouring
/// `#[serde(default)]` on the parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PlanetTypeTable(pub BTreeMap<String, PlanetTypeConfig>);

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            ticks: 600,
            seed: 0x5EED,
        }
    }
}

impl Default for PlanetTuning {
    fn default() -> Self {
        Self {
            atmosphere_height: 14.0,
            sky_height_from_ground: 21.0,
        }
    }
}

impl Default for PlanetTypeConfig {
    fn default() -> Self {
        Self {
            min_grav: 0.2,
            max_grav: 0.3,
        }
    }
}

impl Default for PlanetTypeTable {
    fn default() -> Self {
        let mut types = BTreeMap::new();
        types.insert("rocky".to_string(), PlanetTypeConfig::default());
        types.insert(
            "desert".to_string(),
            PlanetTypeConfig {
                min_grav: 0.15,
                max_grav: 0.25,
            },
        );
        types.insert(
            "ice".to_string(),
            PlanetTypeConfig {
                min_grav: 0.1,
                max_grav: 0.2,
            },
        );
        Self(types)
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

impl PlanetTypeConfig {
    /// Reject gravity bounds that cannot produce a gravity constant.
    pub fn validate(&self, key: &str) -> Result<(), ConfigError> {
        if !self.min_grav.is_finite() || !self.max_grav.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "planet type `{key}`: gravity bounds must be finite"
            )));
        }
        if self.min_grav < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "planet type `{key}`: min_grav {} is negative",
                self.min_grav
            )));
        }
        if self.max_grav < self.min_grav {
            return Err(ConfigError::Invalid(format!(
                "planet type `{key}`: max_grav {} < min_grav {}",
                self.max_grav, self.min_grav
            )));
        }
        Ok(())
    }
}

impl PlanetTuning {
    /// Both heights must be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.atmosphere_height.is_finite() && self.atmosphere_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "atmosphere_height must be positive, got {}",
                self.atmosphere_height
            )));
        }
        if !(self.sky_height_from_ground.is_finite() && self.sky_height_from_ground > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sky_height_from_ground must be positive, got {}",
                self.sky_height_from_ground
            )));
        }
        Ok(())
    }
}

impl PlanetTypeTable {
    /// Look up a type by key.
    pub fn get(&self, key: &str) -> Option<&PlanetTypeConfig> {
        self.0.get(key)
    }

    /// Iterate over `(key, config)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PlanetTypeConfig)> {
        self.0.iter()
    }
}

impl Config {
    /// Check every section for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.simulation.time_step.is_finite() && self.simulation.time_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "time_step must be positive, got {}",
                self.simulation.time_step
            )));
        }
        self.planet.validate()?;
        for (key, planet_type) in self.planet_types.iter() {
            planet_type.validate(key)?;
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

/// Default directory holding `config.ron`, falling back to the working
/// directory when the platform has no config dir.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("orbis"))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        new_config.validate()?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

//! Configuration system for the Orbis simulation.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, validation, hot-reload detection, and
//! forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, PlanetTuning, PlanetTypeConfig, PlanetTypeTable, SimulationConfig,
    default_config_dir,
};
pub use error::ConfigError;

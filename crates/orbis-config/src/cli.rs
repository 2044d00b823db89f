//! Command-line argument parsing for the Orbis simulation.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orbis command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orbis", about = "Headless orbiting planet simulation")]
pub struct CliArgs {
    /// Number of ticks to run.
    #[arg(long)]
    pub ticks: Option<u32>,

    /// Seconds advanced per tick.
    #[arg(long)]
    pub time_step: Option<f32>,

    /// World generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ticks) = args.ticks {
            self.simulation.ticks = ticks;
        }
        if let Some(dt) = args.time_step {
            self.simulation.time_step = dt;
        }
        if let Some(seed) = args.seed {
            self.simulation.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            ticks: None,
            time_step: None,
            seed: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            ticks: Some(30),
            seed: Some(7),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.simulation.ticks, 30);
        assert_eq!(config.simulation.seed, 7);
        // Non-overridden fields retain defaults
        assert_eq!(config.simulation.time_step, 1.0 / 60.0);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "orbis",
            "--ticks",
            "120",
            "--time-step",
            "0.5",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.ticks, Some(120));
        assert_eq!(args.time_step, Some(0.5));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }
}

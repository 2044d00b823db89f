//! Headless Orbis runner.
//!
//! Loads `config.ron` (created with defaults on first run), applies CLI
//! overrides, builds a star system with a handful of planets, and runs the
//! tick loop while an observer flies from planet to planet triggering their
//! surface content.
//!
//! Run with: `cargo run -p orbis-sim -- --ticks 2000`

mod content;
mod scenario;

use std::process::ExitCode;

use clap::Parser;
use orbis_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

use crate::scenario::Scenario;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("orbis: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;

    orbis_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    info!(
        "Simulating {} ticks of {:.4}s (seed {:#x})",
        config.simulation.ticks, config.simulation.time_step, config.simulation.seed
    );

    let mut scenario = Scenario::build(&config)?;
    for _ in 0..config.simulation.ticks {
        scenario.step(config.simulation.time_step);
    }

    for &entity in &scenario.planets {
        let Some(planet) = scenario.planet(entity) else {
            continue;
        };
        info!(
            planet_type = planet.planet_type(),
            activated = planet.is_activated(),
            landing_sites = planet.landing_sites().len(),
            min_ground_radius = planet.min_ground_radius(),
            x = planet.position().x,
            y = planet.position().y,
            "planet summary"
        );
        tracing::debug!(params = ?planet.params(), "planet snapshot");
    }

    for &entity in &scenario.probes {
        if let Some(probe) = scenario.probe(entity) {
            info!(
                ?entity,
                x = probe.position.x,
                y = probe.position.y,
                speed = probe.velocity.length(),
                "probe summary"
            );
        }
    }

    let observer = scenario.observer();
    info!(x = observer.x, y = observer.y, "observer final position");
    Ok(())
}

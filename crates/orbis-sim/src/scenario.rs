//! Demo world: one star system with a few planets, drifting probes, and an
//! observer that flies toward each dormant planet in turn.

use bevy_ecs::prelude::*;
use glam::Vec2;
use orbis_config::Config;
use orbis_planet::{
    ActivationHooks, Kinematics, Observer, Planet, PlanetError, PlanetParams, PlanetSet,
    PlanetTypes, SimClock, SystemRegistry, build_planet_schedule, register_planet_resources,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{NoiseTerrainBuilder, RandomSurfaceLocator};

/// Observer cruise speed in units per second.
pub const OBSERVER_SPEED: f32 = 120.0;

/// Where the observer starts, well outside every orbit.
const OBSERVER_START: Vec2 = Vec2::new(2_500.0, 2_500.0);

/// Probes released around the innermost planet.
const PROBE_COUNT: usize = 8;

/// `(type, orbit radius, ground radius, orbit speed, spin speed)`
const PLANETS: [(&str, f32, f32, f32, f32); 3] = [
    ("rocky", 600.0, 60.0, 0.02, 0.3),
    ("desert", 1_100.0, 90.0, -0.012, 0.15),
    ("ice", 1_700.0, 45.0, 0.008, -0.4),
];

/// A populated world and the schedule that advances it.
pub struct Scenario {
    pub world: World,
    pub schedule: Schedule,
    pub planets: Vec<Entity>,
    pub probes: Vec<Entity>,
}

impl Scenario {
    /// Build the demo world from `config`.
    pub fn build(config: &Config) -> Result<Self, PlanetError> {
        let seed = config.simulation.seed;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let types = PlanetTypes::from_config(config)?;

        let mut systems = SystemRegistry::new();
        let home = systems.insert("Home", Vec2::ZERO);

        let mut planets = Vec::with_capacity(PLANETS.len());
        let mut bodies = Vec::with_capacity(PLANETS.len());
        for (planet_type, orbit_radius, ground_radius, orbit_speed, spin_speed) in PLANETS {
            let params = PlanetParams {
                planet_type: planet_type.to_string(),
                system: home,
                orbit_angle: rng.random_range(0.0..std::f32::consts::TAU),
                orbit_radius,
                orbit_speed,
                spin_angle: 0.0,
                spin_speed,
                ground_radius,
                activated: false,
                gravity_constant: None,
            };
            let planet = types.create_planet(params, &systems, &config.planet, &mut rng)?;
            tracing::info!(
                planet_type,
                orbit_radius,
                ground_radius,
                gravity_constant = planet.gravity_constant(),
                "planet created"
            );
            bodies.push(planet);
        }

        let hooks = ActivationHooks::new(
            NoiseTerrainBuilder::new(seed as u32),
            RandomSurfaceLocator::new(seed.wrapping_add(1)),
        );

        let mut world = World::new();
        register_planet_resources(&mut world, systems, hooks);
        world.resource_mut::<Observer>().position = OBSERVER_START;

        let probes = spawn_probes(&mut world, &bodies[0], &mut rng);
        for planet in bodies {
            planets.push(world.spawn(planet).id());
        }

        let mut schedule = build_planet_schedule();
        schedule.add_systems(observer_pilot_system.before(PlanetSet::Advance));

        Ok(Self {
            world,
            schedule,
            planets,
            probes,
        })
    }

    /// Run one tick of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.world.resource_mut::<SimClock>().advance(dt);
        self.schedule.run(&mut self.world);
    }

    pub fn planet(&self, entity: Entity) -> Option<&Planet> {
        self.world.get::<Planet>(entity)
    }

    pub fn probe(&self, entity: Entity) -> Option<&Kinematics> {
        self.world.get::<Kinematics>(entity)
    }

    pub fn observer(&self) -> Vec2 {
        self.world.resource::<Observer>().position
    }
}

/// Scatter probes through the atmosphere of `planet` with small tangential velocities.
fn spawn_probes(world: &mut World, planet: &Planet, rng: &mut ChaCha8Rng) -> Vec<Entity> {
    (0..PROBE_COUNT)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / PROBE_COUNT as f32;
            let altitude = rng.random_range(0.0..planet.atmosphere_height());
            let radial = Vec2::from_angle(angle);
            let position = planet.position() + radial * (planet.ground_radius() + altitude);
            let velocity = radial.perp() * rng.random_range(1.0..5.0);
            world.spawn(Kinematics { position, velocity }).id()
        })
        .collect()
}

/// Fly the observer straight at the nearest planet that has not activated yet.
pub fn observer_pilot_system(
    clock: Res<SimClock>,
    mut observer: ResMut<Observer>,
    planets: Query<&Planet>,
) {
    let from = observer.position;
    let target = planets
        .iter()
        .filter(|planet| !planet.is_activated())
        .map(|planet| planet.position())
        .min_by(|a, b| a.distance(from).total_cmp(&b.distance(from)));

    if let Some(target) = target {
        let step = OBSERVER_SPEED * clock.delta;
        let offset = target - from;
        let distance = offset.length();
        observer.position = if distance <= step {
            target
        } else {
            from + offset * (step / distance)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builds_all_planets() {
        let scenario = Scenario::build(&Config::default()).unwrap();
        assert_eq!(scenario.planets.len(), PLANETS.len());
        assert_eq!(scenario.probes.len(), PROBE_COUNT);
        for &entity in &scenario.planets {
            let planet = scenario.planet(entity).unwrap();
            assert!(!planet.is_activated());
            assert!(planet.landing_sites().is_empty());
        }
    }

    #[test]
    fn test_unknown_planet_type_fails() {
        let mut config = Config::default();
        config.planet_types.0.remove("desert");
        let result = Scenario::build(&config);
        assert!(matches!(result, Err(PlanetError::UnknownPlanetType(_))));
    }

    #[test]
    fn test_observer_moves_toward_planets() {
        let mut scenario = Scenario::build(&Config::default()).unwrap();
        let start = scenario.observer();
        scenario.step(1.0);
        let moved = scenario.observer().distance(start);
        assert!((moved - OBSERVER_SPEED).abs() < 1e-2, "moved {moved}");
    }

    #[test]
    fn test_long_run_activates_planets() {
        let mut scenario = Scenario::build(&Config::default()).unwrap();
        for _ in 0..600 {
            scenario.step(0.25);
        }
        let activated = scenario
            .planets
            .iter()
            .filter(|&&e| scenario.planet(e).unwrap().is_activated())
            .count();
        assert!(activated >= 1);
        for &entity in &scenario.planets {
            let planet = scenario.planet(entity).unwrap();
            if planet.is_activated() {
                assert_eq!(planet.landing_sites().len(), orbis_planet::LANDING_SITE_COUNT);
                assert!(planet.min_ground_radius() <= planet.ground_radius());
            }
        }
    }

    #[test]
    fn test_probes_feel_the_field() {
        let mut scenario = Scenario::build(&Config::default()).unwrap();
        let before: Vec<Kinematics> = scenario
            .probes
            .iter()
            .map(|&e| *scenario.probe(e).unwrap())
            .collect();
        scenario.step(0.1);
        let changed = scenario
            .probes
            .iter()
            .zip(&before)
            .filter(|&(&e, b)| scenario.probe(e).unwrap().velocity != b.velocity)
            .count();
        assert!(changed > 0);
    }
}

//! Stand-in surface generation for the headless runner.
//!
//! The terrain builder samples Perlin noise around the planet's
//! circumference and reports the deepest depression; the locator picks
//! random spots on the ground circle that keep clear of avoided points.

use std::f32::consts::TAU;

use glam::Vec2;
use noise::{NoiseFn, Perlin};
use orbis_planet::{
    ActivationError, ContentBuilder, LandingSiteLocator, PlacementConstraints, Planet, polar,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of noise samples taken around the circumference.
const TERRAIN_SAMPLES: usize = 256;

/// Candidate spots tried before the locator gives up.
const MAX_PLACEMENT_ATTEMPTS: u32 = 32;

/// Perlin terrain around the ground circle.
pub struct NoiseTerrainBuilder {
    noise: Perlin,
    /// Deepest possible depression below the ground radius.
    pub amplitude: f32,
    /// Noise frequency per unit of ground radius.
    pub frequency: f64,
}

impl NoiseTerrainBuilder {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            amplitude: 6.0,
            frequency: 0.05,
        }
    }

    /// Terrain offset from the ground radius at `angle`, in `[-amplitude, amplitude]`.
    pub fn height_at(&self, ground_radius: f32, angle: f32) -> f32 {
        let p = polar(angle, ground_radius);
        let sample = self
            .noise
            .get([p.x as f64 * self.frequency, p.y as f64 * self.frequency]);
        sample.clamp(-1.0, 1.0) as f32 * self.amplitude
    }
}

impl ContentBuilder for NoiseTerrainBuilder {
    fn build(&mut self, planet: &Planet) -> Result<f32, ActivationError> {
        let ground = planet.ground_radius();
        let lowest = (0..TERRAIN_SAMPLES)
            .map(|i| self.height_at(ground, TAU * i as f32 / TERRAIN_SAMPLES as f32))
            .fold(f32::INFINITY, f32::min);
        if !lowest.is_finite() {
            return Err(ActivationError::Builder(
                "terrain produced no samples".to_string(),
            ));
        }
        tracing::debug!(ground, lowest, "terrain generated");
        Ok(ground + lowest.min(0.0))
    }
}

/// Random flat spots on the ground circle.
pub struct RandomSurfaceLocator {
    rng: ChaCha8Rng,
}

impl RandomSurfaceLocator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl LandingSiteLocator for RandomSurfaceLocator {
    fn find_flat_place(
        &mut self,
        planet: &Planet,
        constraints: &PlacementConstraints,
    ) -> Result<Vec2, ActivationError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let angle = self.rng.random_range(0.0..TAU);
            let candidate = polar(angle, planet.ground_radius());
            let clear = constraints
                .avoid
                .iter()
                .all(|p| p.distance(candidate) >= constraints.clearance);
            if clear {
                return Ok(candidate);
            }
        }
        Err(ActivationError::Locator {
            index: 0,
            reason: format!("no clear spot after {MAX_PLACEMENT_ATTEMPTS} attempts"),
        })
    }
}

//! One-shot surface content activation.
//!
//! When an observer first comes close to a planet the surface content is
//! built and a fixed number of flat landing sites are located. Both are
//! delegated to host-provided collaborators. An attempt either succeeds as a
//! whole or leaves the planet untouched so it can be retried.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::error::ActivationError;
use crate::planet::Planet;

/// Number of landing sites located during activation.
pub const LANDING_SITE_COUNT: usize = 10;

/// Progress of a planet's content activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationState {
    /// No content yet; the gate is evaluated every tick.
    #[default]
    Dormant,
    /// An attempt is in progress.
    Activating,
    /// Content exists. Terminal.
    Active,
}

/// Restrictions passed to the landing-site locator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementConstraints {
    /// Positions the landing site must keep clear of.
    pub avoid: Vec<Vec2>,
    /// Minimum free distance around the site.
    pub clearance: f32,
}

/// Generates the surface content of a planet.
pub trait ContentBuilder: Send + Sync + 'static {
    /// Build content for `planet` and return the lowest ground radius of
    /// the generated terrain.
    fn build(&mut self, planet: &Planet) -> Result<f32, ActivationError>;
}

/// Finds flat spots on a planet's surface.
pub trait LandingSiteLocator: Send + Sync + 'static {
    /// Locate one flat place, relative to the planet centre in the planet's
    /// rotating frame.
    fn find_flat_place(
        &mut self,
        planet: &Planet,
        constraints: &PlacementConstraints,
    ) -> Result<Vec2, ActivationError>;
}

/// The collaborators invoked when a planet activates.
#[derive(Resource)]
pub struct ActivationHooks {
    pub builder: Box<dyn ContentBuilder>,
    pub locator: Box<dyn LandingSiteLocator>,
}

impl ActivationHooks {
    pub fn new(builder: impl ContentBuilder, locator: impl LandingSiteLocator) -> Self {
        Self {
            builder: Box::new(builder),
            locator: Box::new(locator),
        }
    }

    /// Run the builder once and the locator [`LANDING_SITE_COUNT`] times.
    ///
    /// Nothing is written to `planet`; the caller commits the returned
    /// minimum ground radius and landing sites only on success.
    pub(crate) fn generate(
        &mut self,
        planet: &Planet,
    ) -> Result<(f32, Vec<Vec2>), ActivationError> {
        let min_ground_radius = self.builder.build(planet)?;
        if !min_ground_radius.is_finite() {
            return Err(ActivationError::InvalidGroundRadius(min_ground_radius));
        }

        let constraints = PlacementConstraints::default();
        let mut sites = Vec::with_capacity(LANDING_SITE_COUNT);
        for index in 0..LANDING_SITE_COUNT {
            let site = self
                .locator
                .find_flat_place(planet, &constraints)
                .map_err(|err| match err {
                    ActivationError::Locator { reason, .. } => {
                        ActivationError::Locator { index, reason }
                    }
                    other => other,
                })?;
            if !site.is_finite() {
                return Err(ActivationError::InvalidLandingSite { index });
            }
            sites.push(site);
        }

        Ok((min_ground_radius, sites))
    }
}

//! Orbiting planets: circular orbit plus spin around a star system, a
//! gravity/drag influence field, and one-shot surface content activation
//! triggered by an approaching observer.

mod activation;
mod ecs;
mod error;
mod field;
mod orbit;
mod planet;
mod system;
mod types;

pub use activation::{
    ActivationHooks, ActivationState, ContentBuilder, LANDING_SITE_COUNT, LandingSiteLocator,
    PlacementConstraints,
};
pub use ecs::{
    Kinematics, Observer, PlanetSet, SimClock, build_planet_schedule, planet_field_system,
    planet_update_system, register_planet_resources,
};
pub use error::{ActivationError, PlanetError};
pub use field::{FieldModel, NEAR_GROUND_FRACTION, PULL_FACTOR};
pub use orbit::{OrbitalState, polar};
pub use planet::{Planet, PlanetParams, Tick, TickOutcome};
pub use system::{StarSystem, SystemId, SystemPositions, SystemRegistry};
pub use types::PlanetTypes;

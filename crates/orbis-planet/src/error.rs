//! Planet error types.

use orbis_config::ConfigError;

use crate::system::SystemId;

/// Errors surfaced to the host simulation by planet construction and updates.
#[derive(Debug, thiserror::Error)]
pub enum PlanetError {
    /// The planet type configuration cannot produce a valid body.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    /// Orbital or field parameters are out of range.
    #[error("invalid planet parameters: {0}")]
    InvalidParams(String),

    /// The owning star system is not in the registry.
    #[error("unknown star system {0:?}")]
    UnknownSystem(SystemId),

    /// No planet type is registered under this key.
    #[error("unknown planet type `{0}`")]
    UnknownPlanetType(String),

    /// The one-shot content activation failed and will be retried.
    #[error("planet activation failed: {0}")]
    Activation(#[from] ActivationError),
}

/// Failures reported by the content builder or landing-site locator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActivationError {
    /// The content builder could not generate surface content.
    #[error("content builder failed: {0}")]
    Builder(String),

    /// The locator could not produce landing site `index`.
    #[error("landing site {index} could not be located: {reason}")]
    Locator { index: usize, reason: String },

    /// The builder returned a minimum ground radius that is not finite.
    #[error("content builder returned invalid minimum ground radius {0}")]
    InvalidGroundRadius(f32),

    /// The locator returned a non-finite point for landing site `index`.
    #[error("landing site {index} is not a finite point")]
    InvalidLandingSite { index: usize },
}

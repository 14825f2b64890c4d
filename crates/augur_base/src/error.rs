//! Error types for name parsing.

use thiserror::Error;

/// Errors from resolving planet, phase, or sign names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AugurError {
    /// Name is not one of the seven classical planets.
    #[error("unknown planet: {0}")]
    UnknownPlanet(String),
    /// Name is not one of the eight canonical moon phases.
    #[error("unknown moon phase: {0}")]
    UnknownMoonPhase(String),
    /// Name is not one of the twelve tropical signs.
    #[error("unknown zodiac sign: {0}")]
    UnknownSign(String),
}

//! Error types for hangar planning.

use thiserror::Error;

/// Result type alias for hangar planning operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating planning input.
///
/// The placement engine itself never fails: aircraft that do not fit are
/// reported through [`crate::OptimizationResult::unplaced_aircraft`]. These
/// errors come from the validating front door and from record conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// Hangar dimensions are unusable.
    #[error("Invalid hangar: {0}")]
    InvalidHangar(String),

    /// Aircraft record is unusable.
    #[error("Invalid aircraft: {0}")]
    InvalidAircraft(String),

    /// Two aircraft share the same id.
    #[error("Duplicate aircraft id: {0}")]
    DuplicateAircraftId(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// No preset with the given name exists in the catalog.
    #[error("Unknown aircraft type: {0}")]
    UnknownAircraftType(String),

    /// Rotation other than 0 or 90 degrees.
    #[error("Invalid rotation: {0} (expected 0 or 90)")]
    InvalidRotation(u16),
}

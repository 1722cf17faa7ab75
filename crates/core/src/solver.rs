//! Planner trait and configuration.

use crate::aircraft::Aircraft;
use crate::hangar::Hangar;
use crate::result::OptimizationResult;
use crate::{Error, Result};

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clearance applied when no margin is configured, in meters.
pub const DEFAULT_SAFETY_MARGIN: f64 = 2.0;

/// Configuration for a placement run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Config {
    /// Clearance kept around every aircraft, against walls and other aircraft.
    pub safety_margin: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            safety_margin: DEFAULT_SAFETY_MARGIN,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the safety margin.
    pub fn with_safety_margin(mut self, margin: f64) -> Self {
        self.safety_margin = margin;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.safety_margin.is_finite() || self.safety_margin < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "safety margin must be a non-negative finite number, got {}",
                self.safety_margin
            )));
        }
        Ok(())
    }
}

/// Checks a planning request before it reaches the engine.
///
/// Verifies the hangar, every aircraft record and id uniqueness.
pub fn validate_request(hangar: &Hangar, aircraft: &[Aircraft]) -> Result<()> {
    hangar.validate()?;

    let mut seen = HashSet::with_capacity(aircraft.len());
    for craft in aircraft {
        craft.validate()?;
        if !seen.insert(craft.id()) {
            return Err(Error::DuplicateAircraftId(craft.id().to_string()));
        }
    }

    Ok(())
}

/// Trait for hangar placement planners.
pub trait Planner {
    /// Places `aircraft` into `hangar`.
    ///
    /// Aircraft that do not fit are reported in the result, not as errors.
    /// Errors signal unusable input.
    fn plan(&self, hangar: &Hangar, aircraft: &[Aircraft]) -> Result<OptimizationResult>;
}

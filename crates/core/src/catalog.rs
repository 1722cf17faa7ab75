//! Predefined aircraft types with typical dimensions.

use crate::{Error, Result};

/// Type label for aircraft entered with explicit dimensions.
pub const CUSTOM_TYPE: &str = "Custom";

/// A preset aircraft type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftType {
    pub name: &'static str,
    pub default_width: f64,
    pub default_length: f64,
    pub default_height: f64,
    pub default_wing_span: f64,
}

impl AircraftType {
    const fn new(name: &'static str, width: f64, length: f64, height: f64, span: f64) -> Self {
        Self {
            name,
            default_width: width,
            default_length: length,
            default_height: height,
            default_wing_span: span,
        }
    }
}

/// Built-in aircraft presets.
pub const AIRCRAFT_TYPES: [AircraftType; 8] = [
    AircraftType::new("Small Private Jet", 10.0, 15.0, 4.0, 14.0),
    AircraftType::new("Medium Business Jet", 15.0, 20.0, 6.0, 18.0),
    AircraftType::new("Regional Airliner", 25.0, 35.0, 8.0, 30.0),
    AircraftType::new("Narrow-body Commercial", 35.0, 40.0, 12.0, 36.0),
    AircraftType::new("Wide-body Commercial", 45.0, 65.0, 16.0, 60.0),
    AircraftType::new("Helicopter - Small", 8.0, 12.0, 3.0, 12.0),
    AircraftType::new("Helicopter - Large", 12.0, 20.0, 5.0, 20.0),
    AircraftType::new("Light Propeller", 8.0, 8.0, 3.0, 10.0),
];

/// Looks up a preset by name, ignoring ASCII case.
pub fn find_type(name: &str) -> Option<&'static AircraftType> {
    AIRCRAFT_TYPES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

/// Resolves a user-supplied type label.
///
/// `None` and [`CUSTOM_TYPE`] resolve to no preset; any other label must
/// name a catalog entry.
pub fn resolve_type(name: Option<&str>) -> Result<Option<&'static AircraftType>> {
    match name {
        None => Ok(None),
        Some(label) if label.trim().eq_ignore_ascii_case(CUSTOM_TYPE) => Ok(None),
        Some(label) => find_type(label)
            .map(Some)
            .ok_or_else(|| Error::UnknownAircraftType(label.to_string())),
    }
}

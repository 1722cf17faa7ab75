//! Aircraft records.

use crate::catalog::find_type;
use crate::placement::Rotation;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for an aircraft.
pub type AircraftId = String;

/// Color assigned to aircraft that do not specify one.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// An aircraft to be parked.
///
/// Only `width`, `length` and `height` influence placement. `wing_span` and
/// `color` are carried through for presentation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Aircraft {
    id: AircraftId,

    name: String,

    /// Free-form type label, usually a catalog preset name.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    aircraft_type: String,

    width: f64,

    length: f64,

    height: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    wing_span: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_color"))]
    color: String,
}

#[cfg(feature = "serde")]
fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Aircraft {
    /// Creates a new aircraft with the given id, name and footprint.
    pub fn new(
        id: impl Into<AircraftId>,
        name: impl Into<String>,
        width: f64,
        length: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aircraft_type: String::new(),
            width,
            length,
            height,
            wing_span: 0.0,
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Creates an aircraft with the dimensions of a catalog preset.
    pub fn from_type(
        id: impl Into<AircraftId>,
        name: impl Into<String>,
        type_name: &str,
    ) -> Result<Self> {
        let preset =
            find_type(type_name).ok_or_else(|| Error::UnknownAircraftType(type_name.to_string()))?;

        Ok(Self::new(
            id,
            name,
            preset.default_width,
            preset.default_length,
            preset.default_height,
        )
        .with_type(preset.name)
        .with_wing_span(preset.default_wing_span))
    }

    /// Sets the type label.
    pub fn with_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = aircraft_type.into();
        self
    }

    /// Sets the wing span.
    pub fn with_wing_span(mut self, wing_span: f64) -> Self {
        self.wing_span = wing_span;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aircraft_type(&self) -> &str {
        &self.aircraft_type
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn wing_span(&self) -> f64 {
        self.wing_span
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Unmargined floor area. Independent of rotation.
    pub fn footprint_area(&self) -> f64 {
        self.width * self.length
    }

    /// Footprint extents `(along x, along y)` for the given rotation.
    pub fn footprint(&self, rotation: Rotation) -> (f64, f64) {
        match rotation {
            Rotation::Deg0 => (self.width, self.length),
            Rotation::Deg90 => (self.length, self.width),
        }
    }

    /// Checks that the record can be handed to the placement engine.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidAircraft(format!(
                "aircraft '{}' has an empty id",
                self.name
            )));
        }

        let dims = [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
        ];
        for (label, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidAircraft(format!(
                    "{label} of '{}' must be positive and finite, got {value}",
                    self.id
                )));
            }
        }

        if !self.wing_span.is_finite() || self.wing_span < 0.0 {
            return Err(Error::InvalidAircraft(format!(
                "wing span of '{}' cannot be negative",
                self.id
            )));
        }

        Ok(())
    }
}

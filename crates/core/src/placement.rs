//! Placement representation for parked aircraft.

use crate::aircraft::Aircraft;
use crate::rect::Rect2D;
use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of an aircraft footprint on the floor.
///
/// Serialized as the angle in degrees (`0` or `90`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u16", try_from = "u16"))]
pub enum Rotation {
    /// Width along x, length along y.
    #[default]
    Deg0,
    /// Width and length swapped.
    Deg90,
}

impl Rotation {
    /// Angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }

    pub fn is_rotated(self) -> bool {
        self == Rotation::Deg90
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = Error;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            other => Err(Error::InvalidRotation(other)),
        }
    }
}

/// An aircraft together with the position it was assigned.
///
/// `x`/`y` locate the top-left corner of the unmargined footprint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedAircraft {
    #[cfg_attr(feature = "serde", serde(flatten))]
    aircraft: Aircraft,

    pub x: f64,

    pub y: f64,

    pub rotation: Rotation,
}

impl PlacedAircraft {
    /// Creates a new placement.
    pub fn new(aircraft: Aircraft, x: f64, y: f64, rotation: Rotation) -> Self {
        Self {
            aircraft,
            x,
            y,
            rotation,
        }
    }

    /// The placed aircraft record, unchanged.
    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn id(&self) -> &str {
        self.aircraft.id()
    }

    /// Unmargined footprint on the floor, honoring rotation.
    pub fn footprint(&self) -> Rect2D<f64> {
        let (w, l) = self.aircraft.footprint(self.rotation);
        Rect2D::from_origin(self.x, self.y, w, l)
    }

    /// Footprint grown by the safety margin on every side.
    pub fn expanded_footprint(&self, margin: f64) -> Rect2D<f64> {
        self.footprint().expand(margin)
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of placements that needed the 90 degree fallback.
    pub rotated_count: usize,
    /// Sum of unmargined footprint areas.
    pub footprint_area: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[PlacedAircraft]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if p.rotation.is_rotated() {
                stats.rotated_count += 1;
            }
            stats.footprint_area += p.aircraft().footprint_area();
        }

        stats
    }
}

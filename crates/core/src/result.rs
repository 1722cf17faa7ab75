//! Optimization result representation.

use crate::aircraft::Aircraft;
use crate::hangar::Hangar;
use crate::placement::{PlacedAircraft, PlacementStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one placement run.
///
/// `placed_aircraft` and `unplaced_aircraft` together hold every input
/// aircraft exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizationResult {
    /// Aircraft that received a position, in placement order.
    pub placed_aircraft: Vec<PlacedAircraft>,

    /// Aircraft that could not be parked, in rejection order.
    pub unplaced_aircraft: Vec<Aircraft>,

    /// Unmargined placed area over hangar floor area, as a whole percent.
    pub utilization_percentage: u8,
}

impl OptimizationResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every aircraft was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced_aircraft.is_empty()
    }

    pub fn placed_count(&self) -> usize {
        self.placed_aircraft.len()
    }

    pub fn unplaced_count(&self) -> usize {
        self.unplaced_aircraft.len()
    }

    /// Number of aircraft the run was given.
    pub fn total_count(&self) -> usize {
        self.placed_count() + self.unplaced_count()
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placed_aircraft)
    }
}

/// Summary of a run against its hangar, as shown to operators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizationSummary {
    pub hangar_name: String,
    pub hangar_width: f64,
    pub hangar_length: f64,
    pub hangar_height: f64,
    /// Floor area in square meters.
    pub floor_area: f64,
    pub total_aircraft: usize,
    pub placed: usize,
    pub unplaced: usize,
    /// Placements that needed the 90 degree fallback.
    pub rotated: usize,
    pub utilization_percentage: u8,
}

impl OptimizationSummary {
    /// Summarizes `result` for `hangar`.
    pub fn new(hangar: &Hangar, result: &OptimizationResult) -> Self {
        let stats = result.placement_stats();
        Self {
            hangar_name: hangar.name().to_string(),
            hangar_width: hangar.width(),
            hangar_length: hangar.length(),
            hangar_height: hangar.height(),
            floor_area: hangar.floor_area(),
            total_aircraft: result.total_count(),
            placed: stats.count,
            unplaced: result.unplaced_count(),
            rotated: stats.rotated_count,
            utilization_percentage: result.utilization_percentage,
        }
    }
}

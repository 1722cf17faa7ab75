//! # Hangar Packer
//!
//! Grid-based placement engine for parking aircraft on a hangar floor.
//!
//! The floor is discretized into 1 m cells. Aircraft are placed largest
//! first at the first free position in row-major order, falling back to a
//! 90 degree rotation when the primary orientation does not fit.

pub mod grid;
pub mod packer;
pub mod packing_utils;

// Re-exports
pub use grid::{CellRect, OccupancyGrid};
pub use hangar_core::{
    Aircraft, Config, Error, Hangar, OptimizationResult, PlacedAircraft, Planner, Result, Rotation,
};
pub use packer::{optimize_placement, GridPacker};

//! # Hangar Craft
//!
//! Aircraft parking optimization for hangar floors.
//!
//! Places rectangular aircraft footprints on a hangar floor without overlap,
//! honoring each aircraft's height against the hangar ceiling and a safety
//! margin around every aircraft.
//!
//! ## Quick Start
//!
//! ```rust
//! use hangar_craft::{Aircraft, Config, GridPacker, Hangar, Planner};
//!
//! let hangar = Hangar::new("Main Hangar", 100.0, 150.0, 20.0);
//! let fleet = vec![Aircraft::new("a1", "N100", 10.0, 15.0, 4.0)];
//!
//! let packer = GridPacker::new(Config::default());
//! let result = packer.plan(&hangar, &fleet)?;
//!
//! assert_eq!(result.placed_aircraft[0].x, 2.0);
//! assert_eq!(result.utilization_percentage, 1);
//! # Ok::<(), hangar_craft::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and traits.
pub use hangar_core as core;

/// Grid placement engine.
pub use hangar_packer as packer;

// Re-export commonly used types at root level
pub use hangar_core::{
    Aircraft, Config, Error, Hangar, OptimizationResult, OptimizationSummary, PlacedAircraft,
    Planner, Result, Rotation,
};
pub use hangar_packer::{optimize_placement, GridPacker};

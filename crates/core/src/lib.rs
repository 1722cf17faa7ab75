//! # Hangar Core
//!
//! Core types and traits for the hangar placement engine.
//!
//! This crate holds the data model shared by the placement engine and the
//! tools built around it.
//!
//! ## Core Components
//!
//! - **Entities**: [`Hangar`], [`Aircraft`], and the preset [`catalog`]
//! - **Placements**: [`PlacedAircraft`], [`Rotation`], [`Rect2D`] footprints
//! - **Results**: [`OptimizationResult`], [`OptimizationSummary`]
//! - **Planner trait**: validating front door over placement engines
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aircraft;
pub mod catalog;
pub mod error;
pub mod hangar;
pub mod placement;
pub mod rect;
pub mod result;
pub mod solver;

// Re-exports
pub use aircraft::{Aircraft, AircraftId, DEFAULT_COLOR};
pub use catalog::{find_type, resolve_type, AircraftType, AIRCRAFT_TYPES, CUSTOM_TYPE};
pub use error::{Error, Result};
pub use hangar::{Hangar, MAX_GRID_CELLS};
pub use placement::{PlacedAircraft, PlacementStats, Rotation};
pub use rect::Rect2D;
pub use result::{OptimizationResult, OptimizationSummary};
pub use solver::{validate_request, Config, Planner, DEFAULT_SAFETY_MARGIN};

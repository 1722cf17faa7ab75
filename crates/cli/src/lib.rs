//! Hangar planning tools.
//!
//! This crate provides:
//! - A JSON key-value store for the hangar and its fleet
//! - Text rendering of summaries and floor maps
//! - The `hangar` command-line binary

pub mod report;
pub mod store;

pub use store::{JsonStore, StoreError, AIRCRAFT_KEY, HANGAR_KEY};

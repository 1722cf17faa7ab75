//! Shared helpers for grid placement.
//!
//! # Components
//!
//! - [`whole_cells`]: converts meters to the grid cells a length covers
//! - [`sort_by_footprint_area`]: largest-first placement order
//! - [`expanded_cells`]: margin-expanded footprint size in cells
//! - [`utilization_percentage`]: placed area over floor area

use hangar_core::{Aircraft, Hangar, PlacedAircraft, Rotation};

/// Number of 1 m cells needed to cover `meters`.
///
/// Partial meters take a whole cell. Non-positive and non-finite values
/// cover nothing.
pub fn whole_cells(meters: f64) -> usize {
    if meters.is_finite() && meters > 0.0 {
        meters.ceil() as usize
    } else {
        0
    }
}

/// Orders aircraft by unmargined footprint area, largest first.
///
/// The sort is stable: aircraft with equal area keep their input order.
pub fn sort_by_footprint_area(aircraft: &[Aircraft]) -> Vec<&Aircraft> {
    let mut order: Vec<&Aircraft> = aircraft.iter().collect();
    order.sort_by(|a, b| b.footprint_area().total_cmp(&a.footprint_area()));
    order
}

/// Size in cells `(columns, rows)` of the margin-expanded footprint.
///
/// Returns `None` when the size is not representable, which no grid can hold.
pub fn expanded_cells(
    craft: &Aircraft,
    rotation: Rotation,
    margin_cells: usize,
) -> Option<(usize, usize)> {
    let (w, l) = craft.footprint(rotation);
    let border = margin_cells.checked_mul(2)?;
    Some((
        whole_cells(w).checked_add(border)?,
        whole_cells(l).checked_add(border)?,
    ))
}

/// Percentage of the hangar floor covered by unmargined placed footprints.
///
/// Rounds half up to the nearest integer and yields 0 for a hangar without
/// floor area.
pub fn utilization_percentage(placed: &[PlacedAircraft], hangar: &Hangar) -> u8 {
    let floor_area = hangar.floor_area();
    if !floor_area.is_finite() || floor_area <= 0.0 {
        return 0;
    }

    let occupied: f64 = placed.iter().map(|p| p.aircraft().footprint_area()).sum();
    let percent = (occupied / floor_area * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

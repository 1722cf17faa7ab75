//! Text rendering of hangars, fleets and placement results.

use hangar_core::{Aircraft, Hangar, OptimizationResult, OptimizationSummary, AIRCRAFT_TYPES};
use std::fmt::Write;

const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Glyph used for the `index`-th placed aircraft on the floor map.
pub fn glyph(index: usize) -> char {
    GLYPHS.get(index).map(|&b| b as char).unwrap_or('#')
}

pub fn render_hangar(hangar: &Hangar) -> String {
    format!(
        "{}: {}m × {}m × {}m (floor area {} m²)",
        hangar.name(),
        hangar.width(),
        hangar.length(),
        hangar.height(),
        hangar.floor_area()
    )
}

pub fn render_fleet(aircraft: &[Aircraft]) -> String {
    if aircraft.is_empty() {
        return "No aircraft added.".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<18} {:<20} {:<24} {:>7} {:>7} {:>7} {:>7}",
        "ID", "NAME", "TYPE", "WIDTH", "LENGTH", "HEIGHT", "SPAN"
    );
    for craft in aircraft {
        let _ = writeln!(
            out,
            "{:<18} {:<20} {:<24} {:>7} {:>7} {:>7} {:>7}",
            craft.id(),
            craft.name(),
            craft.aircraft_type(),
            craft.width(),
            craft.length(),
            craft.height(),
            craft.wing_span()
        );
    }
    out
}

/// Lists the catalog presets.
pub fn render_types() -> String {
    let mut out = String::new();
    for t in &AIRCRAFT_TYPES {
        let _ = writeln!(
            out,
            "  {:<24} {}m × {}m × {}m, span {}m",
            t.name, t.default_width, t.default_length, t.default_height, t.default_wing_span
        );
    }
    out
}

pub fn render_summary(summary: &OptimizationSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Optimization Summary");
    let _ = writeln!(out, "{:-<40}", "");
    let _ = writeln!(
        out,
        "  Hangar:        {} ({}m × {}m × {}m)",
        summary.hangar_name, summary.hangar_width, summary.hangar_length, summary.hangar_height
    );
    let _ = writeln!(out, "  Floor area:    {} m²", summary.floor_area);
    let _ = writeln!(
        out,
        "  Placed:        {} of {}",
        summary.placed, summary.total_aircraft
    );
    if summary.rotated > 0 {
        let _ = writeln!(out, "  Rotated 90°:   {}", summary.rotated);
    }
    let _ = writeln!(out, "  Unplaced:      {}", summary.unplaced);
    let _ = writeln!(out, "  Utilization:   {}%", summary.utilization_percentage);
    out
}

/// Lists every placement with its map glyph, then the unplaced aircraft.
pub fn render_placements(result: &OptimizationResult) -> String {
    let mut out = String::new();
    for (i, placed) in result.placed_aircraft.iter().enumerate() {
        let craft = placed.aircraft();
        let _ = writeln!(
            out,
            "  {} {:<20} ({}) at ({}, {}) rotation {}°",
            glyph(i),
            craft.name(),
            craft.id(),
            placed.x,
            placed.y,
            placed.rotation.degrees()
        );
    }
    if result.all_placed() {
        let _ = writeln!(out, "  All aircraft placed.");
    } else {
        let _ = writeln!(out, "  Unplaced:");
        for craft in &result.unplaced_aircraft {
            let _ = writeln!(out, "    - {} ({})", craft.name(), craft.id());
        }
    }
    out
}

/// Draws the hangar floor as characters, at most `max_columns` wide.
///
/// Each character stands for a square patch of floor; it shows the glyph of
/// the aircraft covering the patch center, or `.` for free floor.
pub fn render_floor_map(hangar: &Hangar, result: &OptimizationResult, max_columns: usize) -> String {
    let grid_columns = hangar.grid_columns();
    let grid_rows = hangar.grid_rows();
    if grid_columns == 0 || grid_rows == 0 || max_columns == 0 {
        return "(no floor)\n".to_string();
    }

    let scale = (grid_columns as f64 / max_columns as f64).max(1.0);
    let columns = (grid_columns as f64 / scale).ceil() as usize;
    let rows = (grid_rows as f64 / scale).ceil() as usize;

    let footprints: Vec<_> = result
        .placed_aircraft
        .iter()
        .map(|p| p.footprint())
        .collect();

    let mut out = String::with_capacity((columns + 1) * rows);
    for row in 0..rows {
        let cy = (row as f64 + 0.5) * scale;
        for column in 0..columns {
            let cx = (column as f64 + 0.5) * scale;
            let cell = footprints
                .iter()
                .position(|r| cx >= r.min_x && cx < r.max_x && cy >= r.min_y && cy < r.max_y)
                .map(glyph)
                .unwrap_or('.');
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

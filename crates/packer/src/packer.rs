//! Greedy first-fit hangar placement.

use crate::grid::OccupancyGrid;
use crate::packing_utils::{
    expanded_cells, sort_by_footprint_area, utilization_percentage, whole_cells,
};
use hangar_core::solver::{validate_request, Config, Planner};
use hangar_core::{Aircraft, Hangar, OptimizationResult, PlacedAircraft, Result, Rotation};

/// Places `aircraft` into `hangar` keeping `safety_margin` meters of clearance.
///
/// # Algorithm
///
/// 1. Order aircraft by unmargined footprint area, largest first (stable)
/// 2. Start from an all-free grid of `floor(length)` rows by `floor(width)` columns
/// 3. For each aircraft:
///    - reject it if it is taller than the hangar
///    - scan row-major for the first free block of the margin-expanded footprint
///    - failing that, retry with width and length swapped (rotation 90)
///    - reject it if neither orientation fits
/// 4. Report utilization from the unmargined placed areas
///
/// Recorded positions are the top-left corner of the unmargined footprint,
/// i.e. the chosen block's corner offset by the margin. The margin is applied
/// in whole cells, so fractional margins round up.
///
/// This never fails: unplaceable aircraft end up in
/// [`OptimizationResult::unplaced_aircraft`] in the order they were rejected.
/// Inputs are not validated; see [`GridPacker`] for the checked entry point.
pub fn optimize_placement(
    hangar: &Hangar,
    aircraft: &[Aircraft],
    safety_margin: f64,
) -> OptimizationResult {
    let margin_cells = whole_cells(safety_margin);
    let mut grid = OccupancyGrid::for_hangar(hangar);

    let mut placed_aircraft = Vec::new();
    let mut unplaced_aircraft = Vec::new();

    for craft in sort_by_footprint_area(aircraft) {
        if craft.height() > hangar.height() {
            log::debug!(
                "'{}' is taller than the hangar ({} > {})",
                craft.id(),
                craft.height(),
                hangar.height()
            );
            unplaced_aircraft.push(craft.clone());
            continue;
        }

        let placement = place_with_rotation(&mut grid, craft, Rotation::Deg0, margin_cells)
            .or_else(|| place_with_rotation(&mut grid, craft, Rotation::Deg90, margin_cells));

        match placement {
            Some(placed) => {
                log::debug!(
                    "placed '{}' at ({}, {}) rotation {}",
                    placed.id(),
                    placed.x,
                    placed.y,
                    placed.rotation.degrees()
                );
                placed_aircraft.push(placed);
            }
            None => {
                log::debug!("no room for '{}'", craft.id());
                unplaced_aircraft.push(craft.clone());
            }
        }
    }

    let utilization_percentage = utilization_percentage(&placed_aircraft, hangar);

    log::info!(
        "placed {}/{} aircraft in '{}', {} cells claimed, utilization {}%",
        placed_aircraft.len(),
        aircraft.len(),
        hangar.name(),
        grid.occupied_count(),
        utilization_percentage
    );

    OptimizationResult {
        placed_aircraft,
        unplaced_aircraft,
        utilization_percentage,
    }
}

/// Claims the first free block for `craft` in the given orientation.
///
/// Orientations whose expanded footprint exceeds the floor on either axis,
/// or cannot be sized at all, are skipped without scanning.
fn place_with_rotation(
    grid: &mut OccupancyGrid,
    craft: &Aircraft,
    rotation: Rotation,
    margin_cells: usize,
) -> Option<PlacedAircraft> {
    let (width, length) = expanded_cells(craft, rotation, margin_cells)?;
    if !grid.fits(width, length) {
        return None;
    }

    let block = grid.find_first_free(width, length)?;
    grid.occupy(&block);

    Some(PlacedAircraft::new(
        craft.clone(),
        (block.x + margin_cells) as f64,
        (block.y + margin_cells) as f64,
        rotation,
    ))
}

/// Grid-based first-fit planner.
///
/// Validates the request, then runs [`optimize_placement`] with the
/// configured safety margin. Each call works on its own grid, so one packer
/// can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct GridPacker {
    config: Config,
}

impl GridPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Runs the engine without validating input.
    pub fn pack(&self, hangar: &Hangar, aircraft: &[Aircraft]) -> OptimizationResult {
        optimize_placement(hangar, aircraft, self.config.safety_margin)
    }
}

impl Planner for GridPacker {
    fn plan(&self, hangar: &Hangar, aircraft: &[Aircraft]) -> Result<OptimizationResult> {
        self.config.validate()?;
        validate_request(hangar, aircraft)?;

        Ok(self.pack(hangar, aircraft))
    }
}

//! Hangar envelope.

use crate::rect::Rect2D;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name used by [`Hangar::default`].
pub const DEFAULT_HANGAR_NAME: &str = "Main Hangar";

/// Largest floor, in 1 m cells, a placement grid is built for.
pub const MAX_GRID_CELLS: usize = u32::MAX as usize;

/// A rectangular hangar floor with a height ceiling, in meters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hangar {
    /// Display name.
    name: String,

    /// Extent along the x axis.
    width: f64,

    /// Extent along the y axis.
    length: f64,

    /// Clearance ceiling.
    height: f64,
}

impl Hangar {
    /// Creates a new hangar with the given dimensions.
    pub fn new(name: impl Into<String>, width: f64, length: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            length,
            height,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
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

    /// Floor area (`width × length`) in square meters.
    pub fn floor_area(&self) -> f64 {
        self.width * self.length
    }

    /// Number of whole 1 m grid columns across the width.
    ///
    /// Non-positive or non-finite widths yield zero columns.
    pub fn grid_columns(&self) -> usize {
        floored_cells(self.width)
    }

    /// Number of whole 1 m grid rows along the length.
    pub fn grid_rows(&self) -> usize {
        floored_cells(self.length)
    }

    /// Number of grid cells on the floor, or `None` above [`MAX_GRID_CELLS`].
    pub fn grid_cell_count(&self) -> Option<usize> {
        self.grid_columns()
            .checked_mul(self.grid_rows())
            .filter(|&cells| cells <= MAX_GRID_CELLS)
    }

    /// The floor as a rectangle anchored at the origin.
    pub fn floor(&self) -> Rect2D<f64> {
        Rect2D::from_origin(0.0, 0.0, self.width, self.length)
    }

    /// Checks that every dimension is positive and finite and that the floor
    /// grid stays within [`MAX_GRID_CELLS`].
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
        ];
        for (label, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidHangar(format!(
                    "{label} of '{}' must be positive and finite, got {value}",
                    self.name
                )));
            }
        }

        if self.grid_cell_count().is_none() {
            return Err(Error::InvalidHangar(format!(
                "floor of '{}' exceeds {MAX_GRID_CELLS} grid cells",
                self.name
            )));
        }

        Ok(())
    }
}

impl Default for Hangar {
    fn default() -> Self {
        Self::new(DEFAULT_HANGAR_NAME, 100.0, 150.0, 20.0)
    }
}

fn floored_cells(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value.floor() as usize
    } else {
        0
    }
}

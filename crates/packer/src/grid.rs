//! Occupancy grid at 1 m cell resolution.

use hangar_core::{Hangar, MAX_GRID_CELLS};

/// A rectangle of whole grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Leftmost column.
    pub x: usize,
    /// Topmost row.
    pub y: usize,
    /// Number of columns covered.
    pub width: usize,
    /// Number of rows covered.
    pub length: usize,
}

impl CellRect {
    pub fn new(x: usize, y: usize, width: usize, length: usize) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }
}

/// Run-scoped boolean occupancy matrix.
///
/// Cells are stored row-major in a flat vector; `true` marks an occupied
/// cell. A grid belongs to exactly one placement run.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates an all-free grid.
    ///
    /// A size whose cell count overflows `usize` yields an empty grid.
    pub fn new(columns: usize, rows: usize) -> Self {
        match columns.checked_mul(rows) {
            Some(count) => Self {
                columns,
                rows,
                cells: vec![false; count],
            },
            None => {
                log::warn!("{columns}x{rows} grid is not addressable, using an empty floor");
                Self::empty()
            }
        }
    }

    fn empty() -> Self {
        Self {
            columns: 0,
            rows: 0,
            cells: Vec::new(),
        }
    }

    /// Creates an all-free grid covering the hangar floor.
    ///
    /// Fractional dimensions are floored; degenerate hangars and floors above
    /// [`MAX_GRID_CELLS`] produce an empty grid.
    pub fn for_hangar(hangar: &Hangar) -> Self {
        if hangar.grid_cell_count().is_none() {
            log::warn!(
                "floor of '{}' exceeds {} grid cells, using an empty floor",
                hangar.name(),
                MAX_GRID_CELLS
            );
            return Self::empty();
        }
        Self::new(hangar.grid_columns(), hangar.grid_rows())
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    /// Checks whether a `width × length` block fits inside the grid at all.
    pub fn fits(&self, width: usize, length: usize) -> bool {
        width <= self.columns && length <= self.rows
    }

    /// Checks whether `rect` lies within the grid.
    pub fn contains(&self, rect: &CellRect) -> bool {
        rect.x
            .checked_add(rect.width)
            .is_some_and(|end| end <= self.columns)
            && rect
                .y
                .checked_add(rect.length)
                .is_some_and(|end| end <= self.rows)
    }

    /// Checks that every cell of `rect` is inside the grid and unoccupied.
    pub fn is_free(&self, rect: &CellRect) -> bool {
        if !self.contains(rect) {
            return false;
        }

        (rect.y..rect.y + rect.length).all(|row| {
            let start = self.index(rect.x, row);
            !self.cells[start..start + rect.width].contains(&true)
        })
    }

    /// Marks every cell of `rect` occupied.
    ///
    /// Cells outside the grid are ignored.
    pub fn occupy(&mut self, rect: &CellRect) {
        let x_end = rect.x.saturating_add(rect.width).min(self.columns);
        let y_end = rect.y.saturating_add(rect.length).min(self.rows);
        if rect.x >= x_end {
            return;
        }

        for row in rect.y..y_end {
            let start = self.index(rect.x, row);
            let end = self.index(x_end, row);
            self.cells[start..end].fill(true);
        }
    }

    /// Finds the first free `width × length` block in row-major order.
    ///
    /// Rows are scanned top to bottom and, within a row, columns left to
    /// right. The first block whose cells are all free wins, so the result
    /// has the smallest `y`, then the smallest `x`.
    pub fn find_first_free(&self, width: usize, length: usize) -> Option<CellRect> {
        if !self.fits(width, length) {
            return None;
        }

        for y in 0..=self.rows - length {
            for x in 0..=self.columns - width {
                let candidate = CellRect::new(x, y, width, length);
                if self.is_free(&candidate) {
                    return Some(candidate);
                }
            }
        }

        None
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

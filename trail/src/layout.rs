//! Grid layout: how many cells cover the viewport and where each one sits.
//!
//! The grid is drawn in a "view box" of `cols * cell_width` by
//! `rows * cell_height` units. In fitted mode that view box equals the
//! viewport exactly, so there is never a partial strip of cells along the
//! right or bottom edge.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::MAX_CELLS_PER_AXIS;
use crate::geom::{Point, Rect, Size};

/// A `(column, row)` grid coordinate, zero-indexed from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    #[must_use]
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Column/row counts plus the actual cell size used for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { cols: 1, rows: 1, cell_width: 0.0, cell_height: 0.0 }
    }
}

impl GridLayout {
    /// Fit the grid to `viewport`, aiming for cells of `nominal` size.
    ///
    /// Counts are `round(viewport / nominal)` with a floor of one per axis,
    /// and the actual cell size is `viewport / count`. The caller is expected
    /// to have validated `nominal` (see [`crate::config::validate_cell_size`]).
    #[must_use]
    pub fn fit(viewport: Size, nominal: Size) -> Self {
        let viewport = viewport.sanitized();
        let cols = axis_count(viewport.width, nominal.width);
        let rows = axis_count(viewport.height, nominal.height);
        Self {
            cols,
            rows,
            cell_width: viewport.width / count_as_f64(cols),
            cell_height: viewport.height / count_as_f64(rows),
        }
    }

    /// A fixed `cols × rows` grid of `cell`-sized cells, independent of the
    /// viewport. Counts are clamped to `1..=MAX_CELLS_PER_AXIS`.
    #[must_use]
    pub fn fixed(cols: usize, rows: usize, cell: Size) -> Self {
        let cell = cell.sanitized();
        Self {
            cols: cols.clamp(1, MAX_CELLS_PER_AXIS),
            rows: rows.clamp(1, MAX_CELLS_PER_AXIS),
            cell_width: cell.width,
            cell_height: cell.height,
        }
    }

    /// Number of cells, and therefore the intensity buffer length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    /// Layouts always hold at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the view box the cells tile.
    #[must_use]
    pub fn view_size(&self) -> Size {
        Size::new(self.cell_width * count_as_f64(self.cols), self.cell_height * count_as_f64(self.rows))
    }

    /// Row-major buffer index of `cell`, or `None` if it is off the grid.
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        (cell.col < self.cols && cell.row < self.rows).then_some(cell.row * self.cols + cell.col)
    }

    /// Grid coordinate of a buffer index.
    #[must_use]
    pub fn cell_of(&self, index: usize) -> Cell {
        Cell::new(index % self.cols, index / self.cols)
    }

    /// View-box rectangle covered by the cell at `index`.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Rect {
        let cell = self.cell_of(index);
        Rect::new(
            count_as_f64(cell.col) * self.cell_width,
            count_as_f64(cell.row) * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Map a client-space pointer position to the cell beneath it.
    ///
    /// `bounds` is the grid element's bounding client rect. The element may be
    /// stretched to a size other than the view box, so the local point is
    /// scaled into view-box units before dividing by the cell size. Returns
    /// `None` when the pointer is outside `bounds`, when `bounds` is
    /// degenerate, or when cells have no area yet.
    #[must_use]
    pub fn locate(&self, client: Point, bounds: Rect) -> Option<Cell> {
        if bounds.size().sanitized().is_empty() || self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return None;
        }
        let local = bounds.to_local(client);
        if !bounds.contains_local(local) {
            return None;
        }
        let view = self.view_size();
        let vx = local.x / bounds.width * view.width;
        let vy = local.y / bounds.height * view.height;
        Some(Cell::new(
            axis_index(vx / self.cell_width, self.cols),
            axis_index(vy / self.cell_height, self.rows),
        ))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_count(extent: f64, nominal: f64) -> usize {
    let raw = (extent / nominal).round();
    if raw.is_finite() && raw >= 1.0 { (raw as usize).min(MAX_CELLS_PER_AXIS) } else { 1 }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_index(position: f64, count: usize) -> usize {
    let floored = position.floor();
    if floored.is_finite() && floored > 0.0 { (floored as usize).min(count - 1) } else { 0 }
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: usize) -> f64 {
    count as f64
}

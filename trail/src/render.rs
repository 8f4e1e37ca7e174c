//! Opacity model: turns intensities into drawable cells.
//!
//! Nothing here knows about a drawing surface. [`crate::draw`] paints these
//! cells onto a canvas; tests and other hosts can consume them directly.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{FILL_OPACITY_MAX, FILL_OPACITY_SCALE, STROKE_OPACITY_MAX};
use crate::geom::Rect;
use crate::grid::IntensityGrid;

/// Fill and outline opacity for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellStyle {
    pub fill_opacity: f32,
    pub stroke_opacity: f32,
}

impl CellStyle {
    /// Fully transparent cells are skipped when painting.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.fill_opacity <= 0.0 && self.stroke_opacity <= 0.0
    }
}

/// A cell ready to draw: view-box rectangle plus style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCell {
    pub index: usize,
    pub rect: Rect,
    pub style: CellStyle,
}

/// Saturating opacity curve: fill `min(0.9, 0.9·i)`, stroke `min(1, i)`.
#[must_use]
pub fn cell_style(intensity: f32) -> CellStyle {
    if intensity.is_nan() || intensity <= 0.0 {
        return CellStyle::default();
    }
    CellStyle {
        fill_opacity: (intensity * FILL_OPACITY_SCALE).min(FILL_OPACITY_MAX),
        stroke_opacity: intensity.min(STROKE_OPACITY_MAX),
    }
}

/// Every cell of `grid`, in buffer order.
pub fn cells(grid: &IntensityGrid) -> impl Iterator<Item = RenderCell> + '_ {
    let layout = *grid.layout();
    grid.values().iter().enumerate().map(move |(index, intensity)| RenderCell {
        index,
        rect: layout.cell_rect(index),
        style: cell_style(*intensity),
    })
}

/// Cells of `grid` that draw anything.
pub fn visible_cells(grid: &IntensityGrid) -> impl Iterator<Item = RenderCell> + '_ {
    cells(grid).filter(|cell| !cell.style.is_transparent())
}

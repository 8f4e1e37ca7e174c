//! Intensity buffer: one `f32` in `[0, 1]` per cell, row-major.
//!
//! Two writers touch the buffer, both on the UI thread: pointer stamps raise
//! a cell to full intensity, and the per-frame decay shrinks every lit cell
//! towards zero. A stamp never lowers a value. The host applies pointer
//! stamps before the frame's decay, so a stamp is always decayed by the
//! time elapsed since the previous frame and never skipped.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::layout::{Cell, GridLayout};

/// Where a cell sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPhase {
    /// Intensity is exactly zero; nothing is drawn.
    Idle,
    /// Raised by a stamp since the last decay step.
    Stamped,
    /// Lit, and shrinking on every decay step.
    Decaying,
}

/// Tuning for a single decay step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayParams {
    /// Decay rate per second (`ln 2 / half_life`).
    pub lambda: f64,
    /// Values at or below this snap to zero.
    pub epsilon: f32,
    /// Minimum change for the step to report the buffer as changed.
    pub sensitivity: f32,
}

/// The intensity buffer together with the layout it was sized for.
#[derive(Debug, Clone)]
pub struct IntensityGrid {
    layout: GridLayout,
    values: Vec<f32>,
    stamped: Vec<bool>,
}

impl IntensityGrid {
    /// A zeroed buffer sized for `layout`.
    #[must_use]
    pub fn new(layout: GridLayout) -> Self {
        let len = layout.len();
        Self { layout, values: vec![0.0; len], stamped: vec![false; len] }
    }

    /// Replace the layout, reallocating and zeroing the buffer.
    pub fn reset(&mut self, layout: GridLayout) {
        *self = Self::new(layout);
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw intensities, row-major.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Intensity at `cell`, or `None` when it is off the grid.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<f32> {
        self.layout.index_of(cell).map(|i| self.values[i])
    }

    /// Lifecycle phase of the cell at buffer `index`.
    #[must_use]
    pub fn phase(&self, index: usize) -> CellPhase {
        match (self.values.get(index), self.stamped.get(index)) {
            (Some(v), _) if *v <= 0.0 => CellPhase::Idle,
            (Some(_), Some(true)) => CellPhase::Stamped,
            (Some(_), _) => CellPhase::Decaying,
            (None, _) => CellPhase::Idle,
        }
    }

    /// Whether any cell is lit.
    #[must_use]
    pub fn any_lit(&self) -> bool {
        self.values.iter().any(|v| *v > 0.0)
    }

    /// Raise `cell` to `min(1, weight)` unless it is already brighter.
    ///
    /// Returns `true` if the stored value increased. Only a raise marks the
    /// cell as stamped. Off-grid cells and non-positive weights are ignored.
    pub fn stamp(&mut self, cell: Cell, weight: f32) -> bool {
        let Some(index) = self.layout.index_of(cell) else {
            return false;
        };
        if weight.is_nan() || weight <= 0.0 {
            return false;
        }
        let target = weight.min(1.0);
        if target > self.values[index] {
            self.values[index] = target;
            self.stamped[index] = true;
            true
        } else {
            false
        }
    }

    /// Advance every lit cell by `dt_secs` of exponential decay.
    ///
    /// Stamped cells decay like any other and become decaying. Returns `true` if any cell moved by more than
    /// `params.sensitivity` or dropped to zero.
    pub fn decay(&mut self, dt_secs: f64, params: DecayParams) -> bool {
        let dt = if dt_secs.is_finite() { dt_secs.max(0.0) } else { 0.0 };
        #[allow(clippy::cast_possible_truncation)]
        let factor = (-params.lambda * dt).exp() as f32;
        let mut changed = false;

        for (value, stamped) in self.values.iter_mut().zip(self.stamped.iter_mut()) {
            *stamped = false;
            let current = *value;
            if current <= 0.0 {
                continue;
            }
            let next = if current > params.epsilon { current * factor } else { 0.0 };
            let next = if next <= params.epsilon { 0.0 } else { next };
            if (current - next).abs() > params.sensitivity || next <= 0.0 {
                changed = true;
            }
            *value = next;
        }
        changed
    }
}

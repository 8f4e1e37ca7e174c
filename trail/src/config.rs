//! Tuning knobs for the trail engine and their validation.
//!
//! Revisions of the grid have shipped with different half-lives (0.35 s to
//! 1.2 s) and with or without a trailing neighbour stamp, so both are plain
//! configuration here rather than constants baked into the engine.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_CHANGE_SENSITIVITY, DEFAULT_EPSILON, DEFAULT_HALF_LIFE_SECS,
    DEFAULT_MAX_FRAME_DT_SECS,
};
use crate::geom::Size;

/// Errors raised when a [`TrailConfig`] or a resize request is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrailError {
    /// Nominal cell dimensions must be finite and strictly positive.
    #[error("invalid cell size {width}x{height}: dimensions must be finite and positive")]
    InvalidCellSize { width: f64, height: f64 },

    /// Half-life must be finite and strictly positive.
    #[error("invalid half-life {0}s: must be finite and positive")]
    InvalidHalfLife(f64),

    /// A threshold (epsilon, sensitivity, max frame delta) is out of range.
    #[error("invalid {name} {value}: must be finite and non-negative")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// Trailing stamp weight must lie in `(0, 1]`.
    #[error("invalid trailing weight {0}: must be in (0, 1]")]
    InvalidTrailingWeight(f32),
}

/// Which cells a pointer move stamps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StampMode {
    /// Only the cell under the pointer.
    #[default]
    Single,
    /// The cell under the pointer at full weight, plus the previously hovered
    /// cell at `weight`.
    WithTrailing { weight: f32 },
}

/// Engine configuration. Construct with [`TrailConfig::default`] and override
/// fields, then pass through [`TrailConfig::validate`] (the engine does this).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Target cell size before fitting the grid to the viewport.
    pub cell_width: f64,
    pub cell_height: f64,
    /// Seconds for a decaying cell to halve its intensity.
    pub half_life_secs: f64,
    /// Values at or below this snap to zero.
    pub epsilon: f32,
    /// Minimum per-cell change for a tick to count as "changed".
    pub change_sensitivity: f32,
    /// Cap on the elapsed time consumed by one tick.
    pub max_frame_dt_secs: f64,
    pub stamp_mode: StampMode,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            half_life_secs: DEFAULT_HALF_LIFE_SECS,
            epsilon: DEFAULT_EPSILON,
            change_sensitivity: DEFAULT_CHANGE_SENSITIVITY,
            max_frame_dt_secs: DEFAULT_MAX_FRAME_DT_SECS,
            stamp_mode: StampMode::Single,
        }
    }
}

impl TrailConfig {
    /// Check every field, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns a [`TrailError`] naming the offending field.
    pub fn validate(&self) -> Result<(), TrailError> {
        validate_cell_size(self.nominal_cell())?;
        if !(self.half_life_secs.is_finite() && self.half_life_secs > 0.0) {
            return Err(TrailError::InvalidHalfLife(self.half_life_secs));
        }
        check_threshold("epsilon", f64::from(self.epsilon))?;
        check_threshold("change sensitivity", f64::from(self.change_sensitivity))?;
        check_threshold("max frame delta", self.max_frame_dt_secs)?;
        if let StampMode::WithTrailing { weight } = self.stamp_mode {
            if !(weight > 0.0 && weight <= 1.0) {
                return Err(TrailError::InvalidTrailingWeight(weight));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn nominal_cell(&self) -> Size {
        Size::new(self.cell_width, self.cell_height)
    }

    /// Decay rate `λ = ln 2 / half_life`, per second.
    #[must_use]
    pub fn decay_lambda(&self) -> f64 {
        std::f64::consts::LN_2 / self.half_life_secs
    }
}

/// Reject nominal cell sizes that would make the column/row count meaningless.
///
/// # Errors
///
/// Returns [`TrailError::InvalidCellSize`] for zero, negative or non-finite
/// dimensions.
pub fn validate_cell_size(cell: Size) -> Result<(), TrailError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(cell.width) && ok(cell.height) {
        Ok(())
    } else {
        Err(TrailError::InvalidCellSize { width: cell.width, height: cell.height })
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), TrailError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TrailError::InvalidThreshold { name, value })
    }
}

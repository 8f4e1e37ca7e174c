//! Default tuning values for the trail engine.

// ── Layout ──────────────────────────────────────────────────────

/// Nominal cell width in CSS pixels before fitting to the viewport.
pub const DEFAULT_CELL_WIDTH: f64 = 40.0;

/// Nominal cell height in CSS pixels before fitting to the viewport.
pub const DEFAULT_CELL_HEIGHT: f64 = 40.0;

/// Hard ceiling on columns or rows, whatever the viewport reports.
pub const MAX_CELLS_PER_AXIS: usize = 4096;

// ── Decay ───────────────────────────────────────────────────────

/// Seconds for a trail cell to lose half of its intensity.
pub const DEFAULT_HALF_LIFE_SECS: f64 = 0.35;

/// Intensities at or below this value snap to zero.
pub const DEFAULT_EPSILON: f32 = 0.0005;

/// A tick that moves no cell by more than this reports "unchanged".
pub const DEFAULT_CHANGE_SENSITIVITY: f32 = 0.0005;

/// Upper bound on the elapsed time fed into a single tick, in seconds.
///
/// Keeps the trail from vanishing in one step after a backgrounded tab or a
/// long frame hitch.
pub const DEFAULT_MAX_FRAME_DT_SECS: f64 = 0.1;

// ── Render ──────────────────────────────────────────────────────

/// Fill opacity per unit of intensity.
pub const FILL_OPACITY_SCALE: f32 = 0.9;

/// Ceiling on cell fill opacity.
pub const FILL_OPACITY_MAX: f32 = 0.9;

/// Ceiling on cell outline opacity.
pub const STROKE_OPACITY_MAX: f32 = 1.0;

/// Opacity of the base grid lines drawn under the trail.
pub const GRID_LINE_OPACITY: f64 = 0.3;

/// Opacity of the background wash behind the grid.
pub const BACKGROUND_OPACITY: f64 = 0.5;

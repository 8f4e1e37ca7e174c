use crate::config::{StampMode, TrailConfig, TrailError, validate_cell_size};
use crate::geom::{Point, Rect, Size};
use crate::grid::{DecayParams, IntensityGrid};
use crate::layout::{Cell, GridLayout};
use crate::render::{self, RenderCell};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What a pointer move did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The pointer is outside the grid; hover was cleared.
    Outside,
    /// The pointer is over `cell`. `raised` is true if any intensity grew.
    Hover { cell: Cell, raised: bool },
}

/// Trail engine: intensity grid, hover tracking and frame timing.
///
/// Everything here is plain data so it can be driven and tested without a
/// browser. The host feeds it window size, pointer moves and
/// `requestAnimationFrame` timestamps, and repaints when told something
/// changed.
#[derive(Debug, Clone)]
pub struct TrailEngine {
    config: TrailConfig,
    grid: IntensityGrid,
    hovered: Option<Cell>,
    last_tick_ms: Option<f64>,
    dirty: bool,
}

impl TrailEngine {
    /// Create an engine with a single empty cell; call [`Self::resize`] or
    /// [`Self::set_fixed`] once the host knows its size.
    ///
    /// # Errors
    ///
    /// Returns the first [`TrailError`] found in `config`.
    pub fn new(config: TrailConfig) -> Result<Self, TrailError> {
        config.validate()?;
        Ok(Self {
            config,
            grid: IntensityGrid::new(GridLayout::default()),
            hovered: None,
            last_tick_ms: None,
            dirty: true,
        })
    }

    // --- Layout ---

    /// Refit the grid to `viewport` with cells near `nominal` size.
    ///
    /// Always reallocates and zeroes the buffer, clears hover, and restarts
    /// frame timing so the next tick consumes no elapsed time.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidCellSize`] if `nominal` is not finite and
    /// positive; the grid is left untouched in that case.
    pub fn resize(&mut self, viewport: Size, nominal: Size) -> Result<GridLayout, TrailError> {
        validate_cell_size(nominal)?;
        self.config.cell_width = nominal.width;
        self.config.cell_height = nominal.height;
        let layout = GridLayout::fit(viewport, nominal);
        self.apply_layout(layout);
        Ok(layout)
    }

    /// Refit to `viewport` using the configured nominal cell size.
    pub fn fit_viewport(&mut self, viewport: Size) -> GridLayout {
        let layout = GridLayout::fit(viewport, self.config.nominal_cell());
        self.apply_layout(layout);
        layout
    }

    /// Switch to a fixed `cols × rows` grid of configured-size cells.
    pub fn set_fixed(&mut self, cols: usize, rows: usize) -> GridLayout {
        let layout = GridLayout::fixed(cols, rows, self.config.nominal_cell());
        self.apply_layout(layout);
        layout
    }

    fn apply_layout(&mut self, layout: GridLayout) {
        self.grid.reset(layout);
        self.hovered = None;
        self.last_tick_ms = None;
        self.dirty = true;
    }

    // --- Input ---

    /// Handle a pointer move at `client`, given the grid element's bounds.
    pub fn on_pointer_move(&mut self, client: Point, bounds: Rect) -> PointerOutcome {
        let Some(cell) = self.grid.layout().locate(client, bounds) else {
            self.hovered = None;
            return PointerOutcome::Outside;
        };

        let previous = self.hovered.replace(cell);
        let mut raised = self.grid.stamp(cell, 1.0);
        if let (StampMode::WithTrailing { weight }, Some(prev)) = (self.config.stamp_mode, previous) {
            if prev != cell {
                raised |= self.grid.stamp(prev, weight);
            }
        }
        self.dirty |= raised;
        PointerOutcome::Hover { cell, raised }
    }

    /// Forget the hovered cell, e.g. when the pointer leaves the window.
    pub fn on_pointer_leave(&mut self) {
        self.hovered = None;
    }

    // --- Frames ---

    /// Advance decay to `now_ms` (a `requestAnimationFrame` timestamp).
    ///
    /// The elapsed time since the previous tick is clamped to
    /// `[0, max_frame_dt_secs]`; the first tick after construction, resize or
    /// [`Self::pause`] uses zero. Returns `true` if the host should repaint.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let dt = match self.last_tick_ms {
            Some(last) if now_ms.is_finite() => ((now_ms - last) / 1000.0).clamp(0.0, self.config.max_frame_dt_secs),
            _ => 0.0,
        };
        if now_ms.is_finite() {
            self.last_tick_ms = Some(now_ms);
        }
        self.decay(dt)
    }

    /// Apply `dt_secs` of decay directly. Returns `true` if the host should
    /// repaint.
    pub fn decay(&mut self, dt_secs: f64) -> bool {
        let params = DecayParams {
            lambda: self.config.decay_lambda(),
            epsilon: self.config.epsilon,
            sensitivity: self.config.change_sensitivity,
        };
        let changed = self.grid.decay(dt_secs, params);
        changed | std::mem::take(&mut self.dirty)
    }

    /// Drop frame timing so the next tick starts from zero elapsed time.
    pub fn pause(&mut self) {
        self.last_tick_ms = None;
    }

    /// Whether the frame loop has anything to do.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.grid.any_lit()
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        self.grid.layout()
    }

    #[must_use]
    pub fn grid(&self) -> &IntensityGrid {
        &self.grid
    }

    #[must_use]
    pub fn hovered(&self) -> Option<Cell> {
        self.hovered
    }

    /// Intensity at `cell`, or `None` when it is off the grid.
    #[must_use]
    pub fn intensity(&self, cell: Cell) -> Option<f32> {
        self.grid.get(cell)
    }

    /// Every cell with its position and opacities.
    #[must_use]
    pub fn render(&self) -> Vec<RenderCell> {
        render::cells(&self.grid).collect()
    }

    /// Only the cells that draw something.
    #[must_use]
    pub fn visible_cells(&self) -> Vec<RenderCell> {
        render::visible_cells(&self.grid).collect()
    }
}

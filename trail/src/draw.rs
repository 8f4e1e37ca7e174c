//! Painting: draws one frame of the grid onto a 2D canvas context.
//!
//! Besides `frame_loop`, this is the only module that touches the browser
//! ([`web_sys::CanvasRenderingContext2d`]).
//! It reads the engine and produces pixels; it never mutates engine state.
//!
//! Fallible `Canvas2D` calls propagate via `Result<(), JsValue>`; the host
//! component decides what to do with a failure.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BACKGROUND_OPACITY, GRID_LINE_OPACITY};
use crate::engine::TrailEngine;
use crate::geom::Size;
use crate::render::{self, RenderCell};

/// Colours for the background wash, base grid lines and trail cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub grid_line: &'static str,
    pub trail: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self { background: "rgb(249, 250, 251)", grid_line: "rgb(156, 163, 175)", trail: "rgb(0, 0, 0)" }
    }
}

/// Draw the whole frame.
///
/// `surface` is the canvas size in CSS pixels and `dpr` the device pixel
/// ratio. The grid's view box is stretched to cover `surface`, matching how
/// the pointer is mapped back in [`crate::layout::GridLayout::locate`].
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    engine: &TrailEngine,
    surface: Size,
    dpr: f64,
    palette: &Palette,
) -> Result<(), JsValue> {
    let surface = surface.sanitized();
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
    if surface.is_empty() {
        return Ok(());
    }

    // Layer 1: background wash, in surface space.
    ctx.set_global_alpha(BACKGROUND_OPACITY);
    ctx.set_fill_style_str(palette.background);
    ctx.fill_rect(0.0, 0.0, surface.width, surface.height);

    let layout = engine.layout();
    let view = layout.view_size();
    if view.is_empty() {
        ctx.set_global_alpha(1.0);
        return Ok(());
    }
    let sx = surface.width / view.width;
    let sy = surface.height / view.height;

    // Layer 2: base grid lines. Drawn in surface space so they stay one pixel
    // wide however the view box is stretched.
    ctx.set_global_alpha(GRID_LINE_OPACITY);
    ctx.set_stroke_style_str(palette.grid_line);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    for col in 0..=layout.cols {
        let x = crisp(grid_offset(col, layout.cell_width) * sx);
        ctx.move_to(x, 0.0);
        ctx.line_to(x, surface.height);
    }
    for row in 0..=layout.rows {
        let y = crisp(grid_offset(row, layout.cell_height) * sy);
        ctx.move_to(0.0, y);
        ctx.line_to(surface.width, y);
    }
    ctx.stroke();

    // Layer 3: trail cells.
    ctx.set_fill_style_str(palette.trail);
    ctx.set_stroke_style_str(palette.trail);
    for cell in render::visible_cells(engine.grid()) {
        draw_cell(ctx, &cell, sx, sy);
    }

    ctx.set_global_alpha(1.0);
    Ok(())
}

fn draw_cell(ctx: &CanvasRenderingContext2d, cell: &RenderCell, sx: f64, sy: f64) {
    let x = cell.rect.x * sx;
    let y = cell.rect.y * sy;
    let w = cell.rect.width * sx;
    let h = cell.rect.height * sy;

    ctx.set_global_alpha(f64::from(cell.style.fill_opacity));
    ctx.fill_rect(x, y, w, h);
    ctx.set_global_alpha(f64::from(cell.style.stroke_opacity));
    ctx.stroke_rect(crisp(x), crisp(y), w, h);
}

#[allow(clippy::cast_precision_loss)]
fn grid_offset(index: usize, cell: f64) -> f64 {
    index as f64 * cell
}

/// Snap to the half-pixel so one-pixel lines stay sharp.
fn crisp(v: f64) -> f64 {
    v.floor() + 0.5
}

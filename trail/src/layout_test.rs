#![allow(clippy::float_cmp)]

use super::*;

const NOMINAL: Size = Size { width: 40.0, height: 40.0 };

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * b.abs().max(1.0)
}

// --- fit ---

#[test]
fn fit_exact_multiple() {
    let layout = GridLayout::fit(Size::new(800.0, 600.0), NOMINAL);
    assert_eq!(layout.cols, 20);
    assert_eq!(layout.rows, 15);
    assert_eq!(layout.cell_width, 40.0);
    assert_eq!(layout.cell_height, 40.0);
    assert_eq!(layout.len(), 300);
}

#[test]
fn fit_rounds_to_nearest_count() {
    // 1013 / 40 = 25.3 -> 25 columns; 590 / 40 = 14.75 -> 15 rows.
    let layout = GridLayout::fit(Size::new(1013.0, 590.0), NOMINAL);
    assert_eq!(layout.cols, 25);
    assert_eq!(layout.rows, 15);
    assert!(approx_eq(layout.cell_width, 1013.0 / 25.0));
    assert!(approx_eq(layout.cell_height, 590.0 / 15.0));
}

#[test]
fn fit_tiles_viewport_without_remainder() {
    for width in [1.0, 39.0, 61.0, 333.3, 799.0, 1280.0, 1920.0, 2561.5] {
        for height in [1.0, 19.0, 480.0, 721.0, 1080.0] {
            let layout = GridLayout::fit(Size::new(width, height), NOMINAL);
            assert!(layout.cols >= 1 && layout.rows >= 1);
            let view = layout.view_size();
            assert!(approx_eq(view.width, width), "{width}x{height}: {view:?}");
            assert!(approx_eq(view.height, height), "{width}x{height}: {view:?}");
        }
    }
}

#[test]
fn fit_zero_viewport_keeps_one_cell() {
    let layout = GridLayout::fit(Size::new(0.0, 0.0), NOMINAL);
    assert_eq!(layout.cols, 1);
    assert_eq!(layout.rows, 1);
    assert_eq!(layout.cell_width, 0.0);
    assert_eq!(layout.cell_height, 0.0);
}

#[test]
fn fit_small_viewport_uses_single_stretched_cell() {
    let layout = GridLayout::fit(Size::new(10.0, 15.0), NOMINAL);
    assert_eq!((layout.cols, layout.rows), (1, 1));
    assert_eq!(layout.cell_width, 10.0);
    assert_eq!(layout.cell_height, 15.0);
}

#[test]
fn fit_treats_garbage_viewport_as_empty() {
    let layout = GridLayout::fit(Size::new(f64::NAN, -300.0), NOMINAL);
    assert_eq!(layout, GridLayout::default());
}

#[test]
fn fit_caps_absurd_counts() {
    let layout = GridLayout::fit(Size::new(1e12, 40.0), NOMINAL);
    assert_eq!(layout.cols, MAX_CELLS_PER_AXIS);
    assert_eq!(layout.rows, 1);
}

// --- fixed ---

#[test]
fn fixed_keeps_requested_counts() {
    let layout = GridLayout::fixed(24, 24, NOMINAL);
    assert_eq!(layout.len(), 576);
    assert_eq!(layout.view_size(), Size::new(960.0, 960.0));
}

#[test]
fn fixed_floors_counts_at_one() {
    let layout = GridLayout::fixed(0, 0, NOMINAL);
    assert_eq!(layout.len(), 1);
}

// --- indexing ---

#[test]
fn index_is_row_major() {
    let layout = GridLayout::fixed(3, 3, NOMINAL);
    assert_eq!(layout.index_of(Cell::new(1, 1)), Some(4));
    assert_eq!(layout.index_of(Cell::new(2, 0)), Some(2));
    assert_eq!(layout.index_of(Cell::new(0, 2)), Some(6));
    assert_eq!(layout.index_of(Cell::new(3, 0)), None);
    assert_eq!(layout.cell_of(7), Cell::new(1, 2));
}

#[test]
fn cell_rect_positions_cells_in_view_box() {
    let layout = GridLayout::fixed(3, 3, NOMINAL);
    assert_eq!(layout.cell_rect(5), Rect::new(80.0, 40.0, 40.0, 40.0));
}

// --- locate ---

#[test]
fn locate_maps_center_of_three_by_three() {
    let layout = GridLayout::fixed(3, 3, NOMINAL);
    let bounds = Rect::new(0.0, 0.0, 120.0, 120.0);
    assert_eq!(layout.locate(Point::new(45.0, 45.0), bounds), Some(Cell::new(1, 1)));
}

#[test]
fn locate_subtracts_bounds_origin() {
    let layout = GridLayout::fixed(3, 3, NOMINAL);
    let bounds = Rect::new(200.0, 100.0, 120.0, 120.0);
    assert_eq!(layout.locate(Point::new(285.0, 105.0), bounds), Some(Cell::new(2, 0)));
}

#[test]
fn locate_scales_stretched_element_into_view_box() {
    // The element is drawn at twice the view box size.
    let layout = GridLayout::fixed(3, 3, NOMINAL);
    let bounds = Rect::new(0.0, 0.0, 240.0, 240.0);
    assert_eq!(layout.locate(Point::new(90.0, 170.0), bounds), Some(Cell::new(1, 2)));
}

#[test]
fn locate_clamps_far_edge_to_last_cell() {
    let layout = GridLayout::fixed(3, 3, NOMINAL);
    let bounds = Rect::new(0.0, 0.0, 120.0, 120.0);
    assert_eq!(layout.locate(Point::new(120.0, 120.0), bounds), Some(Cell::new(2, 2)));
}

#[test]
fn locate_outside_bounds_is_none() {
    let layout = GridLayout::fixed(3, 3, NOMINAL);
    let bounds = Rect::new(10.0, 10.0, 120.0, 120.0);
    assert_eq!(layout.locate(Point::new(5.0, 50.0), bounds), None);
    assert_eq!(layout.locate(Point::new(50.0, 131.0), bounds), None);
}

#[test]
fn locate_degenerate_bounds_is_none() {
    let layout = GridLayout::fixed(3, 3, NOMINAL);
    assert_eq!(layout.locate(Point::new(0.0, 0.0), Rect::new(0.0, 0.0, 0.0, 0.0)), None);
}

#[test]
fn locate_zero_sized_cells_is_none() {
    let layout = GridLayout::fit(Size::new(0.0, 0.0), NOMINAL);
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(layout.locate(Point::new(10.0, 10.0), bounds), None);
}

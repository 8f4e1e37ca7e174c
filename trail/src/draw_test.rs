use super::*;

#[test]
fn crisp_lands_on_half_pixel() {
    assert!((crisp(0.0) - 0.5).abs() < f64::EPSILON);
    assert!((crisp(40.7) - 40.5).abs() < f64::EPSILON);
}

#[test]
fn grid_offset_multiplies_index_by_cell() {
    assert!((grid_offset(3, 40.0) - 120.0).abs() < f64::EPSILON);
    assert!(grid_offset(0, 40.0).abs() < f64::EPSILON);
}

#[test]
fn default_palette_matches_page_theme() {
    let palette = Palette::default();
    assert_eq!(palette.trail, "rgb(0, 0, 0)");
    assert_eq!(palette.grid_line, "rgb(156, 163, 175)");
}

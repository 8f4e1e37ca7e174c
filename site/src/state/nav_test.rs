use super::*;

#[test]
fn default_is_expanded_and_closed() {
    let nav = NavState::default();
    assert!(!nav.scrolled);
    assert!(!nav.menu_open);
    assert_eq!(nav.class(), "navbar");
}

#[test]
fn scrolled_flips_past_threshold() {
    let mut nav = NavState::default();
    assert!(!nav.on_scroll(SCROLLED_THRESHOLD_PX));
    assert!(nav.on_scroll(SCROLLED_THRESHOLD_PX + 1.0));
    assert!(nav.scrolled);
    assert_eq!(nav.class(), "navbar navbar--scrolled");
    assert!(!nav.on_scroll(500.0), "no flip while staying scrolled");
    assert!(nav.on_scroll(0.0));
    assert!(!nav.scrolled);
}

#[test]
fn nan_scroll_counts_as_top() {
    let mut nav = NavState { scrolled: true, menu_open: false };
    assert!(nav.on_scroll(f64::NAN));
    assert!(!nav.scrolled);
}

#[test]
fn menu_toggles_and_closes() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.toggle_menu();
    assert!(!nav.menu_open);
    nav.toggle_menu();
    nav.close_menu();
    assert!(!nav.menu_open);
}

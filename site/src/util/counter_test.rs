use super::*;

#[test]
fn starts_at_zero() {
    let c = Counter::new(50);
    assert_eq!(c.value_at(0.0), 0);
    assert_eq!(c.value_at(-10.0), 0);
    assert_eq!(c.value_at(f64::NAN), 0);
}

#[test]
fn floors_intermediate_values() {
    let c = Counter::new(50);
    assert_eq!(c.value_at(1000.0), 25);
    assert_eq!(c.value_at(1039.0), 25);
    assert_eq!(c.value_at(1050.0), 26);
}

#[test]
fn lands_exactly_on_end() {
    let c = Counter::new(24);
    assert_eq!(c.value_at(2000.0), 24);
    assert_eq!(c.value_at(5000.0), 24);
    assert!(c.is_done(2000.0));
    assert!(!c.is_done(1999.0));
}

#[test]
fn zero_duration_jumps_to_end() {
    let c = Counter { end: 10, duration_ms: 0.0 };
    assert_eq!(c.value_at(1.0), 10);
}

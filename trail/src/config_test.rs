#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    assert_eq!(TrailConfig::default().validate(), Ok(()));
}

#[test]
fn default_uses_forty_pixel_cells() {
    let cfg = TrailConfig::default();
    assert_eq!(cfg.nominal_cell(), Size::new(40.0, 40.0));
    assert_eq!(cfg.stamp_mode, StampMode::Single);
}

#[test]
fn decay_lambda_halves_over_half_life() {
    let cfg = TrailConfig { half_life_secs: 0.5, ..TrailConfig::default() };
    let remaining = (-cfg.decay_lambda() * 0.5).exp();
    assert!((remaining - 0.5).abs() < 1e-12);
}

#[test]
fn rejects_zero_cell_size() {
    let cfg = TrailConfig { cell_width: 0.0, ..TrailConfig::default() };
    assert_eq!(cfg.validate(), Err(TrailError::InvalidCellSize { width: 0.0, height: 40.0 }));
}

#[test]
fn rejects_non_finite_cell_size() {
    assert!(validate_cell_size(Size::new(40.0, f64::INFINITY)).is_err());
    assert!(validate_cell_size(Size::new(-1.0, 40.0)).is_err());
}

#[test]
fn rejects_non_positive_half_life() {
    let cfg = TrailConfig { half_life_secs: 0.0, ..TrailConfig::default() };
    assert_eq!(cfg.validate(), Err(TrailError::InvalidHalfLife(0.0)));
}

#[test]
fn rejects_negative_threshold() {
    let cfg = TrailConfig { epsilon: -0.1, ..TrailConfig::default() };
    assert!(matches!(cfg.validate(), Err(TrailError::InvalidThreshold { name: "epsilon", .. })));

    let cfg = TrailConfig { max_frame_dt_secs: f64::NAN, ..TrailConfig::default() };
    assert!(matches!(cfg.validate(), Err(TrailError::InvalidThreshold { name: "max frame delta", .. })));
}

#[test]
fn rejects_trailing_weight_out_of_range() {
    let cfg = TrailConfig { stamp_mode: StampMode::WithTrailing { weight: 0.0 }, ..TrailConfig::default() };
    assert_eq!(cfg.validate(), Err(TrailError::InvalidTrailingWeight(0.0)));

    let cfg = TrailConfig { stamp_mode: StampMode::WithTrailing { weight: 1.5 }, ..TrailConfig::default() };
    assert!(cfg.validate().is_err());

    let cfg = TrailConfig { stamp_mode: StampMode::WithTrailing { weight: 0.6 }, ..TrailConfig::default() };
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn error_messages_name_the_problem() {
    let err = TrailError::InvalidHalfLife(-2.0);
    assert!(err.to_string().contains("half-life"));
}

#[test]
fn deserializes_partial_json_over_defaults() {
    let cfg: TrailConfig = serde_json::from_str(r#"{ "half_life_secs": 0.7 }"#).unwrap();
    assert_eq!(cfg.half_life_secs, 0.7);
    assert_eq!(cfg.cell_width, 40.0);
    assert_eq!(cfg.stamp_mode, StampMode::Single);
}

#[test]
fn deserializes_trailing_stamp_mode() {
    let cfg: TrailConfig =
        serde_json::from_str(r#"{ "stamp_mode": { "mode": "with_trailing", "weight": 0.5 } }"#).unwrap();
    assert_eq!(cfg.stamp_mode, StampMode::WithTrailing { weight: 0.5 });
}

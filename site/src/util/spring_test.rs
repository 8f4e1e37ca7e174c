#![allow(clippy::float_cmp)]

use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn settle(motion: &mut CursorMotion) -> usize {
    let mut frames = 0;
    while !motion.is_at_rest() {
        motion.step(1.0 / 60.0);
        frames += 1;
        assert!(frames < 10_000, "spring never settled");
    }
    frames
}

// =============================================================
// Spring
// =============================================================

#[test]
fn default_config_values() {
    let c = SpringConfig::default();
    assert_eq!(c.stiffness, 400.0);
    assert_eq!(c.damping, 25.0);
    assert_eq!(c.mass, 0.5);
    assert_eq!(c.rest_delta, 0.01);
}

#[test]
fn bad_dt_is_ignored() {
    let mut s = Spring::at(0.0);
    s.target = 10.0;
    s.step(f64::NAN, &SpringConfig::default());
    s.step(-1.0, &SpringConfig::default());
    assert_eq!(s.position, 0.0);
    assert_eq!(s.velocity, 0.0);
}

#[test]
fn long_stall_is_clamped_and_stable() {
    let mut s = Spring::at(0.0);
    s.target = 10.0;
    s.step(5.0, &SpringConfig::default());
    assert!(s.position.is_finite());
    assert!(s.position.abs() < 20.0);
}

#[test]
fn spring_snaps_to_target_at_rest() {
    let mut s = Spring::at(0.0);
    s.target = 1.0;
    for _ in 0..120 {
        s.step(1.0 / 60.0, &SpringConfig::default());
    }
    assert_eq!(s.position, 1.0);
    assert_eq!(s.velocity, 0.0);
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_converges_to_pointer() {
    let mut motion = CursorMotion::default();
    motion.pointer_moved(30.0, -12.0);
    motion.pointer_moved(30.0, -12.0);
    let frames = settle(&mut motion);
    assert!(frames < 120, "took {frames} frames");
    let pose = motion.pose();
    assert_eq!(pose.x, 30.0);
    assert_eq!(pose.y, -12.0);
    assert_eq!(pose.rotation_deg, 0.0);
    assert_eq!(pose.scale, 1.0);
}

#[test]
fn moving_right_tilts_clockwise() {
    let mut motion = CursorMotion::default();
    motion.pointer_moved(40.0, 0.0);
    motion.step(1.0 / 60.0);
    assert!(motion.pose().rotation_deg > 0.0);
}

#[test]
fn tilt_and_scale_targets_follow_step() {
    let mut motion = CursorMotion::default();
    motion.snap_to(100.0, 100.0);
    motion.pointer_moved(130.0, 140.0);
    // Hold the pointer target by settling without further moves: tilt and
    // scale converge on the targets set by the 30x40 step.
    settle(&mut motion);
    let pose = motion.pose();
    assert!(approx_eq(pose.rotation_deg, 3.0));
    assert!(approx_eq(pose.scale, 1.2));
}

#[test]
fn scale_target_is_capped() {
    let mut motion = CursorMotion::default();
    motion.pointer_moved(5000.0, 5000.0);
    settle(&mut motion);
    assert!(approx_eq(motion.pose().scale, MAX_SCALE));
}

#[test]
fn snap_to_has_no_motion() {
    let mut motion = CursorMotion::default();
    motion.snap_to(50.0, 60.0);
    assert!(motion.is_at_rest());
    let pose = motion.pose();
    assert_eq!((pose.x, pose.y), (50.0, 60.0));
    assert_eq!(pose.scale, 1.0);
}

//! Vector illustration of a flanged cylindrical part.
//!
//! The part is modelled in the same units as a 3D scene (a body of radius
//! 1.2 between two flanges of radius 1.8, four mounting holes per flange)
//! and drawn with a fixed oblique projection, so every shape is an ellipse
//! or a quad in SVG.

#[cfg(test)]
#[path = "part_viewer_test.rs"]
mod part_viewer_test;

use leptos::prelude::*;

const VIEW_SIZE: f64 = 320.0;
const SCALE: f64 = 70.0;
/// Vertical squash of horizontal circles.
const TILT: f64 = 0.35;
const HOLE_RING_RADIUS: f64 = 1.4;
const HOLE_RADIUS: f64 = 0.15;
const HOLES_PER_FLANGE: usize = 4;

/// A cylinder section: radius, vertical centre and height, in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drum {
    radius: f64,
    center_y: f64,
    height: f64,
}

const BOTTOM_FLANGE: Drum = Drum { radius: 1.8, center_y: -0.6, height: 0.2 };
const BODY: Drum = Drum { radius: 1.2, center_y: 0.0, height: 0.8 };
const TOP_FLANGE: Drum = Drum { radius: 1.8, center_y: 0.6, height: 0.2 };

/// Model `(x, y, z)` to SVG coordinates; `y` is up, `z` toward the viewer.
fn project(x: f64, y: f64, z: f64) -> (f64, f64) {
    let c = VIEW_SIZE / 2.0;
    (c + x * SCALE, c - y * SCALE + z * SCALE * TILT)
}

/// Centres of the mounting holes on a flange's top face.
#[allow(clippy::cast_precision_loss)]
fn hole_centres(face_y: f64) -> Vec<(f64, f64)> {
    (0..HOLES_PER_FLANGE)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / HOLES_PER_FLANGE as f64;
            project(angle.cos() * HOLE_RING_RADIUS, face_y, angle.sin() * HOLE_RING_RADIUS)
        })
        .collect()
}

fn px(v: f64) -> String {
    format!("{v:.2}")
}

fn drum_view(drum: Drum) -> impl IntoView {
    let top = drum.center_y + drum.height / 2.0;
    let bottom = drum.center_y - drum.height / 2.0;
    let (cx, top_y) = project(0.0, top, 0.0);
    let (_, bottom_y) = project(0.0, bottom, 0.0);
    let rx = drum.radius * SCALE;
    let ry = rx * TILT;
    let side = format!(
        "M{:.2},{:.2} L{:.2},{:.2} A{rx:.2},{ry:.2} 0 0 0 {:.2},{:.2} L{:.2},{:.2} Z",
        cx - rx,
        top_y,
        cx - rx,
        bottom_y,
        cx + rx,
        bottom_y,
        cx + rx,
        top_y
    );
    view! {
        <g class="part-drum">
            <path class="part-side" d=side></path>
            <ellipse class="part-face" cx=px(cx) cy=px(top_y) rx=px(rx) ry=px(ry)></ellipse>
        </g>
    }
}

fn holes_view(drum: Drum) -> impl IntoView {
    let face = drum.center_y + drum.height / 2.0;
    let rx = HOLE_RADIUS * SCALE;
    let ry = rx * TILT;
    hole_centres(face)
        .into_iter()
        .map(|(cx, cy)| view! { <ellipse class="part-hole" cx=px(cx) cy=px(cy) rx=px(rx) ry=px(ry)></ellipse> })
        .collect_view()
}

#[component]
pub fn PartViewer() -> impl IntoView {
    let view_box = format!("0 0 {VIEW_SIZE} {VIEW_SIZE}");
    view! {
        <figure class="part-viewer">
            <svg viewBox=view_box role="img" aria-label="Machined flanged cylinder">
                {drum_view(BOTTOM_FLANGE)}
                {holes_view(BOTTOM_FLANGE)}
                {drum_view(BODY)}
                {drum_view(TOP_FLANGE)}
                {holes_view(TOP_FLANGE)}
            </svg>
            <figcaption>"6061-T6 ALUMINUM · ±0.001\""</figcaption>
        </figure>
    }
}

//! Crosshair cursor that trails the pointer on springs.

use leptos::prelude::*;

use crate::util::spring::{CursorMotion, CursorPose};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use trail::frame_loop::FrameLoop;

#[cfg(feature = "hydrate")]
fn set_body_cursor(value: &str) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(err) = body.style().set_property("cursor", value) {
        log::debug!("smooth cursor: cannot set body cursor: {err:?}");
    }
}

fn pose_style(pose: CursorPose) -> String {
    format!(
        "left:{:.2}px;top:{:.2}px;transform:translate(-50%, -50%) rotate({:.3}deg) scale({:.3});",
        pose.x, pose.y, pose.rotation_deg, pose.scale
    )
}

/// Hides the system cursor and draws a spring-smoothed crosshair instead.
#[component]
pub fn SmoothCursor() -> impl IntoView {
    let pose = RwSignal::new(CursorMotion::default().pose());

    #[cfg(feature = "hydrate")]
    {
        let motion = Rc::new(RefCell::new(CursorMotion::default()));
        let frames = StoredValue::new_local(None::<FrameLoop>);

        let motion_for_frame = Rc::clone(&motion);
        let mut last_ms = None::<f64>;
        match FrameLoop::start(move |now_ms| {
            let dt = last_ms.map_or(0.0, |prev| (now_ms - prev) / 1000.0);
            let (next, at_rest) = {
                let mut motion = motion_for_frame.borrow_mut();
                motion.step(dt);
                (motion.pose(), motion.is_at_rest())
            };
            pose.set(next);
            if at_rest {
                last_ms = None;
                return false;
            }
            last_ms = Some(now_ms);
            true
        }) {
            Ok(frame_loop) => frames.set_value(Some(frame_loop)),
            Err(err) => log::warn!("smooth cursor: frame loop unavailable: {err:?}"),
        }

        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            motion.borrow_mut().pointer_moved(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let resumed = frames.try_with_value(|slot| slot.as_ref().map(FrameLoop::resume));
            if let Some(Some(Err(err))) = resumed {
                log::warn!("smooth cursor: frame loop resume failed: {err:?}");
            }
        });

        set_body_cursor("none");
        on_cleanup(move || {
            on_move.remove();
            frames.try_set_value(None);
            set_body_cursor("");
        });
    }

    view! {
        <div class="smooth-cursor" style=move || pose_style(pose.get()) aria-hidden="true">
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <line x1="2" y1="12" x2="22" y2="12" stroke="white" stroke-width="2"></line>
                <line x1="12" y1="2" x2="12" y2="22" stroke="white" stroke-width="2"></line>
                <circle cx="12" cy="12" r="2" fill="white"></circle>
            </svg>
        </div>
    }
}

//! Bridge component between Leptos and the imperative `trail` engine.
//!
//! ARCHITECTURE
//! ============
//! The `trail` crate owns the grid state, decay and painting. This host owns
//! the browser wiring: it sizes the canvas, forwards window pointer moves,
//! and runs one animation-frame loop per mounted instance. The loop parks
//! itself once every cell has faded and is resumed by the next stamp.

use leptos::prelude::*;

use trail::consts::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use trail::draw::{self, Palette};
#[cfg(feature = "hydrate")]
use trail::engine::PointerOutcome;
#[cfg(feature = "hydrate")]
use trail::frame_loop::FrameLoop;
#[cfg(feature = "hydrate")]
use trail::{Point, Rect, Size, TrailConfig, TrailEngine};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "hydrate")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(feature = "hydrate")]
use crate::util::browser;

/// Everything the frame callback and listeners need, behind one `RefCell`.
#[cfg(feature = "hydrate")]
struct GridHost {
    engine: TrailEngine,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    palette: Palette,
    squares: Option<(usize, usize)>,
    surface: Size,
    dpr: f64,
}

#[cfg(feature = "hydrate")]
impl GridHost {
    fn mount(canvas: HtmlCanvasElement, config: TrailConfig, squares: Option<(usize, usize)>) -> Result<Self, JsValue> {
        let engine = TrailEngine::new(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut host = Self {
            engine,
            canvas,
            ctx,
            palette: Palette::default(),
            squares,
            surface: Size::default(),
            dpr: 1.0,
        };
        host.sync_size();
        Ok(host)
    }

    fn bounds(&self) -> Rect {
        let rect = self.canvas.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    /// Match the backing store to the element's CSS size and rebuild the grid.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn sync_size(&mut self) {
        let surface = self.bounds().size().sanitized();
        let dpr = browser::device_pixel_ratio();
        self.canvas.set_width((surface.width * dpr).round() as u32);
        self.canvas.set_height((surface.height * dpr).round() as u32);
        self.surface = surface;
        self.dpr = dpr;

        let layout = match self.squares {
            Some((cols, rows)) => self.engine.set_fixed(cols, rows),
            None => self.engine.fit_viewport(surface),
        };
        log::debug!("interactive grid: {}x{} cells over {}x{}", layout.cols, layout.rows, surface.width, surface.height);
    }

    fn paint(&self) {
        if let Err(err) = draw::draw(&self.ctx, &self.engine, self.surface, self.dpr, &self.palette) {
            log::warn!("interactive grid: draw failed: {err:?}");
        }
    }

    /// One animation frame. Returns whether the loop should keep running.
    fn frame(&mut self, timestamp_ms: f64) -> bool {
        if self.engine.tick(timestamp_ms) {
            self.paint();
        }
        if self.engine.is_animating() {
            return true;
        }
        self.engine.pause();
        false
    }
}

#[cfg(feature = "hydrate")]
fn resume(frames: StoredValue<Option<FrameLoop>, LocalStorage>) {
    let result = frames.try_with_value(|slot| slot.as_ref().map(FrameLoop::resume));
    if let Some(Some(Err(err))) = result {
        log::warn!("interactive grid: frame loop resume failed: {err:?}");
    }
}

/// Full-bleed canvas grid whose cells light up under the pointer and fade.
///
/// With `squares` set, the grid has a fixed `cols x rows` shape stretched
/// over the element; otherwise it tiles the element with cells close to
/// `cell_width x cell_height`.
#[component]
pub fn InteractiveGrid(
    #[prop(default = DEFAULT_CELL_WIDTH)] cell_width: f64,
    #[prop(default = DEFAULT_CELL_HEIGHT)] cell_height: f64,
    #[prop(optional)] squares: Option<(usize, usize)>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let config = TrailConfig { cell_width, cell_height, ..TrailConfig::default() };
        let host = Rc::new(RefCell::new(None::<GridHost>));
        let frames = StoredValue::new_local(None::<FrameLoop>);

        {
            let host = Rc::clone(&host);
            Effect::new(move || {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if host.borrow().is_some() {
                    return;
                }
                let mounted = match GridHost::mount(canvas, config, squares) {
                    Ok(mounted) => mounted,
                    Err(err) => {
                        log::warn!("interactive grid: mount failed: {err:?}");
                        return;
                    }
                };
                mounted.paint();
                *host.borrow_mut() = Some(mounted);

                let host_for_frame = Rc::clone(&host);
                let started = FrameLoop::start(move |timestamp_ms| {
                    host_for_frame.borrow_mut().as_mut().is_some_and(|h| h.frame(timestamp_ms))
                });
                match started {
                    Ok(frame_loop) => frames.set_value(Some(frame_loop)),
                    Err(err) => log::warn!("interactive grid: frame loop unavailable: {err:?}"),
                }
            });
        }

        let host_for_move = Rc::clone(&host);
        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            let raised = host_for_move.borrow_mut().as_mut().is_some_and(|h| {
                let bounds = h.bounds();
                let client = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
                matches!(h.engine.on_pointer_move(client, bounds), PointerOutcome::Hover { raised: true, .. })
            });
            if raised {
                resume(frames);
            }
        });

        let host_for_leave = Rc::clone(&host);
        let on_leave = window_event_listener(leptos::ev::blur, move |_| {
            if let Some(h) = host_for_leave.borrow_mut().as_mut() {
                h.engine.on_pointer_leave();
            }
        });

        let host_for_resize = Rc::clone(&host);
        let on_resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(h) = host_for_resize.borrow_mut().as_mut() {
                h.sync_size();
                h.paint();
            }
        });

        on_cleanup(move || {
            on_move.remove();
            on_leave.remove();
            on_resize.remove();
            frames.try_update_value(|slot| *slot = None);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (cell_width, cell_height, squares);

    view! {
        <canvas node_ref=canvas_ref class=format!("interactive-grid {class}") aria-hidden="true"></canvas>
    }
}

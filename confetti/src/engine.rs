//! Browser entry point: binds a [`Celebration`] to a canvas element and drives
//! it from `requestAnimationFrame`.
//!
//! LIFECYCLE
//! =========
//! At most one celebration runs at a time. [`launch`] replaces any active run,
//! so a second win never stacks a second batch on the first. Each run holds:
//!
//! - the frame closure, kept alive in a shared holder and re-armed each frame;
//! - a `gloo_timers` hard-stop timer that cancels the pending frame and clears
//!   the canvas at the duration ceiling, covering tabs where animation frames
//!   are throttled or never fire.
//!
//! Dropping the run (relaunch or [`stop`]) cancels the pending frame, drops the
//! closure and drops the timer.
//!
//! ERROR HANDLING
//! ==============
//! A missing element, a non-canvas element or an unavailable 2D context makes
//! [`launch`] a logged no-op. Drawing failures stop the run.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::burst::Burst;
use crate::celebration::{Celebration, Step};
use crate::consts::DEADLINE_TIMER_MS;
use crate::render::CanvasSurface;

type FrameCallback = Closure<dyn FnMut(f64)>;
type FrameHolder = Rc<RefCell<Option<FrameCallback>>>;

struct Run {
    celebration: Celebration,
    surface: CanvasSurface,
    raf_id: Option<i32>,
}

struct ActiveRun {
    run: Rc<RefCell<Run>>,
    frame: FrameHolder,
    _deadline: Timeout,
}

impl Drop for ActiveRun {
    fn drop(&mut self) {
        halt(&self.run, &self.frame);
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<ActiveRun>> = const { RefCell::new(None) };
}

/// Start a confetti celebration on the canvas with id `canvas_id`, replacing
/// any celebration already running.
pub fn launch(canvas_id: &str) {
    stop();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(run) = prepare(&window, canvas_id) else {
        return;
    };

    let run = Rc::new(RefCell::new(run));
    let frame: FrameHolder = Rc::new(RefCell::new(None));

    let run_for_cb = Rc::clone(&run);
    let frame_for_cb = Rc::clone(&frame);
    let cb = Closure::wrap(Box::new(move |now_ms: f64| {
        on_frame(&run_for_cb, &frame_for_cb, now_ms);
    }) as Box<dyn FnMut(f64)>);
    *frame.borrow_mut() = Some(cb);

    let run_for_deadline = Rc::clone(&run);
    let frame_for_deadline = Rc::clone(&frame);
    let deadline = Timeout::new(DEADLINE_TIMER_MS, move || {
        log::debug!("confetti: duration ceiling reached");
        halt(&run_for_deadline, &frame_for_deadline);
    });

    run.borrow_mut().raf_id = request_frame(&window, &frame);
    log::debug!("confetti: launched {} particles", run.borrow().celebration.burst().len());

    ACTIVE.with(|active| {
        *active.borrow_mut() = Some(ActiveRun { run, frame, _deadline: deadline });
    });
}

/// Tear down the active celebration, if any, leaving its canvas cleared.
pub fn stop() {
    let previous = ACTIVE.with(|active| active.borrow_mut().take());
    if previous.is_some() {
        log::debug!("confetti: stopping active run");
    }
    drop(previous);
}

fn prepare(window: &Window, canvas_id: &str) -> Option<Run> {
    let document = window.document()?;
    let Some(element) = document.get_element_by_id(canvas_id) else {
        log::warn!("confetti: no element #{canvas_id}");
        return None;
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        log::warn!("confetti: #{canvas_id} is not a canvas");
        return None;
    };

    let (width, height) = viewport(window);
    size_canvas(&canvas, width, height);

    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => {
                log::warn!("confetti: 2d context has unexpected type");
                return None;
            }
        },
        Ok(None) => {
            log::warn!("confetti: 2d context unavailable");
            return None;
        }
        Err(e) => {
            log::warn!("confetti: get_context failed: {e:?}");
            return None;
        }
    };

    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
    let burst = Burst::launch(&mut rng, width, height);
    Some(Run { celebration: Celebration::new(burst), surface: CanvasSurface::new(ctx), raf_id: None })
}

fn viewport(window: &Window) -> (f64, f64) {
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn on_frame(run: &Rc<RefCell<Run>>, frame: &FrameHolder, now_ms: f64) {
    let mut guard = run.borrow_mut();
    let state = &mut *guard;
    state.raf_id = None;

    match state.celebration.frame(now_ms, &mut state.surface) {
        Ok(Step::Continue) => {
            if let Some(window) = web_sys::window() {
                state.raf_id = request_frame(&window, frame);
            }
        }
        Ok(Step::Done) => log::debug!("confetti: finished"),
        Err(e) => {
            log::warn!("confetti: frame failed: {e:?}");
            if let Err(e) = state.celebration.stop(&mut state.surface) {
                log::warn!("confetti: clear failed: {e:?}");
            }
        }
    }
}

fn request_frame(window: &Window, frame: &FrameHolder) -> Option<i32> {
    let holder = frame.borrow();
    let cb = holder.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("confetti: request_animation_frame failed: {e:?}");
            None
        }
    }
}

/// Cancel any pending frame, clear the canvas and release the frame closure.
fn halt(run: &Rc<RefCell<Run>>, frame: &FrameHolder) {
    let Ok(mut guard) = run.try_borrow_mut() else {
        return;
    };
    let state = &mut *guard;
    if let Some(id) = state.raf_id.take() {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::warn!("confetti: cancel_animation_frame failed: {e:?}");
            }
        }
    }
    if !state.celebration.is_finished() {
        if let Err(e) = state.celebration.stop(&mut state.surface) {
            log::warn!("confetti: clear failed: {e:?}");
        }
    }
    drop(guard);
    if let Ok(mut holder) = frame.try_borrow_mut() {
        holder.take();
    }
}

use crate::canvas::Canvas2d;
use crate::core::Globe;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame work for one mounted globe.
pub struct FrameContext {
    pub globe: Rc<RefCell<Globe>>,
    pub surface: Canvas2d,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut globe = self.globe.borrow_mut();
        let stats = globe.advance();
        globe.paint(&mut self.surface);
        self.frames += 1;
        if stats.arrived > 0 {
            log::trace!(
                "[frame {}] {} arrivals, {} signals in flight",
                self.frames,
                stats.arrived,
                globe.signals().len()
            );
        }
    }
}

struct LoopState {
    running: Cell<bool>,
    frame_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self) {
        let Some(window) = web::window() else {
            self.running.set(false);
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.frame_id.set(Some(id)),
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    self.running.set(false);
                }
            }
        }
    }
}

/// A `requestAnimationFrame` loop with an explicit stop.
///
/// After [`AnimationLoop::stop`] (or drop) the pending frame is cancelled and
/// the callback released, so the body never runs again.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(mut body: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            frame_id: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.frame_id.set(None);
            if !state.running.get() {
                return;
            }
            body();
            if state.running.get() {
                state.schedule();
            }
        }) as Box<dyn FnMut()>));
        state.schedule();
        Self { state }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.frame_id.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        self.state.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

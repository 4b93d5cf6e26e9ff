//! Landing page front-end for Trigslink: the rotating "cyber globe" canvas,
//! the disclaimer modal and the operator card glitch effects.
//!
//! The model lives in [`core`] and is platform-free; everything touching the
//! DOM is compiled for `wasm32` only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod cards;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;

#[cfg(target_arch = "wasm32")]
pub use app::*;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::constants::GLOBE_CANVAS_ID;
    use crate::core::{Globe, GlobeConfig, GlobeError, OVERRIDE_KEYS};
    use crate::{canvas, cards, dom, frame, overlay};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    thread_local! {
        static PAGE_GLOBE: RefCell<Option<GlobeMount>> = const { RefCell::new(None) };
    }

    fn to_js_error(e: GlobeError) -> JsValue {
        js_sys::Error::new(&e.to_string()).into()
    }

    /// Responsive defaults for the container width, then any `data-*`
    /// overrides on the canvas (e.g. `data-dot-count="300"`).
    fn config_from_canvas(canvas: &web::HtmlCanvasElement, width: f32) -> GlobeConfig {
        let mut config = GlobeConfig::for_viewport(width);
        for key in OVERRIDE_KEYS {
            if let Some(value) = canvas.get_attribute(&format!("data-{key}")) {
                if let Err(e) = config.apply_override(key, &value) {
                    log::warn!("[globe] ignoring data-{}: {}", key, e);
                }
            }
        }
        config
    }

    /// A globe attached to a canvas. Dropping it (or `free()` from JS)
    /// tears it down like [`GlobeMount::unmount`].
    #[wasm_bindgen]
    pub struct GlobeMount {
        globe: Rc<RefCell<Globe>>,
        animation: Option<frame::AnimationLoop>,
        resize: Option<dom::WindowListener>,
    }

    #[wasm_bindgen]
    impl GlobeMount {
        /// Stop the frame loop, drop in-flight signals and detach the resize
        /// listener. Safe to call more than once.
        pub fn unmount(&mut self) {
            let was_running = self.is_running();
            if let Some(animation) = self.animation.take() {
                animation.stop();
            }
            self.resize = None;
            if let Ok(mut globe) = self.globe.try_borrow_mut() {
                globe.clear_signals();
            }
            if was_running {
                log::info!("[globe] unmounted");
            }
        }

        #[wasm_bindgen(js_name = isRunning)]
        pub fn is_running(&self) -> bool {
            self.animation.as_ref().is_some_and(|a| a.is_running())
        }
    }

    impl Drop for GlobeMount {
        fn drop(&mut self) {
            self.unmount();
        }
    }

    /// Mount a globe on the canvas with id `canvas_id`.
    ///
    /// Returns `undefined` without scheduling anything when the canvas or its
    /// 2D context is missing; throws only on invalid configuration.
    #[wasm_bindgen(js_name = mountGlobe)]
    pub fn mount_globe(canvas_id: &str) -> Result<Option<GlobeMount>, JsValue> {
        let Some(document) = dom::window_document() else {
            log::warn!("[globe] no document; not mounting");
            return Ok(None);
        };
        let Some(canvas) = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            log::warn!("[globe] canvas #{} not found; not mounting", canvas_id);
            return Ok(None);
        };
        let surface = match canvas::Canvas2d::from_canvas(&canvas) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[globe] {:?}; not mounting", e);
                return Ok(None);
            }
        };

        let viewport = dom::sync_canvas_to_parent(&canvas);
        let config = config_from_canvas(&canvas, viewport.width);
        let globe = Globe::new(config, viewport).map_err(to_js_error)?;
        log::info!(
            "[globe] mounted on #{}: {}x{}, {} points, {} edges",
            canvas_id,
            viewport.width,
            viewport.height,
            globe.cloud().len(),
            globe.cloud().graph().edge_count()
        );
        let globe = Rc::new(RefCell::new(globe));

        let globe_for_resize = globe.clone();
        let canvas_for_resize = canvas.clone();
        let resize = dom::WindowListener::add("resize", move || {
            let viewport = dom::sync_canvas_to_parent(&canvas_for_resize);
            if let Err(e) = globe_for_resize.borrow_mut().resize(viewport) {
                log::warn!("[globe] resize rejected: {}", e);
            }
        });
        if resize.is_none() {
            log::warn!("[globe] resize listener not attached");
        }

        let mut ctx = frame::FrameContext {
            globe: globe.clone(),
            surface,
            frames: 0,
        };
        let animation = frame::AnimationLoop::start(move || ctx.frame());

        Ok(Some(GlobeMount {
            globe,
            animation: Some(animation),
            resize,
        }))
    }

    /// Tear down the globe mounted at startup, if any.
    #[wasm_bindgen(js_name = unmountGlobe)]
    pub fn unmount_globe() {
        if let Some(mut mount) = PAGE_GLOBE.with(|g| g.borrow_mut().take()) {
            mount.unmount();
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("trigslink-globe starting");

        let Some(document) = dom::window_document() else {
            log::error!("no document");
            return Ok(());
        };
        overlay::wire_disclaimer(&document);
        match cards::wire_operator_cards(&document) {
            Ok(0) => {}
            Ok(n) => log::info!("[cards] {} operator cards", n),
            Err(e) => log::warn!("[cards] glitch effects disabled: {}", e),
        }

        if let Some(mount) = mount_globe(GLOBE_CANVAS_ID)? {
            PAGE_GLOBE.with(|g| *g.borrow_mut() = Some(mount));
        }
        Ok(())
    }
}

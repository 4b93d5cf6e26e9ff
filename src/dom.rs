use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
            true
        }
        None => false,
    }
}

/// Size the canvas backing store to its parent's layout box and return the
/// resulting viewport. A detached canvas reports a zero viewport.
pub fn sync_canvas_to_parent(canvas: &web::HtmlCanvasElement) -> Viewport {
    let parent = canvas
        .parent_element()
        .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    let (w, h) = match parent {
        Some(p) => (p.offset_width().max(0) as u32, p.offset_height().max(0) as u32),
        None => (0, 0),
    };
    canvas.set_width(w);
    canvas.set_height(h);
    Viewport::new(w as f32, h as f32)
}

/// Show or hide an element by id via the `hidden` class, with an inline
/// style fallback for pages without the class.
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
            _ = el.remove_attribute("style");
        } else {
            _ = cl.add_1("hidden");
            _ = el.set_attribute("style", "display:none");
        }
    }
}

/// A window listener that unregisters itself when dropped.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn add(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

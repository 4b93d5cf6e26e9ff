use crate::constants::*;
use crate::core::{GlitchTimer, GlobeError};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CardGlitch {
    element: web::Element,
    timer: GlitchTimer,
    shown: u8,
}

/// Drive the glitch variants of every operator card. Cards only glitch while
/// intersecting the viewport; the current kind is exposed as `data-glitch`
/// for the stylesheet. Returns the number of cards wired.
pub fn wire_operator_cards(document: &web::Document) -> Result<usize, GlobeError> {
    let nodes = document
        .query_selector_all(OPERATOR_CARD_SELECTOR)
        .map_err(|e| dom_error("selector failed", e))?;
    let mut cards = Vec::new();
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        _ = element.set_attribute(CARD_INDEX_ATTR, &cards.len().to_string());
        _ = element.set_attribute(CARD_GLITCH_ATTR, "0");
        cards.push(CardGlitch {
            element,
            timer: GlitchTimer::from_entropy(),
            shown: 0,
        });
    }
    if cards.is_empty() {
        return Ok(0);
    }
    let window = web::window().ok_or_else(|| GlobeError::Dom("no window".to_string()))?;
    let count = cards.len();

    let epoch = Instant::now();
    let cards = Rc::new(RefCell::new(cards));

    let cards_seen = cards.clone();
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let now = epoch.elapsed();
            let mut cards = cards_seen.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let index = entry
                    .target()
                    .get_attribute(CARD_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok());
                if let Some(card) = index.and_then(|i| cards.get_mut(i)) {
                    card.timer.set_visible(entry.is_intersecting(), now);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(CARD_OBSERVER_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .map_err(|e| dom_error("IntersectionObserver unavailable", e))?;
    for card in cards.borrow().iter() {
        observer.observe(&card.element);
    }
    on_intersect.forget();

    let ticker = Closure::wrap(Box::new(move || {
        // Holds the observer for as long as the ticker lives.
        let _observer = &observer;
        let now = epoch.elapsed();
        for card in cards.borrow_mut().iter_mut() {
            let kind = card.timer.tick(now);
            if kind != card.shown {
                card.shown = kind;
                _ = card.element.set_attribute(CARD_GLITCH_ATTR, &kind.to_string());
            }
        }
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            ticker.as_ref().unchecked_ref(),
            CARD_TICK_INTERVAL_MS,
        )
        .map_err(|e| dom_error("setInterval failed", e))?;
    ticker.forget();
    Ok(count)
}

fn dom_error(context: &str, e: wasm_bindgen::JsValue) -> GlobeError {
    GlobeError::Dom(format!("{context}: {e:?}"))
}

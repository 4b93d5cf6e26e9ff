use crate::constants::{DISCLAIMER_ACCEPT_ID, DISCLAIMER_MODAL_ID};
use crate::core::{Consent, ConsentStore, GlobeError};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// [`ConsentStore`] over `window.localStorage`. Storage may be missing or
/// throw (privacy modes); both surface as `GlobeError::Storage`.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = match web::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(e)) => {
                log::warn!("[consent] localStorage threw: {:?}", e);
                None
            }
            None => None,
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&web::Storage, GlobeError> {
        self.storage
            .as_ref()
            .ok_or_else(|| GlobeError::Storage("localStorage unavailable".to_string()))
    }
}

impl ConsentStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, GlobeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| GlobeError::Storage(format!("{:?}", e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), GlobeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| GlobeError::Storage(format!("{:?}", e)))
    }
}

/// Show the disclaimer unless it was accepted before, and persist acceptance
/// from the accept button.
pub fn wire_disclaimer(document: &web::Document) {
    let consent = Consent::load(LocalStore::open());
    let visible = consent.is_modal_visible();
    dom::set_visible(document, DISCLAIMER_MODAL_ID, visible);
    if !visible {
        log::info!("[consent] terms already accepted");
        return;
    }

    let consent = Rc::new(RefCell::new(consent));
    let document_for_click = document.clone();
    let wired = dom::add_click_listener(document, DISCLAIMER_ACCEPT_ID, move || {
        if let Err(e) = consent.borrow_mut().accept() {
            log::warn!("[consent] acceptance not persisted: {}", e);
        }
        dom::set_visible(&document_for_click, DISCLAIMER_MODAL_ID, false);
        log::info!("[consent] terms accepted");
    });
    if !wired {
        log::warn!(
            "[consent] #{} missing; disclaimer cannot be dismissed",
            DISCLAIMER_ACCEPT_ID
        );
    }
}

//! Disclaimer acknowledgement: a two-state machine backed by one stored flag.

use super::error::Result;
use fnv::FnvHashMap;

pub const CONSENT_STORAGE_KEY: &str = "trigslink_terms_accepted";
pub const CONSENT_STORAGE_VALUE: &str = "true";

/// Durable key-value storage for the consent flag.
pub trait ConsentStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentState {
    Unacknowledged,
    Acknowledged,
}

pub struct Consent<S: ConsentStore> {
    store: S,
    state: ConsentState,
}

impl<S: ConsentStore> Consent<S> {
    /// Read the flag once. Any non-empty value counts as accepted; a failing
    /// store reads as not accepted so the modal still shows.
    pub fn load(store: S) -> Self {
        let state = match store.read(CONSENT_STORAGE_KEY) {
            Ok(Some(value)) if !value.is_empty() => ConsentState::Acknowledged,
            Ok(_) => ConsentState::Unacknowledged,
            Err(e) => {
                log::warn!("[consent] cannot read flag, showing disclaimer: {}", e);
                ConsentState::Unacknowledged
            }
        };
        Self { store, state }
    }

    #[inline]
    pub fn state(&self) -> ConsentState {
        self.state
    }

    #[inline]
    pub fn is_modal_visible(&self) -> bool {
        self.state == ConsentState::Unacknowledged
    }

    /// Acknowledge for this session and persist the flag. The state moves to
    /// `Acknowledged` even when the write fails; the error is handed back.
    pub fn accept(&mut self) -> Result<()> {
        self.state = ConsentState::Acknowledged;
        self.store.write(CONSENT_STORAGE_KEY, CONSENT_STORAGE_VALUE)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// In-memory store for hosts without `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsentStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

use thiserror::Error;

/// Failures surfaced by the globe model and its persistence seam.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlobeError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, GlobeError>;

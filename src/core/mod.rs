pub mod config;
pub mod consent;
pub mod constants;
pub mod error;
pub mod glitch;
pub mod globe;
pub mod graph;
pub mod paint;
pub mod projection;
pub mod signals;
pub mod sphere;

pub use config::*;
pub use consent::*;
pub use error::GlobeError;
pub use glitch::*;
pub use globe::*;
pub use graph::*;
pub use paint::*;
pub use projection::*;
pub use signals::*;

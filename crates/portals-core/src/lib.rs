pub mod build;
pub mod config;
pub mod deploy;
pub mod detect;
pub mod error;
pub mod paths;
pub mod runner;
pub mod variant;

pub use error::{PortalError, Result};
pub use variant::Variant;

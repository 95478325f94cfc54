//! Filesystem-backed loaders for generator configuration and input documents.
//!
//! Pure parsing lives in `domain::config`.

mod load_config;
mod load_input;

pub use load_config::load_config;
pub use load_input::load_operating_system_config;

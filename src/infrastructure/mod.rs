//! Infrastructure layer - Input and configuration

pub mod config;
pub mod input;

pub use config::{Config, Overrides, Settings};
pub use input::InputSource;

//! VecForge Settings Crate
//!
//! Handles kernel configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{default_config_path, KernelSettings, SettingsFormat};
pub use error::{SettingsError, SettingsResult};

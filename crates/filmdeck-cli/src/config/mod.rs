//! Application configuration module.
//!
//! Reads the optional TOML config file holding API endpoint, language and
//! image settings, and locates the browser log file. The API key is never
//! stored here.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;
pub use paths::{resolve_config_path, resolve_log_path};

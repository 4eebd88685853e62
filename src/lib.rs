//! Environment-driven settings assembly for a commerce storefront backend.
//!
//! The host framework is handed a single settings record at bootstrap:
//! project-level configuration (secrets, CORS allow-lists, connection
//! strings) plus an ordered list of plugin descriptors for payments,
//! search indexing, transactional email, file storage, and the admin
//! dashboard.
//!
//! Assembly happens once at process start: the process environment is
//! snapshotted, optionally augmented by an environment file selected from
//! the environment indicator, and transformed into an immutable
//! [`config::Settings`] value that downstream code receives explicitly.
//!
//! ```no_run
//! use storefront_config::config::Settings;
//!
//! let settings = Settings::load();
//! assert!(!settings.plugins.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod errors;

pub use config::{AppEnv, Environment, PluginDescriptor, ProjectConfig, Settings};
pub use errors::{ConfigError, ConfigResult};

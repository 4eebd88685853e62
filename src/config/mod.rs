//! Application configuration module
//!
//! Handles environment selection, the environment snapshot, and assembly
//! of the settings record.

mod constants;
mod environment;
mod plugins;
mod settings;

pub use constants::*;
pub use environment::{AppEnv, Environment};
pub use plugins::{
    plugin_list, AdminDevelopOptions, AdminOptions, LocalFileOptions, MeilisearchConnection,
    MeilisearchOptions, MeilisearchSettings, PluginDescriptor, PluginOptions, ProductIndex,
    ProductIndexSettings, RazorpayOptions, SendgridLocalization, SendgridOptions,
};
pub use settings::{ModuleDescriptor, ModulesConfig, ProjectConfig, RedisModuleOptions, Settings};

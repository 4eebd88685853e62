//! The settings record handed to the host framework at bootstrap.
//!
//! Assembled once at process start from an environment snapshot and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_ADMIN_CORS, DEFAULT_COOKIE_SECRET, DEFAULT_DATABASE_URL, DEFAULT_JWT_SECRET,
    DEFAULT_REDIS_URL, DEFAULT_STORE_CORS, MODULE_CACHE_REDIS, MODULE_EVENT_BUS_REDIS,
};
use super::environment::{AppEnv, Environment};
use super::plugins::{plugin_list, PluginDescriptor, PluginOptions};

const REDACTED: &str = "[REDACTED]";

/// Project-level configuration consumed by the framework core.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub jwt_secret: String,
    pub cookie_secret: String,
    pub store_cors: String,
    pub database_url: String,
    pub admin_cors: String,
}

impl std::fmt::Debug for ProjectConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectConfig")
            .field("jwt_secret", &REDACTED)
            .field("cookie_secret", &REDACTED)
            .field("store_cors", &self.store_cors)
            .field("database_url", &REDACTED)
            .field("admin_cors", &self.admin_cors)
            .finish()
    }
}

impl ProjectConfig {
    /// Derive the project configuration from the environment snapshot.
    ///
    /// Each field takes its environment value when present and non-empty,
    /// else the literal default.
    pub fn from_env(env: &Environment) -> Self {
        Self {
            jwt_secret: env.var_or("JWT_SECRET", DEFAULT_JWT_SECRET),
            cookie_secret: env.var_or("COOKIE_SECRET", DEFAULT_COOKIE_SECRET),
            store_cors: env.var_or("STORE_CORS", DEFAULT_STORE_CORS),
            database_url: env.var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            admin_cors: env.var_or("ADMIN_CORS", DEFAULT_ADMIN_CORS),
        }
    }
}

/// Framework modules backed by shared infrastructure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulesConfig {
    pub event_bus: ModuleDescriptor,
    pub cache_service: ModuleDescriptor,
}

/// A framework module: resolvable name plus options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleDescriptor {
    pub resolve: String,
    pub options: RedisModuleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedisModuleOptions {
    pub redis_url: String,
}

impl ModulesConfig {
    /// Event bus and cache service backed by the configured Redis instance.
    pub fn redis_backed(env: &Environment) -> Self {
        let redis_url = env.var_or("REDIS_URL", DEFAULT_REDIS_URL);
        Self {
            event_bus: ModuleDescriptor {
                resolve: MODULE_EVENT_BUS_REDIS.to_string(),
                options: RedisModuleOptions {
                    redis_url: redis_url.clone(),
                },
            },
            cache_service: ModuleDescriptor {
                resolve: MODULE_CACHE_REDIS.to_string(),
                options: RedisModuleOptions { redis_url },
            },
        }
    }
}

/// The complete settings record exported to the host framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub project_config: ProjectConfig,
    pub plugins: Vec<PluginDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<ModulesConfig>,
}

impl Settings {
    /// Assemble the record from an environment snapshot.
    pub fn assemble(env: &Environment) -> Self {
        Self {
            project_config: ProjectConfig::from_env(env),
            plugins: plugin_list(env),
            modules: None,
        }
    }

    /// Assemble the record with the Redis-backed modules enabled.
    pub fn assemble_with_redis(env: &Environment) -> Self {
        Self {
            modules: Some(ModulesConfig::redis_backed(env)),
            ..Self::assemble(env)
        }
    }

    /// One-call startup path: select the environment file, snapshot the
    /// process environment, assemble, and log configuration warnings.
    pub fn load() -> Self {
        let environment = Environment::load(AppEnv::from_process());
        let settings = Self::assemble(&environment);
        settings.log_startup_warnings();
        settings
    }

    /// Names of the integration credential variables that resolved to
    /// absent or empty.
    ///
    /// Absence is not a failure: the plugins receive the empty values and
    /// are responsible for their own validation.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for plugin in &self.plugins {
            match plugin.options() {
                Some(PluginOptions::Razorpay(options)) => {
                    push_if_missing(&mut missing, "RAZORPAY_ID", &options.key_id);
                    push_if_missing(&mut missing, "RAZORPAY_SECRET", &options.key_secret);
                    push_if_missing(&mut missing, "RAZORPAY_ACCOUNT", &options.razorpay_account);
                }
                Some(PluginOptions::Meilisearch(options)) => {
                    push_if_missing(&mut missing, "MEILISEARCH_HOST", &options.config.host);
                    push_if_missing(&mut missing, "MEILISEARCH_API_KEY", &options.config.api_key);
                }
                Some(PluginOptions::Sendgrid(options)) => {
                    push_if_missing(&mut missing, "SENDGRID_API_KEY", &options.api_key);
                    push_if_missing(&mut missing, "SENDGRID_FROM", &options.from);
                }
                _ => {}
            }
        }
        missing
    }

    /// Emit a warning per missing credential and for secrets still holding
    /// their insecure development default.
    pub fn log_startup_warnings(&self) {
        if self.project_config.jwt_secret == DEFAULT_JWT_SECRET {
            tracing::warn!("JWT_SECRET not set, using insecure default");
        }
        if self.project_config.cookie_secret == DEFAULT_COOKIE_SECRET {
            tracing::warn!("COOKIE_SECRET not set, using insecure default");
        }
        for var in self.missing_credentials() {
            tracing::warn!("{} not set, the depending plugin receives an empty value", var);
        }
    }

    /// Copy of the record with secret-bearing fields masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.project_config.jwt_secret = REDACTED.to_string();
        copy.project_config.cookie_secret = REDACTED.to_string();
        copy.project_config.database_url = REDACTED.to_string();
        for plugin in &mut copy.plugins {
            match plugin.options_mut() {
                Some(PluginOptions::Razorpay(options)) => {
                    mask(&mut options.key_secret);
                    mask(&mut options.webhook_secret);
                }
                Some(PluginOptions::Meilisearch(options)) => mask(&mut options.config.api_key),
                Some(PluginOptions::Sendgrid(options)) => mask(&mut options.api_key),
                _ => {}
            }
        }
        copy
    }
}

fn push_if_missing(out: &mut Vec<&'static str>, var: &'static str, value: &Option<String>) {
    if value.as_deref().map_or(true, str::is_empty) {
        out.push(var);
    }
}

fn mask(value: &mut Option<String>) {
    if value.is_some() {
        *value = Some(REDACTED.to_string());
    }
}

//! Environment selection and the process environment snapshot.
//!
//! The process environment is read once into an [`Environment`] value;
//! everything downstream works from that snapshot instead of reading
//! global state ad hoc.

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::errors::{ConfigError, ConfigResult};

use super::constants::{
    ENV_FILE_DEFAULT, ENV_FILE_PRODUCTION, ENV_FILE_STAGING, ENV_FILE_TEST, ENV_INDICATOR,
};

/// Deployment environment, selected by the environment indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Staging,
    Test,
}

impl AppEnv {
    /// Resolve the environment from an indicator value.
    ///
    /// Matching is exact; anything unrecognized (including an absent
    /// indicator) falls back to development.
    pub fn from_indicator(value: Option<&str>) -> Self {
        match value {
            Some("production") => AppEnv::Production,
            Some("staging") => AppEnv::Staging,
            Some("test") => AppEnv::Test,
            _ => AppEnv::Development,
        }
    }

    /// Resolve the environment from the process indicator variable.
    pub fn from_process() -> Self {
        Self::from_indicator(env::var(ENV_INDICATOR).ok().as_deref())
    }

    /// Name of the environment file this environment loads.
    pub fn env_file(self) -> &'static str {
        match self {
            AppEnv::Development => ENV_FILE_DEFAULT,
            AppEnv::Production => ENV_FILE_PRODUCTION,
            AppEnv::Staging => ENV_FILE_STAGING,
            AppEnv::Test => ENV_FILE_TEST,
        }
    }
}

/// Immutable snapshot of the environment variables visible at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    /// Build a snapshot from explicit key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw lookup. Absent keys yield `None`; empty values pass through.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Defaulted lookup. A key that is absent or holds an empty value
    /// resolves to the given default.
    pub fn var_or(&self, key: &str, default: &str) -> String {
        match self.vars.get(key) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => default.to_string(),
        }
    }

    /// Merge key/value pairs from an environment file into the snapshot.
    ///
    /// Keys already present keep their process value. The file is parsed
    /// fully before anything is inserted, so a malformed file leaves the
    /// snapshot untouched. Returns the number of keys inserted.
    pub fn merge_env_file<P: AsRef<Path>>(&mut self, path: P) -> ConfigResult<usize> {
        let path = path.as_ref();
        let env_file = |source| ConfigError::EnvFile {
            file: path.display().to_string(),
            source,
        };

        let pairs: Vec<(String, String)> = dotenvy::from_path_iter(path)
            .map_err(env_file)?
            .collect::<Result<_, _>>()
            .map_err(env_file)?;

        let mut inserted = 0;
        for (key, value) in pairs {
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Snapshot the process environment, augmented by the environment's
    /// file when it is present and readable.
    ///
    /// A missing or unreadable file is reported and otherwise ignored.
    pub fn load(app_env: AppEnv) -> Self {
        let mut environment = Self::from_process();
        let file = app_env.env_file();
        match environment.merge_env_file(file) {
            Ok(count) => tracing::debug!("Loaded {} values from {}", count, file),
            Err(err) => tracing::warn!("{}", err),
        }
        environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_indicators_select_their_file() {
        assert_eq!(
            AppEnv::from_indicator(Some("production")).env_file(),
            ".env.production"
        );
        assert_eq!(
            AppEnv::from_indicator(Some("staging")).env_file(),
            ".env.staging"
        );
        assert_eq!(AppEnv::from_indicator(Some("test")).env_file(), ".env.test");
    }

    #[test]
    fn unrecognized_indicators_fall_back_to_default_file() {
        assert_eq!(AppEnv::from_indicator(Some("development")).env_file(), ".env");
        assert_eq!(AppEnv::from_indicator(Some("Production")).env_file(), ".env");
        assert_eq!(AppEnv::from_indicator(Some("")).env_file(), ".env");
        assert_eq!(AppEnv::from_indicator(None).env_file(), ".env");
    }

    #[test]
    fn var_or_treats_empty_as_unset() {
        let env = Environment::from_pairs([("SET", "value"), ("EMPTY", "")]);

        assert_eq!(env.var_or("SET", "fallback"), "value");
        assert_eq!(env.var_or("EMPTY", "fallback"), "fallback");
        assert_eq!(env.var_or("ABSENT", "fallback"), "fallback");
    }

    #[test]
    fn var_passes_empty_values_through() {
        let env = Environment::from_pairs([("EMPTY", "")]);

        assert_eq!(env.var("EMPTY"), Some(""));
        assert_eq!(env.var("ABSENT"), None);
    }
}

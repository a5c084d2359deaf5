// Runtime configuration.
//
// Priority order:
// 1. Command line flags (`Overrides`)
// 2. Environment variables (RSDMS_* prefix)
// 3. A `.env` file in the working directory
// 4. Defaults; region and profile stay unset so the AWS provider chain decides

use std::env;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;
use thiserror::Error;

pub const ENV_PREFIX: &str = "RSDMS_";

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
    clap::ValueEnum,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmsConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for DmsConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value} (expected text or json)")]
    InvalidLogFormat { key: String, value: String },
}

pub trait EnvSource {
    /// Looks up `key` under the `RSDMS_` prefix.
    fn get(&self, key: &str) -> Option<String>;
}

pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    }
}

impl DmsConfig {
    /// Loads `.env` (if present) into the process environment, then reads it.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_env(&StdEnvSource)
    }

    pub fn from_env(source: &impl EnvSource) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(source)?;
        Ok(config)
    }

    fn apply_env(&mut self, source: &impl EnvSource) -> Result<(), ConfigError> {
        let lookup = |key: &str| source.get(key).filter(|v| !v.trim().is_empty());
        if let Some(region) = lookup("REGION") {
            self.region = Some(region);
        }
        if let Some(profile) = lookup("PROFILE") {
            self.profile = Some(profile);
        }
        if let Some(url) = lookup("ENDPOINT_URL") {
            self.endpoint_url = Some(url);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.log_format = format.parse().map_err(|_| ConfigError::InvalidLogFormat {
                key: format!("{}LOG_FORMAT", ENV_PREFIX),
                value: format.clone(),
            })?;
        }
        Ok(())
    }

    pub fn merge(&mut self, overrides: Overrides) {
        if overrides.region.is_some() {
            self.region = overrides.region;
        }
        if overrides.profile.is_some() {
            self.profile = overrides.profile;
        }
        if overrides.endpoint_url.is_some() {
            self.endpoint_url = overrides.endpoint_url;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
    }
}

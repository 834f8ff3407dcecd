//! Environment-driven configuration for both Lambda entry points.
//!
//! Loading is deliberately permissive: a missing variable yields an
//! empty string, never an error. Absent configuration surfaces later as
//! empty response fields instead of failing the cold start.

use std::env;

fn env_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

/// Settings shared by every entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseConfig {
    pub stage_name: String,
    pub region_name: String,
}

impl BaseConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            stage_name: env_or_empty("STAGE_NAME"),
            region_name: env_or_empty("REGION_NAME"),
        }
    }
}

/// Settings for the API Lambda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base: BaseConfig,
    pub job_table_name: String,
    pub job_queue_name: String,
    pub url_prefix: String,
}

impl ApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base: BaseConfig::from_env(),
            job_table_name: env_or_empty("JOB_TABLE_NAME"),
            job_queue_name: env_or_empty("JOB_QUEUE_NAME"),
            url_prefix: env_or_empty("URL_PREFIX"),
        }
    }
}

/// Settings for the Engine Lambda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub base: BaseConfig,
}

impl EngineConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base: BaseConfig::from_env(),
        }
    }
}

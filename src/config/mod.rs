#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::EnvResolver;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Entry in the host's environment-parameter registry.
#[derive(Debug, Clone, Copy)]
pub struct EnvParam {
    pub name: &'static str,
    pub description: &'static str,
}

impl EnvParam {
    /// Resolves the parameter, falling back to the empty string when unset.
    /// Emptiness is not validated here; an unset key surfaces as an
    /// authorization error from the API on the first call.
    pub fn resolve(&self, resolver: &dyn EnvResolver) -> String {
        resolver.resolve(self.name).unwrap_or_default()
    }
}

pub const BING_API_KEY: EnvParam = EnvParam {
    name: "BING_API_KEY",
    description: "Bing Search API Key",
};

/// [`EnvResolver`] over the process environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv;

impl EnvResolver for ProcessEnv {
    fn resolve(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Node configuration, resolved once at construction. Read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

pub const DEFAULT_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/news/search";

// 原始節點未設超時；此處採用有界預設
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

impl NodeConfig {
    pub fn from_env(resolver: &dyn EnvResolver) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: BING_API_KEY.resolve(resolver),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Overrides the search endpoint (tests point this at a mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for NodeConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}

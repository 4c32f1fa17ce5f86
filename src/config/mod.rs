#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "cli")]
pub use cli::{CatalogSection, CliConfig, Command};
pub use toml_config::TomlConfig;

/// Resolved settings for the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSettings {
    pub endpoint: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl ContactSettings {
    pub fn new(endpoint: impl Into<String>, headers: HashMap<String, String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers,
        }
    }
}

impl ConfigProvider for ContactSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for ContactSettings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        for key in self.headers.keys() {
            crate::utils::validation::validate_non_empty_string("headers", key)?;
        }
        Ok(())
    }
}

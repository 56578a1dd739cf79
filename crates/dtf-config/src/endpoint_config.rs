use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, NEW_HARD_TASK_PATH};

use serde::Deserialize;

/// Remote task bot endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Scheme and host, without the API path
    pub base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

impl EndpointConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::endpoint(format!(
                "endpoint.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Full URL of the task creation endpoint, without a query string.
    pub fn task_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            NEW_HARD_TASK_PATH
        )
    }
}

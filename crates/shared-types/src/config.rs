use serde::{Deserialize, Serialize};

/// Base URL used when neither `config.toml` nor the environment set one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Connection settings for the hospital API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiSettings {
    /// Base URL without a trailing slash, so paths can be appended with `/`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

use shared_types::{AppConfig, ApiSettings};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Workspace `config.toml`, embedded at build time so the browser build
/// needs no filesystem access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Environment variable that overrides `[api] base_url`.
pub const API_URL_ENV: &str = "HOSPITAL_API_URL";

/// Parse a config document, defaulting every field on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// Read the override for the API base URL, if one is set.
///
/// Native builds read the process environment (after `.env`); wasm builds
/// can only see what was set when the bundle was compiled.
fn api_url_override() -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dotenvy::dotenv();
        std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty())
    }

    #[cfg(target_arch = "wasm32")]
    {
        option_env!("HOSPITAL_API_URL")
            .map(str::to_string)
            .filter(|v| !v.trim().is_empty())
    }
}

/// Apply an optional base URL override on top of a parsed config.
pub fn apply_override(mut config: AppConfig, base_url: Option<String>) -> AppConfig {
    if let Some(url) = base_url {
        config.api.base_url = url;
    }
    config
}

/// Load the config once. Safe to call multiple times; only the first call
/// has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = apply_override(parse_config(EMBEDDED_CONFIG), api_url_override());
        tracing::info!(base_url = %config.api.base_url, "Hospital API configured");
        config
    })
}

/// API connection settings from the loaded config.
pub fn api_settings() -> &'static ApiSettings {
    &load_config().api
}

use crate::app_config::{AppConfig, PLACES_API_KEY_VAR};
use crate::classify::{DEFAULT_PROVIDER_HOST, DEFAULT_SHORT_LINK_HOST};
use crate::ConfigError;

/// Production place-details host.
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional_secret = |var: &str| -> Result<Option<String>, ConfigError> {
        match lookup(var) {
            Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value is empty".to_string(),
            }),
            Ok(value) => Ok(Some(value)),
            Err(_) => Ok(None),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let places_api_key = optional_secret(PLACES_API_KEY_VAR)?;

    let places_base_url = or_default("MAPSHARE_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    url::Url::parse(&places_base_url).map_err(|e| ConfigError::InvalidEnvVar {
        var: "MAPSHARE_PLACES_BASE_URL".to_string(),
        reason: e.to_string(),
    })?;

    let log_level = or_default("MAPSHARE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("MAPSHARE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("MAPSHARE_USER_AGENT", "mapshare/0.1 (location-share)");
    let short_link_host = or_default("MAPSHARE_SHORT_LINK_HOST", DEFAULT_SHORT_LINK_HOST);
    let provider_host = or_default("MAPSHARE_PROVIDER_HOST", DEFAULT_PROVIDER_HOST);

    Ok(AppConfig {
        places_api_key,
        places_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        short_link_host,
        provider_host,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

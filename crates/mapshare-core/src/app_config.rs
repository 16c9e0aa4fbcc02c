use crate::classify::HostMarkers;
use crate::ConfigError;

/// Environment variable holding the place-details API key.
pub const PLACES_API_KEY_VAR: &str = "MAPSHARE_PLACES_API_KEY";

#[derive(Clone)]
pub struct AppConfig {
    /// Only needed to resolve share links.
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub short_link_host: String,
    pub provider_host: String,
}

impl AppConfig {
    /// Returns the place-details API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when no key is configured.
    pub fn require_places_api_key(&self) -> Result<&str, ConfigError> {
        self.places_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar(PLACES_API_KEY_VAR.to_string()))
    }

    /// Host markers used by the classifier and the identifier extractor.
    #[must_use]
    pub fn host_markers(&self) -> HostMarkers {
        HostMarkers {
            short_link: self.short_link_host.clone(),
            provider: self.provider_host.clone(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("short_link_host", &self.short_link_host)
            .field("provider_host", &self.provider_host)
            .finish()
    }
}

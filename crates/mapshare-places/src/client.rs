//! HTTP client for share-link redirects and the place-details REST API.
//!
//! Both calls share one `reqwest` client. Each is a single attempt: failures
//! surface as [`PlacesError`] and nothing is retried.

use std::time::Duration;

use mapshare_core::{AppConfig, LocationRecord, PlaceFields, DEFAULT_PLACES_BASE_URL};
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::PlaceResult;

/// Path of the details endpoint, relative to the base URL.
const DETAILS_PATH: &str = "maps/api/place/details/json";

/// Client for short-link resolution and place-details lookups.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point the details lookup at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    details_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production place-details API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_PLACES_BASE_URL)
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Config`] when no API key is configured,
    /// otherwise see [`PlacesClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        Self::with_base_url(
            config.require_places_api_key()?,
            config.request_timeout_secs,
            &config.user_agent,
            &config.places_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so the join appends rather than
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let details_url = Url::parse(&normalised)
            .and_then(|base| base.join(DETAILS_PATH))
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            details_url,
        })
    }

    /// Follows a share link's redirects with a `HEAD` request and returns the
    /// final URL.
    ///
    /// Redirects are followed by the client's default policy. The final URL
    /// is returned whatever its status; a non-2xx status is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure, timeout, or when the
    /// redirect limit is exceeded.
    pub async fn resolve_short_link(&self, short_link: &Url) -> Result<Url, PlacesError> {
        let response = self.client.head(short_link.clone()).send().await?;
        let status = response.status();
        let resolved = response.url().clone();

        if !status.is_success() {
            tracing::warn!(
                short_link = %short_link,
                resolved = %resolved,
                status = status.as_u16(),
                "share link resolved to a non-success status"
            );
        }
        tracing::debug!(short_link = %short_link, resolved = %resolved, "resolved share link");

        Ok(resolved)
    }

    /// Looks up a place by identifier and builds a [`LocationRecord`].
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Api`] if the response has no `result` object.
    /// - [`PlacesError::Deserialize`] if the body is not JSON or a required
    ///   field is missing or mistyped.
    /// - [`PlacesError::Location`] if the coordinates are out of range.
    pub async fn fetch_place_details(&self, place_id: &str) -> Result<LocationRecord, PlacesError> {
        let url = self.details_url(place_id);
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: format!("place details(cid={place_id})"),
                source: e,
            })?;

        Self::parse_details(json, place_id)
    }

    /// Builds the details URL with percent-encoded `cid` and `key` parameters.
    fn details_url(&self, place_id: &str) -> Url {
        let mut url = self.details_url.clone();
        url.query_pairs_mut()
            .append_pair("cid", place_id)
            .append_pair("key", &self.api_key);
        url
    }

    /// Turns a decoded details body into a record.
    fn parse_details(
        mut body: serde_json::Value,
        place_id: &str,
    ) -> Result<LocationRecord, PlacesError> {
        let result = match body.get_mut("result").map(serde_json::Value::take) {
            Some(result @ serde_json::Value::Object(_)) => result,
            _ => return Err(Self::api_error(&body)),
        };

        let result: PlaceResult =
            serde_json::from_value(result).map_err(|e| PlacesError::Deserialize {
                context: format!("place details result(cid={place_id})"),
                source: e,
            })?;

        tracing::debug!(place_id = %result.place_id, types = ?result.types, "place details received");

        let location = &result.geometry.location;
        let record = LocationRecord::new(
            location.lat,
            location.lng,
            PlaceFields {
                name: result.name,
                address: result.formatted_address,
                phone_number: result.international_phone_number,
                website: result.website,
                place_id: Some(result.place_id),
            },
        )?;

        Ok(record)
    }

    /// Reads the diagnostic `status`/`error_message` pair of a body that has
    /// no `result`, and logs it.
    fn api_error(body: &serde_json::Value) -> PlacesError {
        let field = |key: &str| {
            body.get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        };
        let status = field("status").unwrap_or_else(|| "UNKNOWN".to_string());
        let message = field("error_message").unwrap_or_else(|| "no result in response".to_string());

        tracing::warn!(status = %status, message = %message, "place details API returned no result");
        PlacesError::Api { status, message }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use mapshare_core::{ConfigError, CoreError, InputClassification};
use thiserror::Error;

/// Errors returned by the place-details client and the redirect resolver.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, redirect limit, or a non-2xx details response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The details API answered without a `result` object.
    #[error("place details API error: {status}: {message}")]
    Api { status: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot host the details endpoint.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The API key needed for lookups is not configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API returned coordinates that cannot form a record.
    #[error(transparent)]
    Location(#[from] CoreError),
}

/// Why a shared payload did not produce a [`mapshare_core::LocationRecord`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Links that are not share links, and unreadable payloads, are left to
    /// the caller.
    #[error("payload classified as {0} is not resolved")]
    Unsupported(InputClassification),

    #[error("malformed map item: {0}")]
    InvalidMapItem(#[from] CoreError),

    #[error("invalid share URL \"{url}\": {reason}")]
    InvalidShareUrl { url: String, reason: String },

    /// The resolved URL is not a provider URL or carries no usable `ftid`.
    #[error("no place identifier in {url}")]
    MissingPlaceId { url: String },

    #[error(transparent)]
    Places(#[from] PlacesError),

    #[error("resolution cancelled")]
    Cancelled,
}

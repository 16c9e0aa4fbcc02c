//! Share-payload to location resolution.
//!
//! A [`LocationResolver`] is built once from configuration and carries no
//! mutable state; every call runs one independent pipeline. Share links run
//! redirect resolution, identifier extraction and the details lookup in strict
//! order, stopping at the first stage that fails.

use mapshare_core::{
    classify, AppConfig, ConfigError, HostMarkers, InputClassification, LocationRecord,
    SharedPayload, PLACES_API_KEY_VAR,
};
use reqwest::Url;
use tokio_util::sync::CancellationToken;

use crate::client::PlacesClient;
use crate::error::{PlacesError, ResolveError};
use crate::ftid::extract_place_id;

pub struct LocationResolver {
    /// Absent when no API key is configured; only share links need it.
    places: Option<PlacesClient>,
    markers: HostMarkers,
}

impl LocationResolver {
    #[must_use]
    pub fn new(places: PlacesClient, markers: HostMarkers) -> Self {
        Self {
            places: Some(places),
            markers,
        }
    }

    /// Builds a resolver that handles map items and classification only.
    /// Share links fail with a missing-key error before any request is made.
    #[must_use]
    pub fn without_places(markers: HostMarkers) -> Self {
        Self {
            places: None,
            markers,
        }
    }

    /// Builds a resolver from configuration. The places client is only
    /// created when an API key is configured.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        if config.places_api_key.is_none() {
            tracing::debug!("no places API key configured, share links will not resolve");
            return Ok(Self::without_places(config.host_markers()));
        }

        Ok(Self::new(
            PlacesClient::from_config(config)?,
            config.host_markers(),
        ))
    }

    #[must_use]
    pub fn classify(&self, payload: &SharedPayload) -> InputClassification {
        classify(payload, &self.markers)
    }

    /// Resolves a payload into a record, or `None` on any failure.
    ///
    /// The failure kind is logged and then dropped.
    pub async fn resolve_location(&self, payload: &SharedPayload) -> Option<LocationRecord> {
        match self.try_resolve(payload).await {
            Ok(record) => Some(record),
            Err(ResolveError::Unsupported(kind)) => {
                tracing::debug!(kind = %kind, "payload left to the caller");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not resolve shared location");
                None
            }
        }
    }

    /// Resolves a payload, racing the pipeline against `cancel`.
    ///
    /// When the token fires first, the in-flight request is dropped and
    /// [`ResolveError::Cancelled`] is returned.
    ///
    /// # Errors
    ///
    /// See [`LocationResolver::try_resolve`], plus [`ResolveError::Cancelled`].
    pub async fn resolve_cancellable(
        &self,
        payload: &SharedPayload,
        cancel: &CancellationToken,
    ) -> Result<LocationRecord, ResolveError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::info!("location resolution cancelled");
                Err(ResolveError::Cancelled)
            }
            result = self.try_resolve(payload) => result,
        }
    }

    /// Resolves a payload into a record.
    ///
    /// Map items are mapped directly with no network access. Share links go
    /// through the lookup pipeline. Other links and unreadable payloads are
    /// rejected before any request is made.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Unsupported`] for generic links and undefined input.
    /// - [`ResolveError::InvalidMapItem`] for map items with bad coordinates.
    /// - [`ResolveError::MissingPlaceId`] when the resolved URL has no usable
    ///   identifier; the details API is not called.
    /// - [`ResolveError::Places`] for a missing API key, or for transport,
    ///   API, or decoding failures.
    pub async fn try_resolve(
        &self,
        payload: &SharedPayload,
    ) -> Result<LocationRecord, ResolveError> {
        let kind = self.classify(payload);
        let record = match (kind, payload) {
            (InputClassification::StructuredMapItem, SharedPayload::MapItem(item)) => {
                LocationRecord::from_map_item(item)?
            }
            (InputClassification::GoogleShortLink, SharedPayload::Url { value }) => {
                self.resolve_share_link(value).await?
            }
            (kind, _) => return Err(ResolveError::Unsupported(kind)),
        };

        tracing::info!(
            kind = %kind,
            name = record.display_name(),
            latitude = record.latitude(),
            longitude = record.longitude(),
            "resolved shared location"
        );
        Ok(record)
    }

    async fn resolve_share_link(&self, raw: &str) -> Result<LocationRecord, ResolveError> {
        let short_link = Url::parse(raw.trim()).map_err(|e| ResolveError::InvalidShareUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        let places = self.places.as_ref().ok_or_else(|| {
            PlacesError::Config(ConfigError::MissingEnvVar(PLACES_API_KEY_VAR.to_string()))
        })?;

        let resolved = places.resolve_short_link(&short_link).await?;

        let place_id = extract_place_id(&resolved, &self.markers).ok_or_else(|| {
            ResolveError::MissingPlaceId {
                url: resolved.to_string(),
            }
        })?;
        tracing::debug!(place_id = %place_id, "extracted place identifier");

        Ok(places.fetch_place_details(&place_id).await?)
    }
}

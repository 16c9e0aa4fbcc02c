//! Share-payload classification.
//!
//! Decides which resolution path a shared item takes by looking at its kind
//! and, for links, its host only. Nothing here touches the network.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::location::MapItem;

/// Host substring identifying a Google Maps share link.
pub const DEFAULT_SHORT_LINK_HOST: &str = "maps.app.goo.gl";

/// Host substring a resolved share link must carry before its query string
/// is trusted.
pub const DEFAULT_PROVIDER_HOST: &str = "google";

/// What the share sheet handed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SharedPayload {
    MapItem(MapItem),
    Url { value: String },
}

impl SharedPayload {
    #[must_use]
    pub fn url(value: impl Into<String>) -> Self {
        Self::Url {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputClassification {
    StructuredMapItem,
    GoogleShortLink,
    GenericLink,
    Undefined,
}

impl std::fmt::Display for InputClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputClassification::StructuredMapItem => write!(f, "structured map item"),
            InputClassification::GoogleShortLink => write!(f, "google short link"),
            InputClassification::GenericLink => write!(f, "generic link"),
            InputClassification::Undefined => write!(f, "undefined"),
        }
    }
}

/// Host substrings recognised at the two points of the link path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMarkers {
    /// Matched by the classifier to spot share links.
    pub short_link: String,
    /// Matched by the identifier extractor on the resolved URL.
    pub provider: String,
}

impl Default for HostMarkers {
    fn default() -> Self {
        Self {
            short_link: DEFAULT_SHORT_LINK_HOST.to_string(),
            provider: DEFAULT_PROVIDER_HOST.to_string(),
        }
    }
}

impl HostMarkers {
    #[must_use]
    pub fn is_short_link(&self, url: &Url) -> bool {
        host_contains(url, &self.short_link)
    }

    #[must_use]
    pub fn is_provider(&self, url: &Url) -> bool {
        host_contains(url, &self.provider)
    }
}

/// Classifies a shared payload.
///
/// Map items are always [`InputClassification::StructuredMapItem`]. Links
/// whose host contains the short-link marker are
/// [`InputClassification::GoogleShortLink`], any other link with a host is
/// [`InputClassification::GenericLink`], and anything unparseable or hostless
/// is [`InputClassification::Undefined`].
#[must_use]
pub fn classify(payload: &SharedPayload, markers: &HostMarkers) -> InputClassification {
    match payload {
        SharedPayload::MapItem(_) => InputClassification::StructuredMapItem,
        SharedPayload::Url { value } => match Url::parse(value.trim()) {
            Ok(url) if url.host_str().is_none() => InputClassification::Undefined,
            Ok(url) if markers.is_short_link(&url) => InputClassification::GoogleShortLink,
            Ok(_) => InputClassification::GenericLink,
            Err(_) => InputClassification::Undefined,
        },
    }
}

fn host_contains(url: &Url, marker: &str) -> bool {
    url.host_str()
        .is_some_and(|host| host.to_ascii_lowercase().contains(&marker.to_ascii_lowercase()))
}

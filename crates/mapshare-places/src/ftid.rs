//! Place identifier extraction from resolved share URLs.

use mapshare_core::HostMarkers;
use reqwest::Url;

/// Query parameter carrying the feature id on a resolved maps URL.
const FTID_PARAM: &str = "ftid";

/// Extracts the place identifier from a resolved share URL.
///
/// The URL's host must contain the provider marker. The first `ftid` query
/// value is split on `:` and the last segment, without its `0x` prefix, is
/// the identifier. Returns `None` when the host does not match, `ftid` is
/// missing, or nothing is left after splitting.
#[must_use]
pub fn extract_place_id(url: &Url, markers: &HostMarkers) -> Option<String> {
    if !markers.is_provider(url) {
        return None;
    }

    let (_, ftid) = url.query_pairs().find(|(key, _)| key == FTID_PARAM)?;
    let last = ftid.rsplit(':').next()?;
    let id = last
        .strip_prefix("0x")
        .or_else(|| last.strip_prefix("0X"))
        .unwrap_or(last);

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

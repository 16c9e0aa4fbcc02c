//! Place-details API response types.
//!
//! Only the subset of the Place Details schema that feeds a
//! [`mapshare_core::LocationRecord`] is modelled. Required fields fail
//! deserialization when missing or mistyped; descriptive text fields are
//! read permissively.

use serde::{Deserialize, Deserializer};

/// The `result` object of a place-details response.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    /// Validated present; not used for filtering.
    pub types: Vec<String>,
    pub place_id: String,
    pub geometry: Geometry,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub formatted_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub international_phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Accepts any JSON value and keeps it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_minimal_result() {
        let result: PlaceResult = serde_json::from_value(json!({
            "types": ["point_of_interest"],
            "place_id": "p1",
            "geometry": { "location": { "lat": 1.5, "lng": 2.5 } }
        }))
        .expect("minimal result should parse");

        assert_eq!(result.place_id, "p1");
        assert_eq!(result.types, vec!["point_of_interest"]);
        assert!(result.name.is_none());
        assert!(result.website.is_none());
    }

    #[test]
    fn integer_coordinates_are_accepted() {
        let result: PlaceResult = serde_json::from_value(json!({
            "types": [],
            "place_id": "p1",
            "geometry": { "location": { "lat": 10, "lng": -3 } }
        }))
        .expect("integer coordinates should parse");

        assert!((result.geometry.location.lat - 10.0).abs() < f64::EPSILON);
        assert!((result.geometry.location.lng + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_string_optional_fields_become_none() {
        let result: PlaceResult = serde_json::from_value(json!({
            "types": ["cafe"],
            "place_id": "p1",
            "geometry": { "location": { "lat": 1.0, "lng": 2.0 } },
            "name": 42,
            "website": null,
            "formatted_address": ["not", "a", "string"]
        }))
        .expect("permissive fields should not fail the result");

        assert!(result.name.is_none());
        assert!(result.website.is_none());
        assert!(result.formatted_address.is_none());
    }

    #[test]
    fn missing_types_is_an_error() {
        let result = serde_json::from_value::<PlaceResult>(json!({
            "place_id": "p1",
            "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn string_latitude_is_an_error() {
        let result = serde_json::from_value::<PlaceResult>(json!({
            "types": [],
            "place_id": "p1",
            "geometry": { "location": { "lat": "1.0", "lng": 2.0 } }
        }));
        assert!(result.is_err());
    }
}

//! The normalized location record and the structured map item it can be
//! built from directly.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Title shown for a record whose place has no name.
pub const UNDEFINED_LOCATION_NAME: &str = "Undefined Location";

/// Descriptive text attached to a location. Every field is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceFields {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    /// Provider place identifier, only known for link-derived records.
    pub place_id: Option<String>,
}

/// A resolved, normalized location ready to be shown to the user.
///
/// Coordinates are validated at construction and the record exposes no way
/// to change them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    name: Option<String>,
    address: Option<String>,
    phone_number: Option<String>,
    website: Option<String>,
    place_id: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl LocationRecord {
    /// Builds a record from coordinates and descriptive fields.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] if either coordinate is not
    /// finite or falls outside the WGS84 range.
    pub fn new(latitude: f64, longitude: f64, fields: PlaceFields) -> Result<Self, CoreError> {
        if !valid_coordinates(latitude, longitude) {
            return Err(CoreError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            name: fields.name,
            address: fields.address,
            phone_number: fields.phone_number,
            website: fields.website,
            place_id: fields.place_id,
            latitude,
            longitude,
        })
    }

    /// Maps a structured map item straight into a record. No lookup involved.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] for malformed coordinates.
    pub fn from_map_item(item: &MapItem) -> Result<Self, CoreError> {
        Self::new(
            item.latitude,
            item.longitude,
            PlaceFields {
                name: item.name.clone(),
                address: item.address.clone(),
                phone_number: item.phone.clone(),
                website: item.url.clone(),
                place_id: None,
            },
        )
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    #[must_use]
    pub fn place_id(&self) -> Option<&str> {
        self.place_id.as_deref()
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `(latitude, longitude)`.
    #[must_use]
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Title to display: the place name, or [`UNDEFINED_LOCATION_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNDEFINED_LOCATION_NAME)
    }
}

/// A structured map item handed over by the share sheet, with the fields the
/// map application already knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapItem {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe_item() -> MapItem {
        MapItem {
            name: Some("Cafe Kitty".to_string()),
            address: Some("1 Rue de Rivoli, Paris".to_string()),
            phone: Some("+33 1 23 45 67 89".to_string()),
            url: Some("https://cafekitty.example".to_string()),
            latitude: 48.8566,
            longitude: 2.3522,
        }
    }

    #[test]
    fn from_map_item_copies_coordinates_exactly() {
        let record = LocationRecord::from_map_item(&cafe_item()).expect("valid item");
        assert_eq!(record.coordinates(), (48.8566, 2.3522));
    }

    #[test]
    fn from_map_item_maps_optional_fields_one_to_one() {
        let record = LocationRecord::from_map_item(&cafe_item()).expect("valid item");
        assert_eq!(record.name(), Some("Cafe Kitty"));
        assert_eq!(record.address(), Some("1 Rue de Rivoli, Paris"));
        assert_eq!(record.phone_number(), Some("+33 1 23 45 67 89"));
        assert_eq!(record.website(), Some("https://cafekitty.example"));
        assert_eq!(record.place_id(), None);
    }

    #[test]
    fn from_map_item_keeps_missing_fields_absent() {
        let item = MapItem {
            name: None,
            address: None,
            phone: None,
            url: None,
            latitude: -33.8688,
            longitude: 151.2093,
        };
        let record = LocationRecord::from_map_item(&item).expect("valid item");
        assert!(record.address().is_none());
        assert!(record.phone_number().is_none());
        assert!(record.website().is_none());
    }

    #[test]
    fn from_map_item_rejects_nan_latitude() {
        let item = MapItem {
            latitude: f64::NAN,
            ..cafe_item()
        };
        assert!(matches!(
            LocationRecord::from_map_item(&item),
            Err(CoreError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn new_rejects_out_of_range_longitude() {
        let result = LocationRecord::new(10.0, 180.5, PlaceFields::default());
        assert!(matches!(result, Err(CoreError::InvalidCoordinates { .. })));
    }

    #[test]
    fn new_accepts_boundary_coordinates() {
        assert!(LocationRecord::new(90.0, -180.0, PlaceFields::default()).is_ok());
        assert!(LocationRecord::new(-90.0, 180.0, PlaceFields::default()).is_ok());
    }

    #[test]
    fn display_name_falls_back_when_name_missing() {
        let record = LocationRecord::new(1.0, 2.0, PlaceFields::default()).unwrap();
        assert_eq!(record.display_name(), UNDEFINED_LOCATION_NAME);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = LocationRecord::new(
            1.5,
            2.5,
            PlaceFields {
                phone_number: Some("+1 555".to_string()),
                place_id: Some("p1".to_string()),
                ..PlaceFields::default()
            },
        )
        .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["phoneNumber"], "+1 555");
        assert_eq!(json["placeId"], "p1");
        assert_eq!(json["latitude"], 1.5);
        assert!(json["name"].is_null());
    }

    #[test]
    fn map_item_deserializes_short_coordinate_keys() {
        let item: MapItem = serde_json::from_value(serde_json::json!({
            "name": "Pier 39",
            "lat": 37.8087,
            "lng": -122.4098
        }))
        .unwrap();
        assert_eq!(item.latitude, 37.8087);
        assert_eq!(item.longitude, -122.4098);
        assert!(item.phone.is_none());
    }
}

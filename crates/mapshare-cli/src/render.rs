//! Text presentation of a resolved location.

use mapshare_core::LocationRecord;
use mapshare_places::ResolveError;

pub(crate) const LOADING: &str = "loading location...";
pub(crate) const COULD_NOT_LOAD: &str = "could not load location";
pub(crate) const NOTHING_TO_SHARE: &str = "nothing to share";
pub(crate) const DISMISSED: &str = "dismissed";

/// Renders the confirmation card: title, then whichever of address, phone and
/// website are known, then coordinates.
pub(crate) fn card(record: &LocationRecord) -> String {
    let mut lines = vec![record.display_name().to_string()];

    let details = [
        ("address", record.address()),
        ("phone", record.phone_number()),
        ("website", record.website()),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            lines.push(format!("  {label:<8} {value}"));
        }
    }

    let (latitude, longitude) = record.coordinates();
    lines.push(format!("  {:<8} {latitude:.6}, {longitude:.6}", "location"));

    lines.join("\n")
}

pub(crate) fn json(record: &LocationRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// What the share sheet shows for one outcome, and whether it counts as
/// success.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Presentation {
    pub(crate) text: String,
    pub(crate) to_stderr: bool,
    pub(crate) success: bool,
}

/// Maps a resolution outcome to its presentation.
///
/// Unsupported payloads and dismissals end quietly; every other failure is
/// the terminal "could not load" state.
pub(crate) fn present(
    outcome: &Result<LocationRecord, ResolveError>,
    json_output: bool,
) -> serde_json::Result<Presentation> {
    let (text, to_stderr, success) = match outcome {
        Ok(record) if json_output => (json(record)?, false, true),
        Ok(record) => (card(record), false, true),
        Err(ResolveError::Unsupported(_)) => (NOTHING_TO_SHARE.to_string(), false, true),
        Err(ResolveError::Cancelled) => (DISMISSED.to_string(), true, true),
        Err(_) => (COULD_NOT_LOAD.to_string(), true, false),
    };

    Ok(Presentation {
        text,
        to_stderr,
        success,
    })
}

#[cfg(test)]
mod tests {
    use mapshare_core::{InputClassification, PlaceFields};
    use mapshare_places::PlacesError;

    use super::*;

    #[test]
    fn card_lists_known_fields_only() {
        let record = LocationRecord::new(
            48.858_37,
            2.294_481,
            PlaceFields {
                name: Some("Eiffel Tower".to_string()),
                address: Some("Champ de Mars, Paris".to_string()),
                website: Some("https://www.toureiffel.paris".to_string()),
                ..PlaceFields::default()
            },
        )
        .unwrap();

        let rendered = card(&record);
        assert_eq!(
            rendered,
            "Eiffel Tower\n  \
             address  Champ de Mars, Paris\n  \
             website  https://www.toureiffel.paris\n  \
             location 48.858370, 2.294481"
        );
    }

    #[test]
    fn card_uses_placeholder_title_without_name() {
        let record = LocationRecord::new(0.0, 0.0, PlaceFields::default()).unwrap();
        let rendered = card(&record);
        assert!(rendered.starts_with("Undefined Location\n"));
        assert!(!rendered.contains("phone"));
    }

    #[test]
    fn json_output_round_trips_field_names() {
        let record = LocationRecord::new(
            1.5,
            2.5,
            PlaceFields {
                name: Some("Cafe".to_string()),
                place_id: Some("p1".to_string()),
                ..PlaceFields::default()
            },
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json(&record).unwrap()).unwrap();
        assert_eq!(value["name"], "Cafe");
        assert_eq!(value["placeId"], "p1");
        assert_eq!(value["longitude"], 2.5);
    }

    fn cafe() -> LocationRecord {
        LocationRecord::new(
            1.5,
            2.5,
            PlaceFields {
                name: Some("Cafe".to_string()),
                ..PlaceFields::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn present_record_prints_card_on_stdout() {
        let shown = present(&Ok(cafe()), false).unwrap();
        assert_eq!(shown.text, card(&cafe()));
        assert!(!shown.to_stderr);
        assert!(shown.success);
    }

    #[test]
    fn present_record_as_json() {
        let shown = present(&Ok(cafe()), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&shown.text).unwrap();
        assert_eq!(value["name"], "Cafe");
        assert!(shown.success);
    }

    #[test]
    fn present_generic_link_is_nothing_to_share() {
        let shown = present(
            &Err(ResolveError::Unsupported(InputClassification::GenericLink)),
            false,
        )
        .unwrap();
        assert_eq!(
            shown,
            Presentation {
                text: NOTHING_TO_SHARE.to_string(),
                to_stderr: false,
                success: true,
            }
        );
    }

    #[test]
    fn present_undefined_input_is_nothing_to_share() {
        let shown = present(
            &Err(ResolveError::Unsupported(InputClassification::Undefined)),
            true,
        )
        .unwrap();
        assert_eq!(shown.text, NOTHING_TO_SHARE);
        assert!(shown.success);
    }

    #[test]
    fn present_cancellation_is_dismissed() {
        let shown = present(&Err(ResolveError::Cancelled), false).unwrap();
        assert_eq!(
            shown,
            Presentation {
                text: DISMISSED.to_string(),
                to_stderr: true,
                success: true,
            }
        );
    }

    #[test]
    fn present_failure_could_not_load_and_exits_non_zero() {
        let outcome = Err(ResolveError::MissingPlaceId {
            url: "https://www.google.com/maps?q=Cafe".to_string(),
        });
        let shown = present(&outcome, false).unwrap();
        assert_eq!(
            shown,
            Presentation {
                text: COULD_NOT_LOAD.to_string(),
                to_stderr: true,
                success: false,
            }
        );
    }

    #[test]
    fn present_api_error_could_not_load() {
        let outcome = Err(ResolveError::Places(PlacesError::Api {
            status: "REQUEST_DENIED".to_string(),
            message: "The provided API key is invalid.".to_string(),
        }));
        let shown = present(&outcome, true).unwrap();
        assert_eq!(shown.text, COULD_NOT_LOAD);
        assert!(!shown.success);
    }
}

pub mod app_config;
pub mod classify;
pub mod config;
pub mod error;
pub mod location;

pub use app_config::{AppConfig, PLACES_API_KEY_VAR};
pub use classify::{classify, HostMarkers, InputClassification, SharedPayload};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_PLACES_BASE_URL};
pub use error::{ConfigError, CoreError};
pub use location::{LocationRecord, MapItem, PlaceFields, UNDEFINED_LOCATION_NAME};

pub mod client;
pub mod error;
pub mod ftid;
pub mod resolver;
pub mod types;

pub use client::PlacesClient;
pub use error::{PlacesError, ResolveError};
pub use ftid::extract_place_id;
pub use resolver::LocationResolver;
pub use types::{Geometry, LatLng, PlaceResult};

//! Geolocation-based table detection
//!
//! Leaf components: great-circle distance, the positioning seam, zone
//! validation, and the pure matcher that ranks candidate tables.

pub mod distance;
pub mod matcher;
pub mod sampler;
pub mod zone;

pub use distance::{EARTH_RADIUS_M, haversine_m};
pub use matcher::{MatchParams, TableMatch, match_tables};
pub use sampler::GeoSampler;
pub use zone::ZoneValidator;

//! Zone Model

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Service zone entity (dining hall, terrace, private room...)
///
/// Read-only reference data; defines where table resolution is permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Zone validation request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCheckRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for ZoneCheckRequest {
    fn from(coord: Coordinate) -> Self {
        Self {
            latitude: coord.latitude,
            longitude: coord.longitude,
        }
    }
}

/// Zone validation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCheck {
    pub is_valid: bool,
    pub zone: Option<Zone>,
    pub message: Option<String>,
}

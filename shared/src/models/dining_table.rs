//! Dining Table Model

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Dining table entity
///
/// Reference data owned by the backend; the client only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub number: i64,
    pub capacity: i32,
    /// Surveyed position of the table
    pub location: Coordinate,
    /// Radius within which a fix counts as "at this table"
    pub detection_radius_m: f64,
}

/// A table paired with its distance from a sample point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableHit {
    pub table: DiningTable,
    pub distance_m: f64,
}

/// Nearby-table listing request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyTablesRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
}

/// QR verification request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrVerifyRequest {
    pub table_id: String,
    pub restaurant_id: String,
}

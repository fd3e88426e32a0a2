//! Coordinate Model

use serde::{Deserialize, Serialize};

/// A single positioning sample.
///
/// Produced once per sampling attempt and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported accuracy of the fix, in meters
    pub accuracy_m: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64, accuracy_m: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m,
        }
    }
}

//! Data models
//!
//! Shared between the ordering backend and the device client (via API).
//! All IDs are server-issued strings; the client never mints identifiers.

pub mod coordinate;
pub mod customer;
pub mod dining_table;
pub mod table_session;
pub mod zone;

// Re-exports
pub use coordinate::*;
pub use customer::*;
pub use dining_table::*;
pub use table_session::*;
pub use zone::*;

use serde::{Deserialize, Serialize};

/// How a table identity was established for a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalMethod {
    /// Scanned QR payload, remotely verified
    Qr,
    /// Device geolocation matched against table positions
    Geo,
    /// Table number typed by the customer
    Manual,
}

impl SignalMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalMethod::Qr => "qr",
            SignalMethod::Geo => "geo",
            SignalMethod::Manual => "manual",
        }
    }
}

impl std::fmt::Display for SignalMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Table Session Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinate, SignalMethod};

/// Authoritative link between a physical table and a customer for one visit.
///
/// Created server-side, strictly after the customer record exists (the
/// backend enforces the foreign-key ordering).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSession {
    pub id: String,
    pub table_id: String,
    pub customer_id: String,
    pub table_number: i64,
    pub started_at: DateTime<Utc>,
}

/// Start table session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSessionStart {
    pub table_id: String,
    pub table_number: i64,
    pub customer_id: String,
    pub customer_name: String,
    pub method: SignalMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}

/// Staff arrival notification payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrivalNotice {
    pub table_id: String,
    pub table_number: i64,
    pub customer_id: String,
    pub customer_name: String,
    pub session_id: String,
    pub message: String,
}

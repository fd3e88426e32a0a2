//! Customer Model

use serde::{Deserialize, Serialize};

use super::SignalMethod;

/// Walk-in customer entity
///
/// Created server-side during check-in; the client holds only the returned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub display_name: String,
    pub method: SignalMethod,
    pub table_number: i64,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub table_number: i64,
    pub table_id: String,
    pub method: SignalMethod,
}

/// Link an existing customer to its table session (back-reference update)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSessionLink {
    pub session_id: String,
}

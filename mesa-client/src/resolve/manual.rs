//! Manual table-number resolution

use std::sync::Arc;

use shared::models::SignalMethod;

use crate::api::OrderingApi;
use crate::error::{CheckInError, CheckInResult};
use crate::resolve::types::{Confidence, ResolutionCandidate};

/// Resolver for a table number typed by the customer
pub struct ManualResolver {
    api: Arc<dyn OrderingApi>,
}

impl ManualResolver {
    pub fn new(api: Arc<dyn OrderingApi>) -> Self {
        Self { api }
    }

    /// Normalize the entered text and look the table up remotely.
    ///
    /// The backend performs the exact-or-fuzzy match; a miss surfaces as
    /// [`CheckInError::TableNotFound`].
    pub async fn resolve(&self, input: &str) -> CheckInResult<ResolutionCandidate> {
        let query = input.trim();
        if query.is_empty() {
            return Err(CheckInError::TableNotFound(input.to_string()));
        }

        let table = match self.api.lookup_table_by_number(query).await {
            Ok(table) => table,
            Err(CheckInError::Api(err)) => {
                tracing::debug!(query, code = %err.code, "manual lookup missed");
                return Err(CheckInError::TableNotFound(query.to_string()));
            }
            Err(err) => return Err(err),
        };

        // A human read the number off the physical table; that is as
        // certain as a verified QR scan
        Ok(ResolutionCandidate {
            table,
            distance_m: None,
            method: SignalMethod::Manual,
            confidence: Confidence::High,
        })
    }
}

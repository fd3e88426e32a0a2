//! Session establishment
//!
//! The ordered sequence that turns a confirmed table plus a display name
//! into a persisted session:
//!
//! 1. create customer        (critical)
//! 2. start table session    (critical, needs the customer id)
//! 3. link customer↔session  (best effort)
//! 4. notify staff           (best effort)
//! 5. persist locally        (the commit point)
//!
//! A critical failure aborts the whole attempt and leaves no local state;
//! nothing is ever auto-retried here, because replaying stage 1 or 2
//! could create duplicate customers or sessions. Best-effort failures are
//! logged and swallowed: a missing back-link or a missed staff ping must
//! never keep a customer from the menu.

use std::sync::Arc;

use chrono::Utc;
use shared::models::{
    ArrivalNotice, Coordinate, CustomerCreate, CustomerSessionLink, TableSessionStart,
};

use crate::api::OrderingApi;
use crate::error::{CheckInError, CheckInResult};
use crate::resolve::types::ResolutionCandidate;
use crate::session::store::{ClientSessionRecord, SessionStore};

/// Establishment stages, in strict forward order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    Idle,
    CreatingCustomer,
    CreatingSession,
    LinkingCustomer,
    NotifyingStaff,
    PersistingLocally,
    Complete,
}

impl SessionStage {
    /// Whether a failure at this stage aborts the attempt
    pub fn is_critical(&self) -> bool {
        !matches!(
            self,
            SessionStage::LinkingCustomer | SessionStage::NotifyingStaff
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStage::Idle => "idle",
            SessionStage::CreatingCustomer => "creating_customer",
            SessionStage::CreatingSession => "creating_session",
            SessionStage::LinkingCustomer => "linking_customer",
            SessionStage::NotifyingStaff => "notifying_staff",
            SessionStage::PersistingLocally => "persisting_locally",
            SessionStage::Complete => "complete",
        }
    }
}

impl std::fmt::Display for SessionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the establishment sequence
pub struct SessionOrchestrator {
    api: Arc<dyn OrderingApi>,
    store: Arc<dyn SessionStore>,
}

impl SessionOrchestrator {
    pub fn new(api: Arc<dyn OrderingApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Execute the full sequence for a confirmed candidate.
    ///
    /// On success the returned record has already been persisted and the
    /// customer counts as logged in; the caller hands control to the menu
    /// subsystem. On a critical failure no local state has been written
    /// and the caller must restart from the beginning.
    pub async fn establish(
        &self,
        candidate: &ResolutionCandidate,
        display_name: &str,
        location: Option<Coordinate>,
    ) -> CheckInResult<ClientSessionRecord> {
        let table = &candidate.table;

        tracing::debug!(stage = %SessionStage::CreatingCustomer, table = table.number, "stage started");
        let customer = self
            .api
            .create_customer(CustomerCreate {
                name: display_name.to_string(),
                table_number: table.number,
                table_id: table.id.clone(),
                method: candidate.method,
            })
            .await
            .map_err(|err| CheckInError::CustomerCreateFailed(err.to_string()))?;

        // Only reachable with a real customer id: the backend enforces
        // the session→customer foreign key
        tracing::debug!(stage = %SessionStage::CreatingSession, customer = %customer.id, "stage started");
        let session = self
            .api
            .start_session(TableSessionStart {
                table_id: table.id.clone(),
                table_number: table.number,
                customer_id: customer.id.clone(),
                customer_name: display_name.to_string(),
                method: candidate.method,
                location,
            })
            .await
            .map_err(|err| CheckInError::SessionCreateFailed(err.to_string()))?;

        tracing::debug!(stage = %SessionStage::LinkingCustomer, "stage started");
        if let Err(err) = self
            .api
            .link_customer_session(
                &customer.id,
                CustomerSessionLink {
                    session_id: session.id.clone(),
                },
            )
            .await
        {
            tracing::warn!(
                customer = %customer.id,
                session = %session.id,
                error = %err,
                "customer-session link failed, continuing"
            );
        }

        tracing::debug!(stage = %SessionStage::NotifyingStaff, "stage started");
        if let Err(err) = self
            .api
            .notify_arrival(ArrivalNotice {
                table_id: table.id.clone(),
                table_number: table.number,
                customer_id: customer.id.clone(),
                customer_name: display_name.to_string(),
                session_id: session.id.clone(),
                message: format!("{display_name} checked in at table {}", table.number),
            })
            .await
        {
            tracing::warn!(
                table = table.number,
                error = %err,
                "staff notification failed, continuing"
            );
        }

        tracing::debug!(stage = %SessionStage::PersistingLocally, "stage started");
        let record = ClientSessionRecord {
            customer_id: customer.id,
            customer_name: display_name.to_string(),
            table_id: table.id.clone(),
            table_number: table.number,
            session_id: session.id,
            method: candidate.method,
            login_time: Utc::now(),
            distance_m: candidate.distance_m,
        };
        self.store.save(&record)?;

        tracing::info!(
            stage = %SessionStage::Complete,
            table = record.table_number,
            session = %record.session_id,
            method = %record.method,
            "check-in complete"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_link_and_notify_are_non_critical() {
        assert!(SessionStage::CreatingCustomer.is_critical());
        assert!(SessionStage::CreatingSession.is_critical());
        assert!(!SessionStage::LinkingCustomer.is_critical());
        assert!(!SessionStage::NotifyingStaff.is_critical());
        assert!(SessionStage::PersistingLocally.is_critical());
    }
}

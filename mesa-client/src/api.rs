//! Backend operations consumed during check-in
//!
//! The resolution and establishment logic only ever talks to the backend
//! through [`OrderingApi`], so tests (and alternative transports) can
//! substitute the whole surface.

use async_trait::async_trait;
use shared::models::{
    ArrivalNotice, Customer, CustomerCreate, CustomerSessionLink, DiningTable, NearbyTablesRequest,
    QrVerifyRequest, TableHit, TableSession, TableSessionStart, ZoneCheck, ZoneCheckRequest,
};

use crate::error::CheckInResult;
use crate::http::HttpApi;

/// Ordering backend operations
#[async_trait]
pub trait OrderingApi: Send + Sync {
    /// Check a coordinate against the configured service zones
    async fn validate_zone(&self, req: ZoneCheckRequest) -> CheckInResult<ZoneCheck>;

    /// List tables within a radius of a coordinate, nearest first
    async fn list_nearby_tables(&self, req: NearbyTablesRequest) -> CheckInResult<Vec<TableHit>>;

    /// Verify a scanned table/restaurant pair
    async fn verify_qr_table(&self, req: QrVerifyRequest) -> CheckInResult<DiningTable>;

    /// Exact-or-fuzzy lookup of a table by its printed number
    async fn lookup_table_by_number(&self, number: &str) -> CheckInResult<DiningTable>;

    /// Create the customer record for this visit
    async fn create_customer(&self, req: CustomerCreate) -> CheckInResult<Customer>;

    /// Start the table session binding customer and table
    async fn start_session(&self, req: TableSessionStart) -> CheckInResult<TableSession>;

    /// Back-fill the customer record with its session id
    async fn link_customer_session(
        &self,
        customer_id: &str,
        req: CustomerSessionLink,
    ) -> CheckInResult<()>;

    /// Tell staff a customer has arrived at a table
    async fn notify_arrival(&self, req: ArrivalNotice) -> CheckInResult<()>;
}

#[async_trait]
impl OrderingApi for HttpApi {
    async fn validate_zone(&self, req: ZoneCheckRequest) -> CheckInResult<ZoneCheck> {
        self.post("api/zones/validate", &req).await
    }

    async fn list_nearby_tables(&self, req: NearbyTablesRequest) -> CheckInResult<Vec<TableHit>> {
        self.post("api/tables/nearby", &req).await
    }

    async fn verify_qr_table(&self, req: QrVerifyRequest) -> CheckInResult<DiningTable> {
        self.post("api/tables/verify-qr", &req).await
    }

    async fn lookup_table_by_number(&self, number: &str) -> CheckInResult<DiningTable> {
        self.get(&format!("api/tables/by-number/{number}")).await
    }

    async fn create_customer(&self, req: CustomerCreate) -> CheckInResult<Customer> {
        self.post("api/customers", &req).await
    }

    async fn start_session(&self, req: TableSessionStart) -> CheckInResult<TableSession> {
        self.post("api/table-sessions", &req).await
    }

    async fn link_customer_session(
        &self,
        customer_id: &str,
        req: CustomerSessionLink,
    ) -> CheckInResult<()> {
        self.put_ack(&format!("api/customers/{customer_id}/session"), &req)
            .await
    }

    async fn notify_arrival(&self, req: ArrivalNotice) -> CheckInResult<()> {
        self.post_ack("api/notifications/arrival", &req).await
    }
}

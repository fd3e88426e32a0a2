//! Check-in facade
//!
//! Front door for hosting UIs: pick a resolution strategy, arbitrate the
//! result, then establish the session once a table is confirmed. One
//! flow exists per device; the API shape keeps it sequential.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use shared::models::{Coordinate, SignalMethod, TableHit};

use crate::api::OrderingApi;
use crate::config::ClientConfig;
use crate::error::CheckInResult;
use crate::geo::sampler::GeoSampler;
use crate::http::HttpApi;
use crate::resolve::arbiter::{Arbitration, arbitrate};
use crate::resolve::geo::GeoResolver;
use crate::resolve::manual::ManualResolver;
use crate::resolve::qr::QrResolver;
use crate::resolve::types::{Confidence, ResolutionCandidate};
use crate::session::orchestrator::{SessionOrchestrator, SessionStage};
use crate::session::store::{ClientSessionRecord, FileSessionStore, SessionStore};

/// Device-side check-in flow
pub struct CheckInFlow {
    config: ClientConfig,
    api: Arc<dyn OrderingApi>,
    store: Arc<dyn SessionStore>,
    orchestrator: SessionOrchestrator,
}

impl CheckInFlow {
    /// Assemble a flow from explicit collaborators
    pub fn new(
        config: ClientConfig,
        api: Arc<dyn OrderingApi>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            orchestrator: SessionOrchestrator::new(api.clone(), store.clone()),
            config,
            api,
            store,
        }
    }

    /// Assemble a flow over HTTP with a file-backed session store
    pub fn connect(config: ClientConfig, data_dir: &Path) -> CheckInResult<Self> {
        let api: Arc<dyn OrderingApi> = Arc::new(HttpApi::new(&config)?);
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(data_dir));
        Ok(Self::new(config, api, store))
    }

    /// Resolve from a decoded QR payload
    pub async fn resolve_qr(&self, payload: &str) -> CheckInResult<Arbitration> {
        let resolver = QrResolver::new(self.api.clone(), self.config.restaurant_id.clone());
        let candidate = resolver.resolve(payload).await?;
        Ok(Arbitration::Confirmed(candidate))
    }

    /// Resolve from a device position fix.
    ///
    /// A high-confidence auto-confirm pauses for the configured display
    /// delay so the customer can see which table was detected; the pause
    /// is a plain await and cannot be cancelled from inside the flow.
    pub async fn resolve_geo(&self, sampler: Arc<dyn GeoSampler>) -> CheckInResult<Arbitration> {
        let resolver = GeoResolver::new(self.api.clone(), sampler, &self.config);
        let outcome = resolver.resolve().await?;
        let arbitration = arbitrate(outcome)?;
        if matches!(arbitration, Arbitration::Confirmed(_)) && self.config.confirm_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.confirm_delay_ms)).await;
        }
        Ok(arbitration)
    }

    /// Resolve from a typed table number
    pub async fn resolve_manual(&self, input: &str) -> CheckInResult<Arbitration> {
        let resolver = ManualResolver::new(self.api.clone());
        let candidate = resolver.resolve(input).await?;
        Ok(Arbitration::Confirmed(candidate))
    }

    /// Turn a human selection from a disambiguation set into a candidate
    pub fn confirm_selection(&self, hit: &TableHit) -> ResolutionCandidate {
        ResolutionCandidate {
            table: hit.table.clone(),
            distance_m: Some(hit.distance_m),
            method: SignalMethod::Geo,
            confidence: Confidence::High,
        }
    }

    /// Establish the session for a confirmed candidate
    pub async fn establish(
        &self,
        candidate: &ResolutionCandidate,
        display_name: &str,
        location: Option<Coordinate>,
    ) -> CheckInResult<ClientSessionRecord> {
        self.orchestrator
            .establish(candidate, display_name, location)
            .await
    }

    /// The active session on this device, if any
    pub fn current_session(&self) -> CheckInResult<Option<ClientSessionRecord>> {
        self.store.load()
    }

    /// Establishment stage implied by the persisted state: `Complete` while
    /// a session record exists, `Idle` otherwise. Hosting UIs route on this
    /// at startup (check-in screen vs straight to the menu).
    pub fn stage(&self) -> CheckInResult<SessionStage> {
        Ok(match self.store.load()? {
            Some(_) => SessionStage::Complete,
            None => SessionStage::Idle,
        })
    }

    /// Clear the active session
    pub fn logout(&self) -> CheckInResult<()> {
        self.store.clear()
    }
}

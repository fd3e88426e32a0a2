//! Geolocation resolution
//!
//! Pipeline: sample a position (bounded wait) → validate it against the
//! service zone → list nearby tables → rank and classify locally.

use std::sync::Arc;
use std::time::Duration;

use shared::models::{DiningTable, NearbyTablesRequest};

use crate::api::OrderingApi;
use crate::config::ClientConfig;
use crate::error::{CheckInError, CheckInResult};
use crate::geo::matcher::{MatchParams, TableMatch, match_tables};
use crate::geo::sampler::GeoSampler;
use crate::geo::zone::ZoneValidator;
use crate::retry::RetryPolicy;

/// Resolver for device geolocation
pub struct GeoResolver {
    api: Arc<dyn OrderingApi>,
    sampler: Arc<dyn GeoSampler>,
    zones: ZoneValidator,
    geo_timeout: Duration,
    params: MatchParams,
    retry: RetryPolicy,
}

impl GeoResolver {
    pub fn new(
        api: Arc<dyn OrderingApi>,
        sampler: Arc<dyn GeoSampler>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            zones: ZoneValidator::new(api.clone()),
            sampler,
            geo_timeout: Duration::from_secs(config.geo_timeout_secs),
            params: MatchParams::from(config),
            retry: RetryPolicy::new(config.lookup_retries, Duration::from_millis(500)),
            api,
        }
    }

    /// Run the full geolocation pipeline once
    pub async fn resolve(&self) -> CheckInResult<TableMatch> {
        let coord = tokio::time::timeout(self.geo_timeout, self.sampler.sample())
            .await
            .map_err(|_| CheckInError::Timeout)??;
        tracing::debug!(
            latitude = coord.latitude,
            longitude = coord.longitude,
            accuracy_m = coord.accuracy_m,
            "position fix acquired"
        );

        let zone = self.zones.validate(coord).await?;
        tracing::debug!(zone = %zone.name, "position inside service zone");

        // Read-only and idempotent, so a bounded retry is safe here
        let request = NearbyTablesRequest {
            latitude: coord.latitude,
            longitude: coord.longitude,
            radius_m: self.params.fallback_radius_m,
        };
        let hits = self
            .retry
            .run("list nearby tables", || {
                self.api.list_nearby_tables(request.clone())
            })
            .await?;
        let tables: Vec<DiningTable> = hits.into_iter().map(|hit| hit.table).collect();

        let outcome = match_tables(&coord, &tables, &self.params);
        tracing::debug!(
            candidates = tables.len(),
            confidence = ?outcome.confidence(),
            "table match classified"
        );
        Ok(outcome)
    }
}

//! Service-zone validation

use std::sync::Arc;

use shared::models::{Coordinate, Zone};

use crate::api::OrderingApi;
use crate::error::{CheckInError, CheckInResult};

/// Checks a coordinate against the configured service boundary.
///
/// An invalid result is a hard stop: the device is physically outside the
/// service area, which no retry will change.
pub struct ZoneValidator {
    api: Arc<dyn OrderingApi>,
}

impl ZoneValidator {
    pub fn new(api: Arc<dyn OrderingApi>) -> Self {
        Self { api }
    }

    pub async fn validate(&self, coord: Coordinate) -> CheckInResult<Zone> {
        let check = self.api.validate_zone(coord.into()).await?;
        if !check.is_valid {
            let message = check
                .message
                .unwrap_or_else(|| "Position is outside the service area".to_string());
            tracing::info!(
                latitude = coord.latitude,
                longitude = coord.longitude,
                "zone validation rejected position"
            );
            return Err(CheckInError::OutOfZone(message));
        }
        check.zone.ok_or_else(|| {
            CheckInError::OutOfZone("Service zone could not be identified".to_string())
        })
    }
}

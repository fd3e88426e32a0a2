//! Positioning seam

use async_trait::async_trait;
use shared::models::Coordinate;

use crate::error::CheckInResult;

/// Source of device position fixes.
///
/// Positioning is a device capability, not something this crate
/// implements; hosts plug in whatever the platform provides. A failed
/// sample surfaces as [`PermissionDenied`], [`PositionUnavailable`] or
/// [`Timeout`].
///
/// [`PermissionDenied`]: crate::error::CheckInError::PermissionDenied
/// [`PositionUnavailable`]: crate::error::CheckInError::PositionUnavailable
/// [`Timeout`]: crate::error::CheckInError::Timeout
#[async_trait]
pub trait GeoSampler: Send + Sync {
    /// Produce one position fix
    async fn sample(&self) -> CheckInResult<Coordinate>;
}

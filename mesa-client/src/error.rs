//! Check-in error types

use thiserror::Error;

/// Check-in error type
///
/// Resolution errors (everything up to and including `Api`) are
/// recoverable: the customer can switch to a different identification
/// signal or simply try again. The two orchestration errors are fatal for
/// the attempt and require a full restart of the sequence, never a silent
/// continue.
#[derive(Debug, Error)]
pub enum CheckInError {
    /// Device location permission was denied
    #[error("Location permission denied")]
    PermissionDenied,

    /// Positioning hardware could not produce a fix
    #[error("Device position unavailable")]
    PositionUnavailable,

    /// Bounded wait for a location fix expired
    #[error("Timed out waiting for a location fix")]
    Timeout,

    /// Coordinate falls outside every service zone (hard stop, not retryable)
    #[error("Outside service area: {0}")]
    OutOfZone(String),

    /// No table within the fallback radius of the sampled position
    #[error("No table close enough to the sampled position")]
    NoNearbyTable,

    /// GPS cannot discriminate between candidate tables
    #[error("Multiple tables match this position")]
    Ambiguous,

    /// QR payload is neither a recognized URL nor a recognized JSON object
    #[error("QR payload not recognized: {0}")]
    InvalidPayload(String),

    /// QR payload parsed but the backend rejected the table/restaurant pair
    #[error("QR verification failed: {0}")]
    VerificationFailed(String),

    /// Manual lookup matched no table
    #[error("No table matches '{0}'")]
    TableNotFound(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Well-formed error response from the backend
    #[error("API error: {0}")]
    Api(#[from] shared::ApiError),

    /// Stage 1 of session establishment failed (fatal for the attempt)
    #[error("Customer creation failed: {0}")]
    CustomerCreateFailed(String),

    /// Stage 2 of session establishment failed (fatal for the attempt)
    #[error("Session creation failed: {0}")]
    SessionCreateFailed(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local storage I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckInError {
    /// Whether the customer can recover by retrying or switching signal.
    ///
    /// Orchestration failures return false: the whole sequence must be
    /// restarted explicitly to avoid duplicate customer/session creation.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CheckInError::CustomerCreateFailed(_) | CheckInError::SessionCreateFailed(_)
        )
    }

    /// Actionable next-step guidance for the person holding the device
    pub fn guidance(&self) -> &'static str {
        match self {
            CheckInError::PermissionDenied => {
                "Allow location access in device settings, or scan the table QR code"
            }
            CheckInError::PositionUnavailable | CheckInError::Timeout => {
                "Move closer to a window or scan the table QR code"
            }
            CheckInError::OutOfZone(_) => "Ordering is only available inside the restaurant",
            CheckInError::NoNearbyTable => {
                "No table was found near you; scan the QR code or enter the table number"
            }
            CheckInError::Ambiguous => {
                "Several tables are equally close; scan the QR code on your table instead"
            }
            CheckInError::InvalidPayload(_) => "That QR code is not a table code; try again",
            CheckInError::VerificationFailed(_) => {
                "This QR code could not be verified; ask staff for help"
            }
            CheckInError::TableNotFound(_) => "Check the number printed on the table and retry",
            CheckInError::Network(_) | CheckInError::Api(_) => {
                "Connection problem; check your network and retry"
            }
            CheckInError::CustomerCreateFailed(_) | CheckInError::SessionCreateFailed(_) => {
                "Check-in could not be completed; tap retry to start over"
            }
            CheckInError::Serialization(_) | CheckInError::Io(_) => {
                "Something went wrong on this device; restart the check-in"
            }
        }
    }
}

/// Result type for check-in operations
pub type CheckInResult<T> = Result<T, CheckInError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_errors_are_recoverable() {
        assert!(CheckInError::Timeout.is_recoverable());
        assert!(CheckInError::NoNearbyTable.is_recoverable());
        assert!(CheckInError::InvalidPayload("x".into()).is_recoverable());
        assert!(CheckInError::TableNotFound("9".into()).is_recoverable());
    }

    #[test]
    fn orchestration_errors_are_fatal() {
        assert!(!CheckInError::CustomerCreateFailed("boom".into()).is_recoverable());
        assert!(!CheckInError::SessionCreateFailed("boom".into()).is_recoverable());
    }

    #[test]
    fn ambiguous_guidance_steers_to_qr() {
        assert!(CheckInError::Ambiguous.guidance().contains("QR"));
    }
}

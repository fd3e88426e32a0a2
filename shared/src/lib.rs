//! Shared types for the Mesa dine-in platform
//!
//! Wire-level data models and response structures used by both the
//! ordering backend and the device-side client.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::SignalMethod;
pub use response::{API_CODE_SUCCESS, ApiError, ApiResponse};

//! Device-side check-in core for the Mesa dine-in platform
//!
//! Binds a walk-in customer's device to a physical table and converts it
//! into a durable ordering session. Two pieces of real logic live here:
//!
//! - **Resolution**: turning a raw identification signal (scanned QR
//!   payload, device geolocation, or a typed table number) into a table
//!   identity with a confidence level, including detection of GPS
//!   ambiguity. See [`resolve`] and [`geo`].
//! - **Establishment**: the ordered, partially fault-tolerant sequence of
//!   backend operations that turns a confirmed table plus a display name
//!   into a persisted session. See [`session`].
//!
//! Everything else (menu rendering, carts, camera capture) is an external
//! collaborator that calls into this crate or is handed control on
//! completion.

pub mod api;
pub mod config;
pub mod error;
pub mod flow;
pub mod geo;
pub mod http;
pub mod resolve;
pub mod retry;
pub mod session;

// Re-exports
pub use api::OrderingApi;
pub use config::ClientConfig;
pub use error::{CheckInError, CheckInResult};
pub use flow::CheckInFlow;
pub use geo::{GeoSampler, MatchParams, TableMatch};
pub use http::HttpApi;
pub use resolve::{
    Arbitration, Confidence, DisambiguationSet, GeoResolver, ManualResolver, QrResolver,
    ResolutionCandidate, arbitrate,
};
pub use retry::RetryPolicy;
pub use session::{
    ClientSessionRecord, FileSessionStore, MemorySessionStore, SessionOrchestrator, SessionStage,
    SessionStore,
};

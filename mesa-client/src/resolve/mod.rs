//! Signal resolution
//!
//! Three independent strategies turn a raw identification signal into a
//! table identity: a scanned QR payload, a device position fix, or a
//! typed table number. Exactly one strategy runs per attempt; after a
//! failure the customer can switch strategies without redoing anything.

pub mod arbiter;
pub mod geo;
pub mod manual;
pub mod qr;
pub mod types;

pub use arbiter::{Arbitration, arbitrate};
pub use geo::GeoResolver;
pub use manual::ManualResolver;
pub use qr::{QrPayload, QrResolver, parse_qr_payload};
pub use types::{Confidence, DisambiguationSet, ResolutionCandidate};

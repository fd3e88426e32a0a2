//! Resolution result types
//!
//! Transient, produced once per attempt and never persisted.

use shared::models::{DiningTable, SignalMethod, TableHit};

/// Qualitative certainty of a table match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// Inside the table's detection radius with a clear gap to the runner-up
    High,
    /// Plausible but needs human confirmation
    Low,
    /// GPS cannot discriminate between candidates
    Ambiguous,
    /// No plausible candidate at all
    None,
}

/// A resolved table identity with its provenance
#[derive(Debug, Clone)]
pub struct ResolutionCandidate {
    pub table: DiningTable,
    /// Distance from the position fix, where one exists (geo only)
    pub distance_m: Option<f64>,
    pub method: SignalMethod,
    pub confidence: Confidence,
}

/// Ranked candidate tables awaiting a human choice.
///
/// `options` is sorted by ascending distance. `gps_ambiguous` is set when
/// the two closest distances differ by less than the configured epsilon,
/// meaning re-sampling the position is pointless.
#[derive(Debug, Clone)]
pub struct DisambiguationSet {
    pub options: Vec<TableHit>,
    pub gps_ambiguous: bool,
}

//! Table matching
//!
//! Pure ranking and classification of candidate tables against one
//! position fix. No I/O: the caller supplies the candidate list.

use shared::models::{Coordinate, DiningTable, SignalMethod, TableHit};

use crate::config::ClientConfig;
use crate::geo::distance::haversine_m;
use crate::resolve::types::{Confidence, DisambiguationSet, ResolutionCandidate};

/// Matching thresholds
#[derive(Debug, Clone, Copy)]
pub struct MatchParams {
    /// Distances closer together than this are a GPS tie
    pub ambiguity_epsilon_m: f64,
    /// Outer bound for offering a table at all
    pub fallback_radius_m: f64,
}

impl From<&ClientConfig> for MatchParams {
    fn from(config: &ClientConfig) -> Self {
        Self {
            ambiguity_epsilon_m: config.ambiguity_epsilon_m,
            fallback_radius_m: config.fallback_radius_m,
        }
    }
}

/// Outcome of matching a position fix against candidate tables
#[derive(Debug, Clone)]
pub enum TableMatch {
    /// Exactly one plausible table
    Matched(ResolutionCandidate),
    /// Several plausible tables; a human must choose
    NeedsSelection(DisambiguationSet),
    /// Nothing within the fallback radius (distinct from ambiguous and
    /// from out-of-zone)
    NoneNearby,
}

impl TableMatch {
    pub fn confidence(&self) -> Confidence {
        match self {
            TableMatch::Matched(candidate) => candidate.confidence,
            TableMatch::NeedsSelection(_) => Confidence::Ambiguous,
            TableMatch::NoneNearby => Confidence::None,
        }
    }
}

/// Rank `tables` by distance from `coord` and classify the result.
///
/// A single high-confidence match requires the closest table to be inside
/// its own detection radius with a clear gap (at least the ambiguity
/// epsilon) to the runner-up. A tie under the epsilon, or more than one
/// table inside its detection radius, always yields the full ranked list:
/// nearest-under-ambiguity is not reliable, so nothing is auto-selected.
pub fn match_tables(
    coord: &Coordinate,
    tables: &[DiningTable],
    params: &MatchParams,
) -> TableMatch {
    let mut hits: Vec<TableHit> = tables
        .iter()
        .map(|table| TableHit {
            distance_m: haversine_m(coord, &table.location),
            table: table.clone(),
        })
        .collect();
    hits.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    hits.retain(|hit| hit.distance_m <= params.fallback_radius_m);

    if hits.is_empty() {
        return TableMatch::NoneNearby;
    }

    let in_own_radius = hits
        .iter()
        .filter(|hit| hit.distance_m <= hit.table.detection_radius_m)
        .count();
    let gps_tie = hits.len() >= 2
        && (hits[1].distance_m - hits[0].distance_m) < params.ambiguity_epsilon_m;

    if gps_tie || in_own_radius >= 2 {
        return TableMatch::NeedsSelection(DisambiguationSet {
            options: hits,
            gps_ambiguous: gps_tie,
        });
    }

    let closest = hits.swap_remove(0);
    let confidence = if closest.distance_m <= closest.table.detection_radius_m {
        Confidence::High
    } else {
        Confidence::Low
    };
    TableMatch::Matched(ResolutionCandidate {
        table: closest.table,
        distance_m: Some(closest.distance_m),
        method: SignalMethod::Geo,
        confidence,
    })
}

//! Resolution arbitration
//!
//! Decides, from a classified match, whether to proceed automatically or
//! hand the ranked list to a human. Only high confidence auto-confirms;
//! everything else needs an explicit choice, because nearest-under-
//! ambiguity is not reliable.

use shared::models::TableHit;

use crate::error::{CheckInError, CheckInResult};
use crate::geo::matcher::TableMatch;
use crate::resolve::types::{Confidence, DisambiguationSet, ResolutionCandidate};

/// Arbitration outcome
#[derive(Debug, Clone)]
pub enum Arbitration {
    /// Proceed with this table
    Confirmed(ResolutionCandidate),
    /// Present the ranked list and wait for a selection.
    ///
    /// `suggest_qr` is set when the set is GPS-ambiguous: re-sampling the
    /// position cannot help, so the guidance should steer the customer
    /// toward scanning the table's QR code instead.
    NeedsSelection {
        set: DisambiguationSet,
        suggest_qr: bool,
    },
}

/// Arbitrate a classified table match
pub fn arbitrate(outcome: TableMatch) -> CheckInResult<Arbitration> {
    match outcome {
        TableMatch::Matched(candidate) if candidate.confidence == Confidence::High => {
            tracing::debug!(table = candidate.table.number, "auto-confirming table");
            Ok(Arbitration::Confirmed(candidate))
        }
        TableMatch::Matched(candidate) => match candidate.distance_m {
            // Low confidence: offer the single candidate for confirmation,
            // with the distance it was ranked at
            Some(distance_m) => Ok(Arbitration::NeedsSelection {
                set: DisambiguationSet {
                    options: vec![TableHit {
                        distance_m,
                        table: candidate.table,
                    }],
                    gps_ambiguous: false,
                },
                suggest_qr: false,
            }),
            // A low-confidence candidate without a measured distance cannot
            // be ranked for the customer; a different signal has to decide
            None => Err(CheckInError::Ambiguous),
        },
        TableMatch::NeedsSelection(set) => {
            let suggest_qr = set.gps_ambiguous;
            if suggest_qr {
                tracing::info!(
                    options = set.options.len(),
                    "GPS cannot discriminate between tables, steering to QR"
                );
            }
            Ok(Arbitration::NeedsSelection { set, suggest_qr })
        }
        TableMatch::NoneNearby => Err(CheckInError::NoNearbyTable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Coordinate, DiningTable, SignalMethod};

    fn table(number: i64) -> DiningTable {
        DiningTable {
            id: format!("t{number}"),
            number,
            capacity: 4,
            location: Coordinate::new(41.3851, 2.1734, 5.0),
            detection_radius_m: 3.0,
        }
    }

    fn candidate(number: i64, confidence: Confidence) -> ResolutionCandidate {
        ResolutionCandidate {
            table: table(number),
            distance_m: Some(1.0),
            method: SignalMethod::Geo,
            confidence,
        }
    }

    #[test]
    fn high_confidence_auto_confirms() {
        let arb = arbitrate(TableMatch::Matched(candidate(5, Confidence::High))).unwrap();
        match arb {
            Arbitration::Confirmed(c) => assert_eq!(c.table.number, 5),
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn low_confidence_needs_selection() {
        let arb = arbitrate(TableMatch::Matched(candidate(2, Confidence::Low))).unwrap();
        match arb {
            Arbitration::NeedsSelection { set, suggest_qr } => {
                assert_eq!(set.options.len(), 1);
                assert!(!suggest_qr);
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn low_confidence_selection_carries_the_measured_distance() {
        let mut weak = candidate(2, Confidence::Low);
        weak.distance_m = Some(7.5);
        let arb = arbitrate(TableMatch::Matched(weak)).unwrap();
        match arb {
            Arbitration::NeedsSelection { set, .. } => {
                assert_eq!(set.options[0].distance_m, 7.5);
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn low_confidence_without_a_distance_is_ambiguous() {
        let mut weak = candidate(2, Confidence::Low);
        weak.distance_m = None;
        let err = arbitrate(TableMatch::Matched(weak)).unwrap_err();
        assert!(matches!(err, CheckInError::Ambiguous));
    }

    #[test]
    fn gps_ambiguous_set_suggests_qr() {
        let set = DisambiguationSet {
            options: vec![
                TableHit {
                    table: table(3),
                    distance_m: 0.1,
                },
                TableHit {
                    table: table(4),
                    distance_m: 0.1,
                },
            ],
            gps_ambiguous: true,
        };
        let arb = arbitrate(TableMatch::NeedsSelection(set)).unwrap();
        match arb {
            Arbitration::NeedsSelection { set, suggest_qr } => {
                assert!(suggest_qr);
                assert_eq!(set.options.len(), 2);
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn none_nearby_is_a_distinct_error() {
        let err = arbitrate(TableMatch::NoneNearby).unwrap_err();
        assert!(matches!(err, CheckInError::NoNearbyTable));
    }
}

//! Temporal-conflict detection for candidate assignments.
//!
//! The rule flags a conflict only when an endpoint of the candidate interval
//! lies strictly inside an existing interval, both ends exclusive. Candidates
//! that exactly equal an existing interval, touch it at a boundary, or
//! enclose it entirely from outside therefore pass. This mirrors the
//! behaviour of the system this backend replaces and must not be tightened
//! without an explicit decision (see DESIGN.md).

use crate::domain::DateInterval;

/// Whether `candidate` can be added next to the worker's `existing`
/// intervals without a conflict.
///
/// Scans `existing` in order and stops at the first conflicting interval.
/// Per-worker assignment counts are expected to stay small, so a linear scan
/// over the full set is sufficient.
pub fn is_available(candidate: &DateInterval, existing: &[DateInterval]) -> bool {
    for taken in existing {
        if taken.contains_strictly(candidate.start()) || taken.contains_strictly(candidate.end()) {
            return false;
        }
    }
    true
}

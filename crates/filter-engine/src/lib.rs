//! Filter Engine
//!
//! Applies a conjunction of optional equality predicates over normalized
//! station records. Pure and order-preserving; all fuzziness lives upstream
//! in the normalizer, so matching here is exact and case-sensitive.

use station_model::{FilterCriteria, StationRecord};

/// Filter records against the criteria, preserving input order.
///
/// A record passes iff every constrained dimension equals the record's
/// derived value exactly. Criteria values never observed in the dataset are
/// not an error; they simply select nothing.
pub fn filter<'a>(
    records: &'a [StationRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a StationRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

/// Check a single record against every constrained dimension.
pub fn matches(record: &StationRecord, criteria: &FilterCriteria) -> bool {
    if let Some(region) = criteria.region {
        if record.region() != region {
            return false;
        }
    }

    // City and town both read the record's single locality field.
    if let Some(city) = criteria.city.as_deref() {
        if record.locality() != Some(city) {
            return false;
        }
    }
    if let Some(town) = criteria.town.as_deref() {
        if record.locality() != Some(town) {
            return false;
        }
    }

    if let Some(status) = criteria.status {
        if record.status_category() != status {
            return false;
        }
    }

    true
}

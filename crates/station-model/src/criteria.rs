//! Filter Criteria

use crate::region::RegionCode;
use crate::status::StatusCategory;
use serde::{Deserialize, Serialize};

/// A conjunction of optional equality predicates over derived record values.
///
/// `None` means "all" (no constraint) for that dimension. The `city` and
/// `town` dimensions both compare against the record's single locality
/// field; the upstream schema has no distinct city field, so the two are
/// intentionally synonymous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub region: Option<RegionCode>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub status: Option<StatusCategory>,
}

impl FilterCriteria {
    /// Create criteria with no constraints (every record passes).
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Check whether any dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.region.is_none()
            && self.city.is_none()
            && self.town.is_none()
            && self.status.is_none()
    }
}

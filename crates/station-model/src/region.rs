//! Canonical Region Codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical codes for Australian states and territories, plus a fallback
/// bucket for records whose region cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionCode {
    Vic,
    Nsw,
    Qld,
    Wa,
    Sa,
    Act,
    Tas,
    Nt,
    /// Terminal classification for absent or unrecognized region data.
    /// Not an error state.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl RegionCode {
    /// Every code in display order.
    pub const ALL: [RegionCode; 9] = [
        RegionCode::Vic,
        RegionCode::Nsw,
        RegionCode::Qld,
        RegionCode::Wa,
        RegionCode::Sa,
        RegionCode::Act,
        RegionCode::Tas,
        RegionCode::Nt,
        RegionCode::Unknown,
    ];

    /// Get the canonical string form written back into normalized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionCode::Vic => "VIC",
            RegionCode::Nsw => "NSW",
            RegionCode::Qld => "QLD",
            RegionCode::Wa => "WA",
            RegionCode::Sa => "SA",
            RegionCode::Act => "ACT",
            RegionCode::Tas => "TAS",
            RegionCode::Nt => "NT",
            RegionCode::Unknown => "Unknown",
        }
    }

    /// Get the full region name for human-readable output.
    pub fn full_name(&self) -> &'static str {
        match self {
            RegionCode::Vic => "Victoria",
            RegionCode::Nsw => "New South Wales",
            RegionCode::Qld => "Queensland",
            RegionCode::Wa => "Western Australia",
            RegionCode::Sa => "South Australia",
            RegionCode::Act => "Australian Capital Territory",
            RegionCode::Tas => "Tasmania",
            RegionCode::Nt => "Northern Territory",
            RegionCode::Unknown => "Unknown",
        }
    }

    /// Parse an exact canonical code (as produced by [`RegionCode::as_str`]).
    ///
    /// This is strict parsing for already-normalized values; free-text
    /// resolution lives in the normalizer's variant table.
    pub fn from_code(code: &str) -> Option<RegionCode> {
        Self::ALL.iter().copied().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

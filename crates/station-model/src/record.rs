//! Station Record Shapes
//!
//! Mirrors the provider's JSON layout (Open Charge Map style PascalCase
//! fields). Every group and field is optional; unknown provider fields are
//! ignored on deserialization.

use crate::region::RegionCode;
use crate::status::StatusCategory;
use serde::{Deserialize, Serialize};

/// One charging station as delivered by the upstream feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Provider-assigned identifier.
    #[serde(rename = "ID")]
    pub id: Option<i64>,
    #[serde(rename = "AddressInfo")]
    pub address: Option<AddressInfo>,
    #[serde(rename = "StatusType")]
    pub status: Option<StatusType>,
    #[serde(rename = "OperatorInfo")]
    pub operator: Option<OperatorInfo>,
}

/// Location fields of a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressInfo {
    /// Free-text region field. After normalization this always holds a
    /// canonical [`RegionCode`] string.
    #[serde(rename = "StateOrProvince")]
    pub state_or_province: Option<String>,
    /// Free-text locality (town/city) name. The normalizer may backfill this
    /// with salvaged region text.
    #[serde(rename = "Town")]
    pub town: Option<String>,
}

/// Operational status fields of a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusType {
    #[serde(rename = "IsOperational")]
    pub is_operational: Option<bool>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
}

/// Operator fields of a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorInfo {
    #[serde(rename = "Title")]
    pub title: Option<String>,
}

impl StationRecord {
    /// Derive the region code.
    ///
    /// Total: a missing address group or a value outside the canonical set
    /// resolves to [`RegionCode::Unknown`].
    pub fn region(&self) -> RegionCode {
        self.address
            .as_ref()
            .and_then(|a| a.state_or_province.as_deref())
            .and_then(RegionCode::from_code)
            .unwrap_or(RegionCode::Unknown)
    }

    /// Derive the locality name, if any. Both the city and town filter
    /// dimensions read this same field.
    pub fn locality(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.town.as_deref())
    }

    /// Derive the operator title, if any.
    pub fn operator_title(&self) -> Option<&str> {
        self.operator.as_ref().and_then(|o| o.title.as_deref())
    }

    /// Derive the status category via [`StatusCategory::classify`].
    pub fn status_category(&self) -> StatusCategory {
        StatusCategory::classify(self.status.as_ref())
    }
}

//! Status Category Classification

use crate::record::StatusType;
use serde::{Deserialize, Serialize};

/// Derived operational classification of a station.
///
/// Computed on demand from the record's status group; never written back
/// onto the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Operational,
    Planned,
    Unknown,
}

impl StatusCategory {
    /// Every category in display order.
    pub const ALL: [StatusCategory; 3] = [
        StatusCategory::Operational,
        StatusCategory::Planned,
        StatusCategory::Unknown,
    ];

    /// Get the string representation used in filter values and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Operational => "operational",
            StatusCategory::Planned => "planned",
            StatusCategory::Unknown => "unknown",
        }
    }

    /// Parse an exact category string (as produced by [`StatusCategory::as_str`]).
    pub fn parse(value: &str) -> Option<StatusCategory> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Classify a status group into a category.
    ///
    /// The operational flag wins over everything else: a station flagged
    /// operational is `Operational` even when its title mentions planning.
    /// Otherwise a title containing "plan" (case-insensitive) is `Planned`,
    /// and anything else, including a missing group, is `Unknown`.
    pub fn classify(status: Option<&StatusType>) -> StatusCategory {
        match status {
            Some(s) if s.is_operational == Some(true) => StatusCategory::Operational,
            Some(s) => match s.title.as_deref() {
                Some(title) if title.to_lowercase().contains("plan") => StatusCategory::Planned,
                _ => StatusCategory::Unknown,
            },
            None => StatusCategory::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(is_operational: Option<bool>, title: Option<&str>) -> StatusType {
        StatusType {
            is_operational,
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn test_operational_flag_wins() {
        let s = status(Some(true), Some("Planned upgrade"));
        assert_eq!(
            StatusCategory::classify(Some(&s)),
            StatusCategory::Operational
        );
    }

    #[test]
    fn test_planned_from_title_substring() {
        let s = status(Some(false), Some("Planned For Future Date"));
        assert_eq!(StatusCategory::classify(Some(&s)), StatusCategory::Planned);

        let s = status(None, Some("PLANNING approval granted"));
        assert_eq!(StatusCategory::classify(Some(&s)), StatusCategory::Planned);
    }

    #[test]
    fn test_unknown_for_everything_else() {
        assert_eq!(StatusCategory::classify(None), StatusCategory::Unknown);

        let s = status(None, None);
        assert_eq!(StatusCategory::classify(Some(&s)), StatusCategory::Unknown);

        let s = status(Some(false), Some("Temporarily Unavailable"));
        assert_eq!(StatusCategory::classify(Some(&s)), StatusCategory::Unknown);
    }

    #[test]
    fn test_parse_exact_values() {
        assert_eq!(
            StatusCategory::parse("operational"),
            Some(StatusCategory::Operational)
        );
        assert_eq!(StatusCategory::parse("planned"), Some(StatusCategory::Planned));
        assert_eq!(StatusCategory::parse("Operational"), None);
        assert_eq!(StatusCategory::parse("all"), None);
    }
}

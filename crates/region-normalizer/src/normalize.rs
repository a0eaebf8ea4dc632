//! In-Place Record Canonicalization

use crate::table::resolve_variant;
use station_model::{RegionCode, StationRecord};
use tracing::debug;

/// Normalize every record's region field in place.
///
/// Per-record and order-independent; running it again over already
/// normalized records is a no-op.
pub fn normalize(records: &mut [StationRecord]) {
    for record in records.iter_mut() {
        normalize_record(record);
    }
}

/// Canonicalize a single record.
///
/// The raw region text is trimmed, lowercased, and resolved against the
/// variant table. A miss on non-empty text triggers locality salvage: the
/// raw string was most likely a misfiled town name, so it is moved into an
/// empty (or literal "unknown") locality field before the region settles on
/// Unknown. The canonical code always overwrites the raw field. Records
/// without an address group are left untouched.
pub fn normalize_record(record: &mut StationRecord) {
    let Some(address) = record.address.as_mut() else {
        return;
    };

    let raw = address
        .state_or_province
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();

    let code = match resolve_variant(&raw.to_lowercase()) {
        Some(code) => code,
        None if raw.is_empty() => RegionCode::Unknown,
        None => {
            if locality_is_vacant(address.town.as_deref()) {
                debug!(salvaged = %raw, "moving unrecognized region text into locality");
                address.town = Some(raw);
            }
            RegionCode::Unknown
        }
    };

    address.state_or_province = Some(code.as_str().to_string());
}

/// A locality is vacant when it is absent, blank, or the literal "unknown".
fn locality_is_vacant(town: Option<&str>) -> bool {
    match town {
        None => true,
        Some(t) => {
            let t = t.trim();
            t.is_empty() || t.eq_ignore_ascii_case("unknown")
        }
    }
}

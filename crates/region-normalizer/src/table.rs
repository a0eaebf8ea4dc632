//! Region Variant Table
//!
//! Closed sets of accepted lowercase spellings for each canonical region
//! code, including misspellings observed in the upstream feed. Kept as data
//! so the table can be tested independently of the matching function.

use station_model::RegionCode;

/// Accepted lowercase variants per canonical code.
///
/// Each code's own canonical form is listed first, which is what makes
/// normalization idempotent: a second pass re-resolves "vic" to Vic and
/// "unknown" to Unknown without touching the record again.
const VARIANTS: &[(RegionCode, &[&str])] = &[
    (RegionCode::Vic, &["vic", "victoria"]),
    (
        RegionCode::Nsw,
        &["nsw", "new south wales", "new south wells"],
    ),
    (RegionCode::Qld, &["qld", "queensland", "queenland"]),
    (
        RegionCode::Wa,
        &["wa", "western australia", "western autralia"],
    ),
    (RegionCode::Sa, &["sa", "south australia"]),
    (
        RegionCode::Act,
        &["act", "australian capital territory", "a.c.t."],
    ),
    (RegionCode::Tas, &["tas", "tasmania"]),
    (RegionCode::Nt, &["nt", "northern territory"]),
    (RegionCode::Unknown, &["unknown"]),
];

/// Resolve a raw region string against the variant table.
///
/// The input must already be trimmed and lowercased; matching is exact
/// against the closed variant sets, never fuzzy. Returns `None` for any
/// string outside the table.
pub fn resolve_variant(raw: &str) -> Option<RegionCode> {
    VARIANTS
        .iter()
        .find(|(_, variants)| variants.contains(&raw))
        .map(|(code, _)| *code)
}

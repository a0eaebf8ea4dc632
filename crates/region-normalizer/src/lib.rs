//! Region Normalization
//!
//! Canonicalizes the free-text region field of station records against a
//! static variant table, salvaging misfiled locality text along the way.
//! Unknown is a valid terminal classification here, never an error.

mod normalize;
mod table;

pub use normalize::{normalize, normalize_record};
pub use table::resolve_variant;

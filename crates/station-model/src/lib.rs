//! Station Domain Model
//!
//! Record shapes for charging-station data as delivered by the upstream
//! provider, plus the derived classifications (region code, status category)
//! shared by the filtering and aggregation stages.

mod criteria;
mod record;
mod region;
mod status;

pub use criteria::FilterCriteria;
pub use record::{AddressInfo, OperatorInfo, StationRecord, StatusType};
pub use region::RegionCode;
pub use status::StatusCategory;

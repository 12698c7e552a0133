pub mod bin_normalization;
pub mod catchment_assignment;
pub mod isochrone_error;
pub mod origin_id;
pub mod overlap_report;
pub mod saved_isochrone;
pub mod time_bin;

pub use bin_normalization::BinNormalizationMap;
pub use catchment_assignment::{CatchmentAssignment, CellAssignment};
pub use isochrone_error::IsochroneError;
pub use origin_id::OriginId;
pub use overlap_report::OverlapReport;
pub use saved_isochrone::{validate_isochrones, SavedIsochrone};
pub use time_bin::TimeBin;

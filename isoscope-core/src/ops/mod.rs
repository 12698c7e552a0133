pub mod catchment_ops;
pub mod overlap_ops;
pub mod summary_ops;

pub use catchment_ops::compute_system_optimal_catchments;
pub use overlap_ops::compute_overlap_per_bin;
pub use summary_ops::{catchment_geometry, summarize_catchments, CatchmentSummary};

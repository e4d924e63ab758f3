use thiserror::Error;

use tourhub_tourapi::TourApiError;

/// Errors returned by the stats aggregation layer.
///
/// Individual branch failures inside a fan-out never surface here; they are
/// absorbed as missing data. These variants mark the points where an entire
/// logical group failed and no usable aggregate remains.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The region list fetch (or another prerequisite call) failed.
    #[error("tour API error: {0}")]
    Api(#[from] TourApiError),

    /// Every one of the per-region count probes failed.
    #[error("all {attempted} region count requests failed")]
    AllRegionsFailed { attempted: usize },

    /// Every category was dropped because its region fan-out failed entirely.
    #[error("all {attempted} category sums failed")]
    AllCategoriesFailed { attempted: usize },
}

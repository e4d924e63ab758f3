//! Dashboard statistics over the tour information API.
//!
//! A single logical dashboard query fans out into many concurrent upstream
//! calls: one count probe per region, and one per region per category. Each
//! probe requests a single row purely to read the envelope's `totalCount`,
//! using it as an O(1) cardinality oracle instead of paging through records.
//!
//! The failure policy is degrade-gracefully, not fail-fast: every branch is
//! allowed to settle, failed branches are dropped (or counted as zero) with
//! a logged warning, and an aggregate only fails when an entire logical
//! group failed. No branch cancels its siblings, and the aggregator adds no
//! timeout of its own; each branch is bounded only by the HTTP client's
//! request timeout.

pub mod categories;
pub mod error;
pub mod types;

mod category;
mod region;
mod summary;

pub use categories::{ContentType, CONTENT_TYPES};
pub use category::category_stats;
pub use error::StatsError;
pub use region::region_stats;
pub use summary::stats_summary;
pub use types::{CategoryStat, RegionStat, StatsSummary};

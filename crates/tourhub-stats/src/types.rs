use chrono::{DateTime, Utc};

/// Count of places in one region. Derived, recomputed per dashboard load,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStat {
    pub code: String,
    pub name: String,
    pub count: u64,
}

/// Count of places in one content category across all regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStat {
    pub id: String,
    pub name: String,
    pub count: u64,
}

/// Aggregate for the dashboard header, valid only for the request that
/// produced it.
#[derive(Debug, Clone)]
pub struct StatsSummary {
    /// Sum of the per-category counts. A place carrying several categories
    /// is counted once per category, so this can exceed the distinct-place
    /// total derived from region counts. Known approximation, kept as-is.
    pub total_count: u64,
    /// At most three regions, descending by count.
    pub top_regions: Vec<RegionStat>,
    /// At most three categories, descending by count.
    pub top_categories: Vec<CategoryStat>,
    pub computed_at: DateTime<Utc>,
}

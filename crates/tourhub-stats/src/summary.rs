//! Combined dashboard summary.

use chrono::Utc;

use tourhub_tourapi::{KeyTier, TourApiClient};

use crate::category::category_stats;
use crate::error::StatsError;
use crate::region::region_stats;
use crate::types::StatsSummary;

/// Builds the dashboard summary: top regions, top categories, and a grand
/// total.
///
/// Region and category aggregation run concurrently; either side failing
/// outright fails the summary. The grand total is the sum of category
/// counts, not the distinct-place count (see [`StatsSummary::total_count`]).
///
/// # Errors
///
/// Propagates the first failure from [`region_stats`] or [`category_stats`].
pub async fn stats_summary(
    client: &TourApiClient,
    tier: KeyTier,
) -> Result<StatsSummary, StatsError> {
    let (regions, categories) =
        tokio::join!(region_stats(client, tier), category_stats(client, tier));
    let regions = regions?;
    let categories = categories?;

    let total_count = categories.iter().map(|category| category.count).sum();

    Ok(StatsSummary {
        total_count,
        top_regions: regions.into_iter().take(3).collect(),
        top_categories: categories.into_iter().take(3).collect(),
        computed_at: Utc::now(),
    })
}

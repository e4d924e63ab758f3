//! Per-category place counts, summed across all regions.

use futures::future::join_all;

use tourhub_tourapi::{KeyTier, TourApiClient};

use crate::categories::CONTENT_TYPES;
use crate::error::StatsError;
use crate::region::fetch_area_count;
use crate::types::CategoryStat;

/// Computes the place count for every fixed category.
///
/// This is a nested fan-out: the outer layer spans the category table, the
/// inner layer spans every region, and all `|categories| * |regions|` probes
/// run concurrently. Failure policy is fail-soft at the innermost
/// granularity: a failed region probe contributes 0 to its category's sum,
/// while a category whose probes all failed is dropped entirely. The call
/// fails only when every category was dropped.
///
/// # Errors
///
/// - [`StatsError::Api`] if the region list itself cannot be fetched.
/// - [`StatsError::AllCategoriesFailed`] if every category was dropped.
pub async fn category_stats(
    client: &TourApiClient,
    tier: KeyTier,
) -> Result<Vec<CategoryStat>, StatsError> {
    let regions = client.area_codes(tier).await?.items;
    let attempted = CONTENT_TYPES.len();

    let sums = CONTENT_TYPES.iter().map(|content_type| {
        let regions = &regions;
        async move {
            let per_region = join_all(regions.iter().map(|region| async move {
                fetch_area_count(client, tier, &region.code, Some(content_type.id))
                    .await
                    .map_err(|err| {
                        tracing::warn!(
                            category = content_type.id,
                            region = %region.code,
                            error = %err,
                            "counting 0 for failed region in category sum"
                        );
                    })
            }))
            .await;

            let failed = per_region.iter().filter(|probe| probe.is_err()).count();
            if !regions.is_empty() && failed == regions.len() {
                tracing::warn!(
                    category = content_type.id,
                    "dropping category from stats: every region probe failed"
                );
                return None;
            }

            let count: u64 = per_region.into_iter().map(|probe| probe.unwrap_or(0)).sum();
            Some(CategoryStat {
                id: content_type.id.to_owned(),
                name: content_type.name.to_owned(),
                count,
            })
        }
    });

    let mut stats: Vec<CategoryStat> = join_all(sums).await.into_iter().flatten().collect();

    if stats.is_empty() {
        return Err(StatsError::AllCategoriesFailed { attempted });
    }

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(stats)
}

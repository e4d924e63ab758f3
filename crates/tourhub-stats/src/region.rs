//! Per-region place counts.

use futures::future::join_all;

use tourhub_tourapi::{AreaListParams, KeyTier, TourApiClient, TourApiError};

use crate::error::StatsError;
use crate::types::RegionStat;

/// Computes the place count for every region.
///
/// Fetches the region list once, then probes every region concurrently.
/// A region whose probe fails is dropped from the result with a warning;
/// the call as a whole fails only when every probe failed.
///
/// The result is sorted descending by count. The sort is stable, so regions
/// with equal counts keep the upstream's enumeration order.
///
/// # Errors
///
/// - [`StatsError::Api`] if the region list itself cannot be fetched.
/// - [`StatsError::AllRegionsFailed`] if no region probe succeeded.
pub async fn region_stats(
    client: &TourApiClient,
    tier: KeyTier,
) -> Result<Vec<RegionStat>, StatsError> {
    let regions = client.area_codes(tier).await?.items;
    let attempted = regions.len();

    let probes = regions.iter().map(|region| async move {
        match fetch_area_count(client, tier, &region.code, None).await {
            Ok(count) => Some(RegionStat {
                code: region.code.clone(),
                name: region.name.clone(),
                count,
            }),
            Err(err) => {
                tracing::warn!(
                    region = %region.code,
                    error = %err,
                    "dropping region from stats after count failure"
                );
                None
            }
        }
    });

    let mut stats: Vec<RegionStat> = join_all(probes).await.into_iter().flatten().collect();

    if stats.is_empty() && attempted > 0 {
        return Err(StatsError::AllRegionsFailed { attempted });
    }

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(stats)
}

/// Reads the upstream-reported total for one region (optionally narrowed to
/// one category) by requesting a single row and taking the envelope's
/// `totalCount` instead of paging through records.
pub(crate) async fn fetch_area_count(
    client: &TourApiClient,
    tier: KeyTier,
    area_code: &str,
    content_type_id: Option<&str>,
) -> Result<u64, TourApiError> {
    let params = AreaListParams {
        area_code: Some(area_code.to_owned()),
        content_type_id: content_type_id.map(str::to_owned),
        num_of_rows: 1,
        page_no: 1,
        ..AreaListParams::default()
    };
    let listing = client.area_based_list(tier, &params).await?;
    Ok(listing.total_count.unwrap_or_default())
}

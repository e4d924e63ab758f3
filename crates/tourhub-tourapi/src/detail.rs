//! Detail endpoints for the Tour API client.
//!
//! The four detail sub-resources share one shape: a single-record envelope
//! keyed by content id. The upstream serializes the lone record as a bare
//! object, which the normalizer wraps into a one-element list; these
//! methods unwrap that list back into the record.

use crate::client::{KeyTier, TourApiClient};
use crate::error::TourApiError;
use crate::types::{Listing, PetTourInfo, TourDetail, TourImage, TourIntro};

impl TourApiClient {
    /// Fetches the common detail record (address, overview, homepage) for a
    /// content id.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`TourApiClient::area_codes`]; additionally
    /// [`TourApiError::NoData`] when the upstream returns an empty record
    /// list for the id.
    pub async fn detail_common(
        &self,
        tier: KeyTier,
        content_id: &str,
    ) -> Result<TourDetail, TourApiError> {
        let url = self.build_url("detailCommon2", tier, &[("contentId", content_id)])?;
        let listing: Listing<TourDetail> = self.fetch_listing(url, "detailCommon2").await?;
        Self::first_item(listing, "detailCommon2")
    }

    /// Fetches category-specific intro fields (hours, fees, parking) for a
    /// content id. The upstream requires the content type id alongside.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`TourApiClient::detail_common`].
    pub async fn detail_intro(
        &self,
        tier: KeyTier,
        content_id: &str,
        content_type_id: &str,
    ) -> Result<TourIntro, TourApiError> {
        let url = self.build_url(
            "detailIntro2",
            tier,
            &[
                ("contentId", content_id),
                ("contentTypeId", content_type_id),
            ],
        )?;
        let listing: Listing<TourIntro> = self.fetch_listing(url, "detailIntro2").await?;
        Self::first_item(listing, "detailIntro2")
    }

    /// Fetches the image list for a content id.
    ///
    /// Returns the full listing; a place with one image still yields a
    /// one-element list.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`TourApiClient::area_codes`].
    pub async fn detail_images(
        &self,
        tier: KeyTier,
        content_id: &str,
    ) -> Result<Listing<TourImage>, TourApiError> {
        let url = self.build_url(
            "detailImage2",
            tier,
            &[("contentId", content_id), ("imageYN", "Y")],
        )?;
        self.fetch_listing(url, "detailImage2").await
    }

    /// Fetches pet-accompaniment info for a content id.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`TourApiClient::area_codes`].
    pub async fn detail_pet_info(
        &self,
        tier: KeyTier,
        content_id: &str,
    ) -> Result<Listing<PetTourInfo>, TourApiError> {
        let url = self.build_url("detailPetTour2", tier, &[("contentId", content_id)])?;
        self.fetch_listing(url, "detailPetTour2").await
    }

    fn first_item<T>(listing: Listing<T>, context: &str) -> Result<T, TourApiError> {
        listing
            .items
            .into_iter()
            .next()
            .ok_or_else(|| TourApiError::NoData {
                context: context.to_owned(),
            })
    }
}

//! Tour API domain types.
//!
//! All wire types model the JSON records returned by the upstream tour
//! information service. Field names on the wire are lowercase concatenations
//! (`contentid`, `firstimage`); everything optional in practice carries
//! `#[serde(default)]` because the upstream freely omits fields per record.

use serde::Deserialize;

/// Success payload of every list-shaped operation.
///
/// `total_count` reflects the upstream-reported total for the unfiltered
/// query, which can diverge from `items.len()` (pagination, client-side
/// deduplication). It is the field the stats layer reads as an O(1)
/// cardinality oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total_count: Option<u64>,
}

/// One upstream content record (place, festival, course, ...).
///
/// Identity key is `content_id`; records are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TourItem {
    #[serde(rename = "contentid")]
    pub content_id: String,
    #[serde(rename = "contenttypeid", default)]
    pub content_type_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub addr1: String,
    #[serde(default)]
    pub addr2: Option<String>,
    #[serde(rename = "areacode", default)]
    pub area_code: Option<String>,
    /// Raw fixed-point longitude as sent by the upstream. Convert with
    /// [`crate::geo::to_geo`].
    #[serde(default)]
    pub mapx: Option<String>,
    /// Raw fixed-point latitude as sent by the upstream.
    #[serde(default)]
    pub mapy: Option<String>,
    #[serde(rename = "firstimage", default)]
    pub first_image: Option<String>,
    #[serde(rename = "firstimage2", default)]
    pub first_image2: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default)]
    pub cat1: Option<String>,
    #[serde(default)]
    pub cat2: Option<String>,
    #[serde(default)]
    pub cat3: Option<String>,
    #[serde(rename = "modifiedtime", default)]
    pub modified_time: Option<String>,
}

/// Full detail for a single record returned by `detailCommon2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TourDetail {
    #[serde(rename = "contentid")]
    pub content_id: String,
    #[serde(rename = "contenttypeid", default)]
    pub content_type_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub addr1: String,
    #[serde(default)]
    pub addr2: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
    /// Raw HTML anchor markup; the upstream does not send a bare URL.
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(rename = "firstimage", default)]
    pub first_image: Option<String>,
    #[serde(rename = "areacode", default)]
    pub area_code: Option<String>,
    #[serde(default)]
    pub mapx: Option<String>,
    #[serde(default)]
    pub mapy: Option<String>,
    #[serde(rename = "modifiedtime", default)]
    pub modified_time: Option<String>,
}

/// Category-specific intro fields from `detailIntro2`.
///
/// The upstream varies the field set by content type; only the fields the
/// pages actually render are modeled, all optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TourIntro {
    #[serde(rename = "contentid")]
    pub content_id: String,
    #[serde(rename = "contenttypeid", default)]
    pub content_type_id: Option<String>,
    #[serde(rename = "infocenter", default)]
    pub info_center: Option<String>,
    #[serde(rename = "restdate", default)]
    pub rest_date: Option<String>,
    #[serde(rename = "usetime", default)]
    pub use_time: Option<String>,
    #[serde(rename = "usefee", default)]
    pub use_fee: Option<String>,
    #[serde(default)]
    pub parking: Option<String>,
}

/// One image record from `detailImage2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TourImage {
    #[serde(rename = "contentid", default)]
    pub content_id: Option<String>,
    #[serde(rename = "originimgurl", default)]
    pub origin_img_url: Option<String>,
    #[serde(rename = "smallimageurl", default)]
    pub small_image_url: Option<String>,
    #[serde(rename = "imgname", default)]
    pub img_name: Option<String>,
    #[serde(rename = "serialnum", default)]
    pub serial_num: Option<String>,
}

/// Pet-accompaniment info from `detailPetTour2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PetTourInfo {
    #[serde(rename = "contentid", default)]
    pub content_id: Option<String>,
    #[serde(rename = "acmpyTypeCd", default)]
    pub accompany_type: Option<String>,
    #[serde(rename = "acmpyPsblCpam", default)]
    pub accompany_possible: Option<String>,
    #[serde(rename = "acmpyNeedMtr", default)]
    pub accompany_requirements: Option<String>,
    #[serde(rename = "relaPosesFclty", default)]
    pub related_facilities: Option<String>,
    #[serde(rename = "relaRntlPrdlst", default)]
    pub rental_products: Option<String>,
    #[serde(rename = "etcAcmpyInfo", default)]
    pub etc_info: Option<String>,
}

/// One region entry from `areaCode2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AreaCode {
    #[serde(default)]
    pub rnum: Option<u32>,
    pub code: String,
    pub name: String,
}

/// Parameters for `areaBasedList2`.
#[derive(Debug, Clone)]
pub struct AreaListParams {
    pub area_code: Option<String>,
    pub sigungu_code: Option<String>,
    pub content_type_id: Option<String>,
    pub num_of_rows: u32,
    pub page_no: u32,
    /// Upstream sort selector (`"C"` = last modified, `"O"` = title with
    /// image first, ...). `None` leaves the upstream default.
    pub arrange: Option<String>,
}

impl Default for AreaListParams {
    fn default() -> Self {
        Self {
            area_code: None,
            sigungu_code: None,
            content_type_id: None,
            num_of_rows: 12,
            page_no: 1,
            arrange: Some("C".to_owned()),
        }
    }
}

/// Parameters for `searchKeyword2`.
#[derive(Debug, Clone)]
pub struct KeywordParams {
    pub keyword: String,
    pub area_code: Option<String>,
    pub content_type_id: Option<String>,
    pub num_of_rows: u32,
    pub page_no: u32,
}

impl KeywordParams {
    /// Convenience constructor with the page-size defaults the UI uses.
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            area_code: None,
            content_type_id: None,
            num_of_rows: 12,
            page_no: 1,
        }
    }
}

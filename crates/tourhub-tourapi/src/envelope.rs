//! Tour API response envelope and normalization.
//!
//! Every upstream response is wrapped as
//! `{"response": {"header": {...}, "body": {...}}}`. The header carries a
//! result code/message pair; the body carries the items plus pagination
//! metadata. [`normalize`] validates the envelope and flattens the body's
//! single-object-or-array `items` quirk into a uniform [`Listing`].

use serde::Deserialize;

use crate::error::{result_code_message, TourApiError};
use crate::types::Listing;

/// Header result code signalling success.
pub(crate) const RESULT_OK: &str = "0000";

/// Top-level wrapper for all Tour API responses.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: ResponseEnvelope<T>,
}

/// The header/body pair inside the top-level wrapper.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ResponseEnvelope<T> {
    pub header: EnvelopeHeader,
    #[serde(default)]
    pub body: Option<EnvelopeBody<T>>,
}

/// Result code and message for the whole response.
///
/// `result_code` is `"0000"` on success; any other value is an upstream
/// application error, regardless of the HTTP status.
#[derive(Debug, Deserialize)]
pub struct EnvelopeHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

/// Response body: items plus pagination metadata.
///
/// `total_count` is the upstream-reported total for the unfiltered query,
/// not the length of the returned page. When the query matches nothing the
/// upstream omits `items` entirely rather than sending an empty array.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct EnvelopeBody<T> {
    #[serde(default)]
    pub items: Option<ItemsField<T>>,
    #[serde(rename = "numOfRows", default)]
    pub num_of_rows: Option<u32>,
    #[serde(rename = "pageNo", default)]
    pub page_no: Option<u32>,
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u64>,
}

/// The `items` wrapper: `{"item": T}` or `{"item": [T, ...]}`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ItemsField<T> {
    #[serde(default)]
    pub item: Option<OneOrMany<T>>,
}

/// A field the upstream serializes as a bare object when there is exactly
/// one record and as an array otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Validates an envelope and flattens its items into a [`Listing`].
///
/// `context` names the operation for error messages.
///
/// # Errors
///
/// - [`TourApiError::Upstream`] if `resultCode != "0000"`, carrying the raw
///   code and the curated sentence for it.
/// - [`TourApiError::NoData`] if the result code is `"0000"` but the body or
///   its `items` field is absent. An explicitly empty item array is NOT an
///   error; it normalizes to an empty listing.
pub fn normalize<T>(envelope: ApiEnvelope<T>, context: &str) -> Result<Listing<T>, TourApiError> {
    let ResponseEnvelope { header, body } = envelope.response;

    if header.result_code != RESULT_OK {
        return Err(TourApiError::Upstream {
            message: result_code_message(&header.result_code),
            code: header.result_code,
        });
    }

    let Some(body) = body else {
        return Err(TourApiError::NoData {
            context: context.to_owned(),
        });
    };

    let total_count = body.total_count;
    let items = match body.items.and_then(|wrapper| wrapper.item) {
        None => {
            return Err(TourApiError::NoData {
                context: context.to_owned(),
            })
        }
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
    };

    Ok(Listing { items, total_count })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
    }

    fn parse(json: &str) -> ApiEnvelope<Record> {
        serde_json::from_str(json).expect("test envelope should parse")
    }

    #[test]
    fn single_object_items_and_prewrapped_array_normalize_identically() {
        let single = parse(
            r#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"},
                "body":{"items":{"item":{"id":"42"}},"totalCount":1}}}"#,
        );
        let wrapped = parse(
            r#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"},
                "body":{"items":{"item":[{"id":"42"}]},"totalCount":1}}}"#,
        );

        let a = normalize(single, "test").unwrap();
        let b = normalize(wrapped, "test").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.items.len(), 1);
        assert_eq!(a.items[0].id, "42");
    }

    #[test]
    fn total_count_is_carried_from_the_body() {
        let envelope = parse(
            r#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"},
                "body":{"items":{"item":[{"id":"1"},{"id":"2"}]},"numOfRows":2,
                        "pageNo":1,"totalCount":45}}}"#,
        );
        let listing = normalize(envelope, "test").unwrap();
        assert_eq!(listing.items.len(), 2);
        assert_eq!(listing.total_count, Some(45));
    }

    #[test]
    fn absent_items_is_no_data_not_empty_success() {
        let envelope = parse(
            r#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"},
                "body":{"numOfRows":0,"pageNo":1,"totalCount":0}}}"#,
        );
        let result = normalize(envelope, "areaBasedList2");
        assert!(matches!(result, Err(TourApiError::NoData { .. })));
    }

    #[test]
    fn absent_body_is_no_data() {
        let envelope = parse(
            r#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"}}}"#,
        );
        let result = normalize(envelope, "test");
        assert!(matches!(result, Err(TourApiError::NoData { .. })));
    }

    #[test]
    fn empty_item_array_is_an_empty_listing() {
        let envelope = parse(
            r#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"},
                "body":{"items":{"item":[]},"totalCount":0}}}"#,
        );
        let listing = normalize(envelope, "test").unwrap();
        assert!(listing.items.is_empty());
        assert_eq!(listing.total_count, Some(0));
    }

    #[test]
    fn non_success_result_code_maps_to_curated_message() {
        let envelope = parse(
            r#"{"response":{"header":{"resultCode":"05","resultMsg":"LIMITED NUMBER OF SERVICE REQUESTS EXCEEDS ERROR"}}}"#,
        );
        let err = normalize(envelope, "test").unwrap_err();
        match err {
            TourApiError::Upstream { code, message } => {
                assert_eq!(code, "05");
                assert!(message.contains("quota"), "got: {message}");
                assert!(
                    !message.contains("LIMITED NUMBER"),
                    "raw upstream text must not leak: {message}"
                );
            }
            other => panic!("expected Upstream, got: {other:?}"),
        }
    }

    #[test]
    fn result_code_check_wins_over_missing_body() {
        let envelope =
            parse(r#"{"response":{"header":{"resultCode":"03","resultMsg":"whatever"}}}"#);
        let err = normalize(envelope, "test").unwrap_err();
        assert!(matches!(err, TourApiError::Upstream { ref code, .. } if code == "03"));
    }
}

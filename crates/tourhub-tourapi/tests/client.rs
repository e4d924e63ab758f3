//! Integration tests for `TourApiClient` using wiremock HTTP mocks.

use serde_json::json;
use tourhub_tourapi::{ErrorKind, KeyTier, KeywordParams, RetryPolicy, TourApiClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> TourApiClient {
    TourApiClient::with_base_url(
        "client-key",
        "server-key",
        "tourhub-test",
        30,
        // Zero delays keep retry-path tests fast; the schedule itself is
        // covered by unit tests on the policy.
        RetryPolicy {
            max_retries: 3,
            base_delay_ms: 0,
            max_delay_ms: 0,
        },
        base_url,
    )
    .expect("client construction should not fail")
}

fn ok_envelope(items: serde_json::Value, total_count: u64) -> serde_json::Value {
    json!({
        "response": {
            "header": {"resultCode": "0000", "resultMsg": "OK"},
            "body": {
                "items": {"item": items},
                "numOfRows": 20,
                "pageNo": 1,
                "totalCount": total_count
            }
        }
    })
}

#[tokio::test]
async fn area_based_list_returns_items_and_total_count() {
    let server = MockServer::start().await;

    let body = ok_envelope(
        json!([
            {
                "contentid": "2674675",
                "contenttypeid": "12",
                "title": "Gyeongbokgung Palace",
                "addr1": "161 Sajik-ro, Jongno-gu",
                "areacode": "1",
                "mapx": "1269770000",
                "mapy": "375796000",
                "firstimage": "https://img.example.com/palace.jpg",
                "modifiedtime": "20250101120000"
            },
            {
                "contentid": "1266400",
                "contenttypeid": "12",
                "title": "N Seoul Tower",
                "addr1": "105 Namsangongwon-gil",
                "areacode": "1",
                "mapx": "1269882300",
                "mapy": "375511700"
            }
        ]),
        45,
    );

    Mock::given(method("GET"))
        .and(path("/areaBasedList2"))
        .and(query_param("serviceKey", "client-key"))
        .and(query_param("areaCode", "1"))
        .and(query_param("numOfRows", "20"))
        .and(query_param("pageNo", "1"))
        .and(query_param("_type", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = tourhub_tourapi::AreaListParams {
        area_code: Some("1".to_owned()),
        num_of_rows: 20,
        ..Default::default()
    };
    let listing = client
        .area_based_list(KeyTier::Client, &params)
        .await
        .expect("should parse listing");

    assert_eq!(listing.items.len(), 2);
    assert_eq!(listing.total_count, Some(45));
    assert_eq!(listing.items[0].content_id, "2674675");
    assert_eq!(listing.items[0].title, "Gyeongbokgung Palace");
    assert_eq!(listing.items[1].content_id, "1266400");
    assert_eq!(listing.items[1].first_image, None);
}

#[tokio::test]
async fn persistent_503_is_retried_to_exhaustion() {
    let server = MockServer::start().await;

    // max_retries = 3, so 4 total attempts: initial + 3 retries.
    Mock::given(method("GET"))
        .and(path("/areaCode2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(4)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .area_codes(KeyTier::Client)
        .await
        .expect_err("persistent 503 should fail");

    assert_eq!(err.kind(), ErrorKind::ApiStatus);
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn not_found_is_never_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/areaCode2"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .area_codes(KeyTier::Client)
        .await
        .expect_err("404 should fail");

    assert_eq!(err.kind(), ErrorKind::ApiStatus);
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error_and_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/areaCode2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .area_codes(KeyTier::Client)
        .await
        .expect_err("malformed body should fail");

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn empty_keyword_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    let client = test_client(&server.uri());

    let err = client
        .search_keyword(KeyTier::Client, &KeywordParams::new("   "))
        .await
        .expect_err("blank keyword should fail");

    assert!(
        matches!(err, tourhub_tourapi::TourApiError::Upstream { ref code, .. } if code == "02")
    );
    assert!(
        server.received_requests().await.unwrap_or_default().is_empty(),
        "no request should reach the upstream"
    );
}

#[tokio::test]
async fn quota_result_code_surfaces_curated_message() {
    let server = MockServer::start().await;

    let body = json!({
        "response": {
            "header": {
                "resultCode": "05",
                "resultMsg": "LIMITED NUMBER OF SERVICE REQUESTS EXCEEDS ERROR"
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/searchKeyword2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search_keyword(KeyTier::Client, &KeywordParams::new("palace"))
        .await
        .expect_err("quota code should fail");

    assert_eq!(err.kind(), ErrorKind::Unknown);
    let msg = err.user_message();
    assert!(msg.contains("quota"), "got: {msg}");
    assert!(!msg.contains("LIMITED NUMBER"), "raw upstream text leaked: {msg}");
}

#[tokio::test]
async fn detail_common_unwraps_a_single_object_item() {
    let server = MockServer::start().await;

    // The upstream serializes a lone record as a bare object, not a
    // one-element array.
    let body = ok_envelope(
        json!({
            "contentid": "2674675",
            "contenttypeid": "12",
            "title": "Gyeongbokgung Palace",
            "addr1": "161 Sajik-ro, Jongno-gu",
            "zipcode": "03045",
            "homepage": "<a href=\"https://royal.khs.go.kr\">royal.khs.go.kr</a>",
            "overview": "The largest of the Five Grand Palaces.",
            "mapx": "1269770000",
            "mapy": "375796000"
        }),
        1,
    );

    Mock::given(method("GET"))
        .and(path("/detailCommon2"))
        .and(query_param("contentId", "2674675"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client
        .detail_common(KeyTier::Client, "2674675")
        .await
        .expect("should parse detail");

    assert_eq!(detail.content_id, "2674675");
    assert_eq!(detail.zipcode.as_deref(), Some("03045"));
    assert_eq!(
        detail.overview.as_deref(),
        Some("The largest of the Five Grand Palaces.")
    );
}

#[tokio::test]
async fn server_tier_injects_the_server_key() {
    let server = MockServer::start().await;

    let body = ok_envelope(
        json!([{ "contentid": "123", "acmpyTypeCd": "동반가능" }]),
        1,
    );

    Mock::given(method("GET"))
        .and(path("/detailPetTour2"))
        .and(query_param("serviceKey", "server-key"))
        .and(query_param("contentId", "123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let listing = client
        .detail_pet_info(KeyTier::Server, "123")
        .await
        .expect("server-tier call should succeed");

    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0].accompany_type.as_deref(), Some("동반가능"));
}

#[tokio::test]
async fn absent_items_surfaces_as_no_data() {
    let server = MockServer::start().await;

    let body = json!({
        "response": {
            "header": {"resultCode": "0000", "resultMsg": "OK"},
            "body": {"numOfRows": 0, "pageNo": 1, "totalCount": 0}
        }
    });

    Mock::given(method("GET"))
        .and(path("/areaBasedList2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .area_based_list(KeyTier::Client, &tourhub_tourapi::AreaListParams::default())
        .await
        .expect_err("absent items should fail");

    assert!(matches!(err, tourhub_tourapi::TourApiError::NoData { .. }));
}

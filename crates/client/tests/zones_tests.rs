//! Zone endpoint tests.
//!
//! This module tests the Cloudflare zones API:
//! - Listing zones drains every page reported by `result_info.total_pages`
//! - Fetching a single zone by id
//! - Authentication headers for token and key credentials
//!
//! # Invariants
//! - `per_page` is always 50
//! - Zones are returned in page order

mod common;

use common::*;
use wiremock::matchers::{header, header_exists, method, path, query_param};

#[tokio::test]
async fn test_list_zones_drains_all_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("zones/list_zones_page1.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("zones/list_zones_page2.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, token_credentials());
    let zones = client.list_zones().await.unwrap();

    let names: Vec<&str> = zones.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["example.com", "example.net", "example.org"]);
    assert_eq!(zones[0].plan.name, "Pro Plan");
    assert_eq!(zones[1].status, "pending");
    assert!(!zones[1].is_active());
}

#[tokio::test]
async fn test_list_zones_empty_account() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": [],
            "result_info": {"page": 1, "per_page": 50, "count": 0, "total_count": 0, "total_pages": 0}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, token_credentials());
    assert!(client.list_zones().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_token_auth_sends_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones/023e105f4ecef8ad9ca31a8372d0c353"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("zones/get_zone.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, token_credentials());
    let zone = client
        .get_zone("023e105f4ecef8ad9ca31a8372d0c353")
        .await
        .unwrap();
    assert_eq!(zone.name, "example.com");
}

#[tokio::test]
async fn test_key_auth_sends_email_and_key_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones/023e105f4ecef8ad9ca31a8372d0c353"))
        .and(header("X-Auth-Email", "ops@example.com"))
        .and(header_exists("X-Auth-Key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("zones/get_zone.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, key_credentials());
    assert!(
        client
            .get_zone("023e105f4ecef8ad9ca31a8372d0c353")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_get_zone_not_found_passes_through_with_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "success": false,
            "errors": [{"code": 7003, "message": "Could not route to /zones/missing"}],
            "messages": [],
            "result": null
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, token_credentials());
    let err = client.get_zone("missing").await.unwrap_err();

    assert!(err.to_string().starts_with("get zone: API error (404)"));
    assert!(matches!(
        err.root(),
        ClientError::ApiError { status: 404, codes, .. } if codes == &vec![7003]
    ));
}

#[tokio::test]
async fn test_list_zones_forbidden_is_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(403).set_body_json(load_fixture("verify/forbidden.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, token_credentials());
    let err = client.list_zones().await.unwrap_err();
    assert!(err.is_forbidden());
    assert!(err.to_string().starts_with("list zones: forbidden"));
}

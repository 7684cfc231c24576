//! Integration tests for the catalog client over HTTP.
//!
//! These tests run the client against a local mock server and verify the
//! requests it sends, the items it returns and how the pagination cursor
//! moves across calls.

use bestbuy_catalog::{
    ApiKey, BaseUrl, CatalogClient, CatalogConfig, CatalogError, CatalogErrorKind,
    FieldSelections, PaginationState, TransportError,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing at the mock server.
fn create_config(server: &MockServer) -> CatalogConfig {
    CatalogConfig::builder()
        .api_key(ApiKey::new("ABC").unwrap())
        .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .page_size(100)
        .build()
        .unwrap()
}

fn create_client(server: &MockServer, fields: FieldSelections) -> CatalogClient {
    CatalogClient::new(create_config(server), fields).unwrap()
}

// ============================================================================
// Successful Fetches
// ============================================================================

#[tokio::test]
async fn test_first_page_of_products() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/products"))
        .and(query_param("format", "json"))
        .and(query_param("pageSize", "100"))
        .and(query_param("page", "1"))
        .and(query_param("apiKey", "ABC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalPages": 3,
            "total": 250,
            "products": [{"sku": 1}, {"sku": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = create_client(&server, FieldSelections::new());
    let items = client.products(None, None).await.unwrap();

    assert_eq!(items, vec![json!({"sku": 1}), json!({"sku": 2})]);
    assert_eq!(
        *client.pagination(),
        PaginationState {
            current_page: 2,
            total_pages: 3,
            total_count: 250,
        }
    );
}

#[tokio::test]
async fn test_query_and_field_selection_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/products(manufacturer=canon%20AND%20onSale=true)"))
        .and(query_param("show", "sku,name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalPages": 1,
            "total": 1,
            "products": [{"sku": 6323759, "name": "Canon EOS R6"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fields = FieldSelections::new().products(["sku", "name"]);
    let mut client = create_client(&server, fields);
    let items = client
        .products(Some("manufacturer=canon AND onSale=true"), None)
        .await
        .unwrap();

    assert_eq!(items[0]["name"], "Canon EOS R6");
    assert!(!client.pagination().has_more());
}

#[tokio::test]
async fn test_walks_every_page_until_exhausted() {
    let server = MockServer::start().await;
    for page in 1..=3 {
        Mock::given(method("GET"))
            .and(path("/v1/stores"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalPages": 3,
                "total": 3,
                "stores": [{"storeId": page}]
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut client = create_client(&server, FieldSelections::new());
    let mut store_ids = Vec::new();
    while client.pagination().has_more() {
        for store in client.stores(None, None).await.unwrap() {
            store_ids.push(store["storeId"].as_u64().unwrap());
        }
    }

    assert_eq!(store_ids, vec![1, 2, 3]);
    assert_eq!(client.pagination().current_page, 4);
}

#[tokio::test]
async fn test_explicit_page_repoints_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/categories"))
        .and(query_param("page", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalPages": 9,
            "total": 870,
            "categories": [{"id": "abcat0100000"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/categories"))
        .and(query_param("page", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalPages": 9,
            "total": 870,
            "categories": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = create_client(&server, FieldSelections::new());
    client.categories(None, Some(5)).await.unwrap();
    assert_eq!(client.pagination().current_page, 6);

    client.categories(None, None).await.unwrap();
    assert_eq!(client.pagination().current_page, 7);
}

#[tokio::test]
async fn test_typed_items_from_fetch_page() {
    #[derive(Debug, serde::Deserialize)]
    struct Review {
        id: u64,
        rating: f64,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalPages": 1,
            "total": 2,
            "reviews": [{"id": 1, "rating": 4.0}, {"id": 2, "rating": 5.0}]
        })))
        .mount(&server)
        .await;

    let mut client = create_client(&server, FieldSelections::new());
    let page = client
        .fetch_page(bestbuy_catalog::ResourceType::Reviews, None, None)
        .await
        .unwrap();
    let reviews: Vec<Review> = page.deserialize_items().unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[1].id, 2);
    assert!((reviews[1].rating - 5.0).abs() < f64::EPSILON);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_http_error_status_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"errorMessage": "Key not authorized"})),
        )
        .mount(&server)
        .await;

    let mut client = create_client(&server, FieldSelections::new());
    let error = client.products(None, None).await.unwrap_err();

    assert_eq!(error.kind(), CatalogErrorKind::Transport);
    match error {
        CatalogError::Transport(TransportError::Status { code, body }) => {
            assert_eq!(code, 403);
            assert!(body.contains("Key not authorized"));
        }
        other => panic!("Expected Status error, got: {other:?}"),
    }
    assert_eq!(*client.pagination(), PaginationState::default());
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = create_client(&server, FieldSelections::new());
    let result = client.stores(None, None).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_malformed_response_keeps_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 5})))
        .mount(&server)
        .await;

    let mut client = create_client(&server, FieldSelections::new());
    let error = client.products(None, None).await.unwrap_err();

    assert_eq!(error.kind(), CatalogErrorKind::MalformedResponse);
    assert_eq!(*client.pagination(), PaginationState::default());
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let mut client = create_client(&server, FieldSelections::new());
    let error = client.reviews(None, None).await.unwrap_err();

    assert_eq!(error.kind(), CatalogErrorKind::Parse);
    assert_eq!(*client.pagination(), PaginationState::default());
}

// ============================================================================
// Type Export Tests
// ============================================================================

#[test]
fn test_types_exported_at_crate_root() {
    let _: fn(bestbuy_catalog::CatalogClient) = |_| {};
    let _: fn(bestbuy_catalog::CatalogPage) = |_| {};
    let _: fn(bestbuy_catalog::ConfigError) = |_| {};
    let _: fn(bestbuy_catalog::HttpTransport) = |_| {};
}

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogClient>();
}

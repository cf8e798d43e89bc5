//! Integration tests for the HTTP client layer.
//!
//! These tests verify client configuration, request dispatch, header
//! handling, response parsing, and error propagation against a wiremock
//! server.

use serde_json::json;
use simple_rest_provider::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, TOTAL_COUNT_HEADER,
};
use simple_rest_provider::{ApiUrl, ProviderConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the given mock server.
fn create_client(server: &MockServer) -> HttpClient {
    let config = ProviderConfig::builder()
        .api_url(ApiUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config)
}

#[tokio::test]
async fn test_get_request_parses_json_body_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/post"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"collection": [{"_id": "post/1"}]}))
                .insert_header(TOTAL_COUNT_HEADER, "7"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "post")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.total_count(), Some(7));
    assert!(response.body.get("collection").is_some());
}

#[tokio::test]
async fn test_client_sends_accept_json_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/post"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "post")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_post_sends_json_body_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/post"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"title": "hello"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(HttpMethod::Post, "post")
        .body(json!({"title": "hello"}))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_query_pairs_are_forwarded_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/post"))
        .and(query_param("sort", "title"))
        .and(query_param("order", "ASC"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "post")
        .query_param("sort", "title")
        .query_param("order", "ASC")
        .query_param("offset", "0")
        .query_param("limit", "10")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_non_2xx_response_becomes_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/post/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "post/missing")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert!(e.message.contains("not found"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_body_parses_as_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/post/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(HttpMethod::Delete, "post/1")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_no_retry_single_request_per_call() {
    let server = MockServer::start().await;

    // A 500 must fail immediately; exactly one request reaches the server.
    Mock::given(method("GET"))
        .and(path("/post"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "post")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => assert_eq!(e.code, 500),
        other => panic!("expected response error, got {other:?}"),
    }
}

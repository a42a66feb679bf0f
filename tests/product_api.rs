//! Product API Tests
//!
//! Drives the full router (health + product routes + layers) over an
//! in-memory store:
//! - Create echoes input and assigns an unused id
//! - List returns every created product
//! - Update replaces all fields
//! - Delete makes the product unreachable
//! - Errors come back as structured JSON with the right status

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use product_service::http_server::HttpServer;
use product_service::rest_api::SharedStore;
use product_service::store::SqliteProductStore;

// =============================================================================
// Test Utilities
// =============================================================================

fn create_test_router() -> Router {
    let store: SharedStore = Arc::new(SqliteProductStore::open_in_memory().unwrap());
    HttpServer::new(store).router()
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn widget() -> Value {
    json!({"name": "Widget", "description": "A widget", "price": 9.99, "quantity": 5})
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn test_widget_lifecycle() {
    let router = create_test_router();

    let (status, created) = send(&router, "POST", "/product", Some(widget())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        created,
        json!({"id": 1, "name": "Widget", "description": "A widget", "price": 9.99, "quantity": 5})
    );

    let (status, listed) = send(&router, "GET", "/product", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    let replacement =
        json!({"name": "Widget2", "description": "Another", "price": 1.25, "quantity": 0});
    let (status, updated) = send(&router, "PUT", "/product/1", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Widget2");

    let (status, fetched) = send(&router, "GET", "/product/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched,
        json!({"id": 1, "name": "Widget2", "description": "Another", "price": 1.25, "quantity": 0})
    );

    let (status, deleted) = send(&router, "DELETE", "/product/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deleted"], true);
    assert_eq!(deleted["product"], fetched);

    let (status, body) = send(&router, "GET", "/product/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn test_list_returns_all_created() {
    let router = create_test_router();

    let mut created = Vec::new();
    for i in 0..3_i32 {
        let body = json!({
            "name": format!("item-{i}"),
            "description": "d",
            "price": f64::from(i),
            "quantity": i
        });
        let (status, product) = send(&router, "POST", "/product", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        created.push(product);
    }

    let (_, listed) = send(&router, "GET", "/product", None).await;
    assert_eq!(listed, Value::Array(created));
}

#[tokio::test]
async fn test_empty_list() {
    let router = create_test_router();
    let (status, listed) = send(&router, "GET", "/product", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

// =============================================================================
// Error Mapping
// =============================================================================

#[tokio::test]
async fn test_duplicate_name_is_conflict() {
    let router = create_test_router();
    send(&router, "POST", "/product", Some(widget())).await;

    let (status, body) = send(&router, "POST", "/product", Some(widget())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");
    assert_eq!(body["code"], 409);

    let (_, listed) = send(&router, "GET", "/product", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_field_is_malformed() {
    let router = create_test_router();
    let body = json!({"name": "Widget", "description": "A widget", "price": 9.99});

    let (status, body) = send(&router, "POST", "/product", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "malformed_request");
    assert!(body["message"].as_str().unwrap().contains("quantity"));
}

#[tokio::test]
async fn test_wrong_field_type_is_malformed() {
    let router = create_test_router();
    let body =
        json!({"name": "Widget", "description": "A widget", "price": "cheap", "quantity": 5});

    let (status, body) = send(&router, "POST", "/product", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "malformed_request");
}

#[tokio::test]
async fn test_non_numeric_id_is_malformed() {
    let router = create_test_router();
    let (status, body) = send(&router, "GET", "/product/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "malformed_request");
}

#[tokio::test]
async fn test_unknown_id_is_not_found_for_every_method() {
    let router = create_test_router();

    let (status, _) = send(&router, "GET", "/product/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, "PUT", "/product/99", Some(widget())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&router, "DELETE", "/product/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product 99 not found");
}

#[tokio::test]
async fn test_overlong_description_is_malformed() {
    let router = create_test_router();
    let body =
        json!({"name": "Widget", "description": "x".repeat(301), "price": 1.0, "quantity": 1});

    let (status, body) = send(&router, "POST", "/product", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("description"));
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let router = create_test_router();
    let body = json!({
        "name": "Widget",
        "description": "x".repeat(3 * 1024 * 1024),
        "price": 1.0,
        "quantity": 1
    });

    let (status, body) = send(&router, "POST", "/product", Some(body)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["kind"], "payload_too_large");
    assert_eq!(body["code"], 413);

    let (_, listed) = send(&router, "GET", "/product", None).await;
    assert_eq!(listed, json!([]));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_product_count() {
    let router = create_test_router();
    send(&router, "POST", "/product", Some(widget())).await;

    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["products"], 1);
}

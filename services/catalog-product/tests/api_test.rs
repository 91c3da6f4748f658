//! HTTP 接口测试

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use catalog_errors::ProblemDetails;
use catalog_product::api::{ProductResponse, router};
use catalog_product::application::ProductCatalog;
use catalog_product::infrastructure::persistence::InMemoryProductRepository;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let repo = Arc::new(InMemoryProductRepository::new());
    router(Arc::new(ProductCatalog::new(repo)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>, Option<String>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec(), content_type)
}

async fn create(app: &Router, body: Value) -> ProductResponse {
    let (status, bytes, _) = send(app, "POST", "/api/products", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_returns_201_with_defaults() {
    let app = app();

    let product = create(
        &app,
        json!({ "title": "Red Shoe", "gender": "unisex", "sizes": ["M", "L"] }),
    )
    .await;

    assert_eq!(product.slug, "red_shoe");
    assert_eq!(product.price, 0.0);
    assert_eq!(product.stock, 0);
    assert_eq!(product.sizes, vec!["M", "L"]);
    assert!(product.tags.is_empty());
    assert_eq!(product.id.len(), 36);
}

#[tokio::test]
async fn test_validation_errors_are_400_problem_json() {
    let app = app();

    for body in [
        json!({ "title": "ab", "gender": "men" }),
        json!({ "title": "Red Shoe", "gender": "kids" }),
        json!({ "title": "Red Shoe", "gender": "men", "price": -1 }),
        json!({ "title": "Red Shoe", "gender": "men", "stock": -1 }),
        json!({ "gender": "men" }),
        json!({ "title": "Red Shoe", "gender": "men", "color": "red" }),
    ] {
        let (status, bytes, content_type) = send(&app, "POST", "/api/products", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(content_type.as_deref(), Some("application/problem+json"));

        let problem: ProblemDetails = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(problem.status, 400);
    }
}

#[tokio::test]
async fn test_duplicate_is_409() {
    let app = app();
    create(&app, json!({ "title": "Red Shoe", "gender": "men" })).await;

    let (status, bytes, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "title": "Red Shoe!", "gender": "men" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    let problem: ProblemDetails = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(problem.detail, "Key (slug)=(red_shoe) already exists.");
}

#[tokio::test]
async fn test_find_by_id_and_slug() {
    let app = app();
    let created = create(&app, json!({ "title": "Red Shoe", "gender": "men" })).await;

    for term in [created.id.as_str(), "RED_SHOE"] {
        let (status, bytes, _) = send(&app, "GET", &format!("/api/products/{term}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let found: ProductResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(found.id, created.id);
    }
}

#[tokio::test]
async fn test_missing_product_is_404() {
    let app = app();

    let (status, bytes, content_type) = send(&app, "GET", "/api/products/blue_boot", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    let problem: ProblemDetails = serde_json::from_slice(&bytes).unwrap();
    assert!(problem.detail.contains("blue_boot"));
}

#[tokio::test]
async fn test_list_pagination() {
    let app = app();
    for i in 1..=5 {
        create(&app, json!({ "title": format!("Product {i}"), "gender": "women" })).await;
    }

    let (status, bytes, _) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let page: Vec<ProductResponse> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(page.len(), 3);

    let (_, bytes, _) = send(&app, "GET", "/api/products?limit=3&offset=3", None).await;
    let page: Vec<ProductResponse> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(page.len(), 2);

    let (status, _, _) = send(&app, "GET", "/api/products?limit=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_updates_product() {
    let app = app();
    let created = create(&app, json!({ "title": "Red Shoe", "gender": "men" })).await;

    let (status, bytes, _) = send(
        &app,
        "PATCH",
        &format!("/api/products/{}", created.id),
        Some(json!({ "price": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated: ProductResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(updated.price, 10.0);
    assert_eq!(updated.title, "Red Shoe");
}

#[tokio::test]
async fn test_patch_requires_uuid() {
    let app = app();
    create(&app, json!({ "title": "Red Shoe", "gender": "men" })).await;

    let (status, _, _) = send(
        &app,
        "PATCH",
        "/api/products/red_shoe",
        Some(json!({ "price": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_missing_is_404() {
    let app = app();

    let (status, _, _) = send(
        &app,
        "PATCH",
        "/api/products/67e55044-10b1-426f-9247-bb680e5fe0c8",
        Some(json!({ "price": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_204() {
    let app = app();
    let created = create(&app, json!({ "title": "Red Shoe", "gender": "men" })).await;
    let uri = format!("/api/products/{}", created.id);

    let (status, bytes, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, _, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

//! HTTP contract tests: request field handling and response shape.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use internmatch::gateway::{GatewayState, create_router_with_state};
use internmatch::{ListingCatalog, ListingRecord, Recommender, build_provider};

fn fixture_router(default_top_n: usize) -> Router {
    let listings = vec![
        ListingRecord {
            id: 10,
            title: "Analytics Intern".to_string(),
            sector: "Data Science".to_string(),
            location: "Pune".to_string(),
            skills_required: "python,sql".to_string(),
            description: "Dashboards and reporting".to_string(),
        },
        ListingRecord {
            id: 11,
            title: "Platform Intern".to_string(),
            sector: "Infrastructure".to_string(),
            location: "Remote".to_string(),
            skills_required: "python,kubernetes".to_string(),
            description: "Cluster tooling".to_string(),
        },
        ListingRecord {
            id: 12,
            title: "Design Intern".to_string(),
            sector: "Design".to_string(),
            location: "Mumbai".to_string(),
            skills_required: "figma".to_string(),
            description: "Product design".to_string(),
        },
    ];

    let catalog = Arc::new(ListingCatalog::new(listings));
    let provider = build_provider(None, &catalog);
    let recommender = Arc::new(Recommender::new(catalog, provider));

    create_router_with_state(GatewayState::new(recommender, default_top_n))
}

async fn post_json(router: Router, body: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/recommend")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

#[tokio::test]
async fn test_response_record_shape() {
    let (status, body) = post_json(
        fixture_router(5),
        r#"{"education": "BSc", "skills": "python, sql", "sectors": "data", "location": "pune"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert!(!results.is_empty());

    let top = &results[0];
    assert_eq!(top["id"], 10);
    assert_eq!(top["title"], "Analytics Intern");
    assert_eq!(top["sector"], "Data Science");
    assert_eq!(top["location"], "Pune");
    assert_eq!(top["skills_required"], "python,sql");
    assert_eq!(top["description"], "Dashboards and reporting");
    assert_eq!(top["score"], 1.0);
    assert_eq!(top["match_percent"], 100);
    assert_eq!(top["matched_skills"], json!(["python", "sql"]));
}

#[tokio::test]
async fn test_all_fields_optional() {
    let (status, body) = post_json(fixture_router(5), "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let (status, _) = post_json(
        fixture_router(5),
        r#"{"skills": "python", "resume": "ignored", "age": 25}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_default_top_n_comes_from_state() {
    let (_, body) = post_json(fixture_router(1), r#"{"skills": "python"}"#).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = post_json(fixture_router(5), r#"{"skills": "python"}"#).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_explicit_top_n_overrides_default() {
    let (_, body) = post_json(fixture_router(5), r#"{"skills": "python", "top_n": 1}"#).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_wrongly_typed_field_is_rejected_at_boundary() {
    let (status, _) = post_json(fixture_router(5), r#"{"skills": ["python", "sql"]}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post_json(fixture_router(5), r#"{"top_n": "five"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_no_match_is_empty_list_not_error() {
    let (status, body) = post_json(fixture_router(5), r#"{"skills": "haskell"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

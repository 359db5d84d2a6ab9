use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::catalog::{ListingCatalog, ListingRecord};
use crate::scoring::Recommender;
use crate::similarity::build_provider;

use super::{GatewayState, create_router_with_state};

fn listing(id: i64, title: &str, skills: &str, location: &str, sector: &str) -> ListingRecord {
    ListingRecord {
        id,
        title: title.to_string(),
        skills_required: skills.to_string(),
        location: location.to_string(),
        sector: sector.to_string(),
        description: format!("{title} role"),
    }
}

fn test_router() -> Router {
    let catalog = Arc::new(ListingCatalog::new(vec![
        listing(1, "Data Intern", "python,ml,sql", "Pune", "Data Science"),
        listing(2, "Web Intern", "javascript,react", "Delhi", "Web Development"),
        listing(3, "ML Intern", "python,ml", "Pune", "Data Science"),
    ]));
    let provider = build_provider(None, &catalog);
    let recommender = Arc::new(Recommender::new(catalog, provider));

    create_router_with_state(GatewayState::new(recommender, 5))
}

async fn post_recommend(router: Router, body: Value) -> (StatusCode, Value) {
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
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

#[tokio::test]
async fn test_healthz() {
    let response = test_router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_reports_catalog_and_provider() {
    let response = test_router()
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["listings"], 3);
    assert_eq!(body["similarity_provider"], "tfidf");
}

#[tokio::test]
async fn test_recommend_returns_ranked_matches() {
    let (status, body) = post_recommend(
        test_router(),
        json!({
            "skills": "python, ml",
            "sectors": "data science",
            "location": "pune"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().expect("response should be an array");
    assert_eq!(results.len(), 2);

    // The two-skill listing is fully covered; the three-skill one is not.
    assert_eq!(results[0]["title"], "ML Intern");
    assert_eq!(results[0]["score"], 1.0);
    assert_eq!(results[0]["match_percent"], 100);
    assert_eq!(results[1]["title"], "Data Intern");

    for result in results {
        for field in [
            "id",
            "title",
            "sector",
            "location",
            "skills_required",
            "description",
            "score",
            "match_percent",
            "matched_skills",
        ] {
            assert!(result.get(field).is_some(), "missing field {field}");
        }
    }
}

#[tokio::test]
async fn test_recommend_scores_are_two_decimal_rounded() {
    let (_, body) = post_recommend(
        test_router(),
        json!({ "skills": "python, ml", "location": "pune" }),
    )
    .await;

    for result in body.as_array().unwrap() {
        let score = result["score"].as_f64().unwrap();
        let rounded = (score * 100.0).round() / 100.0;
        assert!((score - rounded).abs() < 1e-9, "score {score} not rounded");
    }
}

#[tokio::test]
async fn test_recommend_with_empty_body_fields() {
    let (status, body) = post_recommend(test_router(), json!({})).await;

    // An all-empty profile matches nothing: empty list, not an error.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_recommend_no_matching_skills() {
    let (status, body) = post_recommend(test_router(), json!({ "skills": "cobol" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_recommend_respects_top_n() {
    let (_, body) = post_recommend(
        test_router(),
        json!({ "skills": "python", "top_n": 1 }),
    )
    .await;

    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_recommend_accepts_sector_alias() {
    let (status, body) = post_recommend(
        test_router(),
        json!({ "skills": "python", "sector": "data science" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_recommend_rejects_wrongly_typed_fields() {
    let (status, _) = post_recommend(test_router(), json!({ "skills": 42 })).await;

    // Contract violations fail fast at the boundary, not inside scoring.
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_recommend_rejects_malformed_json() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/recommend")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

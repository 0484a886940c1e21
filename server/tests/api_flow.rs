//! End-to-end API flow over an embedded database.
//!
//! Drives the full router (middleware included) in-process via the
//! oneshot extension, against a RocksDb instance in a temp dir.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use khata_server::api::{OneshotRouter, build_app};
use khata_server::core::{Config, ServerState};

async fn test_state() -> (ServerState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    (ServerState::with_db(config, db), tmp)
}

async fn request(
    app: &mut Router<ServerState>,
    state: &ServerState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(state, request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_probe_answers() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    let (status, body) = request(&mut app, &state, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn dashboard_reflects_seeded_records() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    for amount in [500.0, 300.0] {
        let (status, _) = request(
            &mut app,
            &state,
            "POST",
            "/api/sales",
            Some(json!({ "totalAmount": amount })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    request(
        &mut app,
        &state,
        "POST",
        "/api/production",
        Some(json!({ "totalCost": 200.0 })),
    )
    .await;
    request(
        &mut app,
        &state,
        "POST",
        "/api/expenses",
        Some(json!({ "amount": 100.0, "category": "materials" })),
    )
    .await;
    request(
        &mut app,
        &state,
        "POST",
        "/api/warranty",
        Some(json!({ "replaced": true })),
    )
    .await;
    request(
        &mut app,
        &state,
        "POST",
        "/api/warranty",
        Some(json!({ "replaced": false })),
    )
    .await;

    let (status, body) =
        request(&mut app, &state, "GET", "/api/business/dashboard-metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let metrics = &body["metrics"];
    assert_eq!(metrics["totalSales"], 800.0);
    assert_eq!(metrics["totalProduction"], 200.0);
    assert_eq!(metrics["totalExpenses"], 100.0);
    assert_eq!(metrics["profitLoss"], 500.0);
    assert_eq!(metrics["salesCount"], 2);
    assert_eq!(metrics["warrantyCount"], 2);
    assert_eq!(metrics["warrantyReplaced"], 1);
    assert_eq!(metrics["warrantyPending"], 1);
}

#[tokio::test]
async fn owner_shares_split_profit_by_investment() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    request(
        &mut app,
        &state,
        "POST",
        "/api/owners",
        Some(json!({ "name": "Rahim", "email": "rahim@example.com", "investmentAmount": 7000.0 })),
    )
    .await;
    request(
        &mut app,
        &state,
        "POST",
        "/api/owners",
        Some(json!({ "name": "Karim", "email": "karim@example.com", "investmentAmount": 3000.0 })),
    )
    .await;
    request(
        &mut app,
        &state,
        "POST",
        "/api/sales",
        Some(json!({ "totalAmount": 1000.0 })),
    )
    .await;

    let (status, body) =
        request(&mut app, &state, "GET", "/api/business/owner-shares", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["totalInvestment"], 10000.0);
    assert_eq!(body["totalProfitLoss"], 1000.0);

    let shares = body["shares"].as_array().unwrap();
    assert_eq!(shares.len(), 2);

    let pct_sum: f64 = shares
        .iter()
        .map(|s| s["ownershipPercentage"].as_f64().unwrap())
        .sum();
    assert!((pct_sum - 100.0).abs() < 0.05, "pct_sum = {pct_sum}");

    let share_sum: f64 = shares
        .iter()
        .map(|s| s["profitShare"].as_f64().unwrap())
        .sum();
    assert!((share_sum - 1000.0).abs() < 0.05, "share_sum = {share_sum}");
}

#[tokio::test]
async fn forecast_with_one_month_is_low_confidence() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    // Both created now -> a single month bucket
    request(
        &mut app,
        &state,
        "POST",
        "/api/expenses",
        Some(json!({ "amount": 60.0, "category": "rent" })),
    )
    .await;
    request(
        &mut app,
        &state,
        "POST",
        "/api/expenses",
        Some(json!({ "amount": 40.0, "category": "materials" })),
    )
    .await;

    let (status, body) = request(
        &mut app,
        &state,
        "GET",
        "/api/business/expenses/predict",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["predictedNextMonth"], 100.0);
    assert_eq!(body["confidence"], "Low");
    assert_eq!(body["monthsAnalyzed"], 1);
}

#[tokio::test]
async fn chat_answers_and_reports_language() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    let (status, body) = request(
        &mut app,
        &state,
        "POST",
        "/api/ai/chat",
        Some(json!({ "message": "hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["language"], "en");
    assert!(
        body["response"].as_str().unwrap().starts_with("Welcome!"),
        "response = {}",
        body["response"]
    );

    let (status, body) = request(
        &mut app,
        &state,
        "POST",
        "/api/ai/chat",
        Some(json!({ "message": "বিক্রয় কত?" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "bn");

    // Missing message is a validation error
    let (status, body) = request(
        &mut app,
        &state,
        "POST",
        "/api/ai/chat",
        Some(json!({ "message": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn monthly_report_requires_month_and_year() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    let (status, body) = request(&mut app, &state, "GET", "/api/reports/monthly", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = request(
        &mut app,
        &state,
        "GET",
        "/api/reports/monthly?month=5&year=2026",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["totalSales"], 100000.0);
    assert_eq!(body["profitLoss"], 20000.0);
}

#[tokio::test]
async fn verify_token_is_a_placeholder() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    let (status, body) = request(
        &mut app,
        &state,
        "POST",
        "/api/auth/verify-token",
        Some(json!({ "token": "anything" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Token verified");

    let (status, body) = request(
        &mut app,
        &state,
        "POST",
        "/api/auth/verify-token",
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn owner_crud_round_trip() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    let (status, body) = request(
        &mut app,
        &state,
        "POST",
        "/api/owners",
        Some(json!({ "id": "rahim", "name": "Rahim", "email": "rahim@example.com", "investmentAmount": 5000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "owner:rahim");

    // Both the bare key and the table:key form resolve
    for id in ["rahim", "owner:rahim"] {
        let (status, body) =
            request(&mut app, &state, "GET", &format!("/api/owners/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Rahim");
        assert_eq!(body["data"]["investmentAmount"], 5000.0);
        assert!(body["data"]["createdAt"].is_string());
    }

    let (status, body) = request(
        &mut app,
        &state,
        "PUT",
        "/api/owners/rahim",
        Some(json!({ "investmentAmount": 6000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["investmentAmount"], 6000.0);
    assert!(body["data"]["updatedAt"].is_string());

    let (status, body) = request(&mut app, &state, "DELETE", "/api/owners/rahim", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, _) = request(&mut app, &state, "GET", "/api/owners/rahim", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_investment_is_rejected() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    let (status, body) = request(
        &mut app,
        &state,
        "POST",
        "/api/owners",
        Some(json!({ "name": "Bad", "investmentAmount": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("investmentAmount"),
        "error = {}",
        body["error"]
    );
}

#[tokio::test]
async fn expenses_filter_by_category() {
    let (state, _tmp) = test_state().await;
    let mut app = build_app();

    request(
        &mut app,
        &state,
        "POST",
        "/api/expenses",
        Some(json!({ "amount": 10.0, "category": "rent" })),
    )
    .await;
    request(
        &mut app,
        &state,
        "POST",
        "/api/expenses",
        Some(json!({ "amount": 20.0, "category": "materials" })),
    )
    .await;

    let (status, body) = request(
        &mut app,
        &state,
        "GET",
        "/api/expenses/by-category/rent",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["amount"], 10.0);
}

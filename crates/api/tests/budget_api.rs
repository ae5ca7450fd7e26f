//! HTTP-level integration tests for budget items and the project summary.

mod common;

use atrium_core::roles::Role;
use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use sqlx::PgPool;

async fn create_project(app: axum::Router, token: &str) -> i64 {
    let body = serde_json::json!({
        "name": "Reef",
        "description": "d",
        "budget": "1000.00",
    });
    let response = post_json_auth(app, "/api/projects", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

fn item_body(amount: &str, item_type: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "description": "entry",
        "amount": amount,
        "item_type": item_type,
        "category": "other",
        "date": date,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_scenario(pool: PgPool) {
    let officer = common::create_test_user(&pool, "po", Role::ProjectOfficer).await;
    let token = common::access_token_for(&officer);
    let app = common::build_test_app(pool);

    let project_id = create_project(app.clone(), &token).await;
    let base = format!("/api/projects/{project_id}/budget");

    let response = post_json_auth(
        app.clone(),
        &base,
        item_body("400.00", "income", "2026-03-01"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["item_type"], "income");
    assert_eq!(created["created_by"], officer.id);

    let response = post_json_auth(
        app.clone(),
        &base,
        item_body("150.00", "expense", "2026-03-02"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app, &format!("{base}/summary"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await;
    assert_eq!(summary["allocated"], "400.00");
    assert_eq!(summary["spent"], "150.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_is_exact_for_two_decimal_amounts(pool: PgPool) {
    let officer = common::create_test_user(&pool, "po", Role::ProjectOfficer).await;
    let token = common::access_token_for(&officer);
    let app = common::build_test_app(pool);

    let project_id = create_project(app.clone(), &token).await;
    let base = format!("/api/projects/{project_id}/budget");

    for (amount, date) in [("10.10", "2026-03-01"), ("20.20", "2026-03-02")] {
        let response =
            post_json_auth(app.clone(), &base, item_body(amount, "income", date), &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(app, &format!("{base}/summary"), &token).await;
    let summary = body_json(response).await;
    // Exactly 30.30; a float accumulator would yield 30.299999...
    assert_eq!(summary["allocated"], "30.30");
    assert_eq!(summary["spent"], "0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_summary_is_zero(pool: PgPool) {
    let officer = common::create_test_user(&pool, "po", Role::ProjectOfficer).await;
    let token = common::access_token_for(&officer);
    let app = common::build_test_app(pool);

    let project_id = create_project(app.clone(), &token).await;

    let response = get_auth(
        app,
        &format!("/api/projects/{project_id}/budget/summary"),
        &token,
    )
    .await;
    let summary = body_json(response).await;
    assert_eq!(summary["allocated"], "0");
    assert_eq!(summary["spent"], "0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_honors_date_window(pool: PgPool) {
    let officer = common::create_test_user(&pool, "po", Role::ProjectOfficer).await;
    let token = common::access_token_for(&officer);
    let app = common::build_test_app(pool);

    let project_id = create_project(app.clone(), &token).await;
    let base = format!("/api/projects/{project_id}/budget");

    for date in ["2026-03-01", "2026-03-10", "2026-03-20"] {
        let response =
            post_json_auth(app.clone(), &base, item_body("5.00", "expense", date), &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Inclusive window keeps the boundary days.
    let response = get_auth(
        app.clone(),
        &format!("{base}?start_date=2026-03-01&end_date=2026-03-10"),
        &token,
    )
    .await;
    let items = body_json(response).await;
    assert_eq!(items.as_array().unwrap().len(), 2);

    // A lone lower bound filters from that day onward.
    let response = get_auth(app.clone(), &format!("{base}?start_date=2026-03-10"), &token).await;
    let items = body_json(response).await;
    assert_eq!(items.as_array().unwrap().len(), 2);

    // No bounds returns everything.
    let response = get_auth(app, &base, &token).await;
    let items = body_json(response).await;
    assert_eq!(items.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_may_read_but_not_write(pool: PgPool) {
    let officer = common::create_test_user(&pool, "po", Role::ProjectOfficer).await;
    let employee = common::create_test_user(&pool, "emp", Role::Employee).await;
    let officer_token = common::access_token_for(&officer);
    let employee_token = common::access_token_for(&employee);
    let app = common::build_test_app(pool);

    let project_id = create_project(app.clone(), &officer_token).await;
    let base = format!("/api/projects/{project_id}/budget");

    let response = post_json_auth(
        app.clone(),
        &base,
        item_body("9.99", "income", "2026-03-01"),
        &employee_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app.clone(), &base, &employee_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, &format!("{base}/summary"), &employee_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_amount_is_rejected(pool: PgPool) {
    let officer = common::create_test_user(&pool, "po", Role::ProjectOfficer).await;
    let token = common::access_token_for(&officer);
    let app = common::build_test_app(pool);

    let project_id = create_project(app.clone(), &token).await;

    let response = post_json_auth(
        app,
        &format!("/api/projects/{project_id}/budget"),
        item_body("-1.00", "expense", "2026-03-01"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

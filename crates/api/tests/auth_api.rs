//! Integration tests for the two session gate variants.
//!
//! The PIN and account gates are mutually exclusive: each mounts its own
//! endpoints and the other variant's endpoints must not exist.

mod common;

use axum::http::StatusCode;
use common::{
    account_request_json, body_json, build_account_test_app, build_test_app, get, post_json,
    TEST_PIN,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// PIN variant
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn verify_pin_grants_on_exact_match(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/verify-pin",
        serde_json::json!({ "pin": TEST_PIN }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    // The marker is client-side; the server never issues one.
    assert!(response.headers().get("set-cookie").is_none());

    let json = body_json(response).await;
    assert_eq!(json["granted"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn verify_pin_rejects_anything_else(pool: PgPool) {
    for body in [
        serde_json::json!({ "pin": "0000" }),
        serde_json::json!({ "pin": "" }),
        serde_json::json!({}),
    ] {
        let response = post_json(build_test_app(pool.clone()), "/api/verify-pin", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["granted"], false);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pin_mode_does_not_mount_account_endpoints(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin-login",
        serde_json::json!({ "user_id": "u1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(build_test_app(pool), "/api/admin-login-logs").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Account variant
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn account_mode_does_not_mount_verify_pin(pool: PgPool) {
    let response = post_json(
        build_account_test_app(pool),
        "/api/verify-pin",
        serde_json::json!({ "pin": TEST_PIN }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn account_mutations_require_provider_identity(pool: PgPool) {
    // No identity headers, no cookie tricks: the account gate rejects.
    let response = post_json(
        build_account_test_app(pool.clone()),
        "/api/absences",
        serde_json::json!({
            "badge_number": "1024",
            "location_name": "North Precinct"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn account_mode_stamps_the_signed_in_actor(pool: PgPool) {
    let response = account_request_json(
        build_account_test_app(pool.clone()),
        "POST",
        "/api/absences",
        serde_json::json!({
            "badge_number": "1024",
            "location_name": "North Precinct",
            "absence_date": "2024-03-01"
        }),
        "sgt@pd.example",
        "Sgt. Doe",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(build_account_test_app(pool), "/api/absences").await).await;
    assert_eq!(json[0]["created_by_email"], "sgt@pd.example");
    assert_eq!(json[0]["created_by_name"], "Sgt. Doe");
    assert_eq!(json[0]["updated_by_email"], "sgt@pd.example");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_login_is_recorded_and_queryable(pool: PgPool) {
    let response = account_request_json(
        build_account_test_app(pool.clone()),
        "POST",
        "/api/admin-login",
        serde_json::json!({
            "user_id": "usr_123",
            "user_email": "sgt@pd.example",
            "ip_address": "10.0.0.5",
            "user_agent": "Mozilla/5.0",
            "session_info": { "tab": "admin" }
        }),
        "sgt@pd.example",
        "Sgt. Doe",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // A second entry from someone else, to exercise the filter.
    account_request_json(
        build_account_test_app(pool.clone()),
        "POST",
        "/api/admin-login",
        serde_json::json!({ "user_id": "usr_456", "user_email": "lt@pd.example" }),
        "lt@pd.example",
        "Lt. Ray",
    )
    .await;

    let response = account_request_json(
        build_account_test_app(pool),
        "GET",
        "/api/admin-login-logs?user_email=sgt@pd.example",
        serde_json::json!({}),
        "sgt@pd.example",
        "Sgt. Doe",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user_id"], "usr_123");
    assert_eq!(rows[0]["session_info"]["tab"], "admin");
    assert!(rows[0]["login_timestamp"].is_string());
}

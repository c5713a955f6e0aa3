//! HTTP-level integration tests for the board CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    admin_delete, admin_post_json, admin_put_json, body_bytes, body_json, build_test_app, get,
    post_json,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Absences
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_absence_then_list_includes_it(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = admin_post_json(
        app,
        "/api/absences",
        serde_json::json!({
            "badge_number": "1024",
            "location_name": "North Precinct",
            "absence_date": "2024-03-01",
            "notes": "Out sick"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(
        body_bytes(response).await.is_empty(),
        "mutations answer with an empty body"
    );

    let response = get(build_test_app(pool), "/api/absences").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().expect("list is a JSON array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["badge_number"], "1024");
    assert_eq!(rows[0]["location_name"], "North Precinct");
    assert_eq!(rows[0]["absence_date"], "2024-03-01");
    assert!(rows[0]["id"].is_number(), "datastore assigns the id");
    // PIN mode grants no identity; audit columns carry the sentinel.
    assert_eq!(rows[0]["created_by_email"], "unknown");
    assert_eq!(rows[0]["updated_by_email"], "unknown");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn absences_list_orders_newest_date_first(pool: PgPool) {
    for date in ["2024-03-01", "2024-03-02"] {
        let response = admin_post_json(
            build_test_app(pool.clone()),
            "/api/absences",
            serde_json::json!({
                "badge_number": "1024",
                "location_name": "North Precinct",
                "absence_date": date
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(build_test_app(pool), "/api/absences").await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows[0]["absence_date"], "2024-03-02");
    assert_eq!(rows[1]["absence_date"], "2024-03-01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn absences_list_filters_to_one_calendar_day(pool: PgPool) {
    for date in ["2024-03-01", "2024-03-02"] {
        admin_post_json(
            build_test_app(pool.clone()),
            "/api/absences",
            serde_json::json!({
                "badge_number": "1024",
                "location_name": "North Precinct",
                "absence_date": date
            }),
        )
        .await;
    }

    let json = body_json(get(build_test_app(pool), "/api/absences?on=2024-03-01").await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["absence_date"], "2024-03-01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_absence_requires_badge_number(pool: PgPool) {
    let response = admin_post_json(
        build_test_app(pool.clone()),
        "/api/absences",
        serde_json::json!({ "location_name": "North Precinct" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing was inserted.
    let json = body_json(get(build_test_app(pool), "/api/absences").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mutations_require_the_session_marker(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/absences",
        serde_json::json!({
            "badge_number": "1024",
            "location_name": "North Precinct"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");

    // The public list stays open.
    let response = get(build_test_app(pool), "/api/absences").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_absence_replaces_fields_and_restamps(pool: PgPool) {
    admin_post_json(
        build_test_app(pool.clone()),
        "/api/absences",
        serde_json::json!({
            "badge_number": "1024",
            "location_name": "North Precinct",
            "absence_date": "2024-03-01",
            "notes": "Out sick"
        }),
    )
    .await;

    let json = body_json(get(build_test_app(pool.clone()), "/api/absences").await).await;
    let id = json[0]["id"].as_i64().unwrap();

    let response = admin_put_json(
        build_test_app(pool.clone()),
        &format!("/api/absences/{id}"),
        serde_json::json!({
            "badge_number": "1024",
            "location_name": "South Precinct",
            "covering_badge_number": "2048",
            "absence_date": "2024-03-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());

    let json = body_json(get(build_test_app(pool), "/api/absences").await).await;
    let row = &json[0];
    assert_eq!(row["id"].as_i64().unwrap(), id);
    assert_eq!(row["location_name"], "South Precinct");
    assert_eq!(row["covering_badge_number"], "2048");
    // Full-record replace: the omitted notes field is cleared.
    assert!(row["notes"].is_null());
    // created_by_* survives a replace.
    assert_eq!(row["created_by_email"], "unknown");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_of_missing_id_is_404(pool: PgPool) {
    let response = admin_put_json(
        build_test_app(pool),
        "/api/absences/999999",
        serde_json::json!({
            "badge_number": "1024",
            "location_name": "North Precinct",
            "absence_date": "2024-03-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_and_is_idempotent(pool: PgPool) {
    admin_post_json(
        build_test_app(pool.clone()),
        "/api/absences",
        serde_json::json!({
            "badge_number": "1024",
            "location_name": "North Precinct",
            "absence_date": "2024-03-01"
        }),
    )
    .await;
    let json = body_json(get(build_test_app(pool.clone()), "/api/absences").await).await;
    let id = json[0]["id"].as_i64().unwrap();

    let response = admin_delete(build_test_app(pool.clone()), &format!("/api/absences/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(pool.clone()), "/api/absences").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // Deleting the same id again is a silent success, not an error.
    let response = admin_delete(build_test_app(pool.clone()), &format!("/api/absences/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(pool), "/api/absences").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn equipment_down_to_fixed_scenario(pool: PgPool) {
    // An older record, so the new radio has something to be listed above.
    admin_post_json(
        build_test_app(pool.clone()),
        "/api/equipment",
        serde_json::json!({
            "equipment_type": "Vehicle",
            "equipment_id_number": "V-07",
            "title": "Patrol car 7",
            "status": "Repairing"
        }),
    )
    .await;

    let response = admin_post_json(
        build_test_app(pool.clone()),
        "/api/equipment",
        serde_json::json!({
            "equipment_type": "Radio",
            "equipment_id_number": "R-44",
            "title": "Unit 12 radio",
            "status": "Down"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // id DESC: the radio was inserted last, so it lists first.
    let json = body_json(get(build_test_app(pool.clone()), "/api/equipment").await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows[0]["equipment_id_number"], "R-44");
    assert_eq!(rows[0]["status"], "Down");
    let id = rows[0]["id"].as_i64().unwrap();

    let response = admin_put_json(
        build_test_app(pool.clone()),
        &format!("/api/equipment/{id}"),
        serde_json::json!({
            "equipment_type": "Radio",
            "equipment_id_number": "R-44",
            "title": "Unit 12 radio",
            "status": "Fixed"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(pool), "/api/equipment").await).await;
    let row = &json[0];
    assert_eq!(row["id"].as_i64().unwrap(), id);
    assert_eq!(row["status"], "Fixed");
    assert_eq!(row["equipment_type"], "Radio");
    assert_eq!(row["title"], "Unit 12 radio");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn equipment_status_outside_vocabulary_is_rejected(pool: PgPool) {
    let response = admin_post_json(
        build_test_app(pool),
        "/api/equipment",
        serde_json::json!({
            "equipment_type": "Radio",
            "equipment_id_number": "R-44",
            "title": "Unit 12 radio",
            "status": "Sideways"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// On-call staff
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn oncall_lists_in_insertion_order(pool: PgPool) {
    for (dept, person) in [("Detectives", "J. Marlowe"), ("K-9", "A. Rin")] {
        let response = admin_post_json(
            build_test_app(pool.clone()),
            "/api/oncall",
            serde_json::json!({
                "department_name": dept,
                "person_name": person,
                "phone_number": "555-0100"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(build_test_app(pool), "/api/oncall").await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows[0]["department_name"], "Detectives");
    assert_eq!(rows[1]["department_name"], "K-9");
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn notice_date_defaults_to_today_when_omitted(pool: PgPool) {
    let response = admin_post_json(
        build_test_app(pool.clone()),
        "/api/notices",
        serde_json::json!({
            "title": "Shift briefing moved",
            "text_content": "Briefing starts 06:30 until further notice."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let today = chrono::Local::now().date_naive().to_string();
    let json = body_json(get(build_test_app(pool), "/api/notices").await).await;
    assert_eq!(json[0]["notice_date"], today.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn notice_requires_title_and_text(pool: PgPool) {
    let response = admin_post_json(
        build_test_app(pool),
        "/api/notices",
        serde_json::json!({ "title": "Missing body" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

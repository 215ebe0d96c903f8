//! HTTP-level tests for complaint submission and triage.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get_auth, lazy_pool, post_json, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[tokio::test]
async fn blank_content_is_rejected_without_touching_the_store() {
    for body in [json!({ "content": "   " }), json!({ "contact_info": "qq 1234" })] {
        let app = common::build_test_app(lazy_pool());
        let response = post_json(app, "/api/v1/complaints", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn unknown_status_filter_is_rejected() {
    let app = common::build_test_app(lazy_pool());
    let response = get_auth(app, "/api/v1/complaints?status=archived", &admin_token(1)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn submitted_complaint_is_triaged_by_admin(pool: PgPool) {
    let token = admin_token(1);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/complaints",
        json!({ "content": "  Server lagging at night  ", "contact_info": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let id = json["id"].as_i64().unwrap();

    let pending = body_json(
        get_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/complaints?status=pending",
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(pending[0]["id"], id);
    assert_eq!(pending[0]["content"], "Server lagging at night");
    assert!(pending[0]["contact_info"].is_null());
    assert_eq!(pending[0]["origin"], "unknown");

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/complaints/{id}"),
        json!({ "status": "processed" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "processed");

    let pending = body_json(
        get_auth(
            common::build_test_app(pool),
            "/api/v1/complaints?status=pending",
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(pending.as_array().unwrap().len(), 0);
}

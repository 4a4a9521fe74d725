// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::common::{bearer, seed_admin, seed_client, spawn_app};
use axum::http::{header, StatusCode};

#[tokio::test]
async fn test_protected_endpoints_reject_anonymous_requests() {
    let app = spawn_app().await;

    let res = app.server.get("/api/admin/candidate-homes").await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);

    let res = app.server.get("/api/admin/clients").await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);

    let res = app.server.get("/api/portal/saved-homes").await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);

    let res = app.server.get("/api/portal/messages").await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let app = spawn_app().await;

    let res = app
        .server
        .get("/api/admin/candidate-homes")
        .add_header(
            header::AUTHORIZATION,
            header::HeaderValue::from_static("Bearer not-a-real-token"),
        )
        .await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);

    // Malformed scheme is treated the same as no credentials
    let res = app
        .server
        .get("/api/portal/saved-homes")
        .add_header(
            header::AUTHORIZATION,
            header::HeaderValue::from_static("Basic abc123"),
        )
        .await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_client_role_is_forbidden_on_admin_endpoints() {
    let app = spawn_app().await;
    let (_client, token) = seed_client(&app).await;

    let res = app
        .server
        .get("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::FORBIDDEN);

    let res = app
        .server
        .get("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::FORBIDDEN);

    let res = app
        .server
        .post("/api/admin/preview")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({ "url": "http://127.0.0.1:9/x" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_token_reaches_admin_endpoints() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;

    let res = app
        .server
        .get("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let res = app
        .server
        .get("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_client_token_reaches_portal_endpoints() {
    let app = spawn_app().await;
    let (_client, token) = seed_client(&app).await;

    let res = app
        .server
        .get("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_public_endpoints_need_no_session() {
    let app = spawn_app().await;

    let res = app.server.get("/health").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.text(), "OK");

    let res = app.server.get("/v1/version").await;
    assert_eq!(res.status_code(), StatusCode::OK);
}

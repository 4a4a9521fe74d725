// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::common::{bearer, seed_admin, spawn_app};
use axum::http::{header, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn test_provision_client_and_use_returned_token() {
    let app = spawn_app().await;
    let (_admin, admin_token) = seed_admin(&app).await;

    let res = app
        .server
        .post("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({
            "full_name": "Jane Buyer",
            "email": "jane@example.com",
            "phone": "555-0100"
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let body: Value = res.json();
    assert_eq!(body["profile"]["role"], "client");
    assert_eq!(body["profile"]["email"], "jane@example.com");

    // The session token handed back at provisioning works on the portal
    let client_token = body["token"].as_str().unwrap();
    let res = app
        .server
        .get("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(client_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    // But not on admin endpoints
    let res = app
        .server
        .get("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(client_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = spawn_app().await;
    let (_admin, admin_token) = seed_admin(&app).await;

    let payload = json!({ "full_name": "Jane Buyer", "email": "jane@example.com" });

    let res = app
        .server
        .post("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&payload)
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let res = app
        .server
        .post("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&payload)
        .await;
    assert_eq!(res.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_client_validation() {
    let app = spawn_app().await;
    let (_admin, admin_token) = seed_admin(&app).await;

    let res = app
        .server
        .post("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({ "full_name": "", "email": "jane@example.com" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let res = app
        .server
        .post("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({ "full_name": "Jane", "email": "not-an-email" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_update_delete_client() {
    let app = spawn_app().await;
    let (_admin, admin_token) = seed_admin(&app).await;

    let res = app
        .server
        .post("/api/admin/clients")
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({ "full_name": "Jane Buyer", "email": "jane@example.com" }))
        .await;
    let body: Value = res.json();
    let id = body["profile"]["id"].as_str().unwrap().to_string();
    let client_token = body["token"].as_str().unwrap().to_string();

    let res = app
        .server
        .get(&format!("/api/admin/clients/{}", id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let res = app
        .server
        .patch(&format!("/api/admin/clients/{}", id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({ "full_name": "Jane B. Buyer" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let updated: Value = res.json();
    assert_eq!(updated["full_name"], "Jane B. Buyer");

    let res = app
        .server
        .delete(&format!("/api/admin/clients/{}", id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let res = app
        .server
        .get(&format!("/api/admin/clients/{}", id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    // Deleting the profile revokes its sessions
    let res = app
        .server
        .get("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&client_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_client_is_404() {
    let app = spawn_app().await;
    let (admin, admin_token) = seed_admin(&app).await;

    let res = app
        .server
        .get(&format!("/api/admin/clients/{}", uuid::Uuid::new_v4()))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    // Admin profiles are not visible through the clients endpoint
    let res = app
        .server
        .get(&format!("/api/admin/clients/{}", admin.id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

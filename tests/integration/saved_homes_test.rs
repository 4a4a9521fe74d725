// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::common::{bearer, seed_client, spawn_app};
use axum::http::{header, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_list_delete_saved_home() {
    let app = spawn_app().await;
    let (_client, token) = seed_client(&app).await;

    let res = app
        .server
        .post("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({
            "url": "https://www.redfin.com/WA/Seattle/home/1",
            "title": "123 Main St",
            "price": "$750,000",
            "notes": "close to the park"
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    let created: Value = res.json();
    assert_eq!(created["price"], "$750,000");

    let res = app
        .server
        .get("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let listed: Value = res.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let id = created["id"].as_str().unwrap();
    let res = app
        .server
        .delete(&format!("/api/portal/saved-homes/{}", id))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let res = app
        .server
        .get("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    let listed: Value = res.json();
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_bookmark_is_conflict() {
    let app = spawn_app().await;
    let (_client, token) = seed_client(&app).await;

    let payload = json!({ "url": "https://www.redfin.com/WA/Seattle/home/1" });

    let res = app
        .server
        .post("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&payload)
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let res = app
        .server
        .post("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&payload)
        .await;
    assert_eq!(res.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_same_url_allowed_for_different_clients() {
    let app = spawn_app().await;
    let (_first, first_token) = seed_client(&app).await;
    let (_second, second_token) = seed_client(&app).await;

    let payload = json!({ "url": "https://www.redfin.com/WA/Seattle/home/1" });

    let res = app
        .server
        .post("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&first_token))
        .json(&payload)
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    // The unique constraint is per (client, url), not global
    let res = app
        .server
        .post("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&second_token))
        .json(&payload)
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let app = spawn_app().await;
    let (_client, token) = seed_client(&app).await;

    let res = app
        .server
        .post("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "url": "ftp://example.com/listing" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cannot_delete_another_clients_bookmark() {
    let app = spawn_app().await;
    let (_owner, owner_token) = seed_client(&app).await;
    let (_other, other_token) = seed_client(&app).await;

    let res = app
        .server
        .post("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&owner_token))
        .json(&json!({ "url": "https://www.redfin.com/WA/Seattle/home/1" }))
        .await;
    let created: Value = res.json();
    let id = created["id"].as_str().unwrap();

    // Foreign bookmark looks like a missing one
    let res = app
        .server
        .delete(&format!("/api/portal/saved-homes/{}", id))
        .add_header(header::AUTHORIZATION, bearer(&other_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    let res = app
        .server
        .get("/api/portal/saved-homes")
        .add_header(header::AUTHORIZATION, bearer(&owner_token))
        .await;
    let listed: Value = res.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

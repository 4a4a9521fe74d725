// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::common::{bearer, seed_admin, spawn_app, TestApp};
use axum::http::{header, StatusCode};
use homeport::domain::models::candidate_home::{
    CandidateHome, CandidateSource, NewCandidate,
};
use homeport::domain::repositories::candidate_home_repository::CandidateHomeRepository;
use serde_json::{json, Value};

async fn seed_candidate(app: &TestApp, url: &str) -> CandidateHome {
    let home = CandidateHome::from_listing(
        NewCandidate {
            url: url.to_string(),
            address: Some("123 Main St, Seattle, WA".to_string()),
            price: Some("$750,000".to_string()),
            price_numeric: Some(750_000),
            ..Default::default()
        },
        CandidateSource::Redfin,
    );
    app.candidate_repo.create(&home).await.expect("seed candidate")
}

#[tokio::test]
async fn test_manual_create_then_duplicate_conflict() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;

    // The preview fetch fails fast against a closed port and the
    // candidate is still created with null enrichment
    let res = app
        .server
        .post("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "url": "http://127.0.0.1:9/home/1" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let body: Value = res.json();
    assert_eq!(body["status"], "new");
    assert_eq!(body["source"], "manual");
    assert_eq!(body["url"], "http://127.0.0.1:9/home/1");
    assert!(body["title"].is_null());
    assert!(body["price"].is_null());

    let res = app
        .server
        .post("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "url": "http://127.0.0.1:9/home/1" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_manual_create_rejects_non_http_url() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;

    let res = app
        .server
        .post("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "url": "not a url" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upsert_by_url_is_idempotent() {
    let app = spawn_app().await;

    let home = CandidateHome::from_listing(
        NewCandidate {
            url: "https://www.redfin.com/WA/Seattle/home/42".to_string(),
            ..Default::default()
        },
        CandidateSource::Redfin,
    );

    let inserted = app
        .candidate_repo
        .insert_ignore_duplicate_url(&home)
        .await
        .unwrap();
    assert!(inserted);

    // Same URL again, different row id: silently ignored
    let again = CandidateHome::from_listing(
        NewCandidate {
            url: "https://www.redfin.com/WA/Seattle/home/42".to_string(),
            ..Default::default()
        },
        CandidateSource::Redfin,
    );
    let inserted = app
        .candidate_repo
        .insert_ignore_duplicate_url(&again)
        .await
        .unwrap();
    assert!(!inserted);

    let all = app.candidate_repo.list_by_statuses(&[]).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_bulk_status_update() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;

    let first = seed_candidate(&app, "https://example.com/1").await;
    let second = seed_candidate(&app, "https://example.com/2").await;

    let res = app
        .server
        .patch("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "ids": [first.id, second.id], "status": "saved" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body: Value = res.json();
    assert_eq!(body["updated"], 2);

    let res = app
        .server
        .get("/api/admin/candidate-homes?status=saved")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    let listed: Value = res.json();
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_bulk_status_update_rejects_sent() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;
    let home = seed_candidate(&app, "https://example.com/1").await;

    let res = app
        .server
        .patch("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "ids": [home.id], "status": "sent" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let res = app
        .server
        .patch("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "ids": [home.id], "status": "archived" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let res = app
        .server
        .patch("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "ids": [], "status": "saved" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_saved_filter_includes_sent_rows() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;

    let saved = seed_candidate(&app, "https://example.com/saved").await;
    let sent = seed_candidate(&app, "https://example.com/sent").await;
    let _new = seed_candidate(&app, "https://example.com/new").await;

    app.candidate_repo
        .update_status_bulk(&[saved.id], "saved".parse().unwrap())
        .await
        .unwrap();
    app.candidate_repo
        .mark_sent(&[sent.id], None, chrono::Utc::now().into())
        .await
        .unwrap();

    let res = app
        .server
        .get("/api/admin/candidate-homes?status=saved")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let listed: Value = res.json();
    let statuses: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["status"].as_str().unwrap())
        .collect();

    assert_eq!(statuses.len(), 2);
    assert!(statuses.contains(&"saved"));
    assert!(statuses.contains(&"sent"));
}

#[tokio::test]
async fn test_list_filters_and_rejects_unknown() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;

    seed_candidate(&app, "https://example.com/1").await;

    let res = app
        .server
        .get("/api/admin/candidate-homes?status=new")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let listed: Value = res.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // No filter returns everything
    let res = app
        .server
        .get("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    let listed: Value = res.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let res = app
        .server
        .get("/api/admin/candidate-homes?status=bogus")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_notes_and_delete() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;
    let home = seed_candidate(&app, "https://example.com/1").await;

    let res = app
        .server
        .patch(&format!("/api/admin/candidate-homes/{}", home.id))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "notes": "Needs a new roof" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let body: Value = res.json();
    assert_eq!(body["notes"], "Needs a new roof");

    let res = app
        .server
        .delete(&format!("/api/admin/candidate-homes/{}", home.id))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let res = app
        .server
        .delete(&format!("/api/admin/candidate-homes/{}", home.id))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

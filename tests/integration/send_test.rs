// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::common::{bearer, seed_admin, seed_client, spawn_app, spawn_app_with, TestApp, TestOverrides};
use axum::http::{header, StatusCode};
use homeport::domain::models::candidate_home::{
    CandidateHome, CandidateSource, CandidateStatus, NewCandidate,
};
use homeport::domain::repositories::candidate_home_repository::CandidateHomeRepository;
use homeport::domain::repositories::saved_home_repository::SavedHomeRepository;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn seed_candidate(app: &TestApp, url: &str) -> CandidateHome {
    let home = CandidateHome::from_listing(
        NewCandidate {
            url: url.to_string(),
            address: Some("123 Main St, Seattle, WA".to_string()),
            price: Some("$750,000".to_string()),
            price_numeric: Some(750_000),
            image_url: Some("https://cdn.example.com/1.jpg".to_string()),
            ..Default::default()
        },
        CandidateSource::Redfin,
    );
    app.candidate_repo.create(&home).await.expect("seed candidate")
}

#[tokio::test]
async fn test_send_to_client_with_save_copies_and_stamps() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;
    let (client, _client_token) = seed_client(&app).await;

    let first = seed_candidate(&app, "https://example.com/1").await;
    let second = seed_candidate(&app, "https://example.com/2").await;

    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({
            "candidate_ids": [first.id, second.id],
            "client_id": client.id,
            "message": "These two look like your style",
            "save_to_client": true
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let outcome: Value = res.json();
    assert_eq!(outcome["recipient"], client.email.as_str());
    assert_eq!(outcome["sent"], 2);
    assert_eq!(outcome["saved"], 2);
    // No provider key configured: logged, not delivered
    assert_eq!(outcome["email_delivered"], false);

    // One saved home per candidate, owned by the client
    let saved = app.saved_repo.list_for_client(client.id).await.unwrap();
    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|h| h.client_id == client.id));

    // Source rows are stamped sent with the client id
    let homes = app
        .candidate_repo
        .find_by_ids(&[first.id, second.id])
        .await
        .unwrap();
    for home in &homes {
        assert_eq!(home.status, CandidateStatus::Sent);
        assert_eq!(home.sent_to_client_id, Some(client.id));
        assert!(home.sent_at.is_some());
    }
}

#[tokio::test]
async fn test_resend_is_idempotent_ish() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;
    let (client, _) = seed_client(&app).await;
    let home = seed_candidate(&app, "https://example.com/1").await;

    let payload = json!({
        "candidate_ids": [home.id],
        "client_id": client.id,
        "save_to_client": true
    });

    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&payload)
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    // A second send re-upserts and re-stamps without growing anything
    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&payload)
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let outcome: Value = res.json();
    assert_eq!(outcome["saved"], 0);

    let saved = app.saved_repo.list_for_client(client.id).await.unwrap();
    assert_eq!(saved.len(), 1);
}

#[tokio::test]
async fn test_send_to_raw_email_leaves_client_id_null() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;
    let home = seed_candidate(&app, "https://example.com/1").await;

    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({
            "candidate_ids": [home.id],
            "email": "friend@example.com",
            "save_to_client": true
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let outcome: Value = res.json();
    assert_eq!(outcome["recipient"], "friend@example.com");
    // save_to_client has no target without a client
    assert_eq!(outcome["saved"], 0);

    let homes = app.candidate_repo.find_by_ids(&[home.id]).await.unwrap();
    assert_eq!(homes[0].status, CandidateStatus::Sent);
    assert_eq!(homes[0].sent_to_client_id, None);
}

#[tokio::test]
async fn test_send_validation_failures() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;
    let home = seed_candidate(&app, "https://example.com/1").await;

    // No recipient at all
    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "candidate_ids": [home.id] }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    // Bad email syntax
    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "candidate_ids": [home.id], "email": "not-an-email" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    // Empty selection
    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "candidate_ids": [], "email": "a@example.com" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    // Unknown client
    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({
            "candidate_ids": [home.id],
            "client_id": uuid::Uuid::new_v4()
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    // Selection that matches no rows
    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({
            "candidate_ids": [uuid::Uuid::new_v4()],
            "email": "a@example.com"
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_send_delivers_through_configured_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = spawn_app_with(TestOverrides {
        email_api_url: Some(format!("{}/emails", mock_server.uri())),
        email_api_key: Some("test-key".to_string()),
        ..Default::default()
    })
    .await;
    let (_admin, token) = seed_admin(&app).await;
    let home = seed_candidate(&app, "https://example.com/1").await;

    let res = app
        .server
        .post("/api/admin/candidate-homes/send")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({
            "candidate_ids": [home.id],
            "email": "friend@example.com"
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let outcome: Value = res.json();
    assert_eq!(outcome["email_delivered"], true);
}

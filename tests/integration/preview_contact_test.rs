// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::common::{bearer, seed_admin, spawn_app, spawn_app_with, TestOverrides};
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PAGE: &str = r#"<html><head>
    <meta property="og:title" content="123 Main St, Seattle, WA 98101 | $750,000 | Redfin" />
    <meta property="og:image" content="https://cdn.example.com/1.jpg" />
    <meta property="og:description" content="3 beds, 2 baths home listed for $750,000." />
    </head><body></body></html>"#;

async fn start_listing_server() -> String {
    let app = Router::new().route(
        "/listing",
        get(|| async { axum::response::Html(LISTING_PAGE) }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_preview_extracts_listing_fields() {
    let listing_url = start_listing_server().await;
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;

    let res = app
        .server
        .post("/api/admin/preview")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "url": format!("{}/listing", listing_url) }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let preview: Value = res.json();
    assert_eq!(preview["price"], "$750,000");
    assert_eq!(preview["address"], "123 Main St, Seattle, WA 98101");
    assert_eq!(preview["image_url"], "https://cdn.example.com/1.jpg");
}

#[tokio::test]
async fn test_preview_degrades_to_nulls_on_unreachable_url() {
    let app = spawn_app().await;
    let (_admin, token) = seed_admin(&app).await;

    let res = app
        .server
        .post("/api/admin/preview")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "url": "http://127.0.0.1:9/nowhere" }))
        .await;
    // Best-effort enrichment never surfaces an error
    assert_eq!(res.status_code(), StatusCode::OK);

    let preview: Value = res.json();
    assert!(preview["title"].is_null());
    assert!(preview["image_url"].is_null());
    assert!(preview["description"].is_null());
    assert!(preview["address"].is_null());
    assert!(preview["price"].is_null());
}

#[tokio::test]
async fn test_contact_returns_200_without_provider() {
    let app = spawn_app().await;

    let res = app
        .server
        .post("/api/contact")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Looking to sell in the spring"
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body: Value = res.json();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_contact_sends_exactly_one_email_when_configured() {
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

    let res = app
        .server
        .post("/api/contact")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Looking to sell in the spring"
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_contact_validation() {
    let app = spawn_app().await;

    let res = app
        .server
        .post("/api/contact")
        .json(&json!({ "name": "", "email": "jane@example.com", "message": "hi" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let res = app
        .server
        .post("/api/contact")
        .json(&json!({ "name": "Jane", "email": "nope", "message": "hi" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let res = app
        .server
        .post("/api/contact")
        .json(&json!({ "name": "Jane", "email": "jane@example.com", "message": " " }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_newsletter_signup() {
    let app = spawn_app().await;

    let res = app
        .server
        .post("/api/newsletter")
        .json(&json!({ "email": "sub@example.com" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let res = app
        .server
        .post("/api/newsletter")
        .json(&json!({ "email": "not-an-email" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

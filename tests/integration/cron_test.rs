// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::common::{bearer, seed_admin, spawn_app, spawn_app_with, TestOverrides, CRON_SECRET};
use axum::http::{header, StatusCode};
use homeport::domain::models::search_criterion::SearchCriterion;
use homeport::domain::repositories::candidate_home_repository::CandidateHomeRepository;
use homeport::domain::repositories::search_criterion_repository::SearchCriterionRepository;
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_BODY: &str = r#"{}&&{
    "payload": {
        "homes": [
            {
                "homeData": {
                    "url": "/WA/Seattle/123-Main-St/home/1",
                    "addressInfo": { "formattedStreetLine": "123 Main St", "city": "Seattle", "state": "WA", "zip": "98101" },
                    "priceInfo": { "amount": "750000" },
                    "bedInfo": { "beds": 3 },
                    "bathInfo": { "computedTotalBaths": 2 },
                    "sqftInfo": { "amount": 1850 },
                    "photosInfo": { "bestPhotoUrl": "https://cdn.example.com/1.jpg" }
                }
            },
            {
                "homeData": {
                    "url": "/WA/Seattle/456-Oak-Ave/home/2",
                    "priceInfo": { "amount": 899950 }
                }
            }
        ]
    }
}"#;

#[tokio::test]
async fn test_cron_requires_shared_secret() {
    let app = spawn_app().await;

    let res = app.server.post("/api/cron/candidate-homes").await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);

    let res = app
        .server
        .post("/api/cron/candidate-homes")
        .add_header(
            header::AUTHORIZATION,
            header::HeaderValue::from_static("Bearer wrong-secret"),
        )
        .await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cron_ingests_and_is_idempotent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stingray/api/gis"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
        .mount(&mock_server)
        .await;

    let app = spawn_app_with(TestOverrides {
        search_api_url: Some(format!("{}/stingray/api/gis", mock_server.uri())),
        ..Default::default()
    })
    .await;

    let criterion = SearchCriterion::new("29439".to_string(), 6, None, None, None, None, None);
    app.criteria_repo.create(&criterion).await.unwrap();

    let res = app
        .server
        .post("/api/cron/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(CRON_SECRET))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body: Value = res.json();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["success"], true);
    assert_eq!(results[0]["found"], 2);
    assert_eq!(results[0]["inserted"], 2);

    // Unchanged source data inserts zero additional rows
    let res = app
        .server
        .post("/api/cron/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(CRON_SECRET))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body: Value = res.json();
    assert_eq!(body["results"][0]["inserted"], 0);

    let homes = app.candidate_repo.list_by_statuses(&[]).await.unwrap();
    assert_eq!(homes.len(), 2);

    let full = homes
        .iter()
        .find(|h| h.url.ends_with("/home/1"))
        .expect("full home present");
    assert_eq!(full.address.as_deref(), Some("123 Main St, Seattle, WA 98101"));
    assert_eq!(full.price.as_deref(), Some("$750,000"));
    assert_eq!(full.price_numeric, Some(750_000));
    assert_eq!(full.beds, Some(3.0));
    assert_eq!(full.sqft, Some(1850));
    assert_eq!(full.source.to_string(), "redfin");
}

#[tokio::test]
async fn test_cron_isolates_criterion_failures() {
    let mock_server = MockServer::start().await;

    // Region A answers, region B blows up
    Mock::given(method("GET"))
        .and(path("/stingray/api/gis"))
        .and(query_param("region_id", "region-a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stingray/api/gis"))
        .and(query_param("region_id", "region-b"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let app = spawn_app_with(TestOverrides {
        search_api_url: Some(format!("{}/stingray/api/gis", mock_server.uri())),
        ..Default::default()
    })
    .await;

    let a = SearchCriterion::new("region-a".to_string(), 6, None, None, None, None, None);
    app.criteria_repo.create(&a).await.unwrap();
    let b = SearchCriterion::new("region-b".to_string(), 6, None, None, None, None, None);
    app.criteria_repo.create(&b).await.unwrap();

    let res = app
        .server
        .post("/api/cron/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(CRON_SECRET))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body: Value = res.json();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);

    let result_a = results
        .iter()
        .find(|r| r["region_id"] == "region-a")
        .unwrap();
    let result_b = results
        .iter()
        .find(|r| r["region_id"] == "region-b")
        .unwrap();

    // One criterion failing does not abort the other
    assert_eq!(result_a["success"], true);
    assert_eq!(result_a["inserted"], 2);
    assert_eq!(result_b["success"], false);
    assert!(result_b["message"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_cron_skips_inactive_criteria() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stingray/api/gis"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
        .mount(&mock_server)
        .await;

    let app = spawn_app_with(TestOverrides {
        search_api_url: Some(format!("{}/stingray/api/gis", mock_server.uri())),
        ..Default::default()
    })
    .await;
    let (_admin, admin_token) = seed_admin(&app).await;

    let mut criterion =
        SearchCriterion::new("29439".to_string(), 6, None, None, None, None, None);
    criterion.is_active = false;
    app.criteria_repo.create(&criterion).await.unwrap();

    let res = app
        .server
        .post("/api/cron/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(CRON_SECRET))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body: Value = res.json();
    assert!(body["results"].as_array().unwrap().is_empty());

    let res = app
        .server
        .get("/api/admin/candidate-homes")
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .await;
    let listed: Value = res.json();
    assert!(listed.as_array().unwrap().is_empty());
}

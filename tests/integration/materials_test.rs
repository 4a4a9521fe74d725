// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::common::{bearer, seed_admin, seed_client, spawn_app};
use axum::http::{header, StatusCode};
use serde_json::{json, Value};

// "Hello material" in base64
const CONTENT_B64: &str = "SGVsbG8gbWF0ZXJpYWw=";

#[tokio::test]
async fn test_upload_download_delete_material() {
    let app = spawn_app().await;
    let (_admin, admin_token) = seed_admin(&app).await;
    let (client, client_token) = seed_client(&app).await;

    let res = app
        .server
        .post(&format!("/api/admin/clients/{}/materials", client.id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({
            "file_name": "inspection-report.pdf",
            "file_type": "application/pdf",
            "description": "Inspection results",
            "content_base64": CONTENT_B64
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let material: Value = res.json();
    assert_eq!(material["file_name"], "inspection-report.pdf");
    assert_eq!(material["file_size"], 14);
    let material_id = material["id"].as_str().unwrap().to_string();

    // The client sees it in the portal
    let res = app
        .server
        .get("/api/portal/materials")
        .add_header(header::AUTHORIZATION, bearer(&client_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let listed: Value = res.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // And can download the blob
    let res = app
        .server
        .get(&format!("/api/portal/materials/{}/download", material_id))
        .add_header(header::AUTHORIZATION, bearer(&client_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.text(), "Hello material");

    // Deleting the row removes the blob too
    let res = app
        .server
        .delete(&format!("/api/admin/materials/{}", material_id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let file_path = material["file_path"].as_str().unwrap();
    use homeport::domain::repositories::storage_repository::StorageRepository;
    assert!(!app.storage.exists(file_path).await.unwrap());

    let res = app
        .server
        .get(&format!("/api/portal/materials/{}/download", material_id))
        .add_header(header::AUTHORIZATION, bearer(&client_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clients_cannot_download_foreign_materials() {
    let app = spawn_app().await;
    let (_admin, admin_token) = seed_admin(&app).await;
    let (owner, _owner_token) = seed_client(&app).await;
    let (_other, other_token) = seed_client(&app).await;

    let res = app
        .server
        .post(&format!("/api/admin/clients/{}/materials", owner.id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({
            "file_name": "private.pdf",
            "file_type": "application/pdf",
            "content_base64": CONTENT_B64
        }))
        .await;
    let material: Value = res.json();
    let material_id = material["id"].as_str().unwrap();

    let res = app
        .server
        .get(&format!("/api/portal/materials/{}/download", material_id))
        .add_header(header::AUTHORIZATION, bearer(&other_token))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_validation() {
    let app = spawn_app().await;
    let (_admin, admin_token) = seed_admin(&app).await;
    let (client, _) = seed_client(&app).await;

    // Unknown client
    let res = app
        .server
        .post(&format!(
            "/api/admin/clients/{}/materials",
            uuid::Uuid::new_v4()
        ))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({
            "file_name": "a.pdf",
            "file_type": "application/pdf",
            "content_base64": CONTENT_B64
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    // Bad base64
    let res = app
        .server
        .post(&format!("/api/admin/clients/{}/materials", client.id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({
            "file_name": "a.pdf",
            "file_type": "application/pdf",
            "content_base64": "!!! not base64 !!!"
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    // Empty file name
    let res = app
        .server
        .post(&format!("/api/admin/clients/{}/materials", client.id))
        .add_header(header::AUTHORIZATION, bearer(&admin_token))
        .json(&json!({
            "file_name": "  ",
            "file_type": "application/pdf",
            "content_base64": CONTENT_B64
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

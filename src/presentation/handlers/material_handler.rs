// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Extension, Json, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::material::Material;
use crate::domain::models::profile::{Profile, Role};
use crate::domain::repositories::material_repository::MaterialRepository;
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::infrastructure::repositories::material_repo_impl::MaterialRepositoryImpl;
use crate::infrastructure::repositories::profile_repo_impl::ProfileRepositoryImpl;
use crate::presentation::errors::AppError;

#[derive(Deserialize)]
pub struct UploadMaterialPayload {
    pub file_name: String,
    pub file_type: String,
    pub description: Option<String>,
    /// Base64编码的文件内容
    pub content_base64: String,
}

pub async fn upload_material(
    Path(client_id): Path<Uuid>,
    Extension(material_repo): Extension<Arc<MaterialRepositoryImpl>>,
    Extension(profile_repo): Extension<Arc<ProfileRepositoryImpl>>,
    Extension(storage): Extension<Arc<dyn StorageRepository + Send + Sync>>,
    Json(payload): Json<UploadMaterialPayload>,
) -> Result<Response, AppError> {
    if payload.file_name.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "file_name cannot be empty" })),
        )
            .into_response());
    }

    let client = profile_repo.find_by_id(client_id).await?;
    if !matches!(client, Some(ref profile) if profile.role == Role::Client) {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "client not found" })),
        )
            .into_response());
    }

    let bytes = match base64::engine::general_purpose::STANDARD.decode(&payload.content_base64) {
        Ok(bytes) => bytes,
        Err(_) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid base64 content" })),
            )
                .into_response());
        }
    };

    let material = Material::new(
        client_id,
        payload.file_name.trim().to_string(),
        bytes.len() as i64,
        payload.file_type,
        payload.description,
    );

    // Blob first, then the row; a failed insert leaves an orphan
    // blob rather than a dangling row
    storage.save(&material.file_path, &bytes).await?;
    let material = material_repo.create(&material).await?;

    info!(
        "Uploaded material {} ({} bytes) for client {}",
        material.id, material.file_size, client_id
    );

    Ok((StatusCode::CREATED, Json(material)).into_response())
}

pub async fn delete_material(
    Path(id): Path<Uuid>,
    Extension(material_repo): Extension<Arc<MaterialRepositoryImpl>>,
    Extension(storage): Extension<Arc<dyn StorageRepository + Send + Sync>>,
) -> Result<Response, AppError> {
    let Some(material) = material_repo.find_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "material not found" })),
        )
            .into_response());
    };

    // Row deletion cascades to the blob
    storage.delete(&material.file_path).await?;
    material_repo.delete(id).await?;

    info!("Deleted material {} for client {}", id, material.client_id);
    Ok(Json(json!({ "deleted": true })).into_response())
}

pub async fn list_my_materials(
    Extension(profile): Extension<Profile>,
    Extension(material_repo): Extension<Arc<MaterialRepositoryImpl>>,
) -> Result<Response, AppError> {
    let materials = material_repo.list_for_client(profile.id).await?;
    Ok(Json(materials).into_response())
}

pub async fn download_material(
    Path(id): Path<Uuid>,
    Extension(profile): Extension<Profile>,
    Extension(material_repo): Extension<Arc<MaterialRepositoryImpl>>,
    Extension(storage): Extension<Arc<dyn StorageRepository + Send + Sync>>,
) -> Result<Response, AppError> {
    let material = material_repo.find_by_id(id).await?;

    // Clients can only reach their own materials; a foreign id
    // looks identical to a missing one
    let Some(material) = material.filter(|m| m.client_id == profile.id) else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "material not found" })),
        )
            .into_response());
    };

    let Some(bytes) = storage.get(&material.file_path).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "material content is gone" })),
        )
            .into_response());
    };

    Ok((
        [
            (header::CONTENT_TYPE, material.file_type.clone()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", material.file_name),
            ),
        ],
        bytes,
    )
        .into_response())
}

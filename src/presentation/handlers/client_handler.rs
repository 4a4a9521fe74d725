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
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::profile::{Profile, Role};
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::repositories::session_token_repository::SessionTokenRepository;
use crate::infrastructure::repositories::profile_repo_impl::ProfileRepositoryImpl;
use crate::infrastructure::repositories::session_token_repo_impl::SessionTokenRepositoryImpl;
use crate::presentation::errors::AppError;
use crate::utils::validators::is_valid_email;

#[derive(Deserialize)]
pub struct CreateClientPayload {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateClientPayload {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub async fn list_clients(
    Extension(profile_repo): Extension<Arc<ProfileRepositoryImpl>>,
) -> Result<Response, AppError> {
    let clients = profile_repo.list_clients().await?;
    Ok(Json(clients).into_response())
}

pub async fn create_client(
    Extension(profile_repo): Extension<Arc<ProfileRepositoryImpl>>,
    Extension(token_repo): Extension<Arc<SessionTokenRepositoryImpl>>,
    Json(payload): Json<CreateClientPayload>,
) -> Result<Response, AppError> {
    if payload.full_name.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "full_name cannot be empty" })),
        )
            .into_response());
    }
    if !is_valid_email(&payload.email) {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid email address" })),
        )
            .into_response());
    }

    if profile_repo.find_by_email(&payload.email).await?.is_some() {
        return Ok((
            StatusCode::CONFLICT,
            Json(json!({ "error": "a profile with this email already exists" })),
        )
            .into_response());
    }

    let profile = Profile::new_client(
        payload.full_name.trim().to_string(),
        payload.email,
        payload.phone,
    );
    let profile = profile_repo.create(&profile).await?;

    // The token is only returned once, at provisioning time
    let token = token_repo.create(profile.id).await?;

    info!("Provisioned client profile {} ({})", profile.id, profile.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "profile": profile, "token": token })),
    )
        .into_response())
}

pub async fn get_client(
    Path(id): Path<Uuid>,
    Extension(profile_repo): Extension<Arc<ProfileRepositoryImpl>>,
) -> Result<Response, AppError> {
    match profile_repo.find_by_id(id).await? {
        Some(profile) if profile.role == Role::Client => Ok(Json(profile).into_response()),
        _ => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "client not found" })),
        )
            .into_response()),
    }
}

pub async fn update_client(
    Path(id): Path<Uuid>,
    Extension(profile_repo): Extension<Arc<ProfileRepositoryImpl>>,
    Json(payload): Json<UpdateClientPayload>,
) -> Result<Response, AppError> {
    let Some(mut profile) = profile_repo.find_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "client not found" })),
        )
            .into_response());
    };

    if let Some(full_name) = payload.full_name {
        if full_name.trim().is_empty() {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "full_name cannot be empty" })),
            )
                .into_response());
        }
        profile.full_name = full_name.trim().to_string();
    }

    if let Some(email) = payload.email {
        if !is_valid_email(&email) {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid email address" })),
            )
                .into_response());
        }
        if email != profile.email && profile_repo.find_by_email(&email).await?.is_some() {
            return Ok((
                StatusCode::CONFLICT,
                Json(json!({ "error": "a profile with this email already exists" })),
            )
                .into_response());
        }
        profile.email = email;
    }

    if let Some(phone) = payload.phone {
        profile.phone = if phone.trim().is_empty() {
            None
        } else {
            Some(phone)
        };
    }

    let updated = profile_repo.update(&profile).await?;
    Ok(Json(updated).into_response())
}

pub async fn delete_client(
    Path(id): Path<Uuid>,
    Extension(profile_repo): Extension<Arc<ProfileRepositoryImpl>>,
    Extension(token_repo): Extension<Arc<SessionTokenRepositoryImpl>>,
) -> Result<Response, AppError> {
    // Revoke sessions before the profile row disappears
    token_repo.delete_for_profile(id).await?;
    profile_repo.delete(id).await?;

    info!("Deleted client profile {}", id);
    Ok(Json(json!({ "deleted": true })).into_response())
}

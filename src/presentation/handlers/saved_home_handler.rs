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
use uuid::Uuid;

use crate::domain::models::profile::Profile;
use crate::domain::models::saved_home::SavedHome;
use crate::domain::repositories::saved_home_repository::SavedHomeRepository;
use crate::infrastructure::repositories::saved_home_repo_impl::SavedHomeRepositoryImpl;
use crate::presentation::errors::AppError;
use crate::utils::validators::is_http_url;

#[derive(Deserialize)]
pub struct CreateSavedHomePayload {
    pub url: String,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub price: Option<String>,
    pub notes: Option<String>,
}

pub async fn list_saved_homes(
    Extension(profile): Extension<Profile>,
    Extension(saved_repo): Extension<Arc<SavedHomeRepositoryImpl>>,
) -> Result<Response, AppError> {
    let homes = saved_repo.list_for_client(profile.id).await?;
    Ok(Json(homes).into_response())
}

pub async fn create_saved_home(
    Extension(profile): Extension<Profile>,
    Extension(saved_repo): Extension<Arc<SavedHomeRepositoryImpl>>,
    Json(payload): Json<CreateSavedHomePayload>,
) -> Result<Response, AppError> {
    if !is_http_url(&payload.url) {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "url must be a valid http(s) link" })),
        )
            .into_response());
    }

    let home = SavedHome::new(
        profile.id,
        payload.url,
        payload.title,
        payload.image_url,
        payload.address,
        payload.price,
        payload.notes,
    );

    // Duplicate bookmark of the same listing is a 409
    let home = saved_repo.create(&home).await?;
    Ok((StatusCode::CREATED, Json(home)).into_response())
}

pub async fn delete_saved_home(
    Path(id): Path<Uuid>,
    Extension(profile): Extension<Profile>,
    Extension(saved_repo): Extension<Arc<SavedHomeRepositoryImpl>>,
) -> Result<Response, AppError> {
    let home = saved_repo.find_by_id(id).await?;

    // A foreign id looks identical to a missing one
    let Some(home) = home.filter(|h| h.client_id == profile.id) else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "saved home not found" })),
        )
            .into_response());
    };

    saved_repo.delete(home.id).await?;
    Ok(Json(json!({ "deleted": true })).into_response())
}

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

use crate::domain::models::search_criterion::SearchCriterion;
use crate::domain::repositories::search_criterion_repository::SearchCriterionRepository;
use crate::infrastructure::repositories::search_criterion_repo_impl::SearchCriterionRepositoryImpl;
use crate::presentation::errors::AppError;

#[derive(Deserialize)]
pub struct CreateCriterionPayload {
    pub region_id: String,
    pub region_type: i32,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_beds: Option<i32>,
    pub min_baths: Option<i32>,
    pub property_types: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCriterionPayload {
    pub region_id: Option<String>,
    pub region_type: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_beds: Option<i32>,
    pub min_baths: Option<i32>,
    pub property_types: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn list_criteria(
    Extension(criteria_repo): Extension<Arc<SearchCriterionRepositoryImpl>>,
) -> Result<Response, AppError> {
    let criteria = criteria_repo.list().await?;
    Ok(Json(criteria).into_response())
}

pub async fn create_criterion(
    Extension(criteria_repo): Extension<Arc<SearchCriterionRepositoryImpl>>,
    Json(payload): Json<CreateCriterionPayload>,
) -> Result<Response, AppError> {
    if payload.region_id.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "region_id cannot be empty" })),
        )
            .into_response());
    }

    let criterion = SearchCriterion::new(
        payload.region_id.trim().to_string(),
        payload.region_type,
        payload.min_price,
        payload.max_price,
        payload.min_beds,
        payload.min_baths,
        payload.property_types,
    );

    let criterion = criteria_repo.create(&criterion).await?;
    Ok((StatusCode::CREATED, Json(criterion)).into_response())
}

pub async fn update_criterion(
    Path(id): Path<Uuid>,
    Extension(criteria_repo): Extension<Arc<SearchCriterionRepositoryImpl>>,
    Json(payload): Json<UpdateCriterionPayload>,
) -> Result<Response, AppError> {
    let Some(mut criterion) = criteria_repo.find_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "search criterion not found" })),
        )
            .into_response());
    };

    if let Some(region_id) = payload.region_id {
        if region_id.trim().is_empty() {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "region_id cannot be empty" })),
            )
                .into_response());
        }
        criterion.region_id = region_id.trim().to_string();
    }
    if let Some(region_type) = payload.region_type {
        criterion.region_type = region_type;
    }
    if payload.min_price.is_some() {
        criterion.min_price = payload.min_price;
    }
    if payload.max_price.is_some() {
        criterion.max_price = payload.max_price;
    }
    if payload.min_beds.is_some() {
        criterion.min_beds = payload.min_beds;
    }
    if payload.min_baths.is_some() {
        criterion.min_baths = payload.min_baths;
    }
    if payload.property_types.is_some() {
        criterion.property_types = payload.property_types;
    }
    if let Some(is_active) = payload.is_active {
        criterion.is_active = is_active;
    }

    let updated = criteria_repo.update(&criterion).await?;
    Ok(Json(updated).into_response())
}

pub async fn delete_criterion(
    Path(id): Path<Uuid>,
    Extension(criteria_repo): Extension<Arc<SearchCriterionRepositoryImpl>>,
) -> Result<Response, AppError> {
    criteria_repo.delete(id).await?;
    Ok(Json(json!({ "deleted": true })).into_response())
}

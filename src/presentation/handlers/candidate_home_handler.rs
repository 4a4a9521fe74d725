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
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::candidate_home::{
    CandidateHome, CandidateSource, CandidateStatus, NewCandidate,
};
use crate::domain::repositories::candidate_home_repository::CandidateHomeRepository;
use crate::domain::services::send_service::{SendRequest, SendService};
use crate::infrastructure::repositories::candidate_home_repo_impl::CandidateHomeRepositoryImpl;
use crate::infrastructure::repositories::profile_repo_impl::ProfileRepositoryImpl;
use crate::infrastructure::repositories::saved_home_repo_impl::SavedHomeRepositoryImpl;
use crate::presentation::errors::AppError;
use crate::scraper::og_parser;
use crate::scraper::preview::ListingPreviewer;
use crate::utils::validators::is_http_url;

type AppSendService =
    SendService<CandidateHomeRepositoryImpl, SavedHomeRepositoryImpl, ProfileRepositoryImpl>;

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCandidatePayload {
    pub url: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusPayload {
    pub ids: Vec<Uuid>,
    pub status: String,
}

#[derive(Deserialize)]
pub struct UpdateNotesPayload {
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct SendPayload {
    pub candidate_ids: Vec<Uuid>,
    pub client_id: Option<Uuid>,
    pub email: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub save_to_client: bool,
}

/// 按状态列出候选房源
///
/// saved 过滤会把 sent 一并带出来，让已发送的房源继续
/// 出现在"已保存"标签下。
pub async fn list_candidates(
    Query(query): Query<ListQuery>,
    Extension(candidate_repo): Extension<Arc<CandidateHomeRepositoryImpl>>,
) -> Result<Response, AppError> {
    let statuses = match query.status.as_deref() {
        None => Vec::new(),
        Some(raw) => match CandidateStatus::filter_from_str(raw) {
            Some(statuses) => statuses,
            None => {
                return Ok((
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("invalid status filter: {}", raw) })),
                )
                    .into_response());
            }
        },
    };

    let homes = candidate_repo.list_by_statuses(&statuses).await?;
    Ok(Json(homes).into_response())
}

/// 手动添加一个候选房源
///
/// 添加时顺手做一次预览抓取来补全字段；抓取失败不影响添加。
pub async fn create_candidate(
    Extension(candidate_repo): Extension<Arc<CandidateHomeRepositoryImpl>>,
    Extension(previewer): Extension<Arc<ListingPreviewer>>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<Response, AppError> {
    if !is_http_url(&payload.url) {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "url must be a valid http(s) link" })),
        )
            .into_response());
    }

    let preview = previewer.preview(&payload.url).await;
    let price_numeric = preview.price.as_deref().and_then(og_parser::price_to_numeric);

    let mut home = CandidateHome::from_listing(
        NewCandidate {
            url: payload.url,
            title: preview.title,
            image_url: preview.image_url,
            address: preview.address,
            price: preview.price,
            price_numeric,
            ..Default::default()
        },
        CandidateSource::Manual,
    );
    home.notes = payload.notes;

    // Conflict maps to 409 for an already-tracked URL
    let home = candidate_repo.create(&home).await?;

    info!("Manually added candidate home {} ({})", home.id, home.url);
    Ok((StatusCode::CREATED, Json(home)).into_response())
}

/// 批量更新候选房源状态
///
/// 允许集合是 {new, saved, dismissed}；sent 只能由发送
/// 操作写入，这里一律拒绝。
pub async fn update_status(
    Extension(candidate_repo): Extension<Arc<CandidateHomeRepositoryImpl>>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<Response, AppError> {
    if payload.ids.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "ids cannot be empty" })),
        )
            .into_response());
    }

    let status: CandidateStatus = match payload.status.parse() {
        Ok(status) => status,
        Err(()) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("invalid status: {}", payload.status) })),
            )
                .into_response());
        }
    };

    if !status.is_assignable() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "status 'sent' is set by the send action only" })),
        )
            .into_response());
    }

    let updated = candidate_repo
        .update_status_bulk(&payload.ids, status)
        .await?;

    Ok(Json(json!({ "updated": updated })).into_response())
}

pub async fn update_notes(
    Path(id): Path<Uuid>,
    Extension(candidate_repo): Extension<Arc<CandidateHomeRepositoryImpl>>,
    Json(payload): Json<UpdateNotesPayload>,
) -> Result<Response, AppError> {
    let home = candidate_repo.update_notes(id, payload.notes).await?;
    Ok(Json(home).into_response())
}

pub async fn delete_candidate(
    Path(id): Path<Uuid>,
    Extension(candidate_repo): Extension<Arc<CandidateHomeRepositoryImpl>>,
) -> Result<Response, AppError> {
    candidate_repo.delete(id).await?;
    Ok(Json(json!({ "deleted": true })).into_response())
}

/// 把选中的候选房源发送给客户或邮箱
pub async fn send_candidates(
    Extension(send_service): Extension<Arc<AppSendService>>,
    Json(payload): Json<SendPayload>,
) -> Result<Response, AppError> {
    let outcome = send_service
        .execute(SendRequest {
            candidate_ids: payload.candidate_ids,
            client_id: payload.client_id,
            email: payload.email,
            message: payload.message,
            save_to_client: payload.save_to_client,
        })
        .await?;

    Ok(Json(outcome).into_response())
}

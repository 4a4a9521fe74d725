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

use crate::domain::models::message::Message;
use crate::domain::models::profile::{Profile, Role};
use crate::domain::repositories::message_repository::MessageRepository;
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::infrastructure::repositories::message_repo_impl::MessageRepositoryImpl;
use crate::infrastructure::repositories::profile_repo_impl::ProfileRepositoryImpl;
use crate::presentation::errors::AppError;

#[derive(Deserialize)]
pub struct PostMessagePayload {
    pub content: String,
}

/// 经纪人读取某客户的消息线程
///
/// 读取的同时把客户发来的未读消息标记为已读。并发的双方
/// 同时读取会竞争这个标志位，但置位是幂等的，结果无害。
pub async fn admin_get_messages(
    Path(client_id): Path<Uuid>,
    Extension(profile): Extension<Profile>,
    Extension(message_repo): Extension<Arc<MessageRepositoryImpl>>,
    Extension(profile_repo): Extension<Arc<ProfileRepositoryImpl>>,
) -> Result<Response, AppError> {
    let client = profile_repo.find_by_id(client_id).await?;
    if !matches!(client, Some(ref c) if c.role == Role::Client) {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "client not found" })),
        )
            .into_response());
    }

    message_repo
        .mark_read_from_counterpart(client_id, profile.id)
        .await?;
    let thread = message_repo.thread_for_client(client_id).await?;

    Ok(Json(thread).into_response())
}

pub async fn admin_post_message(
    Path(client_id): Path<Uuid>,
    Extension(profile): Extension<Profile>,
    Extension(message_repo): Extension<Arc<MessageRepositoryImpl>>,
    Extension(profile_repo): Extension<Arc<ProfileRepositoryImpl>>,
    Json(payload): Json<PostMessagePayload>,
) -> Result<Response, AppError> {
    if payload.content.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "content cannot be empty" })),
        )
            .into_response());
    }

    let client = profile_repo.find_by_id(client_id).await?;
    if !matches!(client, Some(ref c) if c.role == Role::Client) {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "client not found" })),
        )
            .into_response());
    }

    let message = Message::new(client_id, profile.id, payload.content);
    let message = message_repo.create(&message).await?;

    Ok((StatusCode::CREATED, Json(message)).into_response())
}

/// 客户读取自己的消息线程
///
/// 读取的同时把经纪人发来的未读消息标记为已读。
pub async fn portal_get_messages(
    Extension(profile): Extension<Profile>,
    Extension(message_repo): Extension<Arc<MessageRepositoryImpl>>,
) -> Result<Response, AppError> {
    message_repo
        .mark_read_from_counterpart(profile.id, profile.id)
        .await?;
    let thread = message_repo.thread_for_client(profile.id).await?;

    Ok(Json(thread).into_response())
}

pub async fn portal_post_message(
    Extension(profile): Extension<Profile>,
    Extension(message_repo): Extension<Arc<MessageRepositoryImpl>>,
    Json(payload): Json<PostMessagePayload>,
) -> Result<Response, AppError> {
    if payload.content.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "content cannot be empty" })),
        )
            .into_response());
    }

    let message = Message::new(profile.id, profile.id, payload.content);
    let message = message_repo.create(&message).await?;

    Ok((StatusCode::CREATED, Json(message)).into_response())
}

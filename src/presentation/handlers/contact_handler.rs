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
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::config::settings::Settings;
use crate::infrastructure::email::{EmailClient, OutgoingEmail};
use crate::presentation::errors::AppError;
use crate::utils::email_template::{build_contact_email, build_newsletter_email};
use crate::utils::validators::is_valid_email;

#[derive(Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct NewsletterPayload {
    pub email: String,
}

/// 联系表单
///
/// 校验通过后给经纪人发一封通知邮件。邮件服务未配置时
/// 只记录日志，仍然返回200。
pub async fn contact(
    Extension(email_client): Extension<Arc<EmailClient>>,
    Extension(settings): Extension<Arc<Settings>>,
    Json(payload): Json<ContactPayload>,
) -> Result<Response, AppError> {
    if payload.name.trim().is_empty() || payload.message.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name and message cannot be empty" })),
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

    let html = build_contact_email(&payload.name, &payload.email, &payload.message);
    let delivered = email_client
        .send(&OutgoingEmail {
            to: settings.email.agent_address.clone(),
            subject: format!("New inquiry from {}", payload.name.trim()),
            html,
        })
        .await?;

    info!(
        "Contact form submission from {} (delivered: {})",
        payload.email, delivered
    );

    Ok(Json(json!({ "success": true })).into_response())
}

/// 订阅表单
pub async fn newsletter(
    Extension(email_client): Extension<Arc<EmailClient>>,
    Extension(settings): Extension<Arc<Settings>>,
    Json(payload): Json<NewsletterPayload>,
) -> Result<Response, AppError> {
    if !is_valid_email(&payload.email) {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid email address" })),
        )
            .into_response());
    }

    let html = build_newsletter_email(&payload.email);
    email_client
        .send(&OutgoingEmail {
            to: settings.email.agent_address.clone(),
            subject: "New newsletter signup".to_string(),
            html,
        })
        .await?;

    Ok(Json(json!({ "success": true })).into_response())
}

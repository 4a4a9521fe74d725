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
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::config::settings::Settings;
use crate::domain::services::ingestion_service::IngestionService;
use crate::infrastructure::repositories::candidate_home_repo_impl::CandidateHomeRepositoryImpl;
use crate::infrastructure::repositories::search_criterion_repo_impl::SearchCriterionRepositoryImpl;
use crate::presentation::errors::AppError;

type AppIngestionService =
    IngestionService<SearchCriterionRepositoryImpl, CandidateHomeRepositoryImpl>;

/// 定时摄取端点
///
/// 由外部调度器触发，用共享密钥做Bearer认证。逐条处理
/// 启用的搜索条件并返回每个条件的结果摘要。
pub async fn run_candidate_ingestion(
    Extension(ingestion): Extension<Arc<AppIngestionService>>,
    Extension(settings): Extension<Arc<Settings>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token == settings.cron.secret)
        .unwrap_or(false);

    if !authorized {
        warn!("Cron endpoint called with a bad or missing secret");
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid cron secret" })),
        )
            .into_response());
    }

    let results = ingestion.run().await?;
    Ok(Json(json!({ "results": results })).into_response())
}

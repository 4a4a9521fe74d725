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
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::scraper::og_parser::ListingPreview;
use crate::scraper::preview::ListingPreviewer;

#[derive(Deserialize)]
pub struct PreviewPayload {
    pub url: String,
}

/// 预览一个房源链接
///
/// 预览是尽力而为的增强：无法抓取或解析的URL返回全空字段，
/// 永远不返回错误状态。
pub async fn preview(
    Extension(previewer): Extension<Arc<ListingPreviewer>>,
    Json(payload): Json<PreviewPayload>,
) -> impl IntoResponse {
    let preview: ListingPreview = previewer.preview(&payload.url).await;
    Json(preview)
}

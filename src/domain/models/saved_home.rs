// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 收藏房源实体
///
/// 客户收藏到自己名下的房源书签。每个客户对同一房源URL
/// 只能收藏一次（数据库唯一约束 `(client_id, url)`）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedHome {
    /// 收藏唯一标识符
    pub id: Uuid,
    /// 所属客户ID
    pub client_id: Uuid,
    /// 房源页面URL
    pub url: String,
    /// 房源标题（可选）
    pub title: Option<String>,
    /// 房源图片URL（可选）
    pub image_url: Option<String>,
    /// 房源地址（可选）
    pub address: Option<String>,
    /// 价格展示串（可选）
    pub price: Option<String>,
    /// 备注（可选）
    pub notes: Option<String>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl SavedHome {
    /// 创建一条新的收藏记录
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        client_id: Uuid,
        url: String,
        title: Option<String>,
        image_url: Option<String>,
        address: Option<String>,
        price: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            url,
            title,
            image_url,
            address,
            price,
            notes,
            created_at: Utc::now().into(),
        }
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 搜索条件实体
///
/// 经纪人配置的一组抓取参数，仅由定时抓取任务消费。
/// 定时任务按顺序处理所有 is_active 的条件，每个条件
/// 对应一次搜索API调用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriterion {
    /// 条件唯一标识符
    pub id: Uuid,
    /// 搜索区域ID（搜索API的region_id参数）
    pub region_id: String,
    /// 区域类型编码（搜索API的region_type参数）
    pub region_type: i32,
    /// 最低价格（可选）
    pub min_price: Option<i64>,
    /// 最高价格（可选）
    pub max_price: Option<i64>,
    /// 最少卧室数（可选）
    pub min_beds: Option<i32>,
    /// 最少卫生间数（可选）
    pub min_baths: Option<i32>,
    /// 物业类型编码，逗号分隔（可选，搜索API的uipt参数）
    pub property_types: Option<String>,
    /// 是否参与定时抓取
    pub is_active: bool,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl SearchCriterion {
    /// 创建一个新的搜索条件
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        region_id: String,
        region_type: i32,
        min_price: Option<i64>,
        max_price: Option<i64>,
        min_beds: Option<i32>,
        min_baths: Option<i32>,
        property_types: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            region_id,
            region_type,
            min_price,
            max_price,
            min_beds,
            min_baths,
            property_types,
            is_active: true,
            created_at: Utc::now().into(),
        }
    }
}

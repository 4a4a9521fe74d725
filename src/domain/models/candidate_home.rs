// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 候选房源实体
///
/// 表示等待经纪人筛选的一个房源条目，由定时抓取任务写入
/// （来源为搜索API）或由经纪人手动添加（来源为manual）。
/// 房源URL全局唯一，重复写入会被忽略。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateHome {
    /// 候选房源唯一标识符
    pub id: Uuid,
    /// 房源页面URL，全局唯一
    pub url: String,
    /// 房源标题（可选）
    pub title: Option<String>,
    /// 房源图片URL（可选）
    pub image_url: Option<String>,
    /// 房源地址（可选）
    pub address: Option<String>,
    /// 价格展示串，例如 "$750,000"（可选）
    pub price: Option<String>,
    /// 价格数值，用于排序和过滤（可选）
    pub price_numeric: Option<i64>,
    /// 卧室数（可选）
    pub beds: Option<f64>,
    /// 卫生间数（可选）
    pub baths: Option<f64>,
    /// 建筑面积（平方英尺，可选）
    pub sqft: Option<i64>,
    /// 筛选状态
    pub status: CandidateStatus,
    /// 条目来源
    pub source: CandidateSource,
    /// 经纪人备注（可选）
    pub notes: Option<String>,
    /// 发送目标客户ID（仅在发送后设置，可为空）
    pub sent_to_client_id: Option<Uuid>,
    /// 发送时间（仅在发送后设置）
    pub sent_at: Option<DateTime<FixedOffset>>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 候选房源状态枚举
///
/// 状态机很简单：new/saved/dismissed 三个状态可以通过批量
/// 状态更新接口互相转换；sent 只能通过发送操作到达，普通
/// 状态更新接口拒绝它。按 saved 过滤时 sent 也会被包含，
/// 这样已发送的房源仍然显示在"已保存"标签下。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    /// 新条目，尚未筛选
    #[default]
    New,
    /// 经纪人标记为保留
    Saved,
    /// 经纪人标记为忽略
    Dismissed,
    /// 已发送给客户，仅由发送操作设置
    Sent,
}

impl CandidateStatus {
    /// 判断状态是否允许通过批量更新接口设置
    ///
    /// sent 不在允许集合中，它只能由发送操作写入。
    pub fn is_assignable(&self) -> bool {
        !matches!(self, CandidateStatus::Sent)
    }

    /// 将过滤参数展开为状态集合
    ///
    /// saved 过滤隐含包含 sent；all 表示不过滤。
    ///
    /// # 返回值
    ///
    /// * `Some(vec)` - 需要匹配的状态集合，空集合表示不过滤
    /// * `None` - 无法识别的过滤参数
    pub fn filter_from_str(s: &str) -> Option<Vec<CandidateStatus>> {
        match s {
            "all" => Some(Vec::new()),
            "saved" => Some(vec![CandidateStatus::Saved, CandidateStatus::Sent]),
            other => other.parse().ok().map(|status| vec![status]),
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CandidateStatus::New => write!(f, "new"),
            CandidateStatus::Saved => write!(f, "saved"),
            CandidateStatus::Dismissed => write!(f, "dismissed"),
            CandidateStatus::Sent => write!(f, "sent"),
        }
    }
}

impl FromStr for CandidateStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(CandidateStatus::New),
            "saved" => Ok(CandidateStatus::Saved),
            "dismissed" => Ok(CandidateStatus::Dismissed),
            "sent" => Ok(CandidateStatus::Sent),
            _ => Err(()),
        }
    }
}

/// 候选房源来源枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// 经纪人手动添加
    #[default]
    Manual,
    /// 定时任务从搜索API抓取
    Redfin,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CandidateSource::Manual => write!(f, "manual"),
            CandidateSource::Redfin => write!(f, "redfin"),
        }
    }
}

impl FromStr for CandidateSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(CandidateSource::Manual),
            "redfin" => Ok(CandidateSource::Redfin),
            _ => Err(()),
        }
    }
}

/// 抓取产出的候选房源字段集合
///
/// 搜索API客户端和预览抓取都会产出这个结构，由仓库层
/// 以"URL冲突即忽略"的方式落库。所有字段都按尽力提取，
/// 提取不到即为空。
#[derive(Debug, Clone, Default)]
pub struct NewCandidate {
    pub url: String,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub price: Option<String>,
    pub price_numeric: Option<i64>,
    pub beds: Option<f64>,
    pub baths: Option<f64>,
    pub sqft: Option<i64>,
}

impl CandidateHome {
    /// 从抓取结果创建一个候选房源
    ///
    /// # 参数
    ///
    /// * `listing` - 抓取产出的字段集合
    /// * `source` - 条目来源
    ///
    /// # 返回值
    ///
    /// 返回状态为 new 的候选房源实例
    pub fn from_listing(listing: NewCandidate, source: CandidateSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: listing.url,
            title: listing.title,
            image_url: listing.image_url,
            address: listing.address,
            price: listing.price,
            price_numeric: listing.price_numeric,
            beds: listing.beds,
            baths: listing.baths,
            sqft: listing.sqft,
            status: CandidateStatus::New,
            source,
            notes: None,
            sent_to_client_id: None,
            sent_at: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }
}

#[cfg(test)]
#[path = "candidate_home_test.rs"]
mod tests;

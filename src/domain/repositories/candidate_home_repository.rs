// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::candidate_home::{CandidateHome, CandidateStatus};
use crate::domain::repositories::profile_repository::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// 候选房源仓库特质
///
/// 定义筛选队列的数据访问接口
#[async_trait]
pub trait CandidateHomeRepository: Send + Sync {
    /// 创建一个候选房源，URL冲突时返回 Conflict
    async fn create(&self, home: &CandidateHome) -> Result<CandidateHome, RepositoryError>;
    /// 创建一个候选房源，URL冲突时静默忽略
    ///
    /// 定时抓取任务依赖这个语义实现幂等：同一批源数据
    /// 跑两次不会产生新行。
    ///
    /// # 返回值
    ///
    /// 实际插入返回 true，因重复被忽略返回 false
    async fn insert_ignore_duplicate_url(
        &self,
        home: &CandidateHome,
    ) -> Result<bool, RepositoryError>;
    /// 根据ID查找候选房源
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CandidateHome>, RepositoryError>;
    /// 根据ID集合查找候选房源
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<CandidateHome>, RepositoryError>;
    /// 按状态集合列出候选房源，空集合表示不过滤，按创建时间倒序
    async fn list_by_statuses(
        &self,
        statuses: &[CandidateStatus],
    ) -> Result<Vec<CandidateHome>, RepositoryError>;
    /// 批量更新状态
    ///
    /// # 返回值
    ///
    /// 实际被更新的行数
    async fn update_status_bulk(
        &self,
        ids: &[Uuid],
        status: CandidateStatus,
    ) -> Result<u64, RepositoryError>;
    /// 将候选房源标记为已发送
    ///
    /// 同时写入发送时间与目标客户ID（仅按邮箱发送时为空）。
    async fn mark_sent(
        &self,
        ids: &[Uuid],
        client_id: Option<Uuid>,
        sent_at: DateTime<FixedOffset>,
    ) -> Result<u64, RepositoryError>;
    /// 更新备注
    async fn update_notes(
        &self,
        id: Uuid,
        notes: Option<String>,
    ) -> Result<CandidateHome, RepositoryError>;
    /// 删除候选房源
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

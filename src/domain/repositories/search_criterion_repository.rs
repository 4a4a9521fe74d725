// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_criterion::SearchCriterion;
use crate::domain::repositories::profile_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 搜索条件仓库特质
///
/// 定义抓取配置的数据访问接口
#[async_trait]
pub trait SearchCriterionRepository: Send + Sync {
    /// 创建新搜索条件
    async fn create(&self, criterion: &SearchCriterion)
        -> Result<SearchCriterion, RepositoryError>;
    /// 根据ID查找搜索条件
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SearchCriterion>, RepositoryError>;
    /// 列出全部搜索条件
    async fn list(&self) -> Result<Vec<SearchCriterion>, RepositoryError>;
    /// 列出启用中的搜索条件
    async fn list_active(&self) -> Result<Vec<SearchCriterion>, RepositoryError>;
    /// 更新搜索条件
    async fn update(&self, criterion: &SearchCriterion)
        -> Result<SearchCriterion, RepositoryError>;
    /// 删除搜索条件
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

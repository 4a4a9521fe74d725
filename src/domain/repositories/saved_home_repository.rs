// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::saved_home::SavedHome;
use crate::domain::repositories::profile_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 收藏房源仓库特质
///
/// 定义客户收藏的数据访问接口
#[async_trait]
pub trait SavedHomeRepository: Send + Sync {
    /// 创建一条收藏，(client_id, url) 冲突时返回 Conflict
    async fn create(&self, home: &SavedHome) -> Result<SavedHome, RepositoryError>;
    /// 创建一条收藏，(client_id, url) 冲突时静默忽略
    ///
    /// # 返回值
    ///
    /// 实际插入返回 true，因重复被忽略返回 false
    async fn insert_ignore_duplicate(&self, home: &SavedHome) -> Result<bool, RepositoryError>;
    /// 列出某客户的所有收藏，按创建时间倒序
    async fn list_for_client(&self, client_id: Uuid) -> Result<Vec<SavedHome>, RepositoryError>;
    /// 根据ID查找收藏
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SavedHome>, RepositoryError>;
    /// 删除收藏
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

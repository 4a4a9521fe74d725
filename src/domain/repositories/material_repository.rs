// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::material::Material;
use crate::domain::repositories::profile_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 资料仓库特质
///
/// 定义共享文件元信息的数据访问接口
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// 创建新资料记录
    async fn create(&self, material: &Material) -> Result<Material, RepositoryError>;
    /// 根据ID查找资料
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Material>, RepositoryError>;
    /// 列出某客户的所有资料
    async fn list_for_client(&self, client_id: Uuid) -> Result<Vec<Material>, RepositoryError>;
    /// 删除资料记录
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

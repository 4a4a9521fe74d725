// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::profile::Profile;
use crate::domain::repositories::profile_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 会话令牌仓库特质
///
/// 定义认证令牌数据访问接口。令牌在客户开户时签发，
/// 认证中间件在每个请求上解析它。
#[async_trait]
pub trait SessionTokenRepository: Send + Sync {
    /// 为档案签发一个新令牌
    async fn create(&self, profile_id: Uuid) -> Result<String, RepositoryError>;
    /// 根据令牌解析档案
    async fn find_profile_by_token(&self, token: &str)
        -> Result<Option<Profile>, RepositoryError>;
    /// 删除档案名下的所有令牌
    async fn delete_for_profile(&self, profile_id: Uuid) -> Result<u64, RepositoryError>;
}

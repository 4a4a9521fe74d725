// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::profile::Profile;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一约束冲突
    #[error("Record already exists")]
    Conflict,
}

/// 档案仓库特质
///
/// 定义用户档案数据访问接口
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// 创建新档案
    async fn create(&self, profile: &Profile) -> Result<Profile, RepositoryError>;
    /// 根据ID查找档案
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepositoryError>;
    /// 根据邮箱查找档案
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepositoryError>;
    /// 列出所有客户档案
    async fn list_clients(&self) -> Result<Vec<Profile>, RepositoryError>;
    /// 更新档案
    async fn update(&self, profile: &Profile) -> Result<Profile, RepositoryError>;
    /// 删除档案
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

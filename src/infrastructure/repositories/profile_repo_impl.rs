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

use crate::domain::models::profile::Profile;
use crate::domain::repositories::profile_repository::{ProfileRepository, RepositoryError};
use crate::infrastructure::database::entities::profile as profile_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

/// 档案仓库实现
///
/// 基于SeaORM实现的用户档案数据访问层
#[derive(Clone)]
pub struct ProfileRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryImpl {
    /// 创建新的档案仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<profile_entity::Model> for Profile {
    fn from(model: profile_entity::Model) -> Self {
        Self {
            id: model.id,
            role: model.role.parse().unwrap_or_default(),
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
        }
    }
}

impl From<Profile> for profile_entity::ActiveModel {
    fn from(profile: Profile) -> Self {
        Self {
            id: Set(profile.id),
            role: Set(profile.role.to_string()),
            full_name: Set(profile.full_name),
            email: Set(profile.email),
            phone: Set(profile.phone),
            created_at: Set(profile.created_at),
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn create(&self, profile: &Profile) -> Result<Profile, RepositoryError> {
        let model: profile_entity::ActiveModel = profile.clone().into();

        match model.insert(self.db.as_ref()).await {
            Ok(inserted) => Ok(inserted.into()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(RepositoryError::Conflict),
                _ => Err(RepositoryError::Database(e)),
            },
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepositoryError> {
        let model = profile_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepositoryError> {
        let model = profile_entity::Entity::find()
            .filter(profile_entity::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list_clients(&self) -> Result<Vec<Profile>, RepositoryError> {
        let models = profile_entity::Entity::find()
            .filter(profile_entity::Column::Role.eq("client"))
            .order_by_desc(profile_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, profile: &Profile) -> Result<Profile, RepositoryError> {
        let model: profile_entity::ActiveModel = profile.clone().into();

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let model = profile_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        model.delete(self.db.as_ref()).await?;
        Ok(())
    }
}

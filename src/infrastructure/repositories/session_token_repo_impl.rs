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
use crate::domain::repositories::profile_repository::RepositoryError;
use crate::domain::repositories::session_token_repository::SessionTokenRepository;
use crate::infrastructure::database::entities::profile as profile_entity;
use crate::infrastructure::database::entities::session_token as token_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

/// 会话令牌仓库实现
#[derive(Clone)]
pub struct SessionTokenRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SessionTokenRepositoryImpl {
    /// 创建新的会话令牌仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionTokenRepository for SessionTokenRepositoryImpl {
    async fn create(&self, profile_id: Uuid) -> Result<String, RepositoryError> {
        let token = Uuid::new_v4().simple().to_string();

        let model = token_entity::ActiveModel {
            token: Set(token.clone()),
            profile_id: Set(profile_id),
            created_at: Set(Utc::now().into()),
        };
        model.insert(self.db.as_ref()).await?;

        Ok(token)
    }

    async fn find_profile_by_token(
        &self,
        token: &str,
    ) -> Result<Option<Profile>, RepositoryError> {
        let row = token_entity::Entity::find_by_id(token.to_string())
            .one(self.db.as_ref())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let profile = profile_entity::Entity::find_by_id(row.profile_id)
            .one(self.db.as_ref())
            .await?;

        Ok(profile.map(Into::into))
    }

    async fn delete_for_profile(&self, profile_id: Uuid) -> Result<u64, RepositoryError> {
        let res = token_entity::Entity::delete_many()
            .filter(token_entity::Column::ProfileId.eq(profile_id))
            .exec(self.db.as_ref())
            .await?;

        Ok(res.rows_affected)
    }
}

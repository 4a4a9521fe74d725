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

use crate::domain::models::saved_home::SavedHome;
use crate::domain::repositories::profile_repository::RepositoryError;
use crate::domain::repositories::saved_home_repository::SavedHomeRepository;
use crate::infrastructure::database::entities::saved_home as saved_home_entity;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

/// 收藏房源仓库实现
#[derive(Clone)]
pub struct SavedHomeRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SavedHomeRepositoryImpl {
    /// 创建新的收藏房源仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<saved_home_entity::Model> for SavedHome {
    fn from(model: saved_home_entity::Model) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            url: model.url,
            title: model.title,
            image_url: model.image_url,
            address: model.address,
            price: model.price,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}

impl From<SavedHome> for saved_home_entity::ActiveModel {
    fn from(home: SavedHome) -> Self {
        Self {
            id: Set(home.id),
            client_id: Set(home.client_id),
            url: Set(home.url),
            title: Set(home.title),
            image_url: Set(home.image_url),
            address: Set(home.address),
            price: Set(home.price),
            notes: Set(home.notes),
            created_at: Set(home.created_at),
        }
    }
}

#[async_trait]
impl SavedHomeRepository for SavedHomeRepositoryImpl {
    async fn create(&self, home: &SavedHome) -> Result<SavedHome, RepositoryError> {
        let model: saved_home_entity::ActiveModel = home.clone().into();

        match model.insert(self.db.as_ref()).await {
            Ok(inserted) => Ok(inserted.into()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(RepositoryError::Conflict),
                _ => Err(RepositoryError::Database(e)),
            },
        }
    }

    async fn insert_ignore_duplicate(&self, home: &SavedHome) -> Result<bool, RepositoryError> {
        let model: saved_home_entity::ActiveModel = home.clone().into();

        let res = saved_home_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    saved_home_entity::Column::ClientId,
                    saved_home_entity::Column::Url,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(self.db.as_ref())
            .await;

        match res {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_for_client(&self, client_id: Uuid) -> Result<Vec<SavedHome>, RepositoryError> {
        let models = saved_home_entity::Entity::find()
            .filter(saved_home_entity::Column::ClientId.eq(client_id))
            .order_by_desc(saved_home_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SavedHome>, RepositoryError> {
        let model = saved_home_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let model = saved_home_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        model.delete(self.db.as_ref()).await?;
        Ok(())
    }
}

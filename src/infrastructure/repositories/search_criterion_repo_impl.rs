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

use crate::domain::models::search_criterion::SearchCriterion;
use crate::domain::repositories::profile_repository::RepositoryError;
use crate::domain::repositories::search_criterion_repository::SearchCriterionRepository;
use crate::infrastructure::database::entities::search_criterion as criterion_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 搜索条件仓库实现
#[derive(Clone)]
pub struct SearchCriterionRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SearchCriterionRepositoryImpl {
    /// 创建新的搜索条件仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<criterion_entity::Model> for SearchCriterion {
    fn from(model: criterion_entity::Model) -> Self {
        Self {
            id: model.id,
            region_id: model.region_id,
            region_type: model.region_type,
            min_price: model.min_price,
            max_price: model.max_price,
            min_beds: model.min_beds,
            min_baths: model.min_baths,
            property_types: model.property_types,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<SearchCriterion> for criterion_entity::ActiveModel {
    fn from(criterion: SearchCriterion) -> Self {
        Self {
            id: Set(criterion.id),
            region_id: Set(criterion.region_id),
            region_type: Set(criterion.region_type),
            min_price: Set(criterion.min_price),
            max_price: Set(criterion.max_price),
            min_beds: Set(criterion.min_beds),
            min_baths: Set(criterion.min_baths),
            property_types: Set(criterion.property_types),
            is_active: Set(criterion.is_active),
            created_at: Set(criterion.created_at),
        }
    }
}

#[async_trait]
impl SearchCriterionRepository for SearchCriterionRepositoryImpl {
    async fn create(
        &self,
        criterion: &SearchCriterion,
    ) -> Result<SearchCriterion, RepositoryError> {
        let model: criterion_entity::ActiveModel = criterion.clone().into();

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SearchCriterion>, RepositoryError> {
        let model = criterion_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<SearchCriterion>, RepositoryError> {
        let models = criterion_entity::Entity::find()
            .order_by_asc(criterion_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_active(&self) -> Result<Vec<SearchCriterion>, RepositoryError> {
        let models = criterion_entity::Entity::find()
            .filter(criterion_entity::Column::IsActive.eq(true))
            .order_by_asc(criterion_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        criterion: &SearchCriterion,
    ) -> Result<SearchCriterion, RepositoryError> {
        let model: criterion_entity::ActiveModel = criterion.clone().into();

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let model = criterion_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        model.delete(self.db.as_ref()).await?;
        Ok(())
    }
}

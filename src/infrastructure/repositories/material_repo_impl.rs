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

use crate::domain::models::material::Material;
use crate::domain::repositories::material_repository::MaterialRepository;
use crate::domain::repositories::profile_repository::RepositoryError;
use crate::infrastructure::database::entities::material as material_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 资料仓库实现
#[derive(Clone)]
pub struct MaterialRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl MaterialRepositoryImpl {
    /// 创建新的资料仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<material_entity::Model> for Material {
    fn from(model: material_entity::Model) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            file_name: model.file_name,
            file_path: model.file_path,
            file_size: model.file_size,
            file_type: model.file_type,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

impl From<Material> for material_entity::ActiveModel {
    fn from(material: Material) -> Self {
        Self {
            id: Set(material.id),
            client_id: Set(material.client_id),
            file_name: Set(material.file_name),
            file_path: Set(material.file_path),
            file_size: Set(material.file_size),
            file_type: Set(material.file_type),
            description: Set(material.description),
            created_at: Set(material.created_at),
        }
    }
}

#[async_trait]
impl MaterialRepository for MaterialRepositoryImpl {
    async fn create(&self, material: &Material) -> Result<Material, RepositoryError> {
        let model: material_entity::ActiveModel = material.clone().into();

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Material>, RepositoryError> {
        let model = material_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list_for_client(&self, client_id: Uuid) -> Result<Vec<Material>, RepositoryError> {
        let models = material_entity::Entity::find()
            .filter(material_entity::Column::ClientId.eq(client_id))
            .order_by_desc(material_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let model = material_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        model.delete(self.db.as_ref()).await?;
        Ok(())
    }
}

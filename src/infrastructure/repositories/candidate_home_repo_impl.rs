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

use crate::domain::models::candidate_home::{CandidateHome, CandidateStatus};
use crate::domain::repositories::candidate_home_repository::CandidateHomeRepository;
use crate::domain::repositories::profile_repository::RepositoryError;
use crate::infrastructure::database::entities::candidate_home as candidate_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

/// 候选房源仓库实现
///
/// 基于SeaORM实现的筛选队列数据访问层
#[derive(Clone)]
pub struct CandidateHomeRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CandidateHomeRepositoryImpl {
    /// 创建新的候选房源仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<candidate_entity::Model> for CandidateHome {
    fn from(model: candidate_entity::Model) -> Self {
        Self {
            id: model.id,
            url: model.url,
            title: model.title,
            image_url: model.image_url,
            address: model.address,
            price: model.price,
            price_numeric: model.price_numeric,
            beds: model.beds,
            baths: model.baths,
            sqft: model.sqft,
            status: model.status.parse().unwrap_or_default(),
            source: model.source.parse().unwrap_or_default(),
            notes: model.notes,
            sent_to_client_id: model.sent_to_client_id,
            sent_at: model.sent_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CandidateHome> for candidate_entity::ActiveModel {
    fn from(home: CandidateHome) -> Self {
        Self {
            id: Set(home.id),
            url: Set(home.url),
            title: Set(home.title),
            image_url: Set(home.image_url),
            address: Set(home.address),
            price: Set(home.price),
            price_numeric: Set(home.price_numeric),
            beds: Set(home.beds),
            baths: Set(home.baths),
            sqft: Set(home.sqft),
            status: Set(home.status.to_string()),
            source: Set(home.source.to_string()),
            notes: Set(home.notes),
            sent_to_client_id: Set(home.sent_to_client_id),
            sent_at: Set(home.sent_at),
            created_at: Set(home.created_at),
            updated_at: Set(home.updated_at),
        }
    }
}

#[async_trait]
impl CandidateHomeRepository for CandidateHomeRepositoryImpl {
    async fn create(&self, home: &CandidateHome) -> Result<CandidateHome, RepositoryError> {
        let model: candidate_entity::ActiveModel = home.clone().into();

        match model.insert(self.db.as_ref()).await {
            Ok(inserted) => Ok(inserted.into()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(RepositoryError::Conflict),
                _ => Err(RepositoryError::Database(e)),
            },
        }
    }

    async fn insert_ignore_duplicate_url(
        &self,
        home: &CandidateHome,
    ) -> Result<bool, RepositoryError> {
        let model: candidate_entity::ActiveModel = home.clone().into();

        let res = candidate_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::column(candidate_entity::Column::Url)
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

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CandidateHome>, RepositoryError> {
        let model = candidate_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<CandidateHome>, RepositoryError> {
        let models = candidate_entity::Entity::find()
            .filter(candidate_entity::Column::Id.is_in(ids.to_vec()))
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_statuses(
        &self,
        statuses: &[CandidateStatus],
    ) -> Result<Vec<CandidateHome>, RepositoryError> {
        let mut query = candidate_entity::Entity::find();

        if !statuses.is_empty() {
            let values: Vec<String> = statuses.iter().map(ToString::to_string).collect();
            query = query.filter(candidate_entity::Column::Status.is_in(values));
        }

        let models = query
            .order_by_desc(candidate_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_status_bulk(
        &self,
        ids: &[Uuid],
        status: CandidateStatus,
    ) -> Result<u64, RepositoryError> {
        let now: DateTime<FixedOffset> = Utc::now().into();

        let res = candidate_entity::Entity::update_many()
            .col_expr(
                candidate_entity::Column::Status,
                Expr::value(status.to_string()),
            )
            .col_expr(candidate_entity::Column::UpdatedAt, Expr::value(now))
            .filter(candidate_entity::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;

        Ok(res.rows_affected)
    }

    async fn mark_sent(
        &self,
        ids: &[Uuid],
        client_id: Option<Uuid>,
        sent_at: DateTime<FixedOffset>,
    ) -> Result<u64, RepositoryError> {
        let res = candidate_entity::Entity::update_many()
            .col_expr(
                candidate_entity::Column::Status,
                Expr::value(CandidateStatus::Sent.to_string()),
            )
            .col_expr(
                candidate_entity::Column::SentToClientId,
                Expr::value(client_id),
            )
            .col_expr(candidate_entity::Column::SentAt, Expr::value(Some(sent_at)))
            .col_expr(candidate_entity::Column::UpdatedAt, Expr::value(sent_at))
            .filter(candidate_entity::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;

        Ok(res.rows_affected)
    }

    async fn update_notes(
        &self,
        id: Uuid,
        notes: Option<String>,
    ) -> Result<CandidateHome, RepositoryError> {
        let model = candidate_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut active: candidate_entity::ActiveModel = model.into();
        active.notes = Set(notes);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let model = candidate_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        model.delete(self.db.as_ref()).await?;
        Ok(())
    }
}

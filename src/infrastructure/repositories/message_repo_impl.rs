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

use crate::domain::models::message::Message;
use crate::domain::repositories::message_repository::MessageRepository;
use crate::domain::repositories::profile_repository::RepositoryError;
use crate::infrastructure::database::entities::message as message_entity;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 消息仓库实现
#[derive(Clone)]
pub struct MessageRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryImpl {
    /// 创建新的消息仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<message_entity::Model> for Message {
    fn from(model: message_entity::Model) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            sender_id: model.sender_id,
            content: model.content,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}

impl From<Message> for message_entity::ActiveModel {
    fn from(message: Message) -> Self {
        Self {
            id: Set(message.id),
            client_id: Set(message.client_id),
            sender_id: Set(message.sender_id),
            content: Set(message.content),
            is_read: Set(message.is_read),
            created_at: Set(message.created_at),
        }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryImpl {
    async fn create(&self, message: &Message) -> Result<Message, RepositoryError> {
        let model: message_entity::ActiveModel = message.clone().into();

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn thread_for_client(&self, client_id: Uuid) -> Result<Vec<Message>, RepositoryError> {
        let models = message_entity::Entity::find()
            .filter(message_entity::Column::ClientId.eq(client_id))
            .order_by_asc(message_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn mark_read_from_counterpart(
        &self,
        client_id: Uuid,
        reader_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        // Idempotent flag set; concurrent reads from both sides are harmless
        let res = message_entity::Entity::update_many()
            .col_expr(message_entity::Column::IsRead, Expr::value(true))
            .filter(message_entity::Column::ClientId.eq(client_id))
            .filter(message_entity::Column::SenderId.ne(reader_id))
            .filter(message_entity::Column::IsRead.eq(false))
            .exec(self.db.as_ref())
            .await?;

        Ok(res.rows_affected)
    }

    async fn unread_count(
        &self,
        client_id: Uuid,
        reader_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        let count = message_entity::Entity::find()
            .filter(message_entity::Column::ClientId.eq(client_id))
            .filter(message_entity::Column::SenderId.ne(reader_id))
            .filter(message_entity::Column::IsRead.eq(false))
            .count(self.db.as_ref())
            .await?;

        Ok(count)
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::message::Message;
use crate::domain::repositories::profile_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 消息仓库特质
///
/// 定义对话消息的数据访问接口
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// 追加一条消息
    async fn create(&self, message: &Message) -> Result<Message, RepositoryError>;
    /// 按时间顺序读取某客户的完整线程
    async fn thread_for_client(&self, client_id: Uuid) -> Result<Vec<Message>, RepositoryError>;
    /// 将线程中对方发送的未读消息标记为已读
    ///
    /// reader_id 为当前读取者的档案ID，只有发送者不是
    /// 读取者本人的消息会被置位。重复调用是幂等的。
    async fn mark_read_from_counterpart(
        &self,
        client_id: Uuid,
        reader_id: Uuid,
    ) -> Result<u64, RepositoryError>;
    /// 统计线程中对方发送的未读消息数
    async fn unread_count(&self, client_id: Uuid, reader_id: Uuid)
        -> Result<u64, RepositoryError>;
}

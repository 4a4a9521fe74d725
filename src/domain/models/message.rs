// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 消息实体
///
/// 每个客户有一条扁平的消息线程，由经纪人和该客户共享。
/// 消息只能追加，不支持编辑或删除。`is_read` 在对方读取
/// 线程时被置位。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// 消息唯一标识符
    pub id: Uuid,
    /// 线程所属客户ID
    pub client_id: Uuid,
    /// 发送者档案ID（经纪人或客户本人）
    pub sender_id: Uuid,
    /// 消息内容
    pub content: String,
    /// 对方是否已读
    pub is_read: bool,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl Message {
    /// 创建一条新消息
    ///
    /// # 参数
    ///
    /// * `client_id` - 线程所属客户ID
    /// * `sender_id` - 发送者档案ID
    /// * `content` - 消息内容
    pub fn new(client_id: Uuid, sender_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            sender_id,
            content,
            is_read: false,
            created_at: Utc::now().into(),
        }
    }
}

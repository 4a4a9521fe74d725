// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 资料文件实体
///
/// 表示经纪人共享给某个客户的一份文件。数据库记录只保存
/// 文件的元信息，文件内容本身存放在对象存储中，`file_path`
/// 是存储层的键。删除记录时必须同时删除存储中的文件。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// 资料唯一标识符
    pub id: Uuid,
    /// 所属客户ID
    pub client_id: Uuid,
    /// 原始文件名
    pub file_name: String,
    /// 对象存储中的键
    pub file_path: String,
    /// 文件大小（字节）
    pub file_size: i64,
    /// 文件MIME类型
    pub file_type: String,
    /// 文件描述（可选）
    pub description: Option<String>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl Material {
    /// 创建一个新的资料记录
    ///
    /// 存储键的格式为 `materials/<client_id>/<id>/<file_name>`，
    /// 以便同名文件互不覆盖。
    pub fn new(
        client_id: Uuid,
        file_name: String,
        file_size: i64,
        file_type: String,
        description: Option<String>,
    ) -> Self {
        let id = Uuid::new_v4();
        let file_path = format!("materials/{}/{}/{}", client_id, id, file_name);
        Self {
            id,
            client_id,
            file_name,
            file_path,
            file_size,
            file_type,
            description,
            created_at: Utc::now().into(),
        }
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 用户档案实体
///
/// 表示一个认证用户的身份记录。每个请求的授权检查都会
/// 读取档案的角色字段，角色决定了用户可以访问哪些端点。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// 档案唯一标识符
    pub id: Uuid,
    /// 用户角色，决定端点访问权限
    pub role: Role,
    /// 用户全名
    pub full_name: String,
    /// 电子邮箱地址
    pub email: String,
    /// 电话号码（可选）
    pub phone: Option<String>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

/// 用户角色枚举
///
/// 系统只有两种角色：经纪人（admin）和客户（client）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// 经纪人，可访问管理端点
    Admin,
    /// 客户，可访问自己的门户数据
    #[default]
    Client,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Client => write!(f, "client"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "client" => Ok(Role::Client),
            _ => Err(()),
        }
    }
}

impl Profile {
    /// 创建一个新的客户档案
    ///
    /// # 参数
    ///
    /// * `full_name` - 客户全名
    /// * `email` - 客户邮箱
    /// * `phone` - 客户电话（可选）
    ///
    /// # 返回值
    ///
    /// 返回新创建的客户档案实例
    pub fn new_client(full_name: String, email: String, phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Client,
            full_name,
            email,
            phone,
            created_at: Utc::now().into(),
        }
    }

    /// 判断该档案是否为经纪人
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

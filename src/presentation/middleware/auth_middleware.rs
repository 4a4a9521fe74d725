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

use crate::domain::models::profile::{Profile, Role};
use crate::infrastructure::database::entities::profile as profile_entity;
use crate::infrastructure::database::entities::session_token as token_entity;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;
use tracing::debug;

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 数据库连接
    pub db: Arc<DatabaseConnection>,
}

/// 授权判定结果
///
/// 所有受保护端点共用这一个判定，替代在每个处理器里
/// 重复的内联守卫。
#[derive(Debug)]
pub enum AuthDecision {
    /// 通过，携带调用者档案
    Authorized(Profile),
    /// 没有有效会话
    Unauthorized,
    /// 会话有效但角色不符
    Forbidden,
}

/// 从请求头解析会话令牌并加载调用者档案
///
/// # 参数
///
/// * `db` - 数据库连接
/// * `headers` - 请求头
/// * `required` - 要求的角色，None表示任意已认证角色
///
/// # 返回值
///
/// * `Ok(AuthDecision)` - 授权判定
/// * `Err(DbErr)` - 查询会话或档案失败
pub async fn authorize(
    db: &DatabaseConnection,
    headers: &HeaderMap,
    required: Option<Role>,
) -> Result<AuthDecision, DbErr> {
    let Some(token) = bearer_token(headers) else {
        return Ok(AuthDecision::Unauthorized);
    };

    let Some(row) = token_entity::Entity::find_by_id(token).one(db).await? else {
        debug!("Session token not found");
        return Ok(AuthDecision::Unauthorized);
    };

    let Some(profile) = profile_entity::Entity::find_by_id(row.profile_id).one(db).await? else {
        debug!("Profile {} for session token is gone", row.profile_id);
        return Ok(AuthDecision::Unauthorized);
    };

    let profile: Profile = profile.into();

    if let Some(required) = required {
        if profile.role != required {
            return Ok(AuthDecision::Forbidden);
        }
    }

    Ok(AuthDecision::Authorized(profile))
}

/// 提取Bearer令牌
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())?;

    auth_header
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

/// 认证中间件
///
/// 解析请求中的会话令牌并把调用者档案注入请求扩展。
/// 没有有效会话的请求以401拒绝。
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(StatusCode)` - 认证失败的状态码
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match authorize(state.db.as_ref(), req.headers(), None).await {
        Ok(AuthDecision::Authorized(profile)) => {
            req.extensions_mut().insert(profile);
            Ok(next.run(req).await)
        }
        Ok(AuthDecision::Unauthorized) | Ok(AuthDecision::Forbidden) => {
            Err(StatusCode::UNAUTHORIZED)
        }
        Err(e) => {
            tracing::error!("Database error checking session token: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// 角色校验
pub fn check_role(profile: &Profile, required: Role) -> AuthDecision {
    if profile.role == required {
        AuthDecision::Authorized(profile.clone())
    } else {
        AuthDecision::Forbidden
    }
}

/// 管理员角色中间件
///
/// 必须叠加在认证中间件之内，对非管理员调用者返回403。
pub async fn require_admin(req: Request, next: Next) -> Result<Response, StatusCode> {
    let Some(profile) = req.extensions().get::<Profile>() else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    match check_role(profile, Role::Admin) {
        AuthDecision::Authorized(_) => Ok(next.run(req).await),
        _ => Err(StatusCode::FORBIDDEN),
    }
}

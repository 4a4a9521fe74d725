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

use crate::domain::models::profile::Profile;
use crate::domain::models::saved_home::SavedHome;
use crate::domain::repositories::candidate_home_repository::CandidateHomeRepository;
use crate::domain::repositories::profile_repository::{ProfileRepository, RepositoryError};
use crate::domain::repositories::saved_home_repository::SavedHomeRepository;
use crate::infrastructure::email::{EmailClient, EmailError, OutgoingEmail};
use crate::utils::email_template::build_homes_email;
use crate::utils::validators::is_valid_email;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// 发送错误类型
#[derive(Error, Debug)]
pub enum SendError {
    /// 请求参数无效
    #[error("Validation error: {0}")]
    Validation(String),
    /// 目标客户不存在
    #[error("Client not found")]
    ClientNotFound,
    /// 选中的候选房源不存在
    #[error("No matching candidate homes")]
    NoCandidates,
    /// 仓库错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// 邮件错误
    #[error(transparent)]
    Email(#[from] EmailError),
}

/// 发送请求参数
#[derive(Debug, Clone)]
pub struct SendRequest {
    /// 要发送的候选房源ID集合
    pub candidate_ids: Vec<Uuid>,
    /// 目标客户ID（可选）
    pub client_id: Option<Uuid>,
    /// 目标邮箱地址（可选，优先于客户邮箱）
    pub email: Option<String>,
    /// 经纪人的私人留言（可选）
    pub message: Option<String>,
    /// 是否同时复制到目标客户的收藏
    pub save_to_client: bool,
}

/// 发送结果
#[derive(Debug, Clone, Serialize)]
pub struct SendOutcome {
    /// 实际收件地址
    pub recipient: String,
    /// 被标记为已发送的候选房源数
    pub sent: usize,
    /// 新复制到客户收藏的条数
    pub saved: usize,
    /// 邮件是否实际发出（未配置服务商时为false）
    pub email_delivered: bool,
}

/// 候选房源发送服务
///
/// 发送流程有三个副作用：投递邮件、可选地把房源复制到客户
/// 收藏、把源行标记为已发送。三者之间没有事务保证，中途失败
/// 会留下部分完成但每行仍然一致的状态；重新发送只会重新
/// upsert和重新盖章，所以这是可接受的。
pub struct SendService<H, S, P>
where
    H: CandidateHomeRepository,
    S: SavedHomeRepository,
    P: ProfileRepository,
{
    /// 候选房源仓库
    candidate_repo: Arc<H>,
    /// 收藏房源仓库
    saved_repo: Arc<S>,
    /// 档案仓库
    profile_repo: Arc<P>,
    /// 邮件客户端
    email_client: Arc<EmailClient>,
}

impl<H, S, P> SendService<H, S, P>
where
    H: CandidateHomeRepository,
    S: SavedHomeRepository,
    P: ProfileRepository,
{
    /// 创建新的发送服务实例
    pub fn new(
        candidate_repo: Arc<H>,
        saved_repo: Arc<S>,
        profile_repo: Arc<P>,
        email_client: Arc<EmailClient>,
    ) -> Self {
        Self {
            candidate_repo,
            saved_repo,
            profile_repo,
            email_client,
        }
    }

    /// 执行发送
    ///
    /// # 参数
    ///
    /// * `request` - 发送请求参数
    ///
    /// # 返回值
    ///
    /// * `Ok(SendOutcome)` - 发送结果
    /// * `Err(SendError)` - 校验或执行失败
    pub async fn execute(&self, request: SendRequest) -> Result<SendOutcome, SendError> {
        if request.candidate_ids.is_empty() {
            return Err(SendError::Validation(
                "candidate_ids cannot be empty".to_string(),
            ));
        }

        let client = self.resolve_client(request.client_id).await?;
        let recipient = self.resolve_recipient(&request, client.as_ref())?;

        let candidates = self.candidate_repo.find_by_ids(&request.candidate_ids).await?;
        if candidates.is_empty() {
            return Err(SendError::NoCandidates);
        }

        let html = build_homes_email(request.message.as_deref(), &candidates);
        let email_delivered = self
            .email_client
            .send(&OutgoingEmail {
                to: recipient.clone(),
                subject: "Homes picked for you".to_string(),
                html,
            })
            .await?;

        // Fork a copy into the client's saved collection, ignoring
        // listings the client already bookmarked
        let mut saved = 0;
        if request.save_to_client {
            if let Some(client) = &client {
                for candidate in &candidates {
                    let home = SavedHome::new(
                        client.id,
                        candidate.url.clone(),
                        candidate.title.clone(),
                        candidate.image_url.clone(),
                        candidate.address.clone(),
                        candidate.price.clone(),
                        candidate.notes.clone(),
                    );
                    if self.saved_repo.insert_ignore_duplicate(&home).await? {
                        saved += 1;
                    }
                }
            }
        }

        let found_ids: Vec<Uuid> = candidates.iter().map(|c| c.id).collect();
        let sent = self
            .candidate_repo
            .mark_sent(
                &found_ids,
                client.as_ref().map(|c| c.id),
                Utc::now().into(),
            )
            .await? as usize;

        info!(
            "Sent {} candidate homes to {} ({} copied to saved homes)",
            sent, recipient, saved
        );

        Ok(SendOutcome {
            recipient,
            sent,
            saved,
            email_delivered,
        })
    }

    /// 解析目标客户档案
    async fn resolve_client(
        &self,
        client_id: Option<Uuid>,
    ) -> Result<Option<Profile>, SendError> {
        let Some(client_id) = client_id else {
            return Ok(None);
        };

        match self.profile_repo.find_by_id(client_id).await? {
            Some(profile) => Ok(Some(profile)),
            None => Err(SendError::ClientNotFound),
        }
    }

    /// 解析实际收件地址
    ///
    /// 显式给出的邮箱优先，否则落到目标客户的邮箱；两者都
    /// 没有则拒绝。
    fn resolve_recipient(
        &self,
        request: &SendRequest,
        client: Option<&Profile>,
    ) -> Result<String, SendError> {
        if let Some(email) = request.email.as_deref().filter(|e| !e.is_empty()) {
            if !is_valid_email(email) {
                return Err(SendError::Validation(format!(
                    "invalid recipient email: {}",
                    email
                )));
            }
            return Ok(email.to_string());
        }

        match client {
            Some(client) => Ok(client.email.clone()),
            None => Err(SendError::Validation(
                "either client_id or email is required".to_string(),
            )),
        }
    }
}

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

use crate::config::settings::EmailSettings;
use metrics::counter;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// 邮件错误类型
#[derive(Error, Debug)]
pub enum EmailError {
    /// 请求错误
    #[error("Email request error: {0}")]
    Request(#[from] reqwest::Error),
    /// 服务商返回非2xx
    #[error("Email provider returned status {0}")]
    Status(u16),
}

/// 一封待发送的邮件
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    /// 收件人地址
    pub to: String,
    /// 邮件主题
    pub subject: String,
    /// HTML正文
    pub html: String,
}

/// 事务性邮件客户端
///
/// 通过HTTP JSON调用托管邮件服务发送邮件。API密钥未配置时
/// 只记录日志并按成功处理，这是本地和演示环境的有意降级，
/// 不是错误。
pub struct EmailClient {
    /// HTTP客户端
    client: Client,
    /// 邮件服务API端点
    api_url: String,
    /// API密钥（可选）
    api_key: Option<String>,
    /// 发件人地址
    from_address: String,
}

impl EmailClient {
    /// 创建新的邮件客户端实例
    ///
    /// # 参数
    ///
    /// * `settings` - 邮件配置
    pub fn new(settings: &EmailSettings) -> Self {
        Self {
            client: Client::new(),
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            from_address: settings.from_address.clone(),
        }
    }

    /// 判断邮件服务是否已配置
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// 发送一封邮件
    ///
    /// # 参数
    ///
    /// * `email` - 待发送的邮件
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 已实际发送
    /// * `Ok(false)` - 因未配置密钥而跳过（仅记录日志）
    /// * `Err(EmailError)` - 发送失败
    pub async fn send(&self, email: &OutgoingEmail) -> Result<bool, EmailError> {
        let Some(api_key) = &self.api_key else {
            info!(
                "Email provider not configured, logging instead of sending: to={} subject={}",
                email.to, email.subject
            );
            counter!("emails_skipped_total").increment(1);
            return Ok(false);
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&json!({
                "from": self.from_address,
                "to": [email.to],
                "subject": email.subject,
                "html": email.html,
            }))
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Email delivery to {} failed with status {}",
                email.to, status
            );
            return Err(EmailError::Status(status.as_u16()));
        }

        counter!("emails_sent_total").increment(1);
        Ok(true)
    }
}

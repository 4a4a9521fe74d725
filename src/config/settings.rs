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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器、存储、邮件、定时任务和抓取等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 邮件配置
    pub email: EmailSettings,
    /// 定时任务配置
    pub cron: CronSettings,
    /// 抓取配置
    pub scraper: ScraperSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 存储配置设置
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    /// 存储类型 (local)
    pub storage_type: String,
    /// 本地存储路径 (当 type=local 时使用)
    pub local_path: Option<String>,
}

/// 邮件配置设置
#[derive(Debug, Deserialize)]
pub struct EmailSettings {
    /// 邮件服务API端点
    pub api_url: String,
    /// 邮件服务API密钥（未配置时仅记录日志，不实际发送）
    pub api_key: Option<String>,
    /// 发件人地址
    pub from_address: String,
    /// 经纪人通知收件地址（联系表单和订阅通知的接收方）
    pub agent_address: String,
}

/// 定时任务配置设置
#[derive(Debug, Deserialize)]
pub struct CronSettings {
    /// 定时任务端点的共享密钥
    pub secret: String,
}

/// 抓取配置设置
#[derive(Debug, Deserialize)]
pub struct ScraperSettings {
    /// 房源搜索API端点
    pub search_api_url: String,
    /// 房源站点基础URL（用于补全相对链接）
    pub listing_base_url: String,
    /// 交互式预览抓取超时时间（秒）
    pub preview_timeout_secs: u64,
    /// 批量抓取超时时间（秒）
    pub ingest_timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default Storage settings
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "./storage")?
            // Default Email settings
            .set_default("email.api_url", "https://api.resend.com/emails")?
            .set_default("email.from_address", "noreply@example.com")?
            .set_default("email.agent_address", "agent@example.com")?
            // Default Cron settings
            .set_default("cron.secret", "your-cron-secret")?
            // Default Scraper settings
            .set_default(
                "scraper.search_api_url",
                "https://www.redfin.com/stingray/api/gis",
            )?
            .set_default("scraper.listing_base_url", "https://www.redfin.com")?
            .set_default("scraper.preview_timeout_secs", 5)?
            .set_default("scraper.ingest_timeout_secs", 15)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("HOMEPORT")
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

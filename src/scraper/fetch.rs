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

use std::time::Duration;
use thiserror::Error;

/// 浏览器UA，部分房源站点会拒绝默认的程序化UA
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求错误（网络错误、超时等）
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    /// 非2xx响应
    #[error("Unexpected status code: {0}")]
    Status(u16),
}

/// 页面抓取器
///
/// 基于reqwest实现的HTTP页面抓取器。客户端在启动时构造一次，
/// 由调用方显式注入，每次调用单独指定超时时间。
pub struct PageFetcher {
    /// HTTP客户端
    client: reqwest::Client,
}

impl PageFetcher {
    /// 创建新的页面抓取器实例
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// 抓取页面内容
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `timeout` - 本次请求的超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 页面正文
    /// * `Err(FetchError)` - 抓取过程中出现的错误
    pub async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let response = self.client.get(url).timeout(timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;

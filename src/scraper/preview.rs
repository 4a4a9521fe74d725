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

use crate::scraper::fetch::PageFetcher;
use crate::scraper::og_parser::{self, ListingPreview};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// 房源预览服务
///
/// 组合页面抓取与Open Graph解析。预览是尽力而为的增强，
/// 任何失败（超时、网络错误、非2xx、解析不到字段）都降级
/// 为空字段，从不向调用方抛错。
pub struct ListingPreviewer {
    /// 页面抓取器
    fetcher: Arc<PageFetcher>,
    /// 单次预览的超时时间
    timeout: Duration,
}

impl ListingPreviewer {
    /// 创建新的预览服务实例
    ///
    /// # 参数
    ///
    /// * `fetcher` - 页面抓取器
    /// * `timeout` - 单次预览的超时时间
    pub fn new(fetcher: Arc<PageFetcher>, timeout: Duration) -> Self {
        Self { fetcher, timeout }
    }

    /// 预览一个房源页面
    ///
    /// # 参数
    ///
    /// * `url` - 房源页面URL
    ///
    /// # 返回值
    ///
    /// 返回预览结构；失败时所有字段为空
    pub async fn preview(&self, url: &str) -> ListingPreview {
        match self.fetcher.fetch(url, self.timeout).await {
            Ok(html) => og_parser::parse_listing(&html),
            Err(e) => {
                debug!("Preview fetch failed for {}: {}", url, e);
                ListingPreview::default()
            }
        }
    }
}

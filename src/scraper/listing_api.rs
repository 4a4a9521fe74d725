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

use crate::domain::models::candidate_home::NewCandidate;
use crate::domain::models::search_criterion::SearchCriterion;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// 搜索API在JSON正文前拼接的反劫持前缀
const NON_JSON_PREFIX: &str = "{}&&";

/// 搜索API错误类型
#[derive(Error, Debug)]
pub enum SearchApiError {
    /// 请求错误
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    /// 非2xx响应
    #[error("Unexpected status code: {0}")]
    Status(u16),
    /// 响应体解析失败
    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 房源搜索API客户端
///
/// 调用第三方房源搜索API，将搜索条件映射为查询参数，
/// 并把嵌套的响应结构防御性地压平成候选房源字段集合。
pub struct ListingSearchClient {
    /// HTTP客户端
    client: reqwest::Client,
    /// 搜索API端点
    api_url: String,
    /// 房源站点基础URL，用于补全相对链接
    base_url: String,
    /// 单次调用超时时间
    timeout: Duration,
}

impl ListingSearchClient {
    /// 创建新的搜索API客户端实例
    ///
    /// # 参数
    ///
    /// * `api_url` - 搜索API端点
    /// * `base_url` - 房源站点基础URL
    /// * `timeout` - 单次调用超时时间
    pub fn new(api_url: String, base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url,
            base_url,
            timeout,
        }
    }

    /// 按搜索条件查询房源
    ///
    /// # 参数
    ///
    /// * `criterion` - 搜索条件
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<NewCandidate>)` - 解析出的候选房源列表
    /// * `Err(SearchApiError)` - 调用或解析过程中出现的错误
    pub async fn search(
        &self,
        criterion: &SearchCriterion,
    ) -> Result<Vec<NewCandidate>, SearchApiError> {
        let params = query_params(criterion);

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_search_response(&body, &self.base_url)
    }
}

/// 将搜索条件映射为API查询参数
pub fn query_params(criterion: &SearchCriterion) -> Vec<(String, String)> {
    let mut params = vec![
        ("al".to_string(), "1".to_string()),
        ("v".to_string(), "8".to_string()),
        ("region_id".to_string(), criterion.region_id.clone()),
        (
            "region_type".to_string(),
            criterion.region_type.to_string(),
        ),
        ("num_homes".to_string(), "50".to_string()),
        ("status".to_string(), "9".to_string()),
    ];

    if let Some(min_price) = criterion.min_price {
        params.push(("min_price".to_string(), min_price.to_string()));
    }
    if let Some(max_price) = criterion.max_price {
        params.push(("max_price".to_string(), max_price.to_string()));
    }
    if let Some(min_beds) = criterion.min_beds {
        params.push(("num_beds".to_string(), min_beds.to_string()));
    }
    if let Some(min_baths) = criterion.min_baths {
        params.push(("num_baths".to_string(), min_baths.to_string()));
    }
    if let Some(property_types) = &criterion.property_types {
        params.push(("uipt".to_string(), property_types.clone()));
    }

    params
}

/// 去掉响应体前的非JSON前缀
pub fn strip_json_prefix(body: &str) -> &str {
    body.strip_prefix(NON_JSON_PREFIX).unwrap_or(body)
}

/// 搜索API响应结构
///
/// 所有字段都是可选的：第三方响应的任何一层都可能缺失，
/// 缺失的字段在映射时落为null，绝不让整个条目解析失败。
#[derive(Debug, Deserialize)]
struct SearchApiResponse {
    payload: Option<Payload>,
}

#[derive(Debug, Deserialize)]
struct Payload {
    homes: Option<Vec<HomeEntry>>,
}

#[derive(Debug, Deserialize)]
struct HomeEntry {
    #[serde(rename = "homeData")]
    home_data: Option<HomeData>,
}

#[derive(Debug, Deserialize)]
struct HomeData {
    url: Option<String>,
    #[serde(rename = "addressInfo")]
    address_info: Option<AddressInfo>,
    #[serde(rename = "priceInfo")]
    price_info: Option<PriceInfo>,
    #[serde(rename = "bedInfo")]
    bed_info: Option<BedInfo>,
    #[serde(rename = "bathInfo")]
    bath_info: Option<BathInfo>,
    #[serde(rename = "sqftInfo")]
    sqft_info: Option<SqftInfo>,
    #[serde(rename = "photosInfo")]
    photos_info: Option<PhotosInfo>,
}

#[derive(Debug, Deserialize)]
struct AddressInfo {
    #[serde(rename = "formattedStreetLine")]
    formatted_street_line: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriceInfo {
    // Sometimes a bare number, sometimes a quoted string
    amount: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct BedInfo {
    beds: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct BathInfo {
    #[serde(rename = "computedTotalBaths")]
    computed_total_baths: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SqftInfo {
    amount: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct PhotosInfo {
    #[serde(rename = "bestPhotoUrl")]
    best_photo_url: Option<String>,
}

/// 解析搜索API响应体为候选房源列表
///
/// # 参数
///
/// * `body` - 原始响应体（可能带非JSON前缀）
/// * `base_url` - 用于补全相对链接的站点基础URL
pub fn parse_search_response(
    body: &str,
    base_url: &str,
) -> Result<Vec<NewCandidate>, SearchApiError> {
    let response: SearchApiResponse = serde_json::from_str(strip_json_prefix(body))?;

    let homes = response
        .payload
        .and_then(|p| p.homes)
        .unwrap_or_default();

    let mut candidates = Vec::with_capacity(homes.len());
    for entry in homes {
        let Some(data) = entry.home_data else {
            continue;
        };
        // A listing without a URL cannot be deduplicated, skip it
        let Some(url) = data.url.filter(|u| !u.is_empty()) else {
            continue;
        };

        let url = if url.starts_with("http") {
            url
        } else {
            format!("{}{}", base_url.trim_end_matches('/'), url)
        };

        let address = data.address_info.as_ref().and_then(format_address);
        let price_numeric = data
            .price_info
            .as_ref()
            .and_then(|p| p.amount.as_ref())
            .and_then(value_to_i64);
        let price = price_numeric.map(format_price);
        let beds = data.bed_info.as_ref().and_then(|b| b.beds);
        let baths = data.bath_info.as_ref().and_then(|b| b.computed_total_baths);
        let sqft = data
            .sqft_info
            .as_ref()
            .and_then(|s| s.amount.as_ref())
            .and_then(value_to_i64);
        let image_url = data.photos_info.and_then(|p| p.best_photo_url);

        candidates.push(NewCandidate {
            url,
            title: address.clone(),
            image_url,
            address,
            price,
            price_numeric,
            beds,
            baths,
            sqft,
        });
    }

    Ok(candidates)
}

/// 将地址各部分拼成展示串
fn format_address(info: &AddressInfo) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(street) = info.formatted_street_line.as_ref().filter(|s| !s.is_empty()) {
        parts.push(street.clone());
    }
    if let Some(city) = info.city.as_ref().filter(|s| !s.is_empty()) {
        parts.push(city.clone());
    }
    match (&info.state, &info.zip) {
        (Some(state), Some(zip)) if !state.is_empty() => {
            parts.push(format!("{} {}", state, zip));
        }
        (Some(state), None) if !state.is_empty() => parts.push(state.clone()),
        (None, Some(zip)) if !zip.is_empty() => parts.push(zip.clone()),
        _ => {}
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// 防御性地把JSON值转成整数
///
/// 接受数字和带"$"与千分位逗号的字符串两种形态。
fn value_to_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => {
            let cleaned: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            if cleaned.is_empty() {
                None
            } else {
                cleaned.parse().ok()
            }
        }
        _ => None,
    }
}

/// 将价格数值格式化为带千分位的展示串
pub fn format_price(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
#[path = "listing_api_test.rs"]
mod tests;

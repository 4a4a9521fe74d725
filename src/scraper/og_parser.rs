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

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// 首个 "$数字(,数字)*" 形式的价格串，必须以数字结尾
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[0-9](?:[0-9,]*[0-9])?").expect("price regex must compile"));

/// 房源页面预览
///
/// 所有字段都是尽力提取的结果，提取不到即为空。
/// 预览失败永远不会对调用方抛错。
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingPreview {
    /// 页面标题（og:title）
    pub title: Option<String>,
    /// 首图URL（og:image）
    pub image_url: Option<String>,
    /// 页面描述（og:description）
    pub description: Option<String>,
    /// 从标题推导出的地址
    pub address: Option<String>,
    /// 从标题与描述中提取的价格串
    pub price: Option<String>,
}

/// 提取指定property的meta标签content值
///
/// 依次尝试两种属性顺序：property在前和content在前。
/// 提取到的值会做HTML实体解码并去除首尾空白。
///
/// # 参数
///
/// * `html` - 页面HTML文本
/// * `property` - meta标签的property值，例如 "og:title"
pub fn meta_content(html: &str, property: &str) -> Option<String> {
    let prop = regex::escape(property);
    let patterns = [
        format!(
            r#"<meta[^>]*property\s*=\s*["']{}["'][^>]*content\s*=\s*["']([^"']*)["']"#,
            prop
        ),
        format!(
            r#"<meta[^>]*content\s*=\s*["']([^"']*)["'][^>]*property\s*=\s*["']{}["']"#,
            prop
        ),
    ];

    for pattern in &patterns {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        if let Some(caps) = re.captures(html) {
            let value = html_escape::decode_html_entities(&caps[1]).trim().to_string();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    None
}

/// 提取文本中的第一个价格串
pub fn extract_price(text: &str) -> Option<String> {
    PRICE_RE.find(text).map(|m| m.as_str().to_string())
}

/// 将价格展示串转成数值
pub fn price_to_numeric(price: &str) -> Option<i64> {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// 从页面标题推导地址
///
/// 去掉末尾的站点名后缀（"... | Redfin" 一类），再移除已
/// 检测到的价格子串，最后清理残留的分隔符。
pub fn derive_address(title: &str, price: Option<&str>) -> Option<String> {
    let mut text = title.to_string();

    // Site name suffix comes after the last pipe
    if let Some(idx) = text.rfind(" | ") {
        text.truncate(idx);
    }

    if let Some(price) = price {
        text = text.replace(price, "");
    }

    let cleaned = text
        .trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '|' || c == ',')
        .to_string();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// 解析房源页面HTML为预览结构
///
/// # 参数
///
/// * `html` - 页面HTML文本
///
/// # 返回值
///
/// 返回解析出的预览结构，提取不到的字段为空
pub fn parse_listing(html: &str) -> ListingPreview {
    let title = meta_content(html, "og:title");
    let image_url = meta_content(html, "og:image");
    let description = meta_content(html, "og:description");

    let mut haystack = String::new();
    if let Some(title) = &title {
        haystack.push_str(title);
        haystack.push(' ');
    }
    if let Some(description) = &description {
        haystack.push_str(description);
    }
    let price = extract_price(&haystack);

    let address = title
        .as_deref()
        .and_then(|t| derive_address(t, price.as_deref()));

    ListingPreview {
        title,
        image_url,
        description,
        address,
        price,
    }
}

#[cfg(test)]
#[path = "og_parser_test.rs"]
mod tests;
